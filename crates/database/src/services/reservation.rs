use crate::entities::reservation::{self, ActiveModel, Entity, Model};
use log::info;
use models::reservation::NewReservation;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct ReservationService;

impl ReservationService {
    /// Returns every reservation, oldest first
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(reservation::Column::Id)
            .all(db)
            .await
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Model, DbErr> {
        Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(
        db: &DatabaseConnection,
        reservation: NewReservation,
    ) -> Result<Model, DbErr> {
        let model = ActiveModel::from(reservation).insert(db).await?;
        info!("Created reservation {} for {}", model.id, model);
        Ok(model)
    }

    /// Replaces every field of an existing reservation
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        reservation: NewReservation,
    ) -> Result<Model, DbErr> {
        let existing = Self::get(db, id).await?;
        Self::save(db, existing, reservation).await
    }

    /// Writes `reservation` over a row already loaded with [`Self::get`]
    pub async fn save(
        db: &DatabaseConnection,
        existing: Model,
        reservation: NewReservation,
    ) -> Result<Model, DbErr> {
        let id = existing.id;
        let mut active: ActiveModel = existing.into();
        active.apply(reservation);

        let model = active.update(db).await?;
        info!("Updated reservation {id}");
        Ok(model)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        info!("Deleted reservation {id}");
        Ok(())
    }
}

fn not_found(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("reservation {id}"))
}
