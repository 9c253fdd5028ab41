use models::reservation::NewReservation;
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: Date,
    pub time: Time,
    #[sea_orm(column_type = "Text")]
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.name)
    }
}

impl From<Model> for NewReservation {
    fn from(model: Model) -> Self {
        Self {
            name: model.name,
            email: model.email,
            phone: model.phone,
            date: model.date,
            time: model.time,
            message: model.message,
        }
    }
}

impl ActiveModel {
    /// Overwrites every user-editable column with the values in `reservation`
    pub fn apply(&mut self, reservation: NewReservation) {
        self.name = Set(reservation.name);
        self.email = Set(reservation.email);
        self.phone = Set(reservation.phone);
        self.date = Set(reservation.date);
        self.time = Set(reservation.time);
        self.message = Set(reservation.message);
    }
}

impl From<NewReservation> for ActiveModel {
    fn from(reservation: NewReservation) -> Self {
        let mut model = <Self as ActiveModelBehavior>::new();
        model.apply(reservation);
        model
    }
}
