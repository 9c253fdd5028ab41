use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Composite index backing the admin listing order (date, time)
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_date_time")
                    .table(Reservations::Table)
                    .col(Reservations::Date)
                    .col(Reservations::Time)
                    .to_owned(),
            )
            .await?;

        // Indexes on the admin search columns
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_name")
                    .table(Reservations::Table)
                    .col(Reservations::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_email")
                    .table(Reservations::Table)
                    .col(Reservations::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_reservations_email",
            "idx_reservations_name",
            "idx_reservations_date_time",
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Reservations::Table)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Reservations {
    Table,
    Name,
    Email,
    Date,
    Time,
}
