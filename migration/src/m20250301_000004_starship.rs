use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starship::Table)
                    .if_not_exists()
                    .col(pk_auto(Starship::Id))
                    .col(string_len(Starship::Name, 100))
                    .col(string_len(Starship::Model, 100))
                    .col(string_len(Starship::Manufacturer, 100))
                    .col(string_len(Starship::Crew, 50))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Starship {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    Crew,
}
