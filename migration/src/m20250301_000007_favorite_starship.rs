use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250301_000001_user::User, m20250301_000004_starship::Starship};

static IDX_FAVORITE_STARSHIP_USER_ID: &str = "idx-favorite_starship-user_id";
static IDX_FAVORITE_STARSHIP_STARSHIP_ID: &str = "idx-favorite_starship-starship_id";
static FK_FAVORITE_STARSHIP_USER_ID: &str = "fk-favorite_starship-user_id";
static FK_FAVORITE_STARSHIP_STARSHIP_ID: &str = "fk-favorite_starship-starship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteStarship::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteStarship::Id))
                    .col(integer(FavoriteStarship::UserId))
                    .col(integer(FavoriteStarship::StarshipId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_STARSHIP_USER_ID)
                            .from(FavoriteStarship::Table, FavoriteStarship::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_STARSHIP_STARSHIP_ID)
                            .from(FavoriteStarship::Table, FavoriteStarship::StarshipId)
                            .to(Starship::Table, Starship::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_STARSHIP_USER_ID)
                    .table(FavoriteStarship::Table)
                    .col(FavoriteStarship::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_STARSHIP_STARSHIP_ID)
                    .table(FavoriteStarship::Table)
                    .col(FavoriteStarship::StarshipId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_STARSHIP_STARSHIP_ID)
                    .table(FavoriteStarship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_STARSHIP_USER_ID)
                    .table(FavoriteStarship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteStarship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteStarship {
    Table,
    Id,
    UserId,
    StarshipId,
}
