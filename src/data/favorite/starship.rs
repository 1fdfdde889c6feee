use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::db::{FavoriteStarshipModel, StarshipModel};

/// Repository for the `favorite_starship` table.
pub struct FavoriteStarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteStarshipRepository<'a, C> {
    /// Creates a new instance of [`FavoriteStarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a starship to a user's favorites
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `starship_id` (`i32`): ID of the starship entry in the database
    pub async fn create(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<FavoriteStarshipModel, DbErr> {
        let favorite = entity::favorite_starship::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            starship_id: ActiveValue::Set(starship_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets a favorite link by ID
    pub async fn get(&self, favorite_id: i32) -> Result<Option<FavoriteStarshipModel>, DbErr> {
        entity::prelude::FavoriteStarship::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets all favorite starship links for the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoriteStarshipModel>, DbErr> {
        entity::prelude::FavoriteStarship::find()
            .filter(entity::favorite_starship::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_starship::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the starships a user has favorited, in the order they were favorited
    pub async fn get_starships_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<StarshipModel>, DbErr> {
        entity::prelude::Starship::find()
            .inner_join(entity::favorite_starship::Entity)
            .filter(entity::favorite_starship::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_starship::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite link by ID
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteStarship::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Deletes every link between the user and the starship
    pub async fn delete_by_user_and_starship(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteStarship::delete_many()
            .filter(entity::favorite_starship::Column::UserId.eq(user_id))
            .filter(entity::favorite_starship::Column::StarshipId.eq(starship_id))
            .exec(self.db)
            .await
    }
}
