use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::db::{FavoritePlanetModel, PlanetModel};

/// Repository for the `favorite_planet` table.
pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a planet to a user's favorites
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `planet_id` (`i32`): ID of the planet entry in the database
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, DbErr> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets a favorite link by ID
    pub async fn get(&self, favorite_id: i32) -> Result<Option<FavoritePlanetModel>, DbErr> {
        entity::prelude::FavoritePlanet::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets all favorite planet links for the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoritePlanetModel>, DbErr> {
        entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the planets a user has favorited, in the order they were favorited
    pub async fn get_planets_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .inner_join(entity::favorite_planet::Entity)
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite link by ID
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanet::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Deletes every link between the user and the planet
    pub async fn delete_by_user_and_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePlanet::delete_many()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .exec(self.db)
            .await
    }
}
