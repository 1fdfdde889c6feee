use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::{
    catalog::NewPlanet,
    db::{PlanetModel, UserModel},
};

/// Repository for the `planet` table.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, new_planet: NewPlanet) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(new_planet.name),
            climate: ActiveValue::Set(new_planet.climate),
            population: ActiveValue::Set(new_planet.population),
            terrain: ActiveValue::Set(new_planet.terrain),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets a planet by ID
    pub async fn get(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every column of a planet
    ///
    /// Returns `Ok(None)` if no planet with the provided ID exists.
    pub async fn update(
        &self,
        planet_id: i32,
        new_planet: NewPlanet,
    ) -> Result<Option<PlanetModel>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.into_active_model();
        planet_am.name = ActiveValue::Set(new_planet.name);
        planet_am.climate = ActiveValue::Set(new_planet.climate);
        planet_am.population = ActiveValue::Set(new_planet.population);
        planet_am.terrain = ActiveValue::Set(new_planet.terrain);

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Fails with a foreign key error while any user still has the planet favorited.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }

    /// Gets every user who has favorited the planet
    pub async fn get_favorited_by(&self, planet_id: i32) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .inner_join(entity::favorite_planet::Entity)
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
