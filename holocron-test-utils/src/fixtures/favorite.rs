use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoriteCharacterModel, FavoritePlanetModel, FavoriteStarshipModel},
    TestContext,
};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        Ok(entity::prelude::FavoriteCharacter::insert(
            entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        Ok(
            entity::prelude::FavoritePlanet::insert(entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_starship(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<FavoriteStarshipModel, TestError> {
        Ok(entity::prelude::FavoriteStarship::insert(
            entity::favorite_starship::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                starship_id: ActiveValue::Set(starship_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
