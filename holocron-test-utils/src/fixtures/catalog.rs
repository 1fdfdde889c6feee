use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterModel, PlanetModel, StarshipModel},
    TestContext,
};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_mock_character(&self, name: &str) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gender: ActiveValue::Set("male".to_string()),
                species: ActiveValue::Set("Human".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                climate: ActiveValue::Set("arid".to_string()),
                population: ActiveValue::Set("200000".to_string()),
                terrain: ActiveValue::Set("desert".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_starship(&self, name: &str) -> Result<StarshipModel, TestError> {
        Ok(
            entity::prelude::Starship::insert(entity::starship::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                model: ActiveValue::Set("T-65 X-wing".to_string()),
                manufacturer: ActiveValue::Set("Incom Corporation".to_string()),
                crew: ActiveValue::Set("1".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
