use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::catalog::{
        character::CharacterRepository, planet::PlanetRepository, starship::StarshipRepository,
    },
    error::Error,
    model::catalog::{CatalogSeed, CharacterDto, PlanetDto, StarshipDto},
};

/// Number of rows inserted by [`CatalogService::seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Characters inserted
    pub characters: usize,
    /// Planets inserted
    pub planets: usize,
    /// Starships inserted
    pub starships: usize,
}

/// Service for the catalog reference data.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts every entry of a seed document.
    ///
    /// All inserts run in a single transaction, if any entry fails nothing is written.
    ///
    /// # Returns
    /// - `Ok(SeedSummary)` - Number of rows inserted per table
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn seed(&self, seed: &CatalogSeed) -> Result<SeedSummary, Error> {
        let txn = self.db.begin().await?;

        let character_repo = CharacterRepository::new(&txn);
        for character in &seed.characters {
            character_repo.create(character.clone()).await?;
        }

        let planet_repo = PlanetRepository::new(&txn);
        for planet in &seed.planets {
            planet_repo.create(planet.clone()).await?;
        }

        let starship_repo = StarshipRepository::new(&txn);
        for starship in &seed.starships {
            starship_repo.create(starship.clone()).await?;
        }

        txn.commit().await?;

        let summary = SeedSummary {
            characters: seed.characters.len(),
            planets: seed.planets.len(),
            starships: seed.starships.len(),
        };

        tracing::info!(
            "Seeded catalog with {} characters, {} planets and {} starships",
            summary.characters,
            summary.planets,
            summary.starships
        );

        Ok(summary)
    }

    /// Lists every character in the catalog.
    pub async fn list_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(Into::into).collect())
    }

    /// Lists every planet in the catalog.
    pub async fn list_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(Into::into).collect())
    }

    /// Lists every starship in the catalog.
    pub async fn list_starships(&self) -> Result<Vec<StarshipDto>, Error> {
        let starships = StarshipRepository::new(self.db).get_all().await?;

        Ok(starships.into_iter().map(Into::into).collect())
    }

    /// Deletes a character from the catalog.
    ///
    /// # Returns
    /// - `Ok(true)` - Character was deleted
    /// - `Ok(false)` - No character with the provided ID exists
    /// - `Err(Error::Constraint(ConstraintViolation::ForeignKey))` - A user still has it favorited
    pub async fn delete_character(&self, character_id: i32) -> Result<bool, Error> {
        let result = CharacterRepository::new(self.db)
            .delete(character_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a planet from the catalog, see [`Self::delete_character`].
    pub async fn delete_planet(&self, planet_id: i32) -> Result<bool, Error> {
        let result = PlanetRepository::new(self.db).delete(planet_id).await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a starship from the catalog, see [`Self::delete_character`].
    pub async fn delete_starship(&self, starship_id: i32) -> Result<bool, Error> {
        let result = StarshipRepository::new(self.db).delete(starship_id).await?;

        Ok(result.rows_affected > 0)
    }
}
