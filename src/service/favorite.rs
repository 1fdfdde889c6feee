use sea_orm::DatabaseConnection;

use crate::{
    data::favorite::{
        character::FavoriteCharacterRepository, planet::FavoritePlanetRepository,
        starship::FavoriteStarshipRepository,
    },
    error::Error,
    model::db::{FavoriteCharacterModel, FavoritePlanetModel, FavoriteStarshipModel},
};

/// Service for adding and removing favorites.
///
/// No limits or uniqueness rules are applied, a user may favorite the same item
/// more than once.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a character to a user's favorites.
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterModel)` - The new favorite link
    /// - `Err(Error::Constraint(ConstraintViolation::ForeignKey))` - User or character does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, Error> {
        let favorite = FavoriteCharacterRepository::new(self.db)
            .create(user_id, character_id)
            .await?;

        tracing::debug!("User ID {} favorited character ID {}", user_id, character_id);

        Ok(favorite)
    }

    /// Removes a character from a user's favorites.
    ///
    /// Returns `Ok(false)` if the user had not favorited the character.
    pub async fn remove_character(&self, user_id: i32, character_id: i32) -> Result<bool, Error> {
        let result = FavoriteCharacterRepository::new(self.db)
            .delete_by_user_and_character(user_id, character_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds a planet to a user's favorites.
    ///
    /// # Returns
    /// - `Ok(FavoritePlanetModel)` - The new favorite link
    /// - `Err(Error::Constraint(ConstraintViolation::ForeignKey))` - User or planet does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, Error> {
        let favorite = FavoritePlanetRepository::new(self.db)
            .create(user_id, planet_id)
            .await?;

        tracing::debug!("User ID {} favorited planet ID {}", user_id, planet_id);

        Ok(favorite)
    }

    /// Removes a planet from a user's favorites.
    ///
    /// Returns `Ok(false)` if the user had not favorited the planet.
    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<bool, Error> {
        let result = FavoritePlanetRepository::new(self.db)
            .delete_by_user_and_planet(user_id, planet_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds a starship to a user's favorites.
    ///
    /// # Returns
    /// - `Ok(FavoriteStarshipModel)` - The new favorite link
    /// - `Err(Error::Constraint(ConstraintViolation::ForeignKey))` - User or starship does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_starship(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<FavoriteStarshipModel, Error> {
        let favorite = FavoriteStarshipRepository::new(self.db)
            .create(user_id, starship_id)
            .await?;

        tracing::debug!("User ID {} favorited starship ID {}", user_id, starship_id);

        Ok(favorite)
    }

    /// Removes a starship from a user's favorites.
    ///
    /// Returns `Ok(false)` if the user had not favorited the starship.
    pub async fn remove_starship(&self, user_id: i32, starship_id: i32) -> Result<bool, Error> {
        let result = FavoriteStarshipRepository::new(self.db)
            .delete_by_user_and_starship(user_id, starship_id)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
