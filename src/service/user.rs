use sea_orm::DatabaseConnection;

use crate::{
    data::{
        favorite::{
            character::FavoriteCharacterRepository, planet::FavoritePlanetRepository,
            starship::FavoriteStarshipRepository,
        },
        user::UserRepository,
    },
    error::Error,
    model::user::{NewUser, UserDto, UserFavoritesDto},
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `new_user` - Column values; the password must already be hashed
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user, without its password
    /// - `Err(Error::Constraint(ConstraintViolation::Unique))` - Email already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, new_user: NewUser) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db).create(new_user).await?;

        tracing::debug!("Created user ID {}", user.id);

        Ok(UserDto::from(user))
    }

    /// Retrieves a user for external exposure.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Retrieves a user together with everything they have favorited.
    ///
    /// # Returns
    /// - `Ok(Some(UserFavoritesDto))` - User found, favorite lists may be empty
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_favorites(&self, user_id: i32) -> Result<Option<UserFavoritesDto>, Error> {
        let user = match UserRepository::new(self.db).get(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let characters = FavoriteCharacterRepository::new(self.db)
            .get_characters_by_user_id(user.id)
            .await?;
        let planets = FavoritePlanetRepository::new(self.db)
            .get_planets_by_user_id(user.id)
            .await?;
        let starships = FavoriteStarshipRepository::new(self.db)
            .get_starships_by_user_id(user.id)
            .await?;

        Ok(Some(UserFavoritesDto {
            user: UserDto::from(user),
            characters: characters.into_iter().map(Into::into).collect(),
            planets: planets.into_iter().map(Into::into).collect(),
            starships: starships.into_iter().map(Into::into).collect(),
        }))
    }

    /// Deletes a user and, through the cascading foreign keys, all of their favorites.
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted
    /// - `Ok(false)` - No user with the provided ID exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        if result.rows_affected == 0 {
            tracing::debug!("Attempted to delete user ID {} which does not exist", user_id);

            return Ok(false);
        }

        tracing::info!("Deleted user ID {} and their favorites", user_id);

        Ok(true)
    }
}
