//! User DTOs.

use serde::{Deserialize, Serialize};

use crate::model::{
    catalog::{CharacterDto, PlanetDto, StarshipDto},
    db::UserModel,
};

/// External representation of a user.
///
/// Only the ID and email are exposed, the password hash never leaves the database layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    /// User ID
    pub id: i32,
    /// User email
    pub email: String,
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

impl From<&UserModel> for UserDto {
    fn from(user: &UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Column values for a new user.
///
/// `password` must already be hashed, it is stored as given.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    /// Unique login email
    pub email: String,
    /// Hashed credential
    pub password: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
}

/// A user along with every catalog item they have favorited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFavoritesDto {
    /// The user who owns the favorites
    pub user: UserDto,
    /// Favorited characters
    pub characters: Vec<CharacterDto>,
    /// Favorited planets
    pub planets: Vec<PlanetDto>,
    /// Favorited starships
    pub starships: Vec<StarshipDto>,
}
