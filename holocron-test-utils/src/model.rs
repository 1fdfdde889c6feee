//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main holocron crate.

pub type UserModel = entity::user::Model;

pub type CharacterModel = entity::character::Model;

pub type PlanetModel = entity::planet::Model;

pub type StarshipModel = entity::starship::Model;

pub type FavoriteCharacterModel = entity::favorite_character::Model;

pub type FavoritePlanetModel = entity::favorite_planet::Model;

pub type FavoriteStarshipModel = entity::favorite_starship::Model;
