//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the crate, making it easier to work with entities without importing from
//! the `entity` crate directly.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login email
/// - `password` - Hashed credential, never serialized
/// - `first_name`, `last_name` - Display name
/// - `created_at` - Timestamp when the account was created (UTC)
pub type UserModel = entity::user::Model;

/// Type alias for the character catalog model.
pub type CharacterModel = entity::character::Model;

/// Type alias for the planet catalog model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the starship catalog model.
pub type StarshipModel = entity::starship::Model;

/// Type alias for the favorite link between a user and a character.
///
/// # Fields (from `entity::favorite_character::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the user, cascades on delete
/// - `character_id` - Foreign key to the character, restricts delete
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Type alias for the favorite link between a user and a planet.
pub type FavoritePlanetModel = entity::favorite_planet::Model;

/// Type alias for the favorite link between a user and a starship.
pub type FavoriteStarshipModel = entity::favorite_starship::Model;
