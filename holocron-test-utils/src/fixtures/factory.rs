//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of conversions and serialization.

use chrono::Utc;

use crate::{
    fixtures::user::TEST_PASSWORD_HASH,
    model::{CharacterModel, PlanetModel, StarshipModel, UserModel},
};

/// Create a mock user model with the provided ID and email.
///
/// The password column is always populated so serialization tests can check it is dropped.
pub fn mock_user_model(id: i32, email: &str) -> UserModel {
    UserModel {
        id,
        email: email.to_string(),
        password: TEST_PASSWORD_HASH.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        created_at: Utc::now(),
    }
}

/// Create a mock character model with fixed descriptive columns.
pub fn mock_character_model(id: i32, name: &str) -> CharacterModel {
    CharacterModel {
        id,
        name: name.to_string(),
        gender: "male".to_string(),
        species: "Human".to_string(),
    }
}

/// Create a mock planet model with fixed descriptive columns.
pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
        climate: "arid".to_string(),
        population: "200000".to_string(),
        terrain: "desert".to_string(),
    }
}

/// Create a mock starship model with fixed descriptive columns.
pub fn mock_starship_model(id: i32, name: &str) -> StarshipModel {
    StarshipModel {
        id,
        name: name.to_string(),
        model: "T-65 X-wing".to_string(),
        manufacturer: "Incom Corporation".to_string(),
        crew: "1".to_string(),
    }
}
