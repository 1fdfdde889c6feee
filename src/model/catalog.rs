//! Catalog DTOs and seed documents.

use serde::{Deserialize, Serialize};

use crate::model::db::{CharacterModel, PlanetModel, StarshipModel};

/// External representation of a character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDto {
    /// Character ID
    pub id: i32,
    /// Character name
    pub name: String,
    /// Character gender
    pub gender: String,
    /// Character species
    pub species: String,
}

impl From<CharacterModel> for CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name,
            gender: character.gender,
            species: character.species,
        }
    }
}

/// External representation of a planet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetDto {
    /// Planet ID
    pub id: i32,
    /// Planet name
    pub name: String,
    /// Planet climate
    pub climate: String,
    /// Planet population
    pub population: String,
    /// Planet terrain
    pub terrain: String,
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            population: planet.population,
            terrain: planet.terrain,
        }
    }
}

/// External representation of a starship.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarshipDto {
    /// Starship ID
    pub id: i32,
    /// Starship name
    pub name: String,
    /// Starship model
    pub model: String,
    /// Starship manufacturer
    pub manufacturer: String,
    /// Starship crew
    pub crew: String,
}

impl From<StarshipModel> for StarshipDto {
    fn from(starship: StarshipModel) -> Self {
        Self {
            id: starship.id,
            name: starship.name,
            model: starship.model,
            manufacturer: starship.manufacturer,
            crew: starship.crew,
        }
    }
}

/// Column values for a new or updated character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCharacter {
    /// Character name
    pub name: String,
    /// Character gender
    pub gender: String,
    /// Character species
    pub species: String,
}

/// Column values for a new or updated planet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlanet {
    /// Planet name
    pub name: String,
    /// Planet climate
    pub climate: String,
    /// Planet population
    pub population: String,
    /// Planet terrain
    pub terrain: String,
}

/// Column values for a new or updated starship.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStarship {
    /// Starship name
    pub name: String,
    /// Starship model
    pub model: String,
    /// Starship manufacturer
    pub manufacturer: String,
    /// Starship crew
    pub crew: String,
}

/// Reference data to load into the catalog tables.
///
/// Every list may be omitted from the JSON document, but each entry must carry
/// all of its columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSeed {
    /// Characters to insert
    pub characters: Vec<NewCharacter>,
    /// Planets to insert
    pub planets: Vec<NewPlanet>,
    /// Starships to insert
    pub starships: Vec<NewStarship>,
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::fixtures::factory;

    use super::*;

    /// Expect missing lists to default to empty
    #[test]
    fn parses_partial_seed_document() {
        let seed: CatalogSeed = serde_json::from_str(
            r#"{"planets": [
                {"name": "Hoth", "climate": "frozen", "population": "0", "terrain": "tundra"}
            ]}"#,
        )
        .unwrap();

        assert!(seed.characters.is_empty());
        assert!(seed.starships.is_empty());
        assert_eq!(
            seed.planets,
            vec![NewPlanet {
                name: "Hoth".to_string(),
                climate: "frozen".to_string(),
                population: "0".to_string(),
                terrain: "tundra".to_string(),
            }]
        );
    }

    /// Expect an error when a catalog entry has no name
    #[test]
    fn rejects_entry_without_name() {
        let result = serde_json::from_str::<CatalogSeed>(
            r#"{"characters": [{"gender": "female", "species": "Human"}]}"#,
        );

        assert!(result.is_err());
    }

    /// Expect an error when a catalog entry omits a descriptive column
    #[test]
    fn rejects_entry_without_descriptive_column() {
        let result = serde_json::from_str::<CatalogSeed>(
            r#"{"starships": [{"name": "X-wing", "model": "T-65 X-wing", "crew": "1"}]}"#,
        );

        assert!(result.is_err());
    }

    /// Expect every column of the model to be carried over to the DTO
    #[test]
    fn converts_models_to_dtos() {
        let character = CharacterDto::from(factory::mock_character_model(1, "Luke Skywalker"));
        let planet = PlanetDto::from(factory::mock_planet_model(2, "Tatooine"));
        let starship = StarshipDto::from(factory::mock_starship_model(3, "X-wing"));

        assert_eq!(
            character,
            CharacterDto {
                id: 1,
                name: "Luke Skywalker".to_string(),
                gender: "male".to_string(),
                species: "Human".to_string(),
            }
        );
        assert_eq!(
            planet,
            PlanetDto {
                id: 2,
                name: "Tatooine".to_string(),
                climate: "arid".to_string(),
                population: "200000".to_string(),
                terrain: "desert".to_string(),
            }
        );
        assert_eq!(
            starship,
            StarshipDto {
                id: 3,
                name: "X-wing".to_string(),
                model: "T-65 X-wing".to_string(),
                manufacturer: "Incom Corporation".to_string(),
                crew: "1".to_string(),
            }
        );
    }

    /// Expect a catalog DTO to serialize every column as a plain string
    #[test]
    fn serializes_character_dto() {
        let character = CharacterDto::from(factory::mock_character_model(1, "Luke Skywalker"));

        assert_eq!(
            serde_json::to_value(&character).unwrap(),
            serde_json::json!({
                "id": 1,
                "name": "Luke Skywalker",
                "gender": "male",
                "species": "Human"
            })
        );
    }
}
