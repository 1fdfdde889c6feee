//! Tests for seed_catalog.

use std::path::PathBuf;

use holocron::{
    config::Config,
    error::Error,
    service::catalog::{CatalogService, SeedSummary},
    startup,
};

fn memory_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_sqlx_logging: false,
        catalog_seed_path: None,
    }
}

fn write_seed(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "holocron-{}-{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

/// Tests that a seed document is read and inserted.
///
/// Expected: one row per entry
#[tokio::test]
async fn seeds_catalog_from_file() -> Result<(), Error> {
    let path = write_seed(
        "valid",
        r#"{
            "characters": [{"name": "Luke Skywalker", "gender": "male", "species": "Human"}],
            "planets": [
                {"name": "Tatooine", "climate": "arid", "population": "200000", "terrain": "desert"},
                {"name": "Hoth", "climate": "frozen", "population": "unknown", "terrain": "tundra"}
            ],
            "starships": [
                {
                    "name": "X-wing",
                    "model": "T-65 X-wing",
                    "manufacturer": "Incom Corporation",
                    "crew": "1"
                }
            ]
        }"#,
    );
    let db = startup::connect_to_database(&memory_config()).await?;

    let summary = startup::seed_catalog(&db, &path).await?;
    std::fs::remove_file(&path).ok();

    assert_eq!(
        summary,
        SeedSummary {
            characters: 1,
            planets: 2,
            starships: 1
        }
    );

    let planets = CatalogService::new(&db).list_planets().await?;
    assert_eq!(planets[0].terrain, "desert");
    assert_eq!(planets[1].terrain, "tundra");

    Ok(())
}

/// Tests that malformed JSON is reported as a seed parse error.
///
/// Expected: Error::SeedParseError and nothing inserted
#[tokio::test]
async fn fails_for_malformed_seed() -> Result<(), Error> {
    let path = write_seed("malformed", r#"{"characters": [{"name": }]}"#);
    let db = startup::connect_to_database(&memory_config()).await?;

    let result = startup::seed_catalog(&db, &path).await;
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(Error::SeedParseError(_))));
    assert!(CatalogService::new(&db).list_characters().await?.is_empty());

    Ok(())
}

/// Tests that an entry missing a descriptive column is rejected before any insert.
///
/// Expected: Error::SeedParseError and nothing inserted
#[tokio::test]
async fn fails_for_entry_without_descriptive_column() -> Result<(), Error> {
    let path = write_seed(
        "incomplete",
        r#"{"planets": [{"name": "Hoth", "climate": "frozen", "terrain": "tundra"}]}"#,
    );
    let db = startup::connect_to_database(&memory_config()).await?;

    let result = startup::seed_catalog(&db, &path).await;
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(Error::SeedParseError(_))));
    assert!(CatalogService::new(&db).list_planets().await?.is_empty());

    Ok(())
}

/// Tests that a missing seed file is reported as an IO error.
///
/// Expected: Error::IoError
#[tokio::test]
async fn fails_for_missing_seed_file() -> Result<(), Error> {
    let db = startup::connect_to_database(&memory_config()).await?;

    let path = PathBuf::from("/nonexistent/holocron.json");
    let result = startup::seed_catalog(&db, &path).await;

    assert!(matches!(result, Err(Error::IoError(_))));

    Ok(())
}
