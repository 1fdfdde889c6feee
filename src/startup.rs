//! Process startup helpers.

use std::path::Path;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::{
    config::Config,
    error::Error,
    model::catalog::CatalogSeed,
    service::catalog::{CatalogService, SeedSummary},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(config.database_sqlx_logging);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Load a JSON seed document and insert its catalog items
pub async fn seed_catalog(db: &DatabaseConnection, path: &Path) -> Result<SeedSummary, Error> {
    tracing::info!("Seeding catalog from {}", path.display());

    let contents = tokio::fs::read_to_string(path).await?;
    let seed: CatalogSeed = serde_json::from_str(&contents)?;

    CatalogService::new(db).seed(&seed).await
}

/// Log the number of rows in every table
pub async fn log_table_counts(db: &DatabaseConnection) -> Result<(), Error> {
    let users = entity::prelude::User::find().count(db).await?;
    let characters = entity::prelude::Character::find().count(db).await?;
    let planets = entity::prelude::Planet::find().count(db).await?;
    let starships = entity::prelude::Starship::find().count(db).await?;
    let favorite_characters = entity::prelude::FavoriteCharacter::find().count(db).await?;
    let favorite_planets = entity::prelude::FavoritePlanet::find().count(db).await?;
    let favorite_starships = entity::prelude::FavoriteStarship::find().count(db).await?;

    tracing::info!(
        users,
        characters,
        planets,
        starships,
        favorite_characters,
        favorite_planets,
        favorite_starships,
        "Table row counts"
    );

    Ok(())
}
