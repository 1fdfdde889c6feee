//! Tests for connect_to_database & the migrator.

use holocron::{
    config::Config,
    data::catalog::planet::PlanetRepository,
    error::{ConstraintViolation, Error},
    model::{catalog::NewPlanet, user::NewUser},
    service::{catalog::CatalogService, favorite::FavoriteService, user::UserService},
    startup,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};

fn memory_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_sqlx_logging: false,
        catalog_seed_path: None,
    }
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "hash".to_string(),
        first_name: "Leia".to_string(),
        last_name: "Organa".to_string(),
    }
}

fn alderaan() -> NewPlanet {
    NewPlanet {
        name: "Alderaan".to_string(),
        climate: "temperate".to_string(),
        population: "2000000000".to_string(),
        terrain: "grasslands, mountains".to_string(),
    }
}

async fn table_counts(db: &DatabaseConnection) -> Result<[u64; 7], Error> {
    Ok([
        entity::prelude::User::find().count(db).await?,
        entity::prelude::Character::find().count(db).await?,
        entity::prelude::Planet::find().count(db).await?,
        entity::prelude::Starship::find().count(db).await?,
        entity::prelude::FavoriteCharacter::find().count(db).await?,
        entity::prelude::FavoritePlanet::find().count(db).await?,
        entity::prelude::FavoriteStarship::find().count(db).await?,
    ])
}

/// Tests that connecting runs every migration.
///
/// Expected: the seven schema tables exist and are empty
#[tokio::test]
async fn creates_all_tables() -> Result<(), Error> {
    let db = startup::connect_to_database(&memory_config()).await?;

    assert_eq!(table_counts(&db).await?, [0; 7]);

    Ok(())
}

/// Tests that the migrated schema cascades user deletion.
///
/// Expected: favorite rows are gone once the user row is deleted, the planet stays
#[tokio::test]
async fn migrated_schema_cascades_user_delete() -> Result<(), Error> {
    let db = startup::connect_to_database(&memory_config()).await?;

    let user = UserService::new(&db).create_user(new_user("a@x.com")).await?;
    let planet = PlanetRepository::new(&db).create(alderaan()).await?;
    FavoriteService::new(&db).add_planet(user.id, planet.id).await?;

    assert!(UserService::new(&db).delete_user(user.id).await?);

    assert_eq!(entity::prelude::FavoritePlanet::find().count(&db).await?, 0);
    assert_eq!(entity::prelude::Planet::find().count(&db).await?, 1);

    Ok(())
}

/// Tests that the migrated schema rejects a second user with the same email.
///
/// Expected: Error::Constraint(ConstraintViolation::Unique)
#[tokio::test]
async fn migrated_schema_rejects_duplicate_email() -> Result<(), Error> {
    let db = startup::connect_to_database(&memory_config()).await?;

    let user_service = UserService::new(&db);
    user_service.create_user(new_user("a@x.com")).await?;
    let result = user_service.create_user(new_user("a@x.com")).await;

    assert!(matches!(
        result,
        Err(Error::Constraint(ConstraintViolation::Unique(_)))
    ));

    Ok(())
}

/// Tests that the migrated schema blocks deleting a favorited catalog item.
///
/// Expected: a foreign key violation until the favorite is removed
#[tokio::test]
async fn migrated_schema_restricts_favorited_delete() -> Result<(), Error> {
    let db = startup::connect_to_database(&memory_config()).await?;

    let user = UserService::new(&db).create_user(new_user("a@x.com")).await?;
    let planet = PlanetRepository::new(&db).create(alderaan()).await?;
    let catalog_service = CatalogService::new(&db);
    let favorite_service = FavoriteService::new(&db);
    favorite_service.add_planet(user.id, planet.id).await?;

    let blocked = catalog_service.delete_planet(planet.id).await;
    assert!(matches!(
        blocked,
        Err(Error::Constraint(ConstraintViolation::ForeignKey(_)))
    ));

    assert!(favorite_service.remove_planet(user.id, planet.id).await?);
    assert!(catalog_service.delete_planet(planet.id).await?);

    Ok(())
}

/// Tests that the migrated schema requires every descriptive catalog column.
///
/// Expected: Error::Constraint(ConstraintViolation::NotNull)
#[tokio::test]
async fn migrated_schema_requires_descriptive_columns() -> Result<(), Error> {
    let db = startup::connect_to_database(&memory_config()).await?;

    let starship = entity::starship::ActiveModel {
        name: ActiveValue::Set("X-wing".to_string()),
        model: ActiveValue::Set("T-65 X-wing".to_string()),
        manufacturer: ActiveValue::Set("Incom Corporation".to_string()),
        ..Default::default()
    };
    let result = starship.insert(&db).await.map_err(Error::from);

    assert!(matches!(
        result,
        Err(Error::Constraint(ConstraintViolation::NotNull(_)))
    ));

    Ok(())
}

/// Tests that rolling every migration back drops the schema tables.
///
/// Expected: querying a dropped table fails
#[tokio::test]
async fn rolls_back_all_tables() -> Result<(), Error> {
    let db = startup::connect_to_database(&memory_config()).await?;

    Migrator::down(&db, None).await?;

    assert!(table_counts(&db).await.is_err());
    assert!(entity::prelude::Starship::find().count(&db).await.is_err());

    Ok(())
}
