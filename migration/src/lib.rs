pub use sea_orm_migration::prelude::*;

mod m20250301_000001_user;
mod m20250301_000002_character;
mod m20250301_000003_planet;
mod m20250301_000004_starship;
mod m20250301_000005_favorite_character;
mod m20250301_000006_favorite_planet;
mod m20250301_000007_favorite_starship;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_user::Migration),
            Box::new(m20250301_000002_character::Migration),
            Box::new(m20250301_000003_planet::Migration),
            Box::new(m20250301_000004_starship::Migration),
            Box::new(m20250301_000005_favorite_character::Migration),
            Box::new(m20250301_000006_favorite_planet::Migration),
            Box::new(m20250301_000007_favorite_starship::Migration),
        ]
    }
}
