//! Test fixture modules for database record creation.
//!
//! - `user` - User records
//! - `catalog` - Character, planet and starship records
//! - `favorite` - Favorite link records between users and catalog items
//! - `factory` - In-memory models that never touch the database

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
