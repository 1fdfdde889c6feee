//! Repositories for the favorite link tables.
//!
//! Each link ties one user to one catalog item. Both foreign keys are required, so
//! creating a link to a missing user or item fails with a foreign key violation.

/// `favorite_character` table repository
pub mod character;
/// `favorite_planet` table repository
pub mod planet;
/// `favorite_starship` table repository
pub mod starship;
