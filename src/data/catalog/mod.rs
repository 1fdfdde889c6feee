//! Repositories for the catalog tables.
//!
//! Catalog items are reference data. Deleting one that is still favorited fails
//! with a foreign key violation, the favorites must be removed first.

/// `character` table repository
pub mod character;
/// `planet` table repository
pub mod planet;
/// `starship` table repository
pub mod starship;
