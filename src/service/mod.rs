//! Service layer.
//!
//! Services coordinate repositories, convert models into DTOs and turn sea-orm
//! errors into [`Error`](crate::error::Error), classifying constraint violations
//! on the way.

/// Catalog seeding, listing and deletion
pub mod catalog;
/// Adding and removing favorites
pub mod favorite;
/// User accounts and their favorites
pub mod user;
