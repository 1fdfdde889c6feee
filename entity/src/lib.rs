//! sea-orm entities for the favorites schema.
//!
//! Users favorite catalog items (characters, planets and starships) through
//! one join table per catalog type. Deleting a user cascades to its favorites;
//! deleting a catalog item that is still favorited is rejected by the
//! foreign key.

pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod favorite_starship;
pub mod planet;
pub mod starship;
pub mod user;
