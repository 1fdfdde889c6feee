pub use super::character::Entity as Character;
pub use super::favorite_character::Entity as FavoriteCharacter;
pub use super::favorite_planet::Entity as FavoritePlanet;
pub use super::favorite_starship::Entity as FavoriteStarship;
pub use super::planet::Entity as Planet;
pub use super::starship::Entity as Starship;
pub use super::user::Entity as User;
