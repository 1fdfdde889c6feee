//! Data transfer objects and database model aliases.

pub mod catalog;
pub mod db;
pub mod user;
