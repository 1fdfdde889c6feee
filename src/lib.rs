//! Persistence layer for a favorites-tracking application.
//!
//! Users favorite characters, planets and starships from a media catalog. The
//! schema lives in the `entity` crate and is materialized by the `migration`
//! crate; this crate provides configuration, the repositories and services that
//! read and write the schema, and the DTOs used to expose records externally.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
