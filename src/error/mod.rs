//! Error types for holocron.
//!
//! Storage failures arrive from sea-orm as [`DbErr`]. Converting them into [`Error`]
//! classifies constraint failures (duplicate email, missing required column, dangling
//! foreign key) into [`ConstraintViolation`] so callers can react to them without
//! matching on driver specific error codes. Every other database error is passed
//! through unchanged.

/// Configuration errors
pub mod config;
pub mod constraint;

use sea_orm::DbErr;
use thiserror::Error;

pub use config::ConfigError;
pub use constraint::ConstraintViolation;

/// Main error type for holocron.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A database constraint rejected an insert, update or delete.
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
    /// The catalog seed document is not valid JSON for a [`CatalogSeed`](crate::model::catalog::CatalogSeed).
    #[error("Failed to parse catalog seed document: {0}")]
    SeedParseError(#[from] serde_json::Error),
    /// The catalog seed document could not be read.
    #[error("Failed to read catalog seed document: {0}")]
    IoError(#[from] std::io::Error),
    /// Database error that is not a constraint violation (connection, query syntax, ...).
    #[error(transparent)]
    DbErr(DbErr),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match ConstraintViolation::from_db_err(&err) {
            Some(violation) => Self::Constraint(violation),
            None => Self::DbErr(err),
        }
    }
}

impl Error {
    /// Returns the constraint violation behind this error, if any.
    pub fn constraint_violation(&self) -> Option<&ConstraintViolation> {
        match self {
            Self::Constraint(violation) => Some(violation),
            _ => None,
        }
    }
}
