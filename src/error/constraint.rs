//! Classification of database constraint failures.
//!
//! SQLite reports extended result codes and PostgreSQL reports SQLSTATE codes, both
//! through the driver's database error.

use sea_orm::{DbErr, RuntimeErr};
use thiserror::Error;

// SQLite extended result codes
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";

// PostgreSQL SQLSTATE codes
const PG_UNIQUE_VIOLATION: &str = "23505";
const PG_NOT_NULL_VIOLATION: &str = "23502";
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// A storage constraint that rejected a write.
///
/// Each variant carries the database's own message, which names the offending
/// table and column.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// A unique column already holds the value, e.g. a duplicate user email.
    #[error("Uniqueness violation: {0}")]
    Unique(String),
    /// A required column was not provided.
    #[error("Not-null violation: {0}")]
    NotNull(String),
    /// A foreign key references a missing row, or a delete would orphan referencing rows.
    #[error("Foreign key violation: {0}")]
    ForeignKey(String),
}

impl ConstraintViolation {
    /// Classifies a sea-orm error, returning `None` when it is not a constraint failure.
    pub fn from_db_err(err: &DbErr) -> Option<Self> {
        let runtime_err = match err {
            DbErr::Exec(err) | DbErr::Query(err) => err,
            _ => return None,
        };

        let RuntimeErr::SqlxError(sqlx_err) = runtime_err else {
            return None;
        };

        let database_err = sqlx_err.as_database_error()?;
        let code = database_err.code()?;
        let message = database_err.message().to_string();

        match code.as_ref() {
            SQLITE_CONSTRAINT_UNIQUE | SQLITE_CONSTRAINT_PRIMARYKEY | PG_UNIQUE_VIOLATION => {
                Some(Self::Unique(message))
            }
            SQLITE_CONSTRAINT_NOTNULL | PG_NOT_NULL_VIOLATION => Some(Self::NotNull(message)),
            SQLITE_CONSTRAINT_FOREIGNKEY | PG_FOREIGN_KEY_VIOLATION => {
                Some(Self::ForeignKey(message))
            }
            _ => None,
        }
    }
}
