//! Environment configuration.

use std::{env::VarError, path::PathBuf};

use crate::error::ConfigError;

static DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Runtime configuration read from environment variables.
///
/// | Variable | Required | Default |
/// |---|---|---|
/// | `DATABASE_URL` | yes | |
/// | `DATABASE_MAX_CONNECTIONS` | no | `10` |
/// | `DATABASE_SQLX_LOGGING` | no | `false` |
/// | `CATALOG_SEED_PATH` | no | |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Connection URL, e.g. `postgres://...` or `sqlite://holocron.db?mode=rwc`
    pub database_url: String,
    /// Maximum connections in the database pool
    pub database_max_connections: u32,
    /// Log every SQL statement sqlx executes
    pub database_sqlx_logging: bool,
    /// JSON document of catalog items to insert at startup
    pub catalog_seed_path: Option<PathBuf>,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let optional = |var: &str| -> Result<Option<String>, ConfigError> {
            match lookup(var) {
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
                    var: var.to_string(),
                    reason: "value is not valid unicode".to_string(),
                }),
            }
        };

        let database_url = optional("DATABASE_URL")?
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_max_connections = match optional("DATABASE_MAX_CONNECTIONS")? {
            Some(value) => value
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "DATABASE_MAX_CONNECTIONS".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let database_sqlx_logging = match optional("DATABASE_SQLX_LOGGING")? {
            Some(value) => value
                .parse::<bool>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "DATABASE_SQLX_LOGGING".to_string(),
                    reason: e.to_string(),
                })?,
            None => false,
        };

        let catalog_seed_path = optional("CATALOG_SEED_PATH")?.map(PathBuf::from);

        Ok(Self {
            database_url,
            database_max_connections,
            database_sqlx_logging,
            catalog_seed_path,
        })
    }
}
