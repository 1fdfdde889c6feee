use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}
