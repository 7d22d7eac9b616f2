use thiserror::Error;

/// Configuration loading failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set to a value that cannot be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// The offending variable name.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}
