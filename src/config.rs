//! Runtime configuration, loaded once at startup.

use crate::error::config::ConfigError;
use crate::provider::client::{PEOPLE_ENDPOINT, RUBIKA_ENDPOINT};

/// How long a roster member may stay unseen before the sweep demotes them.
pub const DEFAULT_INACTIVE_AFTER_DAYS: i64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("whompah/", env!("CARGO_PKG_VERSION"));

/// Immutable configuration snapshot.
///
/// Constructed once via [`Config::from_env`] and passed by reference into
/// the services and the scheduler; nothing in the crate reads the process
/// environment after startup.
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// User agent sent on character-lookup requests.
    pub user_agent: String,
    /// Primary lookup endpoint template containing a `{name}` placeholder.
    pub people_endpoint: String,
    /// Fallback lookup endpoint template containing a `{name}` placeholder.
    pub rubika_endpoint: String,
    /// Inactivity threshold in days for the roster sweep.
    pub inactive_after_days: i64,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Only `DATABASE_URL` is required; everything else falls back to the
    /// production lookup endpoints and a 30 day inactivity threshold.
    pub fn from_env() -> Result<Self, ConfigError> {
        let inactive_after_days = match std::env::var("INACTIVE_AFTER_DAYS") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    var: "INACTIVE_AFTER_DAYS".to_string(),
                    reason: format!("expected a number of days, got {:?}", value),
                })?,
            Err(_) => DEFAULT_INACTIVE_AFTER_DAYS,
        };

        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            user_agent: env_or("USER_AGENT", DEFAULT_USER_AGENT),
            people_endpoint: env_or("PEOPLE_ENDPOINT", PEOPLE_ENDPOINT),
            rubika_endpoint: env_or("RUBIKA_ENDPOINT", RUBIKA_ENDPOINT),
            inactive_after_days,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}
