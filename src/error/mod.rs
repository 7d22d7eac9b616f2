//! Error types for the whompah crate.
//!
//! A single aggregated [`Error`] enum covers every failure the resolution
//! pipeline and the roster sweep can hit, with specialized types for
//! configuration and provider-transport failures. An absent upstream
//! character is deliberately NOT an error anywhere in this taxonomy; it is
//! modeled as `Ok(None)` by the parser and the resolution service.

pub mod config;
pub mod provider;

use thiserror::Error;

use crate::error::{config::ConfigError, provider::ProviderError};

/// Main error type for the whompah crate.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified error type, using `thiserror`'s `#[from]` attribute
/// for conversion via the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Transport-level failure talking to a character-lookup site.
    #[error(transparent)]
    ProviderError(#[from] ProviderError),
    /// A lookup site returned a document this crate could not make sense of.
    #[error("Failed to parse character document: {0}")]
    ParseError(String),
    /// The chat transport rejected a roster operation.
    #[error("Chat transport error: {0}")]
    ChatError(String),
    /// Failure building the outbound HTTP client.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}
