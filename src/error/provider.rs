use thiserror::Error;

use crate::provider::Source;

/// Transport-level failure from a character-lookup site.
///
/// Covers non-200 responses and network failures alike; both mean the site
/// gave no answer, which is what triggers the fallback to the second site.
/// A successful-but-empty payload is not a transport error and never
/// produces one of these.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The site answered with a non-200 status.
    #[error("{provider} returned HTTP status {status}")]
    Status {
        /// Which lookup site answered.
        provider: Source,
        /// The HTTP status code received.
        status: u16,
    },
    /// The request never completed (DNS, connect, timeout, ...).
    #[error("Request to {provider} failed: {reason}")]
    Request {
        /// Which lookup site was being contacted.
        provider: Source,
        /// The underlying client error.
        #[source]
        reason: reqwest::Error,
    },
}

impl ProviderError {
    /// The lookup site this error came from.
    pub fn provider(&self) -> Source {
        match self {
            ProviderError::Status { provider, .. } => *provider,
            ProviderError::Request { provider, .. } => *provider,
        }
    }
}
