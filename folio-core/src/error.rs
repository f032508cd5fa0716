//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Transport failure (connect, TLS, read)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Non-2xx response from the backend
    #[error("Server returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The configured site URL is unusable
    #[error("Invalid site URL: {0}")]
    InvalidUrl(String),

    /// Operation requires a signed-in session
    #[error("Not logged in")]
    NotLoggedIn,

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, auth state, etc.), used
    /// for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotLoggedIn | Self::ValidationError(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
