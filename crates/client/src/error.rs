//! Error type for API calls.

use thiserror::Error;

/// Errors that can occur when talking to the ShopLink backend.
///
/// Every failure mode of a call is represented here; client methods never
/// panic and never retry. Transport failures, non-2xx statuses, and malformed
/// bodies all come back as variants so callers can branch without exception
/// handling.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Unauthorized (missing, invalid, or expired token).
    #[error("Unauthorized: login required")]
    Unauthorized,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse the response body.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Backend reported success but omitted the expected payload.
    #[error("Success response carried no data")]
    MissingData,
}

impl ApiError {
    /// Whether this error means the caller should (re)authenticate.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
