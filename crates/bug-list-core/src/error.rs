//! API Errors

use thiserror::Error;

/// Result type for bug API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single bug API call.
///
/// The view treats every variant the same way; the distinction only feeds logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}
