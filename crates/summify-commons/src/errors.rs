//! Shared error taxonomy for summify.
//!
//! Every recoverable failure in the request pipeline is one of three kinds:
//! - `Unauthorized`: authentication or authorization failed (HTTP 401)
//! - `BadRequest`: malformed input, including aggregated schema violations (HTTP 400)
//! - `NotFound`: a referenced resource does not exist (HTTP 404)
//!
//! `Internal` covers unexpected states (storage faults, signing failures) and
//! maps to HTTP 500. The HTTP mapping itself lives in summify-api; this crate
//! only defines the classification.

use thiserror::Error;

/// Classified request-pipeline error.
///
/// `BadRequest` carries a list rather than a single message because schema
/// validation reports every violation at once instead of failing fast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("bad request: {}", .0.join("; "))]
    BadRequest(Vec<String>),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for summify operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// `Unauthorized` from a single message.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// `BadRequest` from a single message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(vec![message.into()])
    }

    /// `NotFound` from a single message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// `Internal` from a single message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_display_joins_all_violations() {
        let err = ApiError::BadRequest(vec![
            "username is required".to_string(),
            "email is required".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "bad request: username is required; email is required"
        );
    }

    #[test]
    fn constructors_wrap_single_messages() {
        assert_eq!(
            ApiError::bad_request("no data"),
            ApiError::BadRequest(vec!["no data".to_string()])
        );
        assert_eq!(
            ApiError::unauthorized("must be an admin"),
            ApiError::Unauthorized("must be an admin".to_string())
        );
    }
}
