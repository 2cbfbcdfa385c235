//! Route handlers for the summify API.
//!
//! ## Endpoints
//! - POST /auth/token - verify credentials, issue a session token
//! - POST /users - admin-only user creation
//! - POST /users/register - public self-registration
//! - GET /users - admin-only listing
//! - GET/PATCH/DELETE /users/{username} - self-or-admin
//! - POST/GET /users/{username}/articles - article summaries, self-or-admin
//! - PUT/DELETE /users/{username}/articles/{articleTitle}

pub mod articles;
pub mod auth;
pub mod users;

use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use serde::Serialize;
use summify_auth::Principal;
use summify_commons::ApiError;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error type identifier (e.g. "unauthorized", "bad_request")
    pub error: String,
    /// One entry per violation; a single entry for non-validation errors
    pub messages: Vec<String>,
}

impl ErrorBody {
    fn new(error: &str, messages: Vec<String>) -> Self {
        Self {
            error: error.to_string(),
            messages,
        }
    }
}

/// Map a classified error to its HTTP response.
///
/// Internal errors are logged and answered with a generic message; the other
/// kinds carry client-renderable context by construction.
pub(crate) fn error_response(err: ApiError) -> HttpResponse {
    match err {
        ApiError::Unauthorized(message) => {
            HttpResponse::Unauthorized().json(ErrorBody::new("unauthorized", vec![message]))
        }
        ApiError::BadRequest(messages) => {
            HttpResponse::BadRequest().json(ErrorBody::new("bad_request", messages))
        }
        ApiError::NotFound(message) => {
            HttpResponse::NotFound().json(ErrorBody::new("not_found", vec![message]))
        }
        ApiError::Internal(message) => {
            log::error!("request failed: {}", message);
            HttpResponse::InternalServerError().json(ErrorBody::new(
                "internal_error",
                vec!["internal server error".to_string()],
            ))
        }
    }
}

/// The principal the authentication middleware attached, if any.
pub(crate) fn principal_of(req: &HttpRequest) -> Option<Principal> {
    req.extensions().get::<Principal>().cloned()
}
