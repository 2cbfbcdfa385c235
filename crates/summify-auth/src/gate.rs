//! Schema-gated guards for the user-creation endpoints.
//!
//! Both creation paths validate the request body's shape before any
//! authorization decision. That ordering is policy: a caller learns about a
//! malformed request without the server first revealing whether they would
//! have been authorized. Validation errors therefore always win over
//! authorization errors.

use serde_json::Value;
use summify_commons::{ApiError, ApiResult, Schema};

use crate::guards::{require_admin, AuthzContext};
use crate::principal::Principal;

/// Gate for the admin-only user creation endpoint.
///
/// 1. Validate `body` against `schema`, collecting every violation;
/// 2. only if the body is well-formed, require the caller to be an admin.
pub fn validate_and_require_admin(
    schema: &Schema,
    body: &Value,
    principal: Option<&Principal>,
) -> ApiResult<()> {
    let violations = schema.validate(body);
    if !violations.is_empty() {
        return Err(ApiError::BadRequest(violations));
    }
    require_admin(&AuthzContext::new(principal, None))
}

/// Gate for public self-registration.
///
/// Validates the body, then rejects any attempt to claim the admin flag.
/// No authorization check: registration is open to anonymous callers.
pub fn validate_registration(schema: &Schema, body: &Value) -> ApiResult<()> {
    let violations = schema.validate(body);
    if !violations.is_empty() {
        return Err(ApiError::BadRequest(violations));
    }
    if matches!(body.get("isAdmin"), Some(flag) if flag.as_bool().unwrap_or(false)) {
        return Err(ApiError::bad_request(
            "cannot set isAdmin flag during registration",
        ));
    }
    Ok(())
}
