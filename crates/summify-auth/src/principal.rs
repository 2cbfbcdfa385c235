//! Request principal derivation.
//!
//! The principal is the verified identity behind one request: a username and
//! an admin flag, decoded from the `Authorization` header's bearer token. It
//! lives only for the lifetime of the request.
//!
//! Verification is deliberately fail-open: a missing, malformed, expired, or
//! badly signed token yields *no* principal rather than an error. The request
//! continues anonymously and the guards in [`crate::guards`] decide whether
//! anonymity is acceptable for the route.

use serde::{Deserialize, Serialize};

use crate::jwt::{Claims, TokenCodec};

/// The authenticated identity behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
    pub is_admin: bool,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            is_admin: claims.is_admin,
        }
    }
}

/// Derive a principal from a raw `Authorization` header value, if any.
///
/// Strips a case-insensitive `Bearer ` prefix and surrounding whitespace; a
/// header without the prefix is treated as a bare token. Never returns an
/// error: every verification failure collapses to `None`.
pub fn authenticate(codec: &TokenCodec, header: Option<&str>) -> Option<Principal> {
    let raw = header?.trim();
    if raw.is_empty() {
        return None;
    }

    let token = strip_bearer(raw);
    if token.is_empty() {
        return None;
    }

    match codec.verify(token) {
        Ok(claims) => Some(Principal::from(claims)),
        Err(err) => {
            log::debug!("discarding unverifiable bearer token: {}", err);
            None
        }
    }
}

fn strip_bearer(raw: &str) -> &str {
    match raw.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => raw[7..].trim(),
        _ => raw,
    }
}
