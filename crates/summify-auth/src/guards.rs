//! Authorization guards.
//!
//! Each guard evaluates one access rule over the request's
//! [`AuthzContext`] and either passes or fails with a classified
//! [`ApiError`]. Route handlers chain them in order; the first failure
//! short-circuits the rest. Guards are stateless and never mutate the context.

use async_trait::async_trait;
use summify_commons::{ApiError, ApiResult};

use crate::principal::Principal;

/// What a guard evaluates against: the request's principal (if any) and the
/// target resource's username taken from the request path (if the route has
/// one).
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthzContext<'a> {
    pub principal: Option<&'a Principal>,
    pub target_username: Option<&'a str>,
}

impl<'a> AuthzContext<'a> {
    pub fn new(principal: Option<&'a Principal>, target_username: Option<&'a str>) -> Self {
        Self {
            principal,
            target_username,
        }
    }
}

/// Passes when the request carries any verified principal.
pub fn require_logged_in(ctx: &AuthzContext<'_>) -> ApiResult<()> {
    match ctx.principal {
        Some(_) => Ok(()),
        None => Err(ApiError::unauthorized("must be logged in")),
    }
}

/// Passes when the principal exists and carries the admin flag.
pub fn require_admin(ctx: &AuthzContext<'_>) -> ApiResult<()> {
    match ctx.principal {
        Some(principal) if principal.is_admin => Ok(()),
        _ => Err(ApiError::unauthorized("must be an admin")),
    }
}

/// Passes when the principal is an admin or is the target user themself.
///
/// Anonymous callers and callers acting on another user's resource fail with
/// distinct messages so a client can tell "log in first" from "not yours".
pub fn require_self_or_admin(ctx: &AuthzContext<'_>) -> ApiResult<()> {
    let Some(principal) = ctx.principal else {
        return Err(ApiError::unauthorized("must be logged in"));
    };
    if principal.is_admin || Some(principal.username.as_str()) == ctx.target_username {
        Ok(())
    } else {
        Err(ApiError::unauthorized(
            "cannot act on another user's resources",
        ))
    }
}

/// Lookup abstraction the existence guard needs from storage.
///
/// The concrete user store in summify-api implements this alongside its own
/// trait, keeping this crate free of any storage dependency.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn user_exists(&self, username: &str) -> ApiResult<bool>;
}

/// Passes when the target user exists in storage.
pub async fn require_existing_user<D>(directory: &D, username: &str) -> ApiResult<()>
where
    D: UserDirectory + ?Sized,
{
    if directory.user_exists(username).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("no such user: {}", username)))
    }
}
