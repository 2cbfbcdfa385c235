//! POST /users - admin-only user creation.
//!
//! Not the registration endpoint: this is for admins adding accounts, and the
//! account being added may itself be an admin.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;
use summify_auth::{validate_and_require_admin, TokenCodec};
use summify_commons::{ApiError, NewUser};

use super::create_and_respond;
use crate::handlers::{error_response, principal_of};
use crate::schemas;
use crate::store::UserStore;

pub async fn create_user_handler(
    req: HttpRequest,
    store: web::Data<Arc<dyn UserStore>>,
    codec: web::Data<Arc<TokenCodec>>,
    body: web::Json<Value>,
) -> HttpResponse {
    let principal = principal_of(&req);
    // Shape first, privilege second: a malformed request reports its
    // violations even when the caller is not an admin.
    if let Err(err) = validate_and_require_admin(&schemas::USER_NEW, &body, principal.as_ref()) {
        return error_response(err);
    }

    let new_user: NewUser = match serde_json::from_value(body.into_inner()) {
        Ok(user) => user,
        Err(err) => {
            return error_response(ApiError::bad_request(format!("invalid user payload: {}", err)))
        }
    };

    create_and_respond(store.get_ref(), codec.get_ref(), new_user).await
}
