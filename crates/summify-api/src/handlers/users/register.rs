//! POST /users/register - public self-registration.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::Value;
use summify_auth::{validate_registration, TokenCodec};
use summify_commons::{ApiError, NewUser};

use super::create_and_respond;
use crate::handlers::error_response;
use crate::schemas;
use crate::store::UserStore;

pub async fn register_handler(
    store: web::Data<Arc<dyn UserStore>>,
    codec: web::Data<Arc<TokenCodec>>,
    body: web::Json<Value>,
) -> HttpResponse {
    if let Err(err) = validate_registration(&schemas::USER_NEW, &body) {
        return error_response(err);
    }

    let mut new_user: NewUser = match serde_json::from_value(body.into_inner()) {
        Ok(user) => user,
        Err(err) => {
            return error_response(ApiError::bad_request(format!("invalid user payload: {}", err)))
        }
    };
    // Self-registered accounts never start as admins.
    new_user.is_admin = false;

    create_and_respond(store.get_ref(), codec.get_ref(), new_user).await
}
