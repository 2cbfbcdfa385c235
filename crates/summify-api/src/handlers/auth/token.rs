//! Login handler
//!
//! POST /auth/token - verifies username/password and returns a signed session
//! token.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use summify_auth::{password, TokenCodec};
use summify_commons::ApiError;

use crate::handlers::error_response;
use crate::store::UserStore;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/token
///
/// Unknown users and wrong passwords get the same answer so the endpoint
/// cannot be used to enumerate accounts.
pub async fn issue_token_handler(
    store: web::Data<Arc<dyn UserStore>>,
    codec: web::Data<Arc<TokenCodec>>,
    body: web::Json<TokenRequest>,
) -> HttpResponse {
    let rejected = || error_response(ApiError::unauthorized("invalid username/password"));

    let credentials = match store.credentials(&body.username).await {
        Ok(credentials) => credentials,
        Err(err) => return error_response(err),
    };
    let Some((user, stored_hash)) = credentials else {
        return rejected();
    };

    match password::verify_password(&body.password, &stored_hash).await {
        Ok(true) => {}
        Ok(false) => return rejected(),
        Err(err) => return error_response(err),
    }

    match codec.sign(&user.username, user.is_admin) {
        Ok(token) => HttpResponse::Ok().json(json!({ "token": token })),
        Err(err) => error_response(ApiError::internal(err.to_string())),
    }
}
