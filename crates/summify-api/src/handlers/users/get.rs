//! GET /users/{username} - self-or-admin.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use summify_auth::{require_self_or_admin, AuthzContext};
use summify_commons::ApiError;

use crate::handlers::{error_response, principal_of};
use crate::store::UserStore;

pub async fn get_user_handler(
    req: HttpRequest,
    store: web::Data<Arc<dyn UserStore>>,
    path: web::Path<String>,
) -> HttpResponse {
    let username = path.into_inner();
    let principal = principal_of(&req);
    let ctx = AuthzContext::new(principal.as_ref(), Some(&username));
    if let Err(err) = require_self_or_admin(&ctx) {
        return error_response(err);
    }

    match store.get(&username).await {
        Ok(Some(user)) => HttpResponse::Ok().json(json!({ "user": user })),
        Ok(None) => error_response(ApiError::NotFound(format!("no such user: {}", username))),
        Err(err) => error_response(err),
    }
}
