//! GET /users - admin-only listing.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use summify_auth::{require_admin, AuthzContext};

use crate::handlers::{error_response, principal_of};
use crate::store::UserStore;

pub async fn list_users_handler(
    req: HttpRequest,
    store: web::Data<Arc<dyn UserStore>>,
) -> HttpResponse {
    let principal = principal_of(&req);
    if let Err(err) = require_admin(&AuthzContext::new(principal.as_ref(), None)) {
        return error_response(err);
    }

    match store.find_all().await {
        Ok(users) => HttpResponse::Ok().json(json!({ "users": users })),
        Err(err) => error_response(err),
    }
}
