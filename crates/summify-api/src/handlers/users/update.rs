//! PATCH /users/{username} - partial profile update, self-or-admin.
//!
//! The body may carry any subset of { firstName, lastName, password, email }.
//! Passwords are hashed here, before the update pairs reach storage; the
//! store and the clause builder only ever see opaque values.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::{json, Value};
use summify_auth::{password, require_self_or_admin, AuthzContext};
use summify_commons::ApiError;
use summify_sql::SqlParam;

use crate::handlers::{error_response, principal_of};
use crate::schemas;
use crate::store::UserStore;

pub async fn update_user_handler(
    req: HttpRequest,
    store: web::Data<Arc<dyn UserStore>>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let username = path.into_inner();
    let principal = principal_of(&req);
    let ctx = AuthzContext::new(principal.as_ref(), Some(&username));
    if let Err(err) = require_self_or_admin(&ctx) {
        return error_response(err);
    }

    let violations = schemas::USER_UPDATE.validate(&body);
    if !violations.is_empty() {
        return error_response(ApiError::BadRequest(violations));
    }

    let Value::Object(fields) = body.into_inner() else {
        return error_response(ApiError::bad_request("request body must be a JSON object"));
    };

    let mut updates: Vec<(String, SqlParam)> = Vec::with_capacity(fields.len());
    for (field, value) in fields {
        let param = if field == "password" {
            let Some(plain) = value.as_str() else {
                return error_response(ApiError::bad_request("password must be a string"));
            };
            match password::hash_password(plain, None).await {
                Ok(hash) => SqlParam::Text(hash),
                Err(err) => return error_response(err),
            }
        } else {
            SqlParam::from_json(value)
        };
        updates.push((field, param));
    }

    // An empty update list is rejected by the store's clause builder.
    match store.update(&username, updates).await {
        Ok(user) => HttpResponse::Ok().json(json!({ "user": user })),
        Err(err) => error_response(err),
    }
}
