//! User management handlers.

mod create;
mod delete;
mod get;
mod list;
mod register;
mod update;

pub use create::create_user_handler;
pub use delete::delete_user_handler;
pub use get::get_user_handler;
pub use list::list_users_handler;
pub use register::register_handler;
pub use update::update_user_handler;

use std::sync::Arc;

use actix_web::HttpResponse;
use serde_json::json;
use summify_auth::{password, TokenCodec};
use summify_commons::{ApiError, NewUser};

use crate::handlers::error_response;
use crate::store::UserStore;

/// Shared tail of both creation paths: hash the password, insert, and answer
/// 201 with the stored user plus a token for them.
async fn create_and_respond(
    store: &Arc<dyn UserStore>,
    codec: &Arc<TokenCodec>,
    new_user: NewUser,
) -> HttpResponse {
    let password_hash = match password::hash_password(&new_user.password, None).await {
        Ok(hash) => hash,
        Err(err) => return error_response(err),
    };

    let user = match store.insert(&new_user, &password_hash).await {
        Ok(user) => user,
        Err(err) => return error_response(err),
    };

    match codec.sign(&user.username, user.is_admin) {
        Ok(token) => HttpResponse::Created().json(json!({ "user": user, "token": token })),
        Err(err) => error_response(ApiError::internal(err.to_string())),
    }
}
