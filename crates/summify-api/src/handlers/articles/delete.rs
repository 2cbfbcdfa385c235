//! DELETE /users/{username}/articles/{articleTitle} - remove a summary.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use summify_commons::ApiError;

use super::authorize_for_user;
use crate::handlers::{error_response, principal_of};
use crate::store::{ArticleStore, UserStore};

pub async fn delete_article_handler(
    req: HttpRequest,
    users: web::Data<Arc<dyn UserStore>>,
    articles: web::Data<Arc<dyn ArticleStore>>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (username, article_title) = path.into_inner();
    let principal = principal_of(&req);
    if let Err(err) =
        authorize_for_user(users.get_ref().as_ref(), principal.as_ref(), &username).await
    {
        return error_response(err);
    }

    match articles.remove(&username, &article_title).await {
        Ok(true) => HttpResponse::Ok().json(json!({ "deleted": article_title })),
        Ok(false) => error_response(ApiError::NotFound(format!(
            "no such article for {}: {}",
            username, article_title
        ))),
        Err(err) => error_response(err),
    }
}
