//! GET /users/{username}/articles - all summaries for a user.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use super::authorize_for_user;
use crate::handlers::{error_response, principal_of};
use crate::store::{ArticleStore, UserStore};

pub async fn list_articles_handler(
    req: HttpRequest,
    users: web::Data<Arc<dyn UserStore>>,
    articles: web::Data<Arc<dyn ArticleStore>>,
    path: web::Path<String>,
) -> HttpResponse {
    let username = path.into_inner();
    let principal = principal_of(&req);
    if let Err(err) =
        authorize_for_user(users.get_ref().as_ref(), principal.as_ref(), &username).await
    {
        return error_response(err);
    }

    match articles.list_for_user(&username).await {
        Ok(articles) => HttpResponse::Ok().json(json!({ "articles": articles })),
        Err(err) => error_response(err),
    }
}
