//! POST /users/{username}/articles - attach an article summary.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::{json, Value};
use summify_commons::{ApiError, SummarizedArticle};

use super::authorize_for_user;
use crate::handlers::{error_response, principal_of};
use crate::schemas;
use crate::store::{ArticleStore, UserStore};

pub async fn create_article_handler(
    req: HttpRequest,
    users: web::Data<Arc<dyn UserStore>>,
    articles: web::Data<Arc<dyn ArticleStore>>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let username = path.into_inner();
    let principal = principal_of(&req);
    if let Err(err) =
        authorize_for_user(users.get_ref().as_ref(), principal.as_ref(), &username).await
    {
        return error_response(err);
    }

    let violations = schemas::ARTICLE_NEW.validate(&body);
    if !violations.is_empty() {
        return error_response(ApiError::BadRequest(violations));
    }

    let field = |name: &str| {
        body.get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let article = SummarizedArticle {
        username: username.clone(),
        article_title: field("articleTitle"),
        article_url: field("articleUrl"),
        summary: field("summary"),
    };

    match articles.insert(&article).await {
        Ok(article) => HttpResponse::Created().json(json!({ "article": article })),
        Err(err) => error_response(err),
    }
}
