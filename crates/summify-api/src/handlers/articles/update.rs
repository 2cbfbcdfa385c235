//! PUT /users/{username}/articles/{articleTitle} - update a summary.

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::{json, Value};
use summify_commons::ApiError;
use summify_sql::SqlParam;

use super::authorize_for_user;
use crate::handlers::{error_response, principal_of};
use crate::schemas;
use crate::store::{ArticleStore, UserStore};

pub async fn update_article_handler(
    req: HttpRequest,
    users: web::Data<Arc<dyn UserStore>>,
    articles: web::Data<Arc<dyn ArticleStore>>,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> HttpResponse {
    let (username, article_title) = path.into_inner();
    let principal = principal_of(&req);
    if let Err(err) =
        authorize_for_user(users.get_ref().as_ref(), principal.as_ref(), &username).await
    {
        return error_response(err);
    }

    let violations = schemas::ARTICLE_UPDATE.validate(&body);
    if !violations.is_empty() {
        return error_response(ApiError::BadRequest(violations));
    }

    let Value::Object(fields) = body.into_inner() else {
        return error_response(ApiError::bad_request("request body must be a JSON object"));
    };
    let updates: Vec<(String, SqlParam)> = fields
        .into_iter()
        .map(|(field, value)| (field, SqlParam::from_json(value)))
        .collect();

    match articles.update(&username, &article_title, updates).await {
        Ok(article) => HttpResponse::Ok().json(json!({ "article": article })),
        Err(err) => error_response(err),
    }
}
