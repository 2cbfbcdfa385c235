//! Route tests for the login endpoint.

mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};
use summify_api::middleware::AuthenticateJwt;
use summify_api::store::{ArticleStore, UserStore};

use common::{MemoryArticleStore, MemoryUserStore};

macro_rules! init_app {
    ($users:expr, $articles:expr, $codec:expr) => {{
        let users: Arc<dyn UserStore> = $users.clone();
        let articles: Arc<dyn ArticleStore> = $articles.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($codec.clone()))
                .app_data(actix_web::web::Data::new(users))
                .app_data(actix_web::web::Data::new(articles))
                .wrap(AuthenticateJwt::new($codec.clone()))
                .configure(summify_api::routes::configure_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn login_returns_a_usable_token() {
    let users = MemoryUserStore::new();
    let articles = MemoryArticleStore::new();
    let codec = common::codec();
    users.seed("alice", "secret1", false);
    let app = init_app!(users, articles, codec);

    let req = test::TestRequest::post()
        .uri("/auth/token")
        .set_json(json!({ "username": "alice", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();

    // The issued token authenticates a follow-up request.
    let req = test::TestRequest::get()
        .uri("/users/alice")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn wrong_password_and_unknown_user_get_the_same_answer() {
    let users = MemoryUserStore::new();
    let articles = MemoryArticleStore::new();
    let codec = common::codec();
    users.seed("alice", "secret1", false);
    let app = init_app!(users, articles, codec);

    let attempts = [
        json!({ "username": "alice", "password": "wrong" }),
        json!({ "username": "ghost", "password": "secret1" }),
    ];
    for attempt in attempts {
        let req = test::TestRequest::post()
            .uri("/auth/token")
            .set_json(attempt)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["messages"][0], "invalid username/password");
    }
}
