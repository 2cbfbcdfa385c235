//! HTTP route registration.
//!
//! Registered through `web::ServiceConfig` so the server binary and the
//! integration tests build the exact same route table.

use actix_web::web;

use crate::handlers;

/// Register every summify route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth").route("/token", web::post().to(handlers::auth::issue_token_handler)),
    )
    .service(
        web::scope("/users")
            // Literal segment before the {username} captures
            .route("/register", web::post().to(handlers::users::register_handler))
            .route("", web::post().to(handlers::users::create_user_handler))
            .route("", web::get().to(handlers::users::list_users_handler))
            .route("/{username}", web::get().to(handlers::users::get_user_handler))
            .route(
                "/{username}",
                web::patch().to(handlers::users::update_user_handler),
            )
            .route(
                "/{username}",
                web::delete().to(handlers::users::delete_user_handler),
            )
            .route(
                "/{username}/articles",
                web::post().to(handlers::articles::create_article_handler),
            )
            .route(
                "/{username}/articles",
                web::get().to(handlers::articles::list_articles_handler),
            )
            .route(
                "/{username}/articles/{article_title}",
                web::put().to(handlers::articles::update_article_handler),
            )
            .route(
                "/{username}/articles/{article_title}",
                web::delete().to(handlers::articles::delete_article_handler),
            ),
    );
}
