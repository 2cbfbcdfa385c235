// summify server
//
// Main server binary: account management and article-summary API over
// Postgres.

mod config;
mod logging;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use log::{error, info};
use summify_api::middleware::AuthenticateJwt;
use summify_api::routes;
use summify_api::store::{ArticleStore, PgArticleStore, PgUserStore, UserStore};
use summify_auth::TokenCodec;
use tokio_postgres::NoTls;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match config::ServerConfig::from_file("config.toml") {
        Ok(cfg) => cfg,
        Err(_) => {
            eprintln!("Warning: config.toml not found, using defaults");
            config::ServerConfig::default()
        }
    };

    // Initialize logging
    logging::init_logging(
        &config.logging.level,
        config.logging.log_to_console,
        &config.logging.format,
    )?;

    info!("Starting summify server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: host={}, port={}",
        config.server.host, config.server.port
    );

    // Connect to Postgres and drive the connection on its own task
    let (client, connection) = tokio_postgres::connect(&config.database.url, NoTls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            error!("postgres connection error: {}", e);
        }
    });
    let client = Arc::new(client);
    info!("Connected to Postgres");

    // Token codec; the environment overrides the config file secret
    let secret =
        std::env::var("SUMMIFY_JWT_SECRET").unwrap_or_else(|_| config.auth.jwt_secret.clone());
    let codec = Arc::new(TokenCodec::with_expiry(
        &secret,
        config.auth.token_expiry_hours,
    ));

    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(client.clone()));
    let articles: Arc<dyn ArticleStore> = Arc::new(PgArticleStore::new(client.clone()));

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        // CORS for web browser clients
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .wrap(AuthenticateJwt::new(codec.clone()))
            .app_data(web::Data::new(codec.clone()))
            .app_data(web::Data::new(users.clone()))
            .app_data(web::Data::new(articles.clone()))
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)?
    .workers(if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    })
    .run()
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
