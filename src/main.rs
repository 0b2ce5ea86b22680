mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::Config;
use database::{MongoDB, UserStore};
use services::UserService;

/// Wires the MongoDB store when one is configured. Connection problems are
/// logged and never stop the server.
async fn connect_store(config: &Config) -> UserService {
    let Some(uri) = config.mongodb_uri.as_deref() else {
        log::warn!("⚠️  MONGODB_URI not set - user endpoints will answer 500");
        return UserService::without_store();
    };

    let db = match MongoDB::new(uri, config.mongodb_database.as_deref()).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ Invalid MongoDB configuration: {}", e);
            return UserService::without_store();
        }
    };

    log::info!("📊 Database: {}", db.database().name());

    match db.ping().await {
        Ok(()) => log::info!("✅ MongoDB connected successfully"),
        Err(e) => log::error!("❌ MongoDB connection error: {}", e),
    }

    if let Err(e) = db.ensure_indexes().await {
        log::error!("❌ Failed to create indexes: {}", e);
    }

    UserService::new(Arc::new(db))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    log::info!("🚀 Starting Greeting Service...");

    let users = web::Data::new(connect_store(&config).await);

    let (host, port) = config.bind_address();
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    let allowed_origins = config.allowed_origins.clone();
    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::swagger::ApiDoc::openapi()),
            )
            .configure(api::configure(users.clone()))
    })
    .bind((host.as_str(), port))?;

    log::info!("✅ Server running at http://localhost:{}", port);

    server.run().await
}
