use axum::{Server, middleware::from_fn};
use diesel::PgConnection;
use diesel::r2d2::ConnectionManager as DbConnectionManager;
use roster_backend::{config::Config, db::DbPool, init_tracing, middleware, routes};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config);

    let manager = DbConnectionManager::<PgConnection>::new(&config.database_url);
    let pool: DbPool = match r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .min_idle(Some(config.database_min_connections))
        .build(manager)
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {}", e);
            std::process::exit(1);
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(Arc::new(pool))
        .layer(cors)
        .layer(from_fn(middleware::logger::logger));

    let addr = match config.server_address().parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid server address: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Server running at http://{}", addr);
    if let Err(e) = Server::bind(&addr).serve(app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
