//! Reference Data Service - Main Application Entry Point
//!
//! This is a REST API server that serves curated reference data (job titles,
//! locations, timezones, languages) to client applications such as signup
//! forms, profile editors, and typeahead widgets.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: API key with SHA-256 hashing (admin surface only)
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations (schema + seeded reference catalogs)
//! 4. Ensure a bootstrap admin API key exists
//! 5. Build HTTP router with routes and middleware
//! 6. Start server on configured port

use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use reference_data_service::{app, config, db, services};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Make sure the admin surface is usable on a fresh database
    services::api_key_service::ensure_bootstrap_key(&pool).await?;

    // Reference data is consumed directly by browsers. Any origin by default;
    // restricted to one origin when CORS_ALLOWED_ORIGIN is set.
    let cors = match config.cors_allowed_origin.as_deref() {
        Some(origin) => CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(origin.parse::<HeaderValue>()?),
        None => CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any),
    };

    let app = app(pool)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
