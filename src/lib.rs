//! Reference data service library.
//!
//! This crate implements a REST API that serves curated reference data to
//! client applications: job titles, locations (countries, subdivisions,
//! cities), timezones, and languages. Read endpoints are public; catalog
//! mutations are an authenticated admin surface.
//!
//! The library exposes the router via [`app`] so the binary and integration
//! tests share the exact same routing table.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post},
};

use db::DbPool;

/// Build the application router.
///
/// # Route Groups
///
/// - **Public reads**: reference catalogs, no authentication. These are the
///   endpoints consumed directly by browsers, so they sit in front of the
///   CORS layer applied in `main`.
/// - **Admin**: job title catalog mutations, guarded by the API key
///   middleware.
///
/// # Arguments
///
/// * `pool` - Database connection pool shared with all handlers via State
pub fn app(pool: DbPool) -> Router {
    // Admin routes (API key required)
    let admin_routes = Router::new()
        .route(
            "/api/admin/job-titles",
            post(handlers::job_titles::create_job_title),
        )
        .route(
            "/api/admin/job-titles/{id}",
            delete(handlers::job_titles::deactivate_job_title),
        )
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            pool.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        // Job title catalog
        .route("/api/job-titles", get(handlers::job_titles::list_job_titles))
        .route(
            "/api/job-titles/{slug}",
            get(handlers::job_titles::get_job_title),
        )
        // Location catalog
        .route(
            "/api/location/countries",
            get(handlers::locations::list_countries),
        )
        .route(
            "/api/location/countries/{code}",
            get(handlers::locations::get_country),
        )
        .route(
            "/api/location/countries/{code}/regions",
            get(handlers::locations::list_regions),
        )
        .route(
            "/api/location/cities",
            get(handlers::locations::search_cities),
        )
        // Timezone catalog. IANA names contain slashes (America/New_York),
        // so the single-timezone route captures the rest of the path.
        .route("/api/timezones", get(handlers::timezones::list_timezones))
        .route(
            "/api/timezones/{*name}",
            get(handlers::timezones::get_timezone),
        )
        // Language catalog
        .route("/api/languages", get(handlers::languages::list_languages))
        .route(
            "/api/languages/{code}",
            get(handlers::languages::get_language),
        )
        // Merge admin routes
        .merge(admin_routes)
        // Share database pool with all handlers via State extraction
        .with_state(pool)
}
