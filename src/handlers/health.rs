//! Health check endpoint for service monitoring.

use crate::{db::DbPool, error::AppError};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// Returns service status, database connectivity, and catalog row counts so
/// an operator can see at a glance whether the seed migrations ran.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// Row counts for the served catalogs
    pub catalog: CatalogCounts,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Row counts for each reference catalog.
#[derive(Debug, Serialize)]
pub struct CatalogCounts {
    /// Active job titles
    pub job_titles: i64,

    /// Countries
    pub countries: i64,

    /// Timezones
    pub timezones: i64,

    /// Languages
    pub languages: i64,
}

/// Health check handler.
///
/// # Checks
///
/// - Database connectivity (the catalog counts double as the probe query)
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "database": "connected",
///   "catalog": {
///     "job_titles": 42,
///     "countries": 30,
///     "timezones": 27,
///     "languages": 30
///   },
///   "timestamp": "2025-06-01T19:00:00Z"
/// }
/// ```
///
/// # Response (500 Internal Server Error)
///
/// If database is unreachable, returns standard error response.
pub async fn health_check(State(pool): State<DbPool>) -> Result<Json<HealthResponse>, AppError> {
    let (job_titles, countries, timezones, languages): (i64, i64, i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM job_titles WHERE is_active = true),
                (SELECT COUNT(*) FROM countries),
                (SELECT COUNT(*) FROM timezones),
                (SELECT COUNT(*) FROM languages)",
    )
    .fetch_one(&pool)
    .await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        catalog: CatalogCounts {
            job_titles,
            countries,
            timezones,
            languages,
        },
        timestamp: Utc::now(),
    }))
}
