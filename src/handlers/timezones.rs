//! Timezone HTTP handlers.
//!
//! This module implements the timezone API endpoints:
//! - GET /api/timezones - List the catalog
//! - GET /api/timezones/*name - Get one timezone by IANA name
//!
//! IANA names embed slashes ("America/Argentina/Ushuaia"), so the single
//! lookup route uses a wildcard capture rather than a plain path segment.

use crate::{
    db::DbPool,
    error::AppError,
    models::timezone::{Timezone, TimezoneResponse},
};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all timezones.
///
/// # Endpoint
///
/// `GET /api/timezones`
///
/// # Response (200 OK)
///
/// Ordered by UTC offset, then name, the order timezone dropdowns render.
///
/// ```json
/// [
///   {
///     "name": "Pacific/Honolulu",
///     "abbreviation": "HST",
///     "utc_offset": "-10:00",
///     "utc_offset_minutes": -600,
///     "dst_offset_minutes": null,
///     "display_name": "Hawaii Standard Time"
///   }
/// ]
/// ```
pub async fn list_timezones(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<TimezoneResponse>>, AppError> {
    let timezones = sqlx::query_as::<_, Timezone>(
        "SELECT name, abbreviation, utc_offset_minutes, dst_offset_minutes, display_name
         FROM timezones
         ORDER BY utc_offset_minutes ASC, name ASC",
    )
    .fetch_all(&pool)
    .await?;

    let responses: Vec<TimezoneResponse> = timezones.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a timezone by IANA name.
///
/// # Endpoint
///
/// `GET /api/timezones/{*name}`, e.g. `/api/timezones/America/New_York`
///
/// Lookup is case-insensitive.
///
/// # Response
///
/// - **Success (200 OK)**: the timezone
/// - **Error (404)**: name not in the catalog
pub async fn get_timezone(
    State(pool): State<DbPool>,
    Path(name): Path<String>,
) -> Result<Json<TimezoneResponse>, AppError> {
    let timezone = sqlx::query_as::<_, Timezone>(
        "SELECT name, abbreviation, utc_offset_minutes, dst_offset_minutes, display_name
         FROM timezones
         WHERE lower(name) = lower($1)",
    )
    .bind(name.trim())
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::TimezoneNotFound)?;

    Ok(Json(timezone.into()))
}
