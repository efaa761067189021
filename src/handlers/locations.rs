//! Location HTTP handlers.
//!
//! This module implements the location API endpoints:
//! - GET /api/location/countries - List all countries
//! - GET /api/location/countries/:code - Get one country
//! - GET /api/location/countries/:code/regions - List a country's subdivisions
//! - GET /api/location/cities - Search the city gazetteer

use crate::{
    db::DbPool,
    error::AppError,
    models::location::{CityQuery, CityResponse, Country, Region},
    services::location_service,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

/// Columns selected for every country query.
const COUNTRY_COLUMNS: &str = "code, alpha3, name, region, subregion";

/// List all countries.
///
/// # Endpoint
///
/// `GET /api/location/countries`
///
/// # Response (200 OK)
///
/// Ordered by English name.
///
/// ```json
/// [
///   {
///     "code": "DE",
///     "alpha3": "DEU",
///     "name": "Germany",
///     "region": "Europe",
///     "subregion": "Western Europe"
///   }
/// ]
/// ```
pub async fn list_countries(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<Country>>, AppError> {
    let countries = sqlx::query_as::<_, Country>(&format!(
        "SELECT {COUNTRY_COLUMNS} FROM countries ORDER BY name ASC"
    ))
    .fetch_all(&pool)
    .await?;

    Ok(Json(countries))
}

/// Get a country by ISO 3166-1 alpha-2 code.
///
/// # Endpoint
///
/// `GET /api/location/countries/{code}`
///
/// The code is case-insensitive: `us` and `US` resolve identically.
///
/// # Response
///
/// - **Success (200 OK)**: the country
/// - **Error (404)**: unknown code
pub async fn get_country(
    State(pool): State<DbPool>,
    Path(code): Path<String>,
) -> Result<Json<Country>, AppError> {
    let country = sqlx::query_as::<_, Country>(&format!(
        "SELECT {COUNTRY_COLUMNS} FROM countries WHERE code = $1"
    ))
    .bind(code.trim().to_uppercase())
    .fetch_optional(&pool)
    .await?
    // Return 404 if not found
    .ok_or(AppError::CountryNotFound)?;

    Ok(Json(country))
}

/// List the subdivisions (states, provinces, ...) of a country.
///
/// # Endpoint
///
/// `GET /api/location/countries/{code}/regions`
///
/// # Response
///
/// - **Success (200 OK)**: subdivisions ordered by name; an empty array
///   when the country has no seeded subdivisions
/// - **Error (404)**: unknown country code
pub async fn list_regions(
    State(pool): State<DbPool>,
    Path(code): Path<String>,
) -> Result<Json<Vec<Region>>, AppError> {
    let regions = location_service::list_regions(&pool, &code).await?;

    Ok(Json(regions))
}

/// Search cities.
///
/// # Endpoint
///
/// `GET /api/location/cities?country=&region=&q=&limit=&offset=`
///
/// # Query Parameters
///
/// - `country` - Optional ISO alpha-2 scope (case-insensitive); must exist
/// - `region` - Optional subdivision scope; only valid with `country`
/// - `q` - Optional case-insensitive name search
/// - `limit` / `offset` - Pagination (default 20, capped at 100)
///
/// # Response (200 OK)
///
/// Ordered by population (largest first, unknown last), then name.
///
/// # Errors
///
/// - **400**: `region` without `country`, or negative offset
/// - **404**: unknown `country`
pub async fn search_cities(
    State(pool): State<DbPool>,
    Query(query): Query<CityQuery>,
) -> Result<Json<Vec<CityResponse>>, AppError> {
    let cities = location_service::search_cities(&pool, &query).await?;

    // Convert each City to CityResponse
    let responses: Vec<CityResponse> = cities.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}
