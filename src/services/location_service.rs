//! Location service - subdivision and city lookups.
//!
//! Subdivisions and cities need an existence probe on the scoping country
//! before the main query, so both lookups live here rather than in the
//! handler. Plain country reads are single queries and stay in the handler.

use crate::{
    db::DbPool,
    error::AppError,
    models::location::{City, CityQuery, Region},
    utils,
};

/// List the subdivisions of a country.
///
/// # Errors
///
/// - `CountryNotFound`: unknown country code. A known country with no
///   seeded subdivisions yields an empty list, not an error.
pub async fn list_regions(pool: &DbPool, country_code: &str) -> Result<Vec<Region>, AppError> {
    let code = country_code.trim().to_uppercase();

    // Distinguish "unknown country" from "no subdivisions"
    let country_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM countries WHERE code = $1)")
            .bind(&code)
            .fetch_one(pool)
            .await?;

    if !country_exists {
        return Err(AppError::CountryNotFound);
    }

    let regions = sqlx::query_as::<_, Region>(
        "SELECT country_code, code, name, category
         FROM regions
         WHERE country_code = $1
         ORDER BY name ASC",
    )
    .bind(&code)
    .fetch_all(pool)
    .await?;

    Ok(regions)
}

/// Search the city gazetteer.
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `query` - Country/region scope, search text, and pagination
///
/// # Ordering
///
/// Results are ordered by population (largest first, unknown last) and then
/// name, so a bare-prefix query surfaces the cities a user most likely
/// means.
///
/// # Errors
///
/// - `CountryNotFound`: a `country` filter that is not in the catalog
/// - `InvalidRequest`: `region` without `country`, or negative `offset`
/// - `Database`: query failure
pub async fn search_cities(pool: &DbPool, query: &CityQuery) -> Result<Vec<City>, AppError> {
    let offset = query.offset.unwrap_or(0);
    if offset < 0 {
        return Err(AppError::InvalidRequest(
            "offset must not be negative".to_string(),
        ));
    }
    let limit = utils::clamp_limit(query.limit);

    let country = query
        .country
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase);
    let region = query
        .region
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase);
    let q = query.q.as_deref().map(str::trim).filter(|s| !s.is_empty());

    // A region code is only meaningful within one country
    if region.is_some() && country.is_none() {
        return Err(AppError::InvalidRequest(
            "region filter requires a country filter".to_string(),
        ));
    }

    // Reject unknown countries instead of silently returning nothing
    if let Some(ref code) = country {
        let country_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM countries WHERE code = $1)")
                .bind(code)
                .fetch_one(pool)
                .await?;
        if !country_exists {
            return Err(AppError::CountryNotFound);
        }
    }

    let pattern = q.map(|q| format!("%{}%", utils::escape_like(q)));

    let cities = sqlx::query_as::<_, City>(
        r#"
        SELECT id, country_code, region_code, name, timezone, population, latitude, longitude
        FROM cities
        WHERE ($1::text IS NULL OR country_code = $1)
          AND ($2::text IS NULL OR region_code = $2)
          AND ($3::text IS NULL OR name ILIKE $4)
        ORDER BY population DESC NULLS LAST, name ASC
        LIMIT $5 OFFSET $6
        "#,
    )
    .bind(&country)
    .bind(&region)
    .bind(q)
    .bind(&pattern)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(cities)
}
