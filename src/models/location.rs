//! Location data models: countries, subdivisions, and cities.
//!
//! This module defines:
//! - `Country`: ISO 3166-1 country entry
//! - `Region`: ISO 3166-2 subdivision (state, province, ...)
//! - `City`: gazetteer entry
//! - `CityQuery` / `CityResponse`: search parameters and response body

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a country record from the database.
///
/// # Database Table
///
/// Maps to the `countries` table, seeded from ISO 3166-1. The two-letter
/// code is the primary key; stored uppercase.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, e.g. "US"
    pub code: String,

    /// ISO 3166-1 alpha-3 code, e.g. "USA"
    pub alpha3: String,

    /// English short name
    pub name: String,

    /// Continent-level region, e.g. "Americas"
    pub region: String,

    /// Finer-grained region, e.g. "Northern America"
    pub subregion: Option<String>,
}

/// Represents a country subdivision (ISO 3166-2).
///
/// # Database Table
///
/// Maps to the `regions` table. Keyed by `(country_code, code)`; the `code`
/// column holds the subdivision part only ("CA", not "US-CA").
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Region {
    /// Country this subdivision belongs to
    pub country_code: String,

    /// Subdivision code within the country, e.g. "CA" for California
    pub code: String,

    /// English name
    pub name: String,

    /// Subdivision category, e.g. "state", "province", "territory"
    pub category: String,
}

/// Represents a city record from the database.
///
/// # Database Table
///
/// Maps to the `cities` table. Cities reference a country and optionally a
/// subdivision, and carry the IANA timezone clients need to localize times
/// for a selected city.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct City {
    /// Unique identifier for this city
    pub id: Uuid,

    /// ISO 3166-1 alpha-2 code of the containing country
    pub country_code: String,

    /// Subdivision code within the country, where known
    pub region_code: Option<String>,

    /// City name
    pub name: String,

    /// IANA timezone the city observes, e.g. "America/New_York"
    pub timezone: String,

    /// Approximate population, used for search ranking
    pub population: Option<i64>,

    /// Latitude in decimal degrees
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
}

/// Query parameters for `GET /api/location/cities`.
///
/// # Example
///
/// `GET /api/location/cities?country=US&region=CA&q=san&limit=10`
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    /// Restrict results to one country (ISO alpha-2, case-insensitive)
    pub country: Option<String>,

    /// Restrict results to one subdivision (requires `country`)
    pub region: Option<String>,

    /// Case-insensitive name prefix/substring search
    pub q: Option<String>,

    /// Maximum rows to return (default 20, capped at 100)
    pub limit: Option<i64>,

    /// Rows to skip for pagination (default 0)
    pub offset: Option<i64>,
}

/// Response body for city search results.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "9c5b94b1-35ad-49bb-b118-8e8fc24abf80",
///   "name": "San Francisco",
///   "country_code": "US",
///   "region_code": "CA",
///   "timezone": "America/Los_Angeles",
///   "population": 808437,
///   "latitude": 37.7749,
///   "longitude": -122.4194
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct CityResponse {
    /// City unique identifier
    pub id: Uuid,

    /// City name
    pub name: String,

    /// Containing country (ISO alpha-2)
    pub country_code: String,

    /// Containing subdivision, where known
    pub region_code: Option<String>,

    /// IANA timezone
    pub timezone: String,

    /// Approximate population
    pub population: Option<i64>,

    /// Latitude in decimal degrees
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
}

/// Convert database City to API CityResponse.
impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            country_code: city.country_code,
            region_code: city.region_code,
            timezone: city.timezone,
            population: city.population,
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}
