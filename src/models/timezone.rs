//! Timezone data models and API response types.

use serde::Serialize;

use crate::utils::format_utc_offset;

/// Represents a timezone record from the database.
///
/// # Database Table
///
/// Maps to the `timezones` table, seeded from the IANA database. The IANA
/// name ("America/New_York") is the primary key. Offsets are stored in
/// minutes so half-hour and 45-minute zones are exact.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Timezone {
    /// IANA name, e.g. "Asia/Kolkata"
    pub name: String,

    /// Common abbreviation for the standard-time offset, e.g. "IST"
    pub abbreviation: String,

    /// Standard UTC offset in minutes (east positive)
    pub utc_offset_minutes: i32,

    /// UTC offset in minutes while DST is in effect, NULL where the zone
    /// does not observe DST
    pub dst_offset_minutes: Option<i32>,

    /// Human-friendly label, e.g. "Eastern Time (US & Canada)"
    pub display_name: String,
}

/// Response body for timezone endpoints.
///
/// Adds the formatted `utc_offset` string clients render directly in
/// dropdowns ("(UTC+05:30) India Standard Time").
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Asia/Kolkata",
///   "abbreviation": "IST",
///   "utc_offset": "+05:30",
///   "utc_offset_minutes": 330,
///   "dst_offset_minutes": null,
///   "display_name": "India Standard Time"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TimezoneResponse {
    /// IANA name
    pub name: String,

    /// Common abbreviation
    pub abbreviation: String,

    /// Standard offset formatted as ±HH:MM
    pub utc_offset: String,

    /// Standard offset in minutes
    pub utc_offset_minutes: i32,

    /// DST offset in minutes, when the zone observes DST
    pub dst_offset_minutes: Option<i32>,

    /// Human-friendly label
    pub display_name: String,
}

/// Convert database Timezone to API TimezoneResponse.
impl From<Timezone> for TimezoneResponse {
    fn from(tz: Timezone) -> Self {
        Self {
            utc_offset: format_utc_offset(tz.utc_offset_minutes),
            name: tz.name,
            abbreviation: tz.abbreviation,
            utc_offset_minutes: tz.utc_offset_minutes,
            dst_offset_minutes: tz.dst_offset_minutes,
            display_name: tz.display_name,
        }
    }
}
