//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request/response types exposed on the API.

/// API key authentication model
pub mod api_key;
/// Job title catalog model
pub mod job_title;
/// Language catalog model
pub mod language;
/// Country, region and city models
pub mod location;
/// Timezone catalog model
pub mod timezone;
