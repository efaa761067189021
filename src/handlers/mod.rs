//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Service health endpoint
pub mod health;
/// Job title catalog endpoints
pub mod job_titles;
/// Language catalog endpoints
pub mod languages;
/// Country, region and city endpoints
pub mod locations;
/// Timezone catalog endpoints
pub mod timezones;
