//! Job title data models and API request/response types.
//!
//! This module defines:
//! - `JobTitle`: Database entity representing a catalog entry
//! - `CreateJobTitleRequest`: Request body for the admin create endpoint
//! - `JobTitleResponse`: Response body returned to clients
//! - `JobTitleQuery`: Query parameters for the search endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a job title record from the database.
///
/// # Database Table
///
/// Maps to the `job_titles` table. Each entry:
/// - Has a unique `slug` derived from its name, used as the public identifier
/// - Carries a list of aliases that also match during typeahead search
/// - Can be soft-deleted via `is_active` without losing the record
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct JobTitle {
    /// Unique identifier for this job title
    pub id: Uuid,

    /// URL-safe identifier derived from the name
    ///
    /// Example: "Senior Software Engineer" → "senior-software-engineer".
    /// Unique across the catalog; creating a title whose slug already
    /// exists returns the existing row.
    pub slug: String,

    /// Canonical display name
    pub name: String,

    /// Catalog category
    ///
    /// Examples: "engineering", "design", "sales". Free-form but seeded
    /// from a small curated set.
    pub category: String,

    /// Alternate names that should also match during search
    ///
    /// Example: "Software Engineer" carries aliases like
    /// "Software Developer" and "Programmer".
    pub aliases: Vec<String>,

    /// Whether this entry is visible on the public API
    ///
    /// Deactivated entries are hidden from reads but kept for audit.
    pub is_active: bool,

    /// Timestamp when the entry was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last change to the entry
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for `GET /api/job-titles`.
///
/// # Example
///
/// `GET /api/job-titles?q=eng&category=engineering&limit=10`
#[derive(Debug, Deserialize)]
pub struct JobTitleQuery {
    /// Case-insensitive search text matched against name, slug and aliases
    pub q: Option<String>,

    /// Restrict results to a single category
    pub category: Option<String>,

    /// Maximum rows to return (default 20, capped at 100)
    pub limit: Option<i64>,

    /// Rows to skip for pagination (default 0)
    pub offset: Option<i64>,
}

/// Request body for creating a job title on the admin surface.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Staff Software Engineer",
///   "category": "engineering",
///   "aliases": ["Staff Engineer"]
/// }
/// ```
///
/// # Validation
///
/// - `name`: Required, must contain at least one ASCII alphanumeric
///   character (the slug is derived from it)
/// - `category`: Optional, defaults to "general"
/// - `aliases`: Optional, defaults to an empty list
#[derive(Debug, Deserialize)]
pub struct CreateJobTitleRequest {
    /// Canonical display name for the new title
    pub name: String,

    /// Category (defaults to "general" if not provided)
    #[serde(default = "default_category")]
    pub category: String,

    /// Alternate names matched during search (defaults to empty)
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Default category value when not specified in request.
fn default_category() -> String {
    "general".to_string()
}

/// Response body for job title endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "slug": "senior-software-engineer",
///   "name": "Senior Software Engineer",
///   "category": "engineering",
///   "aliases": ["Sr. Software Engineer"],
///   "created_at": "2025-06-01T10:00:00Z",
///   "updated_at": "2025-06-01T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct JobTitleResponse {
    /// Job title unique identifier
    pub id: Uuid,

    /// URL-safe public identifier
    pub slug: String,

    /// Canonical display name
    pub name: String,

    /// Catalog category
    pub category: String,

    /// Alternate names
    pub aliases: Vec<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Convert database JobTitle to API JobTitleResponse.
///
/// This transformation drops the internal `is_active` flag; public reads
/// only ever see active rows.
impl From<JobTitle> for JobTitleResponse {
    fn from(title: JobTitle) -> Self {
        Self {
            id: title.id,
            slug: title.slug,
            name: title.name,
            category: title.category,
            aliases: title.aliases,
            created_at: title.created_at,
            updated_at: title.updated_at,
        }
    }
}
