//! Job title service - search and catalog mutation logic.
//!
//! This service handles:
//! - Ranked typeahead search over names, slugs and aliases
//! - Slug-unique, idempotent catalog creation
//! - Soft deletion
//!
//! # Ranking
//!
//! Searches match case-insensitively anywhere in the name, slug or an alias,
//! but prefix matches on the name sort first so a query of "eng" shows
//! "Engineering Manager" before "Site Reliability Engineer".

use crate::{
    db::DbPool,
    error::AppError,
    models::job_title::{CreateJobTitleRequest, JobTitle, JobTitleQuery},
    utils,
};
use uuid::Uuid;

/// Columns selected for every job title query.
const JOB_TITLE_COLUMNS: &str = "id, slug, name, category, aliases, is_active, created_at, updated_at";

/// Search active job titles.
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `query` - Search text, category filter, and pagination
///
/// # Matching
///
/// With no `q`, returns the catalog ordered by name. With `q`, matches the
/// escaped text case-insensitively against name, slug and every alias.
/// Empty or whitespace-only `q` is treated as absent.
///
/// # Errors
///
/// - `InvalidRequest`: negative `offset`
/// - `Database`: query failure
pub async fn search_job_titles(
    pool: &DbPool,
    query: &JobTitleQuery,
) -> Result<Vec<JobTitle>, AppError> {
    let offset = query.offset.unwrap_or(0);
    if offset < 0 {
        return Err(AppError::InvalidRequest(
            "offset must not be negative".to_string(),
        ));
    }
    let limit = utils::clamp_limit(query.limit);

    // Whitespace-only filters are treated as absent
    let q = query.q.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    // Escape user text before it is embedded in ILIKE patterns
    let substring_pattern = q.map(|q| format!("%{}%", utils::escape_like(q)));
    let prefix_pattern = q.map(|q| format!("{}%", utils::escape_like(q)));

    let titles = sqlx::query_as::<_, JobTitle>(&format!(
        r#"
        SELECT {JOB_TITLE_COLUMNS}
        FROM job_titles
        WHERE is_active = true
          AND ($1::text IS NULL
               OR name ILIKE $2
               OR slug ILIKE $2
               OR EXISTS (SELECT 1 FROM unnest(aliases) AS alias WHERE alias ILIKE $2))
          AND ($3::text IS NULL OR category = $3)
        ORDER BY (name ILIKE $4) DESC NULLS LAST, name ASC
        LIMIT $5 OFFSET $6
        "#
    ))
    .bind(q)
    .bind(&substring_pattern)
    .bind(&category)
    .bind(&prefix_pattern)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(titles)
}

/// Get an active job title by slug.
pub async fn get_job_title_by_slug(
    pool: &DbPool,
    slug: &str,
) -> Result<Option<JobTitle>, AppError> {
    let title = sqlx::query_as::<_, JobTitle>(&format!(
        "SELECT {JOB_TITLE_COLUMNS} FROM job_titles WHERE slug = $1 AND is_active = true"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(title)
}

/// Create a job title in the catalog.
///
/// # Process
///
/// 1. Validate the name and derive its slug
/// 2. If the slug already exists, return the existing row (reactivating it
///    if it had been soft-deleted) instead of creating a duplicate
/// 3. Otherwise insert and return the new row
///
/// Creation is idempotent on the derived slug: posting the same name twice
/// yields the same record.
///
/// # Errors
///
/// - `InvalidRequest`: empty name, or a name with no ASCII alphanumerics
///   (nothing to build a slug from)
/// - `Database`: insert failure
pub async fn create_job_title(
    pool: &DbPool,
    request: CreateJobTitleRequest,
) -> Result<JobTitle, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidRequest(
            "name must not be empty".to_string(),
        ));
    }

    let slug = utils::slugify(name);
    if slug.is_empty() {
        return Err(AppError::InvalidRequest(
            "name must contain at least one ASCII letter or digit".to_string(),
        ));
    }

    let category = request.category.trim().to_lowercase();

    // Idempotent create: a colliding slug returns the existing record
    if let Some(existing) = sqlx::query_as::<_, JobTitle>(&format!(
        "SELECT {JOB_TITLE_COLUMNS} FROM job_titles WHERE slug = $1"
    ))
    .bind(&slug)
    .fetch_optional(pool)
    .await?
    {
        if existing.is_active {
            return Ok(existing);
        }
        // Re-creating a soft-deleted title brings it back
        let reactivated = sqlx::query_as::<_, JobTitle>(&format!(
            r#"
            UPDATE job_titles
            SET is_active = true, updated_at = NOW()
            WHERE id = $1
            RETURNING {JOB_TITLE_COLUMNS}
            "#
        ))
        .bind(existing.id)
        .fetch_one(pool)
        .await?;
        return Ok(reactivated);
    }

    let title = sqlx::query_as::<_, JobTitle>(&format!(
        r#"
        INSERT INTO job_titles (slug, name, category, aliases)
        VALUES ($1, $2, $3, $4)
        RETURNING {JOB_TITLE_COLUMNS}
        "#
    ))
    .bind(&slug)
    .bind(name)
    .bind(&category)
    .bind(&request.aliases)
    .fetch_one(pool)
    .await?;

    Ok(title)
}

/// Soft-delete a job title (hide it from public reads).
///
/// # Errors
///
/// - `JobTitleNotFound`: unknown id, or the title is already inactive
pub async fn deactivate_job_title(pool: &DbPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE job_titles SET is_active = false, updated_at = NOW()
         WHERE id = $1 AND is_active = true",
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::JobTitleNotFound);
    }

    Ok(())
}
