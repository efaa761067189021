//! Job title HTTP handlers.
//!
//! This module implements the job title API endpoints:
//! - GET /api/job-titles - Search/list the catalog (public)
//! - GET /api/job-titles/:slug - Get one title by slug (public)
//! - POST /api/admin/job-titles - Create a title (admin)
//! - DELETE /api/admin/job-titles/:id - Soft-delete a title (admin)

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::job_title::{CreateJobTitleRequest, JobTitleQuery, JobTitleResponse},
    services::job_title_service,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

/// Search or list job titles.
///
/// # Endpoint
///
/// `GET /api/job-titles?q=&category=&limit=&offset=`
///
/// # Query Parameters
///
/// - `q` - Optional search text, matched case-insensitively against name,
///   slug and aliases; name-prefix matches rank first
/// - `category` - Optional category filter
/// - `limit` - Page size, default 20, capped at 100
/// - `offset` - Rows to skip, default 0
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "slug": "engineering-manager",
///     "name": "Engineering Manager",
///     "category": "engineering",
///     "aliases": ["EM"],
///     "created_at": "2025-06-01T10:00:00Z",
///     "updated_at": "2025-06-01T10:00:00Z"
///   }
/// ]
/// ```
///
/// # Errors
///
/// - **400**: negative offset
pub async fn list_job_titles(
    State(pool): State<DbPool>,
    Query(query): Query<JobTitleQuery>,
) -> Result<Json<Vec<JobTitleResponse>>, AppError> {
    let titles = job_title_service::search_job_titles(&pool, &query).await?;

    // Convert each JobTitle to JobTitleResponse
    let responses: Vec<JobTitleResponse> = titles.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a single job title by slug.
///
/// # Endpoint
///
/// `GET /api/job-titles/{slug}`
///
/// # Response
///
/// - **Success (200 OK)**: the catalog entry
/// - **Error (404)**: unknown slug, or the entry has been deactivated
pub async fn get_job_title(
    State(pool): State<DbPool>,
    Path(slug): Path<String>,
) -> Result<Json<JobTitleResponse>, AppError> {
    let title = job_title_service::get_job_title_by_slug(&pool, &slug)
        .await?
        // Return 404 if not found
        .ok_or(AppError::JobTitleNotFound)?;

    Ok(Json(title.into()))
}

/// Create a job title in the catalog.
///
/// # Endpoint
///
/// `POST /api/admin/job-titles`
///
/// # Authentication
///
/// Requires valid API key in Authorization header.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Platform Engineer",
///   "category": "engineering",
///   "aliases": ["Infrastructure Engineer"]
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created (or pre-existing) entry; the
///   create is idempotent on the slug derived from the name
/// - **Error (400)**: name empty or unslugifiable
/// - **Error (401)**: invalid API key
pub async fn create_job_title(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateJobTitleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let title = job_title_service::create_job_title(&pool, request).await?;

    // Catalog mutations are attributable via the authenticated key
    tracing::info!(
        "Job title '{}' created by {}",
        title.slug,
        auth.service_name
    );

    Ok((StatusCode::CREATED, Json(JobTitleResponse::from(title))))
}

/// Deactivate (soft-delete) a job title.
///
/// # Endpoint
///
/// `DELETE /api/admin/job-titles/{id}`
///
/// # Authentication
///
/// Requires valid API key.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: unknown id or already inactive
/// - **Error (401)**: invalid API key
pub async fn deactivate_job_title(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    job_title_service::deactivate_job_title(&pool, id).await?;

    tracing::info!("Job title {} deactivated by {}", id, auth.service_name);

    Ok(StatusCode::NO_CONTENT)
}
