//! Language HTTP handlers.
//!
//! This module implements the language API endpoints:
//! - GET /api/languages - List the catalog
//! - GET /api/languages/:code - Get one language by ISO 639-1 code

use crate::{db::DbPool, error::AppError, models::language::Language};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all languages.
///
/// # Endpoint
///
/// `GET /api/languages`
///
/// # Response (200 OK)
///
/// Ordered by English name.
///
/// ```json
/// [
///   {
///     "code": "ar",
///     "iso639_2": "ara",
///     "name": "Arabic",
///     "native_name": "العربية",
///     "rtl": true
///   }
/// ]
/// ```
pub async fn list_languages(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<Language>>, AppError> {
    let languages = sqlx::query_as::<_, Language>(
        "SELECT code, iso639_2, name, native_name, rtl FROM languages ORDER BY name ASC",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(languages))
}

/// Get a language by ISO 639-1 code.
///
/// # Endpoint
///
/// `GET /api/languages/{code}`
///
/// The code is case-insensitive: `EN` and `en` resolve identically.
///
/// # Response
///
/// - **Success (200 OK)**: the language
/// - **Error (404)**: unknown code
pub async fn get_language(
    State(pool): State<DbPool>,
    Path(code): Path<String>,
) -> Result<Json<Language>, AppError> {
    let language = sqlx::query_as::<_, Language>(
        "SELECT code, iso639_2, name, native_name, rtl FROM languages WHERE code = $1",
    )
    .bind(code.trim().to_lowercase())
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::LanguageNotFound)?;

    Ok(Json(language))
}
