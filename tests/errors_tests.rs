use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use reference_data_service::error::AppError;

#[test]
fn test_invalid_api_key_is_401() {
    let response = AppError::InvalidApiKey.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_not_found_variants_are_404() {
    assert_eq!(
        AppError::JobTitleNotFound.into_response().status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::CountryNotFound.into_response().status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::TimezoneNotFound.into_response().status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::LanguageNotFound.into_response().status(),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn test_invalid_request_is_400() {
    let response = AppError::InvalidRequest("bad input".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_database_error_is_500() {
    let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_body_envelope() {
    let response =
        AppError::InvalidRequest("offset must not be negative".to_string()).into_response();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["error"]["code"], "invalid_request");
    assert_eq!(json["error"]["message"], "offset must not be negative");
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["error"]["code"], "internal_error");
    // The sqlx error text must never leak to the client
    assert_eq!(json["error"]["message"], "An internal error occurred");
}

#[tokio::test]
async fn test_not_found_error_code() {
    let response = AppError::TimezoneNotFound.into_response();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["error"]["code"], "timezone_not_found");
    assert_eq!(json["error"]["message"], "Timezone not found");
}
