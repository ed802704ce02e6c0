// =========================
// tests/unit/error_tests.rs
// =========================
//! Unit tests for the error module
use axum::http::StatusCode;
use axum::response::IntoResponse;
use backend_lib::error::AppError;
use passgen_common::{ErrorBody, SIZE_LIMIT};

#[test]
fn test_app_error_status_codes() {
    assert_eq!(AppError::InvalidKey.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        AppError::InvalidMaxSize { min: SIZE_LIMIT }.status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(AppError::NoOptions.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_size_message_names_minimum() {
    let message = AppError::InvalidMaxSize { min: SIZE_LIMIT }.to_string();
    assert!(message.contains(&SIZE_LIMIT.to_string()));
    assert!(message.starts_with("A Password max size must be provided"));
}

#[tokio::test]
async fn test_error_body_shape() {
    let response = AppError::InvalidKey.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "Invalid Key provided!");

    let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(raw.as_object().unwrap().len(), 1);
}
