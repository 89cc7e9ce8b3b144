//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use tagnotes_api::error::AppError;
use tagnotes_core::error::CoreError;
use tagnotes_core::validation::FieldViolation;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Note",
        id: "abc".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Note with id abc not found");
}

#[tokio::test]
async fn validation_error_lists_fields() {
    let err = AppError::Core(CoreError::Validation(vec![
        FieldViolation::new("content", "Content is required"),
        FieldViolation::new("title", "Title is required"),
    ]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Validation error");
    assert_eq!(json["details"][0]["field"], "content");
    assert_eq!(json["details"][1]["message"], "Title is required");
}

#[tokio::test]
async fn bad_request_error_returns_400_without_details() {
    let err = AppError::BadRequest("invalid JSON".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn storage_error_uses_operation_message() {
    let err = AppError::storage("Failed to fetch notes")(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "Failed to fetch notes");
}

#[tokio::test]
async fn storage_error_does_not_leak_source() {
    let err = AppError::storage("Failed to update note")(sqlx::Error::Protocol(
        "password authentication failed for user notes".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json.to_string().contains("password"));
    assert_eq!(json["error"], "Failed to update note");
}

#[tokio::test]
async fn storage_row_not_found_maps_to_404() {
    let err = AppError::storage("Failed to fetch notes")(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}
