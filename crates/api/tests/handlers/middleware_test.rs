use axum::{body::to_bytes, http::StatusCode};
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_api::middleware::error_handling::{AppError, map_error};
use slotbook_core::errors::BookingError;

#[rstest]
#[case(BookingError::NotFound("Appointment".to_string()), StatusCode::NOT_FOUND)]
#[case(BookingError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::InvalidService("Inactive".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::SlotUnavailable, StatusCode::CONFLICT)]
#[case(BookingError::Authorization("Not yours".to_string()), StatusCode::FORBIDDEN)]
#[case(
    BookingError::Configuration("Zero stride".to_string()),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[case(
    BookingError::Database(eyre::eyre!("Database error")),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    assert_eq!(map_error(error).status(), expected);
}

#[tokio::test]
async fn test_error_body_carries_message() {
    let response = map_error(BookingError::SlotUnavailable);

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");

    assert_eq!(body, serde_json::json!({ "error": "Time slot not available" }));
}

#[test]
fn test_storage_reports_become_database_errors() {
    let error: AppError = eyre::eyre!("pool timed out").into();

    assert!(matches!(error.0, BookingError::Database(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
