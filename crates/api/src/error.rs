//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::BookingKeyError;
use ledger::LedgerError;

/// Message returned for any malformed booking request.
pub const MISSING_BOOKING_FIELDS: &str = "Missing required booking fields";

/// API-level error type that maps to HTTP responses.
///
/// Seat conflicts are not errors; they are answered by the booking handler.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Unexpected failure. `message` goes to the client, `detail` to the log.
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// Wraps a ledger failure, using `message` if it turns out to be internal.
    pub fn from_ledger(err: LedgerError, message: &'static str) -> Self {
        if err.is_internal() {
            ApiError::Internal {
                message,
                detail: err.to_string(),
            }
        } else {
            ApiError::BadRequest(MISSING_BOOKING_FIELDS.into())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal { message, detail } => {
                tracing::error!(error = %detail, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        let body = serde_json::json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::from_ledger(err, "Internal server error")
    }
}

impl From<BookingKeyError> for ApiError {
    fn from(err: BookingKeyError) -> Self {
        match err {
            BookingKeyError::EmptyComponent { .. } => {
                ApiError::BadRequest(MISSING_BOOKING_FIELDS.into())
            }
            err => ApiError::BadRequest(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::BookingKey;

    #[test]
    fn empty_claim_is_a_bad_request() {
        let key = BookingKey::new("m1", "Delhi", "del-pvr-pacific", "7:30 PM").unwrap();
        let err = ApiError::from_ledger(LedgerError::EmptyClaim { key }, "Failed to book seats");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn poisoned_ledger_is_internal() {
        let err = ApiError::from_ledger(LedgerError::TablePoisoned, "Failed to book seats");
        assert!(matches!(
            err,
            ApiError::Internal {
                message: "Failed to book seats",
                ..
            }
        ));
    }

    #[test]
    fn poisoned_key_is_internal() {
        let key = BookingKey::new("m1", "Delhi", "del-pvr-pacific", "7:30 PM").unwrap();
        let err = ApiError::from_ledger(LedgerError::Poisoned { key }, "Failed to book seats");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn separator_in_key_is_a_bad_request() {
        let err: ApiError = BookingKeyError::ContainsSeparator { component: "city" }.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
