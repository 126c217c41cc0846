use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use artsaas_assessments::error::ScoringError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<artsaas_storage::error::StorageError> for ApiError {
    fn from(e: artsaas_storage::error::StorageError) -> Self {
        match e {
            artsaas_storage::error::StorageError::NotFound { key } => {
                ApiError::NotFound(format!("record not found: {key}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        match &e {
            // Validation failures are the user's to fix; an out-of-range
            // score is an internal-consistency fault.
            ScoringError::ScoreOutOfRange { .. } => ApiError::Internal(e.to_string()),
            _ => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl From<artsaas_auth::error::AuthError> for ApiError {
    fn from(e: artsaas_auth::error::AuthError) -> Self {
        ApiError::Unauthorized(e.to_string())
    }
}

impl From<artsaas_payments::error::PaymentError> for ApiError {
    fn from(e: artsaas_payments::error::PaymentError) -> Self {
        use artsaas_payments::error::PaymentError;
        match &e {
            PaymentError::UnsupportedCurrency(_)
            | PaymentError::BelowMinimum { .. }
            | PaymentError::Serialization(_) => ApiError::BadRequest(e.to_string()),
            PaymentError::Stripe { .. } | PaymentError::Http(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<artsaas_core::error::CoreError> for ApiError {
    fn from(e: artsaas_core::error::CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
