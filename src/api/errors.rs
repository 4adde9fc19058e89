use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::errors::BridgeError;

/// The single failure boundary: every handler error lands here and leaves as
/// JSON. Handlers never carry their own catch-all.
impl IntoResponse for BridgeError {
    fn into_response(self) -> axum::response::Response {
        match self {
            BridgeError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                Json(json!({"field": field, "message": message})),
            )
                .into_response(),
            BridgeError::NotFound { field, message } => (
                StatusCode::NOT_FOUND,
                Json(json!({"field": field, "message": message})),
            )
                .into_response(),
            BridgeError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response(),
            BridgeError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": message})),
            )
                .into_response(),
            other => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": other.to_string()})),
            )
                .into_response(),
        }
    }
}
