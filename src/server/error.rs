//! JSON error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// An HTTP error rendered as `{"message": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status_code: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self {
            status_code: StatusCode::METHOD_NOT_ALLOWED,
            message: "Method not allowed".into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("API error {}: {}", self.status_code, self.message);
        (self.status_code, Json(json!({ "message": self.message }))).into_response()
    }
}
