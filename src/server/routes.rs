//! Route table and handlers.
//!
//! | Method | Path          | Handler               |
//! |--------|---------------|-----------------------|
//! | POST   | `/api/chat`   | [`chat_handler`]      |
//! | other  | `/api/chat`   | 405 `Method not allowed` |
//! | GET    | `/api/health` | [`health_handler`]    |

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::error::ApiError;
use crate::chat::{ChatRequest, ChatResponse, ChatService};
use crate::llm::APOLOGY_REPLY;

/// State shared by all handlers.
pub struct ApiState {
    pub service: ChatService,
}

/// Build the API router around `service`.
pub fn router(service: ChatService) -> Router {
    let state = Arc::new(ApiState { service });

    Router::new()
        .route(
            "/api/chat",
            post(chat_handler).fallback(method_not_allowed),
        )
        .route("/api/health", get(health_handler))
        .with_state(state)
}

/// `POST /api/chat`: reply from the model plus canned corrections.
///
/// A failed model call answers 500 with the apology reply and no
/// corrections.
pub async fn chat_handler(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return ApiError::bad_request(rejection.body_text()).into_response(),
    };

    if request.message.trim().is_empty() {
        return ApiError::bad_request("message must not be empty").into_response();
    }

    match state.service.respond(&request).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => {
            log::error!("API Error: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse {
                    response: APOLOGY_REPLY.to_string(),
                    corrections: None,
                }),
            )
                .into_response()
        }
    }
}

/// `GET /api/health`
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
