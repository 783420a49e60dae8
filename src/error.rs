// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    message::ChatResponse,
    prompt::UNREADABLE_REQUEST_REPLY,
    services::{completion::CompletionError, relay::failure_reply},
};

/// Per-request failures of `/chat`. Every variant still renders a
/// `{"reply": ...}` body so the widget always has a bubble to show.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("upstream completion failed: {0}")]
    Upstream(#[from] CompletionError),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream failures are logged by the relay.
        let (status, reply) = match &self {
            AppError::Upstream(e) => (StatusCode::INTERNAL_SERVER_ERROR, failure_reply(e)),
            AppError::BadRequest(detail) => {
                tracing::warn!(%detail, "rejected unreadable chat request");
                (StatusCode::BAD_REQUEST, UNREADABLE_REQUEST_REPLY.to_owned())
            }
        };

        (status, Json(ChatResponse::new(reply))).into_response()
    }
}
