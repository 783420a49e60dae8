// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    response::Html,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::trace::TraceLayer;

use crate::frontend::INDEX_HTML;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(|| async { Html(INDEX_HTML) }))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        // 500s from `/chat` are already logged by the relay.
        .layer(TraceLayer::new_for_http().on_failure(()))
}
