// src/state.rs
use std::sync::Arc;

use crate::services::completion::CompletionClient;
use crate::services::relay::Relay;

pub type SharedState = Arc<AppState>;

/// Immutable after startup; shared by every request handler.
#[derive(Debug)]
pub struct AppState {
    pub relay: Relay,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self { relay: Relay::new(client, model) }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
