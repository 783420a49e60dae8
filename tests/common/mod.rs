#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use abtrow_chat::routes::create_router;
use abtrow_chat::services::completion::{ChatMessage, CompletionClient, CompletionError};
use abtrow_chat::state::AppState;
use async_trait::async_trait;
use axum::Router;
use reqwest::StatusCode;

pub const TEST_MODEL: &str = "test-model";

/// What the stub hands back on every call.
#[derive(Clone)]
pub enum Canned {
    Reply(String),
    Unauthorized(String),
    NoChoices,
}

/// Records every call and answers from a canned outcome.
pub struct StubClient {
    canned: Canned,
    calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
}

impl StubClient {
    pub fn replying(text: &str) -> Arc<Self> {
        Self::with(Canned::Reply(text.to_owned()))
    }

    pub fn failing_auth(description: &str) -> Arc<Self> {
        Self::with(Canned::Unauthorized(description.to_owned()))
    }

    pub fn with(canned: Canned) -> Arc<Self> {
        Arc::new(Self { canned, calls: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> Vec<(String, Vec<ChatMessage>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push((model.to_owned(), messages.to_vec()));
        match &self.canned {
            Canned::Reply(text) => Ok(text.clone()),
            Canned::Unauthorized(message) => Err(CompletionError::Api {
                status: StatusCode::UNAUTHORIZED,
                message: message.clone(),
            }),
            Canned::NoChoices => Err(CompletionError::EmptyChoices),
        }
    }
}

pub fn app_with(stub: Arc<StubClient>) -> Router {
    create_router().with_state(AppState::new(stub, TEST_MODEL).shared())
}
