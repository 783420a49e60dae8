use std::fmt::{self, Debug};
use std::sync::Arc;

use tracing::{debug, error};

use super::completion::{ChatMessage, CompletionClient, CompletionError};
use crate::prompt::{APOLOGY_PREFIX, EMPTY_MESSAGE_REPLY, SYSTEM_PROMPT};

pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Forwards one user message to the completion API and hands back its reply.
///
/// Holds no per-conversation state: every call sends the system prompt and
/// the latest message only.
#[derive(Clone)]
pub struct Relay {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl Debug for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relay").field("model", &self.model).finish()
    }
}

impl Relay {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self { client, model: model.into() }
    }

    /// Handle one message.
    ///
    /// An empty (after trimming) message is answered locally. Otherwise the
    /// upstream is called exactly once and its first choice is returned as is.
    /// Failures are logged here and returned to the caller, never retried.
    pub async fn handle(&self, message: &str) -> Result<String, CompletionError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Ok(EMPTY_MESSAGE_REPLY.to_owned());
        }

        let conversation = build_conversation(trimmed);
        debug!(model = %self.model, chars = trimmed.chars().count(), "forwarding message upstream");

        self.client
            .complete(&self.model, &conversation)
            .await
            .inspect_err(|e| error!(error = %e, model = %self.model, "completion request failed"))
    }
}

/// The two-entry conversation sent upstream: the fixed prompt, then the user.
pub fn build_conversation(user_message: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_message)]
}

/// Chat-bubble text for a failed completion.
pub fn failure_reply(err: &CompletionError) -> String {
    format!("{APOLOGY_PREFIX}{err}")
}
