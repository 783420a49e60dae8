//! Process configuration, read once from the environment at startup.

use std::time::Duration;

use crate::services::{completion::DEFAULT_BASE_URL, relay::DEFAULT_MODEL};

pub const DEFAULT_PORT: u16 = 10000;

#[derive(Debug, Clone)]
pub struct Config {
    /// `OPENAI_API_KEY`. Absent or blank means every completion call fails.
    pub api_key: Option<String>,

    /// `PORT`, bound on all interfaces (default: 10000).
    pub port: u16,

    /// `OPENAI_MODEL` (default: `gpt-4.1-mini`).
    pub model: String,

    /// `OPENAI_BASE_URL` (default: `https://api.openai.com/v1`).
    pub base_url: String,

    /// `OPENAI_TIMEOUT_SECS`, applied by the HTTP client to each upstream request.
    pub request_timeout: Duration,

    /// `ABTROW_LOG`, a `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        Self {
            api_key: lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            port: lookup("PORT").and_then(|v| v.trim().parse().ok()).unwrap_or(DEFAULT_PORT),
            model: get("OPENAI_MODEL", DEFAULT_MODEL),
            base_url: get("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            request_timeout: Duration::from_secs(
                lookup("OPENAI_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()).unwrap_or(60),
            ),
            log_level: get("ABTROW_LOG", "info"),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
