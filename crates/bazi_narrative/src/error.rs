//! Error types for the narrative layer.

use thiserror::Error;

/// Errors from configuring, calling or parsing an LLM provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NarrativeError {
    /// No API key configured.
    #[error("no API key configured (set BAZI_LLM_API_KEY or api_key in the config file)")]
    MissingApiKey,
    /// Provider rejected the credentials (HTTP 401/403).
    #[error("API key rejected or expired (HTTP {status})")]
    Auth { status: u16 },
    /// Provider throttled the request (HTTP 429).
    #[error("rate limited by provider, retry later")]
    RateLimited,
    /// Any other non-success HTTP status.
    #[error("API request failed (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    /// Transport-level failure: DNS, connect, TLS, timeout.
    #[error("network error: {0}")]
    Network(String),
    /// Success status but no content in the body.
    #[error("provider returned an empty response")]
    EmptyResponse,
    /// Response body or embedded JSON could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
    /// Configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(String),
}

impl NarrativeError {
    /// True for failures that may succeed on a later attempt.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::Network(_) | Self::Api { .. }
        )
    }

    /// Map a non-success HTTP status and body text to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Auth { status },
            429 => Self::RateLimited,
            _ => Self::Api {
                status,
                message: error_message(body),
            },
        }
    }
}

/// `error.message` from a JSON error body, else the trimmed raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

pub type Result<T> = std::result::Result<T, NarrativeError>;
