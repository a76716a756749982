//! Provider configuration, loaded from TOML or environment variables.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NarrativeError, Result};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "BAZI_LLM_API_KEY";
/// Environment variable selecting the provider.
pub const ENV_PROVIDER: &str = "BAZI_LLM_PROVIDER";
/// Environment variable overriding the endpoint.
pub const ENV_BASE_URL: &str = "BAZI_LLM_BASE_URL";
/// Environment variable overriding the model.
pub const ENV_MODEL: &str = "BAZI_LLM_MODEL";

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    DeepSeek,
    Doubao,
    OpenAi,
    Gemini,
}

impl Provider {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DeepSeek => "deepseek",
            Self::Doubao => "doubao",
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// Default endpoint. For Gemini this is the API root; the model path
    /// is appended per request.
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::DeepSeek => "https://api.deepseek.com/v1/chat/completions",
            Self::Doubao => "https://ark.cn-beijing.volces.com/api/v3/chat/completions",
            Self::OpenAi => "https://api.openai.com/v1/chat/completions",
            Self::Gemini => "https://generativelanguage.googleapis.com/v1beta",
        }
    }

    pub const fn default_model(self) -> &'static str {
        match self {
            Self::DeepSeek => "deepseek-chat",
            Self::Doubao => "doubao-pro-32k",
            Self::OpenAi => "gpt-3.5-turbo",
            Self::Gemini => "gemini-pro",
        }
    }

    /// True for providers speaking the OpenAI chat-completions format.
    pub const fn is_openai_compatible(self) -> bool {
        !matches!(self, Self::Gemini)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = NarrativeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deepseek" => Ok(Self::DeepSeek),
            "doubao" => Ok(Self::Doubao),
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            other => Err(NarrativeError::Config(format!("unknown provider: {other}"))),
        }
    }
}

/// Narrative provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    pub provider: Provider,
    pub api_key: String,
    /// Endpoint override; provider default when absent.
    pub base_url: Option<String>,
    /// Model override; provider default when absent.
    pub model: Option<String>,
    /// Extra attempts after the first failure.
    pub max_retries: u32,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Per-request timeout, seconds.
    pub timeout_secs: u64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            provider: Provider::DeepSeek,
            api_key: String::new(),
            base_url: None,
            model: None,
            max_retries: 2,
            temperature: 0.7,
            max_tokens: 4000,
            timeout_secs: 120,
        }
    }
}

impl NarrativeConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NarrativeError::Config(e.to_string()))
    }

    /// Load a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| NarrativeError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::default().merge_env()
    }

    /// Overlay the process environment onto this config.
    pub fn merge_env(self) -> Result<Self> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup; unset or empty variables keep defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().merge_vars(lookup)
    }

    /// Overlay variables from `lookup`; unset or empty variables are ignored.
    pub fn merge_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(p) = get(ENV_PROVIDER) {
            self.provider = p.parse()?;
        }
        if let Some(k) = get(ENV_API_KEY) {
            self.api_key = k;
        }
        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = Some(url);
        }
        if let Some(model) = get(ENV_MODEL) {
            self.model = Some(model);
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(NarrativeError::MissingApiKey);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(NarrativeError::Config("temperature must be within [0, 2]".into()));
        }
        if self.max_tokens == 0 {
            return Err(NarrativeError::Config("max_tokens must be > 0".into()));
        }
        if self.timeout_secs == 0 {
            return Err(NarrativeError::Config("timeout_secs must be > 0".into()));
        }
        Ok(())
    }

    pub fn endpoint(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }

    pub fn model_name(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Token sent as `Authorization: Bearer`.
    ///
    /// Doubao keys may be given as `app_id:key`; only the key part is sent.
    pub fn bearer_token(&self) -> &str {
        let key = self.api_key.trim();
        match (self.provider, key.split_once(':')) {
            (Provider::Doubao, Some((_, secret))) if !secret.is_empty() => secret,
            _ => key,
        }
    }
}
