//! Async HTTP client for the narrative providers.
//!
//! DeepSeek, Doubao and OpenAI share the chat-completions format; Gemini
//! uses `generateContent`.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::NarrativeConfig;
use crate::error::{NarrativeError, Result};

pub struct LlmClient {
    http: Client,
    config: NarrativeConfig,
}

impl LlmClient {
    /// Build a client. The config must carry an API key.
    pub fn new(config: NarrativeConfig) -> Result<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NarrativeError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    /// Send one completion request and return the response text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        info!(
            provider = self.config.provider.name(),
            model = self.config.model_name(),
            prompt_chars = user.chars().count(),
            "narrative request"
        );
        let text = if self.config.provider.is_openai_compatible() {
            self.complete_openai(system, user).await?
        } else {
            self.complete_gemini(system, user).await?
        };
        info!(response_chars = text.chars().count(), "narrative response");
        Ok(text)
    }

    async fn complete_openai(&self, system: &str, user: &str) -> Result<String> {
        let request = OpenAiRequest {
            model: self.config.model_name(),
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        let response = self
            .http
            .post(self.config.endpoint())
            .bearer_auth(self.config.bearer_token())
            .json(&request)
            .send()
            .await
            .map_err(network)?;
        let completion: OpenAiResponse = read_json(response).await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(NarrativeError::EmptyResponse)
    }

    async fn complete_gemini(&self, system: &str, user: &str) -> Result<String> {
        let url = gemini_url(self.config.endpoint(), self.config.model_name());
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: format!("{system}\n\n{user}"),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_tokens,
            },
        };
        let response = self
            .http
            .post(url)
            .query(&[("key", self.config.bearer_token())])
            .json(&request)
            .send()
            .await
            .map_err(network)?;
        let completion: GeminiResponse = read_json(response).await?;
        completion
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(NarrativeError::EmptyResponse)
    }
}

fn network(e: reqwest::Error) -> NarrativeError {
    NarrativeError::Network(e.to_string())
}

/// `{base}/models/{model}:generateContent`.
fn gemini_url(base: &str, model: &str) -> String {
    format!("{}/models/{model}:generateContent", base.trim_end_matches('/'))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    if !status.is_success() {
        debug!(status = status.as_u16(), "provider error body: {body}");
        return Err(NarrativeError::from_status(status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|e| NarrativeError::Parse(e.to_string()))
}

// OpenAI-compatible chat completions
#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// Gemini generateContent
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: GeminiContent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provider;

    fn config(provider: Provider) -> NarrativeConfig {
        NarrativeConfig {
            provider,
            api_key: "test-key".into(),
            ..NarrativeConfig::default()
        }
    }

    #[test]
    fn client_requires_key() {
        let err = LlmClient::new(NarrativeConfig::default()).err();
        assert_eq!(err, Some(NarrativeError::MissingApiKey));
    }

    #[test]
    fn client_creation() {
        let client = LlmClient::new(config(Provider::DeepSeek)).unwrap();
        assert_eq!(client.config().model_name(), "deepseek-chat");
    }

    #[test]
    fn gemini_url_shape() {
        assert_eq!(
            gemini_url("https://generativelanguage.googleapis.com/v1beta/", "gemini-pro"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn openai_request_body() {
        let request = OpenAiRequest {
            model: "deepseek-chat",
            messages: vec![Message {
                role: "user",
                content: "hi",
            }],
            temperature: 0.5,
            max_tokens: 100,
        };
        let v = serde_json::to_value(&request).unwrap();
        assert_eq!(v["model"], "deepseek-chat");
        assert_eq!(v["messages"][0]["role"], "user");
        assert_eq!(v["max_tokens"], 100);
    }

    #[test]
    fn gemini_request_uses_camel_case() {
        let request = GeminiRequest {
            contents: vec![],
            generation_config: GenerationConfig {
                temperature: 0.5,
                max_output_tokens: 10,
            },
        };
        let v = serde_json::to_value(&request).unwrap();
        assert_eq!(v["generationConfig"]["maxOutputTokens"], 10);
    }

    #[test]
    fn response_shapes_deserialize() {
        let r: OpenAiResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"ok"}}]}"#).unwrap();
        assert_eq!(r.choices[0].message.content.as_deref(), Some("ok"));
        let g: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(g.candidates[0].content.parts[0].text, "ok");
    }
}
