use tracing::info;

use crate::client::LlmClient;
use crate::config::NarrativeConfig;
use crate::error::Result;
use crate::parser::{AnalysisResponse, ElementAdvice, parse_analysis_response, parse_element_advice};
use crate::prompt::{SYSTEM_MESSAGE, analysis_prompt, element_advice_prompt};
use crate::retry::RetryPolicy;
use crate::snapshot::ChartSnapshot;

/// Prompt, call and parse, with retries.
pub struct NarrativeService {
    client: LlmClient,
    retry: RetryPolicy,
}

impl NarrativeService {
    pub fn new(config: NarrativeConfig) -> Result<Self> {
        let retry = RetryPolicy::new(config.max_retries);
        Ok(Self {
            client: LlmClient::new(config)?,
            retry,
        })
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Free-text analysis. Any element-advice JSON the model adds anyway is
    /// stripped from the text and kept in `element_advice`.
    pub async fn analyze(&self, snapshot: &ChartSnapshot) -> Result<AnalysisResponse> {
        let prompt = analysis_prompt(snapshot, false);
        let text = self.request("analysis", &prompt).await?;
        let response = parse_analysis_response(&text, true);
        info!(
            suggestions = response.suggestions.len(),
            warnings = response.warnings.len(),
            "analysis parsed"
        );
        Ok(response)
    }

    /// Favorable / unfavorable element annotation.
    pub async fn element_advice(&self, snapshot: &ChartSnapshot) -> Result<ElementAdvice> {
        let prompt = element_advice_prompt(snapshot);
        let text = self.request("element advice", &prompt).await?;
        parse_element_advice(&text)
    }

    async fn request(&self, label: &str, prompt: &str) -> Result<String> {
        let client = &self.client;
        self.retry
            .run(label, move || client.complete(SYSTEM_MESSAGE, prompt))
            .await
    }
}
