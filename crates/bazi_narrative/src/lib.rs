//! Narrative layer for BaZi readings.
//!
//! This crate provides:
//! - A serializable, read-only [`ChartSnapshot`] of a computed chart
//! - Analysis and element-advice prompts built from the snapshot
//! - Provider configuration from TOML or environment variables
//! - An async client for OpenAI-compatible providers and Gemini, with retry
//! - Response parsing: suggestions, cautions and the element annotation
//!
//! Nothing here feeds back into chart computation.

pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod retry;
pub mod service;
pub mod snapshot;

pub use client::LlmClient;
pub use config::{ENV_API_KEY, ENV_BASE_URL, ENV_MODEL, ENV_PROVIDER, NarrativeConfig, Provider};
pub use error::{NarrativeError, Result};
pub use parser::{
    AnalysisResponse, ElementAdvice, extract_json, parse_analysis_response, parse_element_advice,
    strip_element_json,
};
pub use prompt::{SYSTEM_MESSAGE, analysis_prompt, element_advice_prompt, luck_line};
pub use retry::RetryPolicy;
pub use service::NarrativeService;
pub use snapshot::{
    CareerView, ChartSnapshot, ElementScoreView, LuckPillarView, LuckView, PeakView, PillarsView,
};
