use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use thiserror::Error;
use trisum_llm::{
    default_safety_settings, GenerateOptions, GenerateRequest, GenerativeClient, SafetySetting,
};
use trisum_types::SummaryResult;

use crate::config::LlmConfig;
use crate::service::prompt::build_prompt;

#[derive(Error, Debug)]
pub enum SummarizeError {
    /// Missing, non-string or empty `text`
    #[error("Text is required and must be a string")]
    Validation,

    /// Provider output is not a JSON object with three string fields
    #[error("Could not interpret AI response: {reason}")]
    MalformedResponse { reason: String, raw: String },

    /// Transport, auth, quota or safety-block failure at the provider
    #[error("Provider error: {0:#}")]
    Provider(anyhow::Error),
}

/// Pull `text` out of a raw request body
///
/// Anything but a JSON object with a non-empty string `text` is a
/// validation error, including bodies that are not JSON at all.
pub fn extract_text(body: &[u8]) -> Result<String, SummarizeError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| SummarizeError::Validation)?;

    match value.get("text") {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        _ => Err(SummarizeError::Validation),
    }
}

/// Parse model output into the three summaries
pub fn parse_summary(raw: &str) -> Result<SummaryResult, SummarizeError> {
    let malformed = |reason: String| SummarizeError::MalformedResponse {
        reason,
        raw: raw.to_string(),
    };

    let value: Value = serde_json::from_str(raw).map_err(|e| malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(malformed("top-level value is not an object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
}

/// Turns raw text into tweet, LinkedIn and email summaries via the provider
pub struct Summarizer {
    client: Arc<dyn GenerativeClient>,
    model: String,
    safety_settings: Vec<SafetySetting>,
    options: GenerateOptions,
}

impl Summarizer {
    pub fn new(client: Arc<dyn GenerativeClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            safety_settings: default_safety_settings(),
            options: GenerateOptions::json(),
        }
    }

    pub fn from_config(client: Arc<dyn GenerativeClient>, config: &LlmConfig) -> Self {
        let mut options = if config.json_mode {
            GenerateOptions::json()
        } else {
            GenerateOptions::new()
        };
        options.temperature = config.temperature;
        options.max_output_tokens = config.max_output_tokens;

        Self::new(client, config.model.clone()).with_options(options)
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn summarize(&self, text: &str) -> Result<SummaryResult, SummarizeError> {
        let started = Instant::now();
        let request = GenerateRequest::new(&self.model, build_prompt(text))
            .with_safety_settings(self.safety_settings.clone())
            .with_options(self.options.clone());

        let response = self
            .client
            .generate(request)
            .await
            .map_err(SummarizeError::Provider)?;

        let summary = parse_summary(&response.text)?;

        tracing::info!(
            model = %self.model,
            input_chars = text.chars().count(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Generated summaries"
        );

        Ok(summary)
    }
}
