// Gemini-specific client implementation

use crate::gemini::GenerateContentResponse;
use crate::traits::{GenerateOptions, GenerateRequest, GenerateResponse, GenerativeClient, TokenUsage};
use crate::safety::SafetySetting;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini client (HTTP direct, no SDK)
pub struct GeminiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    /// Create new client with API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&api_key).context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    /// Point the client at another endpoint (proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Build generateContent request payload
    fn build_generate_request(
        &self,
        prompt: &str,
        safety_settings: &[SafetySetting],
        options: &GenerateOptions,
    ) -> Result<Value> {
        let mut request = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }],
                }
            ],
        });

        let obj = request
            .as_object_mut()
            .context("Request payload is not an object")?;

        if !safety_settings.is_empty() {
            obj.insert("safetySettings".to_string(), serde_json::to_value(safety_settings)?);
        }

        let mut generation_config = serde_json::Map::new();
        if let Some(temp) = options.temperature {
            generation_config.insert("temperature".to_string(), serde_json::json!(temp));
        }
        if let Some(max_tokens) = options.max_output_tokens {
            generation_config.insert("maxOutputTokens".to_string(), serde_json::json!(max_tokens));
        }
        if let Some(ref mime) = options.response_mime_type {
            generation_config.insert("responseMimeType".to_string(), serde_json::json!(mime));
        }
        if !generation_config.is_empty() {
            obj.insert("generationConfig".to_string(), Value::Object(generation_config));
        }

        Ok(request)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let payload = self.build_generate_request(
            &request.prompt,
            &request.safety_settings,
            &request.options,
        )?;

        tracing::debug!(model = %request.model, "Sending generateContent request");

        let response = self
            .http_client
            .post(self.endpoint(&request.model))
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, error_text);
        }

        let raw: Value = response
            .json()
            .await
            .context("Failed to parse response")?;
        let parsed: GenerateContentResponse =
            serde_json::from_value(raw.clone()).context("Unexpected response shape")?;

        if let Some(reason) = parsed.block_reason() {
            anyhow::bail!("Prompt blocked by provider: {}", reason);
        }

        let candidate = parsed
            .candidates
            .first()
            .context("Gemini returned no candidates")?;

        let text = candidate.text().with_context(|| {
            format!(
                "Candidate has no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )
        })?;

        Ok(GenerateResponse {
            text,
            finish_reason: candidate.finish_reason.clone(),
            usage: parsed.usage_metadata.as_ref().map(|u| TokenUsage {
                input_tokens: u.prompt_token_count.unwrap_or(0),
                output_tokens: u.candidates_token_count.unwrap_or(0),
                total_tokens: u.total_token_count.unwrap_or(0),
            }),
            raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safety::default_safety_settings;

    #[test]
    fn test_payload_carries_prompt_and_safety() {
        let client = GeminiClient::new("test-key").unwrap();
        let payload = client
            .build_generate_request("hello", &default_safety_settings(), &GenerateOptions::json())
            .unwrap();

        assert_eq!(payload["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(payload["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(payload["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_payload_omits_empty_sections() {
        let client = GeminiClient::new("test-key").unwrap();
        let payload = client
            .build_generate_request("hello", &[], &GenerateOptions::default())
            .unwrap();

        assert!(payload.get("safetySettings").is_none());
        assert!(payload.get("generationConfig").is_none());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = GeminiClient::new("test-key")
            .unwrap()
            .with_base_url("http://localhost:1234/");
        assert_eq!(
            client.endpoint("gemini-1.5-flash"),
            "http://localhost:1234/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        assert!(GeminiClient::new("bad\nkey").is_err());
    }
}
