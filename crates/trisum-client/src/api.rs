use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use trisum_types::{ErrorBody, SummaryRequest, SummaryResult};

use crate::error::ClientError;

/// Remote side of one summarization attempt
#[async_trait]
pub trait SummaryApi: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, ClientError>;
}

/// Calls `POST {server}/api/summarize`
pub struct HttpSummaryApi {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpSummaryApi {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        let server_url = server_url.trim_end_matches('/');
        if !(server_url.starts_with("http://") || server_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(server_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: format!("{}/api/summarize", server_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryApi for HttpSummaryApi {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, ClientError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&SummaryRequest::new(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|body| body.error)
                .filter(|m| !m.is_empty());
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SummaryResult>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalized() {
        let api = HttpSummaryApi::new("http://localhost:3000/").unwrap();
        assert_eq!(api.endpoint(), "http://localhost:3000/api/summarize");
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert!(matches!(
            HttpSummaryApi::new("localhost:3000"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
