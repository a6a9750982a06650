use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use trisum_llm::{GenerateRequest, GenerateResponse, GenerativeClient};

/// Provider stand-in: returns canned text or fails, and keeps every request
#[derive(Clone)]
pub struct MockGenerativeClient {
    pub reply: String,
    pub fail_with: Option<String>,
    pub calls: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockGenerativeClient {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail_with: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            reply: String::new(),
            fail_with: Some(msg.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<GenerateRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate(&self, request: GenerateRequest) -> anyhow::Result<GenerateResponse> {
        self.calls.lock().unwrap().push(request);
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(GenerateResponse {
            text: self.reply.clone(),
            finish_reason: Some("STOP".to_string()),
            usage: None,
            raw: serde_json::Value::Null,
        })
    }
}
