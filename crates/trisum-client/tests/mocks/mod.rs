use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use trisum_client::{ClientError, SummaryApi};
use trisum_types::SummaryResult;

/// Scripted stand-in for the summary server
#[derive(Clone)]
pub struct MockSummaryApi {
    pub calls: Arc<Mutex<Vec<String>>>,
    fail_with: Option<(u16, Option<String>)>,
}

impl MockSummaryApi {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    /// Every call gets a non-2xx reply with the given error body
    pub fn failing(status: u16, message: Option<&str>) -> Self {
        Self {
            fail_with: Some((status, message.map(str::to_string))),
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_text(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SummaryApi for MockSummaryApi {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, ClientError> {
        self.calls.lock().unwrap().push(text.to_string());

        if let Some((status, message)) = &self.fail_with {
            return Err(ClientError::Server {
                status: *status,
                message: message.clone(),
            });
        }

        Ok(SummaryResult::new(
            "Tweet about it",
            "A LinkedIn post",
            "Hi all, a short email",
        ))
    }
}
