use serde::{Deserialize, Serialize};

/// Body of `POST /api/summarize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub text: String,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The three summaries produced for one piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Short social post, at most 280 characters with 2-3 hashtags
    pub tweet: String,
    /// Professional post ending with a call to action
    pub linkedin: String,
    /// Formal business email
    pub email: String,
}

impl SummaryResult {
    pub fn new(
        tweet: impl Into<String>,
        linkedin: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            tweet: tweet.into(),
            linkedin: linkedin.into(),
            email: email.into(),
        }
    }
}

/// Body of every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
