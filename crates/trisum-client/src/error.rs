use thiserror::Error;

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text to summarize.";
pub const FALLBACK_HTTP_MESSAGE: &str = "Failed to fetch summary from the API.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while generating the summary. Please try again.";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("<no error message>"))]
    Server { status: u16, message: Option<String> },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid server response: {0}")]
    Decode(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Message shown to the user: the server's own message when it sent one
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Server { message: None, .. } => FALLBACK_HTTP_MESSAGE.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
