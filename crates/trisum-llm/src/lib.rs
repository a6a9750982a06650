pub mod config;
pub mod gemini;
pub mod safety;
pub mod traits;

pub use config::{ClientFactory, GeminiConfig, ProviderConfig, ProviderType};
pub use gemini::GeminiClient;
pub use safety::{default_safety_settings, HarmBlockThreshold, HarmCategory, SafetySetting};
pub use traits::{
    GenerateOptions, GenerateRequest, GenerateResponse, GenerativeClient, TokenUsage,
};
