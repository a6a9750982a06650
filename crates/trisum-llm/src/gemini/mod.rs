pub mod client;
pub mod responses;

pub use client::GeminiClient;
pub use responses::{
    Candidate, CandidateContent, GenerateContentResponse, Part, PromptFeedback, SafetyRating,
    UsageMetadata,
};
