pub mod prompt;
pub mod summarizer;

pub use prompt::{build_prompt, SUMMARY_PROMPT_TEMPLATE};
pub use summarizer::{extract_text, parse_summary, SummarizeError, Summarizer};
