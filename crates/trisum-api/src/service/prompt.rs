/// Instruction sent to the model; `{text}` is replaced with the user's input
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"You are a communication expert. Analyze the text below and write three distinct summaries of it. Your answer MUST be a single valid JSON object, with no extra formatting, no surrounding text and no code fences.

The JSON object must have exactly three keys: "tweet", "linkedin" and "email".

Text to summarize:
---
{text}
---

Instructions for each summary:
1. "tweet": A short, punchy summary for Twitter (at most 280 characters). Use 2 to 3 relevant hashtags.
2. "linkedin": A professional summary for a LinkedIn post. It should be somewhat more detailed and engaging, and end with a call to action.
3. "email": A formal, objective summary suited to a business email. Focus on the key points, clearly and directly.

Return only the JSON object."#;

pub fn build_prompt(text: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE.replacen("{text}", text, 1)
}
