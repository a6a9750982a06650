// Terminal rendering of the client state. No decisions are made here.

use std::fmt::Write;

use trisum_quota::QuotaPolicy;
use trisum_types::{SummaryResult, UsageStatus};

/// Everything the screen depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub results: Option<SummaryResult>,
    pub usage: UsageStatus,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            results: None,
            usage: UsageStatus::fresh(),
        }
    }
}

/// The one body section shown for a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Form,
    Loading,
    Error(&'a str),
    Results(&'a SummaryResult),
}

impl ViewState {
    pub fn screen(&self) -> Screen<'_> {
        if self.loading {
            Screen::Loading
        } else if let Some(error) = &self.error {
            Screen::Error(error)
        } else if let Some(results) = &self.results {
            Screen::Results(results)
        } else {
            Screen::Form
        }
    }
}

pub fn usage_line(usage: &UsageStatus, policy: &QuotaPolicy) -> String {
    format!(
        "Limit: {}/{} per {}",
        usage.attempts,
        policy.max_attempts,
        policy.window_label()
    )
}

pub fn render(state: &ViewState, policy: &QuotaPolicy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Smart Summary ({})", usage_line(&state.usage, policy));
    let _ = writeln!(out);

    match state.screen() {
        Screen::Form => {
            let _ = writeln!(out, "Type or paste your text to summarize.");
        }
        Screen::Loading => {
            let _ = writeln!(out, "Analyzing the text and generating summaries...");
        }
        Screen::Error(message) => {
            let _ = writeln!(out, "Error: {}", message);
        }
        Screen::Results(results) => {
            let _ = writeln!(out, "Your summaries:");
            for (title, content) in [
                ("Tweet", &results.tweet),
                ("LinkedIn", &results.linkedin),
                ("E-mail", &results.email),
            ] {
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", title);
                let _ = writeln!(out, "{}", "-".repeat(title.len()));
                let _ = writeln!(out, "{}", content);
            }
        }
    }

    out
}
