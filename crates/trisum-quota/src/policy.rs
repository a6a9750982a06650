use std::time::Duration;

const DEFAULT_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_WINDOW: Duration = Duration::from_secs(60 * 60);

/// How many successful requests are allowed per rolling window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaPolicy {
    pub max_attempts: u32,
    /// Measured from the first recorded attempt, not a clock boundary
    pub window: Duration,
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            window: DEFAULT_WINDOW,
        }
    }
}

impl QuotaPolicy {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }

    /// "hour", "2 hours", "30 minutes"
    pub fn window_label(&self) -> String {
        let secs = self.window.as_secs();
        match (secs % 3600, secs / 3600, secs / 60) {
            (0, 1, _) => "hour".to_string(),
            (0, hours, _) => format!("{} hours", hours),
            (_, _, 1) => "minute".to_string(),
            (_, _, minutes) => format!("{} minutes", minutes),
        }
    }

    pub fn exceeded_message(&self) -> String {
        format!(
            "You have reached the limit of {} summaries per {}. Please try again later.",
            self.max_attempts,
            self.window_label()
        )
    }
}
