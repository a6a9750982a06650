use serde::{Deserialize, Serialize};

/// Locally persisted usage counter for the rolling quota window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub count: u32,
    /// Epoch milliseconds of the first recorded attempt in the window
    #[serde(rename = "firstAttempt")]
    pub first_attempt: i64,
}

impl UsageRecord {
    /// Record for the first successful request of a window
    pub fn first(now_ms: i64) -> Self {
        Self {
            count: 1,
            first_attempt: now_ms,
        }
    }

    /// Milliseconds elapsed since the window opened
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.first_attempt)
    }
}

/// Outcome of a quota check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStatus {
    pub allowed: bool,
    pub attempts: u32,
}

impl UsageStatus {
    pub fn fresh() -> Self {
        Self {
            allowed: true,
            attempts: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_record_uses_first_attempt_key() {
        let record = UsageRecord {
            count: 3,
            first_attempt: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"count":3,"firstAttempt":1700000000000}"#);
    }

    #[test]
    fn test_first_record() {
        let record = UsageRecord::first(42);
        assert_eq!(record.count, 1);
        assert_eq!(record.first_attempt, 42);
        assert_eq!(record.age_ms(100), 58);
    }

    #[test]
    fn test_age_saturates_on_extreme_timestamps() {
        let record = UsageRecord {
            count: 1,
            first_attempt: i64::MIN,
        };
        assert_eq!(record.age_ms(1_000), i64::MAX);

        let record = UsageRecord {
            count: 1,
            first_attempt: i64::MAX,
        };
        assert_eq!(record.age_ms(-1_000), i64::MIN);
    }
}
