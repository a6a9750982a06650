use std::sync::{Mutex, MutexGuard};

use trisum_types::{UsageRecord, UsageStatus};

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::policy::QuotaPolicy;
use crate::store::UsageStore;

/// Gates and records successful requests against a rolling window
///
/// Each operation holds the store lock for its whole read-modify-write.
/// Callers must run `check_usage` before `record_usage`: recording does not
/// re-check expiry and can push the count past the limit.
pub struct QuotaTracker<S, C = SystemClock> {
    store: Mutex<S>,
    clock: C,
    policy: QuotaPolicy,
}

impl<S: UsageStore> QuotaTracker<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: UsageStore, C: Clock> QuotaTracker<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store: Mutex::new(store),
            clock,
            policy: QuotaPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: QuotaPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &QuotaPolicy {
        &self.policy
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        // the record is plain data, a panic mid-update cannot leave it torn
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Decide whether a new request may proceed
    ///
    /// An expired record is deleted here, even though no request follows yet.
    pub fn check_usage(&self) -> Result<UsageStatus> {
        let mut store = self.lock();

        let Some(record) = store.load()? else {
            return Ok(UsageStatus::fresh());
        };

        let now = self.clock.now_millis();
        if record.age_ms(now) > self.policy.window_ms() {
            tracing::debug!(
                count = record.count,
                first_attempt = record.first_attempt,
                "Usage window expired, discarding record"
            );
            store.remove()?;
            return Ok(UsageStatus::fresh());
        }

        Ok(UsageStatus {
            allowed: record.count < self.policy.max_attempts,
            attempts: record.count,
        })
    }

    /// Count one successful request
    pub fn record_usage(&self) -> Result<UsageRecord> {
        let mut store = self.lock();

        let record = match store.load()? {
            Some(existing) => UsageRecord {
                count: existing.count.saturating_add(1),
                ..existing
            },
            None => UsageRecord::first(self.clock.now_millis()),
        };

        store.save(&record)?;
        tracing::debug!(count = record.count, "Recorded usage");

        Ok(record)
    }

    /// Stored record as-is, without expiry handling
    pub fn current_record(&self) -> Result<Option<UsageRecord>> {
        self.lock().load()
    }

    /// Requests left in the current window
    pub fn remaining(&self, status: &UsageStatus) -> u32 {
        self.policy.max_attempts.saturating_sub(status.attempts)
    }
}
