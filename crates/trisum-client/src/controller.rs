use trisum_quota::{Clock, QuotaPolicy, QuotaTracker, SystemClock, UsageStore};
use trisum_types::{SummaryResult, UsageStatus};

use crate::api::SummaryApi;
use crate::error::EMPTY_TEXT_MESSAGE;
use crate::view::ViewState;

type Observer = Box<dyn FnMut(&ViewState) + Send>;

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Summarized(SummaryResult),
    /// Blocked locally; no request was sent
    QuotaExceeded,
    /// Blank input; no request was sent
    EmptyText,
    Failed(String),
}

/// Runs one user-initiated summarization attempt at a time
///
/// Order of checks: quota first, then blank text. Usage is recorded only
/// after a successful response.
pub struct SummaryController<A, S, C = SystemClock> {
    api: A,
    tracker: QuotaTracker<S, C>,
    state: ViewState,
    observer: Option<Observer>,
}

impl<A, S, C> SummaryController<A, S, C>
where
    A: SummaryApi,
    S: UsageStore,
    C: Clock,
{
    pub fn new(api: A, tracker: QuotaTracker<S, C>) -> trisum_quota::Result<Self> {
        let mut controller = Self {
            api,
            tracker,
            state: ViewState::default(),
            observer: None,
        };
        controller.refresh_usage()?;
        Ok(controller)
    }

    /// Called with the state whenever `loading` flips
    pub fn with_observer(mut self, observer: impl FnMut(&ViewState) + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn policy(&self) -> &QuotaPolicy {
        self.tracker.policy()
    }

    pub fn refresh_usage(&mut self) -> trisum_quota::Result<UsageStatus> {
        let status = self.tracker.check_usage()?;
        self.state.usage = status;
        Ok(status)
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.state);
        }
    }

    pub async fn submit(&mut self, text: &str) -> trisum_quota::Result<SubmitOutcome> {
        self.state.error = None;

        let status = self.refresh_usage()?;
        if !status.allowed {
            self.state.error = Some(self.tracker.policy().exceeded_message());
            return Ok(SubmitOutcome::QuotaExceeded);
        }

        if text.trim().is_empty() {
            self.state.error = Some(EMPTY_TEXT_MESSAGE.to_string());
            return Ok(SubmitOutcome::EmptyText);
        }

        self.state.loading = true;
        self.state.results = None;
        self.notify();

        let result = self.api.summarize(text).await;

        self.state.loading = false;

        let outcome = match result {
            Ok(summary) => {
                self.state.results = Some(summary.clone());
                self.tracker.record_usage().map(|record| {
                    self.state.usage = UsageStatus {
                        allowed: record.count < self.tracker.policy().max_attempts,
                        attempts: record.count,
                    };
                    SubmitOutcome::Summarized(summary)
                })
            }
            Err(e) => {
                tracing::warn!("Summary request failed: {}", e);
                let message = e.user_message();
                self.state.error = Some(message.clone());
                Ok(SubmitOutcome::Failed(message))
            }
        };

        // observers always see loading drop, even if recording failed
        self.notify();
        outcome
    }
}
