mod mocks;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use mocks::MockSummaryApi;
use trisum_client::error::{EMPTY_TEXT_MESSAGE, FALLBACK_HTTP_MESSAGE};
use trisum_client::{Screen, SubmitOutcome, SummaryController};
use trisum_quota::{FileUsageStore, ManualClock, MemoryUsageStore, QuotaTracker, UsageRecord};

const START_MS: i64 = 1_700_000_000_000;

fn controller(
    api: MockSummaryApi,
    record: Option<UsageRecord>,
) -> (
    SummaryController<MockSummaryApi, MemoryUsageStore, ManualClock>,
    ManualClock,
) {
    let clock = ManualClock::new(START_MS);
    let store = match record {
        Some(record) => MemoryUsageStore::with_record(record),
        None => MemoryUsageStore::new(),
    };
    let tracker = QuotaTracker::with_clock(store, clock.clone());
    (SummaryController::new(api, tracker).unwrap(), clock)
}

#[tokio::test]
async fn test_successful_submit_shows_results_and_counts() {
    let api = MockSummaryApi::new();
    let (mut controller, _) = controller(api.clone(), None);

    let outcome = controller.submit("Some long article text").await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Summarized(_)));
    let state = controller.state();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.usage.attempts, 1);
    match state.screen() {
        Screen::Results(results) => assert_eq!(results.tweet, "Tweet about it"),
        other => panic!("unexpected screen: {other:?}"),
    }
    assert_eq!(api.call_count(), 1);
}

#[tokio::test]
async fn test_sixth_submit_in_hour_is_blocked_without_request() {
    let api = MockSummaryApi::new();
    let (mut controller, clock) = controller(api.clone(), None);

    for _ in 0..5 {
        let outcome = controller.submit("text").await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Summarized(_)));
        clock.advance(Duration::from_secs(60));
    }

    let outcome = controller.submit("text").await.unwrap();

    assert_eq!(outcome, SubmitOutcome::QuotaExceeded);
    assert_eq!(api.call_count(), 5);
    let error = controller.state().error.clone().unwrap();
    assert!(error.contains('5'));
    assert!(error.contains("per hour"));
    assert_eq!(controller.state().usage.attempts, 5);
}

#[tokio::test]
async fn test_quota_resets_after_window() {
    let api = MockSummaryApi::new();
    let (mut controller, clock) = controller(api.clone(), Some(UsageRecord {
        count: 5,
        first_attempt: START_MS,
    }));
    assert!(!controller.state().usage.allowed);

    clock.advance(Duration::from_secs(2 * 3600));
    let outcome = controller.submit("text").await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Summarized(_)));
    assert_eq!(controller.state().usage.attempts, 1);
    assert_eq!(api.call_count(), 1);
}

#[tokio::test]
async fn test_failed_request_is_not_counted() {
    let api = MockSummaryApi::failing(500, None);
    let (mut controller, _) = controller(api.clone(), None);

    let outcome = controller.submit("text").await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed(FALLBACK_HTTP_MESSAGE.to_string()));
    assert_eq!(controller.state().usage.attempts, 0);
    assert!(controller.state().results.is_none());
    assert_eq!(
        controller.state().screen(),
        Screen::Error(FALLBACK_HTTP_MESSAGE)
    );
}

#[tokio::test]
async fn test_server_error_message_shown_verbatim() {
    let api = MockSummaryApi::failing(400, Some("Text is required and must be a string"));
    let (mut controller, _) = controller(api, None);

    controller.submit("text").await.unwrap();

    assert_eq!(
        controller.state().error.as_deref(),
        Some("Text is required and must be a string")
    );
}

#[tokio::test]
async fn test_blank_text_rejected_locally() {
    let api = MockSummaryApi::new();
    let (mut controller, _) = controller(api.clone(), None);

    let outcome = controller.submit("   \n\t").await.unwrap();

    assert_eq!(outcome, SubmitOutcome::EmptyText);
    assert_eq!(controller.state().error.as_deref(), Some(EMPTY_TEXT_MESSAGE));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_quota_checked_before_blank_text() {
    let api = MockSummaryApi::new();
    let (mut controller, _) = controller(api.clone(), Some(UsageRecord {
        count: 5,
        first_attempt: START_MS,
    }));

    let outcome = controller.submit("").await.unwrap();

    assert_eq!(outcome, SubmitOutcome::QuotaExceeded);
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_text_sent_untrimmed() {
    let api = MockSummaryApi::new();
    let (mut controller, _) = controller(api.clone(), None);

    controller.submit("  padded text \n").await.unwrap();

    assert_eq!(api.last_text().as_deref(), Some("  padded text \n"));
}

#[tokio::test]
async fn test_new_submit_clears_previous_error() {
    let api = MockSummaryApi::new();
    let (mut controller, _) = controller(api, None);

    controller.submit("").await.unwrap();
    assert!(controller.state().error.is_some());

    controller.submit("real text").await.unwrap();
    assert!(controller.state().error.is_none());
    assert!(controller.state().results.is_some());
}

#[tokio::test]
async fn test_observer_sees_loading_flip() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    let (controller, _) = controller(MockSummaryApi::new(), None);
    let mut controller = controller.with_observer(move |state| {
        sink.lock().unwrap().push(state.loading);
    });

    controller.submit("text").await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![true, false]);
}

#[tokio::test]
async fn test_usage_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trisum").join("summaryUsage.json");
    let clock = ManualClock::new(START_MS);

    {
        let tracker = QuotaTracker::with_clock(FileUsageStore::new(&path), clock.clone());
        let mut controller = SummaryController::new(MockSummaryApi::new(), tracker).unwrap();
        for _ in 0..3 {
            controller.submit("text").await.unwrap();
        }
    }

    let tracker = QuotaTracker::with_clock(FileUsageStore::new(&path), clock);
    let controller = SummaryController::new(MockSummaryApi::new(), tracker).unwrap();

    assert_eq!(controller.state().usage.attempts, 3);
    assert!(controller.state().usage.allowed);
}
