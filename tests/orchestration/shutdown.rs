use std::time::Duration;

use greenpath::app::AppEvent;
use greenpath::error::RuntimeError;
use greenpath::observability::{ObserverEvent, ObserverMetric};
use greenpath::session::{Author, SessionPhase};

use super::harness::Harness;

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_timers() {
    let mut h = Harness::start();
    h.app.submit("carbon").await.unwrap();
    h.app.unlock_achievement("ESG Pioneer").await.unwrap();
    h.until(|e| matches!(e, AppEvent::AchievementUnlocked { .. }))
        .await;

    h.app.shutdown().await;

    let shutdown: Vec<_> = h
        .observer
        .events()
        .into_iter()
        .filter_map(|e| match e {
            ObserverEvent::Shutdown { cancelled_timers } => Some(cancelled_timers),
            _ => None,
        })
        .collect();
    assert_eq!(shutdown, vec![2]);

    let snapshot = h.app.snapshot();
    assert_eq!(snapshot.phase, SessionPhase::Idle);
    assert_eq!(snapshot.transcript.len(), 1);

    // No reply ever arrives.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(h.app.snapshot().transcript.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn dispatch_after_shutdown_is_closed() {
    let mut h = Harness::start();
    h.app.shutdown().await;

    assert!(h.app.is_closed());
    assert_eq!(h.app.submit("anyone there?").await, Err(RuntimeError::Closed));
    assert_eq!(h.app.toggle_step(1).await, Err(RuntimeError::Closed));
}

#[tokio::test(start_paused = true)]
async fn observer_sees_turns_and_reply_latency() {
    let mut h = Harness::start();
    h.app.submit("How do I switch to LED?").await.unwrap();
    h.until(|e| matches!(e, AppEvent::WidgetActivated { .. }))
        .await;

    let events = h.observer.events();
    let authors: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            ObserverEvent::TurnAppended { author, .. } => Some(*author),
            _ => None,
        })
        .collect();
    assert_eq!(authors, vec![Author::User, Author::Assistant]);
    assert!(
        events
            .iter()
            .any(|e| matches!(e, ObserverEvent::WidgetActivated { replaced: None, .. }))
    );

    let latency = h
        .observer
        .metrics()
        .into_iter()
        .find_map(|m| match m {
            ObserverMetric::ReplyLatency(d) => Some(d),
            _ => None,
        })
        .unwrap();
    assert!(latency >= Duration::from_millis(1_500));
}
