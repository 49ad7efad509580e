use crate::session::{Author, RejectReason};
use crate::widgets::WidgetId;
use std::time::Duration;

/// Events the observer can record
#[derive(Debug, Clone)]
pub enum ObserverEvent {
    TurnAppended {
        author: Author,
        chars: usize,
    },
    SubmissionRejected {
        reason: RejectReason,
    },
    WidgetActivated {
        widget: WidgetId,
        replaced: Option<WidgetId>,
    },
    AchievementUnlocked {
        title: String,
    },
    AchievementCleared,
    Shutdown {
        cancelled_timers: usize,
    },
}

/// Numeric metrics
#[derive(Debug, Clone)]
pub enum ObserverMetric {
    /// Wall time between a submission and its assistant turn.
    ReplyLatency(Duration),
    TranscriptLength(u64),
    PendingTimers(u64),
}

/// Core observability trait; implement for any backend
pub trait Observer: Send + Sync {
    /// Record a discrete event
    fn record_event(&self, event: &ObserverEvent);

    /// Record a numeric metric
    fn record_metric(&self, metric: &ObserverMetric);

    /// Flush any buffered data (no-op for most backends)
    fn flush(&self) {}

    /// Human-readable name of this observer
    fn name(&self) -> &str;
}
