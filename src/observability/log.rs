use super::traits::{Observer, ObserverEvent, ObserverMetric};
use tracing::{debug, info};

/// Log-based observer, routes everything through tracing
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for LogObserver {
    fn record_event(&self, event: &ObserverEvent) {
        match event {
            ObserverEvent::TurnAppended { author, chars } => {
                info!(author = %author, chars = chars, "conversation.turn");
            }
            ObserverEvent::SubmissionRejected { reason } => {
                debug!(reason = %reason, "conversation.rejected");
            }
            ObserverEvent::WidgetActivated { widget, replaced } => {
                info!(
                    widget = %widget,
                    replaced = replaced.map(|w| w.to_string()).as_deref().unwrap_or("none"),
                    "panel.activated"
                );
            }
            ObserverEvent::AchievementUnlocked { title } => {
                info!(title = %title, "achievement.unlocked");
            }
            ObserverEvent::AchievementCleared => {
                debug!("achievement.cleared");
            }
            ObserverEvent::Shutdown { cancelled_timers } => {
                info!(cancelled_timers = cancelled_timers, "orchestrator.shutdown");
            }
        }
    }

    fn record_metric(&self, metric: &ObserverMetric) {
        match metric {
            ObserverMetric::ReplyLatency(d) => {
                let ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
                debug!(latency_ms = ms, "metric.reply_latency");
            }
            ObserverMetric::TranscriptLength(n) => {
                debug!(turns = n, "metric.transcript_length");
            }
            ObserverMetric::PendingTimers(n) => {
                debug!(timers = n, "metric.pending_timers");
            }
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}
