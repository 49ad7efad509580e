use super::traits::{Observer, ObserverEvent, ObserverMetric};

/// Selected by `backend = "none"`; records nothing.
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn record_event(&self, _event: &ObserverEvent) {}

    fn record_metric(&self, _metric: &ObserverMetric) {}

    fn name(&self) -> &str {
        "noop"
    }
}
