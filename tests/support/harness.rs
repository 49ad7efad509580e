#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use greenpath::app::{self, AppEvent, AppHandle, EventReceiver};
use greenpath::config::TimingConfig;
use greenpath::observability::{Observer, ObserverEvent, ObserverMetric};

/// Observer that keeps everything it is told, for assertions.
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<ObserverEvent>>,
    pub metrics: Mutex<Vec<ObserverMetric>>,
}

impl Observer for RecordingObserver {
    fn record_event(&self, event: &ObserverEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn record_metric(&self, metric: &ObserverMetric) {
        self.metrics.lock().unwrap().push(metric.clone());
    }

    fn name(&self) -> &str {
        "recording"
    }
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<ObserverEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn metrics(&self) -> Vec<ObserverMetric> {
        self.metrics.lock().unwrap().clone()
    }
}

pub struct Harness {
    pub app: AppHandle,
    pub events: EventReceiver,
    pub observer: Arc<RecordingObserver>,
}

impl Harness {
    pub fn start() -> Self {
        Self::with_timing(TimingConfig::default())
    }

    pub fn with_timing(timing: TimingConfig) -> Self {
        let observer = Arc::new(RecordingObserver::default());
        let app = app::spawn(timing, Arc::clone(&observer) as Arc<dyn Observer>);
        let events = app.subscribe();
        Self {
            app,
            events,
            observer,
        }
    }

    pub async fn next_event(&mut self) -> AppEvent {
        self.events.recv().await.expect("event stream closed")
    }

    /// Collect events up to and including the first one matching `stop`.
    pub async fn until(&mut self, stop: impl Fn(&AppEvent) -> bool) -> Vec<AppEvent> {
        let mut seen = Vec::new();
        loop {
            let event = self.next_event().await;
            let done = stop(&event);
            seen.push(event);
            if done {
                return seen;
            }
        }
    }

    /// `None` when nothing arrives within `window` of virtual time.
    pub async fn quiet_for(&mut self, window: Duration) -> Option<AppEvent> {
        tokio::time::timeout(window, self.next_event()).await.ok()
    }
}
