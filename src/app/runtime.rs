//! The orchestrator task.
//!
//! One tokio task owns [`AppState`] and the [`TimerQueue`]. Callers talk to it
//! through an [`AppHandle`]: actions go in over an mpsc channel, snapshots come
//! out over a watch channel and discrete events over a broadcast bus.

use super::actions::{Action, AppEvent, Effect, TimerAction};
use super::snapshot::Snapshot;
use super::state::AppState;
use super::timers::TimerQueue;
use crate::config::TimingConfig;
use crate::error::RuntimeError;
use crate::observability::{Observer, ObserverEvent, ObserverMetric};
use crate::session::Author;
use crate::widgets::FieldRef;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

const ACTION_QUEUE_CAPACITY: usize = 64;
const EVENT_BUS_CAPACITY: usize = 256;

pub type EventSender = broadcast::Sender<AppEvent>;
pub type EventReceiver = broadcast::Receiver<AppEvent>;

/// Start the orchestrator on the current tokio runtime.
pub fn spawn(timing: TimingConfig, observer: Arc<dyn Observer>) -> AppHandle {
    let state = AppState::new(timing);
    let (actions_tx, actions_rx) = mpsc::channel(ACTION_QUEUE_CAPACITY);
    let (snapshots_tx, snapshots_rx) = watch::channel(state.snapshot());
    let (events_tx, _) = broadcast::channel(EVENT_BUS_CAPACITY);
    let shutdown = CancellationToken::new();

    let runner = Runner {
        state,
        timers: TimerQueue::new(),
        snapshots: snapshots_tx,
        events: events_tx.clone(),
        observer,
        submitted_at: None,
    };
    let task = tokio::spawn(runner.run(actions_rx, shutdown.clone()));

    AppHandle {
        actions: actions_tx,
        snapshots: snapshots_rx,
        events: events_tx,
        shutdown,
        task: Some(task),
    }
}

/// Client side of the orchestrator. Dropping it cancels the task.
#[derive(Debug)]
pub struct AppHandle {
    actions: mpsc::Sender<Action>,
    snapshots: watch::Receiver<Snapshot>,
    events: EventSender,
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl AppHandle {
    pub async fn dispatch(&self, action: Action) -> Result<(), RuntimeError> {
        if self.shutdown.is_cancelled() {
            return Err(RuntimeError::Closed);
        }
        self.actions
            .send(action)
            .await
            .map_err(|_| RuntimeError::Closed)
    }

    pub async fn explore(&self) -> Result<(), RuntimeError> {
        self.dispatch(Action::Explore).await
    }

    pub async fn submit(&self, text: impl Into<String>) -> Result<(), RuntimeError> {
        self.dispatch(Action::Submit(text.into())).await
    }

    pub async fn click_prompt(&self, index: usize) -> Result<(), RuntimeError> {
        self.dispatch(Action::ClickPrompt(index)).await
    }

    pub async fn toggle_step(&self, id: u8) -> Result<(), RuntimeError> {
        self.dispatch(Action::ToggleStep(id)).await
    }

    pub async fn edit_field(
        &self,
        field: FieldRef,
        value: impl Into<String>,
    ) -> Result<(), RuntimeError> {
        self.dispatch(Action::EditField {
            field,
            value: value.into(),
        })
        .await
    }

    pub async fn unlock_achievement(&self, title: impl Into<String>) -> Result<(), RuntimeError> {
        self.dispatch(Action::UnlockAchievement(title.into())).await
    }

    pub async fn dismiss_achievement(&self) -> Result<(), RuntimeError> {
        self.dispatch(Action::DismissAchievement).await
    }

    pub async fn toggle_voice(&self) -> Result<(), RuntimeError> {
        self.dispatch(Action::ToggleVoice).await
    }

    /// Latest published state.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Events published after this call. Earlier events are not replayed.
    pub fn subscribe(&self) -> EventReceiver {
        self.events.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled() || self.actions.is_closed()
    }

    /// Cancel pending timers and wait for the task to exit. Idempotent.
    pub async fn shutdown(&mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            tracing::warn!(error = %e, "orchestrator task ended abnormally");
        }
    }
}

impl Drop for AppHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

struct Runner {
    state: AppState,
    timers: TimerQueue,
    snapshots: watch::Sender<Snapshot>,
    events: EventSender,
    observer: Arc<dyn Observer>,
    submitted_at: Option<Instant>,
}

impl Runner {
    async fn run(mut self, mut actions: mpsc::Receiver<Action>, shutdown: CancellationToken) {
        tracing::debug!("orchestrator started");
        loop {
            let next_deadline = self.timers.next_deadline();
            tokio::select! {
                biased;

                () = shutdown.cancelled() => break,

                action = actions.recv() => match action {
                    Some(action) => self.apply(action),
                    None => break,
                },

                () = sleep_until(next_deadline) => {
                    for fired in self.timers.pop_due(Instant::now()) {
                        self.apply(Action::Timer(fired));
                    }
                }
            }
        }
        self.dispose();
    }

    fn apply(&mut self, action: Action) {
        let effects = self.state.reduce(action, Utc::now());
        let mut emitted = Vec::new();
        for effect in effects {
            match effect {
                Effect::Schedule { delay, fire } => self.schedule(delay, fire),
                Effect::Cancel(key) => {
                    if self.timers.cancel(key) {
                        tracing::debug!(timer = %key, "timer cancelled");
                    }
                }
                Effect::Emit(event) => emitted.push(event),
            }
        }

        // Subscribers reading the snapshot after an event must see its effect.
        self.snapshots.send_replace(self.state.snapshot());
        for event in emitted {
            self.observe(&event);
            let _ = self.events.send(event);
        }
        self.observer
            .record_metric(&ObserverMetric::PendingTimers(self.timers.len() as u64));
    }

    fn schedule(&mut self, delay: std::time::Duration, fire: TimerAction) {
        let key = fire.key();
        if self.timers.schedule(Instant::now() + delay, fire) {
            tracing::debug!(timer = %key, "timer re-armed");
        }
    }

    fn observe(&mut self, event: &AppEvent) {
        let observed = match event {
            AppEvent::TurnAppended { turn } => {
                match turn.author {
                    Author::User => self.submitted_at = Some(Instant::now()),
                    Author::Assistant => {
                        if let Some(started) = self.submitted_at.take() {
                            self.observer
                                .record_metric(&ObserverMetric::ReplyLatency(started.elapsed()));
                        }
                    }
                }
                self.observer.record_metric(&ObserverMetric::TranscriptLength(
                    self.state.session().transcript().len() as u64,
                ));
                ObserverEvent::TurnAppended {
                    author: turn.author,
                    chars: turn.text.chars().count(),
                }
            }
            AppEvent::SubmissionRejected { reason } => {
                ObserverEvent::SubmissionRejected { reason: *reason }
            }
            AppEvent::WidgetActivated { widget, replaced } => ObserverEvent::WidgetActivated {
                widget: *widget,
                replaced: *replaced,
            },
            AppEvent::AchievementUnlocked { achievement } => ObserverEvent::AchievementUnlocked {
                title: achievement.title.clone(),
            },
            AppEvent::AchievementCleared { .. } => ObserverEvent::AchievementCleared,
            AppEvent::ConversationShown
            | AppEvent::FieldEdited { .. }
            | AppEvent::StepToggled { .. }
            | AppEvent::AchievementHidden { .. }
            | AppEvent::VoiceToggled { .. } => return,
        };
        self.observer.record_event(&observed);
    }

    fn dispose(&mut self) {
        let armed = self.timers.len();
        for effect in self.state.dispose() {
            if let Effect::Cancel(key) = effect {
                self.timers.cancel(key);
            }
        }
        let cancelled_timers = armed - self.timers.len() + self.timers.clear();
        self.snapshots.send_replace(self.state.snapshot());
        self.observer
            .record_event(&ObserverEvent::Shutdown { cancelled_timers });
        self.observer.flush();
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
