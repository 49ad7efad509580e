use super::actions::{Action, AppEvent, Effect, Notice, TimerAction, TimerKey};
use super::snapshot::{AchievementView, Snapshot};
use crate::achievements::{AchievementId, AchievementNotifier};
use crate::config::TimingConfig;
use crate::prompts;
use crate::session::{ConversationSession, SubmitOutcome};
use crate::widgets::{PanelController, WidgetId};
use chrono::{DateTime, Utc};

const LISTENING_ON: Notice = Notice {
    title: "Started listening",
    description: "Speak your question...",
};

const LISTENING_OFF: Notice = Notice {
    title: "Stopped listening",
    description: "Voice input disabled",
};

/// The whole application state, owned by a single controller.
///
/// `reduce` is the only mutation path. It never sleeps or spawns; anything
/// that has to happen later comes back as an [`Effect::Schedule`] for the
/// runtime to execute.
#[derive(Debug, Clone)]
pub struct AppState {
    timing: TimingConfig,
    conversation_visible: bool,
    voice_listening: bool,
    session: ConversationSession,
    panels: PanelController,
    achievements: AchievementNotifier,
}

impl AppState {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            conversation_visible: false,
            voice_listening: false,
            session: ConversationSession::new(),
            panels: PanelController::new(),
            achievements: AchievementNotifier::new(),
        }
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn panels(&self) -> &PanelController {
        &self.panels
    }

    pub fn achievements(&self) -> &AchievementNotifier {
        &self.achievements
    }

    pub fn reduce(&mut self, action: Action, now: DateTime<Utc>) -> Vec<Effect> {
        match action {
            Action::Explore => self.show_conversation().into_iter().collect(),
            Action::Submit(text) => self.submit(&text, now),
            Action::ClickPrompt(index) => {
                let Some(starter) = prompts::starter(index) else {
                    tracing::debug!(index, "ignoring out-of-range starter prompt");
                    return Vec::new();
                };
                let mut effects: Vec<Effect> = self.show_conversation().into_iter().collect();
                effects.extend(self.submit(starter.prompt, now));
                effects
            }
            Action::ToggleStep(id) => self.toggle_step(id, now),
            Action::EditField { field, value } => {
                self.panels.edit(field, &value);
                vec![Effect::Emit(AppEvent::FieldEdited { field })]
            }
            Action::UnlockAchievement(title) => self.unlock(&title, now),
            Action::DismissAchievement => self.dismiss(),
            Action::ToggleVoice => {
                self.voice_listening = !self.voice_listening;
                let notice = if self.voice_listening {
                    LISTENING_ON
                } else {
                    LISTENING_OFF
                };
                vec![Effect::Emit(AppEvent::VoiceToggled {
                    listening: self.voice_listening,
                    notice,
                })]
            }
            Action::Timer(fired) => self.fire(fired, now),
        }
    }

    /// Tear down in-flight work. Returns the cancellations for every timer key.
    pub fn dispose(&mut self) -> Vec<Effect> {
        self.session.abandon_pending();
        [
            TimerKey::Thinking,
            TimerKey::WidgetTrigger,
            TimerKey::AchievementDisplay,
            TimerKey::AchievementExit,
        ]
        .into_iter()
        .map(Effect::Cancel)
        .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            conversation_visible: self.conversation_visible,
            transcript: self.session.transcript().to_vec(),
            phase: self.session.phase(),
            voice_listening: self.voice_listening,
            active_widget: self.panels.active(),
            panels: self.panels.view(),
            achievement: self.achievements.current().map(|current| AchievementView {
                achievement: current.achievement.clone(),
                visible: current.visible,
            }),
        }
    }

    fn show_conversation(&mut self) -> Option<Effect> {
        if self.conversation_visible {
            return None;
        }
        self.conversation_visible = true;
        Some(Effect::Emit(AppEvent::ConversationShown))
    }

    fn submit(&mut self, text: &str, now: DateTime<Utc>) -> Vec<Effect> {
        match self.session.submit(text, now) {
            SubmitOutcome::Accepted(_) => {
                let turn = self
                    .session
                    .transcript()
                    .last()
                    .cloned()
                    .map(|turn| Effect::Emit(AppEvent::TurnAppended { turn }));
                turn.into_iter()
                    .chain(std::iter::once(Effect::Schedule {
                        delay: self.timing.thinking_delay(),
                        fire: TimerAction::ReplyDue,
                    }))
                    .collect()
            }
            SubmitOutcome::Rejected(reason) => {
                vec![Effect::Emit(AppEvent::SubmissionRejected { reason })]
            }
        }
    }

    fn toggle_step(&mut self, id: u8, now: DateTime<Utc>) -> Vec<Effect> {
        let known = self.panels.checklist().steps().iter().any(|s| s.id == id);
        if !known {
            tracing::debug!(id, "ignoring unknown checklist step");
            return Vec::new();
        }
        let unlocked = self.panels.toggle_step(id);
        let mut effects = vec![Effect::Emit(AppEvent::StepToggled {
            id,
            completed: self.panels.checklist().completed_count(),
        })];
        if let Some(title) = unlocked {
            effects.extend(self.unlock(title, now));
        }
        effects
    }

    fn unlock(&mut self, title: &str, now: DateTime<Utc>) -> Vec<Effect> {
        let unlocked = self.achievements.unlock(title, now);
        let mut effects = Vec::with_capacity(3);
        if unlocked.replaced.is_some() {
            // The old record may be mid-exit; its clear must not touch the new one.
            effects.push(Effect::Cancel(TimerKey::AchievementExit));
        }
        effects.push(Effect::Schedule {
            delay: self.timing.achievement_display(),
            fire: TimerAction::AutoDismiss(unlocked.id),
        });
        if let Some(current) = self.achievements.current() {
            effects.push(Effect::Emit(AppEvent::AchievementUnlocked {
                achievement: current.achievement.clone(),
            }));
        }
        effects
    }

    fn dismiss(&mut self) -> Vec<Effect> {
        match self.achievements.dismiss() {
            Some(id) => {
                let mut effects = vec![Effect::Cancel(TimerKey::AchievementDisplay)];
                effects.extend(self.begin_exit(id));
                effects
            }
            None => Vec::new(),
        }
    }

    fn begin_exit(&self, id: AchievementId) -> Vec<Effect> {
        vec![
            Effect::Schedule {
                delay: self.timing.achievement_exit(),
                fire: TimerAction::ClearAchievement(id),
            },
            Effect::Emit(AppEvent::AchievementHidden { id }),
        ]
    }

    fn fire(&mut self, fired: TimerAction, now: DateTime<Utc>) -> Vec<Effect> {
        match fired {
            TimerAction::ReplyDue => {
                let Some(reply) = self.session.complete_reply(now) else {
                    return Vec::new();
                };
                let mut effects: Vec<Effect> = self
                    .session
                    .transcript()
                    .last()
                    .cloned()
                    .map(|turn| Effect::Emit(AppEvent::TurnAppended { turn }))
                    .into_iter()
                    .collect();
                if let Some(widget) = reply.widget {
                    effects.push(Effect::Schedule {
                        delay: self.timing.widget_trigger_delay(),
                        fire: TimerAction::ActivateWidget(widget),
                    });
                }
                effects
            }
            TimerAction::ActivateWidget(widget) => vec![self.activate(widget)],
            TimerAction::AutoDismiss(id) => {
                if self.achievements.dismiss_if_current(id) {
                    self.begin_exit(id)
                } else {
                    Vec::new()
                }
            }
            TimerAction::ClearAchievement(id) => {
                if self.achievements.clear(id) {
                    vec![Effect::Emit(AppEvent::AchievementCleared { id })]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn activate(&mut self, widget: WidgetId) -> Effect {
        let replaced = self.panels.activate(widget);
        Effect::Emit(AppEvent::WidgetActivated { widget, replaced })
    }
}
