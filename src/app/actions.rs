use crate::achievements::{Achievement, AchievementId};
use crate::session::{ConversationTurn, RejectReason};
use crate::widgets::{FieldRef, WidgetId};
use serde::Serialize;
use std::time::Duration;

/// Everything that can change application state: user input and fired timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reveal the conversation without submitting anything.
    Explore,
    Submit(String),
    /// Zero-based index into the starter prompts.
    ClickPrompt(usize),
    ToggleStep(u8),
    EditField { field: FieldRef, value: String },
    UnlockAchievement(String),
    DismissAchievement,
    ToggleVoice,
    Timer(TimerAction),
}

/// Deferred work, addressed to the entity it mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    ReplyDue,
    ActivateWidget(WidgetId),
    AutoDismiss(AchievementId),
    ClearAchievement(AchievementId),
}

impl TimerAction {
    pub fn key(&self) -> TimerKey {
        match self {
            Self::ReplyDue => TimerKey::Thinking,
            Self::ActivateWidget(_) => TimerKey::WidgetTrigger,
            Self::AutoDismiss(_) => TimerKey::AchievementDisplay,
            Self::ClearAchievement(_) => TimerKey::AchievementExit,
        }
    }
}

/// One pending timer slot per key; scheduling an occupied key replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TimerKey {
    Thinking,
    WidgetTrigger,
    AchievementDisplay,
    AchievementExit,
}

/// Reducer output, executed by the runtime in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Schedule { delay: Duration, fire: TimerAction },
    Cancel(TimerKey),
    Emit(AppEvent),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

/// Discrete, ordered facts published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AppEvent {
    ConversationShown,
    TurnAppended { turn: ConversationTurn },
    SubmissionRejected { reason: RejectReason },
    WidgetActivated {
        widget: WidgetId,
        replaced: Option<WidgetId>,
    },
    FieldEdited { field: FieldRef },
    StepToggled { id: u8, completed: usize },
    AchievementUnlocked { achievement: Achievement },
    AchievementHidden { id: AchievementId },
    AchievementCleared { id: AchievementId },
    VoiceToggled { listening: bool, notice: Notice },
}
