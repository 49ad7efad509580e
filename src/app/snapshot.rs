use crate::achievements::Achievement;
use crate::session::{ConversationTurn, SessionPhase};
use crate::widgets::{PanelsView, WidgetId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementView {
    pub achievement: Achievement,
    pub visible: bool,
}

/// Point-in-time copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub conversation_visible: bool,
    pub transcript: Vec<ConversationTurn>,
    pub phase: SessionPhase,
    pub voice_listening: bool,
    pub active_widget: Option<WidgetId>,
    pub panels: PanelsView,
    pub achievement: Option<AchievementView>,
}

impl Snapshot {
    pub fn is_thinking(&self) -> bool {
        self.phase == SessionPhase::Thinking
    }

    pub fn last_turn(&self) -> Option<&ConversationTurn> {
        self.transcript.last()
    }

    pub fn visible_achievement(&self) -> Option<&Achievement> {
        self.achievement
            .as_ref()
            .filter(|view| view.visible)
            .map(|view| &view.achievement)
    }
}
