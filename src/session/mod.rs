pub mod types;

pub use types::{Author, ConversationTurn, RejectReason, SessionPhase, SubmitOutcome, TurnId};

use crate::intent::{self, Classification};
use crate::widgets::WidgetId;
use chrono::{DateTime, Duration, Utc};

/// Transcript plus the `Idle -> Thinking -> Idle` submission cycle.
///
/// Only one submission is in flight at a time; submits while thinking are
/// rejected. The reply itself is produced by [`ConversationSession::complete_reply`],
/// which the orchestrator calls once the simulated latency has elapsed.
#[derive(Debug, Clone, Default)]
pub struct ConversationSession {
    transcript: Vec<ConversationTurn>,
    phase: SessionPhase,
    pending: Option<String>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ConversationTurn] {
        &self.transcript
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_thinking(&self) -> bool {
        self.phase == SessionPhase::Thinking
    }

    pub fn submit(&mut self, text: &str, now: DateTime<Utc>) -> SubmitOutcome {
        if text.trim().is_empty() {
            return SubmitOutcome::Rejected(RejectReason::Empty);
        }
        if self.is_thinking() {
            return SubmitOutcome::Rejected(RejectReason::Busy);
        }

        let id = self.append(text.to_string(), Author::User, None, now);
        self.pending = Some(text.to_string());
        self.phase = SessionPhase::Thinking;
        SubmitOutcome::Accepted(id)
    }

    /// Classify the pending submission and append the assistant turn. Returns
    /// `None` when nothing is pending.
    pub fn complete_reply(&mut self, now: DateTime<Utc>) -> Option<Reply> {
        let text = self.pending.take()?;
        let Classification { reply, widget } = intent::classify(&text);
        let turn = self.append(reply.to_string(), Author::Assistant, widget, now);
        self.phase = SessionPhase::Idle;
        Some(Reply { turn, widget })
    }

    /// Drop an in-flight submission without replying.
    pub fn abandon_pending(&mut self) -> bool {
        self.phase = SessionPhase::Idle;
        self.pending.take().is_some()
    }

    fn append(
        &mut self,
        text: String,
        author: Author,
        triggered_widget: Option<WidgetId>,
        now: DateTime<Utc>,
    ) -> TurnId {
        let id = TurnId::new();
        let created_at = self.next_timestamp(now);
        self.transcript.push(ConversationTurn {
            id,
            text,
            author,
            created_at,
            triggered_widget,
        });
        id
    }

    // Transcript timestamps are strictly increasing even when the wall clock
    // is coarse or steps backwards.
    fn next_timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.transcript.last() {
            Some(last) if now <= last.created_at => last.created_at + Duration::microseconds(1),
            _ => now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub turn: TurnId,
    pub widget: Option<WidgetId>,
}
