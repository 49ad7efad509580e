//! Single-slot achievement toast.
//!
//! At most one achievement is current. A current achievement is either
//! visible, or hidden and waiting for its exit transition to finish before the
//! slot is cleared. Timing lives in the orchestrator; this type only tracks
//! the slot and refuses operations addressed to a stale achievement id.

pub mod catalog;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AchievementId(Uuid);

impl AchievementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: &'static str,
    pub icon: &'static str,
    pub points: u32,
    pub unlocked_at: DateTime<Utc>,
}

impl Achievement {
    pub fn new(title: impl Into<String>, unlocked_at: DateTime<Utc>) -> Self {
        let title = title.into();
        Self {
            id: AchievementId::new(),
            description: catalog::description_for(&title),
            icon: catalog::icon_for(&title),
            points: catalog::ACHIEVEMENT_POINTS,
            title,
            unlocked_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentAchievement {
    pub achievement: Achievement,
    /// False once dismissed; the record stays until the exit delay elapses.
    pub visible: bool,
}

/// Result of [`AchievementNotifier::unlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unlocked {
    pub id: AchievementId,
    pub replaced: Option<AchievementId>,
}

#[derive(Debug, Clone, Default)]
pub struct AchievementNotifier {
    current: Option<CurrentAchievement>,
}

impl AchievementNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&CurrentAchievement> {
        self.current.as_ref()
    }

    pub fn current_id(&self) -> Option<AchievementId> {
        self.current.as_ref().map(|c| c.achievement.id)
    }

    /// Make a new achievement current, replacing whatever occupied the slot,
    /// including one that is mid-exit.
    pub fn unlock(&mut self, title: &str, now: DateTime<Utc>) -> Unlocked {
        let achievement = Achievement::new(title, now);
        let id = achievement.id;
        let replaced = self
            .current
            .replace(CurrentAchievement {
                achievement,
                visible: true,
            })
            .map(|previous| previous.achievement.id);
        Unlocked { id, replaced }
    }

    /// Hide the current achievement. Returns its id when something visible was
    /// hidden; `None` when the slot is empty or already hidden.
    pub fn dismiss(&mut self) -> Option<AchievementId> {
        let current = self.current.as_mut().filter(|c| c.visible)?;
        current.visible = false;
        Some(current.achievement.id)
    }

    /// Hide only if `id` is still the visible current achievement.
    pub fn dismiss_if_current(&mut self, id: AchievementId) -> bool {
        if self.current_id() == Some(id) {
            self.dismiss().is_some()
        } else {
            false
        }
    }

    /// Drop the record once its exit transition is over. Ignores stale ids and
    /// achievements that are still visible.
    pub fn clear(&mut self, id: AchievementId) -> bool {
        let matches = self
            .current
            .as_ref()
            .is_some_and(|c| c.achievement.id == id && !c.visible);
        if matches {
            self.current = None;
        }
        matches
    }
}
