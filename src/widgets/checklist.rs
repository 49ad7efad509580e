use serde::Serialize;

pub const STEP_COUNT: usize = 5;

/// Completed-step count that unlocks [`CHAMPION_TITLE`].
pub const CHAMPION_THRESHOLD: usize = 4;
pub const CHAMPION_TITLE: &str = "LED Switching Champion";

const STEP_LABELS: [&str; STEP_COUNT] = [
    "Calculate current energy usage",
    "Research LED alternatives",
    "Purchase quality LED bulbs",
    "Install LED bulbs safely",
    "Monitor energy savings",
];

pub const LED_BENEFITS: [&str; 4] = [
    "75% less energy consumption",
    "25x longer lifespan",
    "$75+ annual savings per household",
    "Reduced heat generation",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistStep {
    pub id: u8,
    pub label: &'static str,
    pub completed: bool,
}

/// The fixed five-step LED switching guide. Only `completed` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedChecklist {
    steps: [ChecklistStep; STEP_COUNT],
}

impl Default for LedChecklist {
    fn default() -> Self {
        Self::new()
    }
}

impl LedChecklist {
    #[allow(clippy::cast_possible_truncation)]
    pub fn new() -> Self {
        Self {
            steps: std::array::from_fn(|i| ChecklistStep {
                id: (i + 1) as u8,
                label: STEP_LABELS[i],
                completed: false,
            }),
        }
    }

    pub fn steps(&self) -> &[ChecklistStep] {
        &self.steps
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    /// Flip one step. Returns the achievement title to unlock when this toggle
    /// moves the completed count into exactly [`CHAMPION_THRESHOLD`]. Unknown
    /// ids leave the checklist untouched.
    pub fn toggle(&mut self, id: u8) -> Option<&'static str> {
        let before = self.completed_count();
        let step = self.steps.iter_mut().find(|s| s.id == id)?;
        step.completed = !step.completed;
        let after = self.completed_count();

        (before != CHAMPION_THRESHOLD && after == CHAMPION_THRESHOLD).then_some(CHAMPION_TITLE)
    }
}
