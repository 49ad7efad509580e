pub mod actions;
pub mod dispatch;
pub mod runtime;
pub mod snapshot;
pub mod state;
pub mod status;
pub mod timers;

pub use actions::{Action, AppEvent, Effect, Notice, TimerAction, TimerKey};
pub use runtime::{AppHandle, EventReceiver, spawn};
pub use snapshot::{AchievementView, Snapshot};
pub use state::AppState;
