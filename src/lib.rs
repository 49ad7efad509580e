#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod achievements;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod intent;
#[doc(hidden)]
pub mod observability;
pub mod prompts;
pub mod session;
pub mod ui;
pub mod widgets;

pub use app::{Action, AppEvent, AppHandle, Snapshot};
pub use config::Config;
pub use error::{GreenpathError, Result};
