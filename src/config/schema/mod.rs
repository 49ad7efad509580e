mod core;
mod observability;
mod timing;
mod ui;

pub use self::core::Config;
pub use observability::ObservabilityConfig;
pub use timing::TimingConfig;
pub use ui::UiConfig;
