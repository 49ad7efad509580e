pub mod render;
pub mod style;

pub use render::{JsonRenderer, Renderer, TerminalRenderer, create_renderer, render_panel, render_starters};
