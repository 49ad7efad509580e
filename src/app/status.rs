use super::snapshot::Snapshot;
use crate::config::Config;
use crate::ui::render::render_panel;
use crate::ui::style;
use crate::widgets::WidgetId;
use strum::IntoEnumIterator;

pub fn render_status(snapshot: &Snapshot, config: &Config) -> String {
    let timing = &config.timing;
    let mut lines = vec![
        format!("◆ {}", style::header("GreenPath status")),
        String::new(),
        format!("{}     {}", style::label("Version"), env!("CARGO_PKG_VERSION")),
        format!("{}      {}", style::label("Config"), config.config_path.display()),
        format!(
            "{}      thinking {}ms, trigger {}ms, achievement {}ms + {}ms exit",
            style::label("Timing"),
            timing.thinking_delay_ms,
            timing.widget_trigger_delay_ms,
            timing.achievement_display_ms,
            timing.achievement_exit_ms
        ),
        format!(
            "{} {}",
            style::label("Observability"),
            config.observability.backend
        ),
        String::new(),
        format!(
            "{}     {} turns, {}",
            style::label("Session"),
            snapshot.transcript.len(),
            snapshot.phase
        ),
        format!(
            "{}       {}",
            style::label("Voice"),
            if snapshot.voice_listening { "listening" } else { "off" }
        ),
        format!(
            "{} {}",
            style::label("Achievement"),
            match &snapshot.achievement {
                Some(view) if view.visible => view.achievement.title.clone(),
                Some(view) => format!("{} (closing)", view.achievement.title),
                None => "none".into(),
            }
        ),
        String::new(),
        style::header("Panels"),
    ];

    for widget in WidgetId::iter() {
        let marker = style::panel_dot(snapshot.active_widget == Some(widget));
        lines.push(format!("  {marker} {:27} {}", widget.title(), style::dim(widget)));
    }

    if let Some(active) = snapshot.active_widget {
        lines.push(String::new());
        lines.push(render_panel(active, &snapshot.panels));
    }

    lines.join("\n")
}
