//! Turns orchestrator output into printable lines.

use super::style;
use crate::app::{AppEvent, Snapshot};
use crate::config::UiConfig;
use crate::prompts::STARTER_PROMPTS;
use crate::session::{Author, ConversationTurn, RejectReason};
use crate::widgets::checklist::{LED_BENEFITS, STEP_COUNT};
use crate::widgets::company::PILLARS;
use crate::widgets::{
    CarbonView, ChecklistView, CompanyView, FieldRef, PanelsView, SolarPotential, WidgetId,
};
use serde::Serialize;
use std::fmt::Write as _;

/// Output sink for events and snapshots.
pub trait Renderer: Send + Sync {
    /// Text for one event, or `None` when the event has nothing to show.
    fn event(&self, event: &AppEvent, snapshot: &Snapshot) -> Option<String>;

    fn snapshot(&self, snapshot: &Snapshot) -> String;

    fn name(&self) -> &str;
}

/// `--json` wins over the config file.
pub fn create_renderer(ui: &UiConfig, json: bool) -> Box<dyn Renderer> {
    if json || ui.json {
        Box::new(JsonRenderer)
    } else {
        Box::new(TerminalRenderer::new(ui))
    }
}

// ── Terminal ─────────────────────────────────────────────────────────────────

pub struct TerminalRenderer {
    show_timestamps: bool,
}

impl TerminalRenderer {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            show_timestamps: ui.show_timestamps,
        }
    }

    fn turn(&self, turn: &ConversationTurn, snapshot: &Snapshot) -> String {
        let stamp = if self.show_timestamps {
            format!("{} ", style::dim(turn.created_at.format("%H:%M")))
        } else {
            String::new()
        };
        match turn.author {
            Author::User => {
                let mut out = format!("{stamp}{} {}", style::user("you ›"), turn.text);
                if snapshot.is_thinking() {
                    let _ = write!(out, "\n  {}", style::dim("thinking…"));
                }
                out
            }
            Author::Assistant => {
                format!("{stamp}{} {}", style::accent("greenpath ›"), turn.text)
            }
        }
    }
}

impl Renderer for TerminalRenderer {
    fn event(&self, event: &AppEvent, snapshot: &Snapshot) -> Option<String> {
        let text = match event {
            AppEvent::ConversationShown => format!(
                "{}\n{}",
                style::header("◆ GreenPath"),
                style::dim("Ask anything about sustainability, or send a starter with /prompt <n>.")
            ),
            AppEvent::TurnAppended { turn } => self.turn(turn, snapshot),
            AppEvent::SubmissionRejected { reason } => style::warn(match reason {
                RejectReason::Empty => "Type a question first.",
                RejectReason::Busy => "Still working on your last question, hang on.",
            }),
            AppEvent::WidgetActivated { widget, replaced } => {
                let mut out = render_panel(*widget, &snapshot.panels);
                if let Some(previous) = replaced {
                    let _ = write!(out, "\n  {}", style::dim(format!("(closed {})", previous.title())));
                }
                out
            }
            AppEvent::FieldEdited { field } => match field {
                FieldRef::Carbon(_) => carbon_summary(&snapshot.panels.carbon),
                FieldRef::Company(_) => company_summary(&snapshot.panels.company),
            },
            AppEvent::StepToggled { .. } => checklist_lines(&snapshot.panels.checklist),
            AppEvent::AchievementUnlocked { achievement } => format!(
                "{}\n  {} {}\n  {}\n  {}",
                style::success("🏆 Achievement Unlocked!"),
                achievement.icon,
                style::header(&achievement.title),
                style::dim(achievement.description),
                style::dim(format!("+{} points · /dismiss to close", achievement.points)),
            ),
            AppEvent::VoiceToggled { notice, .. } => {
                format!("🎤 {} {}", style::header(notice.title), style::dim(notice.description))
            }
            AppEvent::AchievementHidden { .. } | AppEvent::AchievementCleared { .. } => {
                return None;
            }
        };
        Some(text)
    }

    fn snapshot(&self, snapshot: &Snapshot) -> String {
        let mut out = format!(
            "{} {}  {} {}  {} {}",
            style::label("turns"),
            snapshot.transcript.len(),
            style::label("phase"),
            snapshot.phase,
            style::label("voice"),
            if snapshot.voice_listening { "on" } else { "off" },
        );
        match snapshot.active_widget {
            Some(widget) => {
                let _ = write!(out, "\n\n{}", render_panel(widget, &snapshot.panels));
            }
            None => {
                let _ = write!(out, "\n{}", style::dim("no panel open"));
            }
        }
        if let Some(view) = &snapshot.achievement {
            let state = if view.visible { "showing" } else { "closing" };
            let _ = write!(
                out,
                "\n\n{} {} {}",
                view.achievement.icon,
                style::header(&view.achievement.title),
                style::dim(format!("({state})"))
            );
        }
        out
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

// ── JSON lines ───────────────────────────────────────────────────────────────

pub struct JsonRenderer;

#[derive(Serialize)]
struct EventLine<'a> {
    #[serde(flatten)]
    event: &'a AppEvent,
    snapshot: &'a Snapshot,
}

impl Renderer for JsonRenderer {
    fn event(&self, event: &AppEvent, snapshot: &Snapshot) -> Option<String> {
        match serde_json::to_string(&EventLine { event, snapshot }) {
            Ok(line) => Some(line),
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode event");
                None
            }
        }
    }

    fn snapshot(&self, snapshot: &Snapshot) -> String {
        serde_json::to_string(snapshot).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to encode snapshot");
            String::from("{}")
        })
    }

    fn name(&self) -> &str {
        "json"
    }
}

// ── Panels ───────────────────────────────────────────────────────────────────

pub fn render_panel(widget: WidgetId, panels: &PanelsView) -> String {
    let body = match widget {
        WidgetId::CarbonCalculator => carbon_lines(&panels.carbon),
        WidgetId::LedGuide => checklist_lines(&panels.checklist),
        WidgetId::CompanyProfile => company_lines(&panels.company),
        WidgetId::EnergyCalculator => energy_lines(&panels.energy),
    };
    format!(
        "{}\n  {}\n{body}",
        style::header(format!("◆ {}", widget.title())),
        style::dim(widget.description()),
    )
}

fn carbon_lines(view: &CarbonView) -> String {
    let inputs = &view.inputs;
    format!(
        "  {} {} kWh/month\n  {} {} therms/month\n  {} {} miles/week\n  {} {} lbs/week\n{}",
        style::label("electricity"),
        inputs.electricity_kwh_per_month,
        style::label("gas        "),
        inputs.gas_therms_per_month,
        style::label("transport  "),
        inputs.transport_miles_per_week,
        style::label("waste      "),
        inputs.waste_lbs_per_week,
        carbon_summary(view),
    )
}

fn carbon_summary(view: &CarbonView) -> String {
    let estimate = &view.estimate;
    let side = if estimate.percent_vs_average >= 0 {
        "below"
    } else {
        "above"
    };
    format!(
        "  {} {} tons CO₂/year · {} trees to offset · {}/year · {} {side} the average household",
        style::label("footprint"),
        style::value(format!("{:.1}", estimate.total_tons)),
        style::value(estimate.trees_to_offset),
        style::value(dollars(estimate.annual_cost_usd)),
        style::value(format!("{}%", estimate.percent_vs_average.unsigned_abs())),
    )
}

fn company_lines(view: &CompanyView) -> String {
    let profile = &view.profile;
    let industry = if profile.industry.is_empty() {
        "(not set)"
    } else {
        profile.industry.as_str()
    };
    let mut out = format!(
        "  {} {}\n  {} {industry}\n  {} {}%\n  {} {}%\n{}",
        style::label("employees      "),
        profile.employee_count,
        style::label("industry       "),
        style::label("renewable      "),
        profile.renewable_energy_pct,
        style::label("waste reduction"),
        profile.waste_reduction_pct,
        company_summary(view),
    );
    for pillar in PILLARS {
        let _ = write!(
            out,
            "\n  {} {} {}",
            style::accent(pillar.letter),
            pillar.name,
            style::dim(pillar.covers)
        );
    }
    out
}

fn company_summary(view: &CompanyView) -> String {
    let a = &view.assessment;
    format!(
        "  {} {}/100 (industry benchmark {}, {:+})",
        style::label("ESG score"),
        style::value(a.score),
        a.benchmark,
        a.vs_benchmark,
    )
}

fn checklist_lines(view: &ChecklistView) -> String {
    let mut out = String::new();
    for step in &view.steps {
        let mark = style::step_box(step.completed);
        let _ = writeln!(out, "  {mark} {}. {}", step.id, step.label);
    }
    let _ = write!(
        out,
        "  {}/{STEP_COUNT} completed · {}",
        view.completed,
        style::dim(LED_BENEFITS.join(" · "))
    );
    out
}

fn energy_lines(solar: &SolarPotential) -> String {
    format!(
        "  {} {}/year\n  {} {} tons CO₂/year\n  {} {} years",
        style::label("solar savings"),
        style::value(dollars(i64::from(solar.annual_savings_usd))),
        style::label("CO₂ reduced  "),
        style::value(solar.co2_reduced_tons),
        style::label("ROI horizon  "),
        style::value(solar.roi_years),
    )
}

/// Conversation starters, numbered from one.
pub fn render_starters() -> String {
    let mut out = style::header("Conversation starters");
    for (i, starter) in STARTER_PROMPTS.iter().enumerate() {
        let _ = write!(
            out,
            "\n  {} {} {}\n     {}",
            style::accent(format!("{}.", i + 1)),
            style::header(starter.title),
            style::dim(format!("· {}", starter.description)),
            starter.prompt,
        );
    }
    out
}

/// `1234567` -> `$1,234,567`.
fn dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}${grouped}")
}
