//! Keyword intent classifier.
//!
//! A fixed, ordered rule list evaluated top to bottom. The first rule with a
//! keyword contained in the lowercased input wins; there is no scoring and no
//! combination of several matches.

use crate::widgets::WidgetId;
use serde::Serialize;

pub const CARBON_REPLY: &str = "I'd be happy to help you calculate your carbon footprint! Let me show you our interactive calculator where you can input your energy usage, transportation, and other factors.";

pub const LED_REPLY: &str = "Great question about switching to LED bulbs! This is one of the simplest ways to reduce energy consumption. Let me create a step-by-step guide for you.";

pub const COMPANY_REPLY: &str = "I can help you create or analyze your company's ESG profile. Let me show you our comprehensive assessment tool.";

pub const ENERGY_REPLY: &str = "Renewable energy is a fantastic step toward sustainability! Let me show you the potential impact and savings you could achieve.";

pub const FALLBACK_REPLY: &str = "That's a great question about sustainability! I can help you with ESG assessments, carbon footprint calculations, energy efficiency guides, and company sustainability profiles. What specific area would you like to explore?";

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
    pub widget: WidgetId,
}

impl IntentRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Rules in priority order. Order is significant.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["carbon", "footprint", "emissions"],
        reply: CARBON_REPLY,
        widget: WidgetId::CarbonCalculator,
    },
    IntentRule {
        keywords: &["light bulb", "led", "switch"],
        reply: LED_REPLY,
        widget: WidgetId::LedGuide,
    },
    IntentRule {
        keywords: &["company", "business", "profile"],
        reply: COMPANY_REPLY,
        widget: WidgetId::CompanyProfile,
    },
    IntentRule {
        keywords: &["energy", "renewable", "solar"],
        reply: ENERGY_REPLY,
        widget: WidgetId::EnergyCalculator,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub reply: &'static str,
    pub widget: Option<WidgetId>,
}

/// Map free text to a canned reply and optional panel trigger. Total.
pub fn classify(text: &str) -> Classification {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(
            Classification {
                reply: FALLBACK_REPLY,
                widget: None,
            },
            |rule| Classification {
                reply: rule.reply,
                widget: Some(rule.widget),
            },
        )
}
