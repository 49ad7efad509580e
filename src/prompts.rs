use serde::Serialize;

/// A clickable conversation starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarterPrompt {
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

pub const STARTER_PROMPTS: [StarterPrompt; 6] = [
    StarterPrompt {
        title: "Calculate Carbon Footprint",
        description: "How much CO₂ does my business produce?",
        prompt: "Help me calculate my company's carbon footprint",
    },
    StarterPrompt {
        title: "Switch to LED Lighting",
        description: "Guide me through energy-efficient lighting",
        prompt: "How do I switch my office to LED light bulbs?",
    },
    StarterPrompt {
        title: "Company ESG Profile",
        description: "Assess our sustainability performance",
        prompt: "Create an ESG profile for my company",
    },
    StarterPrompt {
        title: "Renewable Energy Options",
        description: "Explore solar and wind solutions",
        prompt: "What renewable energy options are available for my business?",
    },
    StarterPrompt {
        title: "Sustainability ROI",
        description: "Calculate return on green investments",
        prompt: "Show me the ROI of sustainability initiatives",
    },
    StarterPrompt {
        title: "Waste Reduction Plan",
        description: "Minimize environmental impact",
        prompt: "Help me create a waste reduction plan for my office",
    },
];

/// Zero-based lookup; out-of-range indices yield `None`.
pub fn starter(index: usize) -> Option<&'static StarterPrompt> {
    STARTER_PROMPTS.get(index)
}
