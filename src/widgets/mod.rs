//! Interactive ESG panels and the controller that tracks which one is active.

pub mod carbon;
pub mod checklist;
pub mod company;
pub mod energy;
pub mod input;

pub use carbon::{CarbonEstimate, CarbonField, CarbonInputs};
pub use checklist::{CHAMPION_TITLE, ChecklistStep, LedChecklist};
pub use company::{CompanyField, CompanyProfile, EsgAssessment};
pub use energy::{SOLAR_POTENTIAL, SolarPotential};

use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WidgetId {
    CarbonCalculator,
    LedGuide,
    CompanyProfile,
    EnergyCalculator,
}

impl WidgetId {
    pub fn title(self) -> &'static str {
        match self {
            Self::CarbonCalculator => "Carbon Footprint Calculator",
            Self::LedGuide => "LED Switching Guide",
            Self::CompanyProfile => "Company ESG Profile",
            Self::EnergyCalculator => "Renewable Energy Calculator",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CarbonCalculator => {
                "Calculate your annual CO₂ emissions and discover reduction opportunities"
            }
            Self::LedGuide => "Step-by-step guide to switch to energy-efficient LED lighting",
            Self::CompanyProfile => {
                "Assess and track your organization's environmental, social, and governance performance"
            }
            Self::EnergyCalculator => {
                "Discover the impact and savings potential of renewable energy solutions"
            }
        }
    }
}

/// A single form edit, addressed by panel field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "panel", content = "field", rename_all = "snake_case")]
pub enum FieldRef {
    Carbon(CarbonField),
    Company(CompanyField),
}

impl FieldRef {
    /// Resolve the short names accepted by the terminal front end.
    pub fn from_name(name: &str) -> Option<Self> {
        let field = match name.trim().to_lowercase().as_str() {
            "electricity" => Self::Carbon(CarbonField::Electricity),
            "gas" => Self::Carbon(CarbonField::Gas),
            "transport" | "transportation" => Self::Carbon(CarbonField::Transport),
            "waste" => Self::Carbon(CarbonField::Waste),
            "employees" => Self::Company(CompanyField::Employees),
            "industry" => Self::Company(CompanyField::Industry),
            "renewable" | "renewable-energy" => Self::Company(CompanyField::RenewableEnergy),
            "waste-reduction" => Self::Company(CompanyField::WasteReduction),
            _ => return None,
        };
        Some(field)
    }
}

/// Owns the active-panel slot and every panel's form state. Form state lives
/// independently of which panel is showing.
#[derive(Debug, Clone, Default)]
pub struct PanelController {
    active: Option<WidgetId>,
    carbon: CarbonInputs,
    company: CompanyProfile,
    checklist: LedChecklist,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `widget` the only active panel. Returns the one it replaced.
    pub fn activate(&mut self, widget: WidgetId) -> Option<WidgetId> {
        self.active.replace(widget)
    }

    pub fn active(&self) -> Option<WidgetId> {
        self.active
    }

    pub fn edit(&mut self, field: FieldRef, raw: &str) {
        match field {
            FieldRef::Carbon(field) => self.carbon.set(field, raw),
            FieldRef::Company(field) => self.company.set(field, raw),
        }
    }

    /// Toggle a checklist step; yields an achievement title on the 4/5 crossing.
    pub fn toggle_step(&mut self, id: u8) -> Option<&'static str> {
        self.checklist.toggle(id)
    }

    pub fn carbon(&self) -> &CarbonInputs {
        &self.carbon
    }

    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    pub fn checklist(&self) -> &LedChecklist {
        &self.checklist
    }

    pub fn view(&self) -> PanelsView {
        PanelsView {
            carbon: CarbonView {
                inputs: self.carbon,
                estimate: self.carbon.estimate(),
            },
            company: CompanyView {
                profile: self.company.clone(),
                assessment: self.company.assessment(),
            },
            checklist: ChecklistView {
                steps: self.checklist.steps().to_vec(),
                completed: self.checklist.completed_count(),
            },
            energy: SOLAR_POTENTIAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarbonView {
    pub inputs: CarbonInputs,
    pub estimate: CarbonEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyView {
    pub profile: CompanyProfile,
    pub assessment: EsgAssessment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistView {
    pub steps: Vec<ChecklistStep>,
    pub completed: usize,
}

/// Read-only view over every panel with derived metrics filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelsView {
    pub carbon: CarbonView,
    pub company: CompanyView,
    pub checklist: ChecklistView,
    pub energy: SolarPotential,
}
