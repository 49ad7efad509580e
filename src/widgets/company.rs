use super::input::{parse_count, parse_percent, round_half_up};
use serde::{Deserialize, Serialize};

const BASE_SCORE: f64 = 50.0;
const RENEWABLE_WEIGHT: f64 = 30.0;
const WASTE_WEIGHT: f64 = 20.0;
pub const MAX_SCORE: u8 = 100;
pub const INDUSTRY_BENCHMARK: u8 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyField {
    Employees,
    Industry,
    RenewableEnergy,
    WasteReduction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub employee_count: u64,
    pub industry: String,
    /// Always within `[0, 100]`.
    pub renewable_energy_pct: u8,
    /// Always within `[0, 100]`.
    pub waste_reduction_pct: u8,
}

impl CompanyProfile {
    pub fn set(&mut self, field: CompanyField, raw: &str) {
        match field {
            CompanyField::Employees => self.employee_count = parse_count(raw),
            CompanyField::Industry => raw.clone_into(&mut self.industry),
            CompanyField::RenewableEnergy => self.renewable_energy_pct = parse_percent(raw),
            CompanyField::WasteReduction => self.waste_reduction_pct = parse_percent(raw),
        }
    }

    /// `min(100, round(50 + renewable/100*30 + waste/100*20))`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn esg_score(&self) -> u8 {
        let raw = BASE_SCORE
            + f64::from(self.renewable_energy_pct) / 100.0 * RENEWABLE_WEIGHT
            + f64::from(self.waste_reduction_pct) / 100.0 * WASTE_WEIGHT;
        round_half_up(raw).clamp(0.0, f64::from(MAX_SCORE)) as u8
    }

    pub fn assessment(&self) -> EsgAssessment {
        let score = self.esg_score();
        EsgAssessment {
            score,
            benchmark: INDUSTRY_BENCHMARK,
            vs_benchmark: i16::from(score) - i16::from(INDUSTRY_BENCHMARK),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EsgAssessment {
    pub score: u8,
    pub benchmark: u8,
    pub vs_benchmark: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EsgPillar {
    pub letter: char,
    pub name: &'static str,
    pub covers: &'static str,
}

pub const PILLARS: [EsgPillar; 3] = [
    EsgPillar {
        letter: 'E',
        name: "Environmental",
        covers: "Carbon, Energy, Waste",
    },
    EsgPillar {
        letter: 'S',
        name: "Social",
        covers: "Employees, Community",
    },
    EsgPillar {
        letter: 'G',
        name: "Governance",
        covers: "Ethics, Transparency",
    },
];
