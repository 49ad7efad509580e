use super::input::{parse_non_negative, round_half_up, round_to_cents};
use serde::{Deserialize, Serialize};

/// Emission factors per input unit.
pub const ELECTRICITY_FACTOR: f64 = 0.82;
pub const GAS_FACTOR: f64 = 2.3;
pub const TRANSPORT_FACTOR: f64 = 0.21;
pub const WASTE_FACTOR: f64 = 0.5;

/// Average US household, tons CO₂ per year.
pub const AVERAGE_HOUSEHOLD_TONS: f64 = 16.0;
const TREES_PER_TON: f64 = 2.5;
const COST_PER_TON_USD: f64 = 125.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarbonField {
    Electricity,
    Gas,
    Transport,
    Waste,
}

/// Household inputs. All fields are non-negative; edits that fail to parse
/// store 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CarbonInputs {
    pub electricity_kwh_per_month: f64,
    pub gas_therms_per_month: f64,
    pub transport_miles_per_week: f64,
    pub waste_lbs_per_week: f64,
}

impl CarbonInputs {
    pub fn set(&mut self, field: CarbonField, raw: &str) {
        let value = parse_non_negative(raw);
        match field {
            CarbonField::Electricity => self.electricity_kwh_per_month = value,
            CarbonField::Gas => self.gas_therms_per_month = value,
            CarbonField::Transport => self.transport_miles_per_week = value,
            CarbonField::Waste => self.waste_lbs_per_week = value,
        }
    }

    /// Weighted sum of the inputs, rounded to two decimals.
    pub fn total_tons(&self) -> f64 {
        round_to_cents(
            self.electricity_kwh_per_month * ELECTRICITY_FACTOR
                + self.gas_therms_per_month * GAS_FACTOR
                + self.transport_miles_per_week * TRANSPORT_FACTOR
                + self.waste_lbs_per_week * WASTE_FACTOR,
        )
    }

    pub fn estimate(&self) -> CarbonEstimate {
        CarbonEstimate::from_total(self.total_tons())
    }
}

/// Derived display metrics. Recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarbonEstimate {
    pub total_tons: f64,
    pub trees_to_offset: i64,
    pub annual_cost_usd: i64,
    /// Signed: negative once the estimate exceeds the household average.
    pub percent_vs_average: i64,
}

impl CarbonEstimate {
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_total(total_tons: f64) -> Self {
        Self {
            total_tons,
            trees_to_offset: round_half_up(total_tons * TREES_PER_TON) as i64,
            annual_cost_usd: round_half_up(total_tons * COST_PER_TON_USD) as i64,
            percent_vs_average: round_half_up(
                (AVERAGE_HOUSEHOLD_TONS - total_tons) / AVERAGE_HOUSEHOLD_TONS * 100.0,
            ) as i64,
        }
    }
}
