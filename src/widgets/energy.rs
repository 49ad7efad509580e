use serde::Serialize;

/// Fixed solar-power projection shown by the renewable energy panel. The panel
/// has no inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPotential {
    pub annual_savings_usd: u32,
    pub co2_reduced_tons: f64,
    pub roi_years: u32,
}

pub const SOLAR_POTENTIAL: SolarPotential = SolarPotential {
    annual_savings_usd: 1_200,
    co2_reduced_tons: 8.5,
    roi_years: 25,
};
