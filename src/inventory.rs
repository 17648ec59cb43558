//! Life-cycle inventory produced by the calculation engine.
//!
//! All values are expressed per functional unit: one MJ of fuel energy.

use is_close::is_close;
use serde::{Deserialize, Serialize};
use std::fmt;

/// GWP100 characterisation factor for methane.
/// unit: kg CO2e per kg CH4
pub const GWP100_CH4: f64 = 28.0;

/// GWP100 characterisation factor for nitrous oxide.
/// unit: kg CO2e per kg N2O
pub const GWP100_N2O: f64 = 265.0;

/// The five life-cycle stages of the DAC → electrolysis → FT pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    CarbonCapture,
    Electrolysis,
    Conversion,
    Distribution,
    UsePhase,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::CarbonCapture,
        Stage::Electrolysis,
        Stage::Conversion,
        Stage::Distribution,
        Stage::UsePhase,
    ];

    /// Human-readable stage name for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::CarbonCapture => "Carbon Capture (DAC)",
            Stage::Electrolysis => "Electrolysis",
            Stage::Conversion => "Fischer-Tropsch",
            Stage::Distribution => "Distribution",
            Stage::UsePhase => "Use Phase",
        }
    }
}

/// Per-stage values of one impact category.
///
/// Stages that do not contribute to a category (e.g. use-phase water) are
/// simply zero, so `total()` is always the sum over all five stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageBreakdown {
    pub carbon_capture: f64,
    pub electrolysis: f64,
    pub conversion: f64,
    pub distribution: f64,
    pub use_phase: f64,
}

impl StageBreakdown {
    /// Sum over all five stages.
    pub fn total(&self) -> f64 {
        self.carbon_capture + self.electrolysis + self.conversion + self.distribution
            + self.use_phase
    }

    /// Value of a single stage.
    pub fn stage(&self, stage: Stage) -> f64 {
        match stage {
            Stage::CarbonCapture => self.carbon_capture,
            Stage::Electrolysis => self.electrolysis,
            Stage::Conversion => self.conversion,
            Stage::Distribution => self.distribution,
            Stage::UsePhase => self.use_phase,
        }
    }

    /// Iterate stages in pathway order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, f64)> + '_ {
        Stage::ALL.iter().map(move |&s| (s, self.stage(s)))
    }

    fn approx_eq(&self, other: &StageBreakdown) -> bool {
        Stage::ALL
            .iter()
            .all(|&s| is_close!(self.stage(s), other.stage(s), abs_tol = 1e-12))
    }
}

/// Complete life-cycle inventory for one model configuration.
///
/// Produced wholesale by the engine; never updated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// GHG emissions per MJ fuel.
    /// unit: kg CO2e per MJ
    pub ghg_emissions: StageBreakdown,

    /// External energy input per MJ fuel.
    /// unit: MJ per MJ
    pub energy_consumption: StageBreakdown,

    /// Water consumption per MJ fuel.
    /// unit: L per MJ
    pub water_usage: StageBreakdown,

    /// Land occupation per MJ fuel. Zero throughout: the e-fuel pathway has
    /// no land-use stage.
    /// unit: m2 per MJ
    pub land_use: StageBreakdown,
}

impl Inventory {
    /// Total GHG intensity expressed in the benchmark unit.
    /// unit: g CO2e per MJ
    pub fn ghg_total_g_per_mj(&self) -> f64 {
        self.ghg_emissions.total() * 1000.0
    }

    /// Whether two inventories agree within floating-point tolerance in
    /// every category and stage.
    pub fn approx_eq(&self, other: &Inventory) -> bool {
        self.ghg_emissions.approx_eq(&other.ghg_emissions)
            && self.energy_consumption.approx_eq(&other.energy_consumption)
            && self.water_usage.approx_eq(&other.water_usage)
            && self.land_use.approx_eq(&other.land_use)
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GHG Emissions (g CO2e/MJ):")?;
        for (stage, value) in self.ghg_emissions.iter() {
            writeln!(f, "  {:<22} {:>8.2}", stage.label(), value * 1000.0)?;
        }
        writeln!(f, "  {:<22} {:>8.2}", "TOTAL", self.ghg_total_g_per_mj())?;

        writeln!(f, "Energy Consumption (MJ/MJ):")?;
        for (stage, value) in self.energy_consumption.iter() {
            writeln!(f, "  {:<22} {:>8.2}", stage.label(), value)?;
        }
        writeln!(
            f,
            "  {:<22} {:>8.2}",
            "TOTAL",
            self.energy_consumption.total()
        )?;

        writeln!(f, "Water Usage (L/MJ):")?;
        for (stage, value) in self.water_usage.iter() {
            writeln!(f, "  {:<22} {:>8.2}", stage.label(), value)?;
        }
        write!(f, "  {:<22} {:>8.2}", "TOTAL", self.water_usage.total())
    }
}
