//! Electrolysis stage parameters (CO2 → CO and H2O → H2).

use crate::electricity::ElectricitySource;
use crate::errors::{LcaError, LcaResult};
use serde::{Deserialize, Serialize};

/// Parameters for co-electrolysis producing syngas.
///
/// The two efficiencies scale up the CO and H2 that must actually be
/// produced to meet the FT stoichiometric demand; both are divided into the
/// balance and must therefore be strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectrolysisParams {
    /// CO2 → CO conversion efficiency.
    /// unit: %, must be > 0
    ///
    /// Default: 65.0 (typical for AEM technology)
    pub co2_electrolysis_efficiency: f64,

    /// Water electrolysis efficiency for H2 production.
    /// unit: %, must be > 0
    ///
    /// Default: 75.0
    pub water_electrolysis_efficiency: f64,

    /// Power source for both electrolysis processes.
    ///
    /// Default: wind
    pub electricity_source: ElectricitySource,

    /// Carbon intensity of the electricity consumed.
    ///
    /// Resolved from `electricity_source` unless explicitly overridden with
    /// a site-specific value.
    /// unit: kg CO2e per kWh
    pub electricity_carbon_intensity: f64,

    /// Energy input for CO production.
    /// unit: MJ per kg CO
    ///
    /// Default: 28.0
    pub energy_input_co: f64,

    /// Energy input for H2 production.
    /// unit: MJ per kg H2
    ///
    /// Default: 55.0
    pub energy_input_h2: f64,

    /// Water consumption per unit of syngas produced.
    /// unit: L per kg syngas (CO + H2)
    ///
    /// Default: 20.0
    pub water_usage: f64,
}

impl ElectrolysisParams {
    /// Build parameters with the carbon intensity taken from the source's
    /// lookup value. Pass `Some(intensity)` to pin a measured value instead.
    pub fn for_source(
        source: ElectricitySource,
        intensity_override: Option<f64>,
    ) -> ElectrolysisParams {
        ElectrolysisParams {
            electricity_source: source,
            electricity_carbon_intensity: intensity_override
                .unwrap_or_else(|| source.carbon_intensity()),
            ..Default::default()
        }
    }

    /// Check the invariants the downstream balance relies on.
    pub fn validate(&self) -> LcaResult<()> {
        if self.co2_electrolysis_efficiency <= 0.0 {
            return Err(LcaError::InvalidParameter {
                name: "co2_electrolysis_efficiency",
                value: self.co2_electrolysis_efficiency,
                constraint: "> 0 %",
            });
        }
        if self.water_electrolysis_efficiency <= 0.0 {
            return Err(LcaError::InvalidParameter {
                name: "water_electrolysis_efficiency",
                value: self.water_electrolysis_efficiency,
                constraint: "> 0 %",
            });
        }
        Ok(())
    }
}

impl Default for ElectrolysisParams {
    fn default() -> Self {
        Self {
            co2_electrolysis_efficiency: 65.0,
            water_electrolysis_efficiency: 75.0,
            electricity_source: ElectricitySource::Wind,
            electricity_carbon_intensity: ElectricitySource::Wind.carbon_intensity(),
            energy_input_co: 28.0,
            energy_input_h2: 55.0,
            water_usage: 20.0,
        }
    }
}
