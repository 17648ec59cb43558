//! Carbon capture (DAC) stage parameters.

use crate::errors::{LcaError, LcaResult};
use serde::{Deserialize, Serialize};

/// Parameters for the Direct Air Capture stage.
///
/// The capture efficiency scales up the gross CO2 that must be processed to
/// deliver the stoichiometric requirement:
///
/// $$CO_{2,actual} = \frac{\text{co2\_capture\_rate}}{\text{capture\_efficiency} / 100}$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonCaptureParams {
    /// CO2 capture efficiency.
    /// unit: %, must be > 0
    ///
    /// Default: 80.0
    pub capture_efficiency: f64,

    /// Energy input for air compression, heating and CO2 separation.
    /// unit: MJ per kg CO2 captured
    ///
    /// Default: 20.0
    pub energy_requirement: f64,

    /// Process emissions of the capture plant itself.
    /// unit: kg CO2e per kg CO2 captured
    ///
    /// Default: 0.08 (green-electricity operation)
    pub ghg_emissions: f64,

    /// Water consumption of the capture process.
    /// unit: L per kg CO2 captured
    ///
    /// Default: 5.0
    pub water_usage: f64,

    /// CO2 captured and consumed per kg of fuel produced.
    /// unit: kg CO2 per kg fuel
    ///
    /// Default: 3.1 (C12H26 stoichiometry)
    pub co2_capture_rate: f64,
}

impl CarbonCaptureParams {
    /// Check the invariants the downstream balance relies on.
    ///
    /// A zero capture efficiency would divide the balance by zero, so it is
    /// rejected here rather than propagated as NaN.
    pub fn validate(&self) -> LcaResult<()> {
        if self.capture_efficiency <= 0.0 {
            return Err(LcaError::InvalidParameter {
                name: "capture_efficiency",
                value: self.capture_efficiency,
                constraint: "> 0 %",
            });
        }
        Ok(())
    }
}

impl Default for CarbonCaptureParams {
    fn default() -> Self {
        Self {
            capture_efficiency: 80.0,
            energy_requirement: 20.0,
            ghg_emissions: 0.08,
            water_usage: 5.0,
            co2_capture_rate: 3.1,
        }
    }
}
