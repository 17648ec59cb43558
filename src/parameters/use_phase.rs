//! Use phase (combustion) parameters.

use crate::errors::{LcaError, LcaResult};
use serde::{Deserialize, Serialize};

/// Parameters for the fuel combustion stage.
///
/// `energy_density` doubles as the normalisation denominator that expresses
/// every per-kg-fuel quantity per MJ of fuel energy, so it must be strictly
/// positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsePhaseParams {
    /// Direct combustion emissions.
    ///
    /// Zero under the carbon-neutral DAC assumption (the CO2 released was
    /// captured from the air), but carried generally.
    /// unit: kg CO2e per kg fuel
    ///
    /// Default: 0.0
    pub combustion_emissions: f64,

    /// Energy density of the fuel (higher heating value).
    /// unit: MJ per kg, must be > 0
    ///
    /// Default: 43.0 (C12H26)
    pub energy_density: f64,
}

impl UsePhaseParams {
    pub fn new(combustion_emissions: f64, energy_density: f64) -> LcaResult<UsePhaseParams> {
        let params = UsePhaseParams {
            combustion_emissions,
            energy_density,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the invariants the downstream balance relies on.
    pub fn validate(&self) -> LcaResult<()> {
        if self.energy_density <= 0.0 {
            return Err(LcaError::InvalidParameter {
                name: "energy_density",
                value: self.energy_density,
                constraint: "> 0 MJ/kg",
            });
        }
        Ok(())
    }
}

impl Default for UsePhaseParams {
    fn default() -> Self {
        Self {
            combustion_emissions: 0.0,
            energy_density: 43.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(UsePhaseParams::default().validate().is_ok());
    }

    #[test]
    fn test_zero_energy_density_rejected() {
        let err = UsePhaseParams::new(0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            LcaError::InvalidParameter {
                name: "energy_density",
                ..
            }
        ));
    }
}
