//! Fischer-Tropsch conversion stage parameters.

use serde::{Deserialize, Serialize};

/// Fallback syngas demand when no stoichiometric value is supplied.
/// unit: kg syngas per kg fuel
pub const SYNGAS_REQUIREMENT_DEFAULT: f64 = 2.5;

/// Fallback CO:H2 molar ratio when no stoichiometric value is supplied
/// (1 CO : 2 H2).
pub const CO_H2_RATIO_DEFAULT: f64 = 0.5;

/// Parameters for the Fischer-Tropsch synthesis stage.
///
/// `syngas_requirement` and `co_h2_ratio` couple this stage back to the
/// electrolysis balance: total syngas demand is split into CO and H2 as
///
/// $$CO = s \cdot \frac{r}{1 + r}, \qquad H_2 = s \cdot \frac{1}{1 + r}$$
///
/// The documented reference values (2.13 kg/kg, ratio 0.923 = 12:13) come
/// from the C12H26 product stoichiometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParams {
    /// Conversion technology name.
    ///
    /// Default: "Fischer-Tropsch"
    pub technology: String,

    /// Overall energy conversion efficiency from syngas to liquid fuel.
    /// Informational only; not used in the balance.
    /// unit: MJ fuel per MJ feedstock
    ///
    /// Default: 0.65
    pub efficiency: f64,

    /// Process emissions from heating, catalyst regeneration and utilities.
    /// unit: kg CO2e per kg fuel
    ///
    /// Default: 0.2
    pub ghg_emissions: f64,

    /// Energy input for heating, compression and separation.
    /// unit: MJ per kg fuel
    ///
    /// Default: 25.0
    pub energy_input: f64,

    /// Water consumption.
    /// unit: L per kg fuel
    ///
    /// Default: 5.0
    pub water_usage: f64,

    /// Syngas demand per unit of fuel.
    /// unit: kg syngas per kg fuel
    ///
    /// Default: 2.13 (C12H26 stoichiometry)
    pub syngas_requirement: f64,

    /// CO:H2 molar ratio in the syngas feed.
    ///
    /// Default: 0.923 (12 CO : 13 H2 for C12H26)
    pub co_h2_ratio: f64,
}

impl ConversionParams {
    /// Parameters with the generic stoichiometric fallbacks
    /// ([`SYNGAS_REQUIREMENT_DEFAULT`], [`CO_H2_RATIO_DEFAULT`]) instead of
    /// the C12H26 reference values.
    pub fn with_default_stoichiometry(
        technology: impl Into<String>,
        efficiency: f64,
        ghg_emissions: f64,
        energy_input: f64,
        water_usage: f64,
    ) -> ConversionParams {
        ConversionParams {
            technology: technology.into(),
            efficiency,
            ghg_emissions,
            energy_input,
            water_usage,
            syngas_requirement: SYNGAS_REQUIREMENT_DEFAULT,
            co_h2_ratio: CO_H2_RATIO_DEFAULT,
        }
    }
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            technology: "Fischer-Tropsch".to_string(),
            efficiency: 0.65,
            ghg_emissions: 0.2,
            energy_input: 25.0,
            water_usage: 5.0,
            syngas_requirement: 2.13,
            co_h2_ratio: 0.923,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stoichiometry_constants() {
        let params =
            ConversionParams::with_default_stoichiometry("Fischer-Tropsch", 0.65, 0.2, 25.0, 5.0);
        assert!((params.syngas_requirement - 2.5).abs() < 1e-12);
        assert!((params.co_h2_ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_default_ratio_splits_syngas() {
        // With r = 0.5 the split is 1/3 CO, 2/3 H2.
        let r = CO_H2_RATIO_DEFAULT;
        assert!((r / (1.0 + r) - 1.0 / 3.0).abs() < 1e-12);
        assert!((1.0 / (1.0 + r) - 2.0 / 3.0).abs() < 1e-12);
    }
}
