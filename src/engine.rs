//! The calculation engine: a pure function from a complete parameter
//! snapshot to a life-cycle inventory.
//!
//! # What the engine does
//!
//! 1. Normalises every per-kg-fuel quantity to the functional unit (1 MJ of
//!    fuel energy) via `1 / energy_density`
//! 2. Scales the DAC stage up by capture losses
//! 3. Splits the FT syngas demand into CO and H2, scales each up by its
//!    electrolysis efficiency and charges the electricity's carbon intensity
//!    against the energy consumed
//! 4. Adds the FT, distribution and use-phase stages as per-kg factors times
//!    the normalisation
//! 5. Sums per-category totals; land use stays zero for this pathway
//!
//! The stages are stoichiometrically coupled: the conversion parameters set
//! the syngas demand, which drives the electrolysis balance, which in turn
//! sets nothing upstream — the chain is strictly feed-forward, so a single
//! pass produces the complete inventory.

use crate::errors::{LcaError, LcaResult};
use crate::inventory::{Inventory, StageBreakdown};
use crate::parameters::{
    CarbonCaptureParams, ConversionParams, DistributionParams, ElectrolysisParams, UsePhaseParams,
};
use serde::{Deserialize, Serialize};

/// Conversion from electrical energy billing units to the functional unit.
/// unit: MJ per kWh
pub const MJ_PER_KWH: f64 = 3.6;

/// Immutable snapshot of all five parameter groups.
///
/// The engine only ever reads a `ModelConfig`; scenario sweeps clone the
/// snapshot and vary the clone, so no caller-visible state is ever mutated
/// mid-sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub carbon_capture: CarbonCaptureParams,
    pub electrolysis: ElectrolysisParams,
    pub conversion: ConversionParams,
    pub distribution: DistributionParams,
    pub use_phase: UsePhaseParams,
}

impl ModelConfig {
    /// Validate every parameter group.
    pub fn validate(&self) -> LcaResult<()> {
        self.carbon_capture.validate()?;
        self.electrolysis.validate()?;
        self.distribution.validate()?;
        self.use_phase.validate()?;
        Ok(())
    }

    /// Load and validate a configuration from a TOML document.
    ///
    /// Missing fields take their documented defaults, so a partial document
    /// overriding a handful of values is enough to describe a scenario.
    pub fn from_toml_str(doc: &str) -> LcaResult<ModelConfig> {
        let config: ModelConfig =
            toml::from_str(doc).map_err(|e| LcaError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Compute the full life-cycle inventory for one configuration.
///
/// Pure and deterministic: equal configurations produce bit-identical
/// inventories. Returns a complete [`Inventory`] or nothing — no partial
/// results are ever exposed.
pub fn calculate(config: &ModelConfig) -> Inventory {
    let normalization = 1.0 / config.use_phase.energy_density;

    // Carbon capture (DAC): scale the stoichiometric CO2 demand up by
    // capture losses.
    let cc = &config.carbon_capture;
    let actual_co2_needed = cc.co2_capture_rate / (cc.capture_efficiency / 100.0);
    let carbon_capture_ghg = cc.ghg_emissions * actual_co2_needed * normalization;
    let carbon_capture_energy = cc.energy_requirement * actual_co2_needed * normalization;
    let carbon_capture_water = cc.water_usage * actual_co2_needed * normalization;

    // Electrolysis: split the FT syngas demand into CO and H2, scale each up
    // by its electrolysis efficiency.
    let el = &config.electrolysis;
    let elec_intensity_mj = el.electricity_carbon_intensity / MJ_PER_KWH;

    let ratio = config.conversion.co_h2_ratio;
    let total_syngas_needed = config.conversion.syngas_requirement * normalization;
    let co_needed = total_syngas_needed * (ratio / (1.0 + ratio));
    let h2_needed = total_syngas_needed * (1.0 / (1.0 + ratio));

    let actual_co_needed = co_needed / (el.co2_electrolysis_efficiency / 100.0);
    let actual_h2_needed = h2_needed / (el.water_electrolysis_efficiency / 100.0);

    let co_energy = actual_co_needed * el.energy_input_co;
    let h2_energy = actual_h2_needed * el.energy_input_h2;

    let electrolysis_ghg = (co_energy + h2_energy) * elec_intensity_mj;
    // Already per MJ fuel: the normalisation rode in on actual_co/h2_needed.
    let electrolysis_energy = co_energy + h2_energy;
    let electrolysis_water = total_syngas_needed * el.water_usage;

    // Conversion (Fischer-Tropsch)
    let conversion_ghg = config.conversion.ghg_emissions * normalization;
    let conversion_energy = config.conversion.energy_input * normalization;
    let conversion_water = config.conversion.water_usage * normalization;

    // Distribution
    let distribution_ghg = config.distribution.ghg_emissions() * normalization;
    let distribution_energy = config.distribution.energy_input() * normalization;

    // Use phase: zero under the carbon-neutral DAC assumption, but computed
    // generally.
    let use_phase_ghg = config.use_phase.combustion_emissions * normalization;

    log::debug!(
        "LCA balance: CO2 demand {:.4} kg/kg fuel, syngas demand {:.4} kg/MJ, \
         electricity intensity {:.5} kg CO2e/MJ",
        actual_co2_needed,
        total_syngas_needed,
        elec_intensity_mj
    );

    Inventory {
        ghg_emissions: StageBreakdown {
            carbon_capture: carbon_capture_ghg,
            electrolysis: electrolysis_ghg,
            conversion: conversion_ghg,
            distribution: distribution_ghg,
            use_phase: use_phase_ghg,
        },
        energy_consumption: StageBreakdown {
            carbon_capture: carbon_capture_energy,
            electrolysis: electrolysis_energy,
            conversion: conversion_energy,
            distribution: distribution_energy,
            use_phase: 0.0,
        },
        water_usage: StageBreakdown {
            carbon_capture: carbon_capture_water,
            electrolysis: electrolysis_water,
            conversion: conversion_water,
            distribution: 0.0,
            use_phase: 0.0,
        },
        land_use: StageBreakdown::default(),
    }
}
