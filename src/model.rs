//! The SAF LCA model: parameter store and public entry points.
//!
//! A [`SafLcaModel`] accumulates the five per-stage parameter groups through
//! setter calls, then derives inventories, benchmark reductions and
//! sensitivity tables. The production pathway itself is fixed for the
//! model's lifetime: Fischer-Tropsch synthesis fed by DAC CO2, normalised to
//! 1 MJ of fuel energy.
//!
//! Each setter overwrites its group wholesale; a failed setter leaves the
//! previously stored group untouched. All computation goes through an
//! immutable [`ModelConfig`] snapshot, so sweeps and calculations can never
//! corrupt the stored configuration.

use crate::benchmark::{self, PolicyCompliance, FOSSIL_JET_BASELINE_G_PER_MJ};
use crate::electricity::ElectricitySource;
use crate::engine::{calculate, ModelConfig};
use crate::errors::{LcaError, LcaResult};
use crate::inventory::Inventory;
use crate::parameters::{
    CarbonCaptureParams, ConversionParams, DistributionParams, ElectrolysisParams, UsePhaseParams,
    CO_H2_RATIO_DEFAULT, SYNGAS_REQUIREMENT_DEFAULT,
};
use crate::sensitivity::{
    sweep_electricity_sources, sweep_transport_modes, ElectricityScenario, TransportScenario,
};
use crate::transport::TransportMode;
use serde::Serialize;

/// The invariant pathway configuration. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixedConfig {
    /// Production pathway.
    pub pathway: &'static str,
    /// Functional unit all impacts are normalised to.
    pub functional_unit: &'static str,
    /// CO2 feedstock source.
    pub co2_source: &'static str,
}

/// Life-cycle model for the DAC → electrolysis → Fischer-Tropsch pathway.
#[derive(Debug, Clone, Default)]
pub struct SafLcaModel {
    carbon_capture: Option<CarbonCaptureParams>,
    electrolysis: Option<ElectrolysisParams>,
    conversion: Option<ConversionParams>,
    distribution: Option<DistributionParams>,
    use_phase: Option<UsePhaseParams>,
}

impl SafLcaModel {
    /// The fixed pathway this model describes.
    pub const FIXED_CONFIG: FixedConfig = FixedConfig {
        pathway: "FT",
        functional_unit: "MJ",
        co2_source: "DAC",
    };

    /// Create a model with no parameter groups set.
    pub fn new() -> SafLcaModel {
        SafLcaModel::default()
    }

    /// Create a fully populated model from a configuration snapshot.
    pub fn from_config(config: ModelConfig) -> LcaResult<SafLcaModel> {
        config.validate()?;
        Ok(SafLcaModel {
            carbon_capture: Some(config.carbon_capture),
            electrolysis: Some(config.electrolysis),
            conversion: Some(config.conversion),
            distribution: Some(config.distribution),
            use_phase: Some(config.use_phase),
        })
    }

    /// Set the Direct Air Capture parameters.
    pub fn set_carbon_capture_data(
        &mut self,
        capture_efficiency: f64,
        energy_requirement: f64,
        ghg_emissions: f64,
        water_usage: f64,
        co2_capture_rate: f64,
    ) -> LcaResult<()> {
        let params = CarbonCaptureParams {
            capture_efficiency,
            energy_requirement,
            ghg_emissions,
            water_usage,
            co2_capture_rate,
        };
        params.validate()?;
        self.carbon_capture = Some(params);
        Ok(())
    }

    /// Set the electrolysis parameters.
    ///
    /// `electricity_source` is resolved leniently: an unrecognised key falls
    /// back to the generic renewable source with a logged warning. Pass
    /// `Some(intensity)` to pin a measured carbon intensity instead of the
    /// lookup value.
    #[allow(clippy::too_many_arguments)]
    pub fn set_electrolysis_data(
        &mut self,
        co2_electrolysis_efficiency: f64,
        water_electrolysis_efficiency: f64,
        electricity_source: &str,
        energy_input_co: f64,
        energy_input_h2: f64,
        water_usage: f64,
        electricity_carbon_intensity: Option<f64>,
    ) -> LcaResult<()> {
        let source = ElectricitySource::resolve(electricity_source);
        let params = ElectrolysisParams {
            co2_electrolysis_efficiency,
            water_electrolysis_efficiency,
            electricity_source: source,
            electricity_carbon_intensity: electricity_carbon_intensity
                .unwrap_or_else(|| source.carbon_intensity()),
            energy_input_co,
            energy_input_h2,
            water_usage,
        };
        params.validate()?;
        self.electrolysis = Some(params);
        Ok(())
    }

    /// Set the Fischer-Tropsch conversion parameters.
    ///
    /// `syngas_requirement` and `co_h2_ratio` fall back to the generic
    /// stoichiometric defaults ([`SYNGAS_REQUIREMENT_DEFAULT`],
    /// [`CO_H2_RATIO_DEFAULT`]) when not supplied.
    #[allow(clippy::too_many_arguments)]
    pub fn set_conversion_data(
        &mut self,
        technology: impl Into<String>,
        efficiency: f64,
        ghg_emissions: f64,
        energy_input: f64,
        water_usage: f64,
        syngas_requirement: Option<f64>,
        co_h2_ratio: Option<f64>,
    ) {
        self.conversion = Some(ConversionParams {
            technology: technology.into(),
            efficiency,
            ghg_emissions,
            energy_input,
            water_usage,
            syngas_requirement: syngas_requirement.unwrap_or(SYNGAS_REQUIREMENT_DEFAULT),
            co_h2_ratio: co_h2_ratio.unwrap_or(CO_H2_RATIO_DEFAULT),
        });
    }

    /// Set the distribution parameters.
    ///
    /// Fails with [`LcaError::UnknownTransportMode`] for a mode outside the
    /// closed set, leaving any previously stored distribution parameters
    /// unchanged.
    pub fn set_distribution_data(
        &mut self,
        transport_distance: f64,
        transport_mode: &str,
        fuel_density: f64,
    ) -> LcaResult<()> {
        let mode: TransportMode = transport_mode.parse()?;
        let params = DistributionParams::new(transport_distance, mode, fuel_density)?;
        self.distribution = Some(params);
        Ok(())
    }

    /// Set the use-phase parameters.
    pub fn set_use_phase_data(
        &mut self,
        combustion_emissions: f64,
        energy_density: f64,
    ) -> LcaResult<()> {
        self.use_phase = Some(UsePhaseParams::new(combustion_emissions, energy_density)?);
        Ok(())
    }

    /// Assemble an immutable snapshot of the current configuration.
    ///
    /// Fails with [`LcaError::MissingData`] naming the first unset group.
    pub fn config(&self) -> LcaResult<ModelConfig> {
        Ok(ModelConfig {
            carbon_capture: self
                .carbon_capture
                .clone()
                .ok_or(LcaError::MissingData {
                    stage: "carbon_capture",
                })?,
            electrolysis: self
                .electrolysis
                .clone()
                .ok_or(LcaError::MissingData {
                    stage: "electrolysis",
                })?,
            conversion: self.conversion.clone().ok_or(LcaError::MissingData {
                stage: "conversion",
            })?,
            distribution: self.distribution.clone().ok_or(LcaError::MissingData {
                stage: "distribution",
            })?,
            use_phase: self.use_phase.clone().ok_or(LcaError::MissingData {
                stage: "use_phase",
            })?,
        })
    }

    /// Compute the full life-cycle inventory.
    ///
    /// Atomic: either a complete [`Inventory`] or an error, never a partial
    /// result. Requires all five parameter groups to be set.
    pub fn calculate(&self) -> LcaResult<Inventory> {
        Ok(calculate(&self.config()?))
    }

    /// Emission reduction against the standard fossil jet baseline
    /// (89 g CO2e/MJ).
    /// unit: %
    pub fn emission_reduction(&self) -> LcaResult<f64> {
        self.emission_reduction_against(FOSSIL_JET_BASELINE_G_PER_MJ)
    }

    /// Emission reduction against a caller-supplied fossil baseline.
    /// unit: %
    pub fn emission_reduction_against(&self, fossil_baseline_g_per_mj: f64) -> LcaResult<f64> {
        let inventory = self.calculate()?;
        Ok(benchmark::emission_reduction(
            &inventory,
            fossil_baseline_g_per_mj,
        ))
    }

    /// Evaluate CORSIA, CA LCFS and EU RED II compliance for the current
    /// configuration.
    pub fn compliance(&self) -> LcaResult<PolicyCompliance> {
        Ok(PolicyCompliance::evaluate(self.emission_reduction()?))
    }

    /// Run the electricity-source sensitivity sweep.
    ///
    /// Pass `None` for the default 11-source list. The model's own state is
    /// unaffected; sweeps run on a snapshot.
    pub fn sweep_electricity_sources(
        &self,
        sources: Option<&[ElectricitySource]>,
    ) -> LcaResult<Vec<ElectricityScenario>> {
        Ok(sweep_electricity_sources(&self.config()?, sources))
    }

    /// Run the transport-mode sensitivity sweep.
    ///
    /// Pass `None` for all five modes and `None` for the default 500 km
    /// comparison distance.
    pub fn sweep_transport_modes(
        &self,
        modes: Option<&[TransportMode]>,
        base_distance_km: Option<f64>,
    ) -> LcaResult<Vec<TransportScenario>> {
        Ok(sweep_transport_modes(&self.config()?, modes, base_distance_km))
    }

    /// Currently stored distribution parameters, if set.
    pub fn distribution(&self) -> Option<&DistributionParams> {
        self.distribution.as_ref()
    }

    /// Currently stored electrolysis parameters, if set.
    pub fn electrolysis(&self) -> Option<&ElectrolysisParams> {
        self.electrolysis.as_ref()
    }
}
