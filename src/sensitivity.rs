//! Deterministic sensitivity sweeps over electricity sources and transport
//! modes.
//!
//! Each sweep varies exactly one parameter group while holding everything
//! else fixed, re-derives the full inventory per scenario and collects an
//! ordered table of outcomes. Sweeps operate on cloned snapshots of the
//! configuration, so the caller's model state is untouched by construction —
//! there is no restore step to get wrong.

use crate::benchmark::{emission_reduction, FOSSIL_JET_BASELINE_G_PER_MJ};
use crate::electricity::ElectricitySource;
use crate::engine::{calculate, ModelConfig};
use crate::parameters::DistributionParams;
use crate::transport::TransportMode;
use serde::{Deserialize, Serialize};

/// Comparison distance used by the transport sweep when the caller does not
/// supply one.
/// unit: km
pub const DEFAULT_SWEEP_DISTANCE_KM: f64 = 500.0;

/// Outcome of one electricity-source scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityScenario {
    pub source: ElectricitySource,
    /// unit: kg CO2e per kWh
    pub carbon_intensity: f64,
    /// unit: g CO2e per MJ
    pub total_emissions_g: f64,
    /// unit: %
    pub emission_reduction_pct: f64,
    /// unit: g CO2e per MJ
    pub electrolysis_emissions_g: f64,
    /// Share of total emissions attributable to electrolysis.
    /// unit: %
    pub electrolysis_contribution_pct: f64,
}

/// Outcome of one transport-mode scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportScenario {
    pub mode: TransportMode,
    /// unit: kg CO2e per tonne-km
    pub emission_factor: f64,
    /// unit: MJ per tonne-km
    pub energy_factor: f64,
    /// unit: g CO2e per MJ
    pub transport_emissions_g: f64,
    /// unit: g CO2e per MJ
    pub total_emissions_g: f64,
    /// unit: %
    pub emission_reduction_pct: f64,
    /// Share of total emissions attributable to distribution.
    /// unit: %
    pub transport_contribution_pct: f64,
}

/// Sweep the electrolysis electricity source.
///
/// For each source the carbon intensity is re-resolved from the lookup table
/// (an explicit override in the base configuration applies only to the base
/// configuration, not to sweep scenarios). Scenario order matches the input
/// list; pass `None` for the default 11-source list.
pub fn sweep_electricity_sources(
    config: &ModelConfig,
    sources: Option<&[ElectricitySource]>,
) -> Vec<ElectricityScenario> {
    let sources = sources.unwrap_or(&ElectricitySource::DEFAULT_SWEEP);
    log::debug!("Electricity sweep over {} sources", sources.len());

    sources
        .iter()
        .map(|&source| {
            let mut scenario = config.clone();
            scenario.electrolysis.electricity_source = source;
            scenario.electrolysis.electricity_carbon_intensity = source.carbon_intensity();

            let inventory = calculate(&scenario);
            let total_g = inventory.ghg_total_g_per_mj();
            let electrolysis_g = inventory.ghg_emissions.electrolysis * 1000.0;

            ElectricityScenario {
                source,
                carbon_intensity: source.carbon_intensity(),
                total_emissions_g: total_g,
                emission_reduction_pct: emission_reduction(
                    &inventory,
                    FOSSIL_JET_BASELINE_G_PER_MJ,
                ),
                electrolysis_emissions_g: electrolysis_g,
                electrolysis_contribution_pct: electrolysis_g / total_g * 100.0,
            }
        })
        .collect()
}

/// Sweep the distribution transport mode at a fixed comparison distance.
///
/// Scenario order matches the input list; pass `None` for all five modes and
/// `None` for the default 500 km comparison distance.
pub fn sweep_transport_modes(
    config: &ModelConfig,
    modes: Option<&[TransportMode]>,
    base_distance_km: Option<f64>,
) -> Vec<TransportScenario> {
    let modes = modes.unwrap_or(&TransportMode::ALL);
    let distance = base_distance_km.unwrap_or(DEFAULT_SWEEP_DISTANCE_KM);
    log::debug!(
        "Transport sweep over {} modes at {} km",
        modes.len(),
        distance
    );

    modes
        .iter()
        .map(|&mode| {
            let mut scenario = config.clone();
            scenario.distribution = DistributionParams {
                transport_distance: distance,
                transport_mode: mode,
                fuel_density: config.distribution.fuel_density,
            };

            let inventory = calculate(&scenario);
            let total_g = inventory.ghg_total_g_per_mj();
            let transport_g = inventory.ghg_emissions.distribution * 1000.0;

            TransportScenario {
                mode,
                emission_factor: mode.emission_factor(),
                energy_factor: mode.energy_factor(),
                transport_emissions_g: transport_g,
                total_emissions_g: total_g,
                emission_reduction_pct: emission_reduction(
                    &inventory,
                    FOSSIL_JET_BASELINE_G_PER_MJ,
                ),
                transport_contribution_pct: transport_g / total_g * 100.0,
            }
        })
        .collect()
}

/// Range statistics over one sweep's scenario outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Label of the scenario with the lowest total emissions.
    pub best: String,
    /// Label of the scenario with the highest total emissions.
    pub worst: String,
    /// unit: g CO2e per MJ
    pub min_emissions_g: f64,
    /// unit: g CO2e per MJ
    pub max_emissions_g: f64,
    /// unit: g CO2e per MJ
    pub span_g: f64,
}

impl SweepSummary {
    fn from_pairs(pairs: impl Iterator<Item = (String, f64)>) -> Option<SweepSummary> {
        let mut best: Option<(String, f64)> = None;
        let mut worst: Option<(String, f64)> = None;

        for (label, emissions) in pairs {
            if best.as_ref().map_or(true, |(_, e)| emissions < *e) {
                best = Some((label.clone(), emissions));
            }
            if worst.as_ref().map_or(true, |(_, e)| emissions > *e) {
                worst = Some((label, emissions));
            }
        }

        let (best, min) = best?;
        let (worst, max) = worst?;
        Some(SweepSummary {
            best,
            worst,
            min_emissions_g: min,
            max_emissions_g: max,
            span_g: max - min,
        })
    }

    /// Summarise an electricity sweep. `None` for an empty table.
    pub fn of_electricity(rows: &[ElectricityScenario]) -> Option<SweepSummary> {
        Self::from_pairs(
            rows.iter()
                .map(|r| (r.source.to_string(), r.total_emissions_g)),
        )
    }

    /// Summarise a transport sweep. `None` for an empty table.
    pub fn of_transport(rows: &[TransportScenario]) -> Option<SweepSummary> {
        Self::from_pairs(rows.iter().map(|r| (r.mode.to_string(), r.total_emissions_g)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_electricity_sweep_preserves_input_order() {
        let sources = [
            ElectricitySource::Coal,
            ElectricitySource::Wind,
            ElectricitySource::GridEu,
        ];
        let rows = sweep_electricity_sources(&ModelConfig::default(), Some(&sources));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].source, ElectricitySource::Coal);
        assert_eq!(rows[1].source, ElectricitySource::Wind);
        assert_eq!(rows[2].source, ElectricitySource::GridEu);
    }

    #[test]
    fn test_electricity_sweep_default_list() {
        let rows = sweep_electricity_sources(&ModelConfig::default(), None);
        assert_eq!(rows.len(), 11);
    }

    #[test]
    fn test_sweep_ignores_pinned_intensity_override() {
        let mut config = ModelConfig::default();
        // Pin an absurd override in the base configuration
        config.electrolysis.electricity_carbon_intensity = 99.0;

        let rows =
            sweep_electricity_sources(&config, Some(&[ElectricitySource::Wind]));
        assert_relative_eq!(rows[0].carbon_intensity, 0.011, max_relative = 1e-12);
    }

    #[test]
    fn test_coal_scenario_fails_baseline() {
        let rows = sweep_electricity_sources(
            &ModelConfig::default(),
            Some(&[ElectricitySource::Coal]),
        );
        // Coal-powered electrolysis emits far more than fossil jet fuel
        assert!(rows[0].total_emissions_g > FOSSIL_JET_BASELINE_G_PER_MJ);
        assert!(rows[0].emission_reduction_pct < 0.0);
        assert!(rows[0].electrolysis_contribution_pct > 90.0);
    }

    #[test]
    fn test_sweep_leaves_config_untouched() {
        let config = ModelConfig::default();
        let before = calculate(&config);

        sweep_electricity_sources(&config, None);
        sweep_transport_modes(&config, None, None);

        let after = calculate(&config);
        assert_eq!(before, after);
    }

    #[test]
    fn test_transport_sweep_ranks_pipeline_lowest_truck_highest() {
        let rows = sweep_transport_modes(&ModelConfig::default(), None, None);
        assert_eq!(rows.len(), 5);

        let truck = rows.iter().find(|r| r.mode == TransportMode::Truck).unwrap();
        let pipeline = rows
            .iter()
            .find(|r| r.mode == TransportMode::Pipeline)
            .unwrap();

        for row in &rows {
            assert!(row.transport_emissions_g >= pipeline.transport_emissions_g);
            assert!(row.transport_emissions_g <= truck.transport_emissions_g);
        }
    }

    #[test]
    fn test_transport_sweep_uses_comparison_distance() {
        let mut config = ModelConfig::default();
        config.distribution.transport_distance = 10_000.0;

        let rows = sweep_transport_modes(
            &config,
            Some(&[TransportMode::Truck]),
            Some(DEFAULT_SWEEP_DISTANCE_KM),
        );
        // 0.062 x 0.001 x 500 / 43, in grams
        assert_relative_eq!(
            rows[0].transport_emissions_g,
            0.031 / 43.0 * 1000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_summary_best_and_worst() {
        let rows = sweep_electricity_sources(&ModelConfig::default(), None);
        let summary = SweepSummary::of_electricity(&rows).unwrap();

        assert_eq!(summary.best, "wind");
        assert_eq!(summary.worst, "coal");
        assert!(summary.span_g > 0.0);
        assert_relative_eq!(
            summary.span_g,
            summary.max_emissions_g - summary.min_emissions_g,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_summary_of_empty_table() {
        assert!(SweepSummary::of_electricity(&[]).is_none());
        assert!(SweepSummary::of_transport(&[]).is_none());
    }
}
