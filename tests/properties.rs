//! Cross-module properties of the SAF LCA engine.
//!
//! These tests exercise the public model contract end to end:
//! - per-category totals equal the sum of their stages
//! - sweeps leave the model's observable state untouched
//! - distribution emissions grow strictly with distance
//! - the documented reference scenario reproduces its published magnitude

use approx::assert_relative_eq;
use saf_lca::{ElectricitySource, LcaError, SafLcaModel, TransportMode};

/// The documented C12H26 reference scenario, built through the public
/// setter contract.
fn reference_model() -> SafLcaModel {
    let mut model = SafLcaModel::new();
    model.set_use_phase_data(0.0, 43.0).unwrap();
    model
        .set_carbon_capture_data(80.0, 20.0, 0.08, 5.0, 3.1)
        .unwrap();
    model
        .set_electrolysis_data(65.0, 75.0, "wind", 28.0, 55.0, 20.0, None)
        .unwrap();
    model.set_conversion_data(
        "Fischer-Tropsch",
        0.65,
        0.2,
        25.0,
        5.0,
        Some(2.13),
        Some(0.923),
    );
    model.set_distribution_data(500.0, "truck", 0.8).unwrap();
    model
}

mod conservation {
    use super::*;

    /// The five GHG stage values must sum exactly to the reported total.
    #[test]
    fn test_ghg_stages_sum_to_total() {
        let inventory = reference_model().calculate().unwrap();
        let ghg = &inventory.ghg_emissions;

        let stage_sum = ghg.carbon_capture
            + ghg.electrolysis
            + ghg.conversion
            + ghg.distribution
            + ghg.use_phase;

        assert!(
            (ghg.total() - stage_sum).abs() < 1e-9,
            "GHG total {} != stage sum {}",
            ghg.total(),
            stage_sum
        );
    }

    #[test]
    fn test_energy_and_water_stages_sum_to_total() {
        let inventory = reference_model().calculate().unwrap();

        for breakdown in [&inventory.energy_consumption, &inventory.water_usage] {
            let stage_sum: f64 = breakdown.iter().map(|(_, v)| v).sum();
            assert!((breakdown.total() - stage_sum).abs() < 1e-9);
        }
    }

    #[test]
    fn test_land_use_is_zero_for_efuel_pathway() {
        let inventory = reference_model().calculate().unwrap();
        assert_eq!(inventory.land_use.total(), 0.0);
    }
}

mod reference_scenario {
    use super::*;

    /// Order-of-magnitude check against the documented example: the
    /// reference configuration lands between 15 and 30 g CO2e/MJ.
    #[test]
    fn test_total_intensity_in_documented_range() {
        let inventory = reference_model().calculate().unwrap();
        let total_g = inventory.ghg_total_g_per_mj();

        assert!(
            (15.0..30.0).contains(&total_g),
            "Reference scenario should land at 15-30 g CO2e/MJ, got {:.2}",
            total_g
        );
    }

    #[test]
    fn test_reduction_clears_all_three_thresholds() {
        let model = reference_model();
        let reduction = model.emission_reduction().unwrap();
        assert!(reduction >= 65.0);

        let compliance = model.compliance().unwrap();
        assert!(compliance.corsia && compliance.ca_lcfs && compliance.eu_red_ii);
    }

    /// `emission_reduction` is a pure function of the configuration.
    #[test]
    fn test_emission_reduction_is_repeatable() {
        let model = reference_model();
        let first = model.emission_reduction().unwrap();
        let second = model.emission_reduction().unwrap();
        assert_eq!(first, second);
    }

    /// Two consecutive calculations yield bit-for-bit identical inventories.
    #[test]
    fn test_calculate_is_idempotent() {
        let model = reference_model();
        let first = model.calculate().unwrap();
        let second = model.calculate().unwrap();
        assert_eq!(first, second);
    }
}

mod sweep_isolation {
    use super::*;

    /// After either sweep completes, a fresh calculation must reproduce the
    /// pre-sweep inventory.
    #[test]
    fn test_sweeps_do_not_perturb_model_state() {
        let model = reference_model();
        let before = model.calculate().unwrap();

        model.sweep_electricity_sources(None).unwrap();
        model
            .sweep_transport_modes(None, Some(750.0))
            .unwrap();

        let after = model.calculate().unwrap();
        assert!(
            before.approx_eq(&after),
            "Sweeps must not change the model's observable state"
        );
    }

    #[test]
    fn test_electricity_sweep_order_and_contribution() {
        let model = reference_model();
        let sources = [
            ElectricitySource::Hydro,
            ElectricitySource::Coal,
            ElectricitySource::Solar,
        ];
        let rows = model.sweep_electricity_sources(Some(&sources)).unwrap();

        // Output order matches input order, not sorted
        let got: Vec<_> = rows.iter().map(|r| r.source).collect();
        assert_eq!(got, sources);

        for row in &rows {
            assert_relative_eq!(
                row.electrolysis_contribution_pct,
                row.electrolysis_emissions_g / row.total_emissions_g * 100.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_transport_sweep_contribution_column() {
        let model = reference_model();
        let rows = model.sweep_transport_modes(None, None).unwrap();

        for row in &rows {
            assert_relative_eq!(
                row.transport_contribution_pct,
                row.transport_emissions_g / row.total_emissions_g * 100.0,
                max_relative = 1e-12
            );
        }
    }
}

mod monotonicity {
    use super::*;

    /// Distribution GHG and the total must strictly increase with distance,
    /// mode held fixed.
    #[test]
    fn test_distance_monotonicity() {
        let mut previous_distribution = f64::NEG_INFINITY;
        let mut previous_total = f64::NEG_INFINITY;

        for distance in [0.0, 100.0, 500.0, 2000.0, 10_000.0] {
            let mut model = reference_model();
            model
                .set_distribution_data(distance, "truck", 0.8)
                .unwrap();
            let inventory = model.calculate().unwrap();

            assert!(
                inventory.ghg_emissions.distribution > previous_distribution,
                "Distribution GHG should grow with distance"
            );
            assert!(
                inventory.ghg_emissions.total() > previous_total,
                "Total GHG should grow with distance"
            );

            previous_distribution = inventory.ghg_emissions.distribution;
            previous_total = inventory.ghg_emissions.total();
        }
    }

    /// Pipeline must rank lowest and truck highest among the five modes'
    /// distribution-stage contributions, all else equal.
    #[test]
    fn test_transport_mode_ordering_invariant() {
        let model = reference_model();
        let rows = model.sweep_transport_modes(None, None).unwrap();

        let by_mode = |mode: TransportMode| {
            rows.iter()
                .find(|r| r.mode == mode)
                .unwrap()
                .transport_emissions_g
        };

        let pipeline = by_mode(TransportMode::Pipeline);
        let truck = by_mode(TransportMode::Truck);

        for row in &rows {
            assert!(row.transport_emissions_g >= pipeline);
            assert!(row.transport_emissions_g <= truck);
        }
        assert!(pipeline < truck);
    }
}

mod rejected_input {
    use super::*;

    /// An out-of-domain transport mode fails and leaves the previously
    /// stored distribution parameters unchanged.
    #[test]
    fn test_teleport_rejected_state_preserved() {
        let mut model = reference_model();
        let before = model.calculate().unwrap();

        let err = model
            .set_distribution_data(1.0, "teleport", 0.8)
            .unwrap_err();
        assert_eq!(err, LcaError::UnknownTransportMode("teleport".to_string()));

        let after = model.calculate().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_calculate_fails_before_setup() {
        let model = SafLcaModel::new();
        assert!(matches!(
            model.calculate().unwrap_err(),
            LcaError::MissingData { .. }
        ));
    }
}
