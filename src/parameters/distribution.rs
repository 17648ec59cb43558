//! Distribution stage parameters.

use crate::errors::{LcaError, LcaResult};
use crate::transport::TransportMode;
use serde::{Deserialize, Serialize};

/// Mass unit conversion used by the per-kg transport factors.
/// unit: tonnes per kg
pub const TONNES_PER_KG: f64 = 0.001;

/// Parameters for the fuel distribution stage.
///
/// The per-kg emissions and energy are derived from the mode's tonne-km
/// factors and the transport distance; they are accessors rather than stored
/// state so they can never fall out of sync with the mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionParams {
    /// Transport distance from plant to point of use.
    /// unit: km, must be >= 0
    ///
    /// Default: 500.0
    pub transport_distance: f64,

    /// Mode of transport.
    ///
    /// Default: truck
    pub transport_mode: TransportMode,

    /// Fuel density, carried for volume-based presentation.
    /// unit: kg per L
    ///
    /// Default: 0.8
    pub fuel_density: f64,
}

impl DistributionParams {
    pub fn new(
        transport_distance: f64,
        transport_mode: TransportMode,
        fuel_density: f64,
    ) -> LcaResult<DistributionParams> {
        let params = DistributionParams {
            transport_distance,
            transport_mode,
            fuel_density,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the invariants the downstream balance relies on.
    pub fn validate(&self) -> LcaResult<()> {
        if self.transport_distance < 0.0 {
            return Err(LcaError::InvalidParameter {
                name: "transport_distance",
                value: self.transport_distance,
                constraint: ">= 0 km",
            });
        }
        Ok(())
    }

    /// Emission factor of the configured mode.
    /// unit: kg CO2e per tonne-km
    pub fn emission_factor(&self) -> f64 {
        self.transport_mode.emission_factor()
    }

    /// Energy factor of the configured mode.
    /// unit: MJ per tonne-km
    pub fn energy_factor(&self) -> f64 {
        self.transport_mode.energy_factor()
    }

    /// Transport emissions per kg of fuel moved over the full distance.
    /// unit: kg CO2e per kg fuel
    pub fn ghg_emissions(&self) -> f64 {
        self.emission_factor() * TONNES_PER_KG * self.transport_distance
    }

    /// Transport energy per kg of fuel moved over the full distance.
    /// unit: MJ per kg fuel
    pub fn energy_input(&self) -> f64 {
        self.energy_factor() * TONNES_PER_KG * self.transport_distance
    }
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self {
            transport_distance: 500.0,
            transport_mode: TransportMode::Truck,
            fuel_density: 0.8,
        }
    }
}
