//! Transport modes for the distribution stage.
//!
//! Each mode carries a fixed emission factor and energy factor per
//! tonne-kilometre of fuel moved (IPCC Guidelines / EcoTransIT data). The
//! modes form a closed set: anything outside it is rejected at construction
//! time rather than falling through a runtime table lookup.

use crate::errors::{LcaError, LcaResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mode of transport for fuel distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// Long-haul heavy-duty freight truck.
    Truck,
    /// Railway freight.
    Rail,
    /// Maritime cargo vessel.
    Ship,
    /// Inland waterway barge.
    Barge,
    /// Liquid fuel pipeline.
    Pipeline,
}

impl TransportMode {
    /// All known modes, in the order the original comparison sweeps them.
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Truck,
        TransportMode::Rail,
        TransportMode::Ship,
        TransportMode::Barge,
        TransportMode::Pipeline,
    ];

    /// Emission factor for this mode.
    /// unit: kg CO2e per tonne-km
    pub fn emission_factor(&self) -> f64 {
        match self {
            TransportMode::Truck => 0.062,
            TransportMode::Rail => 0.022,
            TransportMode::Ship => 0.015,
            TransportMode::Barge => 0.031,
            TransportMode::Pipeline => 0.002,
        }
    }

    /// Energy factor for this mode.
    /// unit: MJ per tonne-km
    pub fn energy_factor(&self) -> f64 {
        match self {
            TransportMode::Truck => 2.1,
            TransportMode::Rail => 0.6,
            TransportMode::Ship => 0.4,
            TransportMode::Barge => 0.8,
            TransportMode::Pipeline => 0.1,
        }
    }

    /// The snake_case key used in configuration files and scenario tables.
    pub fn key(&self) -> &'static str {
        match self {
            TransportMode::Truck => "truck",
            TransportMode::Rail => "rail",
            TransportMode::Ship => "ship",
            TransportMode::Barge => "barge",
            TransportMode::Pipeline => "pipeline",
        }
    }
}

impl FromStr for TransportMode {
    type Err = LcaError;

    fn from_str(s: &str) -> LcaResult<Self> {
        match s {
            "truck" => Ok(TransportMode::Truck),
            "rail" => Ok(TransportMode::Rail),
            "ship" => Ok(TransportMode::Ship),
            "barge" => Ok(TransportMode::Barge),
            "pipeline" => Ok(TransportMode::Pipeline),
            other => Err(LcaError::UnknownTransportMode(other.to_string())),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
