//! Electricity sources powering the electrolysis stage.
//!
//! Each source maps to a life-cycle carbon intensity (kg CO2e/kWh). The
//! electrolysis stage is typically the dominant emissions contributor, so the
//! choice of source moves the total inventory by more than an order of
//! magnitude (wind at 0.011 vs coal at 0.820 kg CO2e/kWh).
//!
//! Unrecognised source keys degrade to [`ElectricitySource::Renewable`] with
//! a warning instead of failing; the distribution-stage transport modes are
//! the strict counterpart of this lenient lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source of electricity for CO2 and water electrolysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectricitySource {
    /// Global average grid electricity.
    GridGlobal,
    /// European Union average grid.
    GridEu,
    /// China average grid.
    GridChina,
    /// US average grid.
    GridUs,
    /// Natural gas combined cycle.
    NaturalGas,
    /// Coal power plants.
    Coal,
    /// Solar PV.
    Solar,
    /// Wind power.
    Wind,
    /// Hydroelectric.
    Hydro,
    /// Nuclear power.
    Nuclear,
    /// Biomass power.
    Biomass,
    /// Mix of solar, wind and hydro.
    RenewableMix,
    /// Mix of renewables and nuclear.
    LowCarbonMix,
    /// Generic renewable. Fallback when a source key is not recognised.
    Renewable,
}

impl ElectricitySource {
    /// Default source list for the electricity sensitivity sweep.
    pub const DEFAULT_SWEEP: [ElectricitySource; 11] = [
        ElectricitySource::RenewableMix,
        ElectricitySource::GridGlobal,
        ElectricitySource::GridEu,
        ElectricitySource::GridUs,
        ElectricitySource::GridChina,
        ElectricitySource::NaturalGas,
        ElectricitySource::Coal,
        ElectricitySource::Solar,
        ElectricitySource::Wind,
        ElectricitySource::Hydro,
        ElectricitySource::Renewable,
    ];

    /// Life-cycle carbon intensity of this source.
    /// unit: kg CO2e per kWh
    pub fn carbon_intensity(&self) -> f64 {
        match self {
            ElectricitySource::GridGlobal => 0.475,
            ElectricitySource::GridEu => 0.253,
            ElectricitySource::GridChina => 0.638,
            ElectricitySource::GridUs => 0.389,
            ElectricitySource::NaturalGas => 0.410,
            ElectricitySource::Coal => 0.820,
            ElectricitySource::Solar => 0.048,
            ElectricitySource::Wind => 0.011,
            ElectricitySource::Hydro => 0.024,
            ElectricitySource::Nuclear => 0.012,
            ElectricitySource::Biomass => 0.230,
            ElectricitySource::RenewableMix => 0.030,
            ElectricitySource::LowCarbonMix => 0.100,
            ElectricitySource::Renewable => 0.020,
        }
    }

    /// Resolve a source key leniently.
    ///
    /// Unknown keys fall back to the generic renewable default and log a
    /// warning; this mirrors the behaviour callers rely on when feeding
    /// user-supplied scenario names through the electrolysis setter.
    pub fn resolve(key: &str) -> ElectricitySource {
        match key.parse() {
            Ok(source) => source,
            Err(_) => {
                log::warn!(
                    "Electricity source '{}' not recognised; using generic renewable default",
                    key
                );
                ElectricitySource::Renewable
            }
        }
    }

    /// The snake_case key used in configuration files and scenario tables.
    pub fn key(&self) -> &'static str {
        match self {
            ElectricitySource::GridGlobal => "grid_global",
            ElectricitySource::GridEu => "grid_eu",
            ElectricitySource::GridChina => "grid_china",
            ElectricitySource::GridUs => "grid_us",
            ElectricitySource::NaturalGas => "natural_gas",
            ElectricitySource::Coal => "coal",
            ElectricitySource::Solar => "solar",
            ElectricitySource::Wind => "wind",
            ElectricitySource::Hydro => "hydro",
            ElectricitySource::Nuclear => "nuclear",
            ElectricitySource::Biomass => "biomass",
            ElectricitySource::RenewableMix => "renewable_mix",
            ElectricitySource::LowCarbonMix => "low_carbon_mix",
            ElectricitySource::Renewable => "renewable",
        }
    }
}

/// Parse error carrying the offending key; most callers want the lenient
/// [`ElectricitySource::resolve`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownElectricitySource(pub String);

impl fmt::Display for UnknownElectricitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown electricity source '{}'", self.0)
    }
}

impl std::error::Error for UnknownElectricitySource {}

impl FromStr for ElectricitySource {
    type Err = UnknownElectricitySource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let source = match s {
            "grid_global" => ElectricitySource::GridGlobal,
            "grid_eu" => ElectricitySource::GridEu,
            "grid_china" => ElectricitySource::GridChina,
            "grid_us" => ElectricitySource::GridUs,
            "natural_gas" => ElectricitySource::NaturalGas,
            "coal" => ElectricitySource::Coal,
            "solar" => ElectricitySource::Solar,
            "wind" => ElectricitySource::Wind,
            "hydro" => ElectricitySource::Hydro,
            "nuclear" => ElectricitySource::Nuclear,
            "biomass" => ElectricitySource::Biomass,
            "renewable_mix" => ElectricitySource::RenewableMix,
            "low_carbon_mix" => ElectricitySource::LowCarbonMix,
            "renewable" => ElectricitySource::Renewable,
            other => return Err(UnknownElectricitySource(other.to_string())),
        };
        Ok(source)
    }
}

impl fmt::Display for ElectricitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_is_cleanest_coal_is_dirtiest() {
        let wind = ElectricitySource::Wind.carbon_intensity();
        let coal = ElectricitySource::Coal.carbon_intensity();

        for source in ElectricitySource::DEFAULT_SWEEP {
            let intensity = source.carbon_intensity();
            assert!(intensity >= wind, "{} below wind intensity", source);
            assert!(intensity <= coal, "{} above coal intensity", source);
        }
    }

    #[test]
    fn test_resolve_known_source() {
        assert_eq!(
            ElectricitySource::resolve("grid_china"),
            ElectricitySource::GridChina
        );
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_renewable() {
        let source = ElectricitySource::resolve("fusion");
        assert_eq!(source, ElectricitySource::Renewable);
        assert!((source.carbon_intensity() - 0.020).abs() < 1e-12);
    }

    #[test]
    fn test_parse_round_trip() {
        for source in ElectricitySource::DEFAULT_SWEEP {
            let parsed: ElectricitySource = source.key().parse().unwrap();
            assert_eq!(parsed, source);
        }
    }

    #[test]
    fn test_default_sweep_has_eleven_sources() {
        assert_eq!(ElectricitySource::DEFAULT_SWEEP.len(), 11);
    }
}
