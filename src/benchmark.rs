//! Benchmark comparison against fossil jet fuel and regulatory thresholds.

use crate::inventory::Inventory;
use serde::{Deserialize, Serialize};

/// Life-cycle GHG intensity of conventional fossil jet fuel (EU RED II).
/// unit: g CO2e per MJ
pub const FOSSIL_JET_BASELINE_G_PER_MJ: f64 = 89.0;

/// CORSIA minimum emission reduction.
/// unit: %
pub const CORSIA_MIN_REDUCTION_PCT: f64 = 10.0;

/// California LCFS minimum emission reduction.
/// unit: %
pub const CA_LCFS_MIN_REDUCTION_PCT: f64 = 20.0;

/// EU RED II minimum emission reduction.
/// unit: %
pub const EU_RED_II_MIN_REDUCTION_PCT: f64 = 65.0;

/// Emission reduction relative to a fossil baseline.
///
/// $$\text{reduction} = \frac{E_{fossil} - E_{SAF}}{E_{fossil}} \times 100$$
///
/// Negative when the SAF pathway emits more than the baseline (e.g. coal
/// powered electrolysis). Pure function of the inventory: repeated calls
/// yield identical output.
pub fn emission_reduction(inventory: &Inventory, fossil_baseline_g_per_mj: f64) -> f64 {
    let saf_g = inventory.ghg_total_g_per_mj();
    (fossil_baseline_g_per_mj - saf_g) / fossil_baseline_g_per_mj * 100.0
}

/// Compliance flags for the three regulatory frameworks.
///
/// The three thresholds are evaluated independently; a pathway can satisfy
/// CORSIA and LCFS while missing RED II.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyCompliance {
    /// Emission reduction >= 10 %.
    pub corsia: bool,
    /// Emission reduction >= 20 %.
    pub ca_lcfs: bool,
    /// Emission reduction >= 65 %.
    pub eu_red_ii: bool,
}

impl PolicyCompliance {
    /// Evaluate all three thresholds for a given reduction percentage.
    pub fn evaluate(reduction_pct: f64) -> PolicyCompliance {
        PolicyCompliance {
            corsia: reduction_pct >= CORSIA_MIN_REDUCTION_PCT,
            ca_lcfs: reduction_pct >= CA_LCFS_MIN_REDUCTION_PCT,
            eu_red_ii: reduction_pct >= EU_RED_II_MIN_REDUCTION_PCT,
        }
    }
}
