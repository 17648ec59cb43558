//! Life-cycle assessment of sustainable aviation fuel produced via the
//! DAC → electrolysis → Fischer-Tropsch pathway.
//!
//! The crate computes a greenhouse-gas, energy and water inventory for each
//! of the pathway's five life-cycle stages (carbon capture, electrolysis,
//! conversion, distribution, use phase), normalised to one MJ of fuel
//! energy, and compares the result against the fossil jet fuel baseline and
//! the CORSIA / CA LCFS / EU RED II regulatory thresholds.
//!
//! # Module Organisation
//!
//! - `parameters`: per-stage parameter groups with documented defaults
//! - `engine`: the pure calculation over an immutable configuration snapshot
//! - `model`: the mutable parameter store and public entry points
//! - `benchmark`: fossil baseline comparison and policy compliance
//! - `sensitivity`: electricity-source and transport-mode scenario sweeps
//!
//! # Example
//!
//! ```
//! use saf_lca::engine::{calculate, ModelConfig};
//! use saf_lca::benchmark::{emission_reduction, FOSSIL_JET_BASELINE_G_PER_MJ};
//!
//! let inventory = calculate(&ModelConfig::default());
//! let reduction = emission_reduction(&inventory, FOSSIL_JET_BASELINE_G_PER_MJ);
//! assert!(reduction > 65.0);
//! ```

pub mod benchmark;
pub mod electricity;
pub mod engine;
pub mod errors;
pub mod inventory;
pub mod model;
pub mod parameters;
pub mod sensitivity;
pub mod transport;

pub use benchmark::{PolicyCompliance, FOSSIL_JET_BASELINE_G_PER_MJ};
pub use electricity::ElectricitySource;
pub use engine::{calculate, ModelConfig};
pub use errors::{LcaError, LcaResult};
pub use inventory::{Inventory, Stage, StageBreakdown};
pub use model::SafLcaModel;
pub use transport::TransportMode;
