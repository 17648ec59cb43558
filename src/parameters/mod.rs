//! Per-stage parameter groups for the SAF production pathway.
//!
//! This module contains one parameter struct per life-cycle stage. Each
//! struct provides defaults matching the documented C12H26 reference
//! scenario and a `validate()` that rejects values which would divide the
//! downstream balance by zero.

mod carbon_capture;
mod conversion;
mod distribution;
mod electrolysis;
mod use_phase;

pub use carbon_capture::CarbonCaptureParams;
pub use conversion::{ConversionParams, CO_H2_RATIO_DEFAULT, SYNGAS_REQUIREMENT_DEFAULT};
pub use distribution::{DistributionParams, TONNES_PER_KG};
pub use electrolysis::ElectrolysisParams;
pub use use_phase::UsePhaseParams;
