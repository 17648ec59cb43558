use thiserror::Error;

/// Error type for invalid model configuration or usage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LcaError {
    #[error("Unknown transport mode '{0}'. Available modes: truck, rail, ship, barge, pipeline")]
    UnknownTransportMode(String),
    #[error("Missing required data for LCA calculation: {stage} parameters have not been set")]
    MissingData { stage: &'static str },
    #[error("Invalid parameter {name}={value}: must be {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
    #[error("Failed to parse model configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type for `Result<T, LcaError>`.
pub type LcaResult<T> = Result<T, LcaError>;
