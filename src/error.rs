//! Error types for colorizers and breakpoint sampling.

use thiserror::Error;

/// Errors raised while building, querying or decoding colorizers.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot parse {0:?} as a color")]
    ColorParse(String),

    #[error("invalid color input: {0}")]
    InvalidColorInput(String),

    #[error("unknown colorizer type {0:?}")]
    UnknownColorizerType(String),

    #[error("logarithmic scale requires a positive minimum, got {min}")]
    NonPositiveLogDomain { min: f64 },

    #[error("index {index} out of range for {len} colors")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a color ramp needs at least two colors, got {len}")]
    InvalidRamp { len: usize },

    #[error("invalid number of steps {steps} (must be in {min}..={max})")]
    InvalidStepCount { steps: usize, min: usize, max: usize },

    #[error("empty domain: min {min} must be smaller than max {max}")]
    EmptyDomain { min: f64, max: f64 },

    #[error("no color ramp named {0:?}")]
    UnknownRamp(String),

    #[error("cannot apply a {kind} update to this colorizer")]
    IncompatibleUpdate { kind: &'static str },

    #[error("malformed colorizer dict: {0}")]
    Dict(#[from] serde_json::Error),

    #[error("invalid sampler config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for colorizer operations.
pub type Result<T> = std::result::Result<T, Error>;
