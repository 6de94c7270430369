//! Sampling limits and defaults, loadable from JSON.

use serde::Deserialize;
use serde_json::Value;
use crate::error::{Error, Result};

/// Limits and defaults for [`RampSampler`](crate::RampSampler).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SamplerConfig {
    /// Number of steps used when none is given.
    pub default_steps: usize,
    pub max_steps: usize,
    /// Percentiles allowed between the domain minimum and maximum.
    pub max_percentiles: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            default_steps: 16,
            max_steps: 16,
            max_percentiles: 8,
        }
    }
}

impl SamplerConfig {
    /// Read a config from a JSON object; missing fields keep their
    /// defaults.  The result is [validated](SamplerConfig::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        if !value.is_object() {
            return Err(Error::InvalidConfig(format!("expected a JSON object, got {value}")))
        }
        let config = SamplerConfig::deserialize(&value)
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that `default_steps` is in `2 ..= max_steps`.
    pub fn validate(&self) -> Result<()> {
        if self.max_steps < 2 {
            return Err(Error::InvalidConfig(
                format!("maxSteps must be at least 2, got {}", self.max_steps)))
        }
        if !(2 ..= self.max_steps).contains(&self.default_steps) {
            return Err(Error::InvalidStepCount {
                steps: self.default_steps, min: 2, max: self.max_steps })
        }
        Ok(())
    }
}
