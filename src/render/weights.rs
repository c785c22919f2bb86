//! Strategies mapping a tree depth to a blend weight
//!
//! Weights are nominally in `[0, 1]`, with 1 selecting the first color. The
//! renderer clamps whatever a strategy returns, so strategies may overshoot.

use crate::io::configuration::DEFAULT_SINE_PERIOD;
use crate::io::error::{Result, invalid_parameter};

/// Depth-to-weight mapping shared read-only across render workers
pub trait DepthWeight: Sync {
    /// Blend weight for a cell at `depth`
    fn weight(&self, depth: i64) -> f64;
}

impl<F> DepthWeight for F
where
    F: Fn(i64) -> f64 + Sync,
{
    fn weight(&self, depth: i64) -> f64 {
        self(depth)
    }
}

/// `1 - sin(depth / period)`: bands that brighten and fade as depth grows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineFalloff {
    period: f64,
}

impl SineFalloff {
    /// Create a sine falloff with the given depth divisor
    ///
    /// # Errors
    ///
    /// Returns `SkyError::InvalidParameter` if `period` is not finite and positive
    pub fn new(period: f64) -> Result<Self> {
        validate_scale("period", period)?;
        Ok(Self { period })
    }
}

impl Default for SineFalloff {
    fn default() -> Self {
        Self {
            period: DEFAULT_SINE_PERIOD,
        }
    }
}

impl DepthWeight for SineFalloff {
    fn weight(&self, depth: i64) -> f64 {
        1.0 - (depth as f64 / self.period).sin()
    }
}

/// `1 - depth / span`: a straight fade reaching 0 at `span`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFalloff {
    span: f64,
}

impl LinearFalloff {
    /// Create a linear falloff reaching zero weight at `span`
    ///
    /// # Errors
    ///
    /// Returns `SkyError::InvalidParameter` if `span` is not finite and positive
    pub fn new(span: f64) -> Result<Self> {
        validate_scale("span", span)?;
        Ok(Self { span })
    }
}

impl DepthWeight for LinearFalloff {
    fn weight(&self, depth: i64) -> f64 {
        1.0 - depth as f64 / self.span
    }
}

fn validate_scale(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be finite and positive",
        ))
    }
}
