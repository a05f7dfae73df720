use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Tick layout for a value axis: labels from `min` to `max` every `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64, step: f64) -> ChartResult<Self> {
        let range = Self { min, max, step };
        range.validate()?;
        Ok(range)
    }

    /// Parses `min,max,step`, e.g. `0,300,50`.
    pub fn parse(expression: &str) -> ChartResult<Self> {
        let bad = || ChartError::InvalidAxisRange(expression.to_owned());
        let parts: SmallVec<[f64; 3]> = expression
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| bad())?;
        let [min, max, step] = parts.as_slice() else {
            return Err(bad());
        };
        Self::new(*min, *max, *step).map_err(|_| bad())
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ChartError::InvalidData(
                "axis bounds must be finite".to_owned(),
            ));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis step must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Tick values from `min` up to and including `max`.
    ///
    /// Ticks are computed as `min + k * step` so long ranges do not drift.
    #[must_use]
    pub fn ticks(self) -> Vec<f64> {
        if self.validate().is_err() || self.max < self.min {
            return Vec::new();
        }
        let tolerance = self.step * 1e-9;
        let count = ((self.max - self.min + tolerance) / self.step).floor() as usize;
        (0..=count)
            .map(|k| self.min + k as f64 * self.step)
            .collect()
    }
}

/// Rounds `max` up at its own order of magnitude and splits it into `n` steps.
///
/// `nice_axis_range(0, 273, 5)` gives `0..300` every `60`. `min` passes
/// through unchanged.
pub fn nice_axis_range(min: f64, max: f64, n: usize) -> ChartResult<AxisRange> {
    if !max.is_finite() || max <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "cannot round axis maximum {max}: must be finite and > 0"
        )));
    }
    if n == 0 {
        return Err(ChartError::InvalidData(
            "axis tick count must be > 0".to_owned(),
        ));
    }

    let magnitude = 10f64.powf(max.log10().floor());
    let rounded_max = (max / magnitude).ceil() * magnitude;
    AxisRange::new(min, rounded_max, rounded_max / n as f64)
}
