use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Sentinel data color that switches proportional charts to the palette.
pub const STD_COLOR: &str = "std";

/// Seven-step blue palette used when the data color is `STD_COLOR`.
pub const BLUE7: [&str; 7] = [
    "rgb(8,69,148)",
    "rgb(33,113,181)",
    "rgb(66,146,198)",
    "rgb(107,174,214)",
    "rgb(158,202,225)",
    "rgb(198,219,239)",
    "rgb(239,243,255)",
];

/// Opacity of per-record colors in non-solid proportional charts.
pub const TINTED_OPACITY: f64 = 40.0;
pub const FULL_OPACITY: f64 = 100.0;

/// Picks `true_color` when `min <= value <= max`, `false_color` otherwise.
#[must_use]
pub fn conditional_color<'a>(
    value: f64,
    min: f64,
    max: f64,
    true_color: &'a str,
    false_color: &'a str,
) -> &'a str {
    if value >= min && value <= max {
        true_color
    } else {
        false_color
    }
}

/// Color and opacity for the `index`-th slice of a proportional chart.
///
/// - `base_color == "std"`: palette entry `index % 7` at full opacity.
/// - non-empty `record_color`: that color, full opacity when `solid`, else 40.
/// - otherwise `base_color` at `base_opacity`.
#[must_use]
pub fn std_color<'a>(
    index: usize,
    record_color: &'a str,
    base_color: &'a str,
    base_opacity: f64,
    solid: bool,
) -> (&'a str, f64) {
    if base_color == STD_COLOR {
        return (BLUE7[index % BLUE7.len()], FULL_OPACITY);
    }
    if !record_color.is_empty() {
        let opacity = if solid { FULL_OPACITY } else { TINTED_OPACITY };
        return (record_color, opacity);
    }
    (base_color, base_opacity)
}

/// Inclusive value window that recolors data points falling inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCondition {
    pub low: f64,
    pub high: f64,
    pub color: String,
}

impl ColorCondition {
    #[must_use]
    pub fn new(low: f64, high: f64, color: impl Into<String>) -> Self {
        Self {
            low,
            high,
            color: color.into(),
        }
    }

    /// Parses `low,high,color`, e.g. `0,10,red`.
    ///
    /// An empty (or blank) expression means no condition and yields `None`.
    pub fn parse(expression: &str) -> ChartResult<Option<Self>> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Ok(None);
        }

        let parts: SmallVec<[&str; 3]> = expression.split(',').collect();
        let [low, high, color] = parts.as_slice() else {
            return Err(ChartError::InvalidCondition(expression.to_owned()));
        };
        let low: f64 = low
            .trim()
            .parse()
            .map_err(|_| ChartError::InvalidCondition(expression.to_owned()))?;
        let high: f64 = high
            .trim()
            .parse()
            .map_err(|_| ChartError::InvalidCondition(expression.to_owned()))?;

        Ok(Some(Self::new(low, high, color.trim())))
    }

    #[must_use]
    pub fn color_for<'a>(&'a self, value: f64, fallback: &'a str) -> &'a str {
        conditional_color(value, self.low, self.high, &self.color, fallback)
    }
}
