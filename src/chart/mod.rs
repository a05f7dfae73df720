//! Chart data model and the renderers that turn it into draw commands.
//!
//! A `Chart` is a plain mutable value. Callers compose slides by drawing one
//! element, changing fields (box, colors, format, opacity) and drawing the
//! next. Renderers take `&self` and only ever read the chart; `records` is
//! never touched after construction. A `Chart` is not meant to be mutated
//! while a renderer call is in progress on another thread.

mod accessories;
mod area_series;
mod axis;
mod column_series;
mod donut;
mod dotted;
mod horizontal_series;
mod line_series;
mod proportional_grid;
mod proportional_map;
mod radial;
mod scatter_series;
mod slope;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Record, ValueFormat, data_sum, map_range, value_bounds};

pub use accessories::NoteAlignment;
pub use dotted::{dotted_hline, dotted_vline};
pub use radial::spokes;

pub const DEFAULT_DATA_COLOR: &str = "rgb(128,128,128)";
pub const DEFAULT_LABEL_COLOR: &str = "rgb(75,75,75)";
pub const DEFAULT_VALUE_COLOR: &str = "rgb(128,0,0)";
pub const DOT_LINE_COLOR: &str = "lightgray";

/// Records plus the layout box and display settings used by every renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub records: Vec<Record>,
    pub title: String,
    pub format: ValueFormat,
    pub data_color: String,
    pub label_color: String,
    pub value_color: String,
    /// 0..100.
    pub opacity: f64,
    pub text_size: f64,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub min_value: f64,
    pub max_value: f64,
    /// Pins the value axis lower bound to zero instead of `min_value`.
    pub zero_based: bool,
}

impl Chart {
    /// Builds a chart with the default box (top 90, bottom 50, left 10,
    /// right 90) and value bounds taken from `records`.
    #[must_use]
    pub fn new(title: impl Into<String>, records: Vec<Record>) -> Self {
        let (min_value, max_value) = value_bounds(&records);
        Self {
            records,
            title: title.into(),
            format: ValueFormat::default(),
            data_color: DEFAULT_DATA_COLOR.to_owned(),
            label_color: DEFAULT_LABEL_COLOR.to_owned(),
            value_color: DEFAULT_VALUE_COLOR.to_owned(),
            opacity: 100.0,
            text_size: 1.2,
            top: 90.0,
            bottom: 50.0,
            left: 10.0,
            right: 90.0,
            min_value,
            max_value,
            zero_based: true,
        }
    }

    #[must_use]
    pub fn with_box(mut self, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        self.set_box(top, bottom, left, right);
        self
    }

    pub fn set_box(&mut self, top: f64, bottom: f64, left: f64, right: f64) {
        self.top = top;
        self.bottom = bottom;
        self.left = left;
        self.right = right;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Lower bound of the value domain: zero when `zero_based`, else `min_value`.
    #[must_use]
    pub fn effective_min(&self) -> f64 {
        if self.zero_based { 0.0 } else { self.min_value }
    }

    /// Horizontal position of record `index`, spreading `[0, n-1]` over the box.
    #[must_use]
    pub fn x_for_index(&self, index: usize) -> f64 {
        let last = self.records.len() as f64 - 1.0;
        map_range(index as f64, 0.0, last, self.left, self.right)
    }

    /// Vertical position of `value` inside the box.
    #[must_use]
    pub fn y_for_value(&self, value: f64) -> f64 {
        map_range(
            value,
            self.effective_min(),
            self.max_value,
            self.bottom,
            self.top,
        )
    }

    /// Horizontal extent of `value` for left-to-right bar charts.
    #[must_use]
    pub fn x_for_value(&self, value: f64) -> f64 {
        map_range(
            value,
            self.effective_min(),
            self.max_value,
            self.left,
            self.right,
        )
    }

    pub(crate) fn format_value(&self, value: f64) -> String {
        self.format.format(value)
    }

    /// Logs data that will map to non-finite coordinates.
    pub(crate) fn warn_if_degenerate(&self, renderer: &'static str) {
        if self.records.is_empty() {
            warn!(renderer, "chart has no records; nothing to draw");
        } else if self.max_value == self.effective_min() {
            warn!(
                renderer,
                max_value = self.max_value,
                "value domain is empty; coordinates will not be finite"
            );
        }
    }

    /// Like `warn_if_degenerate`, also flagging single-record index mapping.
    pub(crate) fn warn_if_degenerate_series(&self, renderer: &'static str) {
        self.warn_if_degenerate(renderer);
        if self.records.len() == 1 {
            warn!(
                renderer,
                "single record has no index domain; x coordinates will not be finite"
            );
        }
    }

    /// Logs a zero total for percentage-of-whole charts.
    pub(crate) fn warn_if_zero_sum(&self, renderer: &'static str) {
        if !self.records.is_empty() && data_sum(&self.records) == 0.0 {
            warn!(renderer, "values sum to zero; percentages will not be finite");
        }
    }
}
