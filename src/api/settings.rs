use serde::{Deserialize, Serialize};

use crate::api::{ChartKind, ChartSpec};
use crate::chart::{DEFAULT_LABEL_COLOR, DEFAULT_VALUE_COLOR};
use crate::core::{AxisRange, ColorCondition, ValueFormat};
use crate::input::InputFormat;

const FALLBACK_TOP: f64 = 90.0;
const FALLBACK_BOTTOM: f64 = 30.0;
const FALLBACK_LEFT: f64 = 10.0;
const FALLBACK_RIGHT: f64 = 90.0;
const DEFAULT_TEXT_SIZE: f64 = 1.5;
const DEFAULT_LINE_SPACING: f64 = 2.4;
const DEFAULT_DATA_COLOR: &str = "lightsteelblue";
const DEFAULT_BACKGROUND_COLOR: &str = "white";

fn default_x_label_interval() -> usize {
    1
}

fn default_text_size() -> f64 {
    DEFAULT_TEXT_SIZE
}

fn default_line_spacing() -> f64 {
    DEFAULT_LINE_SPACING
}

fn default_data_color() -> String {
    DEFAULT_DATA_COLOR.to_owned()
}

fn default_label_color() -> String {
    DEFAULT_LABEL_COLOR.to_owned()
}

fn default_value_color() -> String {
    DEFAULT_VALUE_COLOR.to_owned()
}

fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_owned()
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 { value } else { fallback }
}

/// Everything needed to turn a data source into one chart.
///
/// Serializable so a whole chart setup can live in a JSON settings file;
/// fields missing from the file take the same defaults as
/// [`ChartSettings::for_kind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default)]
    pub spec: ChartSpec,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    #[serde(default = "default_text_size")]
    pub text_size: f64,
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f64,
    #[serde(default = "default_data_color")]
    pub data_color: String,
    #[serde(default = "default_label_color")]
    pub label_color: String,
    #[serde(default = "default_value_color")]
    pub value_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default)]
    pub condition: Option<ColorCondition>,
    #[serde(default)]
    pub format: ValueFormat,
    /// Explicit y axis; `None` derives one from the data.
    #[serde(default)]
    pub axis_range: Option<AxisRange>,
    /// 0 disables x axis labels.
    #[serde(default = "default_x_label_interval")]
    pub x_label_interval: usize,
    #[serde(default)]
    pub x_label_rotation: f64,
    #[serde(default)]
    pub input: InputFormat,
}

impl ChartSettings {
    /// Settings for a named chart kind. Non-positive box edges fall back to
    /// top 90, bottom 30, left 10, right 90.
    #[must_use]
    pub fn for_kind(kind: ChartKind, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            spec: ChartSpec::for_kind(kind),
            top: positive_or(top, FALLBACK_TOP),
            bottom: positive_or(bottom, FALLBACK_BOTTOM),
            left: positive_or(left, FALLBACK_LEFT),
            right: positive_or(right, FALLBACK_RIGHT),
            text_size: DEFAULT_TEXT_SIZE,
            line_spacing: DEFAULT_LINE_SPACING,
            data_color: default_data_color(),
            label_color: default_label_color(),
            value_color: default_value_color(),
            background_color: default_background_color(),
            condition: None,
            format: ValueFormat::default(),
            axis_range: None,
            x_label_interval: default_x_label_interval(),
            x_label_rotation: 0.0,
            input: InputFormat::default(),
        }
    }

    #[must_use]
    pub fn with_spec(mut self, spec: ChartSpec) -> Self {
        self.spec = spec;
        self
    }

    #[must_use]
    pub fn with_box(mut self, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        self.top = top;
        self.bottom = bottom;
        self.left = left;
        self.right = right;
        self
    }

    #[must_use]
    pub fn with_colors(
        mut self,
        data_color: impl Into<String>,
        label_color: impl Into<String>,
        value_color: impl Into<String>,
    ) -> Self {
        self.data_color = data_color.into();
        self.label_color = label_color.into();
        self.value_color = value_color.into();
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Option<ColorCondition>) -> Self {
        self.condition = condition;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_axis_range(mut self, range: AxisRange) -> Self {
        self.axis_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_x_labels(mut self, interval: usize, rotation_deg: f64) -> Self {
        self.x_label_interval = interval;
        self.x_label_rotation = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_text_size(mut self, text_size: f64) -> Self {
        self.text_size = text_size;
        self
    }

    #[must_use]
    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    #[must_use]
    pub fn with_input(mut self, input: InputFormat) -> Self {
        self.input = input;
        self
    }
}
