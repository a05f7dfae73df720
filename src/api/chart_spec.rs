use serde::{Deserialize, Serialize};

use crate::api::ChartKind;

const DEFAULT_LINE_WIDTH: f64 = 0.2;
const DEFAULT_DOT_SIZE: f64 = 1.0;
const DEFAULT_HBAR_WIDTH: f64 = 1.0;
const DEFAULT_HDOT_SIZE: f64 = 0.3;
const DEFAULT_AREA_OPACITY: f64 = 50.0;

fn default_line_width() -> f64 {
    DEFAULT_LINE_WIDTH
}

fn default_dot_size() -> f64 {
    DEFAULT_DOT_SIZE
}

fn default_hbar_width() -> f64 {
    DEFAULT_HBAR_WIDTH
}

fn default_hdot_size() -> f64 {
    DEFAULT_HDOT_SIZE
}

/// Sequential (column) chart: bars with optional scatter, line and area
/// overlays plus title, frame and axis decorations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOptions {
    pub bars: bool,
    /// `None` spreads the bars over the box: `(right - left) / (n + 1)`.
    pub bar_width: Option<f64>,
    pub line_width: f64,
    pub dot_size: f64,
    pub scatter: bool,
    pub line: bool,
    pub area: bool,
    pub area_opacity: f64,
    pub title: bool,
    pub frame: bool,
    pub axis: bool,
    pub grid: bool,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            bars: true,
            bar_width: None,
            line_width: DEFAULT_LINE_WIDTH,
            dot_size: DEFAULT_DOT_SIZE,
            scatter: false,
            line: false,
            area: false,
            area_opacity: DEFAULT_AREA_OPACITY,
            title: false,
            frame: false,
            axis: false,
            grid: false,
        }
    }
}

impl ColumnOptions {
    /// Turns the scatter, line and area overlays on or off. Bars are kept.
    #[must_use]
    pub fn with_overlays(mut self, scatter: bool, line: bool, area: bool) -> Self {
        self.scatter = scatter;
        self.line = line;
        self.area = area;
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: bool) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: bool, grid: bool) -> Self {
        self.axis = axis;
        self.grid = grid;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WordBarOptions {
    pub show_values: bool,
    pub show_percentage: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutOptions {
    pub size: f64,
    pub stroke_width: f64,
    pub show_values: bool,
    pub solid: bool,
}

impl Default for DonutOptions {
    fn default() -> Self {
        Self {
            size: 20.0,
            stroke_width: 2.0,
            show_values: true,
            solid: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProportionalMapOptions {
    pub band_height: f64,
    /// Labels at most this long stay inside their band.
    pub label_length: usize,
    pub show_values: bool,
    pub solid: bool,
}

impl Default for ProportionalMapOptions {
    fn default() -> Self {
        Self {
            band_height: 5.0,
            label_length: 60,
            show_values: true,
            solid: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProportionalGridOptions {
    pub rows: usize,
    pub cols: usize,
    pub show_values: bool,
}

impl Default for ProportionalGridOptions {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            show_values: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialOptions {
    pub size: f64,
    pub radius: f64,
    pub show_spokes: bool,
    pub show_values: bool,
}

impl Default for RadialOptions {
    fn default() -> Self {
        Self {
            size: 4.0,
            radius: 18.0,
            show_spokes: false,
            show_values: true,
        }
    }
}

/// What to draw, with the options specific to each chart family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartSpec {
    Column(ColumnOptions),
    HorizontalBar {
        #[serde(default = "default_hbar_width")]
        bar_width: f64,
    },
    HorizontalDot {
        #[serde(default = "default_hdot_size")]
        dot_size: f64,
    },
    WordBar(WordBarOptions),
    VerticalDot {
        #[serde(default = "default_dot_size")]
        dot_size: f64,
    },
    Donut(DonutOptions),
    ProportionalMap(ProportionalMapOptions),
    ProportionalGrid(ProportionalGridOptions),
    Radial(RadialOptions),
    Slope {
        #[serde(default = "default_line_width")]
        line_width: f64,
    },
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self::Column(ColumnOptions::default())
    }
}

impl ChartSpec {
    /// Default options for a named chart kind. `line`, `scatter` and `area`
    /// are column charts that draw the bars with their overlay on top.
    #[must_use]
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar => Self::Column(ColumnOptions::default()),
            ChartKind::Line => {
                Self::Column(ColumnOptions::default().with_overlays(false, true, false))
            }
            ChartKind::Scatter => {
                Self::Column(ColumnOptions::default().with_overlays(true, false, false))
            }
            ChartKind::Area => {
                Self::Column(ColumnOptions::default().with_overlays(false, false, true))
            }
            ChartKind::HorizontalBar => Self::HorizontalBar {
                bar_width: DEFAULT_HBAR_WIDTH,
            },
            ChartKind::HorizontalDot => Self::HorizontalDot {
                dot_size: DEFAULT_HDOT_SIZE,
            },
            ChartKind::WordBar => Self::WordBar(WordBarOptions::default()),
            ChartKind::VerticalDot => Self::VerticalDot {
                dot_size: DEFAULT_DOT_SIZE,
            },
            ChartKind::Donut => Self::Donut(DonutOptions::default()),
            ChartKind::ProportionalMap => Self::ProportionalMap(ProportionalMapOptions::default()),
            ChartKind::ProportionalGrid => {
                Self::ProportionalGrid(ProportionalGridOptions::default())
            }
            ChartKind::Radial => Self::Radial(RadialOptions::default()),
            ChartKind::Slope => Self::Slope {
                line_width: DEFAULT_LINE_WIDTH,
            },
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Column(_) => "column",
            Self::HorizontalBar { .. } => "horizontal_bar",
            Self::HorizontalDot { .. } => "horizontal_dot",
            Self::WordBar(_) => "word_bar",
            Self::VerticalDot { .. } => "vertical_dot",
            Self::Donut(_) => "donut",
            Self::ProportionalMap(_) => "proportional_map",
            Self::ProportionalGrid(_) => "proportional_grid",
            Self::Radial(_) => "radial",
            Self::Slope { .. } => "slope",
        }
    }
}
