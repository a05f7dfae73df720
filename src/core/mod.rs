pub mod axis_range;
pub mod color;
pub mod format;
pub mod geometry;
pub mod scale;
pub mod stats;
pub mod types;

pub use axis_range::{AxisRange, nice_axis_range};
pub use color::{BLUE7, ColorCondition, STD_COLOR, conditional_color, std_color};
pub use format::ValueFormat;
pub use geometry::{FULL_CIRCLE, TOP_CLOCK, polar};
pub use scale::map_range;
pub use stats::{data_slope, data_sum, mean, percentages};
pub use types::{Record, value_bounds};
