//! deckchart: data-to-geometry chart engine.
//!
//! Label/value records are read from tabular text, mapped into a 0..100
//! canvas box and emitted as primitive draw calls (lines, circles,
//! rectangles, polygons, arcs, text) on a [`DrawSurface`]. The recording
//! [`RenderFrame`] keeps those calls in paint order for any backend.

pub mod api;
pub mod chart;
pub mod core;
pub mod error;
pub mod input;
pub mod render;
pub mod telemetry;

pub use api::{ChartKind, ChartSettings, ChartSpec};
pub use chart::Chart;
pub use crate::core::Record;
pub use error::{ChartError, ChartResult};
pub use render::{DrawSurface, RenderFrame, Renderer};
