//! Settings-driven chart generation.
//!
//! `ChartSettings` bundles layout, colors, formatting and a `ChartSpec`
//! describing which renderer family to run; `generate` applies it to a
//! `Chart` and draws onto any `DrawSurface`.

mod chart_kind;
mod chart_spec;
mod generate;
mod json_contract;
mod settings;

pub use chart_kind::ChartKind;
pub use chart_spec::{
    ChartSpec, ColumnOptions, DonutOptions, ProportionalGridOptions, ProportionalMapOptions,
    RadialOptions, WordBarOptions,
};
pub use json_contract::{
    CHART_SETTINGS_JSON_SCHEMA_V1, ChartSettingsJsonContractV1, RENDER_FRAME_JSON_SCHEMA_V1,
    RenderFrameJsonContractV1,
};
pub use settings::ChartSettings;
