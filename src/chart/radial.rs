use crate::chart::Chart;
use crate::core::{FULL_CIRCLE, TOP_CLOCK, map_range, polar};
use crate::render::{DEFAULT_OPACITY, DrawSurface, Font};

const FALLBACK_CENTER_X: f64 = 50.0;
const MARKER_OPACITY: f64 = 50.0;
const MIN_MARKER_SIZE: f64 = 2.0;
const SPOKE_WIDTH: f64 = 0.05;
const SPOKE_DOT_SIZE: f64 = 0.5;

impl Chart {
    /// Radial chart: one spoke per record around `(left, top)`, starting at
    /// 12 o'clock and stepping clockwise by `360 / n` degrees.
    ///
    /// The angle depends only on the record index. The value scales a marker
    /// (`2..=size`) at distance `radius`, or with `show_spokes` sets how many
    /// spokes fan out of that point.
    pub fn radial<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        size: f64,
        radius: f64,
        show_spokes: bool,
        show_values: bool,
    ) {
        self.warn_if_degenerate("radial");
        let text_size = self.text_size;
        let cx = if self.left < 0.0 { FALLBACK_CENTER_X } else { self.left };
        let cy = self.top;

        surface.circle(cx, cy, radius * 2.0, "silver", 10.0);
        let step = FULL_CIRCLE / self.records.len() as f64;
        let mut theta = TOP_CLOCK;
        for record in &self.records {
            let marker = map_range(record.value, 0.0, self.max_value, MIN_MARKER_SIZE, size);
            let (px, py) = polar(cx, cy, radius, theta);
            let (tx, ty) = polar(cx, cy, radius + size / 2.0 + text_size * 2.0, theta);
            let color = if record.note.is_empty() {
                self.data_color.as_str()
            } else {
                record.note.as_str()
            };

            surface.text_mid(
                tx,
                ty,
                &record.label,
                Font::Sans,
                text_size / 2.0,
                "black",
                DEFAULT_OPACITY,
            );
            if show_values {
                surface.text_mid(
                    px,
                    py - text_size / 3.0,
                    &self.format_value(record.value),
                    Font::Mono,
                    text_size,
                    &self.label_color,
                    DEFAULT_OPACITY,
                );
            }
            if show_spokes {
                spokes(surface, px, py, size / 2.0, SPOKE_WIDTH, record.value as usize, color);
            } else {
                surface.circle(px, py, marker, color, MARKER_OPACITY);
                surface.line(tx, ty, px, py, SPOKE_WIDTH, "gray", MARKER_OPACITY);
            }
            theta -= step;
        }
    }
}

/// Draws `count` spokes of length `radius` from `(cx, cy)`, clockwise from
/// 12 o'clock, each ending in a small dot of `color`.
pub fn spokes<S: DrawSurface + ?Sized>(
    surface: &mut S,
    cx: f64,
    cy: f64,
    radius: f64,
    spoke_width: f64,
    count: usize,
    color: &str,
) {
    let step = FULL_CIRCLE / count as f64;
    let mut theta = TOP_CLOCK;
    for _ in 0..count {
        let (px, py) = polar(cx, cy, radius, theta);
        surface.line(cx, cy, px, py, spoke_width, "lightgray", DEFAULT_OPACITY);
        surface.circle(px, py, SPOKE_DOT_SIZE, color, DEFAULT_OPACITY);
        theta -= step;
    }
}
