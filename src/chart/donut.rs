use crate::chart::Chart;
use crate::core::{percentages, polar, std_color};
use crate::render::{DEFAULT_OPACITY, DrawSurface, Font};

/// Center used when the box's left edge is negative.
const FALLBACK_CENTER_X: f64 = 50.0;
/// Label distance from the center, as a fraction of the outer size.
const LABEL_RADIUS: f64 = 0.85;

impl Chart {
    /// Donut (or pie) chart of each record's share of the total.
    ///
    /// Slices start at 0 degrees and accumulate counter-clockwise in record
    /// order. The ring of outer size `size` is centered at
    /// `(left, top - size / 2)`; `stroke_width` is the ring thickness, so a
    /// stroke close to the radius draws a pie.
    pub fn donut<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        size: f64,
        stroke_width: f64,
        show_values: bool,
        solid: bool,
    ) {
        self.warn_if_zero_sum("donut");
        let cx = if self.left < 0.0 { FALLBACK_CENTER_X } else { self.left };
        let cy = self.top - size / 2.0;

        let mut start = 0.0;
        let shares = percentages(&self.records);
        for (i, (record, share)) in self.records.iter().zip(shares).enumerate() {
            let end = start + (share / 100.0) * 360.0;
            let mid: f64 = (start + end) / 2.0;

            let (color, opacity) = std_color(i, &record.note, &self.data_color, share, solid);
            surface.arc(cx, cy, size, size, stroke_width, start, end, color, opacity);
            if show_values {
                let (tx, ty) = polar(cx, cy, size * LABEL_RADIUS, mid.to_radians());
                let text = format!("{} {}%", record.label, self.format_value(share));
                surface.text_mid(tx, ty, &text, Font::Sans, self.text_size, "", DEFAULT_OPACITY);
            }
            start = end;
        }
    }
}
