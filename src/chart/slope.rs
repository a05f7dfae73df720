use tracing::warn;

use crate::chart::Chart;
use crate::core::map_range;
use crate::error::{ChartError, ChartResult};
use crate::render::{DEFAULT_OPACITY, DrawSurface, Font};

/// Horizontal gap between slope panels, as a fraction of the box width.
const PANEL_SKIP_RATIO: f64 = 0.60;
/// Vertical gap between panel rows, as a fraction of the box height.
const ROW_SKIP_RATIO: f64 = 0.40;
const CANVAS_RIGHT: f64 = 100.0;
const AXIS_COLOR: &str = "black";

impl Chart {
    /// Slope chart over consecutive record pairs `(2k, 2k + 1)`.
    ///
    /// Each pair gets a panel the size of the box: two vertical axes at
    /// `left`/`right` joined by a segment between the mapped values. Panels
    /// advance right by `1.6 * width` and wrap to a new row `1.4 * height`
    /// lower once they pass the canvas edge. A trailing unpaired record is
    /// ignored. The first record of a pair with a non-empty label carries
    /// the panel heading in its note.
    ///
    /// Fewer than two records is an error and draws nothing.
    pub fn slope<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        line_width: f64,
    ) -> ChartResult<()> {
        if self.records.len() < 2 {
            warn!(records = self.records.len(), "slope charts need at least two records");
            return Err(ChartError::InsufficientData {
                chart: "slope",
                required: 2,
                actual: self.records.len(),
            });
        }
        self.warn_if_degenerate("slope");

        let text_size = self.text_size;
        let axis_width = line_width / 2.0;
        let value_size = text_size * 0.75;
        let heading_size = text_size * 1.5;
        let (width, height) = (self.width(), self.height());
        let panel_skip = width * PANEL_SKIP_RATIO;
        let row_skip = height * (1.0 + ROW_SKIP_RATIO);
        let y_min = self.effective_min();

        let (mut top, mut bottom) = (self.top, self.bottom);
        let (mut x1, mut x2) = (self.left, self.right);
        for pair in self.records.chunks_exact(2) {
            let (first, second) = (&pair[0], &pair[1]);
            if !first.label.is_empty() {
                surface.text_mid(
                    x1 + width / 2.0,
                    top + text_size / 2.0,
                    &first.note,
                    Font::Sans,
                    heading_size,
                    &self.label_color,
                    DEFAULT_OPACITY,
                );
            }

            let y1 = map_range(first.value, y_min, self.max_value, bottom, top);
            let y2 = map_range(second.value, y_min, self.max_value, bottom, top);
            surface.line(x1, bottom, x1, top, axis_width, AXIS_COLOR, DEFAULT_OPACITY);
            surface.line(x2, bottom, x2, top, axis_width, AXIS_COLOR, DEFAULT_OPACITY);
            surface.circle(x1, y1, text_size, &self.data_color, DEFAULT_OPACITY);
            surface.circle(x2, y2, text_size, &self.data_color, DEFAULT_OPACITY);
            surface.line(x1, y1, x2, y2, line_width, &self.data_color, DEFAULT_OPACITY);
            for (x, label) in [(x1, &first.label), (x2, &second.label)] {
                surface.text_mid(
                    x,
                    bottom - 2.0,
                    label,
                    Font::Sans,
                    text_size,
                    &self.label_color,
                    DEFAULT_OPACITY,
                );
            }

            if self.zero_based {
                surface.text_end(
                    x1 - 1.0,
                    top,
                    &self.format_value(self.max_value),
                    Font::Sans,
                    value_size,
                    &self.label_color,
                    DEFAULT_OPACITY,
                );
            }
            surface.text_end(
                x1 - 1.0,
                y1,
                &self.format_value(first.value),
                Font::Sans,
                value_size,
                &self.label_color,
                DEFAULT_OPACITY,
            );
            surface.text(
                x2 + 1.0,
                y2,
                &self.format_value(second.value),
                Font::Sans,
                value_size,
                &self.label_color,
                DEFAULT_OPACITY,
            );

            x1 += width + panel_skip;
            x2 += width + panel_skip;
            if x2 > CANVAS_RIGHT {
                x1 = self.left;
                x2 = self.right;
                top -= row_skip;
                bottom -= row_skip;
            }
        }
        Ok(())
    }
}
