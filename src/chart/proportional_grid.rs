use tracing::debug;

use crate::chart::Chart;
use crate::core::data_sum;
use crate::render::{DEFAULT_OPACITY, DrawSurface, Font};

/// The grid always holds exactly this many cells.
pub const GRID_CELLS: usize = 100;
const FALLBACK_LEFT: f64 = 30.0;

impl Chart {
    /// Whole-percent cell counts per record: `floor(value / sum * 100)`.
    ///
    /// Rounding down can leave the total under 100; the remainder is not
    /// redistributed.
    #[must_use]
    pub fn grid_shares(&self) -> Vec<f64> {
        let sum = data_sum(&self.records);
        self.records
            .iter()
            .map(|record| ((record.value / sum) * 100.0).floor())
            .collect()
    }

    /// Proportional grid: a `rows x cols` grid of dots (the product must be
    /// exactly 100, otherwise nothing is drawn) where each record fills as
    /// many cells, row-major, as its whole-percent share. Cell colors come
    /// from the record note; unfilled cells get the backend default color.
    /// A legend follows below the grid.
    pub fn pgrid<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        spacing: f64,
        rows: usize,
        cols: usize,
        show_values: bool,
    ) {
        if rows.checked_mul(cols) != Some(GRID_CELLS) {
            debug!(rows, cols, "proportional grid needs rows * cols == 100; skipping");
            return;
        }
        self.warn_if_zero_sum("pgrid");

        let text_size = self.text_size;
        let left = if self.left < 0.0 { FALLBACK_LEFT } else { self.left };
        let shares = self.grid_shares();

        let mut cells: Vec<&str> = Vec::with_capacity(GRID_CELLS);
        for (record, share) in self.records.iter().zip(&shares) {
            let count = if share.is_finite() { *share as usize } else { 0 };
            let room = GRID_CELLS - cells.len();
            cells.extend(std::iter::repeat_n(record.note.as_str(), count.min(room)));
        }
        cells.resize(GRID_CELLS, "");

        let mut y = self.top;
        for row in cells.chunks(cols) {
            let mut x = left;
            for color in row {
                surface.circle(x, y, text_size, color, DEFAULT_OPACITY);
                x += spacing;
            }
            y -= spacing;
        }

        let value_x = left + (cols as f64 - 1.0) * spacing + spacing / 2.0;
        for (record, share) in self.records.iter().zip(&shares) {
            y -= spacing * 1.2;
            surface.circle(left, y, text_size, &record.note, DEFAULT_OPACITY);
            let legend = format!("{} ({}%)", record.label, self.format_value(*share));
            surface.text(
                left + text_size,
                y - text_size / 2.0,
                &legend,
                Font::Sans,
                text_size,
                "",
                DEFAULT_OPACITY,
            );
            if show_values {
                surface.text_end(
                    value_x,
                    y - text_size / 2.0,
                    &self.format_value(record.value),
                    Font::Sans,
                    text_size,
                    &self.value_color,
                    DEFAULT_OPACITY,
                );
            }
        }
    }
}
