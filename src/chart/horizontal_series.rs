use crate::chart::{Chart, dotted_hline};
use crate::core::{ColorCondition, data_sum};
use crate::error::ChartResult;
use crate::render::{DEFAULT_OPACITY, DrawSurface, Font};

/// Opacity of the bar drawn behind word-bar labels.
const WORD_BAR_OPACITY: f64 = 30.0;
/// Gap between label text and bar start in conditional horizontal bars.
const CONDITIONAL_LABEL_GAP: f64 = 2.0;

impl Chart {
    /// Horizontal bar chart, one row per record starting at `top` and moving
    /// down by `line_spacing`. Labels sit left of the box, values right of
    /// each bar.
    pub fn hbar<S: DrawSurface + ?Sized>(&self, surface: &mut S, size: f64, line_spacing: f64) {
        self.warn_if_degenerate("hbar");
        let text_size = self.text_size;
        let mut y = self.top;
        for record in &self.records {
            surface.text_end(
                self.left - text_size,
                y - size / 2.0,
                &record.label,
                Font::Sans,
                text_size,
                &self.label_color,
                DEFAULT_OPACITY,
            );
            let x2 = self.x_for_value(record.value);
            surface.line(self.left, y, x2, y, size, &self.data_color, self.opacity);
            surface.text(
                x2 + text_size / 2.0,
                y - size / 2.0,
                &self.format_value(record.value),
                Font::Mono,
                text_size * 0.75,
                &self.value_color,
                DEFAULT_OPACITY,
            );
            y -= line_spacing;
        }
    }

    /// Horizontal bar chart with conditional bar colors and no value labels.
    pub fn conditional_hbar<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        size: f64,
        line_spacing: f64,
        condition: &ColorCondition,
    ) {
        self.warn_if_degenerate("conditional_hbar");
        let mut y = self.top;
        for record in &self.records {
            surface.text_end(
                self.left - CONDITIONAL_LABEL_GAP,
                y - size / 2.0,
                &record.label,
                Font::Sans,
                self.text_size,
                &self.label_color,
                DEFAULT_OPACITY,
            );
            let x2 = self.x_for_value(record.value);
            let color = condition.color_for(record.value, &self.data_color);
            surface.line(self.left, y, x2, y, size, color, self.opacity);
            y -= line_spacing;
        }
    }

    /// Word bar chart: each label is written inside the box with a
    /// translucent bar behind it; values (optionally with their share of the
    /// total) are right-aligned against `left`.
    pub fn wbar<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        line_spacing: f64,
        show_values: bool,
        show_percentage: bool,
    ) {
        self.warn_if_degenerate("wbar");
        let text_size = self.text_size;
        let half = text_size / 2.0;
        let sum = if show_percentage {
            self.warn_if_zero_sum("wbar");
            data_sum(&self.records)
        } else {
            0.0
        };

        let mut y = self.top;
        for record in &self.records {
            surface.text(
                self.left + half,
                y,
                &record.label,
                Font::Sans,
                text_size,
                &self.label_color,
                DEFAULT_OPACITY,
            );
            let bar_end = self.x_for_value(record.value);
            surface.line(
                self.left + half,
                y + half,
                bar_end,
                y + half,
                text_size * 1.5,
                &self.data_color,
                WORD_BAR_OPACITY,
            );
            if show_values {
                let value = self.format_value(record.value);
                let (text, color) = if show_percentage {
                    let share = self.format_value(100.0 * (record.value / sum));
                    (format!("{value} ({share}%)"), &self.value_color)
                } else {
                    (value, &self.data_color)
                };
                surface.text_end(
                    self.left,
                    y + half / 2.0,
                    &text,
                    Font::Mono,
                    text_size,
                    color,
                    DEFAULT_OPACITY,
                );
            }
            y -= line_spacing;
        }
    }

    /// Horizontal dotted bars: dots of `size` spaced `4 * size` apart.
    pub fn hdot<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        size: f64,
        line_spacing: f64,
    ) -> ChartResult<()> {
        self.warn_if_degenerate("hdot");
        let text_size = self.text_size;
        let mut y = self.top;
        for record in &self.records {
            surface.text_end(
                self.left - text_size,
                y - size / 2.0,
                &record.label,
                Font::Sans,
                text_size,
                &self.label_color,
                DEFAULT_OPACITY,
            );
            let x2 = self.x_for_value(record.value);
            surface.text(
                x2 + text_size / 2.0,
                y - size / 2.0,
                &self.format_value(record.value),
                Font::Mono,
                text_size * 0.75,
                &self.value_color,
                DEFAULT_OPACITY,
            );
            dotted_hline(surface, self.left, y, x2, size, size * 4.0, &self.data_color)?;
            y -= line_spacing;
        }
        Ok(())
    }
}
