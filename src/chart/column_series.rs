use crate::chart::{Chart, dotted_vline};
use crate::core::ColorCondition;
use crate::error::ChartResult;
use crate::render::{DrawSurface, Font};

const STEM_DOT_SIZE: f64 = 0.25;
const STEM_DOT_STEP: f64 = 1.0;

impl Chart {
    /// Column bar chart: one vertical line per record from `bottom` to its value.
    pub fn bar<S: DrawSurface + ?Sized>(&self, surface: &mut S, size: f64) {
        self.warn_if_degenerate_series("bar");
        for (i, record) in self.records.iter().enumerate() {
            let x = self.x_for_index(i);
            let y = self.y_for_value(record.value);
            surface.line(x, self.bottom, x, y, size, &self.data_color, self.opacity);
        }
    }

    /// Column bar chart recoloring bars whose value falls inside `condition`.
    pub fn conditional_bar<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        size: f64,
        condition: &ColorCondition,
    ) {
        self.warn_if_degenerate_series("conditional_bar");
        for (i, record) in self.records.iter().enumerate() {
            let x = self.x_for_index(i);
            let y = self.y_for_value(record.value);
            let color = condition.color_for(record.value, &self.data_color);
            surface.line(x, self.bottom, x, y, size, color, self.opacity);
        }
    }

    /// Vertical dotted bars: a dotted stem topped by a circle of `size`.
    pub fn vdot<S: DrawSurface + ?Sized>(&self, surface: &mut S, size: f64) -> ChartResult<()> {
        self.warn_if_degenerate_series("vdot");
        for (i, record) in self.records.iter().enumerate() {
            let x = self.x_for_index(i);
            let y = self.y_for_value(record.value);
            dotted_vline(
                surface,
                x,
                self.bottom,
                y,
                STEM_DOT_SIZE,
                STEM_DOT_STEP,
                &self.data_color,
            )?;
            surface.circle(x, y, size, &self.data_color, self.opacity);
        }
        Ok(())
    }

    /// Formatted value labels `offset` units above each mapped point.
    pub fn values<S: DrawSurface + ?Sized>(&self, surface: &mut S, offset: f64) {
        for (i, record) in self.records.iter().enumerate() {
            let x = self.x_for_index(i);
            let y = self.y_for_value(record.value);
            surface.text_mid(
                x,
                y + offset,
                &self.format_value(record.value),
                Font::Mono,
                self.text_size,
                &self.value_color,
                self.opacity,
            );
        }
    }
}
