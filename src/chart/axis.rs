use crate::chart::Chart;
use crate::core::AxisRange;
use crate::error::{ChartError, ChartResult};
use crate::render::{DEFAULT_OPACITY, DrawSurface, Font};

const GRIDLINE_WIDTH: f64 = 0.05;
const GRIDLINE_COLOR: &str = "gray";
const AXIS_LABEL_GAP: f64 = 2.0;

fn ensure_interval(every: usize) -> ChartResult<()> {
    if every == 0 {
        return Err(ChartError::InvalidData(
            "label interval must be > 0".to_owned(),
        ));
    }
    Ok(())
}

impl Chart {
    /// Value axis labels at every tick of `range`, optionally with a
    /// full-width gridline per tick. Ticks map through the same value domain
    /// as the data renderers sharing the box.
    pub fn y_axis<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        range: AxisRange,
        gridlines: bool,
    ) -> ChartResult<()> {
        range.validate()?;
        self.warn_if_degenerate("y_axis");
        for value in range.ticks() {
            let y = self.y_for_value(value);
            if gridlines {
                surface.line(
                    self.left,
                    y,
                    self.right,
                    y,
                    GRIDLINE_WIDTH,
                    GRIDLINE_COLOR,
                    DEFAULT_OPACITY,
                );
            }
            surface.text_end(
                self.left - AXIS_LABEL_GAP,
                y - self.text_size / 3.0,
                &self.format_value(value),
                Font::Sans,
                self.text_size,
                &self.label_color,
                self.opacity,
            );
        }
        Ok(())
    }

    /// X axis labels for every `every`-th record.
    pub fn x_label<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        every: usize,
    ) -> ChartResult<()> {
        ensure_interval(every)?;
        let y = self.bottom - self.text_size * 2.0;
        for (i, record) in self.records.iter().enumerate().step_by(every) {
            surface.text_mid(
                self.x_for_index(i),
                y,
                &record.label,
                Font::Sans,
                self.text_size,
                &self.label_color,
                self.opacity,
            );
        }
        Ok(())
    }

    /// X axis labels for all records, alternating between two rows: labels at
    /// multiples of `every` on the upper row, the rest one row lower.
    pub fn x_stagger_label<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        every: usize,
    ) -> ChartResult<()> {
        ensure_interval(every)?;
        for (i, record) in self.records.iter().enumerate() {
            let rows_down = if i % every == 0 { 2.0 } else { 4.0 };
            surface.text_mid(
                self.x_for_index(i),
                self.bottom - self.text_size * rows_down,
                &record.label,
                Font::Sans,
                self.text_size,
                &self.label_color,
                self.opacity,
            );
        }
        Ok(())
    }

    /// X axis labels for every `every`-th record, rotated by `angle_deg`.
    pub fn x_rotate_label<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        angle_deg: f64,
        every: usize,
    ) -> ChartResult<()> {
        ensure_interval(every)?;
        let y = self.bottom - self.text_size * 2.0;
        for (i, record) in self.records.iter().enumerate().step_by(every) {
            surface.text_rotate(
                self.x_for_index(i),
                y,
                &record.label,
                "",
                Font::Sans,
                angle_deg,
                self.text_size,
                &self.label_color,
                self.opacity,
            );
        }
        Ok(())
    }
}
