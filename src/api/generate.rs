use std::io::Read;
use std::mem;

use tracing::{debug, warn};

use crate::api::{ChartSettings, ChartSpec, ColumnOptions};
use crate::chart::Chart;
use crate::core::nice_axis_range;
use crate::error::{ChartError, ChartResult};
use crate::input::read_chart;
use crate::render::{DrawSurface, RenderFrame};

const TITLE_COLOR: &str = "black";
const TITLE_OFFSET: f64 = 5.0;
const FRAME_OPACITY: f64 = 10.0;
const AXIS_TICKS: usize = 5;

impl ChartSettings {
    /// Copies colors, box, text size and format onto `chart`.
    pub fn apply_to(&self, chart: &mut Chart) {
        chart.data_color.clone_from(&self.data_color);
        chart.label_color.clone_from(&self.label_color);
        chart.value_color.clone_from(&self.value_color);
        chart.format = self.format.clone();
        chart.text_size = self.text_size;
        chart.set_box(self.top, self.bottom, self.left, self.right);
    }

    /// Applies these settings to `chart` and draws the configured chart.
    pub fn generate<S: DrawSurface + ?Sized>(
        &self,
        chart: &mut Chart,
        surface: &mut S,
    ) -> ChartResult<()> {
        if chart.is_empty() {
            return Err(ChartError::EmptyData);
        }
        self.apply_to(chart);
        debug!(
            chart = self.spec.name(),
            records = chart.len(),
            "generating chart"
        );

        let condition = self.condition.as_ref();
        let spacing = self.line_spacing;
        match self.spec {
            ChartSpec::Column(options) => self.generate_column(chart, surface, &options)?,
            ChartSpec::HorizontalBar { bar_width } => match condition {
                Some(condition) => chart.conditional_hbar(surface, bar_width, spacing, condition),
                None => chart.hbar(surface, bar_width, spacing),
            },
            ChartSpec::HorizontalDot { dot_size } => chart.hdot(surface, dot_size, spacing)?,
            ChartSpec::WordBar(options) => {
                chart.wbar(surface, spacing, options.show_values, options.show_percentage);
            }
            ChartSpec::VerticalDot { dot_size } => chart.vdot(surface, dot_size)?,
            ChartSpec::Donut(options) => chart.donut(
                surface,
                options.size,
                options.stroke_width,
                options.show_values,
                options.solid,
            ),
            ChartSpec::ProportionalMap(options) => chart.pmap(
                surface,
                options.band_height,
                options.label_length,
                options.show_values,
                options.solid,
            ),
            ChartSpec::ProportionalGrid(options) => {
                chart.pgrid(surface, spacing, options.rows, options.cols, options.show_values);
            }
            ChartSpec::Radial(options) => chart.radial(
                surface,
                options.size,
                options.radius,
                options.show_spokes,
                options.show_values,
            ),
            ChartSpec::Slope { line_width } => chart.slope(surface, line_width)?,
        }
        Ok(())
    }

    /// Reads records with `self.input`, then generates into a fresh frame.
    pub fn generate_from_reader<R: Read>(&self, reader: R) -> ChartResult<RenderFrame> {
        let mut chart = read_chart(reader, &self.input)?;
        let mut frame = RenderFrame::new();
        self.generate(&mut chart, &mut frame)?;
        Ok(frame)
    }

    fn generate_column<S: DrawSurface + ?Sized>(
        &self,
        chart: &mut Chart,
        surface: &mut S,
        options: &ColumnOptions,
    ) -> ChartResult<()> {
        let condition = self.condition.as_ref();
        if options.bars {
            let bar_width = options
                .bar_width
                .unwrap_or_else(|| chart.width() / (chart.len() as f64 + 1.0));
            match condition {
                Some(condition) => chart.conditional_bar(surface, bar_width, condition),
                None => chart.bar(surface, bar_width),
            }
        }
        if options.scatter {
            match condition {
                Some(condition) => chart.conditional_scatter(surface, options.dot_size, condition),
                None => chart.scatter(surface, options.dot_size),
            }
        }
        if options.line {
            match condition {
                Some(condition) => chart.conditional_line(surface, options.line_width, condition),
                None => chart.line(surface, options.line_width),
            }
        }
        if options.area {
            let opacity = mem::replace(&mut chart.opacity, options.area_opacity);
            chart.area(surface);
            chart.opacity = opacity;
        }
        if options.title {
            let data_color = mem::replace(&mut chart.data_color, TITLE_COLOR.to_owned());
            chart.title(surface, TITLE_OFFSET);
            chart.data_color = data_color;
        }
        if options.frame {
            chart.frame(surface, FRAME_OPACITY);
        }
        if self.x_label_interval != 0 {
            chart.x_rotate_label(surface, self.x_label_rotation, self.x_label_interval)?;
        }
        if options.axis {
            let range = match self.axis_range {
                Some(range) => Some(range),
                None => match nice_axis_range(chart.effective_min(), chart.max_value, AXIS_TICKS) {
                    Ok(range) => Some(range),
                    Err(err) => {
                        warn!(max = chart.max_value, %err, "skipping y axis");
                        None
                    }
                },
            };
            if let Some(range) = range {
                chart.y_axis(surface, range, options.grid)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ChartKind, ChartSettings, ChartSpec, ColumnOptions};
    use crate::chart::Chart;
    use crate::core::Record;
    use crate::error::ChartError;
    use crate::render::RenderFrame;

    #[test]
    fn empty_records_are_rejected_before_drawing() {
        let settings = ChartSettings::for_kind(ChartKind::Bar, 0.0, 0.0, 0.0, 0.0);
        let mut chart = Chart::new("empty", Vec::new());
        let mut frame = RenderFrame::new();
        let err = settings.generate(&mut chart, &mut frame).expect_err("empty");
        assert!(matches!(err, ChartError::EmptyData));
        assert!(frame.is_empty());
    }

    #[test]
    fn generate_applies_box_and_colors() {
        let settings = ChartSettings::for_kind(ChartKind::Donut, 70.0, 20.0, 30.0, 80.0);
        let mut chart = Chart::new("", vec![Record::new("a", 1.0), Record::new("b", 3.0)]);
        let mut frame = RenderFrame::new();
        settings.generate(&mut chart, &mut frame).expect("donut");
        assert_eq!((chart.top, chart.bottom, chart.left, chart.right), (70.0, 20.0, 30.0, 80.0));
        assert_eq!(chart.data_color, "lightsteelblue");
        assert_eq!(frame.arcs().count(), 2);
    }

    fn axis_settings() -> ChartSettings {
        let options = ColumnOptions::default().with_axis(true, false);
        ChartSettings::for_kind(ChartKind::Bar, 0.0, 0.0, 0.0, 0.0)
            .with_spec(ChartSpec::Column(options))
            .with_x_labels(0, 0.0)
    }

    #[test]
    fn negative_series_draws_bars_without_automatic_axis() {
        let mut chart = Chart::new("", vec![Record::new("a", -3.0), Record::new("b", -1.0)]);
        let mut frame = RenderFrame::new();
        axis_settings().generate(&mut chart, &mut frame).expect("negative data");
        assert_eq!(frame.lines().count(), 2);
        assert_eq!(frame.texts().count(), 0);
    }

    #[test]
    fn all_zero_series_skips_automatic_axis() {
        let mut chart = Chart::new("", vec![Record::new("a", 0.0), Record::new("b", 0.0)]);
        let mut frame = RenderFrame::new();
        axis_settings().generate(&mut chart, &mut frame).expect("zero data");
        assert_eq!(frame.lines().count(), 2);
        assert_eq!(frame.texts().count(), 0);
    }
}
