use crate::chart::Chart;
use crate::core::{ColorCondition, data_slope};
use crate::render::DrawSurface;

impl Chart {
    /// Line chart: one segment per adjacent pair of records.
    pub fn line<S: DrawSurface + ?Sized>(&self, surface: &mut S, size: f64) {
        self.warn_if_degenerate_series("line");
        for (i, pair) in self.records.windows(2).enumerate() {
            let (x1, y1) = (self.x_for_index(i), self.y_for_value(pair[0].value));
            let (x2, y2) = (self.x_for_index(i + 1), self.y_for_value(pair[1].value));
            surface.line(x1, y1, x2, y2, size, &self.data_color, self.opacity);
        }
    }

    /// Line chart whose segments take the condition color when their starting
    /// value falls inside `condition`.
    pub fn conditional_line<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        size: f64,
        condition: &ColorCondition,
    ) {
        self.warn_if_degenerate_series("conditional_line");
        for (i, pair) in self.records.windows(2).enumerate() {
            let (x1, y1) = (self.x_for_index(i), self.y_for_value(pair[0].value));
            let (x2, y2) = (self.x_for_index(i + 1), self.y_for_value(pair[1].value));
            let color = condition.color_for(pair[0].value, &self.data_color);
            surface.line(x1, y1, x2, y2, size, color, self.opacity);
        }
    }

    /// Least-squares fit of `(index, value)`, drawn from the first to the
    /// last index.
    pub fn regression_line<S: DrawSurface + ?Sized>(&self, surface: &mut S, size: f64) {
        self.warn_if_degenerate_series("regression_line");
        if self.records.is_empty() {
            return;
        }
        let (m, b) = self.regression();
        let last = self.records.len() - 1;
        let (x1, x2) = (0.0, last as f64);
        surface.line(
            self.x_for_index(0),
            self.y_for_value(m * x1 + b),
            self.x_for_index(last),
            self.y_for_value(m * x2 + b),
            size,
            &self.data_color,
            self.opacity,
        );
    }

    /// Slope and intercept of the least-squares fit over `(index, value)`.
    #[must_use]
    pub fn regression(&self) -> (f64, f64) {
        let x: Vec<f64> = (0..self.records.len()).map(|i| i as f64).collect();
        let y: Vec<f64> = self.records.iter().map(|record| record.value).collect();
        data_slope(&x, &y)
    }
}
