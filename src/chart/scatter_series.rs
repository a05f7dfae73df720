use crate::chart::Chart;
use crate::core::ColorCondition;
use crate::render::DrawSurface;

impl Chart {
    /// Scatter chart: one circle of `size` per record.
    pub fn scatter<S: DrawSurface + ?Sized>(&self, surface: &mut S, size: f64) {
        self.warn_if_degenerate_series("scatter");
        for (i, record) in self.records.iter().enumerate() {
            let x = self.x_for_index(i);
            let y = self.y_for_value(record.value);
            surface.circle(x, y, size, &self.data_color, self.opacity);
        }
    }

    pub fn conditional_scatter<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        size: f64,
        condition: &ColorCondition,
    ) {
        self.warn_if_degenerate_series("conditional_scatter");
        for (i, record) in self.records.iter().enumerate() {
            let x = self.x_for_index(i);
            let y = self.y_for_value(record.value);
            let color = condition.color_for(record.value, &self.data_color);
            surface.circle(x, y, size, color, self.opacity);
        }
    }
}
