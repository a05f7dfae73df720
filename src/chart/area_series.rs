use crate::chart::Chart;
use crate::render::DrawSurface;

impl Chart {
    /// Area chart as one filled polygon.
    ///
    /// The outline runs `(left, bottom)`, every mapped point, `(right, bottom)`,
    /// so the shape is closed against the baseline whatever the first and last
    /// values are.
    pub fn area<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        self.warn_if_degenerate_series("area");
        let n = self.records.len();
        let mut xs = Vec::with_capacity(n + 2);
        let mut ys = Vec::with_capacity(n + 2);

        xs.push(self.left);
        ys.push(self.bottom);
        for (i, record) in self.records.iter().enumerate() {
            xs.push(self.x_for_index(i));
            ys.push(self.y_for_value(record.value));
        }
        xs.push(self.right);
        ys.push(self.bottom);

        surface.polygon(&xs, &ys, &self.data_color, self.opacity);
    }
}
