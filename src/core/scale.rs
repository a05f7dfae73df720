/// Maps `value` from the range `(low1, high1)` onto `(low2, high2)`.
///
/// This is the single affine mapping used by every positional renderer.
/// A degenerate source range (`low1 == high1`) is not trapped and yields a
/// non-finite result.
#[must_use]
pub fn map_range(value: f64, low1: f64, high1: f64, low2: f64, high2: f64) -> f64 {
    low2 + (high2 - low2) * (value - low1) / (high1 - low1)
}
