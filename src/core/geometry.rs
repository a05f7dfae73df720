use std::f64::consts::{FRAC_PI_2, TAU};

/// Angle of 12 o'clock on the canvas, in radians.
pub const TOP_CLOCK: f64 = FRAC_PI_2;

/// Full turn in radians.
pub const FULL_CIRCLE: f64 = TAU;

/// Converts polar coordinates around `(x, y)` to canvas coordinates.
///
/// `theta` is in radians, counter-clockwise from 3 o'clock (canvas y grows
/// upward).
#[must_use]
pub fn polar(x: f64, y: f64, radius: f64, theta: f64) -> (f64, f64) {
    (x + radius * theta.cos(), y + radius * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::{TOP_CLOCK, polar};
    use approx::assert_abs_diff_eq;

    #[test]
    fn polar_at_top_clock_points_up() {
        let (x, y) = polar(50.0, 50.0, 10.0, TOP_CLOCK);
        assert_abs_diff_eq!(x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn polar_zero_angle_points_right() {
        let (x, y) = polar(10.0, 20.0, 5.0, 0.0);
        assert_abs_diff_eq!(x, 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, 20.0, epsilon = 1e-9);
    }
}
