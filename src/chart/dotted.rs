use crate::error::{ChartError, ChartResult};
use crate::render::{DEFAULT_OPACITY, DrawSurface};

fn ensure_step(step: f64) -> ChartResult<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ChartError::InvalidData(
            "dotted line step must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// Vertical line of dots at `x` between `y1` and `y2`, walking upward from
/// the lower end every `step` units.
pub fn dotted_vline<S: DrawSurface + ?Sized>(
    surface: &mut S,
    x: f64,
    y1: f64,
    y2: f64,
    dot_size: f64,
    step: f64,
    color: &str,
) -> ChartResult<()> {
    ensure_step(step)?;
    let (low, high) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
    if !low.is_finite() || !high.is_finite() {
        return Ok(());
    }
    let mut y = low;
    while y <= high {
        surface.circle(x, y, dot_size, color, DEFAULT_OPACITY);
        y += step;
    }
    Ok(())
}

/// Horizontal line of dots at `y` from `x1` toward `x2` (exclusive), every
/// `step` units.
pub fn dotted_hline<S: DrawSurface + ?Sized>(
    surface: &mut S,
    x1: f64,
    y: f64,
    x2: f64,
    dot_size: f64,
    step: f64,
    color: &str,
) -> ChartResult<()> {
    ensure_step(step)?;
    if !x1.is_finite() || !x2.is_finite() {
        return Ok(());
    }
    let mut x = x1;
    while x < x2 {
        surface.circle(x, y, dot_size, color, DEFAULT_OPACITY);
        x += step;
    }
    Ok(())
}
