use crate::core::Record;

/// Arithmetic mean. Empty input yields NaN.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[must_use]
pub fn data_sum(records: &[Record]) -> f64 {
    records.iter().map(|record| record.value).sum()
}

/// Share of the total for each record, in percent.
///
/// A zero sum is not guarded and produces non-finite entries.
#[must_use]
pub fn percentages(records: &[Record]) -> Vec<f64> {
    let sum = data_sum(records);
    records
        .iter()
        .map(|record| (record.value / sum) * 100.0)
        .collect()
}

/// Ordinary least-squares fit of `y = m*x + b`, returned as `(m, b)`.
///
/// `x` and `y` are expected to have the same length; extra entries of the
/// longer slice are ignored.
#[must_use]
pub fn data_slope(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len().min(y.len());
    let (x, y) = (&x[..n], &y[..n]);

    let xy: Vec<f64> = x.iter().zip(y).map(|(a, b)| a * b).collect();
    let x_squared: Vec<f64> = x.iter().map(|a| a * a).collect();

    let mean_xy = mean(&xy);
    let mean_x = mean(x);
    let mean_y = mean(y);
    let mean_x_squared = mean(&x_squared);

    let rise = mean_xy - mean_x * mean_y;
    let run = mean_x_squared - mean_x * mean_x;
    let m = rise / run;
    (m, mean_y - m * mean_x)
}
