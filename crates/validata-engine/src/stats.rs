//! Small statistics helpers shared by the numeric checks.

/// Linear-interpolation quantile over ascending `sorted` values.
///
/// Callers must pass at least one value; the numeric checks require two or
/// more before quantiles are meaningful.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = position - lower as f64;
    sorted[lower] + weight * (sorted[upper] - sorted[lower])
}

/// Mean and sample standard deviation (n − 1 denominator).
///
/// Callers must pass at least two values.
pub(crate) fn mean_and_sample_std(values: &[f64]) -> (f64, f64) {
    debug_assert!(values.len() >= 2);
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance.sqrt())
}
