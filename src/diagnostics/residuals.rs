//! Standardized residuals and outlier flags.

use faer::Col;

/// Sample standard deviation of residuals, `sqrt(Σ(rᵢ - r̄)² / (n - 1))`.
pub fn residual_std_dev(residuals: &Col<f64>) -> f64 {
    let n = residuals.nrows();
    let mean = residuals.iter().sum::<f64>() / n as f64;
    let ss: f64 = residuals.iter().map(|&r| (r - mean).powi(2)).sum();
    (ss / (n as f64 - 1.0)).sqrt()
}

/// Compute standardized residuals: e_i / s_e
///
/// Where s_e is the sample standard deviation of the residuals. When s_e is
/// zero or not finite, zero residuals stay zero and the rest become NaN.
pub fn standardized_residuals(residuals: &Col<f64>) -> Col<f64> {
    let s = residual_std_dev(residuals);

    if s <= 0.0 || !s.is_finite() {
        return Col::from_fn(residuals.nrows(), |i| {
            if residuals[i].abs() < 1e-14 {
                0.0
            } else {
                f64::NAN
            }
        });
    }

    Col::from_fn(residuals.nrows(), |i| residuals[i] / s)
}

/// Identify outliers based on standardized residuals.
///
/// Returns indices of observations with |r_i| > threshold.
/// Common threshold is 2 or 3.
pub fn residual_outliers(standardized: &Col<f64>, threshold: f64) -> Vec<usize> {
    standardized
        .iter()
        .enumerate()
        .filter(|(_, &r)| r.abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}
