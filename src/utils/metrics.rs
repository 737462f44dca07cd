//! Error metrics between predicted and measured series.

use crate::solvers::RegressionError;

/// Root mean squared error `sqrt(Σ(pᵢ - mᵢ)² / n)`.
///
/// Both slices must have the same length; a mismatch is reported as
/// [`RegressionError::DimensionMismatch`]. Empty input yields NaN.
pub fn calculate_rmse(predicted: &[f64], measured: &[f64]) -> Result<f64, RegressionError> {
    if predicted.len() != measured.len() {
        return Err(RegressionError::DimensionMismatch {
            expected: measured.len(),
            found: predicted.len(),
        });
    }

    let sse: f64 = predicted
        .iter()
        .zip(measured)
        .map(|(&p, &m)| (p - m).powi(2))
        .sum();

    Ok((sse / predicted.len() as f64).sqrt())
}
