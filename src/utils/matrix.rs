//! Column and vector helpers shared by the regression code.

use crate::linalg::Matrix;
use faer::Col;

/// Detect columns that are constant (zero variance).
pub fn detect_constant_columns(x: &Matrix, tolerance: f64) -> Vec<bool> {
    let n_cols = x.ncols();
    let n_rows = x.nrows();

    if n_rows == 0 {
        return vec![true; n_cols];
    }

    (0..n_cols)
        .map(|j| {
            let first = x[(0, j)];
            (1..n_rows).all(|i| (x[(i, j)] - first).abs() < tolerance)
        })
        .collect()
}

/// Whether every entry of `v` equals the first one exactly.
///
/// An empty vector counts as constant.
pub fn is_constant(v: &Col<f64>) -> bool {
    match v.iter().next() {
        Some(&first) => v.iter().all(|&vi| vi == first),
        None => true,
    }
}

/// Arithmetic mean of a vector. NaN for an empty vector.
pub fn mean(v: &Col<f64>) -> f64 {
    v.iter().sum::<f64>() / v.nrows() as f64
}

/// Centered cross-product `Σ (aᵢ - ā)(bᵢ - b̄)`.
///
/// With `a == b` this is the centered sum of squares.
pub fn centered_cross_product(a: &Col<f64>, a_mean: f64, b: &Col<f64>, b_mean: f64) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| (ai - a_mean) * (bi - b_mean))
        .sum()
}

/// Centered sum of squares `Σ (vᵢ - v̄)²`.
pub fn centered_sum_of_squares(v: &Col<f64>, v_mean: f64) -> f64 {
    v.iter().map(|&vi| (vi - v_mean).powi(2)).sum()
}

/// Column sums of a matrix.
pub fn column_sums(x: &Matrix) -> Col<f64> {
    Col::from_fn(x.ncols(), |j| (0..x.nrows()).map(|i| x[(i, j)]).sum())
}
