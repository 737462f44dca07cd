//! Closed-form single-predictor regression.

use crate::core::{RegressionOptions, SimpleRegressionResult};
use crate::solvers::traits::{Degeneracy, RegressionError};
use crate::utils::{centered_cross_product, centered_sum_of_squares, is_constant, mean};
use faer::Col;

/// Fit `y = intercept + slope · x` from means and centered sums of squares.
///
/// Fails with [`RegressionError::DimensionMismatch`] when the lengths differ
/// and with [`RegressionError::DegenerateInput`] for fewer than three
/// observations or a constant `x` or `y`.
///
/// # Example
///
/// ```rust,ignore
/// use ols_engine::simple_linear_regression;
/// use faer::Col;
///
/// let x = Col::from_fn(5, |i| (i + 1) as f64);
/// let y = Col::from_fn(5, |i| 2.0 + 3.0 * (i + 1) as f64);
/// let fit = simple_linear_regression(&y, &x)?;
/// assert!((fit.slope - 3.0).abs() < 1e-12);
/// ```
pub fn simple_linear_regression(
    y: &Col<f64>,
    x: &Col<f64>,
) -> Result<SimpleRegressionResult, RegressionError> {
    simple_linear_regression_with_options(y, x, &RegressionOptions::default())
}

/// [`simple_linear_regression`] honouring `options.allow_degenerate`.
///
/// With degenerate inputs allowed, a constant `x` gives an infinite or NaN
/// slope and `n <= 2` gives a NaN standard error.
pub fn simple_linear_regression_with_options(
    y: &Col<f64>,
    x: &Col<f64>,
    options: &RegressionOptions,
) -> Result<SimpleRegressionResult, RegressionError> {
    if y.nrows() != x.nrows() {
        return Err(RegressionError::DimensionMismatch {
            expected: y.nrows(),
            found: x.nrows(),
        });
    }

    let n = y.nrows();
    let degenerate = |reason: Degeneracy| {
        if options.allow_degenerate {
            log::warn!("degenerate input ({reason}); statistics may be NaN or infinite");
            Ok(())
        } else {
            Err(RegressionError::DegenerateInput(reason))
        }
    };

    if n <= 2 {
        degenerate(Degeneracy::TooFewObservations { n, p: 2 })?;
    }
    if is_constant(x) {
        degenerate(Degeneracy::ConstantPredictor)?;
    }
    if is_constant(y) {
        degenerate(Degeneracy::ConstantResponse)?;
    }

    let x_mean = mean(x);
    let y_mean = mean(y);

    let sxx = centered_sum_of_squares(x, x_mean);
    let syy = centered_sum_of_squares(y, y_mean);
    let sxy = centered_cross_product(x, x_mean, y, y_mean);

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let mut sse = syy - slope * sxy;
    if sse < 0.0 {
        sse = 0.0;
    }
    let standard_error = (sse / (n as f64 - 2.0)).sqrt();
    let r_squared = 1.0 - sse / syy;

    log::debug!("fitted simple regression: n={n} slope={slope:.6} r_squared={r_squared:.6}");

    Ok(SimpleRegressionResult {
        slope,
        intercept,
        r_squared,
        standard_error,
        sxx,
        sxy,
        syy,
        sse,
        x_mean,
        y_mean,
        n,
    })
}
