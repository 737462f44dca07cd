//! Ordinary Least Squares regression solver.

use crate::core::{
    AdvancedStatistics, DesignMatrix, RegressionOptions, RegressionOptionsBuilder,
    RegressionResult,
};
use crate::diagnostics::standardized_residuals;
use crate::inference::CoefficientInference;
use crate::linalg::{cholesky_inverse, multiply, multiply_vector, transpose, LinalgError, Matrix};
use crate::solvers::traits::{Degeneracy, FittedRegressor, RegressionError, Regressor};
use crate::utils::{
    centered_sum_of_squares, column_sums, detect_constant_columns, is_constant, mean,
};
use faer::Col;

/// Ordinary Least Squares regression estimator.
///
/// Solves the normal equations `(X'X)β = X'y` by Cholesky factorization of
/// `X'X` and inversion through forward/back substitution. Collinear or
/// constant predictors make `X'X` singular and are reported as
/// [`RegressionError::SingularMatrix`].
///
/// # Example
///
/// ```rust,ignore
/// use ols_engine::prelude::*;
/// use faer::Col;
///
/// let x = Matrix::from_fn(100, 2, |i, j| ((i + 1) * (j + 2)) as f64 % 7.0);
/// let y = Col::from_fn(100, |i| 1.0 + 2.0 * x[(i, 0)] - x[(i, 1)]);
///
/// let fitted = OlsRegressor::builder()
///     .with_intercept(true)
///     .compute_advanced_stats(true)
///     .build()
///     .fit(&x, &y)?;
///
/// println!("R² = {}", fitted.r_squared());
/// println!("Coefficients: {:?}", fitted.coefficients());
/// ```
#[derive(Debug, Clone)]
pub struct OlsRegressor {
    options: RegressionOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }

    /// The options this regressor fits with.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Matrix, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        self.options.validate()?;

        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                expected: y.nrows(),
                found: x.nrows(),
            });
        }

        let design = DesignMatrix::new(x, self.options.with_intercept);
        let n = design.n_observations();
        let p = design.n_parameters();

        if n <= p {
            self.degenerate(Degeneracy::TooFewObservations { n, p })?;
        }
        if is_constant(y) {
            self.degenerate(Degeneracy::ConstantResponse)?;
        }

        log::trace!("forming normal equations for {n}x{p} design matrix");

        let xt = transpose(design.matrix());
        let xtx = multiply(&xt, design.matrix())?;
        let xty = multiply(&xt, &Matrix::from_column(y))?;

        let xtx_inverse = match cholesky_inverse(&xtx, self.options.pivot_tolerance) {
            Ok(inverse) => inverse,
            Err(LinalgError::SingularMatrix) => {
                let constant: Vec<usize> = detect_constant_columns(x, 1e-10)
                    .into_iter()
                    .enumerate()
                    .filter_map(|(j, c)| c.then_some(j))
                    .collect();
                log::debug!("X'X is singular; constant predictor columns: {constant:?}");
                return Err(RegressionError::SingularMatrix);
            }
            Err(err) => return Err(err.into()),
        };

        let coefficients = multiply(&xtx_inverse, &xty)?.column(0);

        let result = self.compute_statistics(x, y, &design, &xtx_inverse, &xty, coefficients)?;

        log::debug!(
            "fitted OLS: n={} p={} r_squared={:.6} standard_error={:.6}",
            result.n_observations,
            result.n_parameters,
            result.r_squared,
            result.standard_error
        );

        Ok(FittedOls {
            options: self.options.clone(),
            result,
            xtx_inverse,
        })
    }
}

impl OlsRegressor {
    /// Fail with `DegenerateInput` unless degenerate inputs are allowed.
    fn degenerate(&self, reason: Degeneracy) -> Result<(), RegressionError> {
        if self.options.allow_degenerate {
            log::warn!("degenerate input ({reason}); statistics may be NaN or infinite");
            Ok(())
        } else {
            Err(RegressionError::DegenerateInput(reason))
        }
    }

    /// Compute fit statistics, coefficient inference and, if requested,
    /// the advanced statistics.
    fn compute_statistics(
        &self,
        x: &Matrix,
        y: &Col<f64>,
        design: &DesignMatrix,
        xtx_inverse: &Matrix,
        xty: &Matrix,
        coefficients: Col<f64>,
    ) -> Result<RegressionResult, RegressionError> {
        let n = design.n_observations();
        let p = design.n_parameters();

        // SSE = y'y - β'X'y
        let yty: f64 = y.iter().map(|&yi| yi * yi).sum();
        let beta_xty: f64 = (0..p).map(|j| coefficients[j] * xty[(j, 0)]).sum();
        let mut ss_error = yty - beta_xty;
        if ss_error < 0.0 {
            log::debug!("clamping negative SSE {ss_error:e} to zero");
            ss_error = 0.0;
        }

        let y_mean = mean(y);
        let ss_total = centered_sum_of_squares(y, y_mean);
        let ss_regression = ss_total - ss_error;

        let n_f = n as f64;
        let df_resid = n_f - p as f64;

        let r_squared = 1.0 - ss_error / ss_total;
        let adjusted_r_squared = 1.0 - ((n_f - 1.0) / df_resid) * (1.0 - r_squared);

        let standard_error = (ss_error / df_resid).sqrt();
        let coefficient_of_variation = standard_error / y_mean;

        // Σ(yᵢ - ŷᵢ) = Σyᵢ - (column sums of X)·β
        let sums = column_sums(design.matrix());
        let predicted_sum: f64 = (0..p).map(|j| sums[j] * coefficients[j]).sum();
        let residual_sum = y.iter().sum::<f64>() - predicted_sum;
        let normalized_mean_bias_error = residual_sum / (df_resid * y_mean);

        let coefficient_std_errors =
            CoefficientInference::standard_errors(xtx_inverse, standard_error);
        let t_statistics = CoefficientInference::t_statistics(&coefficients, &coefficient_std_errors);
        let p_values = CoefficientInference::p_values(&t_statistics, df_resid);
        let (conf_interval_lower, conf_interval_upper) = CoefficientInference::confidence_intervals(
            &coefficients,
            &coefficient_std_errors,
            df_resid,
            self.options.confidence_level,
        );

        let mut result = RegressionResult::empty(p, n);
        result.has_constant = design.has_constant();
        result.r_squared = r_squared;
        result.adjusted_r_squared = adjusted_r_squared;
        result.standard_error = standard_error;
        result.coefficient_of_variation = coefficient_of_variation;
        result.normalized_mean_bias_error = normalized_mean_bias_error;
        result.ss_regression = ss_regression;
        result.ss_error = ss_error;
        result.ss_total = ss_total;
        result.y_mean = y_mean;
        result.coefficient_std_errors = coefficient_std_errors;
        result.t_statistics = t_statistics;
        result.p_values = p_values;
        result.conf_interval_lower = conf_interval_lower;
        result.conf_interval_upper = conf_interval_upper;
        result.confidence_level = self.options.confidence_level;

        if self.options.compute_advanced_stats {
            let predictions = multiply_vector(design.matrix(), &coefficients)?;
            let residuals = Col::from_fn(n, |i| y[i] - predictions[i]);
            let standardized = standardized_residuals(&residuals);

            // p - 1 numerator df whether or not a constant was added
            let df_model = result.model_df() as f64;
            let f_statistic = (r_squared / df_model) / ((1.0 - r_squared) / df_resid);
            let f_p_value = CoefficientInference::f_p_value(f_statistic, df_model, df_resid);

            result.advanced = Some(AdvancedStatistics {
                predictions,
                residuals,
                standardized_residuals: standardized,
                f_statistic,
                f_p_value,
                y: y.clone(),
                x: x.clone(),
            });
        }

        result.coefficients = coefficients;
        Ok(result)
    }
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    options: RegressionOptions,
    result: RegressionResult,
    /// (X'X)⁻¹ of the design matrix, constant column included.
    xtx_inverse: Matrix,
}

impl FittedOls {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// The inverse cross-product matrix `(X'X)⁻¹`.
    pub fn xtx_inverse(&self) -> &Matrix {
        &self.xtx_inverse
    }

    /// Consume the fitted model, keeping only the result record.
    pub fn into_result(self) -> RegressionResult {
        self.result
    }
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &Matrix) -> Result<Col<f64>, RegressionError> {
        let design = DesignMatrix::new(x, self.result.has_constant);
        multiply_vector(design.matrix(), &self.result.coefficients).map_err(RegressionError::from)
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Fit `y` on the columns of `x` by ordinary least squares.
///
/// `add_constant` prepends a column of ones, making coefficient 0 the
/// intercept. `compute_advanced_stats` additionally fills
/// [`RegressionResult::advanced`] with predictions, residuals, standardized
/// residuals and the F-statistic.
pub fn multiple_linear_regression(
    y: &Col<f64>,
    x: &Matrix,
    compute_advanced_stats: bool,
    add_constant: bool,
) -> Result<RegressionResult, RegressionError> {
    OlsRegressor::builder()
        .with_intercept(add_constant)
        .compute_advanced_stats(compute_advanced_stats)
        .build()
        .fit(x, y)
        .map(FittedOls::into_result)
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include an intercept term.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.builder = self.builder.with_intercept(include);
        self
    }

    /// Set whether to compute the advanced statistics.
    pub fn compute_advanced_stats(mut self, compute: bool) -> Self {
        self.builder = self.builder.compute_advanced_stats(compute);
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Set the relative pivot tolerance for the Cholesky factorization.
    pub fn pivot_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.pivot_tolerance(tol);
        self
    }

    /// Let degenerate inputs propagate NaN instead of failing.
    pub fn allow_degenerate(mut self, allow: bool) -> Self {
        self.builder = self.builder.allow_degenerate(allow);
        self
    }

    /// Build the OLS regressor. Options are validated when fitting.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.builder.build_unchecked())
    }
}
