//! Regression result structures.

use crate::linalg::Matrix;
use faer::Col;

/// Complete result from a multiple regression fit.
///
/// Produced once per fit and read-only afterwards. When the fit used a
/// constant term, coefficient 0 is the intercept and every per-coefficient
/// vector follows the same order.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    // ========== Core Results ==========
    /// Estimated coefficients, length `p`.
    pub coefficients: Col<f64>,

    /// Whether coefficient 0 belongs to a constant column.
    pub has_constant: bool,

    /// Number of observations `n`.
    pub n_observations: usize,

    /// Number of parameters `p` (including the constant if present).
    pub n_parameters: usize,

    // ========== Fit Statistics ==========
    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Adjusted R².
    pub adjusted_r_squared: f64,

    /// Residual standard error, `sqrt(SSE / (n - p))`.
    pub standard_error: f64,

    /// Standard error relative to the response mean.
    pub coefficient_of_variation: f64,

    /// `Σ(yᵢ - ŷᵢ) / ((n - p) · ȳ)`; zero up to rounding when a constant is fit.
    pub normalized_mean_bias_error: f64,

    /// Regression (explained) sum of squares.
    pub ss_regression: f64,

    /// Residual sum of squares.
    pub ss_error: f64,

    /// Total sum of squares about the mean.
    pub ss_total: f64,

    /// Mean of the response.
    pub y_mean: f64,

    // ========== Coefficient Inference ==========
    /// Standard errors of coefficients.
    pub coefficient_std_errors: Col<f64>,

    /// t-statistics for coefficients.
    pub t_statistics: Col<f64>,

    /// Two-sided p-values for the t-statistics.
    pub p_values: Col<f64>,

    /// Lower bounds of confidence intervals.
    pub conf_interval_lower: Col<f64>,

    /// Upper bounds of confidence intervals.
    pub conf_interval_upper: Col<f64>,

    /// Confidence level used for intervals.
    pub confidence_level: f64,

    // ========== Advanced Statistics (Optional) ==========
    /// Present only when advanced statistics were requested.
    pub advanced: Option<AdvancedStatistics>,
}

/// Per-observation statistics and the overall F-test.
#[derive(Debug, Clone)]
pub struct AdvancedStatistics {
    /// Fitted values `X·β`.
    pub predictions: Col<f64>,

    /// Residuals `y - X·β`.
    pub residuals: Col<f64>,

    /// Residuals divided by their sample standard deviation.
    pub standardized_residuals: Col<f64>,

    /// F-statistic for overall model significance.
    pub f_statistic: f64,

    /// P-value for F-statistic.
    pub f_p_value: f64,

    /// Copy of the response used in the fit.
    pub y: Col<f64>,

    /// Copy of the raw predictors used in the fit (without the constant column).
    pub x: Matrix,
}

impl RegressionResult {
    /// Create a new empty result (used internally by solvers).
    pub(crate) fn empty(n_parameters: usize, n_observations: usize) -> Self {
        Self {
            coefficients: Col::zeros(n_parameters),
            has_constant: false,
            n_observations,
            n_parameters,
            r_squared: 0.0,
            adjusted_r_squared: 0.0,
            standard_error: 0.0,
            coefficient_of_variation: 0.0,
            normalized_mean_bias_error: 0.0,
            ss_regression: 0.0,
            ss_error: 0.0,
            ss_total: 0.0,
            y_mean: 0.0,
            coefficient_std_errors: Col::zeros(n_parameters),
            t_statistics: Col::zeros(n_parameters),
            p_values: Col::zeros(n_parameters),
            conf_interval_lower: Col::zeros(n_parameters),
            conf_interval_upper: Col::zeros(n_parameters),
            confidence_level: 0.95,
            advanced: None,
        }
    }

    /// Residual degrees of freedom (n - p), saturating at zero.
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// Numerator degrees of freedom of the overall F-test (p - 1), with or
    /// without an added constant.
    pub fn model_df(&self) -> usize {
        self.n_parameters.saturating_sub(1)
    }

    /// The intercept, if the fit used a constant column.
    pub fn intercept(&self) -> Option<f64> {
        if self.has_constant && self.n_parameters > 0 {
            Some(self.coefficients[0])
        } else {
            None
        }
    }

    /// Coefficients of the raw predictors, excluding the intercept.
    pub fn slopes(&self) -> Col<f64> {
        let offset = usize::from(self.has_constant);
        Col::from_fn(self.n_parameters - offset, |j| self.coefficients[j + offset])
    }

    /// Get coefficient value by index.
    pub fn get_coefficient(&self, index: usize) -> Option<f64> {
        (index < self.coefficients.nrows()).then(|| self.coefficients[index])
    }

    /// Mean squared error, `SSE / (n - p)`.
    pub fn mse(&self) -> f64 {
        self.standard_error.powi(2)
    }

    /// Check if the model has positive residual degrees of freedom and finite fit statistics.
    pub fn is_valid(&self) -> bool {
        self.n_observations > self.n_parameters
            && self.r_squared.is_finite()
            && self.standard_error.is_finite()
    }
}

/// Result of a closed-form single-predictor fit `y = intercept + slope · x`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleRegressionResult {
    /// Slope coefficient.
    pub slope: f64,
    /// Intercept.
    pub intercept: f64,
    /// Coefficient of determination (R²).
    pub r_squared: f64,
    /// Residual standard error `sqrt(SSE / (n - 2))`.
    pub standard_error: f64,
    /// `Σ(xᵢ - x̄)²`.
    pub sxx: f64,
    /// `Σ(xᵢ - x̄)(yᵢ - ȳ)`.
    pub sxy: f64,
    /// `Σ(yᵢ - ȳ)²`.
    pub syy: f64,
    /// Residual sum of squares.
    pub sse: f64,
    pub x_mean: f64,
    pub y_mean: f64,
    /// Sample size.
    pub n: usize,
}

impl SimpleRegressionResult {
    /// Predicted response at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
