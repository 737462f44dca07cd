//! Regression options and configuration.

use crate::linalg::DEFAULT_PIVOT_TOLERANCE;
use thiserror::Error;

/// Configuration options for least squares fits.
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// Whether to prepend a constant column to the design matrix (default: true).
    pub with_intercept: bool,
    /// Whether to compute predictions, residuals, standardized residuals and
    /// the F-statistic (default: false).
    pub compute_advanced_stats: bool,
    /// Confidence level for coefficient confidence intervals (default: 0.95).
    pub confidence_level: f64,
    /// Relative tolerance below which a Cholesky pivot counts as zero.
    pub pivot_tolerance: f64,
    /// Let degenerate inputs (n <= p, zero total variance) through as NaN or
    /// infinite statistics instead of failing (default: false).
    pub allow_degenerate: bool,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            with_intercept: true,
            compute_advanced_stats: false,
            confidence_level: 0.95,
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            allow_degenerate: false,
        }
    }
}

/// Errors that can occur when validating regression options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
    #[error("pivot_tolerance must be non-negative and finite, got {0}")]
    InvalidTolerance(f64),
}

impl RegressionOptions {
    /// Create a new builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        if !(self.pivot_tolerance >= 0.0 && self.pivot_tolerance.is_finite()) {
            return Err(OptionsError::InvalidTolerance(self.pivot_tolerance));
        }
        Ok(())
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include an intercept term.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.options.with_intercept = include;
        self
    }

    /// Set whether to compute the advanced statistics.
    pub fn compute_advanced_stats(mut self, compute: bool) -> Self {
        self.options.compute_advanced_stats = compute;
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Set the relative pivot tolerance for the Cholesky factorization.
    pub fn pivot_tolerance(mut self, tol: f64) -> Self {
        self.options.pivot_tolerance = tol;
        self
    }

    /// Set whether degenerate inputs propagate NaN instead of failing.
    pub fn allow_degenerate(mut self, allow: bool) -> Self {
        self.options.allow_degenerate = allow;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}
