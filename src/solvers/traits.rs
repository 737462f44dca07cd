//! Core traits and errors for regression estimators.

use crate::core::{OptionsError, RegressionResult};
use crate::linalg::{LinalgError, Matrix};
use faer::Col;
use thiserror::Error;

/// The ways an input can be too degenerate to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Degeneracy {
    #[error("{n} observations cannot support {p} parameters")]
    TooFewObservations { n: usize, p: usize },

    #[error("response has zero variance")]
    ConstantResponse,

    #[error("predictor has zero variance")]
    ConstantPredictor,
}

/// Errors that can occur during regression fitting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: expected {expected} observations, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// `X'X` could not be inverted: a constant or collinear predictor, or a
    /// predictor whose spread is negligible next to its offset (center it
    /// before fitting).
    #[error("matrix inverse not defined; check for a constant or collinear predictor column")]
    SingularMatrix,

    #[error("degenerate input: {0}")]
    DegenerateInput(Degeneracy),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error(transparent)]
    Linalg(LinalgError),
}

impl From<LinalgError> for RegressionError {
    fn from(err: LinalgError) -> Self {
        match err {
            LinalgError::SingularMatrix => RegressionError::SingularMatrix,
            other => RegressionError::Linalg(other),
        }
    }
}

/// A regression estimator that can be fit to data.
///
/// Fitting returns a fitted model that can then make predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Predictor matrix of shape (n_samples, n_features), without a
    ///   constant column
    /// * `y` - Target vector of length n_samples
    fn fit(&self, x: &Matrix, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Make predictions on new predictor rows (no constant column).
    fn predict(&self, x: &Matrix) -> Result<Col<f64>, RegressionError>;

    /// Access the regression results (coefficients, statistics, etc.).
    fn result(&self) -> &RegressionResult;

    /// Get the coefficients (convenience method).
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Get R² (convenience method).
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }

    /// Calculate the score (R²) on new data.
    fn score(&self, x: &Matrix, y: &Col<f64>) -> Result<f64, RegressionError> {
        let predictions = self.predict(x)?;
        if predictions.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                expected: y.nrows(),
                found: predictions.nrows(),
            });
        }

        let n = y.nrows();
        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;

        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = y
            .iter()
            .zip(predictions.iter())
            .map(|(&yi, &pi)| (yi - pi).powi(2))
            .sum();

        Ok(if tss == 0.0 {
            if rss == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - rss / tss
        })
    }
}
