//! Least squares solvers.

mod ols;
mod simple;
mod traits;

pub use ols::{multiple_linear_regression, FittedOls, OlsRegressor, OlsRegressorBuilder};
pub use simple::{simple_linear_regression, simple_linear_regression_with_options};
pub use traits::{Degeneracy, FittedRegressor, RegressionError, Regressor};
