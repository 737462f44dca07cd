//! Ordinary least squares regression engine.
//!
//! Fits linear models by solving the normal equations `(X'X)β = X'y` with a
//! Cholesky factorization, and reports fit-quality statistics: R², adjusted
//! R², residual standard error, coefficient standard errors, t-statistics
//! and, on request, residual diagnostics and the overall F-test.
//!
//! The [`linalg`] module holds the stateless matrix primitives the solvers
//! are built on.
//!
//! # Example
//!
//! ```rust,ignore
//! use ols_engine::prelude::*;
//! use faer::Col;
//!
//! let x = Matrix::from_rows(&[[1.0], [2.0], [3.0], [4.0], [5.0]])?;
//! let y = Col::from_fn(5, |i| 2.0 + 3.0 * (i + 1) as f64);
//!
//! let result = multiple_linear_regression(&y, &x, true, true)?;
//! println!("intercept = {:?}", result.intercept());
//! println!("R² = {}", result.r_squared);
//! ```

pub mod core;
pub mod diagnostics;
pub mod inference;
pub mod linalg;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        AdvancedStatistics, DesignMatrix, RegressionOptions, RegressionOptionsBuilder,
        RegressionResult, SimpleRegressionResult,
    };
    pub use crate::diagnostics::{residual_outliers, standardized_residuals};
    pub use crate::linalg::{LinalgError, Matrix};
    pub use crate::solvers::{
        multiple_linear_regression, simple_linear_regression, Degeneracy, FittedOls,
        FittedRegressor, OlsRegressor, RegressionError, Regressor,
    };
    pub use crate::utils::calculate_rmse;
}

pub use crate::core::{
    AdvancedStatistics, DesignMatrix, OptionsError, RegressionOptions, RegressionOptionsBuilder,
    RegressionResult, SimpleRegressionResult,
};
pub use crate::linalg::{LinalgError, Matrix};
pub use crate::solvers::{
    multiple_linear_regression, simple_linear_regression, Degeneracy, FittedRegressor,
    RegressionError, Regressor,
};
pub use crate::utils::calculate_rmse;
