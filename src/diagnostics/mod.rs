//! Regression diagnostics.
//!
//! Residuals scaled by their sample standard deviation, and a simple
//! threshold rule for flagging outlying observations.
//!
//! # Example
//!
//! ```rust,ignore
//! use ols_engine::diagnostics::{residual_outliers, standardized_residuals};
//!
//! let standardized = standardized_residuals(&residuals);
//! let outliers = residual_outliers(&standardized, 2.0);
//! ```

mod residuals;

pub use residuals::{residual_outliers, residual_std_dev, standardized_residuals};
