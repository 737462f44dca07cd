//! Core types for regression analysis.

mod design;
mod options;
mod result;

pub use design::DesignMatrix;
pub use options::{OptionsError, RegressionOptions, RegressionOptionsBuilder};
pub use result::{AdvancedStatistics, RegressionResult, SimpleRegressionResult};
