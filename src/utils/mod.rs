//! Utility functions.

mod matrix;
mod metrics;

pub use matrix::{
    centered_cross_product, centered_sum_of_squares, column_sums, detect_constant_columns,
    is_constant, mean,
};
pub use metrics::calculate_rmse;
