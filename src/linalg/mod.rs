//! Dense matrix primitives.
//!
//! Stateless building blocks for the normal equations: a shape-checked
//! [`Matrix`], [`transpose`], [`multiply`], Cholesky factorization and
//! inversion through forward/back substitution.

mod cholesky;
mod error;
mod matrix;

pub use cholesky::{
    cholesky_decompose, cholesky_decompose_with_tolerance, cholesky_inverse, invert,
    substitute_forward_backward, DEFAULT_PIVOT_TOLERANCE,
};
pub use error::LinalgError;
pub use matrix::{multiply, multiply_vector, transpose, Matrix};
