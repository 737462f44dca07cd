//! Errors raised by the dense matrix primitives.

use thiserror::Error;

/// Errors that can occur in matrix construction and matrix operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    #[error("dimension mismatch in {op}: left is {}x{}, right is {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("data length {found} does not match matrix size {expected}")]
    DataLength { expected: usize, found: usize },

    /// A Cholesky pivot was negative or at most `tolerance * |s[j][j]|`.
    ///
    /// Because the test is relative, a column with a large offset and a
    /// small spread (e.g. `1e6 + [1, 2, 3, 4, 5]`) is also reported here.
    #[error("matrix inverse not defined; check for a constant or collinear predictor column")]
    SingularMatrix,
}
