//! Design matrix construction.

use crate::linalg::Matrix;

/// The predictor matrix used in the normal equations, optionally with a
/// leading column of ones for the constant term.
///
/// Built fresh for every fit and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DesignMatrix {
    matrix: Matrix,
    has_constant: bool,
}

impl DesignMatrix {
    /// Build a design matrix from raw predictors.
    pub fn new(x: &Matrix, add_constant: bool) -> Self {
        let matrix = if add_constant {
            Matrix::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
                if j == 0 {
                    1.0
                } else {
                    x[(i, j - 1)]
                }
            })
        } else {
            x.clone()
        };

        Self {
            matrix,
            has_constant: add_constant,
        }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Whether column 0 is the constant term.
    pub fn has_constant(&self) -> bool {
        self.has_constant
    }

    /// Number of observations (rows).
    pub fn n_observations(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of parameters `p` (columns, including the constant).
    pub fn n_parameters(&self) -> usize {
        self.matrix.ncols()
    }
}
