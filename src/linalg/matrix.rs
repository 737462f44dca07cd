//! Dense matrix type with shape-checked construction, transpose and multiply.

use super::error::LinalgError;
use faer::{Col, Mat};
use std::ops::Index;

/// A dense, rectangular matrix of `f64` values.
///
/// The shape is fixed at construction. Every constructor validates that the
/// supplied data is rectangular, and every binary operation validates operand
/// shapes before touching any element.
#[derive(Debug, Clone)]
pub struct Matrix {
    inner: Mat<f64>,
}

impl Matrix {
    /// Create a `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            inner: Mat::zeros(rows, cols),
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Create a matrix whose entry `(i, j)` is `f(i, j)`.
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(usize, usize) -> f64) -> Self {
        Self {
            inner: Mat::from_fn(rows, cols, f),
        }
    }

    /// Create a matrix from a slice of rows.
    ///
    /// Every row must have the same length as the first one; a ragged row is
    /// rejected rather than padded or truncated.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, LinalgError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());

        for (i, row) in rows.iter().enumerate() {
            let found = row.as_ref().len();
            if found != n_cols {
                return Err(LinalgError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    found,
                });
            }
        }

        Ok(Self::from_fn(n_rows, n_cols, |i, j| rows[i].as_ref()[j]))
    }

    /// Create a matrix from row-major data.
    pub fn from_row_major(rows: usize, cols: usize, data: &[f64]) -> Result<Self, LinalgError> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(LinalgError::DataLength {
                expected,
                found: data.len(),
            });
        }

        Ok(Self::from_fn(rows, cols, |i, j| data[i * cols + j]))
    }

    /// Create an `n x 1` matrix holding the given column vector.
    pub fn from_column(col: &Col<f64>) -> Self {
        Self::from_fn(col.nrows(), 1, |i, _| col[i])
    }

    /// Wrap an existing `faer` matrix.
    pub fn from_mat(inner: Mat<f64>) -> Self {
        Self { inner }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Bounds-checked element access.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.nrows() && col < self.ncols() {
            Some(self.inner[(row, col)])
        } else {
            None
        }
    }

    /// Copy column `j` out as a vector.
    ///
    /// # Panics
    /// Panics if `j` is out of bounds.
    pub fn column(&self, j: usize) -> Col<f64> {
        Col::from_fn(self.nrows(), |i| self.inner[(i, j)])
    }

    /// Copy the diagonal out as a vector.
    pub fn diagonal(&self) -> Col<f64> {
        let n = self.nrows().min(self.ncols());
        Col::from_fn(n, |i| self.inner[(i, i)])
    }

    /// Whether every entry is finite (neither NaN nor infinite).
    pub fn is_finite(&self) -> bool {
        (0..self.ncols()).all(|j| (0..self.nrows()).all(|i| self.inner[(i, j)].is_finite()))
    }

    /// Element-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && (0..self.nrows()).all(|i| {
                (0..self.ncols()).all(|j| (self.inner[(i, j)] - other.inner[(i, j)]).abs() <= tolerance)
            })
    }

    /// Borrow the underlying `faer` matrix.
    pub fn as_mat(&self) -> &Mat<f64> {
        &self.inner
    }

    /// Consume into the underlying `faer` matrix.
    pub fn into_mat(self) -> Mat<f64> {
        self.inner
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.inner[index]
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && (0..self.nrows())
                .all(|i| (0..self.ncols()).all(|j| self.inner[(i, j)] == other.inner[(i, j)]))
    }
}

impl From<Mat<f64>> for Matrix {
    fn from(inner: Mat<f64>) -> Self {
        Self::from_mat(inner)
    }
}

/// Transpose: entry `(i, j)` of the result is entry `(j, i)` of `a`.
pub fn transpose(a: &Matrix) -> Matrix {
    Matrix::from_fn(a.ncols(), a.nrows(), |i, j| a[(j, i)])
}

/// Matrix product `a * b`.
///
/// Requires `a.ncols() == b.nrows()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, LinalgError> {
    if a.ncols() != b.nrows() {
        return Err(LinalgError::DimensionMismatch {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }

    let (m, k, n) = (a.nrows(), a.ncols(), b.ncols());
    let mut c = Mat::zeros(m, n);

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for l in 0..k {
                sum += a[(i, l)] * b[(l, j)];
            }
            c[(i, j)] = sum;
        }
    }

    Ok(Matrix::from_mat(c))
}

/// Matrix-vector product `a * v`.
pub fn multiply_vector(a: &Matrix, v: &Col<f64>) -> Result<Col<f64>, LinalgError> {
    if a.ncols() != v.nrows() {
        return Err(LinalgError::DimensionMismatch {
            op: "multiply_vector",
            left: a.shape(),
            right: (v.nrows(), 1),
        });
    }

    Ok(Col::from_fn(a.nrows(), |i| {
        (0..a.ncols()).map(|j| a[(i, j)] * v[j]).sum()
    }))
}
