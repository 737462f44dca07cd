//! Cholesky factorization and inversion of symmetric positive-definite matrices.

use super::error::LinalgError;
use super::matrix::{transpose, Matrix};
use faer::{Col, Mat};

/// Relative tolerance below which a Cholesky pivot is treated as zero.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-10;

/// Compute the lower-triangular `L` with `L * L' = s`.
///
/// Uses [`DEFAULT_PIVOT_TOLERANCE`]. See [`cholesky_decompose_with_tolerance`].
pub fn cholesky_decompose(s: &Matrix) -> Result<Matrix, LinalgError> {
    cholesky_decompose_with_tolerance(s, DEFAULT_PIVOT_TOLERANCE)
}

/// Compute the lower-triangular `L` with `L * L' = s`.
///
/// `s` must be square. Symmetry and positive-definiteness are not checked:
/// a residual pivot that is negative, or no larger than
/// `tolerance * |s[j][j]|`, is stored as NaN. The NaN then spreads through
/// the remaining columns and into any solve that uses `L`, which is how
/// [`invert`] detects a singular input.
pub fn cholesky_decompose_with_tolerance(
    s: &Matrix,
    tolerance: f64,
) -> Result<Matrix, LinalgError> {
    if !s.is_square() {
        return Err(LinalgError::NotSquare {
            rows: s.nrows(),
            cols: s.ncols(),
        });
    }

    let k = s.nrows();
    let mut l = Mat::<f64>::zeros(k, k);

    for j in 0..k {
        let mut pivot = s[(j, j)];
        for m in 0..j {
            pivot -= l[(j, m)] * l[(j, m)];
        }

        // Rounding can leave a tiny positive residue where the exact pivot is zero.
        l[(j, j)] = if pivot > tolerance * s[(j, j)].abs() {
            pivot.sqrt()
        } else {
            f64::NAN
        };

        for i in (j + 1)..k {
            let mut sum = s[(i, j)];
            for m in 0..j {
                sum -= l[(i, m)] * l[(j, m)];
            }
            l[(i, j)] = sum / l[(j, j)];
        }
    }

    Ok(Matrix::from_mat(l))
}

/// Solve `L * L' * x = b` by forward substitution (`L * d = b`) followed by
/// back substitution (`L' * x = d`).
///
/// A zero or NaN diagonal in `l` produces NaN or infinite entries in `x`.
pub fn substitute_forward_backward(
    l: &Matrix,
    lt: &Matrix,
    b: &Col<f64>,
) -> Result<Col<f64>, LinalgError> {
    if !l.is_square() {
        return Err(LinalgError::NotSquare {
            rows: l.nrows(),
            cols: l.ncols(),
        });
    }
    if lt.shape() != l.shape() {
        return Err(LinalgError::DimensionMismatch {
            op: "substitute_forward_backward",
            left: l.shape(),
            right: lt.shape(),
        });
    }
    if b.nrows() != l.nrows() {
        return Err(LinalgError::DimensionMismatch {
            op: "substitute_forward_backward",
            left: l.shape(),
            right: (b.nrows(), 1),
        });
    }

    let k = l.nrows();

    let mut d = Col::<f64>::zeros(k);
    for i in 0..k {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[(i, j)] * d[j];
        }
        d[i] = sum / l[(i, i)];
    }

    let mut x = Col::<f64>::zeros(k);
    for i in (0..k).rev() {
        let mut sum = d[i];
        for j in (i + 1)..k {
            sum -= lt[(i, j)] * x[j];
        }
        x[i] = sum / lt[(i, i)];
    }

    Ok(x)
}

/// Invert `s` given its Cholesky factor `l`.
///
/// Solves `L * L' * x = e_i` for every unit basis vector and assembles the
/// solutions column by column. Any non-finite entry in the result means `s`
/// was not positive-definite and is reported as [`LinalgError::SingularMatrix`].
pub fn invert(s: &Matrix, l: &Matrix) -> Result<Matrix, LinalgError> {
    if !s.is_square() {
        return Err(LinalgError::NotSquare {
            rows: s.nrows(),
            cols: s.ncols(),
        });
    }
    if l.shape() != s.shape() {
        return Err(LinalgError::DimensionMismatch {
            op: "invert",
            left: s.shape(),
            right: l.shape(),
        });
    }

    let k = s.nrows();
    let lt = transpose(l);
    let mut inverse = Mat::<f64>::zeros(k, k);

    for col in 0..k {
        let e = Col::from_fn(k, |i| if i == col { 1.0 } else { 0.0 });
        let x = substitute_forward_backward(l, &lt, &e)?;
        for row in 0..k {
            inverse[(row, col)] = x[row];
        }
    }

    let inverse = Matrix::from_mat(inverse);
    if !inverse.is_finite() {
        log::debug!("inverse of {k}x{k} matrix has non-finite entries");
        return Err(LinalgError::SingularMatrix);
    }

    Ok(inverse)
}

/// Factor and invert a symmetric positive-definite matrix in one step.
pub fn cholesky_inverse(s: &Matrix, tolerance: f64) -> Result<Matrix, LinalgError> {
    let l = cholesky_decompose_with_tolerance(s, tolerance)?;
    invert(s, &l)
}
