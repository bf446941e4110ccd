//! Norms used by the solvers and by accuracy checks
//!
//! - [`column_norm`]: Euclidean norm of a single-column matrix
//! - [`residual_norm`]: cubic (max-abs) norm of `Ax - b`
//! - [`matrix_diff_norm`]: max absolute row sum of `a - b`
//!
//! The max-based norms keep NaN instead of skipping it, so a singular solve
//! shows up as a failed check rather than a small residual.

use crate::error::MatrixError;
use crate::ops::sub;
use crate::scalar::{Scalar, nan_max};
use crate::shape::{validate, validate_square_with_rhs};
use ndarray::{Array1, Array2};

/// Euclidean norm of a column vector.
///
/// Fails with [`MatrixError::MatrixShape`] if `column` is empty or has more
/// than one column.
pub fn column_norm<T: Scalar>(column: &Array2<T>) -> Result<T, MatrixError> {
    validate(column)?;
    if column.ncols() != 1 {
        return Err(MatrixError::shape("matrix should be a column"));
    }

    let mut sum = T::zero();
    for &v in column.column(0) {
        sum += v * v;
    }
    Ok(sum.sqrt())
}

/// `max_i |sum_j A[i][j] x[j] - b[i]|`
pub fn residual_norm<T: Scalar>(
    matrix: &Array2<T>,
    rhs: &Array2<T>,
    x: &Array1<T>,
) -> Result<T, MatrixError> {
    validate_square_with_rhs(matrix, rhs)?;
    if x.len() != matrix.nrows() {
        return Err(MatrixError::shape(format!(
            "solution length {} does not match matrix size {}",
            x.len(),
            matrix.nrows()
        )));
    }

    let mut max = T::zero();
    for (row, b) in matrix.rows().into_iter().zip(rhs.column(0)) {
        let mut row_sum = T::zero();
        for (&a, &xj) in row.iter().zip(x.iter()) {
            row_sum += a * xj;
        }
        max = nan_max(max, (row_sum - *b).abs());
    }
    Ok(max)
}

/// Max absolute row sum of `first - second`; both operands are consumed.
pub fn matrix_diff_norm<T: Scalar>(
    mut first: Array2<T>,
    second: Array2<T>,
) -> Result<T, MatrixError> {
    sub(&mut first, &second)?;

    let mut max = T::zero();
    for row in first.rows() {
        let row_sum = row.iter().fold(T::zero(), |acc, v| acc + v.abs());
        max = nan_max(max, row_sum);
    }
    Ok(max)
}
