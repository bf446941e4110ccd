//! Back-substitution on an upper-triangular system

use crate::error::SolverError;
use math_linsys_matrix::{MatrixError, Scalar, validate_square_with_rhs};
use ndarray::{Array1, Array2};

/// Solve `U x = rhs` for upper-triangular `U`, last row first.
///
/// With `order = Some(perm)`, column `j` of `upper` holds original variable
/// `perm[j]` and the solution is written back in original order. `None`
/// means the columns were never permuted.
///
/// The inner sum runs from the last column down to `i + 1`. A zero on the
/// diagonal yields `Inf`/`NaN` rather than an error.
///
/// # Errors
///
/// [`SolverError::InvalidInput`] if `upper` is empty or not square, if `rhs`
/// is not an `n x 1` column, or if `order` does not have `n` entries.
pub fn back_substitute<T: Scalar>(
    upper: &Array2<T>,
    rhs: &Array2<T>,
    order: Option<&[usize]>,
) -> Result<Array1<T>, SolverError> {
    validate_square_with_rhs(upper, rhs)?;

    let n = upper.nrows();
    if let Some(perm) = order {
        if perm.len() != n {
            return Err(MatrixError::MatrixShape(format!(
                "column order must have {} entries, got {}",
                n,
                perm.len()
            ))
            .into());
        }
    }
    let var = |j: usize| order.map_or(j, |perm| perm[j]);

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut right = rhs[[i, 0]];
        for j in ((i + 1)..n).rev() {
            right -= upper[[i, j]] * x[var(j)];
        }
        x[var(i)] = right / upper[[i, i]];
    }
    Ok(x)
}
