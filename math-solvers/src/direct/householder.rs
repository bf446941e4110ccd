//! Householder QR factorization and solve
//!
//! Step `i` builds the reflector `H = I - 2 w w^T` that maps the sub-column
//! `A[i.., i]` onto the first axis, applies it to the trailing block of `A`,
//! and folds the embedded `n x n` reflector `Q_i` into the right-hand side
//! (`b = Q_i b`) and into the accumulated factor (`Q = Q Q_i^T`).
//!
//! Reflectors are formed explicitly and applied with the plain triple-loop
//! [`multiply`], so results are reproducible bit for bit.

use super::substitution::back_substitute;
use crate::config::Method;
use crate::error::SolverError;
use crate::traits::LinearSystemSolution;
use math_linsys_matrix::{
    Scalar, add, column_norm, identity, multiply, scale, sub, transpose, validate_square_with_rhs,
};
use ndarray::{Array1, Array2, s};

/// Result of [`householder_solve`]
#[derive(Debug, Clone)]
pub struct QrSolution<T: Scalar> {
    /// Orthogonal factor
    pub q: Array2<T>,
    /// Upper-triangular factor
    pub r: Array2<T>,
    /// Solution vector
    pub x: Array1<T>,
}

impl<T: Scalar> LinearSystemSolution<T> for QrSolution<T> {
    fn method(&self) -> Method {
        Method::Householder
    }

    fn solution(&self) -> &Array1<T> {
        &self.x
    }
}

/// Reflector of size `(n - step) x (n - step)` zeroing `matrix[step + 1.., step]`.
///
/// The sign of `matrix[step][step]` (zero counted as positive) picks the
/// direction that avoids cancellation in `w = s + sign * |s| e`.
fn reflector<T: Scalar>(matrix: &Array2<T>, step: usize) -> Result<Array2<T>, SolverError> {
    let len = matrix.nrows() - step;

    let mut w = matrix.slice(s![step.., step..step + 1]).to_owned();
    let s_norm = column_norm(&w).map_err(SolverError::step("norm of sub-column"))?;

    let mut e = Array2::zeros((len, 1));
    e[[0, 0]] = T::one();
    scale(&mut e, s_norm * matrix[[step, step]].sign());

    add(&mut w, &e).map_err(SolverError::step("reflection vector"))?;
    let w_norm = column_norm(&w).map_err(SolverError::step("norm of reflection vector"))?;
    scale(&mut w, T::one() / w_norm);

    let w_t = transpose(&w).map_err(SolverError::step("transpose reflection vector"))?;
    let mut outer = multiply(&w, &w_t).map_err(SolverError::step("outer product"))?;
    scale(&mut outer, T::lit(2.0));

    let mut h = identity(len).map_err(SolverError::step("reflector identity"))?;
    sub(&mut h, &outer).map_err(SolverError::step("reflector"))?;
    Ok(h)
}

/// `n x n` identity with `h` written into its trailing block from `step`.
fn embed<T: Scalar>(h: &Array2<T>, n: usize, step: usize) -> Result<Array2<T>, SolverError> {
    let mut q_i = identity(n).map_err(SolverError::step("embedded reflector"))?;
    q_i.slice_mut(s![step.., step..]).assign(h);
    Ok(q_i)
}

/// Solve `A x = b` by Householder QR.
///
/// On success `matrix` holds `R` and `rhs` holds `Q^T b`; the returned
/// [`QrSolution`] carries copies of `Q` and `R` plus the solution, with
/// `A = Q R` up to rounding.
///
/// # Errors
///
/// [`SolverError::InvalidInput`] if `matrix` is empty or not square, or if
/// `rhs` is not an `n x 1` column. Neither buffer is touched in that case.
/// A singular matrix is not reported; `Inf`/`NaN` appear in the result.
pub fn householder_solve<T: Scalar>(
    matrix: &mut Array2<T>,
    rhs: &mut Array2<T>,
) -> Result<QrSolution<T>, SolverError> {
    validate_square_with_rhs(matrix, rhs)?;

    let n = matrix.nrows();
    let mut q = identity(n).map_err(SolverError::step("initial Q"))?;

    for i in 0..n {
        let h = reflector(matrix, i)?;

        let block = matrix.slice(s![i.., i..]).to_owned();
        let reflected = multiply(&h, &block).map_err(SolverError::step("apply reflector"))?;
        matrix.slice_mut(s![i.., i..]).assign(&reflected);

        let q_i = embed(&h, n, i)?;
        *rhs = multiply(&q_i, rhs).map_err(SolverError::step("reflect right-hand side"))?;

        let q_i_t = transpose(&q_i).map_err(SolverError::step("transpose Q_i"))?;
        q = multiply(&q, &q_i_t).map_err(SolverError::step("accumulate Q"))?;

        log::debug!("householder: step {i}, |R[{i}][{i}]| = {}", matrix[[i, i]].abs());
    }

    let x = back_substitute(matrix, rhs, None)?;
    log::debug!("householder: solved {n}x{n} system");

    Ok(QrSolution {
        q,
        r: matrix.clone(),
        x,
    })
}
