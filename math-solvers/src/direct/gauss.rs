//! Gaussian elimination with row-relative column pivoting
//!
//! At step `i` the pivot is the largest entry (by magnitude) of row `i`
//! between columns `i` and `n - 1`, and columns are swapped to bring it onto
//! the diagonal. This differs from textbook partial pivoting, which searches
//! down column `i` and swaps rows. Results of downstream consumers depend on
//! this exact choice; do not change it.
//!
//! Zero pivots are not detected: the division is carried out and `Inf`/`NaN`
//! propagate into the solution.

use super::substitution::back_substitute;
use crate::config::Method;
use crate::error::SolverError;
use crate::traits::LinearSystemSolution;
use math_linsys_matrix::{Scalar, validate_square_with_rhs};
use ndarray::{Array1, Array2};

/// Result of [`gauss_solve`]
#[derive(Debug, Clone)]
pub struct GaussSolution<T: Scalar> {
    /// Solution vector, indexed by original variable
    pub x: Array1<T>,
    /// `permutation[i]` is the original column sitting in pivot position `i`
    pub permutation: Vec<usize>,
    /// Triangularised matrix, columns in pivot order
    pub upper: Array2<T>,
}

impl<T: Scalar> LinearSystemSolution<T> for GaussSolution<T> {
    fn method(&self) -> Method {
        Method::Gauss
    }

    fn solution(&self) -> &Array1<T> {
        &self.x
    }
}

/// Column index of the largest `|matrix[row][j]|` for `j >= col_from`.
/// Ties keep the leftmost column.
fn max_abs_column<T: Scalar>(matrix: &Array2<T>, row: usize, col_from: usize) -> usize {
    let mut max_id = col_from;
    for j in (col_from + 1)..matrix.ncols() {
        if matrix[[row, j]].abs() > matrix[[row, max_id]].abs() {
            max_id = j;
        }
    }
    max_id
}

fn swap_columns<T: Scalar>(matrix: &mut Array2<T>, first: usize, second: usize) {
    if first == second {
        return;
    }
    for mut row in matrix.rows_mut() {
        row.swap(first, second);
    }
}

/// Zero column `pivot` below the diagonal, updating `rhs` alongside.
fn eliminate_below<T: Scalar>(matrix: &mut Array2<T>, rhs: &mut Array2<T>, pivot: usize) {
    let n = matrix.nrows();
    for i in (pivot + 1)..n {
        let multiplier = matrix[[i, pivot]] / matrix[[pivot, pivot]];

        for j in 0..matrix.ncols() {
            let above = matrix[[pivot, j]];
            matrix[[i, j]] -= above * multiplier;
        }

        let above = rhs[[pivot, 0]];
        rhs[[i, 0]] -= above * multiplier;
    }
}

/// Solve `A x = b` by Gaussian elimination.
///
/// Both buffers are working copies: on success `matrix` holds the
/// triangularised system (columns permuted) and `rhs` the eliminated
/// right-hand side. Clone them first if the originals are still needed.
///
/// # Errors
///
/// [`SolverError::InvalidInput`] if `matrix` is empty or not square, or if
/// `rhs` is not an `n x 1` column. Neither buffer is touched in that case.
///
/// # Example
///
/// ```
/// use math_linsys_solvers::gauss_solve;
/// use ndarray::array;
///
/// let mut a = array![[10.0_f64, -1.0, -1.0], [-1.0, 10.0, -1.0], [-1.0, -1.0, 10.0]];
/// let mut b = array![[8.0_f64], [8.0], [8.0]];
///
/// let solution = gauss_solve(&mut a, &mut b).unwrap();
/// for v in solution.x.iter() {
///     assert!((v - 1.0).abs() < 1e-9);
/// }
/// ```
pub fn gauss_solve<T: Scalar>(
    matrix: &mut Array2<T>,
    rhs: &mut Array2<T>,
) -> Result<GaussSolution<T>, SolverError> {
    validate_square_with_rhs(matrix, rhs)?;

    let n = matrix.nrows();
    let mut permutation: Vec<usize> = (0..n).collect();

    for i in 0..n {
        let max_id = max_abs_column(matrix, i, i);
        if max_id != i {
            log::debug!("gauss: step {i}, swapping columns {i} and {max_id}");
        }
        swap_columns(matrix, i, max_id);
        permutation.swap(i, max_id);
        eliminate_below(matrix, rhs, i);
    }

    let x = back_substitute(matrix, rhs, Some(&permutation))?;
    log::debug!("gauss: solved {n}x{n} system");

    Ok(GaussSolution {
        x,
        permutation,
        upper: matrix.clone(),
    })
}
