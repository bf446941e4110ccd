//! Matrix inverse through repeated Gaussian solves

use super::gauss::gauss_solve;
use crate::error::SolverError;
use math_linsys_matrix::{Scalar, deep_copy, validate_square_with_rhs};
use ndarray::Array2;

/// Invert `matrix` column by column: column `k` of the result solves
/// `A x = e_k` on a fresh copy of `A`.
///
/// # Errors
///
/// [`SolverError::InvalidInput`] if `matrix` is empty or not square.
pub fn gauss_inverse<T: Scalar>(matrix: &Array2<T>) -> Result<Array2<T>, SolverError> {
    let n = matrix.nrows();
    let mut unit = Array2::zeros((n, 1));
    validate_square_with_rhs(matrix, &unit)?;

    let mut inverse = Array2::zeros((n, n));
    for k in 0..n {
        unit[[k, 0]] = T::one();

        let mut a = deep_copy(matrix);
        let mut b = deep_copy(&unit);
        let solution = gauss_solve(&mut a, &mut b)?;

        unit[[k, 0]] = T::zero();
        inverse.column_mut(k).assign(&solution.x);
    }
    Ok(inverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use math_linsys_matrix::MatrixError;
    use ndarray::array;

    #[test]
    fn test_inverse_2x2() {
        let a = array![[4.0_f64, 7.0], [2.0, 6.0]];
        let inv = gauss_inverse(&a).unwrap();

        let expected = array![[0.6_f64, -0.7], [-0.2, 0.4]];
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(inv[[i, j]], expected[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_leaves_input_untouched() {
        let a = array![[2.0_f64, 1.0], [1.0, 2.0]];
        let copy = a.clone();
        gauss_inverse(&a).unwrap();
        assert_eq!(a, copy);
    }

    #[test]
    fn test_inverse_rejects_non_square() {
        let a = array![[1.0_f64, 2.0]];
        assert!(matches!(
            gauss_inverse(&a),
            Err(SolverError::InvalidInput(MatrixError::MatrixShape(_)))
        ));
        assert!(gauss_inverse(&Array2::<f64>::zeros((0, 0))).is_err());
    }
}
