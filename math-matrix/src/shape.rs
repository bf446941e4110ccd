//! Shape checks and construction of matrices from nested rows

use crate::error::MatrixError;
use crate::scalar::Scalar;
use ndarray::Array2;

/// Build a matrix from nested rows.
///
/// Fails with [`MatrixError::MatrixShape`] when there are no rows, when the
/// first row is empty, or when any row length differs from the first one.
pub fn from_rows<T: Scalar>(rows: Vec<Vec<T>>) -> Result<Array2<T>, MatrixError> {
    let n_rows = rows.len();
    if n_rows == 0 {
        return Err(MatrixError::shape("matrix is empty"));
    }

    let n_cols = rows[0].len();
    if rows.iter().any(|row| row.len() != n_cols) {
        return Err(MatrixError::shape("matrix is not rectangular"));
    }
    if n_cols == 0 {
        return Err(MatrixError::shape("matrix is empty"));
    }

    let flat: Vec<T> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((n_rows, n_cols), flat).map_err(|e| MatrixError::shape(e.to_string()))
}

/// Reject matrices with zero rows or zero columns.
pub fn validate<T>(matrix: &Array2<T>) -> Result<(), MatrixError> {
    if matrix.nrows() == 0 || matrix.ncols() == 0 {
        return Err(MatrixError::shape("matrix is empty"));
    }
    Ok(())
}

/// Check that `matrix` is square and `rhs` is a column of matching height.
///
/// The matrix is checked first, so a non-square matrix paired with a bad
/// right-hand side reports [`MatrixError::MatrixShape`].
pub fn validate_square_with_rhs<T>(matrix: &Array2<T>, rhs: &Array2<T>) -> Result<(), MatrixError> {
    validate(matrix)?;

    let n = matrix.nrows();
    if matrix.ncols() != n {
        return Err(MatrixError::shape(format!(
            "matrix is not square: {}x{}",
            n,
            matrix.ncols()
        )));
    }
    if rhs.nrows() != n {
        return Err(MatrixError::rhs(format!(
            "right-hand side vector must have the same size as matrix: expected {}, got {}",
            n,
            rhs.nrows()
        )));
    }
    if rhs.ncols() != 1 {
        return Err(MatrixError::rhs("right-hand side vector must be a column"));
    }
    Ok(())
}

/// Convert a signed size from user input, rejecting `n <= 0`.
pub fn checked_size(n: i64) -> Result<usize, MatrixError> {
    if n <= 0 {
        return Err(MatrixError::InvalidSize(n));
    }
    usize::try_from(n).map_err(|_| MatrixError::InvalidSize(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_rows() {
        let m = from_rows(vec![vec![1.0_f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.dim(), (2, 3));
        assert_eq!(m[[1, 2]], 6.0);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(matches!(
            from_rows::<f64>(vec![]),
            Err(MatrixError::MatrixShape(_))
        ));
        assert!(matches!(
            from_rows::<f64>(vec![vec![], vec![]]),
            Err(MatrixError::MatrixShape(_))
        ));
        assert!(matches!(
            from_rows(vec![vec![1.0_f64, 2.0], vec![3.0]]),
            Err(MatrixError::MatrixShape(_))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(validate(&array![[1.0_f64]]).is_ok());
        assert!(validate(&Array2::<f64>::zeros((0, 0))).is_err());
        assert!(validate(&Array2::<f64>::zeros((3, 0))).is_err());
    }

    #[test]
    fn test_validate_square_with_rhs() {
        let a = Array2::<f64>::zeros((3, 3));
        assert!(validate_square_with_rhs(&a, &Array2::zeros((3, 1))).is_ok());

        assert!(matches!(
            validate_square_with_rhs(&Array2::<f64>::zeros((2, 3)), &Array2::zeros((2, 1))),
            Err(MatrixError::MatrixShape(_))
        ));
        assert!(matches!(
            validate_square_with_rhs(&a, &Array2::zeros((2, 1))),
            Err(MatrixError::RhsShape(_))
        ));
        assert!(matches!(
            validate_square_with_rhs(&a, &Array2::zeros((3, 2))),
            Err(MatrixError::RhsShape(_))
        ));
        assert!(matches!(
            validate_square_with_rhs(&Array2::<f64>::zeros((0, 0)), &Array2::zeros((0, 1))),
            Err(MatrixError::MatrixShape(_))
        ));
    }

    #[test]
    fn test_square_check_runs_before_rhs_check() {
        // rhs matches the column count but not the row count
        let wide = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            validate_square_with_rhs(&wide, &Array2::zeros((3, 1))),
            Err(MatrixError::MatrixShape(_))
        ));
        assert!(matches!(
            validate_square_with_rhs(&wide, &Array2::zeros((3, 2))),
            Err(MatrixError::MatrixShape(_))
        ));
    }

    #[test]
    fn test_checked_size() {
        assert_eq!(checked_size(4), Ok(4));
        assert_eq!(checked_size(0), Err(MatrixError::InvalidSize(0)));
        assert_eq!(checked_size(-1), Err(MatrixError::InvalidSize(-1)));
    }
}
