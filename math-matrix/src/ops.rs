//! Dense matrix arithmetic
//!
//! Operations come in two flavours:
//! - in place on the first operand ([`add`], [`sub`], [`scale`])
//! - returning a freshly allocated matrix ([`multiply`], [`transpose`],
//!   [`identity`], [`deep_copy`])
//!
//! [`multiply`] uses the plain triple loop on purpose: the solvers depend on
//! its summation order for reproducible results.

use crate::error::MatrixError;
use crate::scalar::Scalar;
use crate::shape::validate;
use ndarray::{Array1, Array2};

fn check_same_dim<T>(first: &Array2<T>, second: &Array2<T>) -> Result<(), MatrixError> {
    validate(first).map_err(|e| e.with_context("invalid first matrix"))?;
    validate(second).map_err(|e| e.with_context("invalid second matrix"))?;

    if first.dim() != second.dim() {
        return Err(MatrixError::shape(format!(
            "matrix must have equal size: {:?} vs {:?}",
            first.dim(),
            second.dim()
        )));
    }
    Ok(())
}

/// `first += second`, element-wise
pub fn add<T: Scalar>(first: &mut Array2<T>, second: &Array2<T>) -> Result<(), MatrixError> {
    check_same_dim(first, second)?;
    first.zip_mut_with(second, |a, &b| *a += b);
    Ok(())
}

/// `first -= second`, element-wise
pub fn sub<T: Scalar>(first: &mut Array2<T>, second: &Array2<T>) -> Result<(), MatrixError> {
    check_same_dim(first, second)?;
    first.zip_mut_with(second, |a, &b| *a -= b);
    Ok(())
}

/// Multiply every element by `k`
pub fn scale<T: Scalar>(matrix: &mut Array2<T>, k: T) {
    matrix.mapv_inplace(|v| v * k);
}

/// Matrix product `first * second`.
///
/// Fails with [`MatrixError::MatrixShape`] when an operand is empty or the
/// inner dimensions disagree. Overflow and NaN follow IEEE-754.
pub fn multiply<T: Scalar>(first: &Array2<T>, second: &Array2<T>) -> Result<Array2<T>, MatrixError> {
    validate(first).map_err(|e| e.with_context("invalid first matrix"))?;
    validate(second).map_err(|e| e.with_context("invalid second matrix"))?;

    let (m, inner) = first.dim();
    let (inner2, n) = second.dim();
    if inner != inner2 {
        return Err(MatrixError::shape(format!(
            "these matrices cannot be multiplied: {m}x{inner} by {inner2}x{n}"
        )));
    }

    let mut product = Array2::zeros((m, n));
    for i in 0..m {
        for j in 0..n {
            let mut acc = T::zero();
            for k in 0..inner {
                acc += first[[i, k]] * second[[k, j]];
            }
            product[[i, j]] = acc;
        }
    }
    Ok(product)
}

/// Transposed copy: an `m x n` input gives an `n x m` result.
pub fn transpose<T: Scalar>(matrix: &Array2<T>) -> Result<Array2<T>, MatrixError> {
    validate(matrix)?;
    let (m, n) = matrix.dim();
    Ok(Array2::from_shape_fn((n, m), |(j, i)| matrix[[i, j]]))
}

/// `n x n` identity. Fails with [`MatrixError::InvalidSize`] when `n == 0`.
pub fn identity<T: Scalar>(n: usize) -> Result<Array2<T>, MatrixError> {
    if n == 0 {
        return Err(MatrixError::InvalidSize(0));
    }
    Ok(Array2::eye(n))
}

/// Independent copy sharing no storage with `matrix`.
pub fn deep_copy<T: Scalar>(matrix: &Array2<T>) -> Array2<T> {
    matrix.to_owned()
}

/// Wrap a slice as an `n x 1` column.
pub fn column_from_slice<T: Scalar>(values: &[T]) -> Array2<T> {
    Array2::from_shape_fn((values.len(), 1), |(i, _)| values[i])
}

/// First column of `column` as a vector.
pub fn column_to_vec<T: Scalar>(column: &Array2<T>) -> Array1<T> {
    if column.ncols() == 0 {
        return Array1::zeros(0);
    }
    column.column(0).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_add_sub() {
        let mut a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let b = array![[0.5_f64, 0.5], [1.0, -1.0]];

        add(&mut a, &b).unwrap();
        assert_eq!(a, array![[1.5, 2.5], [4.0, 3.0]]);

        sub(&mut a, &b).unwrap();
        assert_eq!(a, array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_add_dimension_mismatch_leaves_operand() {
        let mut a = array![[1.0_f64, 2.0]];
        let b = array![[1.0_f64], [2.0]];

        let err = add(&mut a, &b).unwrap_err();
        assert!(matches!(err, MatrixError::MatrixShape(_)));
        assert_eq!(a, array![[1.0, 2.0]]);
    }

    #[test]
    fn test_sub_names_invalid_operand() {
        let mut a = array![[1.0_f64]];
        let empty = Array2::<f64>::zeros((0, 1));

        let err = sub(&mut a, &empty).unwrap_err();
        assert_eq!(
            err,
            MatrixError::MatrixShape("invalid second matrix: matrix is empty".to_string())
        );
    }

    #[test]
    fn test_scale() {
        let mut a = array![[1.0_f64, -2.0], [0.0, 4.0]];
        scale(&mut a, -0.5);
        assert_eq!(a, array![[-0.5, 1.0], [-0.0, -2.0]]);
    }

    #[test]
    fn test_multiply() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![[7.0_f64, 8.0], [9.0, 10.0], [11.0, 12.0]];

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c, array![[58.0, 64.0], [139.0, 154.0]]);
        assert_eq!(c, a.dot(&b));
    }

    #[test]
    fn test_multiply_inner_mismatch() {
        let a = array![[1.0_f64, 2.0]];
        assert!(matches!(
            multiply(&a, &a),
            Err(MatrixError::MatrixShape(_))
        ));
    }

    #[test]
    fn test_multiply_propagates_nan() {
        let a = array![[f64::NAN, 1.0]];
        let b = array![[1.0_f64], [1.0]];
        assert!(multiply(&a, &b).unwrap()[[0, 0]].is_nan());
    }

    #[test]
    fn test_transpose() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let t = transpose(&a).unwrap();
        assert_eq!(t.dim(), (3, 2));
        assert_eq!(t, array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
    }

    #[test]
    fn test_identity() {
        let eye: Array2<f64> = identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(eye[[i, j]], expected);
            }
        }
        assert_eq!(identity::<f64>(0), Err(MatrixError::InvalidSize(0)));
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let mut b = deep_copy(&a);
        b[[0, 0]] = 100.0;
        assert_eq!(a[[0, 0]], 1.0);
        assert_ne!(a.as_ptr(), b.as_ptr());
    }

    #[test]
    fn test_column_helpers() {
        let col = column_from_slice(&[1.0_f64, 2.0, 3.0]);
        assert_eq!(col.dim(), (3, 1));
        assert_eq!(column_to_vec(&col), array![1.0, 2.0, 3.0]);
    }
}
