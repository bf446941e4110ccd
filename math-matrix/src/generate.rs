//! Deterministic test systems
//!
//! The system depends only on its size:
//!
//! - `A[i][i] = 5 (i + 1)`
//! - `A[i][j] = -((i + 1) + sqrt(j + 1))` for `i != j`
//! - `b[i] = 3 sqrt(i + 1)`

use crate::error::MatrixError;
use crate::scalar::Scalar;
use ndarray::Array2;

/// Size used by the `linsys` binary when nothing else is requested
pub const DEFAULT_SYSTEM_SIZE: usize = 15;

/// Generate the `n x n` test matrix and its `n x 1` right-hand side.
pub fn generate_system<T: Scalar>(n: usize) -> Result<(Array2<T>, Array2<T>), MatrixError> {
    if n == 0 {
        return Err(MatrixError::InvalidSize(0));
    }

    let matrix = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            T::lit(5.0 * (i + 1) as f64)
        } else {
            T::lit(-((i + 1) as f64 + ((j + 1) as f64).sqrt()))
        }
    });
    let rhs = Array2::from_shape_fn((n, 1), |(i, _)| T::lit(3.0 * ((i + 1) as f64).sqrt()));

    Ok((matrix, rhs))
}
