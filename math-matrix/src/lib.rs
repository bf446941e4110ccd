//! Dense matrix utilities for direct linear solvers
//!
//! This crate is the leaf layer under the Gaussian and Householder solvers.
//! Matrices are `ndarray::Array2<T>`; column vectors (right-hand sides,
//! reflector vectors) are `Array2<T>` with a single column.
//!
//! # Features
//!
//! - **Shape checks**: [`validate`], [`validate_square_with_rhs`], [`from_rows`]
//! - **Arithmetic**: [`add`], [`sub`], [`scale`], [`multiply`], [`transpose`], [`identity`]
//! - **Norms**: [`column_norm`], [`residual_norm`], [`matrix_diff_norm`]
//! - **Test systems**: [`generate_system`]
//! - **Text output**: [`format_matrix`], [`format_column`], [`format_row`]
//!
//! # Example
//!
//! ```
//! use math_linsys_matrix::{generate_system, identity, multiply, matrix_diff_norm};
//!
//! let (a, _b) = generate_system::<f64>(4).unwrap();
//! let eye = identity::<f64>(4).unwrap();
//! let same = multiply(&a, &eye).unwrap();
//! assert_eq!(matrix_diff_norm(a, same).unwrap(), 0.0);
//! ```

mod error;
mod format;
mod generate;
mod norms;
mod ops;
mod scalar;
mod shape;

pub use error::MatrixError;
pub use format::{DEFAULT_PRECISION, format_column, format_matrix, format_row};
pub use generate::{DEFAULT_SYSTEM_SIZE, generate_system};
pub use norms::{column_norm, matrix_diff_norm, residual_norm};
pub use ops::{
    add, column_from_slice, column_to_vec, deep_copy, identity, multiply, scale, sub, transpose,
};
pub use scalar::{Scalar, nan_max};
pub use shape::{checked_size, from_rows, validate, validate_square_with_rhs};
