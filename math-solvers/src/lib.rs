//! Direct solvers for small dense linear systems
//!
//! This crate solves `A x = b` for square, dense, real matrices with two
//! classical methods and checks how accurate the answers are.
//!
//! # Features
//!
//! - **Gaussian elimination**: pivot searched along the current row, columns
//!   swapped, permutation tracked for back-substitution
//! - **Householder QR**: explicit reflectors, returns `Q`, `R` and `x`
//! - **Inverse**: one Gaussian solve per unit column
//! - **Validation**: residual, reconstruction, orthogonality and inverse
//!   norms collected in serialisable reports
//! - **Generic scalars**: `f64` and `f32` through [`Scalar`]
//!
//! Solvers take the matrix and right-hand side as `&mut` working copies and
//! transform them in place. Shape errors are reported before anything is
//! written; numerical breakdown is not detected and shows up as `Inf`/`NaN`.
//!
//! # Example
//!
//! ```
//! use math_linsys_solvers::{generate_system, householder_solve, residual_norm};
//!
//! let (a, b) = generate_system::<f64>(5).unwrap();
//! let qr = householder_solve(&mut a.clone(), &mut b.clone()).unwrap();
//! assert!(residual_norm(&a, &b, &qr.x).unwrap() < 1e-10);
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod traits;
pub mod validation;

pub use config::{ConfigError, Method, RunConfig};
pub use error::SolverError;
pub use traits::LinearSystemSolution;

// Re-export direct solvers
pub use direct::{
    GaussSolution, QrSolution, back_substitute, gauss_inverse, gauss_solve, householder_solve,
};

// Re-export validation
pub use validation::{
    GaussRun, HouseholderRun, ValidationReport, validate_gauss, validate_householder,
};

// Re-export the matrix layer the solvers are written against
pub use math_linsys_matrix::{
    DEFAULT_PRECISION, DEFAULT_SYSTEM_SIZE, MatrixError, Scalar, format_column, format_matrix,
    format_row, generate_system, identity, matrix_diff_norm, multiply, residual_norm, transpose,
};
