//! Direct solvers for dense linear systems
//!
//! This module provides:
//! - [`gauss_solve`]: Gaussian elimination with row-relative column pivoting
//! - [`householder_solve`]: Householder QR, returning `Q`, `R` and the solution
//! - [`gauss_inverse`]: inverse built from one Gaussian solve per column
//! - [`back_substitute`]: the triangular solve shared by both methods

mod gauss;
mod householder;
mod inverse;
mod substitution;

pub use gauss::{GaussSolution, gauss_solve};
pub use householder::{QrSolution, householder_solve};
pub use inverse::gauss_inverse;
pub use substitution::back_substitute;
