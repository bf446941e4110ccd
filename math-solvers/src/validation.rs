//! Accuracy checks around the direct solvers
//!
//! Each runner solves on copies of the caller's system and measures:
//! - `|A x - b|_inf` for every method
//! - `||I - A A^-1||` for Gaussian elimination (when inversion is enabled)
//! - `||A - Q R||` and `||I - Q Q^T||` for Householder QR
//!
//! All matrix norms are max absolute row sums. A metric that is `NaN`, `Inf`
//! or not below the tolerance fails the report.

use crate::config::{Method, RunConfig};
use crate::direct::{GaussSolution, QrSolution, gauss_inverse, gauss_solve, householder_solve};
use crate::error::SolverError;
use crate::traits::LinearSystemSolution;
use math_linsys_matrix::{Scalar, identity, matrix_diff_norm, multiply, residual_norm, transpose};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Outcome of one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub method: Method,
    pub size: usize,
    /// Wall time of the solve itself, in milliseconds
    pub duration_ms: f64,
    /// `|A x - b|_inf`
    pub residual_norm: f64,
    /// `||A - Q R||`, Householder only
    pub reconstruction_error: Option<f64>,
    /// `||I - Q Q^T||`, Householder only
    pub orthogonality_error: Option<f64>,
    /// `||I - A A^-1||`, Gauss only
    pub inverse_error: Option<f64>,
    pub tolerance: f64,
    pub passed: bool,
}

impl ValidationReport {
    fn metrics(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(self.residual_norm)
            .chain(self.reconstruction_error)
            .chain(self.orthogonality_error)
            .chain(self.inverse_error)
    }

    fn evaluate(mut self) -> Self {
        let tolerance = self.tolerance;
        let passed = self.metrics().all(|m| m.is_finite() && m < tolerance);
        self.passed = passed;
        if self.passed {
            log::info!(
                "{}: n = {}, residual {:e}, passed",
                self.method,
                self.size,
                self.residual_norm
            );
        } else {
            log::warn!(
                "{}: n = {}, residual {:e}, FAILED (tolerance {:e})",
                self.method,
                self.size,
                self.residual_norm,
                tolerance
            );
        }
        self
    }
}

/// Gaussian solve plus the optional inverse
#[derive(Debug, Clone)]
pub struct GaussRun<T: Scalar> {
    pub solution: GaussSolution<T>,
    pub inverse: Option<Array2<T>>,
    pub report: ValidationReport,
}

/// Householder solve with its factors
#[derive(Debug, Clone)]
pub struct HouseholderRun<T: Scalar> {
    pub solution: QrSolution<T>,
    pub report: ValidationReport,
}

fn residual<T, S>(matrix: &Array2<T>, rhs: &Array2<T>, solution: &S) -> Result<f64, SolverError>
where
    T: Scalar,
    S: LinearSystemSolution<T>,
{
    Ok(residual_norm(matrix, rhs, solution.solution())?.as_f64())
}

fn identity_error<T: Scalar>(n: usize, product: Array2<T>) -> Result<f64, SolverError> {
    Ok(matrix_diff_norm(identity(n)?, product)?.as_f64())
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e3
}

/// Solve `matrix x = rhs` by Gaussian elimination and check the result.
///
/// `matrix` and `rhs` are left untouched.
pub fn validate_gauss<T: Scalar>(
    config: &RunConfig,
    matrix: &Array2<T>,
    rhs: &Array2<T>,
) -> Result<GaussRun<T>, SolverError> {
    let start = Instant::now();
    let solution = gauss_solve(&mut matrix.clone(), &mut rhs.clone())?;
    let duration_ms = elapsed_ms(start);

    let residual_norm = residual(matrix, rhs, &solution)?;

    let (inverse, inverse_error) = if config.compute_inverse {
        let inverse = gauss_inverse(matrix)?;
        let product = multiply(matrix, &inverse)?;
        let error = identity_error(matrix.nrows(), product)?;
        (Some(inverse), Some(error))
    } else {
        (None, None)
    };

    let report = ValidationReport {
        method: solution.method(),
        size: solution.size(),
        duration_ms,
        residual_norm,
        reconstruction_error: None,
        orthogonality_error: None,
        inverse_error,
        tolerance: config.tolerance,
        passed: false,
    }
    .evaluate();

    Ok(GaussRun {
        solution,
        inverse,
        report,
    })
}

/// Solve `matrix x = rhs` by Householder QR and check `x`, `Q R` and `Q`.
///
/// `matrix` and `rhs` are left untouched.
pub fn validate_householder<T: Scalar>(
    config: &RunConfig,
    matrix: &Array2<T>,
    rhs: &Array2<T>,
) -> Result<HouseholderRun<T>, SolverError> {
    let start = Instant::now();
    let solution = householder_solve(&mut matrix.clone(), &mut rhs.clone())?;
    let duration_ms = elapsed_ms(start);

    let residual_norm = residual(matrix, rhs, &solution)?;

    let qr = multiply(&solution.q, &solution.r)?;
    let reconstruction_error = matrix_diff_norm(matrix.clone(), qr)?.as_f64();

    let qqt = multiply(&solution.q, &transpose(&solution.q)?)?;
    let orthogonality_error = identity_error(matrix.nrows(), qqt)?;

    let report = ValidationReport {
        method: solution.method(),
        size: solution.size(),
        duration_ms,
        residual_norm,
        reconstruction_error: Some(reconstruction_error),
        orthogonality_error: Some(orthogonality_error),
        inverse_error: None,
        tolerance: config.tolerance,
        passed: false,
    }
    .evaluate();

    Ok(HouseholderRun { solution, report })
}
