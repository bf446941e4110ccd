//! Errors returned by the direct solvers

use math_linsys_matrix::MatrixError;
use thiserror::Error;

/// Errors that can occur while solving a dense system
///
/// Numerical breakdown (zero pivot, ill-conditioning) is not an error: it
/// shows up as `Inf`/`NaN` in the solution and in the residual norms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Matrix or right-hand side rejected before any work was done
    #[error("invalid params: {0}")]
    InvalidInput(#[from] MatrixError),
    /// A matrix operation inside a factorization step failed
    #[error("{context}: {source}")]
    Step {
        context: &'static str,
        source: MatrixError,
    },
}

impl SolverError {
    pub(crate) fn step(context: &'static str) -> impl FnOnce(MatrixError) -> SolverError {
        move |source| SolverError::Step { context, source }
    }

    /// The underlying matrix error, whichever stage raised it.
    pub fn matrix_error(&self) -> &MatrixError {
        match self {
            SolverError::InvalidInput(e) => e,
            SolverError::Step { source, .. } => source,
        }
    }
}
