//! Error type shared by the matrix utilities and the solvers built on them

use thiserror::Error;

/// Errors raised while checking or combining dense matrices.
///
/// Every variant is produced before any element is written, so an `Err`
/// always leaves the operands untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Empty, ragged, non-square or size-mismatched matrix
    #[error("{0}")]
    MatrixShape(String),
    /// Right-hand side with the wrong row count or more than one column
    #[error("{0}")]
    RhsShape(String),
    /// Non-positive size requested for a generated matrix
    #[error("matrix size must be positive, got {0}")]
    InvalidSize(i64),
}

impl MatrixError {
    /// Prefix the message with `context`, keeping the variant.
    pub fn with_context(self, context: &str) -> Self {
        match self {
            MatrixError::MatrixShape(msg) => MatrixError::MatrixShape(format!("{context}: {msg}")),
            MatrixError::RhsShape(msg) => MatrixError::RhsShape(format!("{context}: {msg}")),
            other => other,
        }
    }

    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        MatrixError::MatrixShape(msg.into())
    }

    pub(crate) fn rhs(msg: impl Into<String>) -> Self {
        MatrixError::RhsShape(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keeps_variant() {
        let err = MatrixError::shape("matrix is empty").with_context("invalid first matrix");
        assert_eq!(
            err,
            MatrixError::MatrixShape("invalid first matrix: matrix is empty".to_string())
        );

        let err = MatrixError::InvalidSize(-1).with_context("ignored");
        assert_eq!(err, MatrixError::InvalidSize(-1));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            MatrixError::InvalidSize(0).to_string(),
            "matrix size must be positive, got 0"
        );
        assert_eq!(
            MatrixError::rhs("right-hand side vector must be a column").to_string(),
            "right-hand side vector must be a column"
        );
    }
}
