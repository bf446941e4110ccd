//! JSON run configuration for the validation runner and the `linsys` binary

use math_linsys_matrix::{DEFAULT_PRECISION, DEFAULT_SYSTEM_SIZE, MatrixError, checked_size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Direct solution method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Gaussian elimination with row-relative column pivoting
    Gauss,
    /// Householder QR
    Householder,
}

impl Method {
    /// Every available method, in the order they are run by default
    pub const ALL: [Method; 2] = [Method::Gauss, Method::Householder];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Gauss => "gauss",
            Method::Householder => "householder",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors while loading, saving or checking a [`RunConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Size(#[from] MatrixError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Size of the generated system (signed so bad input can be reported)
    #[serde(default = "default_size")]
    pub size: i64,
    /// Methods to run, in order
    #[serde(default = "default_methods")]
    pub methods: Vec<Method>,
    /// Upper bound accepted for every accuracy metric
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Decimals in printed matrices
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Also invert the matrix with Gaussian elimination and check `A A^-1`
    #[serde(default = "default_true")]
    pub compute_inverse: bool,
    /// Print A, b and the factors, not just the norms
    #[serde(default = "default_true")]
    pub print_matrices: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            methods: default_methods(),
            tolerance: default_tolerance(),
            precision: default_precision(),
            compute_inverse: true,
            print_matrices: true,
        }
    }
}

fn default_size() -> i64 {
    DEFAULT_SYSTEM_SIZE as i64
}

fn default_methods() -> Vec<Method> {
    Method::ALL.to_vec()
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_true() -> bool {
    true
}

impl RunConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a JSON file. Invalid settings are rejected
    /// before anything is written.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        self.validate()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check the settings and return the system size as `usize`.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        let n = checked_size(self.size)?;
        if self.methods.is_empty() {
            return Err(ConfigError::Invalid("no method selected".to_string()));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.size, 15);
        assert_eq!(config.methods, vec![Method::Gauss, Method::Householder]);
        assert_eq!(config.validate().unwrap(), 15);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"size": 4, "methods": ["householder"]}"#).unwrap();
        assert_eq!(config.size, 4);
        assert_eq!(config.methods, vec![Method::Householder]);
        assert_eq!(config.tolerance, 1e-6);
        assert!(config.compute_inverse);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let parsed = serde_json::from_str::<RunConfig>(r#"{"methods": ["cholesky"]}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_rejects() {
        let mut config = RunConfig {
            size: -1,
            ..RunConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Size(MatrixError::InvalidSize(-1)))
        ));

        config.size = 3;
        config.methods.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.methods = vec![Method::Gauss];
        config.tolerance = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_to_file_rejects_invalid_config() {
        let dir = std::env::temp_dir().join(format!("linsys-config-{}", std::process::id()));
        let config = RunConfig {
            size: 0,
            ..RunConfig::default()
        };

        assert!(matches!(
            config.to_file(&dir),
            Err(ConfigError::Size(MatrixError::InvalidSize(0)))
        ));
        assert!(!dir.exists());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Gauss.to_string(), "gauss");
        assert_eq!(
            serde_json::to_string(&Method::Householder).unwrap(),
            "\"householder\""
        );
    }
}
