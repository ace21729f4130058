//! Error types for the zf-app service layer.

use std::path::PathBuf;
use zf_aga8::Aga8Error;
use zf_solver::SolverError;

use crate::units::UnitError;

/// Application error type shared by the CLI and any other front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read job file: {path}")]
    JobFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read coefficient file: {path}")]
    CoefficientFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Job file is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Job validation failed: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    #[error("Equation of state error: {0}")]
    Model(#[from] Aga8Error),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for zf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Errors the caller can fix by changing inputs (HTTP 400 class).
    pub fn is_input_error(&self) -> bool {
        match self {
            AppError::Validation(_)
            | AppError::InvalidInput(_)
            | AppError::Unit(_)
            | AppError::Yaml(_) => true,
            AppError::Model(err) => matches!(err, Aga8Error::InvalidInput { .. }),
            AppError::Solver(err) => err.is_input_error(),
            AppError::JobFileRead { .. }
            | AppError::CoefficientFileRead { .. }
            | AppError::Json(_) => false,
        }
    }
}
