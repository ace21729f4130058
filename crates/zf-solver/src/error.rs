//! Error types for density solves.

use thiserror::Error;
use zf_aga8::Aga8Error;

/// Errors that abort a solve. Non-convergence is not an error; it is
/// reported through [`crate::ZSolution::converged`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Equation of state error: {0}")]
    Model(#[from] Aga8Error),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    /// Caller-side mistakes (bad composition, T, P or configuration), as
    /// opposed to failures inside the equation of state.
    pub fn is_input_error(&self) -> bool {
        match self {
            SolverError::InvalidConfig { .. } | SolverError::InvalidInput { .. } => true,
            SolverError::Model(Aga8Error::InvalidInput { .. }) => true,
            SolverError::Model(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_input_errors_are_input_errors() {
        let err: SolverError = Aga8Error::InvalidInput {
            what: "all mole fractions are zero".into(),
        }
        .into();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("all mole fractions are zero"));
    }

    #[test]
    fn computation_errors_are_not_input_errors() {
        let err: SolverError = Aga8Error::Computation {
            stage: "U0",
            term: None,
            base: -1.0,
            exponent: 0.2,
        }
        .into();
        assert!(!err.is_input_error());
    }
}
