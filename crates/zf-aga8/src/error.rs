//! Equation-of-state errors.

use thiserror::Error;
use zf_core::CoreError;

/// Result type for equation-of-state operations.
pub type Aga8Result<T> = Result<T, Aga8Error>;

/// Errors raised while building tables or evaluating the equation of state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Aga8Error {
    /// Malformed composition, non-positive temperature, bad density argument.
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    /// A power with a negative base and non-integer exponent (or an overflow)
    /// inside the mixture or pressure sums.
    #[error(
        "Computation error in {stage}{}: {base}^{exponent} is not a finite real number",
        term_label(.term)
    )]
    Computation {
        stage: &'static str,
        term: Option<usize>,
        base: f64,
        exponent: f64,
    },

    /// The assembled result is NaN or infinite.
    #[error("Non-finite {what} at molar density {density} mol/L: {value}")]
    NonFinite {
        what: &'static str,
        density: f64,
        value: f64,
    },

    /// Table dimensions or values are unusable. Raised at load, never per call.
    #[error("Coefficient table error: {what}")]
    Table { what: String },
}

fn term_label(term: &Option<usize>) -> String {
    match term {
        Some(n) => format!(" (term index {n})"),
        None => String::new(),
    }
}

impl From<CoreError> for Aga8Error {
    fn from(err: CoreError) -> Self {
        Aga8Error::InvalidInput {
            what: err.to_string(),
        }
    }
}

impl Aga8Error {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        Aga8Error::InvalidInput { what: what.into() }
    }

    pub(crate) fn table(what: impl Into<String>) -> Self {
        Aga8Error::Table { what: what.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computation_error_names_term() {
        let err = Aga8Error::Computation {
            stage: "second virial",
            term: Some(7),
            base: -0.5,
            exponent: 0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("second virial"));
        assert!(msg.contains("term index 7"));
        assert!(msg.contains("-0.5"));
    }

    #[test]
    fn computation_error_without_term() {
        let err = Aga8Error::Computation {
            stage: "U0",
            term: None,
            base: -1.0,
            exponent: 0.2,
        };
        assert!(!err.to_string().contains("term index"));
    }

    #[test]
    fn core_error_becomes_invalid_input() {
        let err: Aga8Error = CoreError::NotPositive {
            what: "temperature",
            value: -1.0,
        }
        .into();
        assert!(matches!(err, Aga8Error::InvalidInput { .. }));
        assert!(err.to_string().contains("temperature"));
    }
}
