//! Solver configuration.

use crate::error::{SolverError, SolverResult};
use serde::{Deserialize, Serialize};

/// Root-finding strategy and its strategy-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolveMethod {
    /// Bisection over [0, pm_max] mol/L.
    ///
    /// `pm_max` must put P(pm_max) above every target of interest. The default
    /// of 100 mol/L reaches several hundred MPa for pipeline gases between
    /// 250 K and 450 K; heavy or cold mixtures may need a different value.
    Bisection { pm_max: f64 },
    /// Fixed-step forward scan starting at `seed` mol/L.
    ///
    /// Only converges if the pressure change per step fits inside the
    /// tolerance window, i.e. step·dP/dpm < 2·tolerance, and the target lies
    /// above P(seed).
    LinearScan { seed: f64, step: f64 },
}

impl SolveMethod {
    pub fn label(&self) -> &'static str {
        match self {
            SolveMethod::Bisection { .. } => "bisection",
            SolveMethod::LinearScan { .. } => "linear scan",
        }
    }
}

/// Tolerance, iteration cap and strategy for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Absolute pressure tolerance [MPa]
    pub tolerance: f64,
    /// Maximum pressure evaluations inside the iteration loop
    pub max_iterations: usize,
    pub method: SolveMethod,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iterations: 1000,
            method: SolveMethod::Bisection { pm_max: 100.0 },
        }
    }
}

impl SolverConfig {
    /// Linear scan defaults: seed 0.01 mol/L, step 1e-6 mol/L.
    pub fn linear_scan() -> Self {
        Self {
            tolerance: 1e-5,
            max_iterations: 10_000_000,
            method: SolveMethod::LinearScan {
                seed: 0.01,
                step: 1e-6,
            },
        }
    }

    pub fn validate(&self) -> SolverResult<()> {
        positive(self.tolerance, "tolerance")?;
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig {
                what: "max_iterations must be at least 1".to_string(),
            });
        }
        match self.method {
            SolveMethod::Bisection { pm_max } => positive(pm_max, "pm_max"),
            SolveMethod::LinearScan { seed, step } => {
                positive(seed, "seed")?;
                positive(step, "step")
            }
        }
    }
}

fn positive(value: f64, what: &str) -> SolverResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SolverError::InvalidConfig {
            what: format!("{what} must be positive and finite, got {value}"),
        })
    }
}
