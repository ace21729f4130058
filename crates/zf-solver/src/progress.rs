//! Per-iteration progress reporting.
//!
//! Observers are passed as `Option<&mut dyn FnMut(ProgressEvent)>` and called
//! synchronously from the iteration loop. They see copies of the solver state
//! and cannot change it; an observer that needs to do slow work (printing,
//! plotting) should throttle itself.

use serde::Serialize;

/// Caveat attached to a solve result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolveWarning {
    /// Bisection precondition P(0) < P0 < P(pm_max) does not hold.
    TargetOutsideBracket {
        pressure_low: f64,
        pressure_high: f64,
    },
    /// Linear scan starts at a pressure already above the target.
    SeedAboveTarget { seed_pressure: f64 },
    /// One scan step moves the pressure by more than the tolerance window.
    CoarseStep { pressure_step: f64 },
}

impl std::fmt::Display for SolveWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveWarning::TargetOutsideBracket {
                pressure_low,
                pressure_high,
            } => write!(
                f,
                "target pressure outside initial bracket [{pressure_low}, {pressure_high}] MPa; result may be unreliable"
            ),
            SolveWarning::SeedAboveTarget { seed_pressure } => write!(
                f,
                "scan seed pressure {seed_pressure} MPa is already above the target"
            ),
            SolveWarning::CoarseStep { pressure_step } => write!(
                f,
                "scan step changes pressure by {pressure_step} MPa, wider than the tolerance window"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    Warning(SolveWarning),
    Iteration {
        /// 1-based
        index: usize,
        /// Current molar density estimate [mol/L]
        density: f64,
        /// P at `density` [MPa]
        pressure: f64,
        /// P − P0 [MPa]
        residual: f64,
    },
    Finished {
        converged: bool,
        iterations: usize,
        density: f64,
    },
}

pub(crate) fn emit(progress: &mut Option<&mut dyn FnMut(ProgressEvent)>, event: ProgressEvent) {
    if let Some(cb) = progress.as_deref_mut() {
        cb(event);
    }
}

/// Lend the observer to a nested call without giving it up.
pub(crate) fn reborrow<'a>(
    progress: &'a mut Option<&mut dyn FnMut(ProgressEvent)>,
) -> Option<&'a mut dyn FnMut(ProgressEvent)> {
    match progress {
        Some(cb) => Some(&mut **cb),
        None => None,
    }
}
