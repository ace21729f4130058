//! Density root-finder for the AGA8-92DC equation of state.
//!
//! Inverts the pressure function P(ρm) to find the molar density at a target
//! pressure, then assembles the compressibility factor and derived densities.
//! Two strategies are available: bisection over a configurable bracket (the
//! default) and a fixed-step linear scan kept as a cross-check.

pub mod bisection;
pub mod config;
pub mod error;
pub mod progress;
pub mod scan;
pub mod solve;

pub use bisection::bisect;
pub use config::{SolveMethod, SolverConfig};
pub use error::{SolverError, SolverResult};
pub use progress::ProgressEvent;
pub use scan::linear_scan;
pub use solve::{RootResult, ZSolution, solve, solve_with_progress};
