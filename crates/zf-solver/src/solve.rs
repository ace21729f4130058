//! Solve entry point and result assembly.

use crate::bisection::bisect;
use crate::config::{SolveMethod, SolverConfig};
use crate::error::{SolverError, SolverResult};
use crate::progress::{ProgressEvent, SolveWarning, emit, reborrow};
use crate::scan::linear_scan;
use serde::Serialize;
use zf_aga8::{CoefficientTable, Composition, MixtureParams, PressurePoint};
use zf_core::constants::R_MPA_L_PER_MOL_K;

/// Outcome of a root-finding strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct RootResult {
    /// Best molar density estimate [mol/L]
    pub density: f64,
    /// Pressure function at `density`
    pub point: PressurePoint,
    /// Pressure evaluations inside the iteration loop
    pub iterations: usize,
    pub converged: bool,
    pub warnings: Vec<SolveWarning>,
}

/// Compressibility factor and derived densities at (T, P0).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZSolution {
    /// Temperature [K]
    pub temperature: f64,
    /// Target pressure P0 [MPa]
    pub pressure: f64,
    /// Z = P0 / (pm·R·T)
    pub z: f64,
    /// pm [mol/L]
    pub molar_density: f64,
    /// pr = K0³·pm
    pub reduced_density: f64,
    /// ρ = M0·pm [kg/m³]
    pub mass_density: f64,
    /// M0 [g/mol]
    pub molar_mass: f64,
    /// P(pm) [MPa]
    pub pressure_calculated: f64,
    pub iterations: usize,
    /// False when the iteration cap was reached; all fields then describe the
    /// best estimate, not a solution.
    pub converged: bool,
    pub warnings: Vec<SolveWarning>,
    pub method: SolveMethod,
}

/// Solve for Z at temperature [K] and pressure [MPa].
pub fn solve(
    table: &CoefficientTable,
    temperature: f64,
    pressure: f64,
    composition: &Composition,
    config: &SolverConfig,
) -> SolverResult<ZSolution> {
    solve_with_progress(table, temperature, pressure, composition, config, None)
}

/// [`solve`] with a per-iteration observer.
pub fn solve_with_progress(
    table: &CoefficientTable,
    temperature: f64,
    pressure: f64,
    composition: &Composition,
    config: &SolverConfig,
    mut progress: Option<&mut dyn FnMut(ProgressEvent)>,
) -> SolverResult<ZSolution> {
    config.validate()?;
    for (what, value) in [("temperature", temperature), ("pressure", pressure)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(SolverError::InvalidInput {
                what: format!("{what} must be positive and finite, got {value}"),
            });
        }
    }

    let params = MixtureParams::compute(table, composition, temperature)?;
    let pressure_at = |pm: f64| params.pressure(pm);

    let root = match config.method {
        SolveMethod::Bisection { pm_max } => bisect(
            pressure_at,
            pressure,
            pm_max,
            config.tolerance,
            config.max_iterations,
            reborrow(&mut progress),
        )?,
        SolveMethod::LinearScan { seed, step } => linear_scan(
            pressure_at,
            pressure,
            seed,
            step,
            config.tolerance,
            config.max_iterations,
            reborrow(&mut progress),
        )?,
    };

    emit(
        &mut progress,
        ProgressEvent::Finished {
            converged: root.converged,
            iterations: root.iterations,
            density: root.density,
        },
    );

    if root.converged {
        tracing::debug!(
            method = config.method.label(),
            iterations = root.iterations,
            density = root.density,
            "density solve converged"
        );
    } else {
        tracing::warn!(
            method = config.method.label(),
            iterations = root.iterations,
            density = root.density,
            residual = root.point.pressure - pressure,
            "density solve hit the iteration cap without converging"
        );
    }

    let molar_mass = composition.molar_mass(table);
    Ok(ZSolution {
        temperature,
        pressure,
        z: pressure / (root.density * R_MPA_L_PER_MOL_K * temperature),
        molar_density: root.density,
        reduced_density: root.point.reduced_density,
        mass_density: molar_mass * root.density,
        molar_mass,
        pressure_calculated: root.point.pressure,
        iterations: root.iterations,
        converged: root.converged,
        warnings: root.warnings,
        method: config.method,
    })
}
