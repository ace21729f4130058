//! Parameter sweeps over temperature or pressure.
//!
//! Points are independent solves and run on the rayon pool. Each point keeps
//! its own result so one failure does not hide the rest of the curve.

use crate::error::{AppError, AppResult};
use crate::units::{Quantity, parse_quantity};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use zf_aga8::{CoefficientTable, Composition};
use zf_solver::{SolverConfig, ZSolution, solve};

/// Spacing of sweep points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepType {
    Linear,
    Logarithmic,
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

/// One swept quantity; the other is held fixed by the executor.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub quantity: Quantity,
    /// K or MPa
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Build from unit-tagged text such as "250 K" / "350 K" or "1 bar" / "100 bar".
    pub fn from_text(
        start_raw: &str,
        end_raw: &str,
        quantity: Quantity,
        num_points: usize,
        sweep_type: SweepType,
    ) -> AppResult<Self> {
        let start = parse_quantity(start_raw, quantity)?;
        let end = parse_quantity(end_raw, quantity)?;

        if num_points < 2 {
            return Err(AppError::InvalidInput(
                "Sweep must have at least 2 points".to_string(),
            ));
        }
        if (start - end).abs() < 1e-12 {
            return Err(AppError::InvalidInput(
                "Start and end values must be different".to_string(),
            ));
        }

        Ok(Self {
            quantity,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// All sweep values, endpoints exact.
    pub fn generate_points(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }
        let n = self.num_points - 1;
        let mut points: Vec<f64> = match self.sweep_type {
            SweepType::Linear => {
                let delta = (self.end - self.start) / n as f64;
                (0..=n).map(|i| self.start + i as f64 * delta).collect()
            }
            SweepType::Logarithmic => {
                let (a, b) = (self.start.ln(), self.end.ln());
                let delta = (b - a) / n as f64;
                (0..=n).map(|i| (a + i as f64 * delta).exp()).collect()
            }
        };
        points[n] = self.end;
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.quantity, self.start, self.end, self.num_points, self.sweep_type
        )
    }
}

/// One evaluated sweep point.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub temperature: f64,
    pub pressure: f64,
    pub solution: Result<ZSolution, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepResult {
    pub points: Vec<SweepPoint>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepResult {
    /// (swept value, Z) for converged points.
    pub fn z_curve(&self, quantity: Quantity) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| match &p.solution {
                Ok(sol) if sol.converged => Some((
                    match quantity {
                        Quantity::Temperature => p.temperature,
                        Quantity::Pressure => p.pressure,
                    },
                    sol.z,
                )),
                _ => None,
            })
            .collect()
    }
}

/// Run `sweep` with the other quantity fixed at `fixed` (K or MPa).
pub fn execute_sweep(
    table: &CoefficientTable,
    composition: &Composition,
    sweep: &SweepDefinition,
    fixed: f64,
    config: &SolverConfig,
) -> AppResult<SweepResult> {
    config.validate()?;
    let points: Vec<SweepPoint> = sweep
        .generate_points()
        .into_par_iter()
        .map(|value| {
            let (temperature, pressure) = match sweep.quantity {
                Quantity::Temperature => (value, fixed),
                Quantity::Pressure => (fixed, value),
            };
            let solution = solve(table, temperature, pressure, composition, config)
                .map_err(|e| e.to_string());
            SweepPoint {
                temperature,
                pressure,
                solution,
            }
        })
        .collect();

    let num_successful = points.iter().filter(|p| p.solution.is_ok()).count();
    let num_failed = points.len() - num_successful;
    if num_failed > 0 {
        tracing::warn!(num_failed, num_successful, "{sweep}: some points failed");
    }

    Ok(SweepResult {
        points,
        num_successful,
        num_failed,
    })
}
