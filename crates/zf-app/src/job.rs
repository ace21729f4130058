//! YAML job files: one gas, one operating point, optional base conditions.
//!
//! ```yaml
//! name: station-7
//! temperature: "350 K"
//! pressure: "10 MPa"
//! composition:
//!   Methane: 0.961651
//!   Nitrogen: 0.008606
//! hydrogen_fraction: 0.1
//! base_conditions:
//!   temperature: "15 C"
//!   pressure: "101.325 kPa"
//! solver:
//!   method: bisection
//!   tolerance: 1.0e-5
//! coefficients: tables/aga8.m
//! ```

use crate::error::{AppError, AppResult};
use crate::flow::{Conditions, FlowCorrection, solve_flow_correction};
use crate::hash::{compute_job_id, source_fingerprint};
use crate::request::blend_hydrogen;
use crate::units::{Quantity, parse_quantity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use zf_aga8::{CoefficientTable, Composition};
use zf_solver::{SolveMethod, SolverConfig, ZSolution, solve};

/// Identifies the compiled-in table in reports.
pub const BUILTIN_TABLE: &str = "aga8-92dc-builtin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    #[serde(default)]
    pub name: Option<String>,
    /// Unit-tagged, e.g. "350 K"
    pub temperature: String,
    /// Unit-tagged absolute pressure, e.g. "10 MPa"
    pub pressure: String,
    /// Component name → fraction
    pub composition: BTreeMap<String, f64>,
    #[serde(default)]
    pub hydrogen_fraction: f64,
    #[serde(default)]
    pub base_conditions: Option<ConditionsDef>,
    #[serde(default)]
    pub solver: Option<SolverDef>,
    /// Matrix-text coefficient file, relative to the job file
    #[serde(default)]
    pub coefficients: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionsDef {
    pub temperature: String,
    pub pressure: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodDef {
    #[default]
    Bisection,
    Scan,
}

/// Overrides on top of the defaults of the chosen method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverDef {
    #[serde(default)]
    pub method: MethodDef,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
    pub pm_max: Option<f64>,
    pub seed: Option<f64>,
    pub step: Option<f64>,
}

impl SolverDef {
    pub fn to_config(&self) -> AppResult<SolverConfig> {
        let mut config = match self.method {
            MethodDef::Bisection => SolverConfig::default(),
            MethodDef::Scan => SolverConfig::linear_scan(),
        };
        if let Some(tol) = self.tolerance {
            config.tolerance = tol;
        }
        if let Some(max) = self.max_iterations {
            config.max_iterations = max;
        }
        match &mut config.method {
            SolveMethod::Bisection { pm_max } => {
                if self.seed.is_some() || self.step.is_some() {
                    return Err(AppError::Validation(
                        "seed and step only apply to the scan method".to_string(),
                    ));
                }
                if let Some(v) = self.pm_max {
                    *pm_max = v;
                }
            }
            SolveMethod::LinearScan { seed, step } => {
                if self.pm_max.is_some() {
                    return Err(AppError::Validation(
                        "pm_max only applies to the bisection method".to_string(),
                    ));
                }
                if let Some(v) = self.seed {
                    *seed = v;
                }
                if let Some(v) = self.step {
                    *step = v;
                }
            }
        }
        config.validate()?;
        Ok(config)
    }
}

/// A job with its text fields resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedJob {
    pub operating: Conditions,
    pub base: Option<Conditions>,
    pub final_components: BTreeMap<String, f64>,
    pub composition: Composition,
    pub config: SolverConfig,
}

impl JobFile {
    /// Parse units, blend hydrogen, map component names and build the solver
    /// configuration.
    pub fn resolve(&self) -> AppResult<ResolvedJob> {
        let operating = conditions(&self.temperature, &self.pressure)?;
        let base = self
            .base_conditions
            .as_ref()
            .map(|b| conditions(&b.temperature, &b.pressure))
            .transpose()?;

        if self.composition.is_empty() && self.hydrogen_fraction < 1.0 {
            return Err(AppError::Validation("composition is empty".to_string()));
        }
        let final_components = blend_hydrogen(&self.composition, self.hydrogen_fraction)?;
        let composition = Composition::from_named(
            final_components.iter().map(|(name, x)| (name.as_str(), *x)),
        )?;
        let config = self.solver.clone().unwrap_or_default().to_config()?;

        Ok(ResolvedJob {
            operating,
            base,
            final_components,
            composition,
            config,
        })
    }
}

fn conditions(temperature: &str, pressure: &str) -> AppResult<Conditions> {
    Ok(Conditions {
        temperature: parse_quantity(temperature, Quantity::Temperature)?,
        pressure: parse_quantity(pressure, Quantity::Pressure)?,
    })
}

/// Read, parse and validate a job file.
pub fn load_job(path: &Path) -> AppResult<JobFile> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::JobFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let job: JobFile = serde_yaml::from_str(&content)?;
    job.resolve()?;
    Ok(job)
}

/// Everything a job run produces.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    /// SHA-256 over the job, the table fingerprint and the crate version
    pub job_id: String,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub name: Option<String>,
    pub table: String,
    pub final_components: BTreeMap<String, f64>,
    pub solution: ZSolution,
    pub flow: Option<FlowCorrection>,
}

/// Run a job. `base_dir` resolves a relative `coefficients` path.
pub fn run_job(job: &JobFile, base_dir: Option<&Path>) -> AppResult<JobReport> {
    let resolved = job.resolve()?;

    let loaded;
    let (table, fingerprint) = match &job.coefficients {
        Some(rel) => {
            let path = match base_dir {
                Some(dir) if rel.is_relative() => dir.join(rel),
                _ => rel.clone(),
            };
            let text =
                std::fs::read_to_string(&path).map_err(|source| AppError::CoefficientFileRead {
                    path: path.clone(),
                    source,
                })?;
            loaded = CoefficientTable::from_matrix_source(&text)?;
            (&loaded, source_fingerprint(&text))
        }
        None => (CoefficientTable::aga8_detail(), BUILTIN_TABLE.to_string()),
    };

    let (solution, flow) = match resolved.base {
        Some(base) => {
            let fc = solve_flow_correction(
                table,
                &resolved.composition,
                resolved.operating,
                base,
                &resolved.config,
            )?;
            (fc.operating.clone(), Some(fc))
        }
        None => (
            solve(
                table,
                resolved.operating.temperature,
                resolved.operating.pressure,
                &resolved.composition,
                &resolved.config,
            )?,
            None,
        ),
    };

    let job_id = compute_job_id(job, &fingerprint, env!("CARGO_PKG_VERSION"));
    tracing::info!(%job_id, z = solution.z, converged = solution.converged, "job finished");

    Ok(JobReport {
        job_id,
        timestamp: chrono::Utc::now().to_rfc3339(),
        name: job.name.clone(),
        table: fingerprint,
        final_components: resolved.final_components,
        solution,
        flow,
    })
}

/// [`load_job`] followed by [`run_job`] relative to the file's directory.
pub fn run_job_file(path: &Path) -> AppResult<JobReport> {
    let job = load_job(path)?;
    run_job(&job, path.parent())
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = r#"
name: unit
temperature: "350 K"
pressure: "10 MPa"
composition:
  Methane: 0.9
  Ethane: 0.1
"#;

    #[test]
    fn parses_minimal_job() {
        let job: JobFile = serde_yaml::from_str(JOB).unwrap();
        let resolved = job.resolve().unwrap();
        assert_eq!(resolved.operating.temperature, 350.0);
        assert_eq!(resolved.config, SolverConfig::default());
        assert!(resolved.base.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let text = format!("{JOB}colour: blue\n");
        assert!(serde_yaml::from_str::<JobFile>(&text).is_err());
    }

    #[test]
    fn scan_overrides_apply() {
        let def = SolverDef {
            method: MethodDef::Scan,
            step: Some(1e-5),
            ..SolverDef::default()
        };
        let cfg = def.to_config().unwrap();
        assert_eq!(
            cfg.method,
            SolveMethod::LinearScan {
                seed: 0.01,
                step: 1e-5
            }
        );
    }

    #[test]
    fn mismatched_overrides_are_rejected() {
        let def = SolverDef {
            method: MethodDef::Bisection,
            step: Some(1e-5),
            ..SolverDef::default()
        };
        assert!(matches!(def.to_config(), Err(AppError::Validation(_))));
        let def = SolverDef {
            tolerance: Some(-1.0),
            ..SolverDef::default()
        };
        assert!(def.to_config().is_err());
    }

    #[test]
    fn bad_units_surface_as_input_errors() {
        let text = JOB.replace("\"10 MPa\"", "\"10 psi\"");
        let job: JobFile = serde_yaml::from_str(&text).unwrap();
        let err = job.resolve().unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn missing_job_file_is_read_error() {
        let err = load_job(Path::new("/nonexistent/job.yaml")).unwrap_err();
        assert!(matches!(err, AppError::JobFileRead { .. }));
    }
}
