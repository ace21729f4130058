//! zf-app: service layer between front ends and the density solver.
//!
//! Translates named-component requests, unit-tagged text and YAML job files
//! into calls to [`zf_solver::solve`], and runs the multi-solve workflows
//! (flow correction, sweeps) on the rayon pool.

pub mod error;
pub mod flow;
pub mod hash;
pub mod job;
pub mod request;
pub mod sweep;
pub mod units;

pub use error::{AppError, AppResult};
pub use flow::{Conditions, FlowCorrection, solve_flow_correction};
pub use hash::{compute_job_id, source_fingerprint};
pub use job::{JobFile, JobReport, ResolvedJob, load_job, run_job, run_job_file};
pub use request::{CalculationRequest, CalculationResponse, blend_hydrogen, calculate};
pub use sweep::{SweepDefinition, SweepPoint, SweepResult, SweepType, execute_sweep};
pub use units::{Quantity, UnitError, parse_quantity};
