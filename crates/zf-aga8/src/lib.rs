//! zf-aga8: the AGA8-92DC detail characterization equation of state.
//!
//! Provides:
//! - The 21-component catalog in table order
//! - Coefficient tables (component, binary interaction and term data)
//! - Composition handling (validated 21-slot mole-fraction vectors)
//! - The mixture parameter calculator (B, K0, U0, G0, F0, Q0, SUM1)
//! - The pressure function P(ρm) used by the density root-finder
//! - Ingestion of MATLAB-style coefficient sources into alternate tables
//!
//! # Architecture
//!
//! Every calculation takes an explicit `&CoefficientTable`. The compiled-in
//! table is available through [`CoefficientTable::aga8_detail`], but tests and
//! callers can build synthetic tables with [`CoefficientTable::new`] or
//! [`CoefficientTable::from_matrix_source`].
//!
//! # Example
//!
//! ```no_run
//! use zf_aga8::{CoefficientTable, Component, Composition, MixtureParams};
//!
//! let table = CoefficientTable::aga8_detail();
//! let comp = Composition::pure(Component::CH4);
//! let params = MixtureParams::compute(table, &comp, 300.0).unwrap();
//! let point = params.pressure(2.0).unwrap();
//! println!("P = {} MPa", point.pressure);
//! ```

pub mod component;
pub mod composition;
mod data;
pub mod error;
pub mod ingest;
pub mod mixture;
pub mod pressure;
pub mod table;

// Re-exports for ergonomics
pub use component::Component;
pub use composition::Composition;
pub use error::{Aga8Error, Aga8Result};
pub use ingest::{NamedMatrix, parse_matrices};
pub use mixture::MixtureParams;
pub use pressure::PressurePoint;
pub use table::{
    BinaryParams, CoefficientTable, ComponentParams, DENSITY_TERMS, NUM_COMPONENTS, NUM_TERMS,
    PairMatrix, SECOND_VIRIAL_TERMS, SUM1_TERMS, TermCoeffs,
};
