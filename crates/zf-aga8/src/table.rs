//! Coefficient tables: per-component parameters, binary interaction
//! matrices and the 58-row term table.

use crate::component::Component;
use crate::data;
use crate::error::{Aga8Error, Aga8Result};
use std::ops::Range;
use std::sync::OnceLock;

pub const NUM_COMPONENTS: usize = 21;
pub const NUM_TERMS: usize = 58;

/// Terms 1..18 of the model: the second virial coefficient B.
pub const SECOND_VIRIAL_TERMS: Range<usize> = 0..18;
/// Terms 13..18 of the model: SUM1, the subtracted first-order density part.
pub const SUM1_TERMS: Range<usize> = 12..18;
/// Terms 13..58 of the model: SUM2, the density-dependent expansion.
pub const DENSITY_TERMS: Range<usize> = 12..58;

/// Square matrix indexed by component pair.
pub type PairMatrix = [[f64; NUM_COMPONENTS]; NUM_COMPONENTS];

/// Characterization parameters of one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentParams {
    /// Molar mass M [g/mol]
    pub molar_mass: f64,
    /// Energy parameter E [K]
    pub energy: f64,
    /// Size parameter K [(L/mol)^(1/3)]
    pub size: f64,
    /// Orientation parameter G
    pub orientation: f64,
    /// Quadrupole parameter Q
    pub quadrupole: f64,
    /// High-temperature parameter F
    pub high_temperature: f64,
    /// Dipole parameter S
    pub dipole: f64,
    /// Association parameter W
    pub association: f64,
}

/// Binary interaction parameters (E*, U, K, G*), symmetric, unit diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryParams {
    /// Ex: energy interaction
    pub energy: PairMatrix,
    /// Ux: conformal energy interaction
    pub conformal: PairMatrix,
    /// Kx: size interaction
    pub size: PairMatrix,
    /// Gx: orientation interaction
    pub orientation: PairMatrix,
}

impl BinaryParams {
    /// All interaction parameters 1: plain combining rules, no corrections.
    pub fn identity() -> Self {
        let ones = [[1.0; NUM_COMPONENTS]; NUM_COMPONENTS];
        Self {
            energy: ones,
            conformal: ones,
            size: ones,
            orientation: ones,
        }
    }

    /// Set one pair in all four matrices, keeping them symmetric.
    pub fn set_pair(
        &mut self,
        i: Component,
        j: Component,
        energy: f64,
        conformal: f64,
        size: f64,
        orientation: f64,
    ) {
        let (a, b) = (i.index(), j.index());
        for (m, v) in [
            (&mut self.energy, energy),
            (&mut self.conformal, conformal),
            (&mut self.size, size),
            (&mut self.orientation, orientation),
        ] {
            m[a][b] = v;
            m[b][a] = v;
        }
    }

    fn matrices(&self) -> [(&'static str, &PairMatrix); 4] {
        [
            ("Ex", &self.energy),
            ("Ux", &self.conformal),
            ("Kx", &self.size),
            ("Gx", &self.orientation),
        ]
    }
}

/// Coefficients and exponents of one additive term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermCoeffs {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub k: f64,
    pub u: f64,
    pub g: f64,
    pub q: f64,
    pub f: f64,
    pub s: f64,
    pub w: f64,
}

/// Immutable coefficient data for the equation of state.
///
/// Built once and shared by reference; nothing mutates it after construction,
/// so any number of concurrent solves may read it without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    components: [ComponentParams; NUM_COMPONENTS],
    binary: BinaryParams,
    terms: [TermCoeffs; NUM_TERMS],
}

impl CoefficientTable {
    /// Build and validate a table.
    pub fn new(
        components: [ComponentParams; NUM_COMPONENTS],
        binary: BinaryParams,
        terms: [TermCoeffs; NUM_TERMS],
    ) -> Aga8Result<Self> {
        let table = Self {
            components,
            binary,
            terms,
        };
        table.validate()?;
        Ok(table)
    }

    /// The compiled-in AGA8-92DC detail characterization table.
    pub fn aga8_detail() -> &'static CoefficientTable {
        static TABLE: OnceLock<CoefficientTable> = OnceLock::new();
        TABLE.get_or_init(|| Self {
            components: data::COMPONENTS,
            binary: data::binary_params(),
            terms: data::TERMS,
        })
    }

    pub fn component(&self, c: Component) -> &ComponentParams {
        &self.components[c.index()]
    }

    pub fn components(&self) -> &[ComponentParams; NUM_COMPONENTS] {
        &self.components
    }

    pub fn binary(&self) -> &BinaryParams {
        &self.binary
    }

    pub fn term(&self, n: usize) -> &TermCoeffs {
        &self.terms[n]
    }

    pub fn terms(&self) -> &[TermCoeffs; NUM_TERMS] {
        &self.terms
    }

    /// Check finiteness, sign constraints and binary symmetry.
    pub fn validate(&self) -> Aga8Result<()> {
        for (i, p) in self.components.iter().enumerate() {
            let name = Component::ALL[i].key();
            for (what, v) in [
                ("molar mass", p.molar_mass),
                ("energy parameter", p.energy),
                ("size parameter", p.size),
            ] {
                if !(v.is_finite() && v > 0.0) {
                    return Err(Aga8Error::table(format!(
                        "{what} of {name} must be positive and finite, got {v}"
                    )));
                }
            }
            for (what, v) in [
                ("orientation parameter", p.orientation),
                ("quadrupole parameter", p.quadrupole),
                ("high-temperature parameter", p.high_temperature),
                ("dipole parameter", p.dipole),
                ("association parameter", p.association),
            ] {
                if !(v.is_finite() && v >= 0.0) {
                    return Err(Aga8Error::table(format!(
                        "{what} of {name} must be non-negative and finite, got {v}"
                    )));
                }
            }
        }

        for (label, m) in self.binary.matrices() {
            for i in 0..NUM_COMPONENTS {
                for j in 0..NUM_COMPONENTS {
                    let v = m[i][j];
                    if !v.is_finite() {
                        return Err(Aga8Error::table(format!(
                            "{label}[{i}][{j}] is not finite"
                        )));
                    }
                    if (v - m[j][i]).abs() > 1e-12 {
                        return Err(Aga8Error::table(format!(
                            "{label} is not symmetric at ({i}, {j}): {v} vs {}",
                            m[j][i]
                        )));
                    }
                }
            }
        }

        for (n, t) in self.terms.iter().enumerate() {
            let values = [t.a, t.b, t.c, t.k, t.u, t.g, t.q, t.f, t.s, t.w];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(Aga8Error::table(format!("term {n} has a non-finite entry")));
            }
        }

        Ok(())
    }
}
