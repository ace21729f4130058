//! Mixture parameter calculator.
//!
//! Reduces a composition and temperature to the scalars the pressure function
//! needs: the second virial coefficient B, the size and energy parameters K0
//! and U0, the shape parameters G0, F0 and Q0, and SUM1. Everything here
//! depends on composition and temperature only, so a solve computes it once
//! and reuses it for every density evaluation.
//!
//! # Performance
//!
//! There is one implementation of this math. The layout already does the
//! cheap things: pair quantities are built once over the upper triangle
//! (i <= j, off-diagonal pairs weighted twice), zero-fraction components are
//! skipped, and the temperature-dependent coefficients C*_n of terms 13..58
//! are folded into [`MixtureParams`] so the pressure function only evaluates
//! the density part. Further tuning (structure-of-arrays pair buffers for
//! SIMD, parallel reduction over pairs) must keep this function as the
//! reference and be checked against it, since summation order changes the
//! last bits of B.

use crate::composition::Composition;
use crate::error::{Aga8Error, Aga8Result};
use crate::table::{CoefficientTable, DENSITY_TERMS, SECOND_VIRIAL_TERMS, SUM1_TERMS};
use zf_core::ensure_positive;
use zf_core::numeric::pow_or_one;

/// Temperature-folded coefficient of one density-dependent term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DensityTerm {
    /// C*_n = a·(G0+1−g)^g·(Q0²+1−q)^q·(F0+1−f)^f·U0^u·T^−u
    pub coeff: f64,
    pub b: f64,
    pub c: f64,
    pub k: f64,
}

/// Mixture parameters for one (composition, temperature) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureParams {
    /// Temperature [K]
    pub temperature: f64,
    /// Second virial coefficient B [L/mol]
    pub b: f64,
    /// Mixture size parameter K0
    pub k0: f64,
    /// Mixture energy parameter U0 [K]
    pub u0: f64,
    /// Mixture orientation parameter G0
    pub g0: f64,
    /// Mixture high-temperature parameter F0
    pub f0: f64,
    /// Mixture quadrupole parameter Q0
    pub q0: f64,
    /// Σ C*_n over terms 13..18
    pub sum1: f64,
    pub(crate) density_terms: Vec<DensityTerm>,
}

/// Per-pair combining-rule values. Shape products are computed without
/// binary multipliers; only E and G carry Ex and Gx.
struct PairTerm {
    /// x_i·x_j·(K_i·K_j)^1.5, doubled for i != j
    weight: f64,
    energy: f64,
    orientation: f64,
    quadrupole: f64,
    high_temperature: f64,
    dipole: f64,
    association: f64,
}

impl MixtureParams {
    /// Compute B, K0, U0, G0, F0, Q0 and SUM1 for `composition` at `temperature` [K].
    pub fn compute(
        table: &CoefficientTable,
        composition: &Composition,
        temperature: f64,
    ) -> Aga8Result<Self> {
        let t = ensure_positive(temperature, "temperature")?;
        let x = composition.fractions();
        let params = table.components();
        let binary = table.binary();

        let present: Vec<usize> = (0..x.len()).filter(|&i| x[i] > 0.0).collect();

        let mut pairs = Vec::with_capacity(present.len() * (present.len() + 1) / 2);
        let mut u_sum = 0.0;
        let mut k_sum = 0.0;
        let mut u_cross = 0.0;
        let mut k_cross = 0.0;
        let mut g0 = 0.0;
        let mut q0 = 0.0;
        let mut f0 = 0.0;

        for (a, &i) in present.iter().enumerate() {
            let pi = &params[i];
            u_sum += x[i] * checked_pow(pi.energy, 2.5, "U0", None)?;
            k_sum += x[i] * checked_pow(pi.size, 2.5, "K0", None)?;
            g0 += x[i] * pi.orientation;
            q0 += x[i] * pi.quadrupole;
            f0 += x[i] * x[i] * pi.high_temperature;

            for &j in &present[a..] {
                let pj = &params[j];
                let xij = x[i] * x[j];
                if i != j {
                    let ee = checked_pow(pi.energy * pj.energy, 2.5, "U0", None)?;
                    let kk = checked_pow(pi.size * pj.size, 2.5, "K0", None)?;
                    u_cross += xij * (binary.conformal[i][j].powi(5) - 1.0) * ee;
                    k_cross += xij * (binary.size[i][j].powi(5) - 1.0) * kk;
                    g0 += xij
                        * (binary.orientation[i][j] - 1.0)
                        * (pi.orientation + pj.orientation);
                }

                let multiplicity = if i == j { 1.0 } else { 2.0 };
                let size = checked_pow(pi.size * pj.size, 1.5, "second virial", None)?;
                pairs.push(PairTerm {
                    weight: multiplicity * xij * size,
                    energy: binary.energy[i][j] * (pi.energy * pj.energy).sqrt(),
                    orientation: binary.orientation[i][j] * (pi.orientation + pj.orientation) / 2.0,
                    quadrupole: pi.quadrupole * pj.quadrupole,
                    high_temperature: (pi.high_temperature * pj.high_temperature).sqrt(),
                    dipole: pi.dipole * pj.dipole,
                    association: pi.association * pj.association,
                });
            }
        }

        let u0 = checked_pow(u_sum * u_sum + 2.0 * u_cross, 0.2, "U0", None)?;
        let k0 = checked_pow(k_sum * k_sum + 2.0 * k_cross, 0.2, "K0", None)?;

        let mut b = 0.0;
        for n in SECOND_VIRIAL_TERMS {
            let term = table.term(n);
            let stage = "second virial";
            let mut inner = 0.0;
            for p in &pairs {
                let shape = checked_pow(p.orientation + 1.0 - term.g, term.g, stage, Some(n))?
                    * checked_pow(p.quadrupole + 1.0 - term.q, term.q, stage, Some(n))?
                    * checked_pow(p.high_temperature + 1.0 - term.f, term.f, stage, Some(n))?
                    * checked_pow(p.dipole + 1.0 - term.s, term.s, stage, Some(n))?
                    * checked_pow(p.association + 1.0 - term.w, term.w, stage, Some(n))?;
                inner += p.weight * shape * checked_pow(p.energy, term.u, stage, Some(n))?;
            }
            b += term.a * checked_pow(t, -term.u, stage, Some(n))? * inner;
        }

        let mut density_terms = Vec::with_capacity(DENSITY_TERMS.len());
        let mut sum1 = 0.0;
        for n in DENSITY_TERMS {
            let term = table.term(n);
            let stage = if SUM1_TERMS.contains(&n) {
                "SUM1"
            } else {
                "density term"
            };
            let coeff = term.a
                * checked_pow(g0 + 1.0 - term.g, term.g, stage, Some(n))?
                * checked_pow(q0 * q0 + 1.0 - term.q, term.q, stage, Some(n))?
                * checked_pow(f0 + 1.0 - term.f, term.f, stage, Some(n))?
                * checked_pow(u0 / t, term.u, stage, Some(n))?;
            if SUM1_TERMS.contains(&n) {
                sum1 += coeff;
            }
            density_terms.push(DensityTerm {
                coeff,
                b: term.b,
                c: term.c,
                k: term.k,
            });
        }

        tracing::debug!(
            temperature = t,
            b,
            k0,
            u0,
            g0,
            f0,
            q0,
            sum1,
            "mixture parameters"
        );

        Ok(Self {
            temperature: t,
            b,
            k0,
            u0,
            g0,
            f0,
            q0,
            sum1,
            density_terms,
        })
    }
}

/// `base^exponent` that refuses to produce a non-real or non-finite value.
pub(crate) fn checked_pow(
    base: f64,
    exponent: f64,
    stage: &'static str,
    term: Option<usize>,
) -> Aga8Result<f64> {
    let value = pow_or_one(base, exponent);
    if value.is_finite() && !(base < 0.0 && exponent.fract() != 0.0) {
        Ok(value)
    } else {
        Err(Aga8Error::Computation {
            stage,
            term,
            base,
            exponent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::table::{BinaryParams, NUM_COMPONENTS};

    #[test]
    fn checked_pow_rejects_negative_base_fractional_exponent() {
        let err = checked_pow(-2.0, 0.5, "U0", None).unwrap_err();
        assert!(matches!(err, Aga8Error::Computation { stage: "U0", .. }));
        assert_eq!(checked_pow(-2.0, 2.0, "U0", None).unwrap(), 4.0);
        assert_eq!(checked_pow(-2.0, 0.0, "U0", None).unwrap(), 1.0);
    }

    #[test]
    fn checked_pow_rejects_overflow() {
        assert!(checked_pow(1e300, 10.0, "second virial", Some(3)).is_err());
    }

    #[test]
    fn non_positive_temperature_is_input_error() {
        let table = CoefficientTable::aga8_detail();
        let comp = Composition::pure(Component::CH4);
        for t in [0.0, -10.0, f64::NAN] {
            let err = MixtureParams::compute(table, &comp, t).unwrap_err();
            assert!(matches!(err, Aga8Error::InvalidInput { .. }), "{t}: {err}");
        }
    }

    #[test]
    fn density_terms_cover_terms_13_to_58() {
        let table = CoefficientTable::aga8_detail();
        let params =
            MixtureParams::compute(table, &Composition::pure(Component::N2), 300.0).unwrap();
        assert_eq!(params.density_terms.len(), 46);
        let sum1: f64 = params.density_terms[..6].iter().map(|t| t.coeff).sum();
        assert!((sum1 - params.sum1).abs() <= 1e-15 * sum1.abs().max(1.0));
    }

    #[test]
    fn default_binary_parameters_add_no_cross_terms() {
        let base = CoefficientTable::aga8_detail();
        let table =
            CoefficientTable::new(*base.components(), BinaryParams::identity(), *base.terms())
                .unwrap();
        let mut x = [0.0; NUM_COMPONENTS];
        x[Component::CH4.index()] = 0.5;
        x[Component::CO2.index()] = 0.5;
        let params = MixtureParams::compute(&table, &Composition::new(&x).unwrap(), 300.0).unwrap();

        let ch4 = base.component(Component::CH4);
        let co2 = base.component(Component::CO2);
        let g0 = 0.5 * ch4.orientation + 0.5 * co2.orientation;
        let u0 = 0.5 * ch4.energy.powf(2.5) + 0.5 * co2.energy.powf(2.5);
        assert!((params.g0 - g0).abs() < 1e-15);
        assert!((params.u0 - u0.powf(0.4)).abs() < 1e-9 * params.u0);
    }

    #[test]
    fn negative_u0_argument_is_computation_error() {
        let base = CoefficientTable::aga8_detail();
        let mut binary = base.binary().clone();
        // Ux^5 − 1 = −33 drives the U0 radicand negative for an equimolar pair.
        binary.set_pair(Component::CH4, Component::N2, 1.0, -2.0, 1.0, 1.0);
        let table = CoefficientTable::new(*base.components(), binary, *base.terms()).unwrap();
        let mut x = [0.0; NUM_COMPONENTS];
        x[Component::CH4.index()] = 0.5;
        x[Component::N2.index()] = 0.5;
        let comp = Composition::new(&x).unwrap();
        let err = MixtureParams::compute(&table, &comp, 300.0).unwrap_err();
        assert!(matches!(err, Aga8Error::Computation { stage: "U0", .. }));
    }
}
