//! Gas composition: a 21-slot mole-fraction vector in table order.

use crate::component::Component;
use crate::error::{Aga8Error, Aga8Result};
use crate::table::{CoefficientTable, NUM_COMPONENTS};
use zf_core::numeric::{Tolerances, nearly_equal};

/// Sum deviation accepted without touching the fractions.
pub const SUM_TOLERANCE: f64 = 1e-9;
/// Sum deviation corrected by renormalization (rounding in typed-in data).
pub const RENORMALIZE_LIMIT: f64 = 1e-4;

/// Mole fractions of the 21 components, indexed by [`Component::index`].
///
/// Always finite, non-negative and summing to 1 within [`SUM_TOLERANCE`].
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    fractions: [f64; NUM_COMPONENTS],
}

impl Composition {
    /// A single component at mole fraction 1.
    pub fn pure(component: Component) -> Self {
        let mut fractions = [0.0; NUM_COMPONENTS];
        fractions[component.index()] = 1.0;
        Self { fractions }
    }

    /// Validate a mole-fraction vector in table order.
    ///
    /// A sum off by at most [`RENORMALIZE_LIMIT`] is treated as rounding and
    /// renormalized. Anything further off is rejected, as is an all-zero vector.
    pub fn new(fractions: &[f64]) -> Aga8Result<Self> {
        let (fractions, sum) = checked_fractions(fractions)?;
        let deviation = (sum - 1.0).abs();
        if deviation <= SUM_TOLERANCE {
            return Ok(Self { fractions });
        }
        if deviation <= RENORMALIZE_LIMIT {
            tracing::debug!(sum, "renormalizing composition");
            return Ok(Self::scaled(fractions, sum));
        }
        Err(Aga8Error::invalid(format!(
            "mole fractions sum to {sum}, expected 1"
        )))
    }

    /// Scale any non-zero, non-negative vector to sum 1.
    ///
    /// For boundary layers that accept percentages or relative amounts.
    pub fn normalized(fractions: &[f64]) -> Aga8Result<Self> {
        let (fractions, sum) = checked_fractions(fractions)?;
        Ok(Self::scaled(fractions, sum))
    }

    /// Build from `(name, fraction)` pairs, normalizing the result.
    ///
    /// Names are anything [`Component`]'s `FromStr` accepts. Repeated names
    /// accumulate.
    pub fn from_named<'a, I>(entries: I) -> Aga8Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut fractions = [0.0; NUM_COMPONENTS];
        for (name, fraction) in entries {
            let component: Component = name.parse().map_err(Aga8Error::invalid)?;
            fractions[component.index()] += fraction;
        }
        Self::normalized(&fractions)
    }

    fn scaled(mut fractions: [f64; NUM_COMPONENTS], sum: f64) -> Self {
        for x in &mut fractions {
            *x /= sum;
        }
        Self { fractions }
    }

    pub fn fraction(&self, component: Component) -> f64 {
        self.fractions[component.index()]
    }

    pub fn fractions(&self) -> &[f64; NUM_COMPONENTS] {
        &self.fractions
    }

    /// Components with non-zero fraction, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL
            .iter()
            .zip(self.fractions.iter())
            .filter(|(_, x)| **x > 0.0)
            .map(|(c, x)| (*c, *x))
    }

    /// Returns `Some(component)` if one component carries the whole mixture.
    pub fn is_pure(&self) -> Option<Component> {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-12,
        };
        let mut present = self.iter();
        match (present.next(), present.next()) {
            (Some((c, x)), None) if nearly_equal(x, 1.0, tol) => Some(c),
            _ => None,
        }
    }

    /// Mixture molar mass M0 = Σ x_i M_i [g/mol].
    pub fn molar_mass(&self, table: &CoefficientTable) -> f64 {
        self.iter()
            .map(|(c, x)| x * table.component(c).molar_mass)
            .sum()
    }
}

fn checked_fractions(fractions: &[f64]) -> Aga8Result<([f64; NUM_COMPONENTS], f64)> {
    let fractions: [f64; NUM_COMPONENTS] = fractions.try_into().map_err(|_| {
        Aga8Error::invalid(format!(
            "composition must have {NUM_COMPONENTS} entries, got {}",
            fractions.len()
        ))
    })?;

    let mut sum = 0.0;
    for (i, &x) in fractions.iter().enumerate() {
        if !x.is_finite() || x < 0.0 {
            return Err(Aga8Error::invalid(format!(
                "mole fraction of {} must be finite and non-negative, got {x}",
                Component::ALL[i].key()
            )));
        }
        sum += x;
    }

    if sum <= 0.0 {
        return Err(Aga8Error::invalid("all mole fractions are zero"));
    }
    Ok((fractions, sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural_gas() -> [f64; NUM_COMPONENTS] {
        let mut x = [0.0; NUM_COMPONENTS];
        x[Component::CH4.index()] = 0.961651;
        x[Component::N2.index()] = 0.008606;
        x[Component::CO2.index()] = 0.004567;
        x[Component::Ethane.index()] = 0.01998;
        x[Component::Propane.index()] = 0.003859;
        x[Component::NButane.index()] = 0.000950;
        x[Component::NPentane.index()] = 0.000138;
        x[Component::NHexane.index()] = 0.000249;
        x
    }

    #[test]
    fn pure_composition() {
        let comp = Composition::pure(Component::H2);
        assert_eq!(comp.is_pure(), Some(Component::H2));
        assert_eq!(comp.fraction(Component::H2), 1.0);
        assert_eq!(comp.fraction(Component::CH4), 0.0);
    }

    #[test]
    fn exact_sum_is_kept_verbatim() {
        let x = natural_gas();
        let comp = Composition::new(&x).unwrap();
        assert_eq!(comp.fractions(), &x);
        assert_eq!(comp.is_pure(), None);
    }

    #[test]
    fn small_drift_is_renormalized() {
        let mut x = natural_gas();
        x[0] += 5e-5;
        let comp = Composition::new(&x).unwrap();
        let sum: f64 = comp.fractions().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn large_drift_is_rejected() {
        let mut x = natural_gas();
        x[0] += 0.01;
        let err = Composition::new(&x).unwrap_err();
        assert!(err.to_string().contains("sum"));
    }

    #[test]
    fn all_zero_is_rejected() {
        let err = Composition::new(&[0.0; NUM_COMPONENTS]).unwrap_err();
        assert!(matches!(err, Aga8Error::InvalidInput { .. }));
        assert!(Composition::normalized(&[0.0; NUM_COMPONENTS]).is_err());
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(Composition::new(&[1.0]).is_err());
        assert!(Composition::new(&[0.0; 22]).is_err());
    }

    #[test]
    fn negative_and_nan_are_rejected() {
        let mut x = natural_gas();
        x[3] = -0.01;
        assert!(Composition::new(&x).is_err());
        x[3] = f64::NAN;
        assert!(Composition::normalized(&x).is_err());
    }

    #[test]
    fn normalized_accepts_percentages() {
        let mut x = [0.0; NUM_COMPONENTS];
        x[Component::CH4.index()] = 90.0;
        x[Component::Ethane.index()] = 10.0;
        let comp = Composition::normalized(&x).unwrap();
        assert!((comp.fraction(Component::CH4) - 0.9).abs() < 1e-15);
    }

    #[test]
    fn from_named_maps_and_accumulates() {
        let comp = Composition::from_named([
            ("Methane", 0.5),
            ("CH4", 0.3),
            ("Nitrogen", 0.2),
        ])
        .unwrap();
        assert!((comp.fraction(Component::CH4) - 0.8).abs() < 1e-15);
        assert!((comp.fraction(Component::N2) - 0.2).abs() < 1e-15);
    }

    #[test]
    fn from_named_rejects_unknown() {
        let err = Composition::from_named([("Unobtainium", 1.0)]).unwrap_err();
        assert!(err.to_string().contains("Unobtainium"));
    }

    #[test]
    fn molar_mass_of_natural_gas() {
        let table = CoefficientTable::aga8_detail();
        let comp = Composition::new(&natural_gas()).unwrap();
        let m = comp.molar_mass(table);
        assert!(m > 16.5 && m < 17.0, "M0 = {m}");
        assert_eq!(Composition::pure(Component::CH4).molar_mass(table), 16.043);
    }
}
