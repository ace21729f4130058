//! Pressure as a function of molar density.

use crate::error::{Aga8Error, Aga8Result};
use crate::mixture::MixtureParams;
use zf_core::constants::R_MPA_L_PER_MOL_K;
use zf_core::numeric::pow_or_one;

/// One evaluation of the pressure function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressurePoint {
    /// Pressure [MPa]
    pub pressure: f64,
    /// Reduced density pr = K0³·pm
    pub reduced_density: f64,
}

impl MixtureParams {
    /// pr = K0³·pm
    pub fn reduced_density(&self, molar_density: f64) -> f64 {
        self.k0.powi(3) * molar_density
    }

    /// Z(pm) = 1 + B·pm − pr·SUM1 + SUM2(pr).
    pub fn compressibility(&self, molar_density: f64) -> Aga8Result<f64> {
        let pm = molar_density;
        if !pm.is_finite() || pm < 0.0 {
            return Err(Aga8Error::invalid(format!(
                "molar density must be finite and non-negative, got {pm}"
            )));
        }
        let pr = self.reduced_density(pm);

        let mut sum2 = 0.0;
        for t in &self.density_terms {
            let prk = pow_or_one(pr, t.k);
            sum2 += t.coeff * (t.b - t.c * t.k * prk) * pow_or_one(pr, t.b) * (-t.c * prk).exp();
        }

        let z = 1.0 + self.b * pm - pr * self.sum1 + sum2;
        if z.is_finite() {
            Ok(z)
        } else {
            Err(Aga8Error::NonFinite {
                what: "compressibility",
                density: pm,
                value: z,
            })
        }
    }

    /// P = pm·R·T·Z(pm) in MPa, with pm in mol/L.
    pub fn pressure(&self, molar_density: f64) -> Aga8Result<PressurePoint> {
        let z = self.compressibility(molar_density)?;
        let pressure = molar_density * R_MPA_L_PER_MOL_K * self.temperature * z;
        if !pressure.is_finite() {
            return Err(Aga8Error::NonFinite {
                what: "pressure",
                density: molar_density,
                value: pressure,
            });
        }
        Ok(PressurePoint {
            pressure,
            reduced_density: self.reduced_density(molar_density),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoefficientTable, Component, Composition};

    fn methane(t: f64) -> MixtureParams {
        MixtureParams::compute(
            CoefficientTable::aga8_detail(),
            &Composition::pure(Component::CH4),
            t,
        )
        .unwrap()
    }

    #[test]
    fn zero_density_gives_zero_pressure() {
        let point = methane(300.0).pressure(0.0).unwrap();
        assert_eq!(point.pressure, 0.0);
        assert_eq!(point.reduced_density, 0.0);
    }

    #[test]
    fn negative_or_nan_density_is_rejected() {
        let params = methane(300.0);
        assert!(matches!(
            params.pressure(-1.0),
            Err(Aga8Error::InvalidInput { .. })
        ));
        assert!(params.pressure(f64::NAN).is_err());
    }

    #[test]
    fn dilute_gas_follows_virial_limit() {
        let params = methane(300.0);
        let pm = 1e-6;
        let z = params.compressibility(pm).unwrap();
        assert!((z - (1.0 + params.b * pm)).abs() < 1e-9);
    }

    #[test]
    fn reduced_density_scales_with_k0_cubed() {
        let params = methane(300.0);
        let point = params.pressure(2.0).unwrap();
        assert!((point.reduced_density - 2.0 * params.k0.powi(3)).abs() < 1e-15);
    }
}
