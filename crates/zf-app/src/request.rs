//! Request translation: named components, hydrogen blending and kPa input.
//!
//! The field names of [`CalculationRequest`] and [`CalculationResponse`]
//! follow the `/calculate` JSON contract used by existing clients.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zf_aga8::{CoefficientTable, Composition};
use zf_core::units::{kpa, to_mpa};
use zf_solver::{SolverConfig, solve};

/// Key used for the blended hydrogen fraction.
pub const HYDROGEN_KEY: &str = "Hydrogen";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Component name → mole fraction, before hydrogen is blended in
    pub base_components: BTreeMap<String, f64>,
    #[serde(default)]
    pub hydrogen_fraction: f64,
    /// Temperature [K]
    #[serde(rename = "T")]
    pub temperature_k: f64,
    /// Absolute pressure [kPa]
    #[serde(rename = "P_kPa")]
    pub pressure_kpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Blended, normalized composition under the caller's names
    pub final_components: BTreeMap<String, f64>,
    pub compression_factor: f64,
    /// mol/L
    pub molar_density: f64,
    /// kg/m³
    pub mass_density: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Scale `base` to `1 − h2_fraction` and add hydrogen.
///
/// Hydrogen already present in `base` under [`HYDROGEN_KEY`] is scaled with
/// the rest and the blended fraction is added on top. A base summing to zero
/// is only accepted when it is empty or the blend is pure hydrogen.
pub fn blend_hydrogen(
    base: &BTreeMap<String, f64>,
    h2_fraction: f64,
) -> AppResult<BTreeMap<String, f64>> {
    if !(0.0..=1.0).contains(&h2_fraction) {
        return Err(AppError::InvalidInput(format!(
            "hydrogen fraction must be between 0 and 1, got {h2_fraction}"
        )));
    }
    for (name, &fraction) in base {
        if !fraction.is_finite() || fraction < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "fraction of '{name}' must be finite and non-negative, got {fraction}"
            )));
        }
    }

    let mut blended = BTreeMap::new();
    let base_total: f64 = base.values().sum();
    if base_total > 0.0 {
        let scale = (1.0 - h2_fraction) / base_total;
        for (name, fraction) in base {
            blended.insert(name.clone(), fraction * scale);
        }
    } else if h2_fraction < 1.0 && !base.is_empty() {
        return Err(AppError::InvalidInput(
            "base component fractions sum to zero; cannot normalize after adding hydrogen"
                .to_string(),
        ));
    }

    if h2_fraction > 0.0 {
        *blended.entry(HYDROGEN_KEY.to_string()).or_insert(0.0) += h2_fraction;
    }

    let total: f64 = blended.values().sum();
    if total > 0.0 && (total - 1.0).abs() > 1e-9 {
        for fraction in blended.values_mut() {
            *fraction /= total;
        }
    }
    Ok(blended)
}

/// Blend, map names, convert kPa → MPa and solve.
pub fn calculate(
    table: &CoefficientTable,
    request: &CalculationRequest,
    config: &SolverConfig,
) -> AppResult<CalculationResponse> {
    let final_components = blend_hydrogen(&request.base_components, request.hydrogen_fraction)?;
    let composition =
        Composition::from_named(final_components.iter().map(|(name, x)| (name.as_str(), *x)))?;
    let pressure_mpa = to_mpa(kpa(request.pressure_kpa));

    let solution = solve(
        table,
        request.temperature_k,
        pressure_mpa,
        &composition,
        config,
    )?;

    Ok(CalculationResponse {
        final_components,
        compression_factor: solution.z,
        molar_density: solution.molar_density,
        mass_density: solution.mass_density,
        iterations: solution.iterations,
        converged: solution.converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn blend_scales_base_and_adds_hydrogen() {
        let out = blend_hydrogen(&base(&[("Methane", 0.9), ("Nitrogen", 0.1)]), 0.2).unwrap();
        assert!((out["Methane"] - 0.72).abs() < 1e-12);
        assert!((out["Nitrogen"] - 0.08).abs() < 1e-12);
        assert!((out[HYDROGEN_KEY] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn blend_normalizes_unnormalized_base() {
        let out = blend_hydrogen(&base(&[("Methane", 90.0), ("Ethane", 10.0)]), 0.0).unwrap();
        let total: f64 = out.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(!out.contains_key(HYDROGEN_KEY));
    }

    #[test]
    fn existing_hydrogen_accumulates() {
        let out = blend_hydrogen(&base(&[("Methane", 0.5), ("Hydrogen", 0.5)]), 0.5).unwrap();
        assert!((out[HYDROGEN_KEY] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn pure_hydrogen_from_empty_or_zero_base() {
        let out = blend_hydrogen(&BTreeMap::new(), 1.0).unwrap();
        assert_eq!(out.len(), 1);
        let out = blend_hydrogen(&base(&[("Methane", 0.0)]), 1.0).unwrap();
        assert_eq!(out[HYDROGEN_KEY], 1.0);
    }

    #[test]
    fn zero_base_with_partial_hydrogen_is_rejected() {
        let err = blend_hydrogen(&base(&[("Methane", 0.0)]), 0.3).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn out_of_range_hydrogen_is_rejected() {
        assert!(blend_hydrogen(&base(&[("Methane", 1.0)]), 1.5).is_err());
        assert!(blend_hydrogen(&base(&[("Methane", 1.0)]), -0.1).is_err());
    }

    #[test]
    fn request_uses_wire_field_names() {
        let json = r#"{"base_components":{"Methane":1.0},"T":288.15,"P_kPa":1013.25}"#;
        let req: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.hydrogen_fraction, 0.0);
        assert_eq!(req.temperature_k, 288.15);
        let back = serde_json::to_value(&req).unwrap();
        assert!(back.get("P_kPa").is_some());
    }

    #[test]
    fn unknown_component_is_input_error() {
        let req = CalculationRequest {
            base_components: base(&[("Xenon", 1.0)]),
            hydrogen_fraction: 0.0,
            temperature_k: 300.0,
            pressure_kpa: 1000.0,
        };
        let err = calculate(
            CoefficientTable::aga8_detail(),
            &req,
            &SolverConfig::default(),
        )
        .unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("Xenon"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn blended_fractions_sum_to_one(
            fracs in prop::collection::vec(0.001_f64..1.0, 1..6),
            h2 in 0.0_f64..=1.0,
        ) {
            let names = ["Methane", "Ethane", "Propane", "Nitrogen", "CarbonDioxide", "Butane"];
            let base: BTreeMap<String, f64> = names
                .iter()
                .zip(&fracs)
                .map(|(n, f)| (n.to_string(), *f))
                .collect();
            let out = blend_hydrogen(&base, h2).unwrap();
            let total: f64 = out.values().sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
            let h = out.get(HYDROGEN_KEY).copied().unwrap_or(0.0);
            prop_assert!((h - h2).abs() < 1e-9);
        }
    }
}
