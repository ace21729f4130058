//! Flow correction: operating and base conditions solved side by side.

use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use zf_aga8::{CoefficientTable, Composition};
use zf_solver::{SolverConfig, ZSolution, solve};

/// A (temperature, pressure) state point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// K
    pub temperature: f64,
    /// MPa, absolute
    pub pressure: f64,
}

impl Conditions {
    /// 288.15 K (15 °C) and 0.101325 MPa.
    pub fn iso_reference() -> Self {
        Self {
            temperature: 288.15,
            pressure: zf_core::constants::P_ATM_MPA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowCorrection {
    pub operating: ZSolution,
    pub base: ZSolution,
    /// Z_b / Z_f
    pub supercompressibility: f64,
    /// V_b / V_f = (P_f/P_b)·(T_b/T_f)·(Z_b/Z_f)
    pub volume_correction_factor: f64,
}

/// Solve flowing and base conditions in parallel and form the volume
/// correction factor converting metered volume to base volume.
pub fn solve_flow_correction(
    table: &CoefficientTable,
    composition: &Composition,
    operating: Conditions,
    base: Conditions,
    config: &SolverConfig,
) -> AppResult<FlowCorrection> {
    let (operating, base) = rayon::join(
        || {
            solve(
                table,
                operating.temperature,
                operating.pressure,
                composition,
                config,
            )
        },
        || solve(table, base.temperature, base.pressure, composition, config),
    );
    let (operating, base) = (operating?, base?);

    let supercompressibility = base.z / operating.z;
    let volume_correction_factor = (operating.pressure / base.pressure)
        * (base.temperature / operating.temperature)
        * supercompressibility;

    tracing::debug!(
        z_f = operating.z,
        z_b = base.z,
        volume_correction_factor,
        "flow correction"
    );

    Ok(FlowCorrection {
        operating,
        base,
        supercompressibility,
        volume_correction_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use zf_aga8::Component;

    #[test]
    fn equal_conditions_give_unit_factor() {
        let table = CoefficientTable::aga8_detail();
        let comp = Composition::pure(Component::CH4);
        let c = Conditions::iso_reference();
        let fc = solve_flow_correction(table, &comp, c, c, &SolverConfig::default()).unwrap();
        assert!((fc.volume_correction_factor - 1.0).abs() < 1e-12);
        assert_eq!(fc.operating, fc.base);
    }

    #[test]
    fn pressurized_gas_expands_more_than_ideal() {
        let table = CoefficientTable::aga8_detail();
        let comp = Composition::pure(Component::CH4);
        let operating = Conditions {
            temperature: 288.15,
            pressure: 5.0,
        };
        let fc = solve_flow_correction(
            table,
            &comp,
            operating,
            Conditions::iso_reference(),
            &SolverConfig::default(),
        )
        .unwrap();
        let ideal = 5.0 / zf_core::constants::P_ATM_MPA;
        assert!(fc.supercompressibility > 1.0);
        assert!(fc.volume_correction_factor > ideal);
    }

    #[test]
    fn failing_side_propagates() {
        let table = CoefficientTable::aga8_detail();
        let comp = Composition::pure(Component::CH4);
        let bad = Conditions {
            temperature: -1.0,
            pressure: 1.0,
        };
        let result = solve_flow_correction(
            table,
            &comp,
            bad,
            Conditions::iso_reference(),
            &SolverConfig::default(),
        );
        assert!(result.is_err());
    }
}
