//! Bisection on the pressure function.

use crate::progress::{ProgressEvent, SolveWarning, emit};
use crate::solve::RootResult;
use zf_aga8::{Aga8Result, PressurePoint};

/// Find pm in [0, pm_max] with |P(pm) − target| < tolerance.
///
/// The bracket endpoints are evaluated once up front and do not count as
/// iterations. If the target is not strictly inside [P(0), P(pm_max)] a
/// [`SolveWarning::TargetOutsideBracket`] is raised and the search continues
/// anyway; monotonicity of P is assumed, not checked.
///
/// On exhaustion the last midpoint is returned with `converged = false`.
pub fn bisect<F>(
    pressure_at: F,
    target: f64,
    pm_max: f64,
    tolerance: f64,
    max_iterations: usize,
    mut progress: Option<&mut dyn FnMut(ProgressEvent)>,
) -> Aga8Result<RootResult>
where
    F: Fn(f64) -> Aga8Result<PressurePoint>,
{
    let mut low = 0.0;
    let mut high = pm_max;
    let pressure_low = pressure_at(low)?.pressure;
    let pressure_high = pressure_at(high)?.pressure;

    let mut warnings = Vec::new();
    if !(pressure_low < target && target < pressure_high) {
        let warning = SolveWarning::TargetOutsideBracket {
            pressure_low,
            pressure_high,
        };
        tracing::warn!(target, pressure_low, pressure_high, "{warning}");
        emit(&mut progress, ProgressEvent::Warning(warning));
        warnings.push(warning);
    }

    let mut density = 0.5 * (low + high);
    let mut point = PressurePoint {
        pressure: pressure_low,
        reduced_density: 0.0,
    };
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        density = 0.5 * (low + high);
        point = pressure_at(density)?;
        iterations += 1;

        let residual = point.pressure - target;
        tracing::trace!(iterations, density, pressure = point.pressure, residual);
        emit(
            &mut progress,
            ProgressEvent::Iteration {
                index: iterations,
                density,
                pressure: point.pressure,
                residual,
            },
        );

        if residual.abs() < tolerance {
            converged = true;
            break;
        }
        if point.pressure < target {
            low = density;
        } else {
            high = density;
        }
    }

    Ok(RootResult {
        density,
        point,
        iterations,
        converged,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(pm: f64) -> Aga8Result<PressurePoint> {
        Ok(PressurePoint {
            pressure: 2.0 * pm,
            reduced_density: pm,
        })
    }

    #[test]
    fn finds_root_of_linear_function() {
        let r = bisect(linear, 3.0, 100.0, 1e-9, 200, None).unwrap();
        assert!(r.converged);
        assert!((r.density - 1.5).abs() < 1e-9);
        assert!(r.warnings.is_empty());
        // Bracket width 100 halves each step until |2·pm − 3| < 1e-9.
        assert!(r.iterations > 30 && r.iterations < 45, "{}", r.iterations);
    }

    #[test]
    fn exact_midpoint_converges_in_one_iteration() {
        let r = bisect(linear, 100.0, 100.0, 1e-9, 10, None).unwrap();
        assert!(r.converged);
        assert_eq!(r.iterations, 1);
        assert_eq!(r.density, 50.0);
    }

    #[test]
    fn unreachable_target_pins_to_upper_bound() {
        let mut events = Vec::new();
        let mut cb = |e: ProgressEvent| events.push(e);
        let r = bisect(linear, 1e6, 100.0, 1e-9, 40, Some(&mut cb)).unwrap();
        assert!(!r.converged);
        assert_eq!(r.iterations, 40);
        assert!(r.density > 99.9);
        assert!(matches!(
            r.warnings.as_slice(),
            [SolveWarning::TargetOutsideBracket { .. }]
        ));
        assert!(matches!(events[0], ProgressEvent::Warning(_)));
        assert_eq!(events.len(), 41);
    }

    #[test]
    fn observer_sees_every_iteration_in_order() {
        let mut indices = Vec::new();
        let mut cb = |e: ProgressEvent| {
            if let ProgressEvent::Iteration { index, residual, .. } = e {
                assert!(residual.is_finite());
                indices.push(index);
            }
        };
        let r = bisect(linear, 7.0, 100.0, 1e-6, 100, Some(&mut cb)).unwrap();
        assert_eq!(indices.len(), r.iterations);
        assert!(indices.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn pressure_errors_propagate() {
        let failing = |pm: f64| {
            if pm > 10.0 {
                Err(zf_aga8::Aga8Error::NonFinite {
                    what: "pressure",
                    density: pm,
                    value: f64::INFINITY,
                })
            } else {
                linear(pm)
            }
        };
        assert!(bisect(failing, 3.0, 100.0, 1e-9, 50, None).is_err());
    }
}
