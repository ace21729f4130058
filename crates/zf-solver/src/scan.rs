//! Fixed-step linear scan on the pressure function.
//!
//! O(target density / step) evaluations; kept as a cross-check for bisection.

use crate::progress::{ProgressEvent, SolveWarning, emit};
use crate::solve::RootResult;
use zf_aga8::{Aga8Result, PressurePoint};

/// Advance pm from `seed` by `step` until |P(pm) − target| < tolerance.
///
/// Warns when the seed already sits above the target or when the first step
/// moves the pressure by more than the 2·tolerance window. Neither aborts the
/// scan. On exhaustion the density with the smallest |P − target| seen so
/// far is returned with `converged = false`.
pub fn linear_scan<F>(
    pressure_at: F,
    target: f64,
    seed: f64,
    step: f64,
    tolerance: f64,
    max_iterations: usize,
    mut progress: Option<&mut dyn FnMut(ProgressEvent)>,
) -> Aga8Result<RootResult>
where
    F: Fn(f64) -> Aga8Result<PressurePoint>,
{
    let mut warnings = Vec::new();
    let seed_pressure = pressure_at(seed)?.pressure;
    let pressure_step = (pressure_at(seed + step)?.pressure - seed_pressure).abs();

    if seed_pressure > target + tolerance {
        warnings.push(SolveWarning::SeedAboveTarget { seed_pressure });
    }
    if pressure_step >= 2.0 * tolerance {
        warnings.push(SolveWarning::CoarseStep { pressure_step });
    }
    for warning in &warnings {
        tracing::warn!(target, seed, step, "{warning}");
        emit(&mut progress, ProgressEvent::Warning(*warning));
    }

    let mut density = seed;
    let mut point = PressurePoint {
        pressure: seed_pressure,
        reduced_density: 0.0,
    };
    let mut best = (density, point, f64::INFINITY);
    let mut iterations = 0;
    let mut converged = false;
    let mut overshoot_logged = false;

    while iterations < max_iterations {
        density = seed + iterations as f64 * step;
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
        if residual.abs() < best.2 {
            best = (density, point, residual.abs());
        }
        if residual > 0.0 && !overshoot_logged {
            tracing::warn!(density, residual, "scan passed the target outside the tolerance window");
            overshoot_logged = true;
        }
    }

    if !converged && best.2.is_finite() {
        (density, point) = (best.0, best.1);
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
    fn walks_up_to_root() {
        let r = linear_scan(linear, 1.0, 0.1, 5e-4, 1e-3, 10_000, None).unwrap();
        assert!(r.converged);
        assert!((r.density - 0.5).abs() < 1e-3);
        assert!(r.warnings.is_empty());
        // 0.1 → 0.5 in steps of 5e-4; the window opens at 0.4995 or 0.5.
        assert!((800..=801).contains(&r.iterations), "{}", r.iterations);
    }

    #[test]
    fn seed_above_target_warns_and_exhausts() {
        let r = linear_scan(linear, 1.0, 2.0, 1e-4, 1e-3, 50, None).unwrap();
        assert!(!r.converged);
        assert_eq!(r.iterations, 50);
        assert!(matches!(
            r.warnings.as_slice(),
            [SolveWarning::SeedAboveTarget { .. }]
        ));
    }

    #[test]
    fn coarse_step_warns_and_can_jump_the_window() {
        let r = linear_scan(linear, 1.0, 0.1, 0.3, 1e-3, 20, None).unwrap();
        assert!(!r.converged);
        assert!(r
            .warnings
            .iter()
            .any(|w| matches!(w, SolveWarning::CoarseStep { .. })));
    }

    #[test]
    fn exhausted_scan_keeps_the_closest_iterate() {
        // Grid 0.1, 0.4, 0.7, ... straddles the root at 0.5 without hitting it.
        let r = linear_scan(linear, 1.0, 0.1, 0.3, 1e-3, 20, None).unwrap();
        assert!(!r.converged);
        assert_eq!(r.iterations, 20);
        assert!((r.density - 0.4).abs() < 1e-12, "{}", r.density);
        assert!((r.point.pressure - 0.8).abs() < 1e-12);
    }

    #[test]
    fn first_evaluation_is_the_seed() {
        let mut first = None;
        let mut cb = |e: ProgressEvent| {
            if let ProgressEvent::Iteration { index: 1, density, .. } = e {
                first = Some(density);
            }
        };
        linear_scan(linear, 1.0, 0.25, 1e-3, 1e-3, 5, Some(&mut cb)).unwrap();
        assert_eq!(first, Some(0.25));
    }
}
