//! Job files and request translation end to end.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use zf_aga8::CoefficientTable;
use zf_app::{CalculationRequest, calculate, run_job, run_job_file};
use zf_solver::SolverConfig;

#[test]
fn station_job_reports_flow_correction() {
    let report = run_job_file(Path::new("tests/jobs/station.yaml")).unwrap();
    assert_eq!(report.name.as_deref(), Some("station-7"));
    assert_eq!(report.table, zf_app::job::BUILTIN_TABLE);
    assert_eq!(report.job_id.len(), 64);

    let sol = &report.solution;
    assert!(sol.converged);
    assert!(sol.z > 0.90 && sol.z < 0.95, "Z = {}", sol.z);

    let flow = report.flow.expect("base conditions given");
    assert!(flow.base.z > 0.99 && flow.base.z < 1.0);
    // Ideal factor is (10 / 0.101325)·(288.15 / 350) ≈ 81.3
    assert!(flow.volume_correction_factor > 81.3);
}

#[test]
fn blend_job_adds_hydrogen() {
    let report = run_job_file(Path::new("tests/jobs/blend.yaml")).unwrap();
    assert!((report.final_components["Hydrogen"] - 0.2).abs() < 1e-12);
    assert!((report.final_components["CH4"] - 0.76).abs() < 1e-12);
    assert!(report.flow.is_none());
    assert!(report.solution.converged);
}

#[test]
fn request_matches_direct_solve() {
    let mut base = BTreeMap::new();
    base.insert("Methane".to_string(), 0.9);
    base.insert("Nitrogen".to_string(), 0.05);
    base.insert("Ethane".to_string(), 0.05);
    let req = CalculationRequest {
        base_components: base,
        hydrogen_fraction: 0.0,
        temperature_k: 288.15,
        pressure_kpa: 1013.25,
    };
    let table = CoefficientTable::aga8_detail();
    let cfg = SolverConfig::default();
    let resp = calculate(table, &req, &cfg).unwrap();

    let comp = zf_aga8::Composition::from_named([
        ("CH4", 0.9),
        ("N2", 0.05),
        ("C2H6", 0.05),
    ])
    .unwrap();
    let direct = zf_solver::solve(table, 288.15, 1.01325, &comp, &cfg).unwrap();
    assert_eq!(resp.compression_factor, direct.z);
    assert!(resp.converged);
}

fn matrix_source(table: &CoefficientTable) -> String {
    let mut out = String::new();
    let push_vector = |out: &mut String, name: &str, values: Vec<f64>| {
        let body: Vec<String> = values.iter().map(|v| format!("{v:e}")).collect();
        writeln!(out, "{name} = [{}];", body.join(" ")).unwrap();
    };
    let c = table.components();
    push_vector(&mut out, "M", c.iter().map(|p| p.molar_mass).collect());
    push_vector(&mut out, "E", c.iter().map(|p| p.energy).collect());
    push_vector(&mut out, "K", c.iter().map(|p| p.size).collect());
    push_vector(&mut out, "G", c.iter().map(|p| p.orientation).collect());
    push_vector(&mut out, "Q", c.iter().map(|p| p.quadrupole).collect());
    push_vector(&mut out, "F", c.iter().map(|p| p.high_temperature).collect());
    push_vector(&mut out, "S", c.iter().map(|p| p.dipole).collect());
    push_vector(&mut out, "W", c.iter().map(|p| p.association).collect());
    let b = table.binary();
    for (name, m) in [
        ("Ex", &b.energy),
        ("Ux", &b.conformal),
        ("Kx", &b.size),
        ("Gx", &b.orientation),
    ] {
        let rows: Vec<String> = m
            .iter()
            .map(|r| r.iter().map(|v| format!("{v:e}")).collect::<Vec<_>>().join(" "))
            .collect();
        writeln!(out, "{name} = [{}];", rows.join("; ")).unwrap();
    }
    let t = table.terms();
    push_vector(&mut out, "a", t.iter().map(|r| r.a).collect());
    push_vector(&mut out, "b", t.iter().map(|r| r.b).collect());
    push_vector(&mut out, "c", t.iter().map(|r| r.c).collect());
    push_vector(&mut out, "k", t.iter().map(|r| r.k).collect());
    push_vector(&mut out, "u", t.iter().map(|r| r.u).collect());
    push_vector(&mut out, "g", t.iter().map(|r| r.g).collect());
    push_vector(&mut out, "q", t.iter().map(|r| r.q).collect());
    push_vector(&mut out, "f", t.iter().map(|r| r.f).collect());
    push_vector(&mut out, "s", t.iter().map(|r| r.s).collect());
    push_vector(&mut out, "w", t.iter().map(|r| r.w).collect());
    out
}

#[test]
fn job_with_coefficient_file_uses_it() {
    let dir = std::env::temp_dir().join(format!("zf-app-coeff-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("aga8.m"),
        matrix_source(CoefficientTable::aga8_detail()),
    )
    .unwrap();

    let job: zf_app::JobFile = serde_yaml::from_str(
        "temperature: \"300 K\"\npressure: \"5 MPa\"\ncomposition:\n  CH4: 1.0\ncoefficients: aga8.m\n",
    )
    .unwrap();
    let with_file = run_job(&job, Some(&dir)).unwrap();
    assert!(with_file.table.starts_with("sha256:"));

    let builtin = zf_app::JobFile {
        coefficients: None,
        ..job.clone()
    };
    let without = run_job(&builtin, None).unwrap();
    assert_eq!(with_file.solution.z, without.solution.z);
    assert_ne!(with_file.job_id, without.job_id);

    std::fs::remove_dir_all(&dir).ok();
}
