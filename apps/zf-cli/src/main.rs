use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use zf_aga8::{CoefficientTable, Component, Composition};
use zf_app::job::{MethodDef, SolverDef};
use zf_app::{
    AppError, AppResult, JobReport, Quantity, SweepDefinition, SweepResult, SweepType,
    blend_hydrogen, execute_sweep, parse_quantity, run_job_file,
};
use zf_solver::{ProgressEvent, ZSolution, solve_with_progress};

#[derive(Parser)]
#[command(name = "zf-cli")]
#[command(about = "ZFactor CLI - AGA8-92DC natural gas compressibility calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute Z at one temperature and pressure
    Calc {
        /// Temperature, e.g. "350 K" or "20 C"
        #[arg(short = 't', long)]
        temperature: String,
        /// Absolute pressure, e.g. "10 MPa" or "1013.25 kPa"
        #[arg(short = 'p', long)]
        pressure: String,
        #[command(flatten)]
        mixture: MixtureArgs,
        #[command(flatten)]
        solver: SolverArgs,
        /// Print every solver iteration (throttled)
        #[arg(long)]
        trace: bool,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a YAML job file
    Run {
        /// Path to the job YAML file
        job_path: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep temperature or pressure with the other held fixed
    Sweep {
        /// Swept quantity
        #[arg(long, value_enum)]
        quantity: SweptQuantity,
        /// First value, with unit
        #[arg(long)]
        start: String,
        /// Last value, with unit
        #[arg(long)]
        end: String,
        /// Number of points including both ends
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Logarithmic spacing instead of linear
        #[arg(long)]
        log: bool,
        /// Value of the quantity held fixed, with unit
        #[arg(long)]
        fixed: String,
        #[command(flatten)]
        mixture: MixtureArgs,
        #[command(flatten)]
        solver: SolverArgs,
        /// Emit the sweep as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the supported components in table order
    Components,
}

#[derive(Clone, Copy, ValueEnum)]
enum SweptQuantity {
    Temperature,
    Pressure,
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    Bisection,
    Scan,
}

#[derive(Args)]
struct MixtureArgs {
    /// Component mole fraction as NAME=FRACTION (repeatable)
    #[arg(short = 'c', long = "component", value_parser = parse_component_arg, required = true)]
    components: Vec<(String, f64)>,
    /// Hydrogen fraction blended into the mixture
    #[arg(long, default_value_t = 0.0)]
    hydrogen: f64,
    /// MATLAB-style coefficient file replacing the builtin table
    #[arg(long)]
    coefficients: Option<PathBuf>,
}

#[derive(Args)]
struct SolverArgs {
    /// Root-finding strategy
    #[arg(long, value_enum, default_value = "bisection")]
    method: MethodArg,
    /// Pressure tolerance [MPa]
    #[arg(long)]
    tolerance: Option<f64>,
    /// Iteration cap
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Upper density bracket for bisection [mol/L]
    #[arg(long)]
    pm_max: Option<f64>,
    /// Starting density for the scan [mol/L]
    #[arg(long)]
    seed: Option<f64>,
    /// Density increment for the scan [mol/L]
    #[arg(long)]
    step: Option<f64>,
}

impl SolverArgs {
    fn to_def(&self) -> SolverDef {
        SolverDef {
            method: match self.method {
                MethodArg::Bisection => MethodDef::Bisection,
                MethodArg::Scan => MethodDef::Scan,
            },
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            pm_max: self.pm_max,
            seed: self.seed,
            step: self.step,
        }
    }
}

#[derive(Serialize)]
struct CalcOutput<'a> {
    final_components: &'a BTreeMap<String, f64>,
    solution: &'a ZSolution,
    elapsed_s: f64,
}

fn parse_component_arg(raw: &str) -> Result<(String, f64), String> {
    let (name, fraction) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=FRACTION, got '{raw}'"))?;
    let fraction: f64 = fraction
        .trim()
        .parse()
        .map_err(|_| format!("invalid fraction in '{raw}'"))?;
    Ok((name.trim().to_string(), fraction))
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calc {
            temperature,
            pressure,
            mixture,
            solver,
            trace,
            json,
        } => cmd_calc(&temperature, &pressure, &mixture, &solver, trace, json),
        Commands::Run { job_path, json } => cmd_run(&job_path, json),
        Commands::Sweep {
            quantity,
            start,
            end,
            points,
            log,
            fixed,
            mixture,
            solver,
            json,
        } => {
            let quantity = match quantity {
                SweptQuantity::Temperature => Quantity::Temperature,
                SweptQuantity::Pressure => Quantity::Pressure,
            };
            let sweep_type = if log {
                SweepType::Logarithmic
            } else {
                SweepType::Linear
            };
            let sweep = SweepDefinition::from_text(&start, &end, quantity, points, sweep_type)?;
            cmd_sweep(&sweep, &fixed, &mixture, &solver, json)
        }
        Commands::Components => cmd_components(),
    }
}

fn read_table(path: &Path) -> AppResult<CoefficientTable> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::CoefficientFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(CoefficientTable::from_matrix_source(&text)?)
}

/// Accumulate repeated names, then blend hydrogen.
fn mixture_components(mixture: &MixtureArgs) -> AppResult<BTreeMap<String, f64>> {
    let mut base = BTreeMap::new();
    for (name, fraction) in &mixture.components {
        *base.entry(name.clone()).or_insert(0.0) += *fraction;
    }
    blend_hydrogen(&base, mixture.hydrogen)
}

fn to_composition(components: &BTreeMap<String, f64>) -> AppResult<Composition> {
    Ok(Composition::from_named(
        components.iter().map(|(name, x)| (name.as_str(), *x)),
    )?)
}

fn cmd_calc(
    temperature: &str,
    pressure: &str,
    mixture: &MixtureArgs,
    solver: &SolverArgs,
    trace: bool,
    json: bool,
) -> AppResult<()> {
    let temperature = parse_quantity(temperature, Quantity::Temperature)?;
    let pressure = parse_quantity(pressure, Quantity::Pressure)?;
    let final_components = mixture_components(mixture)?;
    let composition = to_composition(&final_components)?;
    let config = solver.to_def().to_config()?;

    let loaded;
    let table = match &mixture.coefficients {
        Some(path) => {
            loaded = read_table(path)?;
            &loaded
        }
        None => CoefficientTable::aga8_detail(),
    };

    let started = Instant::now();
    let mut last_emit = Instant::now();
    let mut traced = false;
    let solution = solve_with_progress(
        table,
        temperature,
        pressure,
        &composition,
        &config,
        Some(&mut |event| match event {
            ProgressEvent::Warning(warning) => {
                if traced {
                    clear_progress_line();
                }
                eprintln!("warning: {warning}");
            }
            ProgressEvent::Iteration {
                index,
                density,
                pressure,
                residual,
            } => {
                if trace && (index == 1 || last_emit.elapsed().as_millis() >= 100) {
                    render_iteration(
                        index,
                        density,
                        pressure,
                        residual,
                        started.elapsed().as_secs_f64(),
                    );
                    last_emit = Instant::now();
                    traced = true;
                }
            }
            ProgressEvent::Finished { .. } => {}
        }),
    )?;
    let elapsed_s = started.elapsed().as_secs_f64();
    if traced {
        clear_progress_line();
    }

    if json {
        let output = CalcOutput {
            final_components: &final_components,
            solution: &solution,
            elapsed_s,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_mixture(&final_components, &composition);
    print_solution(&solution);
    println!("  Elapsed:        {:.3}s", elapsed_s);
    Ok(())
}

fn cmd_run(job_path: &Path, json: bool) -> AppResult<()> {
    if !json {
        println!("Running job: {}", job_path.display());
    }
    let started = Instant::now();
    let report = run_job_file(job_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    println!("  Elapsed:        {:.3}s", started.elapsed().as_secs_f64());
    Ok(())
}

fn cmd_sweep(
    sweep: &SweepDefinition,
    fixed: &str,
    mixture: &MixtureArgs,
    solver: &SolverArgs,
    json: bool,
) -> AppResult<()> {
    let fixed = match sweep.quantity {
        Quantity::Temperature => parse_quantity(fixed, Quantity::Pressure)?,
        Quantity::Pressure => parse_quantity(fixed, Quantity::Temperature)?,
    };
    let final_components = mixture_components(mixture)?;
    let composition = to_composition(&final_components)?;
    let config = solver.to_def().to_config()?;

    let loaded;
    let table = match &mixture.coefficients {
        Some(path) => {
            loaded = read_table(path)?;
            &loaded
        }
        None => CoefficientTable::aga8_detail(),
    };

    let started = Instant::now();
    let result = execute_sweep(table, &composition, sweep, fixed, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_mixture(&final_components, &composition);
    print_sweep(&result);
    println!(
        "\n{} points ({} failed) in {:.3}s",
        result.points.len(),
        result.num_failed,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn cmd_components() -> AppResult<()> {
    let table = CoefficientTable::aga8_detail();
    println!(
        "{:>3}  {:<10} {:<18} {:<18} {:>10}",
        "#", "Formula", "Name", "Description", "M [g/mol]"
    );
    for component in Component::ALL {
        println!(
            "{:>3}  {:<10} {:<18} {:<18} {:>10.4}",
            component.index() + 1,
            component.key(),
            component.api_name(),
            component.display_name(),
            table.component(component).molar_mass
        );
    }
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(120));
    let _ = io::stdout().flush();
}

fn render_iteration(index: usize, density: f64, pressure: f64, residual: f64, elapsed_s: f64) {
    let spinner = ['|', '/', '-', '\\'];
    let spin_idx = ((elapsed_s * 10.0) as usize) % spinner.len();
    print!(
        "\r{} iter={}  pm={:.8} mol/L  P={:.8} MPa  residual={:.3e}  elapsed={:.2}s",
        spinner[spin_idx], index, density, pressure, residual, elapsed_s
    );
    let _ = io::stdout().flush();
}

/// Display name of the only component present, if any.
fn pure_label(composition: &Composition) -> Option<&'static str> {
    composition.is_pure().map(|c| c.display_name())
}

fn print_mixture(components: &BTreeMap<String, f64>, composition: &Composition) {
    print_components(components);
    if let Some(name) = pure_label(composition) {
        println!("  (pure {name}; no binary interactions)");
    }
}

fn print_components(components: &BTreeMap<String, f64>) {
    println!("Composition:");
    for (name, fraction) in components {
        if *fraction > 0.0 {
            println!("  {:<18} {:.6}", name, fraction);
        }
    }
}

fn print_solution(solution: &ZSolution) {
    println!("\nResult:");
    println!("  Temperature:    {:.3} K", solution.temperature);
    println!("  Pressure:       {:.6} MPa", solution.pressure);
    println!("  Z:              {:.6}", solution.z);
    println!("  Molar density:  {:.6} mol/L", solution.molar_density);
    println!("  Mass density:   {:.4} kg/m3", solution.mass_density);
    println!("  Molar mass:     {:.4} g/mol", solution.molar_mass);
    println!(
        "  P(calculated):  {:.6} MPa",
        solution.pressure_calculated
    );
    println!(
        "  Solver:         {} ({} iterations, {})",
        solution.method.label(),
        solution.iterations,
        if solution.converged {
            "converged"
        } else {
            "NOT converged"
        }
    );
    for warning in &solution.warnings {
        println!("  Warning:        {}", warning);
    }
}

fn print_report(report: &JobReport) {
    if let Some(name) = &report.name {
        println!("Job: {}", name);
    }
    println!("  Job id:         {}", report.job_id);
    println!("  Timestamp:      {}", report.timestamp);
    println!("  Table:          {}", report.table);
    print_components(&report.final_components);
    print_solution(&report.solution);
    if let Some(flow) = &report.flow {
        println!("\nBase conditions:");
        println!("  Temperature:    {:.3} K", flow.base.temperature);
        println!("  Pressure:       {:.6} MPa", flow.base.pressure);
        println!("  Z base:         {:.6}", flow.base.z);
        println!("  Zb/Zf:          {:.6}", flow.supercompressibility);
        println!("  Volume factor:  {:.4}", flow.volume_correction_factor);
    }
}

fn print_sweep(result: &SweepResult) {
    println!(
        "\n{:>10} {:>12} {:>10} {:>12} {:>12} {:>6}",
        "T [K]", "P [MPa]", "Z", "pm [mol/L]", "rho [kg/m3]", "iter"
    );
    for point in &result.points {
        match &point.solution {
            Ok(s) => println!(
                "{:>10.3} {:>12.6} {:>10.6} {:>12.6} {:>12.4} {:>6}{}",
                point.temperature,
                point.pressure,
                s.z,
                s.molar_density,
                s.mass_density,
                s.iterations,
                if s.converged { "" } else { "  (not converged)" }
            ),
            Err(message) => println!(
                "{:>10.3} {:>12.6}  error: {}",
                point.temperature, point.pressure, message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_arg_splits_name_and_fraction() {
        assert_eq!(
            parse_component_arg("Methane = 0.9").unwrap(),
            ("Methane".to_string(), 0.9)
        );
        assert!(parse_component_arg("Methane").is_err());
        assert!(parse_component_arg("Methane=abc").is_err());
    }

    #[test]
    fn cli_parses_calc_with_repeated_components() {
        let cli = Cli::try_parse_from([
            "zf-cli", "calc", "-t", "350 K", "-p", "10 MPa", "-c", "CH4=0.9", "-c", "C2H6=0.1",
            "--method", "scan", "--step", "1e-5",
        ])
        .unwrap();
        match cli.command {
            Commands::Calc { mixture, solver, .. } => {
                assert_eq!(mixture.components.len(), 2);
                let config = solver.to_def().to_config().unwrap();
                assert_eq!(config.method.label(), "linear scan");
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn pure_label_only_for_single_component() {
        let pure = BTreeMap::from([("Methane".to_string(), 1.0)]);
        assert_eq!(pure_label(&to_composition(&pure).unwrap()), Some("Methane"));

        let mixed = BTreeMap::from([("Methane".to_string(), 0.9), ("Ethane".to_string(), 0.1)]);
        assert_eq!(pure_label(&to_composition(&mixed).unwrap()), None);
    }

    #[test]
    fn duplicate_components_accumulate_before_blending() {
        let mixture = MixtureArgs {
            components: vec![
                ("CH4".to_string(), 0.5),
                ("CH4".to_string(), 0.3),
                ("N2".to_string(), 0.2),
            ],
            hydrogen: 0.0,
            coefficients: None,
        };
        let components = mixture_components(&mixture).unwrap();
        assert!((components["CH4"] - 0.8).abs() < 1e-12);
    }
}
