mod error;
mod plot;

use clap::{Parser, Subcommand};
use error::CliResult;
use hf_grid::TemperatureField;
use hf_results::{RunManifest, RunStore, compute_run_id};
use hf_solver::GaussSeidelConfig;
use std::path::{Path, PathBuf};
use std::time::Instant;

const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "heatfield CLI - steady-state plate conduction solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and values
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Solve a case and persist the converged grid
    Solve {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Output directory (defaults to .heatfield/runs next to the case)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Hand the written grid to gnuplot (heatmap + 3D surface)
        #[arg(long)]
        plot: bool,
    },
    /// List stored runs for a case
    Runs {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Print a stored run's manifest and grid
    Show {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Solve {
            case_path,
            out,
            plot,
        } => cmd_solve(&case_path, out, plot),
        Commands::Runs { case_path } => cmd_runs(&case_path),
        Commands::Show { case_path, run_id } => cmd_show(&case_path, &run_id),
    }
}

fn cmd_validate(case_path: &Path) -> CliResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = hf_case::load_yaml(case_path)?;
    println!(
        "✓ Case '{}' is valid ({}x{} grid, L = {}, tolerance = {:e})",
        case.name, case.nx, case.ny, case.domain_length, case.tolerance
    );
    Ok(())
}

fn cmd_solve(case_path: &Path, out: Option<PathBuf>, plot: bool) -> CliResult<()> {
    println!("Solving case: {}", case_path.display());
    let case = hf_case::load_yaml(case_path)?;

    let config = match case.max_sweeps {
        Some(cap) => GaussSeidelConfig::with_max_sweeps(case.tolerance, cap)?,
        None => GaussSeidelConfig::new(case.tolerance)?,
    };
    let field = TemperatureField::initialized(case.nx, case.ny, &case.boundary)?;

    let solve_start = Instant::now();
    let solution = hf_solver::solve(field, case.domain_length, &config)?;
    let solve_time_s = solve_start.elapsed().as_secs_f64();

    println!(
        "✓ Converged in {} sweeps (total error {:.3e})",
        solution.sweeps, solution.total_error
    );

    let store = match out {
        Some(dir) => RunStore::new(dir)?,
        None => RunStore::for_case(case_path)?,
    };
    let run_id = compute_run_id(&case, SOLVER_VERSION);
    let manifest = RunManifest::new(
        run_id.clone(),
        &case,
        solution.sweeps,
        solution.total_error,
        SOLVER_VERSION,
    );

    let save_start = Instant::now();
    store.save_run(&manifest, &solution.field)?;
    let save_time_s = save_start.elapsed().as_secs_f64();

    println!("✓ Saved run: {}", run_id);
    print_timing_summary(solve_time_s, save_time_s);

    if plot {
        let data_path = store.grid_path(&run_id);
        match plot::plot_heatmap(&data_path).and_then(|_| plot::plot_surface(&data_path)) {
            Ok(()) => println!("✓ Plots dispatched to gnuplot"),
            Err(e) => println!("Visualization skipped (gnuplot unavailable): {}", e),
        }
    }

    Ok(())
}

fn cmd_runs(case_path: &Path) -> CliResult<()> {
    let case = hf_case::load_yaml(case_path)?;
    let store = RunStore::for_case(case_path)?;
    let runs = store.list_runs(&case.name)?;

    if runs.is_empty() {
        println!("No stored runs for case: {}", case.name);
    } else {
        println!("Stored runs for case '{}':", case.name);
        for manifest in runs {
            println!(
                "  {} ({}, {} sweeps)",
                manifest.run_id, manifest.timestamp, manifest.sweeps
            );
        }
    }
    Ok(())
}

fn cmd_show(case_path: &Path, run_id: &str) -> CliResult<()> {
    let store = RunStore::for_case(case_path)?;
    let manifest = store.load_manifest(run_id)?;
    let rows = store.load_grid(run_id)?;

    println!("Run: {}", manifest.run_id);
    println!("  Case:        {}", manifest.case_name);
    println!("  Timestamp:   {}", manifest.timestamp);
    println!("  Grid:        {}x{}", manifest.nx, manifest.ny);
    println!("  Sweeps:      {}", manifest.sweeps);
    println!("  Total error: {:.3e}", manifest.total_error);

    println!();
    for row in &rows {
        let line: Vec<String> = row.iter().map(|value| format!("{value:8.2}")).collect();
        println!("{}", line.join("  "));
    }

    Ok(())
}

fn print_timing_summary(solve_time_s: f64, save_time_s: f64) {
    let total = (solve_time_s + save_time_s).max(1.0e-12);
    let solve_pct = 100.0 * solve_time_s / total;
    let save_pct = 100.0 * save_time_s / total;

    println!("\nTiming summary:");
    println!("  Solve: {:.3}s ({:.1}%)", solve_time_s, solve_pct);
    println!("  Save:  {:.3}s ({:.1}%)", save_time_s, save_pct);
    println!("  Total: {:.3}s", solve_time_s + save_time_s);
}
