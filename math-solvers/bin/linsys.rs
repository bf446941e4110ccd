//! Solve the generated test system with the direct solvers and report accuracy
//!
//! Usage:
//!     cargo run --bin linsys --release -- --size 15 --method all
//!     RUST_LOG=debug cargo run --bin linsys -- --method householder --quiet

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use math_linsys_solvers::{
    GaussRun, HouseholderRun, Method, RunConfig, ValidationReport, format_column, format_matrix,
    format_row, generate_system, validate_gauss, validate_householder,
};
use ndarray::Array2;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "linsys",
    about = "Solve a dense test system with Gaussian elimination and Householder QR"
)]
struct Cli {
    /// JSON run configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Size of the generated system
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Solution method to run
    #[arg(long, value_enum)]
    method: Option<MethodChoice>,

    /// Largest accepted residual / reconstruction norm
    #[arg(long)]
    tolerance: Option<f64>,

    /// Decimals in printed vectors and matrices
    #[arg(long)]
    precision: Option<usize>,

    /// Skip the Gaussian inverse and its ||E - AA^(-1)|| check
    #[arg(long)]
    no_inverse: bool,

    /// Print norms only, no matrices
    #[arg(long)]
    quiet: bool,

    /// Print the validation reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Save the effective configuration to this path
    #[arg(long)]
    write_config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum MethodChoice {
    Gauss,
    Householder,
    All,
}

impl MethodChoice {
    fn to_methods(self) -> Vec<Method> {
        match self {
            MethodChoice::Gauss => vec![Method::Gauss],
            MethodChoice::Householder => vec![Method::Householder],
            MethodChoice::All => Method::ALL.to_vec(),
        }
    }
}

fn build_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RunConfig::default(),
    };

    if let Some(size) = cli.size {
        config.size = size;
    }
    if let Some(method) = cli.method {
        config.methods = method.to_methods();
    }
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    if cli.no_inverse {
        config.compute_inverse = false;
    }
    if cli.quiet || cli.json {
        config.print_matrices = false;
    }
    Ok(config)
}

fn print_system(matrix: &Array2<f64>, rhs: &Array2<f64>, precision: usize) {
    println!("Initial matrix A:");
    print!("{}", format_matrix(matrix, precision));
    println!();

    println!("Initial right-hand side vector b:");
    print!("{}", format_column(rhs, precision));
    println!();
}

fn print_gauss(config: &RunConfig, run: &GaussRun<f64>) {
    println!("== Gaussian elimination ==");
    println!("Vector x:");
    println!("{}", format_row(run.solution.x.iter(), config.precision));
    println!();
    println!("Norm of the residual vector: {:.6e}", run.report.residual_norm);
    println!();

    if config.print_matrices {
        if let Some(inverse) = &run.inverse {
            println!("Matrix A^(-1):");
            print!("{}", format_matrix(inverse, config.precision));
            println!();
        }
    }
    if let Some(error) = run.report.inverse_error {
        println!("||E - AA^(-1)||: {error:.6e}");
        println!();
    }
}

fn print_householder(config: &RunConfig, run: &HouseholderRun<f64>) {
    println!("== Householder QR ==");
    println!("Vector x:");
    println!("{}", format_row(run.solution.x.iter(), config.precision));
    println!();
    println!("Norm of the residual vector: {:.6e}", run.report.residual_norm);
    println!();

    if config.print_matrices {
        println!("Matrix Q:");
        print!("{}", format_matrix(&run.solution.q, config.precision));
        println!();
        println!("Matrix R:");
        print!("{}", format_matrix(&run.solution.r, config.precision));
        println!();
    }
    if let Some(error) = run.report.reconstruction_error {
        println!("||A - QR||: {error:.6e}");
    }
    if let Some(error) = run.report.orthogonality_error {
        println!("||E - QQ^T||: {error:.6e}");
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let n = config.validate().context("invalid run configuration")?;

    if let Some(path) = &cli.write_config {
        config
            .to_file(path)
            .with_context(|| format!("writing config {}", path.display()))?;
    }

    let (matrix, rhs) = generate_system::<f64>(n).context("generating test system")?;
    log::info!("generated {n}x{n} test system");

    if config.print_matrices {
        print_system(&matrix, &rhs, config.precision);
    }

    let mut reports: Vec<ValidationReport> = Vec::with_capacity(config.methods.len());
    for method in &config.methods {
        match method {
            Method::Gauss => {
                let run = validate_gauss(&config, &matrix, &rhs).context("gauss solve")?;
                if !cli.json {
                    print_gauss(&config, &run);
                }
                reports.push(run.report);
            }
            Method::Householder => {
                let run =
                    validate_householder(&config, &matrix, &rhs).context("householder solve")?;
                if !cli.json {
                    print_householder(&config, &run);
                }
                reports.push(run.report);
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    let failed: Vec<&ValidationReport> = reports.iter().filter(|r| !r.passed).collect();
    if !failed.is_empty() {
        let names: Vec<String> = failed.iter().map(|r| r.method.to_string()).collect();
        bail!(
            "{} of {} checks above tolerance {:e}: {}",
            failed.len(),
            reports.len(),
            config.tolerance,
            names.join(", ")
        );
    }
    Ok(())
}
