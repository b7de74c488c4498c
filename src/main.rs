//! fixstep CLI - compute Euler / RK4 series and print them for a plotting tool.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fixstep::{
    Method, chart,
    config::{Config, OutputFormat},
    solve,
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "fixstep")]
#[command(version)]
#[command(about = "Fixed-step Euler and RK4 integration with a Runge error estimate")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file (defaults to the reference run)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Start of the interval
    #[arg(long, global = true)]
    t0: Option<f64>,

    /// End of the interval
    #[arg(long, global = true)]
    t1: Option<f64>,

    /// Number of steps
    #[arg(short = 'n', long, global = true)]
    steps: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Last error sample index shown in the error chart (0 = all)
    #[arg(long, global = true)]
    error_window: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Euler approximation against the directly evaluated function
    Euler,

    /// RK4 approximation against the directly evaluated function, plus its error chart
    Rk4,

    /// Show example configuration
    Example,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(t0) = self.t0 {
            config.grid.t0 = t0;
        }
        if let Some(t1) = self.t1 {
            config.grid.t1 = t1;
        }
        if let Some(steps) = self.steps {
            config.grid.steps = steps;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(window) = self.error_window {
            config.output.error_window = window;
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn print_example_config() {
    let example = r#"# fixstep configuration file

[grid]
t0 = 0.0
t1 = 3.0
steps = 600

[output]
format = "json"   # or "csv"
error_window = 100  # 0 keeps the whole error series
"#;
    println!("{example}");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let method = match cli.command {
        Commands::Example => {
            print_example_config();
            return Ok(());
        }
        Commands::Euler => Method::Euler,
        Commands::Rk4 => Method::RK4,
    };

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}"))?,
        None => Config::default(),
    };
    cli.apply_overrides(&mut config);

    let grid = config.grid().context("Invalid grid parameters")?;
    info!(
        "{method}: [{}, {}] with {} steps (h = {})",
        grid.t0(),
        grid.t1(),
        grid.steps(),
        grid.h()
    );

    let solution = solve(&grid, method);
    info!("Function evaluations: {}", solution.nfev());

    let charts = solution.charts(config.output.error_window);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output.format {
        OutputFormat::Json => {
            let json = chart::to_json(&charts).context("Failed to serialize charts")?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Csv => chart::write_csv(&charts, &mut out)?,
    }
    out.flush()?;

    Ok(())
}
