//! CLI for running the CPU scaling benchmarks.
//!
//! Usage:
//!   cpu-bench                      # Run every algorithm on every profile
//!   cpu-bench --list               # List algorithms and CPU profiles
//!   cpu-bench linear_search        # Run a single algorithm
//!   cpu-bench --sizes 100,200 --runs 10 --cpu Basic,Pro
//!   cpu-bench --seed 12345 --csv results.csv

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cpu_scaling_bench::cpu::{default_profiles, select_profiles};
use cpu_scaling_bench::experiment::{run_all, ExperimentConfig};
use cpu_scaling_bench::registry::build_registry;
use cpu_scaling_bench::tui;
use cpu_scaling_bench::utils::runner::export_csv;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "cpu-bench", version, about = "Benchmark algorithms under synthetic CPU profiles")]
struct Cli {
    /// Name of a specific algorithm to run (omit for all)
    algorithm: Option<String>,

    /// List available algorithms and CPU profiles
    #[arg(short, long)]
    list: bool,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',', default_value = "100,500,1000")]
    sizes: Vec<usize>,

    /// Number of runs per experiment
    #[arg(short, long, default_value_t = 5)]
    runs: usize,

    /// Comma-separated CPU profile names (default: all)
    #[arg(long, value_delimiter = ',')]
    cpu: Vec<String>,

    /// Random seed for reproducible runs (default: time-based)
    #[arg(long, env = "CPU_BENCH_SEED")]
    seed: Option<u64>,

    /// Export results to a CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Skip the banner and print only the table
    #[arg(long)]
    no_banner: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn build_config(cli: &Cli) -> Result<ExperimentConfig> {
    let registry = build_registry();
    let algorithms = match &cli.algorithm {
        Some(name) => vec![registry.find(name)?],
        None => registry.all().to_vec(),
    };

    let available = default_profiles();
    let profiles = if cli.cpu.is_empty() {
        available
    } else {
        select_profiles(&available, &cli.cpu)?
    };

    let config = ExperimentConfig {
        algorithms,
        profiles,
        sizes: cli.sizes.clone(),
        runs: cli.runs,
        seed: cli.seed,
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        tui::print_available(&build_registry(), &default_profiles());
        return Ok(());
    }

    let mut config = build_config(&cli)?;
    let seed = config.resolve_seed();
    config.seed = Some(seed);
    info!(seed, "Seeding experiment RNG");

    if !cli.no_banner {
        tui::print_header(&config, seed);
    }

    tui::print_table_header();
    let results = run_all(&config, tui::print_result_row)?;

    if let Some(path) = &cli.csv {
        export_csv(path, &results)?;
        info!(path = path.as_str(), rows = results.len(), "Exported CSV");
    }

    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
