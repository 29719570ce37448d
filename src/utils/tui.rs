//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI. The results table is fixed-width
//! so it can be diffed and pasted as-is; only the banner follows the
//! terminal width.

use crate::cpu::CpuProfile;
use crate::experiment::{ExperimentConfig, ExperimentResult};
use crate::registry::AlgorithmRegistry;
use terminal_size::{terminal_size, Width};

const ALGO_WIDTH: usize = 13;
const CPU_WIDTH: usize = 6;
const INPUT_WIDTH: usize = 6;
const VALUE_WIDTH: usize = 10;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Column header of the results table
pub fn format_table_header() -> String {
    format!(
        "| {:<a$} | {:<c$} | {:>i$} | {:>v$} | {:>v$} |",
        "Algorithm",
        "CPU",
        "Input",
        "Mean(s)",
        "StdDev(s)",
        a = ALGO_WIDTH,
        c = CPU_WIDTH,
        i = INPUT_WIDTH,
        v = VALUE_WIDTH
    )
}

/// Separator line under the header
pub fn format_table_separator() -> String {
    let cell = |w: usize| "-".repeat(w + 2);
    format!(
        "|{}|{}|{}|{}|{}|",
        cell(ALGO_WIDTH),
        cell(CPU_WIDTH),
        cell(INPUT_WIDTH),
        cell(VALUE_WIDTH),
        cell(VALUE_WIDTH)
    )
}

/// One results row, values in seconds with 6 decimals
pub fn format_result_row(result: &ExperimentResult) -> String {
    format!(
        "| {:<a$} | {:<c$} | {:>i$} | {:>v$.6} | {:>v$.6} |",
        result.algorithm_name,
        result.cpu_name,
        result.input_size,
        result.mean,
        result.stddev,
        a = ALGO_WIDTH,
        c = CPU_WIDTH,
        i = INPUT_WIDTH,
        v = VALUE_WIDTH
    )
}

/// Print header and separator of the results table
pub fn print_table_header() {
    println!("{}", format_table_header());
    println!("{}", format_table_separator());
}

/// Print one results row as soon as its experiment finishes
pub fn print_result_row(result: &ExperimentResult) {
    println!("{}", format_result_row(result));
}

/// Print the application header
pub fn print_header(config: &ExperimentConfig, seed: u64) {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " CPU Scaling Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!(
        "  {} experiments, {} runs each, seed {}",
        config.experiment_count(),
        config.runs,
        seed
    );
    println!();
}

/// Print the list of available algorithms and CPU profiles
pub fn print_available(registry: &AlgorithmRegistry, profiles: &[CpuProfile]) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.key(),
            algo.category(),
            algo.description()
        );
    }
    println!();
    println!("Available CPU profiles:");
    println!();
    for p in profiles {
        println!(
            "  {:<20} clock x{:<5} miss penalty {:>5} us, miss rate {}",
            p.name(),
            p.clock_multiplier(),
            p.cache_miss_penalty_us(),
            p.cache_miss_rate()
        );
    }
}
