//! CSV export of experiment results.

use std::io::Write;

use crate::error::Result;
use crate::experiment::ExperimentResult;

/// Column header of the CSV export
pub const CSV_HEADER: &str = "algorithm,cpu,input_size,runs,mean_s,stddev_s,samples";

/// Write results as CSV, one line per experiment.
///
/// Raw trial samples go in the last column, separated by `;`.
pub fn write_csv<W: Write>(mut out: W, data: &[ExperimentResult]) -> Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;

    for entry in data {
        let samples = entry
            .samples
            .iter()
            .map(|s| format!("{:.9}", s))
            .collect::<Vec<_>>()
            .join(";");

        writeln!(
            out,
            "{},{},{},{},{:.9},{:.9},{}",
            entry.algorithm_name,
            entry.cpu_name,
            entry.input_size,
            entry.runs,
            entry.mean,
            entry.stddev,
            samples
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Export results to a CSV file
pub fn export_csv(path: &str, data: &[ExperimentResult]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), data)
}
