//! Show trial information.

use std::path::PathBuf;

use anyhow::Context;
use gaitkin_model::TrialTable;

pub fn run(data: PathBuf, headers: Option<PathBuf>, unit_scale: f64) -> anyhow::Result<()> {
    let table = TrialTable::load(&data, headers.as_deref(), unit_scale)
        .with_context(|| format!("Failed to load trial {}", data.display()))?;

    println!("Trial: {}", data.display());
    println!("  Rows: {}", table.row_count());
    println!("  Columns: {}", table.columns().join(", "));

    match table.to_marker_series() {
        Ok(series) => {
            println!("  Duration: {:.3}s", series.duration_secs());
            if let Some(rate) = series.mean_sample_rate_hz() {
                println!("  Sample rate: {rate:.1} Hz");
            }
            println!("\nTrial is ready for analysis.");
        }
        Err(e) => {
            println!("\nTrial cannot be analyzed: {e}");
        }
    }

    Ok(())
}
