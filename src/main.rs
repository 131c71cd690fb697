// src/main.rs

//! `core-math`: prints the series-versus-host accuracy report.
//!
//! Set `CORE_MATH_CONFIG` to a JSON file to change the term cap, sample count,
//! tolerance or function list. Exits non-zero when any function is out of
//! tolerance.

use anyhow::Context;
use log::{info, warn};

use core_math::config::CONFIG;
use core_math::report::AccuracyReport;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting core-math accuracy report...");
    let config = &*CONFIG;

    let report = AccuracyReport::generate(config).context("Failed to generate accuracy report")?;

    for result in &report.results {
        if result.passed {
            info!(
                "{:<13} max error {:.3e} at {} ({} samples)",
                result.function, result.max_error, result.worst_input, result.samples
            );
        } else {
            warn!(
                "{:<13} max error {:.3e} at {} exceeds tolerance {:e}",
                result.function, result.max_error, result.worst_input, report.tolerance
            );
        }
    }

    let json =
        serde_json::to_string_pretty(&report).context("Failed to serialize accuracy report")?;
    println!("{}", json);

    let failed = report.failures().count();
    if failed > 0 {
        anyhow::bail!("{} of {} functions exceeded tolerance", failed, report.results.len());
    }
    info!("All {} functions within tolerance.", report.results.len());
    Ok(())
}
