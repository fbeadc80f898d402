//! Query command implementation
//!
//! Looks up each requested x in a series built from a CSV file.

use std::path::Path;

use series_core::{Series, TimeSeries};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::{loader, output, Result};

/// Evaluate `xs` against the series in `input` and return the rendered rows.
pub fn evaluate(config: &CliConfig, input: &Path, xs: &[f64]) -> Result<String> {
    let pairs = loader::load_pairs(input, config)?;
    let series = Series::new(config.policy, &pairs)?;
    info!(policy = %config.policy, queries = xs.len(), "querying series");

    let ys = series.get_many(xs)?;
    for (x, y) in xs.iter().zip(&ys) {
        debug!(x, y, "resolved");
    }

    let rows: Vec<(f64, f64)> = xs.iter().copied().zip(ys).collect();
    output::render(config.format, &rows)
}

/// Run the query command
pub fn run(config: &CliConfig, input: &Path, xs: &[f64]) -> Result<()> {
    let rendered = evaluate(config, input, xs)?;
    print!("{}", rendered);
    Ok(())
}
