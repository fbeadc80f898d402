//! Show command implementation
//!
//! Prints the stored pairs in the order the selected policy keeps them.

use std::path::Path;

use series_core::{Series, TimeSeries};
use tracing::info;

use crate::config::CliConfig;
use crate::output::{self, OutputFormat};
use crate::{loader, Result};

/// Run the show command
pub fn run(config: &CliConfig, input: &Path) -> Result<()> {
    let pairs = loader::load_pairs(input, config)?;
    let series = Series::new(config.policy, &pairs)?;
    info!(policy = %series.interpolation(), points = series.len(), "showing series");

    let rendered = match config.format {
        OutputFormat::Table => series.view(),
        format => output::render(format, series.pairs())?,
    };
    print!("{}", rendered);
    Ok(())
}
