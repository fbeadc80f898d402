//! CSV loading of `(x, y)` pairs.
//!
//! The first two columns of each record are parsed as `x` and `y`; any
//! further columns are ignored. Lines starting with `#` are comments.

use crate::config::CliConfig;
use crate::{CliError, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load pairs from a CSV file.
pub fn load_pairs(path: &Path, config: &CliConfig) -> Result<Vec<(f64, f64)>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    let pairs = read_pairs(file, config)?;
    info!(path = %path.display(), points = pairs.len(), "loaded series data");
    Ok(pairs)
}

/// Parse pairs from any CSV source.
pub fn read_pairs<R: Read>(source: R, config: &CliConfig) -> Result<Vec<(f64, f64)>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte())
        .has_headers(config.has_headers)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        if record.iter().all(str::is_empty) {
            debug!(line, "skipping blank record");
            continue;
        }
        if record.len() < 2 {
            return Err(CliError::Parse {
                line,
                message: format!("expected 2 columns, found {}", record.len()),
            });
        }

        let x = parse_cell(&record[0], "x", line)?;
        let y = parse_cell(&record[1], "y", line)?;
        pairs.push((x, y));
    }
    Ok(pairs)
}

fn parse_cell(cell: &str, column: &str, line: u64) -> Result<f64> {
    cell.parse::<f64>().map_err(|e| CliError::Parse {
        line,
        message: format!("invalid {} value {:?}: {}", column, cell, e),
    })
}
