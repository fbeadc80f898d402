//! Rendering of `(x, y)` rows for stdout.

use crate::config::ConfigError;
use crate::Result;
use serde::Serialize;
use std::str::FromStr;

/// Output formats supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned two-column text
    #[default]
    Table,
    /// JSON array of `{"x": .., "y": ..}` objects
    Json,
    /// `x,y` rows with a header
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Serialize)]
struct Point {
    x: f64,
    y: f64,
}

/// Render rows in the requested format.
pub fn render(format: OutputFormat, rows: &[(f64, f64)]) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Json => {
            let points: Vec<Point> = rows.iter().map(|&(x, y)| Point { x, y }).collect();
            Ok(serde_json::to_string_pretty(&points)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["x", "y"])?;
            for &(x, y) in rows {
                writer.write_record([x.to_string(), y.to_string()])?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

/// Aligned text table; matches `TimeSeries::view` layout.
pub fn render_table(rows: &[(f64, f64)]) -> String {
    let mut out = format!("{:>16} {:>16}\n", "x", "y");
    for &(x, y) in rows {
        out.push_str(&format!("{:>16} {:>16}\n", x, y));
    }
    out
}
