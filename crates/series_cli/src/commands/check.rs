//! Check command implementation
//!
//! Validates a CSV file against the construction rules shared by every
//! policy, builds the series under each policy and reports its size, its
//! domain and what each policy answers at the domain midpoint.

use std::path::Path;

use series_core::{Interpolation, PairStore, Series, TimeSeries};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::{loader, Result};

/// Outcome of building one policy over the checked data
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyReport {
    /// Policy the series was built with
    pub policy: Interpolation,
    /// Stored keys whose lookup did not return the stored value
    pub mismatched_keys: usize,
    /// Value at the domain midpoint, `None` when the policy has no answer
    pub midpoint_value: Option<f64>,
}

impl PolicyReport {
    /// Whether every stored key returned its stored value
    pub fn is_ok(&self) -> bool {
        self.mismatched_keys == 0
    }
}

/// Summary of a validated data file
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Number of points
    pub points: usize,
    /// Smallest and largest key
    pub domain: (f64, f64),
    /// Whether keys already appear in ascending order
    pub sorted: bool,
    /// Midpoint of the domain
    pub midpoint: f64,
    /// One entry per policy, in [`Interpolation::ALL`] order
    pub policies: Vec<PolicyReport>,
}

impl CheckReport {
    /// Whether every policy passed
    pub fn is_ok(&self) -> bool {
        self.policies.iter().all(PolicyReport::is_ok)
    }
}

fn check_policy(policy: Interpolation, store: &PairStore<f64>, midpoint: f64) -> PolicyReport {
    let series = Series::from_store(policy, store.clone());
    let mismatched_keys = store
        .pairs()
        .iter()
        .filter(|&&(x, y)| series.get(x).map(f64::to_bits) != Ok(y.to_bits()))
        .count();
    if mismatched_keys > 0 {
        warn!(policy = %policy, mismatched_keys, "stored keys did not round-trip");
    }
    PolicyReport {
        policy,
        mismatched_keys,
        midpoint_value: series.get(midpoint).ok(),
    }
}

/// Validate `input` and build a report.
pub fn inspect(config: &CliConfig, input: &Path) -> Result<CheckReport> {
    let pairs = loader::load_pairs(input, config)?;
    let store = PairStore::from_pairs(&pairs)
        .inspect_err(|e| warn!(error = %e, "invalid series data"))?;
    let domain = store.domain();
    let midpoint = domain.0 * 0.5 + domain.1 * 0.5;
    let policies = Interpolation::ALL
        .iter()
        .map(|&policy| check_policy(policy, &store, midpoint))
        .collect();
    Ok(CheckReport {
        points: store.len(),
        domain,
        sorted: store.is_sorted(),
        midpoint,
        policies,
    })
}

/// Run the check command
pub fn run(config: &CliConfig, input: &Path) -> Result<()> {
    let report = inspect(config, input)?;
    info!(points = report.points, ok = report.is_ok(), "series data checked");

    println!("File:    {}", input.display());
    println!("Points:  {}", report.points);
    println!("Domain:  [{}, {}]", report.domain.0, report.domain.1);
    println!("Sorted:  {}", if report.sorted { "yes" } else { "no" });
    for policy in &report.policies {
        let status = if policy.is_ok() { "ok" } else { "FAILED" };
        let at_mid = match policy.midpoint_value {
            Some(y) => y.to_string(),
            None => "no value".to_string(),
        };
        println!(
            "  {:<8} {:<6} y({}) = {}",
            policy.policy.as_str(),
            status,
            report.midpoint,
            at_mid
        );
    }
    Ok(())
}
