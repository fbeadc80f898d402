//! Policy selection and static dispatch over the series variants.
//!
//! This module provides:
//! - [`Interpolation`]: the lookup policy applied to non-key queries
//! - [`Series`]: enum wrapping the concrete variants behind [`TimeSeries`]

use crate::error::SeriesError;
use crate::exact::ExactSeries;
use crate::linear::LinearSeries;
use crate::step::StepSeries;
use crate::store::PairStore;
use crate::traits::TimeSeries;
use num_traits::Float;
use std::str::FromStr;

/// Lookup policy.
///
/// # Variants
///
/// - `Exact`: stored keys only
/// - `Step`: value of the nearest stored key
/// - `Linear`: blend of the bracketing keys, clamped at the edges
///
/// # Example
///
/// ```
/// use series_core::Interpolation;
///
/// let policy: Interpolation = "nearest".parse().unwrap();
/// assert_eq!(policy, Interpolation::Step);
/// assert_eq!(policy.as_str(), "step");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Interpolation {
    /// Stored keys only
    Exact,
    /// Nearest stored key
    Step,
    /// Piecewise linear with edge clamping
    #[default]
    Linear,
}

impl Interpolation {
    /// All policies, in declaration order.
    pub const ALL: [Interpolation; 3] = [
        Interpolation::Exact,
        Interpolation::Step,
        Interpolation::Linear,
    ];

    /// Return the canonical lowercase name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Interpolation::Exact => "exact",
            Interpolation::Step => "step",
            Interpolation::Linear => "linear",
        }
    }
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown interpolation policy: {0}. Supported: exact, step, linear")]
pub struct ParseInterpolationError(
    /// The unrecognised input
    pub String,
);

impl FromStr for Interpolation {
    type Err = ParseInterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(Interpolation::Exact),
            "step" | "nearest" | "zoh" => Ok(Interpolation::Step),
            "linear" | "lerp" => Ok(Interpolation::Linear),
            _ => Err(ParseInterpolationError(s.to_string())),
        }
    }
}

/// Static dispatch enum over the concrete series variants.
///
/// # Example
///
/// ```
/// use series_core::{Interpolation, Series, TimeSeries};
///
/// let pairs: [(f64, f64); 2] = [(1.0, 10.0), (5.0, 50.0)];
///
/// let exact = Series::new(Interpolation::Exact, &pairs).unwrap();
/// assert!(exact.get(3.0).is_err());
///
/// let step = Series::new(Interpolation::Step, &pairs).unwrap();
/// assert_eq!(step.get(3.0).unwrap(), 10.0);
///
/// let linear = Series::new(Interpolation::Linear, &pairs).unwrap();
/// assert!((linear.get(3.0).unwrap() - 30.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Series<T: Float> {
    /// Exact-match series
    Exact(ExactSeries<T>),
    /// Nearest-neighbour series
    Step(StepSeries<T>),
    /// Piecewise linear series
    Linear(LinearSeries<T>),
}

impl<T: Float> Series<T> {
    /// Build the variant for `policy` from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`PairStore::from_pairs`].
    pub fn new(policy: Interpolation, pairs: &[(T, T)]) -> Result<Self, SeriesError> {
        PairStore::from_pairs(pairs).map(|store| Self::from_store(policy, store))
    }

    /// Build the variant for `policy` from parallel key and value slices.
    pub fn from_slices(policy: Interpolation, xs: &[T], ys: &[T]) -> Result<Self, SeriesError> {
        PairStore::from_slices(xs, ys).map(|store| Self::from_store(policy, store))
    }

    /// Wrap a validated store in the variant for `policy`.
    pub fn from_store(policy: Interpolation, store: PairStore<T>) -> Self {
        match policy {
            Interpolation::Exact => Series::Exact(ExactSeries::from_store(store)),
            Interpolation::Step => Series::Step(StepSeries::from_store(store)),
            Interpolation::Linear => Series::Linear(LinearSeries::from_store(store)),
        }
    }

    /// Policy of the wrapped variant.
    #[inline]
    pub fn interpolation(&self) -> Interpolation {
        match self {
            Series::Exact(_) => Interpolation::Exact,
            Series::Step(_) => Interpolation::Step,
            Series::Linear(_) => Interpolation::Linear,
        }
    }
}

impl<T: Float> TimeSeries<T> for Series<T> {
    fn get(&self, x: T) -> Result<T, SeriesError> {
        match self {
            Series::Exact(series) => series.get(x),
            Series::Step(series) => series.get(x),
            Series::Linear(series) => series.get(x),
        }
    }

    fn domain(&self) -> (T, T) {
        match self {
            Series::Exact(series) => series.domain(),
            Series::Step(series) => series.domain(),
            Series::Linear(series) => series.domain(),
        }
    }

    fn pairs(&self) -> &[(T, T)] {
        match self {
            Series::Exact(series) => series.pairs(),
            Series::Step(series) => series.pairs(),
            Series::Linear(series) => series.pairs(),
        }
    }
}

impl<T: Float> From<ExactSeries<T>> for Series<T> {
    fn from(series: ExactSeries<T>) -> Self {
        Series::Exact(series)
    }
}

impl<T: Float> From<StepSeries<T>> for Series<T> {
    fn from(series: StepSeries<T>) -> Self {
        Series::Step(series)
    }
}

impl<T: Float> From<LinearSeries<T>> for Series<T> {
    fn from(series: LinearSeries<T>) -> Self {
        Series::Linear(series)
    }
}
