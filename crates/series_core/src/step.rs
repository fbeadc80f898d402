//! Nearest-neighbour (zero-order hold) series.

use crate::error::SeriesError;
use crate::store::PairStore;
use crate::traits::TimeSeries;
use num_traits::Float;
use tracing::debug;

/// Series returning the value of the stored key closest to the query.
///
/// Pairs are scanned in insertion order and the best candidate is replaced
/// only on a strictly smaller distance, so when two keys are equally close
/// the one inserted first wins.
///
/// # Example
///
/// ```
/// use series_core::{StepSeries, TimeSeries};
///
/// let series = StepSeries::from_pairs(&[(1.0, 10.0), (5.0, 50.0)]).unwrap();
/// assert_eq!(series.get(4.0).unwrap(), 50.0);
/// // Equidistant: first inserted wins
/// assert_eq!(series.get(3.0).unwrap(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StepSeries<T: Float> {
    store: PairStore<T>,
}

impl<T: Float> StepSeries<T> {
    /// Construct from `(x, y)` pairs, see [`PairStore::from_pairs`].
    pub fn from_pairs(pairs: &[(T, T)]) -> Result<Self, SeriesError> {
        PairStore::from_pairs(pairs).map(Self::from_store)
    }

    /// Construct from parallel key and value slices.
    pub fn from_slices(xs: &[T], ys: &[T]) -> Result<Self, SeriesError> {
        PairStore::from_slices(xs, ys).map(Self::from_store)
    }

    /// Wrap an already validated store.
    pub fn from_store(store: PairStore<T>) -> Self {
        debug!(points = store.len(), "built step series");
        Self { store }
    }

    /// Returns the underlying store.
    #[inline]
    pub fn store(&self) -> &PairStore<T> {
        &self.store
    }

    fn nearest(&self, x: T) -> T {
        let pairs = self.store.pairs();
        let mut best = pairs[0];
        for &(xi, yi) in &pairs[1..] {
            if (xi - x).abs() < (best.0 - x).abs() {
                best = (xi, yi);
            }
        }
        best.1
    }
}

impl<T: Float> TimeSeries<T> for StepSeries<T> {
    /// Value of the closest stored key; never fails on a constructed series.
    fn get(&self, x: T) -> Result<T, SeriesError> {
        if let Some(y) = self.store.lookup(x) {
            return Ok(y);
        }
        Ok(self.nearest(x))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        self.store.domain()
    }

    #[inline]
    fn pairs(&self) -> &[(T, T)] {
        self.store.pairs()
    }
}
