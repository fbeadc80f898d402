//! Exact-match series: no interpolation.

use crate::error::SeriesError;
use crate::store::{to_f64, PairStore};
use crate::traits::TimeSeries;
use num_traits::Float;
use tracing::debug;

/// Series that only answers for stored keys.
///
/// # Example
///
/// ```
/// use series_core::{ExactSeries, TimeSeries};
///
/// let series = ExactSeries::from_pairs(&[(1.0, 10.0), (5.0, 50.0)]).unwrap();
/// assert_eq!(series.get(5.0).unwrap(), 50.0);
/// assert!(series.get(3.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExactSeries<T: Float> {
    store: PairStore<T>,
}

impl<T: Float> ExactSeries<T> {
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
        debug!(points = store.len(), "built exact series");
        Self { store }
    }

    /// Returns the underlying store.
    #[inline]
    pub fn store(&self) -> &PairStore<T> {
        &self.store
    }
}

impl<T: Float> TimeSeries<T> for ExactSeries<T> {
    fn get(&self, x: T) -> Result<T, SeriesError> {
        self.store
            .lookup(x)
            .ok_or_else(|| SeriesError::NoValueAt { x: to_f64(x) })
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_stored_keys() {
        let series = ExactSeries::from_pairs(&[(1.0, 10.0), (5.0, 50.0), (-2.0, 7.5)]).unwrap();
        assert_eq!(series.get(1.0).unwrap(), 10.0);
        assert_eq!(series.get(5.0).unwrap(), 50.0);
        assert_eq!(series.get(-2.0).unwrap(), 7.5);
    }

    #[test]
    fn test_get_missing_key_fails() {
        let series = ExactSeries::from_pairs(&[(1.0, 10.0), (5.0, 50.0)]).unwrap();
        let err = series.get(3.0).unwrap_err();
        assert_eq!(err, SeriesError::NoValueAt { x: 3.0 });
        assert!(err.is_lookup_failure());
    }

    #[test]
    fn test_get_nan_fails() {
        let series = ExactSeries::from_pairs(&[(1.0, 10.0)]).unwrap();
        assert!(series.get(f64::NAN).unwrap_err().is_lookup_failure());
    }

    #[test]
    fn test_no_tolerance_on_near_keys() {
        let series = ExactSeries::from_pairs(&[(0.1 + 0.2, 1.0)]).unwrap();
        assert!(series.get(0.3).is_err());
        assert_eq!(series.get(0.1 + 0.2).unwrap(), 1.0);
    }

    #[test]
    fn test_domain_and_len() {
        let series = ExactSeries::from_slices(&[4.0, 2.0, 9.0], &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(series.domain(), (2.0, 9.0));
        assert_eq!(series.len(), 3);
        assert_eq!(series.store().keys(), vec![4.0, 2.0, 9.0]);
    }

    #[test]
    fn test_f32() {
        let series = ExactSeries::from_pairs(&[(1.0_f32, 2.0_f32)]).unwrap();
        assert_eq!(series.get(1.0_f32).unwrap(), 2.0_f32);
    }
}
