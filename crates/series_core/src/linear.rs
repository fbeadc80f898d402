//! Piecewise linear series with flat clamping outside the stored domain.

use crate::error::SeriesError;
use crate::store::{to_f64, PairStore};
use crate::traits::TimeSeries;
use num_traits::Float;
use tracing::{debug, warn};

/// Piecewise linear series.
///
/// Keeps a sorted copy of the caller's pairs. Queries inside the domain blend
/// the two bracketing points; queries outside return the nearest edge value
/// (no extrapolation).
///
/// # Construction
///
/// Pairs may be supplied in any order. They are copied and sorted by key;
/// the caller's slice is left as it was. A single point is allowed and
/// yields a constant series.
///
/// # Example
///
/// ```
/// use series_core::{LinearSeries, TimeSeries};
///
/// let series = LinearSeries::from_pairs(&[(20.0, 100.0), (0.0, 0.0), (10.0, 10.0)]).unwrap();
/// assert_eq!(series.get(15.0).unwrap(), 55.0);
/// assert_eq!(series.get(-5.0).unwrap(), 0.0);
/// assert_eq!(series.get(25.0).unwrap(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSeries<T: Float> {
    store: PairStore<T>,
}

impl<T: Float> LinearSeries<T> {
    /// Construct from `(x, y)` pairs in any order.
    ///
    /// # Errors
    ///
    /// Same as [`PairStore::from_pairs`].
    pub fn from_pairs(pairs: &[(T, T)]) -> Result<Self, SeriesError> {
        PairStore::from_pairs(pairs).map(Self::from_store)
    }

    /// Construct from parallel key and value slices in any order.
    pub fn from_slices(xs: &[T], ys: &[T]) -> Result<Self, SeriesError> {
        PairStore::from_slices(xs, ys).map(Self::from_store)
    }

    /// Take ownership of a validated store, sorting it by key.
    pub fn from_store(store: PairStore<T>) -> Self {
        let store = store.sorted();
        let (lo, hi) = store.domain();
        debug!(
            points = store.len(),
            x_min = to_f64(lo),
            x_max = to_f64(hi),
            "built linear series"
        );
        Self { store }
    }

    /// Returns the underlying store, sorted by key.
    #[inline]
    pub fn store(&self) -> &PairStore<T> {
        &self.store
    }

    /// Index of the first key strictly greater than `x` (O(log n)).
    #[inline]
    pub(crate) fn upper_index(&self, x: T) -> usize {
        self.store.pairs().partition_point(|&(xi, _)| xi <= x)
    }
}

/// Blend two points by the distance of `x` to each.
///
/// Each endpoint is weighted by the distance to the other one, which is the
/// usual `y1 + (y2 - y1) * (x - x1) / (x2 - x1)` for `x1 <= x <= x2`.
/// Coincident endpoints return `y1`.
///
/// Distances are halved when their sum overflows, so brackets spanning more
/// than `T::max_value()` still give finite weights.
pub fn blend<T: Float>((x1, y1): (T, T), (x2, y2): (T, T), x: T) -> T {
    let mut d1 = (x - x1).abs();
    let mut d2 = (x - x2).abs();
    if !(d1 + d2).is_finite() {
        let half = T::one() / (T::one() + T::one());
        d1 = (x * half - x1 * half).abs();
        d2 = (x * half - x2 * half).abs();
    }
    let total = d1 + d2;
    if total == T::zero() {
        warn!(x1 = to_f64(x1), x2 = to_f64(x2), "degenerate bracket");
        return y1;
    }
    y1 * (d2 / total) + y2 * (d1 / total)
}

impl<T: Float> TimeSeries<T> for LinearSeries<T> {
    /// Interpolate at `x`, clamping to the edge values outside the domain.
    ///
    /// # Errors
    ///
    /// * `SeriesError::NoValueAt` - Only for a NaN query, which has no bracket
    fn get(&self, x: T) -> Result<T, SeriesError> {
        let (x_first, y_first) = self.store.first();
        let (x_last, y_last) = self.store.last();

        if x < x_first {
            return Ok(y_first);
        }
        if x > x_last {
            return Ok(y_last);
        }

        let pairs = self.store.pairs();
        let i = self.upper_index(x);
        if i == 0 {
            // Only reachable when x compares false against every key (NaN)
            return Err(SeriesError::NoValueAt { x: to_f64(x) });
        }

        let left = pairs[i - 1];
        if left.0 == x {
            return Ok(left.1);
        }

        // x < x_last here, so a right neighbour exists
        Ok(blend(left, pairs[i], x))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.store.first().0, self.store.last().0)
    }

    #[inline]
    fn pairs(&self) -> &[(T, T)] {
        self.store.pairs()
    }
}
