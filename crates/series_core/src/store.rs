//! Validated storage of `(x, y)` pairs shared by every series variant.

use crate::error::SeriesError;
use num_traits::Float;
use std::cmp::Ordering;

/// Convert a generic float to `f64` for error payloads.
#[inline]
pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[inline]
fn cmp_keys<T: Float>(a: &T, b: &T) -> Ordering {
    // Keys are finite after validation, so the fallback never applies.
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Exact-match lookup over a slice of `(x, y)` pairs.
///
/// Returns the `y` paired with the first key equal to `x`. Every series
/// variant tries this before applying its own policy.
///
/// # Example
///
/// ```
/// use series_core::store::exact_match;
///
/// let pairs = [(1.0, 10.0), (2.0, 20.0)];
/// assert_eq!(exact_match(&pairs, 2.0), Some(20.0));
/// assert_eq!(exact_match(&pairs, 1.5), None);
/// ```
#[inline]
pub fn exact_match<T: Float>(pairs: &[(T, T)], x: T) -> Option<T> {
    pairs.iter().find(|&&(xi, _)| xi == x).map(|&(_, yi)| yi)
}

/// Owned, validated collection of `(x, y)` pairs.
///
/// Pairs keep the order the caller supplied them in. Construction copies
/// the input, so the caller's data is never reordered or otherwise touched.
///
/// # Invariants
///
/// - At least one pair
/// - Every key is finite
/// - No two keys are equal
#[derive(Debug, Clone, PartialEq)]
pub struct PairStore<T: Float> {
    pairs: Vec<(T, T)>,
}

impl<T: Float> PairStore<T> {
    /// Build a store from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// * `SeriesError::EmptySeries` - No pairs supplied
    /// * `SeriesError::NonFiniteKey` - A key is NaN or infinite
    /// * `SeriesError::DuplicateKey` - Two pairs share a key
    ///
    /// # Example
    ///
    /// ```
    /// use series_core::store::PairStore;
    ///
    /// let store = PairStore::from_pairs(&[(5.0, 50.0), (1.0, 10.0)]).unwrap();
    /// assert_eq!(store.keys(), vec![5.0, 1.0]);
    ///
    /// assert!(PairStore::<f64>::from_pairs(&[]).is_err());
    /// ```
    pub fn from_pairs(pairs: &[(T, T)]) -> Result<Self, SeriesError> {
        Self::validate(pairs)?;
        Ok(Self {
            pairs: pairs.to_vec(),
        })
    }

    /// Build a store from parallel key and value slices.
    ///
    /// # Errors
    ///
    /// * `SeriesError::LengthMismatch` - `xs` and `ys` differ in length
    /// * Any error from [`PairStore::from_pairs`]
    pub fn from_slices(xs: &[T], ys: &[T]) -> Result<Self, SeriesError> {
        if xs.len() != ys.len() {
            return Err(SeriesError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::validate(&pairs)?;
        Ok(Self { pairs })
    }

    fn validate(pairs: &[(T, T)]) -> Result<(), SeriesError> {
        if pairs.is_empty() {
            return Err(SeriesError::EmptySeries);
        }

        if let Some(index) = pairs.iter().position(|&(x, _)| !x.is_finite()) {
            return Err(SeriesError::NonFiniteKey { index });
        }

        let mut keys: Vec<T> = pairs.iter().map(|&(x, _)| x).collect();
        keys.sort_by(cmp_keys);
        if let Some(w) = keys.windows(2).find(|w| w[0] == w[1]) {
            return Err(SeriesError::DuplicateKey { x: to_f64(w[0]) });
        }

        Ok(())
    }

    /// Consume the store and return it ordered by ascending key.
    pub fn sorted(mut self) -> Self {
        self.pairs.sort_by(|a, b| cmp_keys(&a.0, &b.0));
        self
    }

    /// True if keys are in strictly ascending order.
    pub fn is_sorted(&self) -> bool {
        self.pairs.windows(2).all(|w| w[0].0 < w[1].0)
    }

    /// Returns the stored pairs in storage order.
    #[inline]
    pub fn pairs(&self) -> &[(T, T)] {
        &self.pairs
    }

    /// Returns the keys in storage order.
    pub fn keys(&self) -> Vec<T> {
        self.pairs.iter().map(|&(x, _)| x).collect()
    }

    /// Returns the values in storage order.
    pub fn values(&self) -> Vec<T> {
        self.pairs.iter().map(|&(_, y)| y).collect()
    }

    /// Returns the number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false for a constructed store.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First pair in storage order.
    #[inline]
    pub fn first(&self) -> (T, T) {
        self.pairs[0]
    }

    /// Last pair in storage order.
    #[inline]
    pub fn last(&self) -> (T, T) {
        self.pairs[self.pairs.len() - 1]
    }

    /// Smallest and largest key, regardless of storage order.
    pub fn domain(&self) -> (T, T) {
        let (x0, _) = self.first();
        self.pairs
            .iter()
            .fold((x0, x0), |(lo, hi), &(x, _)| (lo.min(x), hi.max(x)))
    }

    /// Exact-match lookup, see [`exact_match`].
    #[inline]
    pub fn lookup(&self, x: T) -> Option<T> {
        exact_match(&self.pairs, x)
    }
}
