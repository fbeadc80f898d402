//! The query contract shared by every series variant.

use crate::error::SeriesError;
use crate::store::to_f64;
use num_traits::Float;
use std::fmt::Write;

/// A one-dimensional series answering "what is y at x?".
///
/// Implementations differ only in how [`TimeSeries::get`] treats a query
/// point that is not a stored key. A stored key always returns its stored
/// value unchanged.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use series_core::{StepSeries, TimeSeries};
///
/// let series = StepSeries::from_pairs(&[(1.0, 10.0), (4.0, 40.0)]).unwrap();
/// assert_eq!(series.get(3.0).unwrap(), 40.0);
/// assert_eq!(series.domain(), (1.0, 4.0));
/// ```
pub trait TimeSeries<T: Float> {
    /// Return the value at `x` under this series' policy.
    ///
    /// # Errors
    ///
    /// * `SeriesError::NoValueAt` - The policy produces no value at `x`
    fn get(&self, x: T) -> Result<T, SeriesError>;

    /// Return the smallest and largest stored key.
    fn domain(&self) -> (T, T);

    /// Return the stored pairs in storage order.
    fn pairs(&self) -> &[(T, T)];

    /// Number of stored points.
    #[inline]
    fn len(&self) -> usize {
        self.pairs().len()
    }

    /// Always false for a constructed series.
    #[inline]
    fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Query several points, stopping at the first failure.
    ///
    /// # Example
    ///
    /// ```
    /// use series_core::{LinearSeries, TimeSeries};
    ///
    /// let series = LinearSeries::from_pairs(&[(0.0, 0.0), (10.0, 100.0)]).unwrap();
    /// let ys = series.get_many(&[-5.0, 5.0, 15.0]).unwrap();
    /// assert_eq!(ys, vec![0.0, 50.0, 100.0]);
    /// ```
    fn get_many(&self, xs: &[T]) -> Result<Vec<T>, SeriesError> {
        xs.iter().map(|&x| self.get(x)).collect()
    }

    /// Render the stored pairs as a two-column text table.
    fn view(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:>16} {:>16}", "x", "y");
        for &(x, y) in self.pairs() {
            let _ = writeln!(out, "{:>16} {:>16}", to_f64(x), to_f64(y));
        }
        out
    }
}
