//! Dual-number queries over `f64` series.
//!
//! The series store plain `f64` pairs; only the query carries a derivative.
//! Bracket selection happens on the real part, so the propagated derivative
//! is the slope of the policy at `x`: the segment slope for linear
//! interpolation inside the domain, zero everywhere else.

use crate::error::SeriesError;
use crate::exact::ExactSeries;
use crate::linear::LinearSeries;
use crate::series::Series;
use crate::step::StepSeries;
use crate::traits::TimeSeries;
use num_dual::DualNum;

impl ExactSeries<f64> {
    /// Look up a dual-number query. Stored values are constants, so the
    /// derivative part of a successful result is zero.
    pub fn get_dual<D: DualNum<f64>>(&self, x: D) -> Result<D, SeriesError> {
        self.get(x.re()).map(D::from)
    }
}

impl StepSeries<f64> {
    /// Look up a dual-number query. The result is piecewise constant, so its
    /// derivative part is zero.
    pub fn get_dual<D: DualNum<f64>>(&self, x: D) -> Result<D, SeriesError> {
        self.get(x.re()).map(D::from)
    }
}

impl LinearSeries<f64> {
    /// Interpolate at a dual-number query.
    ///
    /// Strictly inside a segment the derivative part is scaled by
    /// `(y2 - y1) / (x2 - x1)`. On a stored key or outside the domain the
    /// result is the stored constant.
    ///
    /// # Errors
    ///
    /// * `SeriesError::NoValueAt` - The real part of `x` is NaN
    pub fn get_dual<D: DualNum<f64>>(&self, x: D) -> Result<D, SeriesError> {
        let re = x.re();
        let (x_first, y_first) = self.store().first();
        let (x_last, y_last) = self.store().last();

        if re < x_first {
            return Ok(D::from(y_first));
        }
        if re > x_last {
            return Ok(D::from(y_last));
        }

        let pairs = self.store().pairs();
        let i = self.upper_index(re);
        if i == 0 {
            return Err(SeriesError::NoValueAt { x: re });
        }

        let (x1, y1) = pairs[i - 1];
        if x1 == re {
            return Ok(D::from(y1));
        }
        let (x2, y2) = pairs[i];

        let scale = if (x2 - x1).is_finite() { 1.0 } else { 0.5 };
        let t = (x * scale - x1 * scale) / (x2 * scale - x1 * scale);
        Ok(t.clone() * y2 + (-t + 1.0) * y1)
    }
}

impl Series<f64> {
    /// Dispatch a dual-number query to the wrapped variant.
    pub fn get_dual<D: DualNum<f64>>(&self, x: D) -> Result<D, SeriesError> {
        match self {
            Series::Exact(series) => series.get_dual(x),
            Series::Step(series) => series.get_dual(x),
            Series::Linear(series) => series.get_dual(x),
        }
    }
}
