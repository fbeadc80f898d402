//! # series_core: Lookup and Interpolation over Sparse 1D Series
//!
//! Answers "what is y at x?" for a set of irregularly spaced `(x, y)`
//! samples under one of three policies:
//! - [`ExactSeries`]: stored keys only, anything else is a lookup failure
//! - [`StepSeries`]: value of the nearest stored key (zero-order hold)
//! - [`LinearSeries`]: piecewise linear between bracketing keys, clamped
//!   to the edge values outside the stored domain
//!
//! All variants implement [`TimeSeries`]; [`Series`] wraps them for static
//! dispatch when the policy is chosen at runtime.
//!
//! ## Invariants
//!
//! A series is validated once at construction (non-empty, finite and unique
//! keys) and is immutable afterwards, so it can be shared freely between
//! threads. Every stored key returns its stored value bit-for-bit.
//!
//! ## Usage Examples
//!
//! ```rust
//! use series_core::{Interpolation, LinearSeries, Series, TimeSeries};
//!
//! let series = LinearSeries::from_pairs(&[(0.0, 0.0), (10.0, 10.0), (20.0, 100.0)]).unwrap();
//! assert_eq!(series.get(15.0).unwrap(), 55.0);
//! assert_eq!(series.get(-1.0).unwrap(), 0.0);
//!
//! let policy: Interpolation = "step".parse().unwrap();
//! let step = Series::new(policy, &[(1.0, 10.0), (4.0, 40.0)]).unwrap();
//! assert_eq!(step.get(3.0).unwrap(), 40.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): `get_dual` queries with num-dual numbers,
//!   returning the slope of the policy alongside the value
//! - `serde`: serialisation for [`Interpolation`], [`ErrorKind`] and [`SeriesError`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod exact;
pub mod linear;
pub mod series;
pub mod step;
pub mod store;
pub mod traits;

#[cfg(feature = "num-dual-mode")]
mod dual;


pub use error::{ErrorKind, SeriesError};
pub use exact::ExactSeries;
pub use linear::LinearSeries;
pub use series::{Interpolation, ParseInterpolationError, Series};
pub use step::StepSeries;
pub use store::PairStore;
pub use traits::TimeSeries;
