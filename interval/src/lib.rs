//! Bounded interval arithmetic over integers and exact rationals.
//!
//! This crate is the arithmetic primitive underneath `ivfind-stats`. Every
//! quantity is exact: integers are `i64` and fractional multipliers are
//! [`Ratio`] (`num_rational::Ratio<i64>`) values kept in lowest terms.
//! Nothing here touches floating point.
//!
//! # Main Types
//!
//! - [`Interval`] - closed range `[min, max]` over any [`Scalar`]
//! - [`Ratio`] - exact rational number with a positive denominator, built
//!   with [`ratio`]
//! - [`IntervalError`] - failures raised by interval operations
//!
//! # Inverting floor multiplication
//!
//! The central operation is [`Interval::invert_floor_mul`]. Given a product
//! `p = floor(x * n / d)` it recovers every integer `x` that could have
//! produced it:
//!
//! ```
//! use ivfind_interval::{Interval, ratio};
//!
//! let m = ratio(11, 10).unwrap();
//! let x = Interval::exact(17_i64).invert_floor_mul(m).unwrap();
//! assert_eq!(x, Interval::exact(16));
//! ```

mod error;
mod integer;
mod interval;
mod ratio;

pub use error::IntervalError;
pub use interval::{Interval, Scalar};
pub use ratio::{Ratio, ratio};
