//! # timespec
//!
//! Arithmetic and conversion utilities over fixed-point time values.
//!
//! This library provides two value types for time representation:
//!
//! - [`TimeSpec`]: seconds plus nanoseconds, the primary representation
//! - [`TimeVal`]: seconds plus microseconds, for interop with facilities
//!   that only carry microsecond resolution
//!
//! Both types keep their sub-second field normalized: the fractional part
//! always lies in `[0, 1 second)` and the sign of the value is carried
//! entirely by the seconds field, so -0.5 s is stored as -1 s plus
//! 500 000 000 ns. Every constructor and arithmetic operation returns
//! values in this canonical form.
//!
//! ## Examples
//!
//! ```
//! use timespec::{TimeSpec, TimeVal};
//!
//! let a = TimeSpec::from_milliseconds(900);
//! let b = TimeSpec::from_milliseconds(200);
//! let sum = a + b;
//! assert_eq!(sum, TimeSpec::new(1, 100_000_000));
//!
//! // Negative values normalize instead of truncating
//! let neg = TimeSpec::from_milliseconds(-1500);
//! assert_eq!(neg.tv_sec, -2);
//! assert_eq!(neg.tv_nsec, 500_000_000);
//! assert_eq!(neg.total_seconds(), -1.5);
//!
//! // Microsecond-resolution interop
//! let tv: TimeVal = sum.to_timeval();
//! assert_eq!(tv, TimeVal::new(1, 100_000));
//! ```
//!
//! ## Feature Flags
//!
//! - `std`: enables conversions to/from `SystemTime`, `Duration` and `Instant`
//! - `no_std`: default feature for no-std environments
//! - `serde`: `Serialize`/`Deserialize` derives on both value types

#![cfg_attr(not(feature = "std"), no_std)]

mod timespec;
pub use timespec::TimeSpec;

mod timeval;
pub use timeval::TimeVal;

/// Number of nanoseconds in one second
pub const NSEC_PER_SEC: i64 = 1_000_000_000;
/// Number of microseconds in one second
pub const USEC_PER_SEC: i64 = 1_000_000;

// Standard library conversions (only when std feature is enabled)
#[cfg(feature = "std")]
mod std_conversions;
#[cfg(feature = "std")]
pub use std_conversions::TimeConversionError;
