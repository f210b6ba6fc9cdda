//! Physical quantities with exact, checked unit algebra.
//!
//! `measura` is the user-facing crate in this workspace. It re-exports the full API from `measura-core` plus the
//! predefined units (time, length, mass, temperature, angles, derived SI units, metric prefixes).
//!
//! A unit is a dimension, an exact rational magnitude, and an optional origin. Units exist on two sides:
//!
//! - **static**: zero-sized marker types; a value is a `Quantity<U>`, and unit mistakes are compile errors;
//! - **dynamic**: [`DynUnit`] values; a value is a [`DynQuantity`], and unit mistakes are [`UnitError`]s.
//!
//! Both sides share one algebra: products and quotients cancel and merge the same way, and a static unit and its
//! dynamic description always agree.
//!
//! # Quick start
//!
//! ```rust
//! use measura::{Celsius, Kelvins};
//!
//! let c = Kelvins::new(0.0).to::<Celsius>();
//! assert!((c.value() + 273.15).abs() < 1e-12);
//! ```
//!
//! Compose units with `*` and `/`:
//!
//! ```rust
//! use measura::{Joule, Seconds, Watts};
//!
//! let energy = Watts::new(1.0) * Seconds::new(2.0);
//! assert_eq!(energy.to::<Joule>().value(), 2.0);
//! ```
//!
//! Convert between prefixed units:
//!
//! ```rust
//! use measura::{Micrometer, Quantity, Thou};
//!
//! let um = Quantity::<Thou>::new(1.0).to::<Micrometer>();
//! assert!((um.value() - 25.4).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measura::{Kilometers, Seconds};
//!
//! let d = Kilometers::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add different unit types
//! ```
//!
//! ```compile_fail
//! use measura::{Meter, Seconds};
//!
//! let _ = Seconds::new(1.0).to::<Meter>(); // different dimensions
//! ```
//!
//! ```compile_fail
//! use measura::{Kelvin, Kelvins};
//!
//! let _ = Kelvins::new(1.0) + Kelvins::new(2.0); // absolute quantities do not add
//! ```
//!
//! ```compile_fail
//! use measura::{Delta, Kelvin, Kelvins, Quantity};
//!
//! let _ = Kelvins::new(1.0).to::<Delta<Kelvin>>(); // absolute to relative
//! ```
//!
//! ```compile_fail
//! use measura::Meters;
//!
//! let _ = Meters::new(1.0).sqrt().value(); // metre has no square root
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `measura::time` (seconds, minutes, hours, days)
//! - `measura::length` (metres, inches, feet and their prefixed forms)
//! - `measura::mass` (grams, kilograms)
//! - `measura::temperature` (kelvin, Celsius, Fahrenheit, Rankine, electronvolt)
//! - `measura::angular` (radians)
//! - `measura::unitless` (percent)
//! - `measura::derived` (newton, joule, watt, hertz, velocity aliases)
//! - `measura::prefix` (`Nano`, `Micro`, `Milli`, `Kilo`, `Mega`)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `measura-core`.
//! - `serde`: enables `serde` support for `Quantity<U>` and the exact unit primitives.
//!
//! Disable default features for `no_std` (with `alloc`):
//!
//! ```toml
//! [dependencies]
//! measura = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! The static side has no run-time errors: a unit whose exact magnitude overflows `i64` fails to compile. The dynamic
//! side returns [`UnitResult`], with [`UnitError::MagnitudeOverflow`] for such units. The plain [`Rational`]
//! operations panic on overflow or division by zero; their `checked_*` forms return `None`.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use measura_core::*;

/// Derive macro used by `measura-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit`, `crate::TermList` and friends, so it is intended for use inside
/// `measura-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use measura_derive::Unit;

pub use measura_core::units::angular::*;
pub use measura_core::units::derived::*;
pub use measura_core::units::length::*;
pub use measura_core::units::mass::*;
pub use measura_core::units::prefix::*;
pub use measura_core::units::temperature::*;
pub use measura_core::units::time::*;
pub use measura_core::units::unitless::*;
