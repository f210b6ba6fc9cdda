//! Core type system for physical units and quantities.
//!
//! `measura-core` models units exactly and checks them twice over:
//!
//! - A *unit* is described by a [`Dimension`] (exponents over the seven SI base quantities), an exact [`Rational`]
//!   magnitude relative to the coherent SI unit, and an [`Origin`] that is empty for relative units and filled for
//!   absolute ones (degree Celsius has its zero at `273.15 K`).
//! - **Static units** are zero-sized marker types implementing [`Unit`]. Products, quotients, powers and roots of
//!   static units are types ([`Prod`], [`Per`], [`Pow`], [`Root`]) whose canonical form ([`TermList`]) is computed in
//!   constant evaluation, and every unit rule is a compile error.
//! - **Dynamic units** ([`DynUnit`]) carry the same information at run time and report violations as [`UnitError`].
//! - A [`Quantity<U, T>`] is a value tagged with a static unit; a [`DynQuantity<T>`] pairs a value with a dynamic
//!   unit. Conversions between compatible units are affine maps computed exactly by [`Conversion`].
//!
//! Most users should depend on `measura` (the facade crate) unless they need direct access to these primitives.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use measura_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Compose units with `*` and `/`; the result type carries the product:
//!
//! ```rust
//! use measura_core::{Per, Quantity};
//! use measura_core::length::{Meter, Meters};
//! use measura_core::time::{Second, Seconds};
//!
//! let v: Quantity<Per<Meter, Second>> = Meters::new(100.0) / Seconds::new(20.0);
//! assert!((v.value() - 5.0).abs() < 1e-12);
//! ```
//!
//! Absolute scales convert with an offset:
//!
//! ```rust
//! use measura_core::temperature::{Celsius, Kelvins};
//!
//! let c = Kelvins::new(0.0).to::<Celsius>();
//! assert!((c.value() + 273.15).abs() < 1e-12);
//! ```
//!
//! Units only known at run time use the dynamic side:
//!
//! ```rust
//! use measura_core::{DynQuantity, Unit};
//! use measura_core::derived::{Joule, Watt};
//! use measura_core::time::Second;
//!
//! let energy = DynQuantity::new(1.0, Watt::describe()) * DynQuantity::new(2.0, Second::describe());
//! assert_eq!(energy.to(&Joule::describe()).unwrap().value(), 2.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `measura-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! measura-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! The crate still needs `alloc` for unit names. When `std` is disabled, floating-point math is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for [`Rational`], [`Dimension`], [`Origin`] and `Quantity<U, T>`; a quantity
//!   serializes as its raw value, or with its unit symbol via `serde_with_unit`.
//!
//! # Panics and errors
//!
//! Static unit rules are enforced at compile time. Dynamic operations return [`UnitResult`]; a unit whose exact
//! magnitude does not fit `i64` (such as `nm^3`) is reported as [`UnitError::MagnitudeOverflow`]. The panicking
//! [`Rational`] operations (zero denominator, inverting zero, `i64` overflow) back the static side, where a panic is
//! a compile error; [`Rational`] also offers `checked_*` forms. Quantity arithmetic follows IEEE-754.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod algebra;
mod conversion;
mod dimension;
mod dyn_quantity;
mod dynamic;
mod error;
mod macros;
mod origin;
mod quantity;
mod rational;
mod scalar;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use algebra::{Cbrt, Delta, Per, Pow, Prod, Root, Sqrt, Term, TermList, MAX_TERMS};
pub use conversion::{check_compatible, Conversion};
pub use dimension::Dimension;
pub use dyn_quantity::DynQuantity;
pub use dynamic::{DynUnit, NamedUnit, PowerTerm, Product};
pub use error::{UnitError, UnitResult};
pub use origin::Origin;
pub use quantity::Quantity;
pub use rational::Rational;
pub use scalar::Scalar;
pub use unit::{
    same_unit, units_equal, AbsoluteScale, RelativeScale, Scale, Unit, UnitDescriptor, UnitKey, Unitless,
};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `measura-core` so they can implement conversion traits without running into Rust's orphan
/// rules.
pub mod units;

pub use units::angular;
pub use units::derived;
pub use units::length;
pub use units::mass;
pub use units::prefix;
pub use units::temperature;
pub use units::time;
pub use units::unitless;

pub use angular::Radian;
