//! Predefined unit modules grouped by dimension.
//!
//! `measura-core` ships a small set of built-in units so that conversions and formatting work out of the box without
//! downstream crates having to fight Rust’s orphan rules.
//!
//! ## Modules
//!
//! - [`time`]: time units (SI second is the coherent unit).
//! - [`length`]: length units (SI metre is the coherent unit).
//! - [`mass`]: mass units (SI kilogram is the coherent unit, so the gram has magnitude `1/1000`).
//! - [`temperature`]: absolute temperature scales and their intervals.
//! - [`angular`]: the radian.
//! - [`unitless`]: percent and conversions between dimensionless units.
//! - [`derived`]: coherent derived units (newton, joule, watt) and velocity aliases.
//! - [`prefix`]: metric prefixes as generic unit wrappers (`Kilo<Meter>`, `Milli<Inch>`).

pub mod angular;
pub mod derived;
pub mod length;
pub mod mass;
pub mod prefix;
pub mod temperature;
pub mod time;
pub mod unitless;
