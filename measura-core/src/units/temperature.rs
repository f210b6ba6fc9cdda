//! Temperature scales.
//!
//! Every scale here is *absolute*: it has a zero point, expressed in kelvin. Absolute temperatures can be converted
//! and subtracted but not added; the difference of two temperatures is a [`Delta`] of the scale, which behaves like
//! any relative unit.
//!
//! ```rust
//! use measura_core::temperature::{Celsius, DegreesFahrenheit, Kelvins};
//!
//! let body = DegreesFahrenheit::new(100.4).to::<Celsius>();
//! assert!((body.value() - 38.0).abs() < 1e-12);
//!
//! let rise = Kelvins::new(300.0) - Kelvins::new(280.0);
//! assert_eq!((rise * 2.0).value(), 40.0);
//! ```
//!
//! The electronvolt is listed as a temperature through `E = k_B T`, using the CODATA 2018 value
//! `1 eV / k_B = 11 604.518 12 K`.

use crate::{Delta, Dimension, Quantity, Rational};
use measura_derive::Unit;

/// Kelvin (SI base unit), zero at absolute zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "K",
    dimension = Dimension::TEMPERATURE,
    magnitude = Rational::ONE,
    origin = Rational::ZERO
)]
pub struct Kelvin;
/// A temperature in kelvin.
pub type Kelvins = Quantity<Kelvin>;

/// Degree Celsius, zero at `273.15 K`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "°C",
    dimension = Dimension::TEMPERATURE,
    magnitude = Rational::ONE,
    origin = Rational::new(27_315, 100)
)]
pub struct Celsius;
/// A temperature in degrees Celsius.
pub type DegreesCelsius = Quantity<Celsius>;

/// Degree Fahrenheit, `5/9 K` per degree, zero at `459.67 °R`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "°F",
    dimension = Dimension::TEMPERATURE,
    magnitude = Rational::new(5, 9),
    origin = Rational::new(45_967, 180)
)]
pub struct Fahrenheit;
/// A temperature in degrees Fahrenheit.
pub type DegreesFahrenheit = Quantity<Fahrenheit>;

/// Degree Rankine, `5/9 K` per degree, zero at absolute zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "°R",
    dimension = Dimension::TEMPERATURE,
    magnitude = Rational::new(5, 9),
    origin = Rational::ZERO
)]
pub struct Rankine;
/// A temperature in degrees Rankine.
pub type DegreesRankine = Quantity<Rankine>;

/// Electronvolt as a temperature (`11 604.518 12 K`), zero at absolute zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "eV",
    dimension = Dimension::TEMPERATURE,
    magnitude = Rational::new(1_160_451_812, 100_000),
    origin = Rational::ZERO
)]
pub struct ElectronVoltTemperature;
/// A temperature in electronvolts.
pub type ElectronVolts = Quantity<ElectronVoltTemperature>;

/// A temperature interval in kelvin.
pub type KelvinDifference = Delta<Kelvin>;
/// A temperature interval in degrees Celsius (same size as kelvin).
pub type CelsiusDifference = Delta<Celsius>;
/// A temperature interval in degrees Fahrenheit.
pub type FahrenheitDifference = Delta<Fahrenheit>;

crate::impl_unit_conversions!(Kelvin, Celsius, Fahrenheit, Rankine, ElectronVoltTemperature);
crate::impl_unit_conversions!(KelvinDifference, FahrenheitDifference);
