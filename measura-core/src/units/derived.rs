//! Coherent derived units and common compound aliases.
//!
//! The named derived units here have their own symbol and are single bases for the unit algebra. They are still
//! the same unit as the compound they stand for:
//!
//! ```rust
//! use measura_core::{same_unit, Per, Prod};
//! use measura_core::derived::{Joule, Watt};
//! use measura_core::time::Second;
//!
//! assert!(same_unit::<Prod<Watt, Second>, Joule>());
//! assert!(same_unit::<Per<Joule, Second>, Watt>());
//! ```

use crate::length::{Kilometer, Meter};
use crate::time::{Hour, Second};
use crate::{Dimension, Per, Pow, Quantity, Rational};
use measura_derive::Unit;

/// Newton, `kg * m * s^-2`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", dimension = Dimension::new(-2, 1, 1, 0, 0, 0, 0), magnitude = Rational::ONE)]
pub struct Newton;
/// A force in newtons.
pub type Newtons = Quantity<Newton>;

/// Joule, `kg * m^2 * s^-2`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J", dimension = Dimension::new(-2, 2, 1, 0, 0, 0, 0), magnitude = Rational::ONE)]
pub struct Joule;
/// An energy in joules.
pub type Joules = Quantity<Joule>;

/// Watt, `kg * m^2 * s^-3`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "W", dimension = Dimension::new(-3, 2, 1, 0, 0, 0, 0), magnitude = Rational::ONE)]
pub struct Watt;
/// A power in watts.
pub type Watts = Quantity<Watt>;

/// Hertz, `s^-1`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", dimension = Dimension::new(-1, 0, 0, 0, 0, 0, 0), magnitude = Rational::ONE)]
pub struct Hertz;

/// Metres per second.
pub type MeterPerSecond = Per<Meter, Second>;
/// A velocity in metres per second.
pub type MetersPerSecond = Quantity<MeterPerSecond>;

/// Kilometres per hour.
pub type KilometerPerHour = Per<Kilometer, Hour>;
/// A velocity in kilometres per hour.
pub type KilometersPerHour = Quantity<KilometerPerHour>;

/// Metres per second squared.
pub type MeterPerSecondSquared = Per<Meter, Pow<Second, 2>>;
/// An acceleration in metres per second squared.
pub type MetersPerSecondSquared = Quantity<MeterPerSecondSquared>;

crate::impl_unit_conversions!(MeterPerSecond, KilometerPerHour);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Meters;
    use crate::mass::{Kilogram, Kilograms};
    use crate::time::Seconds;
    use crate::{same_unit, Prod, Unit};
    use approx::assert_relative_eq;

    #[test]
    fn named_units_match_their_compounds() {
        assert!(same_unit::<Prod<Kilogram, MeterPerSecondSquared>, Newton>());
        assert!(same_unit::<Prod<Newton, Meter>, Joule>());
        assert!(same_unit::<Per<crate::Unitless, Second>, Hertz>());
    }

    #[test]
    fn work_and_power() {
        let force = Kilograms::new(2.0) * (Meters::new(3.0) / (Seconds::new(1.0) * Seconds::new(1.0)));
        let force: Newtons = force.to();
        assert_eq!(force.value(), 6.0);

        let work = force * Meters::new(2.0);
        let power = work / Seconds::new(4.0);
        assert_relative_eq!(power.to::<Watt>().value(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn speed_conversion() {
        let v: KilometersPerHour = MetersPerSecond::new(10.0).into();
        assert_relative_eq!(v.value(), 36.0, epsilon = 1e-12);
        assert_eq!(KilometerPerHour::symbol(), "km * h^-1");
    }
}
