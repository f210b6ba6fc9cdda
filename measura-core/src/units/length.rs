//! Length units.
//!
//! The coherent unit for this dimension is [`Meter`]. Imperial units follow the international definitions, which
//! are exact: one inch is `0.0254 m`, one foot is twelve inches.
//!
//! ```rust
//! use measura_core::length::{Feet, Inch};
//!
//! let f = Feet::new(1.0);
//! assert!((f.to::<Inch>().value() - 12.0).abs() < 1e-12);
//! ```

use crate::prefix::{Kilo, Micro, Milli, Nano};
use crate::{Dimension, Quantity, Rational};
use measura_derive::Unit;

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Dimension::LENGTH, magnitude = Rational::ONE)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// International inch (`0.0254 m`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = Dimension::LENGTH, magnitude = Rational::new(254, 10_000))]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;
/// One inch.
pub const INCH: Inches = Inches::new(1.0);

/// International foot (`0.3048 m`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = Dimension::LENGTH, magnitude = Rational::new(3_048, 10_000))]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// Kilometre.
pub type Kilometer = Kilo<Meter>;
/// A quantity measured in kilometres.
pub type Kilometers = Quantity<Kilometer>;

/// Millimetre.
pub type Millimeter = Milli<Meter>;
/// A quantity measured in millimetres.
pub type Millimeters = Quantity<Millimeter>;

/// Micrometre.
pub type Micrometer = Micro<Meter>;
/// A quantity measured in micrometres.
pub type Micrometers = Quantity<Micrometer>;

/// Nanometre.
pub type Nanometer = Nano<Meter>;
/// A quantity measured in nanometres.
pub type Nanometers = Quantity<Nanometer>;

/// Thou, a thousandth of an inch.
pub type Thou = Milli<Inch>;
/// A quantity measured in thou.
pub type Thous = Quantity<Thou>;

crate::impl_unit_conversions!(
    Meter, Inch, Foot, Kilometer, Millimeter, Micrometer, Nanometer, Thou
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn exact_magnitudes() {
        assert_eq!(Inch::MAGNITUDE, Rational::new(127, 5_000));
        assert_eq!(Foot::MAGNITUDE.divide(Inch::MAGNITUDE), Rational::integer(12));
        assert_eq!(Thou::MAGNITUDE.divide(Micrometer::MAGNITUDE), Rational::new(254, 10));
    }

    #[test]
    fn thou_to_micrometers() {
        let um: Micrometers = Thous::new(1.0).into();
        assert_relative_eq!(um.value(), 25.4, epsilon = 1e-12);
    }

    #[test]
    fn kilometers() {
        let km = Kilometers::new(1.25);
        assert_relative_eq!(km.to::<Meter>().value(), 1250.0, epsilon = 1e-9);
        assert_eq!(format!("{km}"), "1.25 km");
    }

    proptest! {
        #[test]
        fn inch_meter_round_trip(v in -1e6f64..1e6) {
            let back = Inches::new(v).to::<Meter>().to::<Inch>();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
