//! Time units.
//!
//! The coherent unit for this dimension is [`Second`]. Civil units use the conventional mapping
//! `1 day = 86_400 s` (leap seconds ignored).
//!
//! ```rust
//! use measura_core::time::{Hours, Second, Hour};
//!
//! let half_hour = Hours::new(0.5);
//! let seconds = half_hour.to::<Second>();
//! assert!((seconds.value() - 1800.0).abs() < 1e-12);
//!
//! let back = seconds.to::<Hour>();
//! assert!((back.value() - 0.5).abs() < 1e-12);
//! ```

use crate::prefix::{Micro, Milli, Nano};
use crate::{Dimension, Quantity, Rational};
use measura_derive::Unit;

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Dimension::TIME, magnitude = Rational::ONE)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Dimension::TIME, magnitude = Rational::integer(60))]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;
/// One minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Dimension::TIME, magnitude = Rational::integer(3_600))]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;
/// One hour.
pub const HOUR: Hours = Hours::new(1.0);

/// Day (`86_400 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", dimension = Dimension::TIME, magnitude = Rational::integer(86_400))]
pub struct Day;
/// A quantity measured in days.
pub type Days = Quantity<Day>;
/// One day.
pub const DAY: Days = Days::new(1.0);

/// Millisecond.
pub type Millisecond = Milli<Second>;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;

/// Microsecond.
pub type Microsecond = Micro<Second>;
/// A quantity measured in microseconds.
pub type Microseconds = Quantity<Microsecond>;

/// Nanosecond.
pub type Nanosecond = Nano<Second>;
/// A quantity measured in nanoseconds.
pub type Nanoseconds = Quantity<Nanosecond>;

crate::impl_unit_conversions!(Second, Minute, Hour, Day, Millisecond, Microsecond, Nanosecond);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn magnitudes() {
        assert_eq!(Second::MAGNITUDE, Rational::ONE);
        assert_eq!(Day::MAGNITUDE, Rational::integer(86_400));
        assert_eq!(Millisecond::MAGNITUDE, Rational::new(1, 1_000));
    }

    #[test]
    fn day_to_hours() {
        let hours: Hours = DAY.into();
        assert_abs_diff_eq!(hours.value(), 24.0, epsilon = 1e-12);
    }

    #[test]
    fn prefixed_seconds() {
        let ms = Milliseconds::new(1_500.0);
        assert_abs_diff_eq!(ms.to::<Second>().value(), 1.5, epsilon = 1e-12);
        let ns: Nanoseconds = Microseconds::new(2.0).into();
        assert_abs_diff_eq!(ns.value(), 2_000.0, epsilon = 1e-9);
        assert_eq!(format!("{}", ms), "1500 ms");
    }

    proptest! {
        #[test]
        fn seconds_minutes_round_trip(v in -1e9f64..1e9) {
            let back = Seconds::new(v).to::<Minute>().to::<Second>();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
