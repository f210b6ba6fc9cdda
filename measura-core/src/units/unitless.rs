//! Dimensionless units.
//!
//! [`Unitless`](crate::Unitless) is the unit `1`. [`Percent`] is a scaled dimensionless unit, so converting between
//! the two changes the value:
//!
//! ```rust
//! use measura_core::{Quantity, Unitless};
//! use measura_core::unitless::Percents;
//!
//! let u: Quantity<Unitless> = Percents::new(80.0).into();
//! assert!((u.value() - 0.8).abs() < 1e-12);
//! ```

use crate::angular::Radian;
use crate::{Dimension, Quantity, Rational, Unitless};
use measura_derive::Unit;

/// Percent (`1/100`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "%", dimension = Dimension::DIMENSIONLESS, magnitude = Rational::new(1, 100))]
pub struct Percent;
/// A quantity measured in percent.
pub type Percents = Quantity<Percent>;

crate::impl_unit_conversions!(Unitless, Percent, Radian);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Meters;
    use approx::assert_abs_diff_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic Unitless behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn unitless_new_and_value() {
        let u: Quantity<Unitless> = Quantity::new(42.0);
        assert_eq!(u.value(), 42.0);
    }

    #[test]
    fn unitless_from_f64() {
        let u: Quantity<Unitless> = 1.23456.into();
        assert_abs_diff_eq!(u.value(), 1.23456, epsilon = 1e-12);
    }

    #[test]
    fn display_unitless() {
        let u: Quantity<Unitless> = Quantity::new(123.456);
        assert_eq!(format!("{}", u), "123.456");
        assert_eq!(format!("{}", Percents::new(5.0)), "5 %");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn percent_round_trip() {
        let p: Percents = Quantity::<Unitless>::new(0.25).into();
        assert_abs_diff_eq!(p.value(), 25.0, epsilon = 1e-12);
        let r: Quantity<Radian> = Quantity::<Unitless>::new(0.5).into();
        assert_eq!(r.value(), 0.5);
    }

    #[test]
    fn cancelled_ratio_is_unitless() {
        let ratio = Meters::new(3.0) / Meters::new(4.0);
        let p = ratio.to::<Percent>();
        assert_abs_diff_eq!(p.value(), 75.0, epsilon = 1e-12);
    }
}
