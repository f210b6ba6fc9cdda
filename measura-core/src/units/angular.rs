//! The radian.
//!
//! A radian is the ratio of two lengths, so it is dimensionless with magnitude one and is the same unit as
//! [`Unitless`](crate::Unitless) for every algebraic purpose. It keeps its own symbol for display.
//!
//! Degrees are not provided: their magnitude, `π/180`, is not rational.

use crate::{Dimension, Quantity, Rational};
use measura_derive::Unit;

/// Radian.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", dimension = Dimension::DIMENSIONLESS, magnitude = Rational::ONE)]
pub struct Radian;
/// An angle in radians.
pub type Radians = Quantity<Radian>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{same_unit, Unit, Unitless};
    use approx::assert_relative_eq;
    use core::f64::consts::PI;

    #[test]
    fn radian_is_unitless() {
        assert!(same_unit::<Radian, Unitless>());
        assert!(Radian::TERMS.is_empty());
        assert_eq!(Radian::symbol(), "rad");
    }

    #[test]
    fn trigonometry() {
        assert_relative_eq!(Radians::new(PI).cos().value(), -1.0, epsilon = 1e-12);
        assert_eq!(format!("{}", Radians::new(1.0)), "1 rad");
    }
}
