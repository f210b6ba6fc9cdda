//! The optional zero point of a unit.

use crate::Rational;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a unit puts its zero, relative to the SI-coherent unit of its dimension.
///
/// This is an optional slot holding at most one [`Rational`]:
///
/// - [`Origin::Relative`] (empty): the unit is a pure scale factor (metre, second, kelvin difference).
/// - [`Origin::Absolute`] (filled): the unit is affine, with its zero at the given offset expressed in the coherent
///   unit (degree Celsius has its zero at `273.15` K).
///
/// Two relative origins are equal, two absolute origins are equal when their offsets are, and a relative origin
/// never equals an absolute one.
///
/// ```rust
/// use measura_core::{Origin, Rational};
///
/// const CELSIUS: Origin = Origin::Absolute(Rational::new(27_315, 100));
/// assert!(CELSIUS.has_value());
/// assert_eq!(CELSIUS.value(), Rational::new(5_463, 20));
/// assert!(!Origin::Relative.has_value());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Origin {
    /// No fixed zero point.
    #[default]
    Relative,
    /// Zero point at the given offset in the coherent unit.
    Absolute(Rational),
}

impl Origin {
    /// Returns `true` for [`Origin::Absolute`].
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Origin::Absolute(_))
    }

    /// Same as [`Origin::has_value`].
    #[inline]
    pub const fn is_absolute(&self) -> bool {
        self.has_value()
    }

    /// Returns `true` for [`Origin::Relative`].
    #[inline]
    pub const fn is_relative(&self) -> bool {
        !self.has_value()
    }

    /// The stored offset.
    ///
    /// # Panics
    ///
    /// Panics on [`Origin::Relative`]; check [`Origin::has_value`] first or use [`Origin::get`].
    pub const fn value(&self) -> Rational {
        match self {
            Origin::Absolute(offset) => *offset,
            Origin::Relative => panic!("relative unit has no origin"),
        }
    }

    /// The stored offset, if any.
    #[inline]
    pub const fn get(&self) -> Option<Rational> {
        match self {
            Origin::Absolute(offset) => Some(*offset),
            Origin::Relative => None,
        }
    }

    /// Equality usable in constant evaluation.
    pub const fn const_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Origin::Relative, Origin::Relative) => true,
            (Origin::Absolute(a), Origin::Absolute(b)) => a.const_eq(b),
            _ => false,
        }
    }
}

impl From<Option<Rational>> for Origin {
    fn from(value: Option<Rational>) -> Self {
        match value {
            Some(offset) => Origin::Absolute(offset),
            None => Origin::Relative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_rules() {
        let zero = Origin::Absolute(Rational::ZERO);
        assert!(Origin::Relative.const_eq(&Origin::Relative));
        assert!(zero.const_eq(&Origin::Absolute(Rational::new(0, 5))));
        assert!(!zero.const_eq(&Origin::Relative));
        assert!(!Origin::Relative.const_eq(&zero));
        assert!(!zero.const_eq(&Origin::Absolute(Rational::ONE)));
    }

    #[test]
    fn absolute_zero_is_not_relative() {
        let kelvin = Origin::Absolute(Rational::ZERO);
        assert!(kelvin.is_absolute());
        assert_eq!(kelvin.get(), Some(Rational::ZERO));
        assert_eq!(Origin::Relative.get(), None);
    }

    #[test]
    #[should_panic(expected = "relative unit has no origin")]
    fn value_of_relative_panics() {
        let _ = Origin::Relative.value();
    }

    #[test]
    fn from_option() {
        assert_eq!(Origin::from(None), Origin::Relative);
        assert_eq!(
            Origin::from(Some(Rational::ONE)),
            Origin::Absolute(Rational::ONE)
        );
    }
}
