//! Exact rational numbers for unit magnitudes and origins.
//!
//! Unit magnitudes are ratios to the SI-coherent unit of their dimension. Keeping them exact (instead of `f64`) means
//! chained products such as `milli(inch)^3 / hour` never accumulate rounding error; the only rounding happens once,
//! when a conversion factor is finally turned into the payload type with [`Rational::convert_to`].
//!
//! Every operation is a `const fn` so that static units can compute their magnitude at compile time.
//!
//! ```rust
//! use measura_core::Rational;
//!
//! let inch = Rational::new(254, 10_000);
//! assert_eq!(inch, Rational::new(127, 5_000));
//! assert_eq!(inch.pow(2), Rational::new(16_129, 25_000_000));
//! ```

use crate::Scalar;
use core::fmt::{Display, Formatter, Result};
use core::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fraction `numerator / denominator` kept in lowest terms.
///
/// # Invariants
///
/// - `denominator > 0`
/// - `gcd(|numerator|, denominator) == 1`
///
/// Equality is structural on the reduced form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

const fn or_overflow(value: Option<Rational>) -> Rational {
    match value {
        Some(v) => v,
        None => panic!("rational arithmetic overflowed i64"),
    }
}

impl Rational {
    /// Zero.
    pub const ZERO: Self = Self::integer(0);

    /// One; the magnitude of every SI-coherent unit.
    pub const ONE: Self = Self::integer(1);

    /// Creates a reduced rational.
    ///
    /// # Panics
    ///
    /// Panics if `denominator == 0` or the reduced form does not fit in `i64` (a compile error when evaluated in a
    /// constant).
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "rational denominator must be non-zero");
        or_overflow(Self::checked_new(numerator, denominator))
    }

    /// Creates a reduced rational, or `None` for a zero denominator or a reduced form outside `i64`.
    ///
    /// ```rust
    /// use measura_core::Rational;
    ///
    /// assert_eq!(Rational::checked_new(i64::MIN, 2), Some(Rational::integer(i64::MIN / 2)));
    /// assert_eq!(Rational::checked_new(i64::MIN, -1), None);
    /// assert_eq!(Rational::checked_new(1, 0), None);
    /// ```
    pub const fn checked_new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let abs_num = numerator.unsigned_abs();
        let abs_den = denominator.unsigned_abs();
        let common = gcd(abs_num, abs_den);
        let num = abs_num / common;
        let den = abs_den / common;
        if den > i64::MAX as u64 {
            return None;
        }
        let negative = (numerator < 0) != (denominator < 0);
        let numerator = if negative {
            // -2^63 is the one magnitude above i64::MAX that still fits.
            if num > i64::MAX as u64 + 1 {
                return None;
            }
            (num as i64).wrapping_neg()
        } else {
            if num > i64::MAX as u64 {
                return None;
            }
            num as i64
        };
        Some(Self {
            numerator,
            denominator: den as i64,
        })
    }

    /// The integer `value` as a rational.
    pub const fn integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Signed numerator of the reduced form.
    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Strictly positive denominator of the reduced form.
    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns `true` if this is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Swaps numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics when inverting zero.
    pub const fn inverse(self) -> Self {
        assert!(self.numerator != 0, "cannot invert a zero rational");
        or_overflow(self.checked_inverse())
    }

    /// Swaps numerator and denominator, or `None` for zero and for `i64::MIN` numerators.
    pub const fn checked_inverse(self) -> Option<Self> {
        if self.numerator == 0 {
            return None;
        }
        Self::checked_new(self.denominator, self.numerator)
    }

    /// Exact product.
    ///
    /// # Panics
    ///
    /// Panics when the result does not fit in `i64`.
    pub const fn multiply(self, other: Self) -> Self {
        or_overflow(self.checked_multiply(other))
    }

    /// Exact product, or `None` when it does not fit in `i64`.
    pub const fn checked_multiply(self, other: Self) -> Option<Self> {
        // Cross-cancel first so intermediate products stay small.
        let g1 = gcd(self.numerator.unsigned_abs(), other.denominator.unsigned_abs()) as i64;
        let g2 = gcd(other.numerator.unsigned_abs(), self.denominator.unsigned_abs()) as i64;
        let num = match (self.numerator / g1).checked_mul(other.numerator / g2) {
            Some(n) => n,
            None => return None,
        };
        let den = match (self.denominator / g2).checked_mul(other.denominator / g1) {
            Some(d) => d,
            None => return None,
        };
        Self::checked_new(num, den)
    }

    /// Exact quotient.
    ///
    /// # Panics
    ///
    /// Panics when dividing by zero or when the result does not fit in `i64`.
    pub const fn divide(self, other: Self) -> Self {
        self.multiply(other.inverse())
    }

    /// Exact quotient, or `None` when dividing by zero or when the result does not fit in `i64`.
    pub const fn checked_divide(self, other: Self) -> Option<Self> {
        match other.checked_inverse() {
            Some(inverse) => self.checked_multiply(inverse),
            None => None,
        }
    }

    /// Integer power: `e` repeated multiplications for `e >= 0`, `|e|` repeated divisions otherwise.
    ///
    /// # Panics
    ///
    /// Panics when the result does not fit in `i64`, or for a negative power of zero.
    pub const fn pow(self, e: i32) -> Self {
        assert!(e >= 0 || self.numerator != 0, "negative power of zero");
        or_overflow(self.checked_pow(e))
    }

    /// Integer power, or `None` when an intermediate result does not fit in `i64` or for a negative power of zero.
    ///
    /// ```rust
    /// use measura_core::Rational;
    ///
    /// let nano = Rational::new(1, 1_000_000_000);
    /// assert_eq!(nano.checked_pow(2), Some(Rational::new(1, 1_000_000_000_000_000_000)));
    /// assert_eq!(nano.checked_pow(3), None);
    /// ```
    pub const fn checked_pow(self, e: i32) -> Option<Self> {
        let mut result = Self::ONE;
        let mut i = 0;
        while i < e.unsigned_abs() {
            let step = if e >= 0 {
                result.checked_multiply(self)
            } else {
                result.checked_divide(self)
            };
            result = match step {
                Some(r) => r,
                None => return None,
            };
            i += 1;
        }
        Some(result)
    }

    /// Structural equality usable in constant evaluation.
    #[inline]
    pub const fn const_eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }

    /// Numerator divided by denominator, computed in the payload type `T`.
    #[inline]
    pub fn convert_to<T: Scalar>(self) -> T {
        T::from_ratio(self.numerator, self.denominator)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl Mul for Rational {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for Rational {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and reduction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn reduces_to_lowest_terms() {
        let r = Rational::new(6, 8);
        assert_eq!(r.numerator(), 3);
        assert_eq!(r.denominator(), 4);
    }

    #[test]
    fn sign_moves_to_numerator() {
        let r = Rational::new(3, -9);
        assert_eq!(r.numerator(), -1);
        assert_eq!(r.denominator(), 3);
        assert_eq!(Rational::new(-3, -9), Rational::new(1, 3));
    }

    #[test]
    fn zero_has_unit_denominator() {
        let z = Rational::new(0, -17);
        assert_eq!(z, Rational::ZERO);
        assert_eq!(z.denominator(), 1);
        assert!(z.is_zero());
    }

    #[test]
    #[should_panic(expected = "denominator must be non-zero")]
    fn zero_denominator_panics() {
        let _ = Rational::new(1, 0);
    }

    #[test]
    #[should_panic(expected = "cannot invert a zero rational")]
    fn inverting_zero_panics() {
        let _ = Rational::ZERO.inverse();
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn inverse_keeps_sign_on_numerator() {
        assert_eq!(Rational::new(-2, 3).inverse(), Rational::new(-3, 2));
    }

    #[test]
    fn multiply_and_divide() {
        let a = Rational::new(2, 3);
        let b = Rational::new(9, 4);
        assert_eq!(a * b, Rational::new(3, 2));
        assert_eq!(a / b, Rational::new(8, 27));
    }

    #[test]
    fn pow_positive_negative_and_zero() {
        let r = Rational::new(2, 3);
        assert_eq!(r.pow(0), Rational::ONE);
        assert_eq!(r.pow(3), Rational::new(8, 27));
        assert_eq!(r.pow(-2), Rational::new(9, 4));
    }

    #[test]
    fn extreme_numerators() {
        assert_eq!(Rational::new(i64::MIN, 1).numerator(), i64::MIN);
        assert_eq!(Rational::new(i64::MIN, 4), Rational::integer(i64::MIN / 4));
        assert_eq!(Rational::new(i64::MIN, i64::MIN), Rational::ONE);
        assert_eq!(Rational::checked_new(i64::MIN, -1), None);
        assert_eq!(Rational::checked_new(1, i64::MIN), None);
        assert_eq!(Rational::integer(i64::MIN).checked_inverse(), None);
    }

    #[test]
    #[should_panic(expected = "overflowed i64")]
    fn negating_min_panics() {
        let _ = Rational::new(i64::MIN, -1);
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let nano = Rational::new(1, 1_000_000_000);
        assert_eq!(nano.checked_multiply(nano), Some(Rational::new(1, 1_000_000_000_000_000_000)));
        assert_eq!(nano.checked_pow(3), None);
        assert_eq!(nano.checked_pow(-3), None);
        assert_eq!(nano.checked_divide(Rational::integer(1_000_000_000_000)), None);
        assert_eq!(Rational::ONE.checked_divide(Rational::ZERO), None);
        assert_eq!(Rational::ZERO.checked_pow(-1), None);
        assert_eq!(Rational::new(2, 3).checked_pow(-2), Some(Rational::new(9, 4)));
    }

    #[test]
    #[should_panic(expected = "overflowed i64")]
    fn unchecked_pow_panics_on_overflow() {
        let _ = Rational::new(1, 1_000_000_000).pow(3);
    }

    #[test]
    fn usable_in_const_context() {
        const THOU: Rational = Rational::new(254, 10_000).multiply(Rational::new(1, 1000));
        assert_eq!(THOU, Rational::new(127, 5_000_000));
    }

    #[test]
    fn convert_to_float() {
        let r = Rational::new(1, 4);
        assert_eq!(r.convert_to::<f64>(), 0.25);
        assert_eq!(r.convert_to::<f32>(), 0.25f32);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rational::new(10, 5)), "2");
        assert_eq!(format!("{}", Rational::new(-1, 3)), "-1/3");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    fn gcd_i64(a: i64, b: i64) -> i64 {
        gcd(a.unsigned_abs(), b.unsigned_abs()) as i64
    }

    proptest! {
        #[test]
        fn always_reduced(n in -1_000_000i64..1_000_000, d in -1_000_000i64..1_000_000) {
            prop_assume!(d != 0);
            let r = Rational::new(n, d);
            prop_assert!(r.denominator() > 0);
            prop_assert_eq!(gcd_i64(r.numerator(), r.denominator()), 1);
        }

        #[test]
        fn multiply_by_inverse_is_one(n in 1i64..10_000, d in 1i64..10_000) {
            let r = Rational::new(n, d);
            prop_assert_eq!(r * r.inverse(), Rational::ONE);
        }

        #[test]
        fn pow_adds_exponents(n in 1i64..20, d in 1i64..20, a in -3i32..3, b in -3i32..3) {
            let r = Rational::new(n, d);
            prop_assert_eq!(r.pow(a + b), r.pow(a) * r.pow(b));
        }

        #[test]
        fn checked_operations_never_panic(
            a in any::<i64>(),
            b in 1i64..=i64::MAX,
            c in any::<i64>(),
            d in 1i64..=i64::MAX,
            e in -6i32..=6,
        ) {
            let x = Rational::new(a, b);
            let y = Rational::new(c, d);
            if let Some(p) = x.checked_multiply(y) {
                prop_assert!(p.denominator() > 0);
            }
            let _ = x.checked_divide(y);
            let _ = x.checked_pow(e);
            let _ = Rational::checked_new(a, c);
        }
    }
}
