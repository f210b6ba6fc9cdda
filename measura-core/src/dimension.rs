//! SI dimension exponent vectors.

use core::fmt::{Display, Formatter, Result};
use core::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exponents over the seven SI base quantities.
///
/// A *dimension* is the category that distinguishes a metre from a second, independent of scale. Dimensions form an
/// abelian group under [`Dimension::multiply`] with [`Dimension::DIMENSIONLESS`] as the identity.
///
/// ```rust
/// use measura_core::Dimension;
///
/// let velocity = Dimension::LENGTH.divide(Dimension::TIME);
/// let acceleration = velocity.divide(Dimension::TIME);
/// assert_eq!(acceleration.time(), -2);
/// assert_eq!(acceleration.length(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    time: i32,
    length: i32,
    mass: i32,
    current: i32,
    temperature: i32,
    amount: i32,
    luminous_intensity: i32,
}

impl Dimension {
    /// The zero vector.
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);
    /// Time (`T`).
    pub const TIME: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    /// Length (`L`).
    pub const LENGTH: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    /// Mass (`M`).
    pub const MASS: Self = Self::new(0, 0, 1, 0, 0, 0, 0);
    /// Electric current (`I`).
    pub const CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0, 0);
    /// Thermodynamic temperature (`Θ`).
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1, 0, 0);
    /// Amount of substance (`N`).
    pub const AMOUNT: Self = Self::new(0, 0, 0, 0, 0, 1, 0);
    /// Luminous intensity (`J`).
    pub const LUMINOUS_INTENSITY: Self = Self::new(0, 0, 0, 0, 0, 0, 1);

    /// Builds a dimension from its exponents, in SI order.
    pub const fn new(
        time: i32,
        length: i32,
        mass: i32,
        current: i32,
        temperature: i32,
        amount: i32,
        luminous_intensity: i32,
    ) -> Self {
        Self {
            time,
            length,
            mass,
            current,
            temperature,
            amount,
            luminous_intensity,
        }
    }

    /// Time exponent.
    pub const fn time(&self) -> i32 {
        self.time
    }

    /// Length exponent.
    pub const fn length(&self) -> i32 {
        self.length
    }

    /// Mass exponent.
    pub const fn mass(&self) -> i32 {
        self.mass
    }

    /// Electric current exponent.
    pub const fn current(&self) -> i32 {
        self.current
    }

    /// Temperature exponent.
    pub const fn temperature(&self) -> i32 {
        self.temperature
    }

    /// Amount-of-substance exponent.
    pub const fn amount(&self) -> i32 {
        self.amount
    }

    /// Luminous intensity exponent.
    pub const fn luminous_intensity(&self) -> i32 {
        self.luminous_intensity
    }

    const fn exponents(&self) -> [i32; 7] {
        [
            self.time,
            self.length,
            self.mass,
            self.current,
            self.temperature,
            self.amount,
            self.luminous_intensity,
        ]
    }

    /// Componentwise sum.
    pub const fn multiply(self, other: Self) -> Self {
        Self::new(
            self.time + other.time,
            self.length + other.length,
            self.mass + other.mass,
            self.current + other.current,
            self.temperature + other.temperature,
            self.amount + other.amount,
            self.luminous_intensity + other.luminous_intensity,
        )
    }

    /// Componentwise difference.
    pub const fn divide(self, other: Self) -> Self {
        self.multiply(other.pow(-1))
    }

    /// Componentwise scaling by `e`.
    pub const fn pow(self, e: i32) -> Self {
        Self::new(
            self.time * e,
            self.length * e,
            self.mass * e,
            self.current * e,
            self.temperature * e,
            self.amount * e,
            self.luminous_intensity * e,
        )
    }

    /// Componentwise equality usable in constant evaluation.
    pub const fn const_eq(&self, other: &Self) -> bool {
        let a = self.exponents();
        let b = other.exponents();
        let mut i = 0;
        while i < a.len() {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns `true` for the zero vector.
    pub const fn is_dimensionless(&self) -> bool {
        self.const_eq(&Self::DIMENSIONLESS)
    }
}

impl Mul for Dimension {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for Dimension {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        const SYMBOLS: [&str; 7] = ["T", "L", "M", "I", "Θ", "N", "J"];
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let mut first = true;
        for (symbol, exponent) in SYMBOLS.iter().zip(self.exponents()) {
            if exponent == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if exponent == 1 {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol}^{exponent}")?;
            }
        }
        Ok(())
    }
}
