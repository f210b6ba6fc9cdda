//! Quantities whose unit is only known at run time.

use crate::conversion::Conversion;
use crate::dynamic::DynUnit;
use crate::error::{UnitError, UnitResult};
use crate::unit::{Unit, UnitDescriptor, UnitKey};
use crate::units::angular::Radian;
use crate::{Quantity, Scalar};
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::ops::{Div, Mul};

/// A value paired with a [`DynUnit`].
///
/// Every operation that the static [`Quantity`] rejects at compile time is checked here at run time and reported as a
/// [`UnitError`].
///
/// ```rust
/// use measura_core::{DynQuantity, Unit};
/// use measura_core::length::{Foot, Meter};
///
/// let d = DynQuantity::new(3.0_f64, Foot::describe());
/// let m = d.to(&Meter::describe()).unwrap();
/// assert!((m.value() - 0.9144).abs() < 1e-12);
/// assert!(d.to(&measura_core::time::Second::describe()).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DynQuantity<T: Scalar = f64> {
    value: T,
    unit: DynUnit,
}

impl<T: Scalar> DynQuantity<T> {
    /// Creates a quantity; the unit is stored in canonical form.
    pub fn new(value: T, unit: DynUnit) -> Self {
        Self {
            value,
            unit: unit.simplify(),
        }
    }

    /// Creates a quantity in any unit, static or dynamic.
    pub fn with_unit(value: T, unit: &dyn UnitDescriptor) -> Self {
        Self {
            value,
            unit: unit.simplify(),
        }
    }

    /// Raw numeric value.
    pub fn value(&self) -> T {
        self.value
    }

    /// The unit.
    pub fn unit(&self) -> &DynUnit {
        &self.unit
    }

    /// Splits into value and unit.
    pub fn into_parts(self) -> (T, DynUnit) {
        (self.value, self.unit)
    }

    /// Converts to `target`.
    pub fn to(&self, target: &DynUnit) -> UnitResult<Self> {
        let conversion = Conversion::<T>::try_between(&self.unit, target)?;
        Ok(Self::new(conversion.apply(self.value), target.clone()))
    }

    /// Converts to a static unit.
    ///
    /// ```rust
    /// use measura_core::{DynQuantity, Unit};
    /// use measura_core::temperature::{Celsius, Kelvin};
    ///
    /// let t = DynQuantity::new(0.0_f64, Kelvin::describe());
    /// let c = t.to_static::<Celsius>().unwrap();
    /// assert!((c.value() + 273.15).abs() < 1e-12);
    /// ```
    pub fn to_static<U: Unit>(&self) -> UnitResult<Quantity<U, T>> {
        let conversion = Conversion::<T>::try_between(&self.unit, &U::describe())?;
        Ok(Quantity::new(conversion.apply(self.value)))
    }

    fn require_same_unit(&self, operation: &'static str, other: &Self) -> UnitResult<()> {
        if self.unit != other.unit {
            log::debug!("rejected {operation} of {} and {}", self.unit, other.unit);
            return Err(UnitError::IncompatibleUnits {
                operation,
                lhs: self.unit.name(),
                rhs: other.unit.name(),
            });
        }
        Ok(())
    }

    /// Sum of two quantities in the same relative unit.
    pub fn try_add(&self, other: &Self) -> UnitResult<Self> {
        self.require_same_unit("add", other)?;
        if self.unit.is_absolute() {
            return Err(UnitError::AbsoluteAddition {
                unit: self.unit.name(),
            });
        }
        Ok(Self {
            value: self.value + other.value,
            unit: self.unit.clone(),
        })
    }

    /// Difference of two quantities in the same unit.
    ///
    /// The difference of two absolute values is expressed in the relative counterpart of their unit.
    pub fn try_sub(&self, other: &Self) -> UnitResult<Self> {
        self.require_same_unit("subtract", other)?;
        Ok(Self {
            value: self.value - other.value,
            unit: self.unit.relative(),
        })
    }

    /// Compares two quantities in the same unit.
    pub fn try_partial_cmp(&self, other: &Self) -> UnitResult<Option<Ordering>> {
        self.require_same_unit("compare", other)?;
        Ok(self.value.partial_cmp(&other.value))
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
            unit: self.unit.clone(),
        }
    }

    /// Square root; the unit must be a power with even exponents.
    pub fn sqrt(&self) -> UnitResult<Self> {
        let unit = self.unit.sqrt()?;
        Ok(Self::new(self.value.sqrt(), unit))
    }

    /// Cube root; the unit must be a power with exponents divisible by three.
    pub fn cbrt(&self) -> UnitResult<Self> {
        let unit = self.unit.cbrt()?;
        Ok(Self::new(self.value.cbrt(), unit))
    }

    /// Integer power. Fails with [`UnitError::MagnitudeOverflow`] when the raised unit has no exact magnitude.
    ///
    /// ```rust
    /// use measura_core::{DynQuantity, Unit, UnitError};
    /// use measura_core::length::Nanometer;
    ///
    /// let side = DynQuantity::new(2.0, Nanometer::describe());
    /// assert_eq!(side.powi(2).unwrap().value(), 4.0);
    /// assert!(matches!(side.powi(3), Err(UnitError::MagnitudeOverflow { .. })));
    /// ```
    pub fn powi(&self, e: i32) -> UnitResult<Self> {
        let unit = self.unit.pow(e);
        unit.magnitude()?;
        Ok(Self::new(self.value.powf(T::from_ratio(e as i64, 1)), unit))
    }

    /// `sqrt(self^2 + other^2)`, both in the same unit.
    pub fn hypot(&self, other: &Self) -> UnitResult<Self> {
        self.require_same_unit("hypot", other)?;
        Ok(Self {
            value: self.value.hypot(other.value),
            unit: self.unit.clone(),
        })
    }

    /// `sqrt(self^2 + b^2 + c^2)`, all in the same unit.
    pub fn hypot3(&self, b: &Self, c: &Self) -> UnitResult<Self> {
        self.require_same_unit("hypot", b)?;
        self.require_same_unit("hypot", c)?;
        Ok(Self {
            value: self.value.hypot(b.value).hypot(c.value),
            unit: self.unit.clone(),
        })
    }

    /// `self * b + c` with a single rounding; `self * b` must have the unit of `c`.
    pub fn mul_add(&self, b: &Self, c: &Self) -> UnitResult<Self> {
        let product = self.unit.multiply(&b.unit);
        if product != c.unit {
            log::debug!("rejected fused multiply-add: {product} against {}", c.unit);
            return Err(UnitError::IncompatibleUnits {
                operation: "fused multiply-add",
                lhs: product.name(),
                rhs: c.unit.name(),
            });
        }
        Ok(Self {
            value: self.value.mul_add(b.value, c.value),
            unit: c.unit.clone(),
        })
    }

    fn require_angular(&self, function: &'static str) -> UnitResult<()> {
        if self.unit.key().ok() != Some(UnitKey::of::<Radian>()) {
            return Err(UnitError::NotAngular {
                function,
                unit: self.unit.name(),
            });
        }
        Ok(())
    }

    fn require_dimensionless(&self, function: &'static str) -> UnitResult<()> {
        if !self.unit.is_unitless() {
            return Err(UnitError::NotDimensionless {
                function,
                unit: self.unit.name(),
            });
        }
        Ok(())
    }

    /// Four-quadrant arc tangent of `self / other`, in radians, for dimensionless values.
    pub fn atan2(&self, other: &Self) -> UnitResult<Self> {
        self.require_dimensionless("atan2")?;
        other.require_dimensionless("atan2")?;
        Ok(Self::new(self.value.atan2(other.value), Radian::describe()))
    }

    /// `self^exponent` for dimensionless values.
    pub fn powf(&self, exponent: &Self) -> UnitResult<Self> {
        self.require_dimensionless("powf")?;
        exponent.require_dimensionless("powf")?;
        Ok(Self::new(self.value.powf(exponent.value), DynUnit::unitless()))
    }

    /// Magnitude of `self` with the sign of `sign`, for dimensionless values.
    pub fn copysign(&self, sign: &Self) -> UnitResult<Self> {
        self.require_dimensionless("copysign")?;
        sign.require_dimensionless("copysign")?;
        Ok(Self::new(self.value.copysign(sign.value), DynUnit::unitless()))
    }
}

macro_rules! checked_fns {
    ($check:ident, $out:expr; $($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> UnitResult<Self> {
                self.$check(stringify!($name))?;
                Ok(Self::new(self.value.$name(), $out))
            }
        )*
    };
}

impl<T: Scalar> DynQuantity<T> {
    checked_fns! { require_angular, DynUnit::unitless();
        /// Sine of an angle in radians.
        sin,
        /// Cosine of an angle in radians.
        cos,
        /// Tangent of an angle in radians.
        tan,
        /// Hyperbolic sine of an angle in radians.
        sinh,
        /// Hyperbolic cosine of an angle in radians.
        cosh,
        /// Hyperbolic tangent of an angle in radians.
        tanh,
    }

    checked_fns! { require_dimensionless, Radian::describe();
        /// Arc sine, in radians.
        asin,
        /// Arc cosine, in radians.
        acos,
        /// Arc tangent, in radians.
        atan,
        /// Inverse hyperbolic sine.
        asinh,
        /// Inverse hyperbolic cosine.
        acosh,
        /// Inverse hyperbolic tangent.
        atanh,
    }

    checked_fns! { require_dimensionless, DynUnit::unitless();
        /// `e^self`.
        exp,
        /// `2^self`.
        exp2,
        /// Natural logarithm.
        ln,
        /// Base-10 logarithm.
        log10,
        /// Base-2 logarithm.
        log2,
        /// Error function.
        erf,
        /// Complementary error function.
        erfc,
        /// Gamma function.
        tgamma,
        /// Natural logarithm of the absolute gamma function.
        lgamma,
    }
}

impl<U: Unit, T: Scalar> From<Quantity<U, T>> for DynQuantity<T> {
    fn from(quantity: Quantity<U, T>) -> Self {
        Self::new(quantity.value(), U::describe())
    }
}

/// Equal when units are identical and values are equal; quantities in different units are never equal.
impl<T: Scalar> PartialEq for DynQuantity<T> {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value == other.value
    }
}

impl<T: Scalar> Mul for DynQuantity<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value, self.unit.multiply(&rhs.unit))
    }
}

impl<T: Scalar> Mul<&DynQuantity<T>> for &DynQuantity<T> {
    type Output = DynQuantity<T>;
    fn mul(self, rhs: &DynQuantity<T>) -> DynQuantity<T> {
        DynQuantity::new(self.value * rhs.value, self.unit.multiply(&rhs.unit))
    }
}

impl<T: Scalar> Div for DynQuantity<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value / rhs.value, self.unit.divide(&rhs.unit))
    }
}

impl<T: Scalar> Div<&DynQuantity<T>> for &DynQuantity<T> {
    type Output = DynQuantity<T>;
    fn div(self, rhs: &DynQuantity<T>) -> DynQuantity<T> {
        DynQuantity::new(self.value / rhs.value, self.unit.divide(&rhs.unit))
    }
}

impl<T: Scalar> Display for DynQuantity<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.value, f)?;
        let name = self.unit.name();
        if name != "1" {
            write!(f, " {name}")?;
        }
        Ok(())
    }
}
