//! Quantity type and its implementations.

use crate::algebra::{Cbrt, Per, Pow, Prod, Sqrt};
use crate::conversion::Conversion;
use crate::unit::{same_unit, RelativeScale, Scale, Unit, Unitless};
use crate::units::angular::Radian;
use crate::Scalar;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value tagged with a static unit.
///
/// `Quantity<U, T>` wraps a scalar `T` (default `f64`) together with phantom type information about its unit `U`.
/// Dimension checks, conversion factors and unit algebra are all resolved at compile time; at run time a quantity is
/// just its value.
///
/// # Examples
///
/// ```rust
/// use measura_core::Quantity;
/// use measura_core::length::{Meter, Meters};
/// use measura_core::time::Seconds;
///
/// let x = Meters::new(5.0);
/// let y = Meters::new(3.0);
/// assert_eq!((x + y).value(), 8.0);
///
/// let speed = x / Seconds::new(2.0);
/// assert_eq!(speed.value(), 2.5);
/// ```
///
/// Absolute units cannot be added, and the difference of two absolute values is relative:
///
/// ```rust
/// use measura_core::Delta;
/// use measura_core::temperature::{Celsius, DegreesCelsius};
///
/// let rise = DegreesCelsius::new(21.5) - DegreesCelsius::new(19.0);
/// let _: measura_core::Quantity<Delta<Celsius>> = rise;
/// assert_eq!(rise.value(), 2.5);
/// ```
///
/// ```compile_fail
/// use measura_core::temperature::DegreesCelsius;
///
/// let _ = DegreesCelsius::new(21.5) + DegreesCelsius::new(19.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, T: Scalar = f64>(T, PhantomData<U>);

impl<U: Unit, T: Scalar> Quantity<U, T> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use measura_core::length::Meters;
    /// assert!(Meters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(T::NAN);

    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use measura_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    ///
    /// ```rust
    /// use measura_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub const fn value(&self) -> T {
        self.0
    }

    /// Symbol of the unit.
    pub fn unit_symbol(&self) -> String {
        U::symbol()
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Converts this quantity to another unit of the same dimension and kind.
    ///
    /// ```rust
    /// use measura_core::length::{Kilometers, Meter};
    ///
    /// let km = Kilometers::new(1.25);
    /// assert_eq!(km.to::<Meter>().value(), 1250.0);
    /// ```
    ///
    /// Mismatched dimensions are rejected at compile time:
    ///
    /// ```compile_fail
    /// use measura_core::length::Meters;
    /// use measura_core::time::Second;
    ///
    /// let _ = Meters::new(1.0).to::<Second>();
    /// ```
    #[inline]
    pub fn to<V: Unit>(self) -> Quantity<V, T> {
        Quantity::new(Conversion::<T>::between::<U, V>().apply(self.0))
    }

    /// Builds a quantity in `U` from a quantity in any compatible unit.
    #[inline]
    pub fn from_quantity<V: Unit>(other: Quantity<V, T>) -> Self {
        other.to::<U>()
    }

    /// Re-tags the value with an identical unit, without touching the value.
    ///
    /// `V` must have the same dimension, magnitude and origin as `U`; anything else fails to compile.
    ///
    /// ```rust
    /// use measura_core::derived::{Joule, Watts};
    /// use measura_core::time::Seconds;
    ///
    /// let energy = (Watts::new(3.0) * Seconds::new(2.0)).relabel::<Joule>();
    /// assert_eq!(energy.value(), 6.0);
    /// ```
    #[inline]
    pub fn relabel<V: Unit>(self) -> Quantity<V, T> {
        const {
            assert!(same_unit::<U, V>(), "relabel requires identical units");
        };
        Quantity::new(self.0)
    }

    /// Returns the smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Square root; the unit becomes [`Sqrt<U>`].
    ///
    /// ```rust
    /// use measura_core::{Pow, Quantity};
    /// use measura_core::length::Meter;
    ///
    /// let area = Quantity::<Pow<Meter, 2>>::new(9.0);
    /// let side = area.sqrt().to::<Meter>();
    /// assert_eq!(side.value(), 3.0);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<Sqrt<U>, T> {
        const {
            assert!(U::TERMS.is_divisible_by(2), "unit has no square root");
        };
        Quantity::new(self.0.sqrt())
    }

    /// Cube root; the unit becomes [`Cbrt<U>`].
    #[inline]
    pub fn cbrt(self) -> Quantity<Cbrt<U>, T> {
        const {
            assert!(U::TERMS.is_divisible_by(3), "unit has no cube root");
        };
        Quantity::new(self.0.cbrt())
    }

    /// Integer power; the unit becomes [`Pow<U, E>`].
    #[inline]
    pub fn powi<const E: i32>(self) -> Quantity<Pow<U, E>, T> {
        Quantity::new(self.0.powf(T::from_ratio(E as i64, 1)))
    }

    /// `sqrt(self^2 + other^2)` in the same unit.
    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        Self::new(self.0.hypot(other.0))
    }

    /// `sqrt(self^2 + b^2 + c^2)` in the same unit.
    #[inline]
    pub fn hypot3(self, b: Self, c: Self) -> Self {
        Self::new(self.0.hypot(b.0).hypot(c.0))
    }

    /// `self * b + c` with a single rounding. `U * B` must be the same unit as `C`.
    ///
    /// ```rust
    /// use measura_core::length::{Meter, Meters};
    /// use measura_core::time::{Second, Seconds};
    /// use measura_core::{Per, Quantity};
    ///
    /// let v = Quantity::<Per<Meter, Second>>::new(2.0);
    /// let x = v.mul_add(Seconds::new(3.0), Meters::new(1.0));
    /// assert_eq!(x.value(), 7.0);
    /// ```
    #[inline]
    pub fn mul_add<B: Unit, C: Unit>(self, b: Quantity<B, T>, c: Quantity<C, T>) -> Quantity<C, T> {
        const {
            assert!(
                same_unit::<Prod<U, B>, C>(),
                "fused multiply-add requires the product unit to match the addend"
            );
        };
        Quantity::new(self.0.mul_add(b.0, c.0))
    }
}

macro_rules! angular_fns {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(self) -> Quantity<Unitless, T> {
                const {
                    assert!(same_unit::<U, Radian>(), "trigonometric functions require an angle in radians");
                };
                Quantity::new(self.0.$name())
            }
        )*
    };
}

macro_rules! dimensionless_fns {
    ($out:ty; $($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(self) -> Quantity<$out, T> {
                const {
                    assert!(same_unit::<U, Unitless>(), "function requires a dimensionless argument");
                };
                Quantity::new(self.0.$name())
            }
        )*
    };
}

/// Elementary functions.
///
/// Trigonometric functions accept any unit identical to [`Radian`]; everything else requires a unit identical to
/// [`Unitless`]. Other units fail to compile:
///
/// ```compile_fail
/// use measura_core::length::Meters;
///
/// let _ = Meters::new(1.0).sin();
/// ```
///
/// ```compile_fail
/// use measura_core::angular::Radians;
///
/// let _ = Radians::new(1.0).exp();
/// ```
///
/// Since a radian is dimensionless with magnitude one, unitless values are accepted as angles and vice versa.
impl<U: Unit, T: Scalar> Quantity<U, T> {
    angular_fns! {
        /// Sine.
        sin,
        /// Cosine.
        cos,
        /// Tangent.
        tan,
        /// Hyperbolic sine.
        sinh,
        /// Hyperbolic cosine.
        cosh,
        /// Hyperbolic tangent.
        tanh,
    }

    dimensionless_fns! { Radian;
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

    dimensionless_fns! { Unitless;
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

    /// Four-quadrant arc tangent of `self / other`, in radians, for dimensionless values.
    ///
    /// ```rust
    /// use measura_core::{Quantity, Unitless};
    ///
    /// let a = Quantity::<Unitless>::new(1.0).atan2(Quantity::new(1.0));
    /// assert!((a.value() - core::f64::consts::FRAC_PI_4).abs() < 1e-12);
    /// ```
    ///
    /// Lengths are rejected; divide them first:
    ///
    /// ```compile_fail
    /// use measura_core::length::Meters;
    ///
    /// let _ = Meters::new(1.0).atan2(Meters::new(1.0));
    /// ```
    #[inline]
    pub fn atan2(self, other: Self) -> Quantity<Radian, T> {
        const {
            assert!(same_unit::<U, Unitless>(), "function requires a dimensionless argument");
        };
        Quantity::new(self.0.atan2(other.0))
    }

    /// `self^exponent` for dimensionless values.
    #[inline]
    pub fn powf(self, exponent: Quantity<Unitless, T>) -> Quantity<Unitless, T> {
        const {
            assert!(same_unit::<U, Unitless>(), "function requires a dimensionless argument");
        };
        Quantity::new(self.0.powf(exponent.0))
    }

    /// Magnitude of `self` with the sign of `sign`, for dimensionless values.
    #[inline]
    pub fn copysign(self, sign: Quantity<Unitless, T>) -> Quantity<Unitless, T> {
        const {
            assert!(same_unit::<U, Unitless>(), "function requires a dimensionless argument");
        };
        Quantity::new(self.0.copysign(sign.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, T: Scalar> PartialEq for Quantity<U, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Unit, T: Scalar> PartialOrd for Quantity<U, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit<Scale = RelativeScale>, T: Scalar> Add for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit<Scale = RelativeScale>, T: Scalar> AddAssign for Quantity<U, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0 + rhs.0;
    }
}

impl<U: Unit, T: Scalar> Sub for Quantity<U, T> {
    type Output = Quantity<<U::Scale as Scale>::Difference<U>, T>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Quantity::new(self.0 - rhs.0)
    }
}

impl<U: Unit<Scale = RelativeScale>, T: Scalar> SubAssign for Quantity<U, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0 - rhs.0;
    }
}

impl<U: Unit<Scale = RelativeScale>, T: Scalar> Neg for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit<Scale = RelativeScale>, T: Scalar> Mul<T> for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit<Scale = RelativeScale>, T: Scalar> Div<T> for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit<Scale = RelativeScale>, T: Scalar> MulAssign<T> for Quantity<U, T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0 = self.0 * rhs;
    }
}

impl<U: Unit<Scale = RelativeScale>, T: Scalar> DivAssign<T> for Quantity<U, T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0 = self.0 / rhs;
    }
}

macro_rules! scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl<U: Unit<Scale = RelativeScale>> Mul<Quantity<U, $t>> for $t {
                type Output = Quantity<U, $t>;
                #[inline]
                fn mul(self, rhs: Quantity<U, $t>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

scalar_lhs!(f32, f64);

impl<A: Unit, B: Unit, T: Scalar> Mul<Quantity<B, T>> for Quantity<A, T> {
    type Output = Quantity<Prod<A, B>, T>;
    #[inline]
    fn mul(self, rhs: Quantity<B, T>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<N: Unit, D: Unit, T: Scalar> Div<Quantity<D, T>> for Quantity<N, T> {
    type Output = Quantity<Per<N, D>, T>;
    #[inline]
    fn div(self, rhs: Quantity<D, T>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<T: Scalar> From<T> for Quantity<Unitless, T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<U: Unit, T: Scalar> Display for Quantity<U, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let symbol = U::symbol();
        if symbol == "1" {
            Display::fmt(&self.0, f)
        } else {
            Display::fmt(&self.0, f)?;
            write!(f, " {symbol}")
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, T: Scalar + Serialize> Serialize for Quantity<U, T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, T: Scalar + Deserialize<'de>> Deserialize<'de> for Quantity<U, T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit symbol in serialized data.
///
/// # Examples
///
/// ```rust
/// use measura_core::length::Meters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "measura_core::serde_with_unit")]
///     max_distance: Meters,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Meters,  // Serializes as 50.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<U, T>` as a struct with `value` and `unit` fields.
    pub fn serialize<U, T, S>(quantity: &Quantity<U, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        T: Scalar + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", &U::symbol())?;
        state.end()
    }

    /// Deserializes a `Quantity<U, T>` from a struct with `value` and optionally `unit` fields.
    ///
    /// A `unit` that differs from the symbol of `U` is rejected.
    pub fn deserialize<'de, U, T, D>(deserializer: D) -> Result<Quantity<U, T>, D::Error>
    where
        U: Unit,
        T: Scalar + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, T>(PhantomData<(U, T)>);

        impl<'de, U: Unit, T: Scalar + Deserialize<'de>> Visitor<'de> for QuantityVisitor<U, T> {
            type Value = Quantity<U, T>;

            fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U, T>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(unit) = unit {
                    let expected = U::symbol();
                    if unit != expected {
                        return Err(de::Error::custom(alloc::format!(
                            "unit mismatch: expected '{expected}', found '{unit}'"
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::{Joule, Watt};
    use crate::length::{Foot, Inch, Meter, Meters};
    use crate::temperature::{Celsius, DegreesCelsius, Kelvin, Kelvins};
    use crate::time::{Second, Seconds};
    use crate::unitless::Percent;
    use crate::Delta;
    use approx::assert_relative_eq;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn arithmetic_in_one_unit() {
        let mut d = Meters::new(2.0);
        d += Meters::new(3.0);
        assert_eq!(d.value(), 5.0);
        d -= Meters::new(1.0);
        assert_eq!(d.value(), 4.0);
        assert_eq!((-d).value(), -4.0);
        assert_eq!((d * 2.0).value(), 8.0);
        assert_eq!((2.0 * d).value(), 8.0);
        assert_eq!((d / 4.0).value(), 1.0);
    }

    #[test]
    fn products_and_quotients_change_the_unit() {
        let area = Meters::new(2.0) * Meters::new(3.0);
        let _: Quantity<Prod<Meter, Meter>> = area;
        assert_eq!(area.value(), 6.0);
        assert_eq!(area.unit_symbol(), "m^2");

        let ratio = Meters::new(1.0) / Meters::new(4.0);
        assert_eq!(ratio.unit_symbol(), "1");
        assert_eq!(ratio.to::<Unitless>().value(), 0.25);
    }

    #[test]
    fn energy_from_power_and_time() {
        let energy = Quantity::<Watt>::new(1.0) * Seconds::new(2.0);
        assert_eq!(energy.to::<Joule>().value(), 2.0);
        assert_eq!(energy.relabel::<Joule>().value(), 2.0);
    }

    #[test]
    fn absolute_subtraction_yields_delta() {
        let warm = Kelvins::new(300.0);
        let cold = Kelvins::new(280.0);
        let diff: Quantity<Delta<Kelvin>> = warm - cold;
        assert_eq!(diff.value(), 20.0);
        assert_eq!(diff.unit_symbol(), "K");
        let twice = diff * 2.0;
        assert_eq!(twice.value(), 40.0);
    }

    #[test]
    fn conversion_between_absolute_units() {
        let c = Kelvins::new(0.0).to::<Celsius>();
        assert_relative_eq!(c.value(), -273.15, epsilon = 1e-12);
        let k = Kelvins::from_quantity(DegreesCelsius::new(25.0));
        assert_relative_eq!(k.value(), 298.15, epsilon = 1e-12);
    }

    #[test]
    fn roots_and_powers() {
        let area = Quantity::<Pow<Foot, 2>>::new(4.0);
        let side = area.sqrt();
        assert_eq!(side.value(), 2.0);
        assert_relative_eq!(side.to::<Inch>().value(), 24.0, epsilon = 1e-12);
        let volume = Meters::new(3.0).powi::<3>();
        assert_relative_eq!(volume.cbrt().to::<Meter>().value(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn elementary_functions_check_units() {
        let angle = Quantity::<Radian>::new(FRAC_PI_2);
        assert_relative_eq!(angle.sin().value(), 1.0, epsilon = 1e-12);
        let back = Quantity::<Unitless>::new(1.0).asin();
        assert_relative_eq!(back.value(), FRAC_PI_2, epsilon = 1e-12);

        let ratio = Meters::new(2.0) / Meters::new(2.0);
        assert_relative_eq!(ratio.exp().value(), core::f64::consts::E, epsilon = 1e-12);
        let (y, x) = (Meters::new(1.0) / Meters::new(1.0), Meters::new(-2.0) / Meters::new(2.0));
        assert_relative_eq!(y.atan2(x).value(), 3.0 * core::f64::consts::FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(Quantity::<Unitless>::new(5.0).tgamma().value(), 24.0, epsilon = 1e-9);
        assert_eq!(Meters::new(3.0).hypot(Meters::new(4.0)).value(), 5.0);
        assert_relative_eq!(
            Meters::new(2.0).hypot3(Meters::new(3.0), Meters::new(6.0)).value(),
            7.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn fused_multiply_add() {
        let rate = Meters::new(2.0) / Seconds::new(1.0);
        let x = rate.mul_add(Seconds::new(3.0), Meters::new(1.0));
        assert_eq!(x.value(), 7.0);
    }

    #[test]
    fn percent_to_unitless() {
        let p = Quantity::<Percent>::new(80.0);
        assert_relative_eq!(p.to::<Unitless>().value(), 0.8, epsilon = 1e-12);
        let u: Quantity<Unitless> = 0.5.into();
        assert_relative_eq!(u.to::<Percent>().value(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn ordering() {
        assert!(Meters::new(1.0) < Meters::new(2.0));
        assert_eq!(Meters::new(1.0).max(Meters::new(2.0)).value(), 2.0);
        assert_eq!(Meters::new(1.0).min(Meters::new(2.0)).value(), 1.0);
        assert!(Meters::NAN.partial_cmp(&Meters::new(1.0)).is_none());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Meters::new(1.5)), "1.5 m");
        assert_eq!(format!("{}", Quantity::<Unitless>::new(2.0)), "2");
        assert_eq!(format!("{}", Meters::new(1.0) / Seconds::new(1.0)), "1 m * s^-1");
        assert_eq!(format!("{:.2}", Meters::new(1.0 / 3.0)), "0.33 m");
    }

    #[test]
    fn single_precision() {
        let d = Quantity::<Meter, f32>::new(1.0);
        assert_relative_eq!(d.to::<Inch>().value(), 39.370_08f32, epsilon = 1e-3);
        let t = Quantity::<Second, f32>::new(2.0);
        assert_eq!((d / t).value(), 0.5f32);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn raw_value() {
            let json = serde_json::to_string(&Meters::new(1.5)).unwrap();
            assert_eq!(json, "1.5");
            let back: Meters = serde_json::from_str("2.5").unwrap();
            assert_eq!(back.value(), 2.5);
        }

        #[derive(serde::Serialize, serde::Deserialize)]
        struct Reading {
            #[serde(with = "crate::serde_with_unit")]
            temperature: DegreesCelsius,
        }

        #[test]
        fn with_unit() {
            let reading = Reading {
                temperature: DegreesCelsius::new(21.0),
            };
            let json = serde_json::to_string(&reading).unwrap();
            assert_eq!(json, r#"{"temperature":{"value":21.0,"unit":"°C"}}"#);

            let wrong = r#"{"temperature":{"value":21.0,"unit":"K"}}"#;
            assert!(serde_json::from_str::<Reading>(wrong).is_err());

            let bare = r#"{"temperature":{"value":21.0}}"#;
            let parsed: Reading = serde_json::from_str(bare).unwrap();
            assert_eq!(parsed.temperature.value(), 21.0);
        }
    }
}
