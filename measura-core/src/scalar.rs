//! Numeric payloads carried by quantities.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A floating-point type that can carry the value of a quantity.
///
/// Implemented for `f32` and `f64`. With the `std` feature the elementary functions use the standard library
/// intrinsics; without it they go through `libm`. The error and gamma functions always come from `libm`.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Not-a-number.
    const NAN: Self;

    /// `numerator / denominator`, with both converted to `Self` first.
    fn from_ratio(numerator: i64, denominator: i64) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Cube root.
    fn cbrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Tangent.
    fn tan(self) -> Self;
    /// Hyperbolic sine.
    fn sinh(self) -> Self;
    /// Hyperbolic cosine.
    fn cosh(self) -> Self;
    /// Hyperbolic tangent.
    fn tanh(self) -> Self;
    /// Arc sine.
    fn asin(self) -> Self;
    /// Arc cosine.
    fn acos(self) -> Self;
    /// Arc tangent.
    fn atan(self) -> Self;
    /// Inverse hyperbolic sine.
    fn asinh(self) -> Self;
    /// Inverse hyperbolic cosine.
    fn acosh(self) -> Self;
    /// Inverse hyperbolic tangent.
    fn atanh(self) -> Self;
    /// Four-quadrant arc tangent of `self / other`.
    fn atan2(self, other: Self) -> Self;
    /// `e^self`.
    fn exp(self) -> Self;
    /// `2^self`.
    fn exp2(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    /// Base-10 logarithm.
    fn log10(self) -> Self;
    /// Base-2 logarithm.
    fn log2(self) -> Self;
    /// Error function.
    fn erf(self) -> Self;
    /// Complementary error function.
    fn erfc(self) -> Self;
    /// Gamma function.
    fn tgamma(self) -> Self;
    /// Natural logarithm of the absolute gamma function.
    fn lgamma(self) -> Self;
    /// `self^exponent`.
    fn powf(self, exponent: Self) -> Self;
    /// Magnitude of `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;
    /// `sqrt(self^2 + other^2)` without undue overflow.
    fn hypot(self, other: Self) -> Self;
    /// `self * a + b` with a single rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;
}

macro_rules! unary {
    ($name:ident, $std:ident, $libm:path) => {
        #[inline]
        fn $name(self) -> Self {
            #[cfg(feature = "std")]
            {
                Self::$std(self)
            }
            #[cfg(not(feature = "std"))]
            {
                $libm(self)
            }
        }
    };
}

macro_rules! binary {
    ($name:ident, $std:ident, $libm:path) => {
        #[inline]
        fn $name(self, other: Self) -> Self {
            #[cfg(feature = "std")]
            {
                Self::$std(self, other)
            }
            #[cfg(not(feature = "std"))]
            {
                $libm(self, other)
            }
        }
    };
}

macro_rules! impl_scalar {
    ($t:ty, $nan:expr, {
        abs: $abs:path, sqrt: $sqrt:path, cbrt: $cbrt:path,
        sin: $sin:path, cos: $cos:path, tan: $tan:path,
        sinh: $sinh:path, cosh: $cosh:path, tanh: $tanh:path,
        asin: $asin:path, acos: $acos:path, atan: $atan:path,
        asinh: $asinh:path, acosh: $acosh:path, atanh: $atanh:path, atan2: $atan2:path,
        exp: $exp:path, exp2: $exp2:path, ln: $ln:path, log10: $log10:path, log2: $log2:path,
        erf: $erf:path, erfc: $erfc:path, tgamma: $tgamma:path, lgamma: $lgamma:path,
        pow: $pow:path, copysign: $copysign:path, hypot: $hypot:path, fma: $fma:path $(,)?
    }) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NAN: Self = $nan;

            #[inline]
            fn from_ratio(numerator: i64, denominator: i64) -> Self {
                numerator as $t / denominator as $t
            }

            unary!(abs, abs, $abs);
            unary!(sqrt, sqrt, $sqrt);
            unary!(cbrt, cbrt, $cbrt);
            unary!(sin, sin, $sin);
            unary!(cos, cos, $cos);
            unary!(tan, tan, $tan);
            unary!(sinh, sinh, $sinh);
            unary!(cosh, cosh, $cosh);
            unary!(tanh, tanh, $tanh);
            unary!(asin, asin, $asin);
            unary!(acos, acos, $acos);
            unary!(atan, atan, $atan);
            unary!(asinh, asinh, $asinh);
            unary!(acosh, acosh, $acosh);
            unary!(atanh, atanh, $atanh);
            binary!(atan2, atan2, $atan2);
            unary!(exp, exp, $exp);
            unary!(exp2, exp2, $exp2);
            unary!(ln, ln, $ln);
            unary!(log10, log10, $log10);
            unary!(log2, log2, $log2);
            binary!(powf, powf, $pow);
            binary!(copysign, copysign, $copysign);
            binary!(hypot, hypot, $hypot);

            #[inline]
            fn erf(self) -> Self {
                $erf(self)
            }

            #[inline]
            fn erfc(self) -> Self {
                $erfc(self)
            }

            #[inline]
            fn tgamma(self) -> Self {
                $tgamma(self)
            }

            #[inline]
            fn lgamma(self) -> Self {
                $lgamma(self)
            }

            #[inline]
            fn mul_add(self, a: Self, b: Self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::mul_add(self, a, b)
                }
                #[cfg(not(feature = "std"))]
                {
                    $fma(self, a, b)
                }
            }
        }
    };
}

impl_scalar!(f64, f64::NAN, {
    abs: libm::fabs, sqrt: libm::sqrt, cbrt: libm::cbrt,
    sin: libm::sin, cos: libm::cos, tan: libm::tan,
    sinh: libm::sinh, cosh: libm::cosh, tanh: libm::tanh,
    asin: libm::asin, acos: libm::acos, atan: libm::atan,
    asinh: libm::asinh, acosh: libm::acosh, atanh: libm::atanh, atan2: libm::atan2,
    exp: libm::exp, exp2: libm::exp2, ln: libm::log, log10: libm::log10, log2: libm::log2,
    erf: libm::erf, erfc: libm::erfc, tgamma: libm::tgamma, lgamma: libm::lgamma,
    pow: libm::pow, copysign: libm::copysign, hypot: libm::hypot, fma: libm::fma,
});

impl_scalar!(f32, f32::NAN, {
    abs: libm::fabsf, sqrt: libm::sqrtf, cbrt: libm::cbrtf,
    sin: libm::sinf, cos: libm::cosf, tan: libm::tanf,
    sinh: libm::sinhf, cosh: libm::coshf, tanh: libm::tanhf,
    asin: libm::asinf, acos: libm::acosf, atan: libm::atanf,
    asinh: libm::asinhf, acosh: libm::acoshf, atanh: libm::atanhf, atan2: libm::atan2f,
    exp: libm::expf, exp2: libm::exp2f, ln: libm::logf, log10: libm::log10f, log2: libm::log2f,
    erf: libm::erff, erfc: libm::erfcf, tgamma: libm::tgammaf, lgamma: libm::lgammaf,
    pow: libm::powf, copysign: libm::copysignf, hypot: libm::hypotf, fma: libm::fmaf,
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn from_ratio_divides_in_target_type() {
        assert_eq!(<f64 as Scalar>::from_ratio(1, 8), 0.125);
        assert_eq!(<f32 as Scalar>::from_ratio(-3, 4), -0.75f32);
    }

    #[test]
    fn special_functions_route_to_libm() {
        assert_abs_diff_eq!(Scalar::erf(0.0f64), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(Scalar::tgamma(5.0f64), 24.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Scalar::lgamma(1.0f64), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Scalar::erfc(0.0f32), 1.0f32, epsilon = 1e-6);
    }

    #[test]
    fn elementary_functions() {
        assert_abs_diff_eq!(Scalar::cbrt(27.0f64), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Scalar::hypot(3.0f64, 4.0), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Scalar::mul_add(2.0f64, 3.0, 1.0), 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Scalar::ln(core::f64::consts::E), 1.0, epsilon = 1e-12);
    }
}
