//! Affine conversion between compatible units.
//!
//! Converting from unit `a` to unit `b` maps a value `v` to `v * multiplier + offset`, where
//!
//! ```text
//! multiplier = a.magnitude / b.magnitude
//! offset     = (a.origin - b.origin) / b.magnitude      (absolute units only)
//! ```
//!
//! Both factors are computed in exact rational arithmetic and rounded to the scalar type once.

use crate::error::{UnitError, UnitResult};
use crate::unit::{same_unit, Unit, UnitDescriptor};
use crate::{Origin, Rational, Scalar};

/// The `(multiplier, offset)` pair of an affine unit conversion.
///
/// ```rust
/// use measura_core::Conversion;
/// use measura_core::temperature::{Celsius, Kelvin};
///
/// let c = Conversion::<f64>::between::<Kelvin, Celsius>();
/// assert_eq!(c.multiplier(), 1.0);
/// assert!((c.apply(0.0) + 273.15).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion<T: Scalar = f64> {
    multiplier: T,
    offset: T,
}

impl<T: Scalar> Conversion<T> {
    /// The identity conversion.
    pub fn identity() -> Self {
        Self {
            multiplier: T::ONE,
            offset: T::ZERO,
        }
    }

    /// Conversion from a unit with `(from_magnitude, from_origin)` to one with `(to_magnitude, to_origin)`.
    ///
    /// Compatibility is not checked here; see [`Conversion::between`] and [`Conversion::try_between`].
    ///
    /// # Panics
    ///
    /// Panics when an exact factor does not fit in `i64`.
    pub fn new(from_magnitude: Rational, from_origin: Origin, to_magnitude: Rational, to_origin: Origin) -> Self {
        match exact_factors(from_magnitude, from_origin, to_magnitude, to_origin) {
            Some(factors) => Self::from_exact(factors),
            None => panic!("conversion factor overflows i64"),
        }
    }

    fn from_exact(factors: ExactFactors) -> Self {
        Self {
            multiplier: factors.multiplier.convert_to::<T>(),
            offset: factors.from_shift.convert_to::<T>() - factors.to_shift.convert_to::<T>(),
        }
    }

    /// Conversion between two static units.
    ///
    /// Converting between different dimensions, or between an absolute and a relative unit, fails to compile:
    ///
    /// ```compile_fail
    /// use measura_core::Conversion;
    /// use measura_core::length::Meter;
    /// use measura_core::time::Second;
    ///
    /// let _ = Conversion::<f64>::between::<Meter, Second>();
    /// ```
    pub fn between<Src: Unit, Dst: Unit>() -> Self {
        const {
            assert!(
                Src::DIMENSION.const_eq(&Dst::DIMENSION),
                "cannot convert between quantities with different dimensions"
            );
            assert!(
                Src::ORIGIN.has_value() == Dst::ORIGIN.has_value(),
                "cannot convert from absolute to relative or vice-versa"
            );
        };
        if same_unit::<Src, Dst>() {
            return Self::identity();
        }
        let factors = const {
            match exact_factors(Src::MAGNITUDE, Src::ORIGIN, Dst::MAGNITUDE, Dst::ORIGIN) {
                Some(factors) => factors,
                None => panic!("conversion factor overflows i64"),
            }
        };
        Self::from_exact(factors)
    }

    /// Conversion between two units checked at run time.
    pub fn try_between(from: &dyn UnitDescriptor, to: &dyn UnitDescriptor) -> UnitResult<Self> {
        check_compatible(from, to)?;
        let factors = exact_factors(from.magnitude()?, from.origin(), to.magnitude()?, to.origin()).ok_or_else(|| {
            log::debug!("rejected conversion {} -> {}: factor overflows i64", from.name(), to.name());
            UnitError::MagnitudeOverflow {
                unit: alloc::format!("{} / {}", from.name(), to.name()),
            }
        })?;
        let conversion = Self::from_exact(factors);
        log::trace!(
            "conversion {} -> {}: multiplier {}, offset {}",
            from.name(),
            to.name(),
            conversion.multiplier,
            conversion.offset
        );
        Ok(conversion)
    }

    /// Scale factor.
    pub fn multiplier(&self) -> T {
        self.multiplier
    }

    /// Additive offset, zero between relative units.
    pub fn offset(&self) -> T {
        self.offset
    }

    /// Converts `value`.
    #[inline]
    pub fn apply(&self, value: T) -> T {
        value * self.multiplier + self.offset
    }
}

impl<T: Scalar> Default for Conversion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Exact pieces of a conversion: the multiplier and both origins in target units.
#[derive(Clone, Copy)]
struct ExactFactors {
    multiplier: Rational,
    from_shift: Rational,
    to_shift: Rational,
}

const fn exact_factors(
    from_magnitude: Rational,
    from_origin: Origin,
    to_magnitude: Rational,
    to_origin: Origin,
) -> Option<ExactFactors> {
    let multiplier = match from_magnitude.checked_divide(to_magnitude) {
        Some(m) => m,
        None => return None,
    };
    let from_shift = match from_origin {
        Origin::Absolute(origin) => match origin.checked_divide(to_magnitude) {
            Some(shift) => shift,
            None => return None,
        },
        Origin::Relative => Rational::ZERO,
    };
    let to_shift = match to_origin {
        Origin::Absolute(origin) => match origin.checked_divide(to_magnitude) {
            Some(shift) => shift,
            None => return None,
        },
        Origin::Relative => Rational::ZERO,
    };
    Some(ExactFactors {
        multiplier,
        from_shift,
        to_shift,
    })
}

/// Checks that a value in `from` can be expressed in `to`.
pub fn check_compatible(from: &dyn UnitDescriptor, to: &dyn UnitDescriptor) -> UnitResult<()> {
    if from.dimension() != to.dimension() {
        log::debug!("rejected conversion {} -> {}: dimensions differ", from.name(), to.name());
        return Err(UnitError::DimensionMismatch {
            from: from.name(),
            to: to.name(),
        });
    }
    if from.origin().has_value() != to.origin().has_value() {
        log::debug!("rejected conversion {} -> {}: scale kinds differ", from.name(), to.name());
        return Err(UnitError::ScaleMismatch {
            from: from.name(),
            to: to.name(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Inch, Kilometer, Meter, Micrometer, Nanometer, Thou};
    use crate::temperature::{Celsius, ElectronVoltTemperature, Fahrenheit, Kelvin};
    use crate::time::{Hour, Second};
    use crate::{Delta, DynUnit, Per};
    use approx::assert_relative_eq;

    #[test]
    fn relative_conversions_have_no_offset() {
        let c = Conversion::<f64>::between::<Hour, Second>();
        assert_eq!(c.multiplier(), 3600.0);
        assert_eq!(c.offset(), 0.0);
        assert_eq!(Conversion::<f64>::between::<Meter, Meter>(), Conversion::identity());
    }

    #[test]
    fn temperature_offsets() {
        let k_to_c = Conversion::<f64>::between::<Kelvin, Celsius>();
        assert_relative_eq!(k_to_c.apply(0.0), -273.15, epsilon = 1e-12);

        let k_to_f = Conversion::<f64>::between::<Kelvin, Fahrenheit>();
        assert_relative_eq!(k_to_f.multiplier(), 1.8, epsilon = 1e-12);
        assert_relative_eq!(k_to_f.apply(0.0), -459.67, epsilon = 1e-9);

        let f_to_c = Conversion::<f64>::between::<Fahrenheit, Celsius>();
        assert_relative_eq!(f_to_c.apply(100.4), 38.0, epsilon = 1e-12);
    }

    #[test]
    fn electron_volt_temperature() {
        let c = Conversion::<f64>::between::<ElectronVoltTemperature, Kelvin>();
        assert_relative_eq!(c.apply(15_000.0), 1.740_677_718e8, max_relative = 1e-9);
    }

    #[test]
    fn prefixed_units() {
        let c = Conversion::<f64>::between::<Thou, Micrometer>();
        assert_relative_eq!(c.apply(1.0), 25.4, epsilon = 1e-12);
        let c = Conversion::<f64>::between::<Inch, Meter>();
        assert_relative_eq!(c.apply(1.0), 0.0254, epsilon = 1e-15);
    }

    #[test]
    fn deltas_convert_without_offset() {
        let c = Conversion::<f64>::between::<Delta<Kelvin>, Delta<Fahrenheit>>();
        assert_relative_eq!(c.apply(1.0), 1.8, epsilon = 1e-12);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn single_precision() {
        let c = Conversion::<f32>::between::<Kelvin, Celsius>();
        assert_relative_eq!(c.apply(273.15f32), 0.0f32, epsilon = 1e-4);
    }

    #[test]
    fn dynamic_checks() {
        let err = Conversion::<f64>::try_between(&Meter, &Second).unwrap_err();
        assert_eq!(
            err,
            UnitError::DimensionMismatch {
                from: "m".into(),
                to: "s".into()
            }
        );

        let err = Conversion::<f64>::try_between(&Kelvin, &Delta::<Kelvin>::describe()).unwrap_err();
        assert!(matches!(err, UnitError::ScaleMismatch { .. }));

        let speed: DynUnit = Per::<Meter, Second>::describe();
        let c = Conversion::<f64>::try_between(&speed, &Per::<Inch, Hour>::describe()).unwrap();
        assert_relative_eq!(c.apply(1.0), 3600.0 / 0.0254, max_relative = 1e-12);
    }

    #[test]
    fn oversized_factors_are_errors() {
        let cubic_nm = Nanometer::describe().pow(3);
        let cubic_m = Meter::describe().pow(3);
        assert!(matches!(
            Conversion::<f64>::try_between(&cubic_nm, &cubic_m),
            Err(UnitError::MagnitudeOverflow { .. })
        ));

        let err = Conversion::<f64>::try_between(&Nanometer::describe().pow(2), &Kilometer::describe().pow(2))
            .unwrap_err();
        assert_eq!(
            err,
            UnitError::MagnitudeOverflow {
                unit: "nm^2 / km^2".into()
            }
        );

        let c = Conversion::<f64>::try_between(&Nanometer::describe().pow(2), &Meter::describe().pow(2)).unwrap();
        assert_relative_eq!(c.multiplier(), 1e-18, max_relative = 1e-12);
    }

    #[test]
    fn static_and_dynamic_agree() {
        let s = Conversion::<f64>::between::<Fahrenheit, Kelvin>();
        let d = Conversion::<f64>::try_between(&Fahrenheit, &Kelvin).unwrap();
        assert_eq!(s, d);
    }
}
