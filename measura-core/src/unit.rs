//! Unit types and traits.

use crate::algebra::TermList;
use crate::dynamic::DynUnit;
use crate::error::UnitResult;
use crate::{Dimension, Origin, Rational};
use alloc::string::String;
use core::fmt::Debug;

/// The identity of a unit: two units with equal keys are the same unit for every algebraic purpose, whatever they
/// are called and however they were built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitKey {
    /// SI dimension.
    pub dimension: Dimension,
    /// Exact ratio to the coherent SI unit of `dimension`.
    pub magnitude: Rational,
    /// Zero point, if the unit is absolute.
    pub origin: Origin,
}

impl UnitKey {
    /// The key of the dimensionless unit `1`.
    pub const UNITLESS: Self = Self::new(Dimension::DIMENSIONLESS, Rational::ONE, Origin::Relative);

    /// Builds a key from its parts.
    pub const fn new(dimension: Dimension, magnitude: Rational, origin: Origin) -> Self {
        Self {
            dimension,
            magnitude,
            origin,
        }
    }

    /// The key of a static unit.
    pub const fn of<U: Unit>() -> Self {
        Self::new(U::DIMENSION, U::MAGNITUDE, U::ORIGIN)
    }

    /// Same dimension and magnitude, origin cleared.
    pub const fn relative(self) -> Self {
        Self::new(self.dimension, self.magnitude, Origin::Relative)
    }

    /// Equality usable in constant evaluation.
    pub const fn const_eq(&self, other: &Self) -> bool {
        self.dimension.const_eq(&other.dimension)
            && self.magnitude.const_eq(&other.magnitude)
            && self.origin.const_eq(&other.origin)
    }

    /// Returns `true` if this is the key of the dimensionless unit.
    pub const fn is_unitless(&self) -> bool {
        self.const_eq(&Self::UNITLESS)
    }
}

/// Type-level tag telling whether a static unit has a fixed zero point.
///
/// The tag decides what subtracting two quantities of the unit produces: the same unit for relative units, the
/// relative counterpart [`Delta<U>`](crate::Delta) for absolute ones.
pub trait Scale: 'static {
    /// `true` for absolute (affine) units.
    const ABSOLUTE: bool;
    /// Unit of the difference of two quantities in `U`.
    type Difference<U: Unit>: Unit;
}

/// Tag for units without an origin (metre, second, kelvin difference).
#[derive(Debug)]
pub enum RelativeScale {}

impl Scale for RelativeScale {
    const ABSOLUTE: bool = false;
    type Difference<U: Unit> = U;
}

/// Tag for units with an origin (kelvin, degree Celsius).
#[derive(Debug)]
pub enum AbsoluteScale {}

impl Scale for AbsoluteScale {
    const ABSOLUTE: bool = true;
    type Difference<U: Unit> = crate::Delta<U>;
}

/// Trait implemented by every **static unit** type.
///
/// Static units are zero-sized markers whose properties are associated constants, so nothing about a unit exists at
/// run time. Named units are declared with `#[derive(Unit)]`; composite units ([`Prod`](crate::Prod),
/// [`Per`](crate::Per), [`Pow`](crate::Pow), [`Root`](crate::Root), [`Delta`](crate::Delta)) compute their constants
/// from their operands.
///
/// # Invariants
///
/// - `MAGNITUDE` is strictly positive.
/// - `Scale::ABSOLUTE == ORIGIN.has_value()`.
/// - `TERMS` is in canonical form and describes the same dimension and magnitude as the unit itself.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Absolute/relative tag, mirrored at the type level.
    type Scale: Scale;

    /// SI dimension.
    const DIMENSION: Dimension;

    /// Exact ratio to the coherent SI unit of the same dimension.
    const MAGNITUDE: Rational;

    /// Zero point relative to the coherent unit, for absolute units.
    const ORIGIN: Origin;

    /// Canonical product form used by the unit algebra.
    const TERMS: TermList;

    /// Printable symbol.
    fn symbol() -> String {
        Self::TERMS.render()
    }

    /// Run-time description of this unit.
    fn describe() -> DynUnit {
        Self::TERMS.describe()
    }

    /// Whether the unit has an origin.
    fn is_absolute() -> bool {
        Self::ORIGIN.is_absolute()
    }

    /// Whether the unit has no origin.
    fn is_relative() -> bool {
        Self::ORIGIN.is_relative()
    }
}

/// Returns `true` when `A` and `B` have the same dimension, magnitude and origin.
///
/// ```rust
/// use measura_core::{same_unit, Prod};
/// use measura_core::derived::Joule;
/// use measura_core::derived::Watt;
/// use measura_core::time::Second;
///
/// const _: () = assert!(same_unit::<Prod<Watt, Second>, Joule>());
/// ```
pub const fn same_unit<A: Unit, B: Unit>() -> bool {
    UnitKey::of::<A>().const_eq(&UnitKey::of::<B>())
}

/// Marker type for dimensionless quantities.
///
/// `Unitless` is what a fully cancelled product simplifies to (`Meters / Meters`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    type Scale = RelativeScale;
    const DIMENSION: Dimension = Dimension::DIMENSIONLESS;
    const MAGNITUDE: Rational = Rational::ONE;
    const ORIGIN: Origin = Origin::Relative;
    const TERMS: TermList = TermList::EMPTY;

    fn symbol() -> String {
        String::from("1")
    }

    fn describe() -> DynUnit {
        DynUnit::unitless()
    }
}

/// The run-time view of a unit shared by static and dynamic units.
///
/// Equality is decided by [`UnitDescriptor::key`]; the name is cosmetic. Magnitudes of static units are checked at
/// compile time, so only run-time units can report [`UnitError::MagnitudeOverflow`](crate::UnitError).
pub trait UnitDescriptor {
    /// Display name.
    fn name(&self) -> String;
    /// SI dimension.
    fn dimension(&self) -> Dimension;
    /// Exact ratio to the coherent SI unit.
    fn magnitude(&self) -> UnitResult<Rational>;
    /// Zero point, for absolute units.
    fn origin(&self) -> Origin;
    /// Owned run-time copy of this unit.
    fn clone_unit(&self) -> DynUnit;
    /// Owned run-time copy in canonical form.
    fn simplify(&self) -> DynUnit;

    /// Identity triple.
    fn key(&self) -> UnitResult<UnitKey> {
        Ok(UnitKey::new(self.dimension(), self.magnitude()?, self.origin()))
    }
}

impl<U: Unit> UnitDescriptor for U {
    fn name(&self) -> String {
        U::symbol()
    }

    fn dimension(&self) -> Dimension {
        U::DIMENSION
    }

    fn magnitude(&self) -> UnitResult<Rational> {
        Ok(U::MAGNITUDE)
    }

    fn origin(&self) -> Origin {
        U::ORIGIN
    }

    fn clone_unit(&self) -> DynUnit {
        U::describe()
    }

    fn simplify(&self) -> DynUnit {
        U::describe().simplify()
    }
}

/// Returns `true` when two units, static or dynamic, have the same identity.
///
/// A unit whose magnitude cannot be represented is not equal to anything here; compare two [`DynUnit`]s with `==`
/// to fall back on their terms.
pub fn units_equal(a: &dyn UnitDescriptor, b: &dyn UnitDescriptor) -> bool {
    matches!((a.key(), b.key()), (Ok(x), Ok(y)) if x == y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Meter;
    use crate::temperature::{Celsius, Kelvin};
    use crate::time::Second;

    #[test]
    fn unitless_key() {
        assert!(UnitKey::of::<Unitless>().is_unitless());
        assert!(!UnitKey::of::<Meter>().is_unitless());
    }

    #[test]
    fn relative_key_clears_origin() {
        let celsius = UnitKey::of::<Celsius>();
        assert!(celsius.origin.is_absolute());
        assert_eq!(celsius.relative().origin, Origin::Relative);
        assert_eq!(celsius.relative().magnitude, Rational::ONE);
    }

    #[test]
    fn same_unit_ignores_names_but_not_origin() {
        assert!(same_unit::<Meter, Meter>());
        assert!(!same_unit::<Meter, Second>());
        assert!(!same_unit::<Kelvin, Celsius>());
    }

    #[test]
    fn descriptor_for_static_units() {
        let d: &dyn UnitDescriptor = &Meter;
        assert_eq!(d.name(), "m");
        assert_eq!(d.dimension(), Dimension::LENGTH);
        assert_eq!(d.magnitude(), Ok(Rational::ONE));
        assert_eq!(d.origin(), Origin::Relative);
        assert!(units_equal(&Meter, &Meter.clone_unit()));
        assert!(!units_equal(&Meter, &Second));
    }

    #[test]
    fn scale_tags() {
        assert!(!<<Meter as Unit>::Scale as Scale>::ABSOLUTE);
        assert!(<<Celsius as Unit>::Scale as Scale>::ABSOLUTE);
        assert!(Celsius::is_absolute());
        assert!(Meter::is_relative());
        assert!(crate::Delta::<Celsius>::is_relative());
    }
}
