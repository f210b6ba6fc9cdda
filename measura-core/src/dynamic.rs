//! Run-time unit algebra.
//!
//! [`DynUnit`] mirrors the static unit algebra for units only known at run time (read from configuration, chosen by a
//! user, …). Its results agree with the static algebra: a product built here and the static product of the same
//! units have equal dimension, magnitude and origin, and print the same name.

use crate::algebra::render_terms;
use crate::error::{UnitError, UnitResult};
use crate::unit::{UnitDescriptor, UnitKey};
use crate::{Dimension, Origin, Rational};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};
use core::ops::{Div, Mul};

fn overflow(unit: String) -> UnitError {
    log::debug!("magnitude of {unit} overflows i64");
    UnitError::MagnitudeOverflow { unit }
}

/// A unit with a name of its own, such as `m` or `°C`.
///
/// Equality compares dimension, magnitude and origin; names are cosmetic.
#[derive(Clone, Debug)]
pub struct NamedUnit {
    name: String,
    dimension: Dimension,
    magnitude: Rational,
    origin: Origin,
}

impl NamedUnit {
    /// Creates a named unit.
    pub fn new(name: impl Into<String>, dimension: Dimension, magnitude: Rational, origin: Origin) -> Self {
        Self {
            name: name.into(),
            dimension,
            magnitude,
            origin,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// SI dimension.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Exact ratio to the coherent SI unit.
    pub fn magnitude(&self) -> Rational {
        self.magnitude
    }

    /// Zero point.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Identity triple.
    pub fn key(&self) -> UnitKey {
        UnitKey::new(self.dimension, self.magnitude, self.origin)
    }

    /// Same unit with the origin cleared.
    pub fn relative(&self) -> Self {
        Self {
            origin: Origin::Relative,
            ..self.clone()
        }
    }

    /// Returns `true` if this unit is equivalent to `1`.
    pub fn is_unitless(&self) -> bool {
        self.key().is_unitless()
    }
}

impl PartialEq for NamedUnit {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for NamedUnit {}

/// A named unit raised to an integer power.
///
/// The base is always stored relative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerTerm {
    base: NamedUnit,
    exponent: i32,
}

impl PowerTerm {
    /// Creates `base^exponent`, clearing the origin of `base`.
    pub fn new(base: NamedUnit, exponent: i32) -> Self {
        Self {
            base: base.relative(),
            exponent,
        }
    }

    /// The base unit.
    pub fn base(&self) -> &NamedUnit {
        &self.base
    }

    /// The exponent.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Display name, `base^exponent`.
    pub fn name(&self) -> String {
        render_terms([(self.base.name.clone(), self.exponent)])
    }

    /// Dimension of the base raised to the exponent.
    pub fn dimension(&self) -> Dimension {
        self.base.dimension.pow(self.exponent)
    }

    /// Magnitude of the base raised to the exponent.
    pub fn magnitude(&self) -> UnitResult<Rational> {
        self.base
            .magnitude
            .checked_pow(self.exponent)
            .ok_or_else(|| overflow(self.name()))
    }

    /// `1` for a zero exponent or a unitless base, the base itself for exponent one, `self` otherwise.
    pub fn simplify(&self) -> DynUnit {
        if self.exponent == 0 || self.base.is_unitless() {
            DynUnit::unitless()
        } else if self.exponent == 1 {
            DynUnit::Named(self.base.clone())
        } else {
            DynUnit::Power(self.clone())
        }
    }
}

/// A product of powers, in canonical order.
///
/// Bases merge by identity, and a merged term keeps the position of its first occurrence. Terms that cancel stay in
/// the product until [`Product::simplify`] is called.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Product {
    terms: Vec<PowerTerm>,
}

impl Product {
    /// The empty product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Terms in canonical order.
    pub fn terms(&self) -> &[PowerTerm] {
        &self.terms
    }

    fn merge(&mut self, base: &NamedUnit, exponent: i32) {
        let base = base.relative();
        if base.is_unitless() {
            return;
        }
        match self.terms.iter_mut().find(|term| term.base == base) {
            Some(term) => term.exponent += exponent,
            None => self.terms.push(PowerTerm { base, exponent }),
        }
    }

    fn fold(&mut self, unit: &DynUnit, sign: i32) {
        match unit {
            DynUnit::Named(named) => self.merge(named, sign),
            DynUnit::Power(power) => self.merge(&power.base, sign * power.exponent),
            DynUnit::Product(product) => {
                for term in &product.terms {
                    self.merge(&term.base, sign * term.exponent);
                }
            }
        }
    }

    /// Multiplies by `unit`, merging matching bases.
    pub fn multiply_with(&mut self, unit: &DynUnit) {
        self.fold(unit, 1);
    }

    /// Divides by `unit`, merging matching bases.
    pub fn divide_by(&mut self, unit: &DynUnit) {
        self.fold(unit, -1);
    }

    /// Display name, e.g. `m * s^-1`.
    pub fn name(&self) -> String {
        render_terms(self.terms.iter().map(|t| (t.base.name.clone(), t.exponent)))
    }

    /// Combined dimension.
    pub fn dimension(&self) -> Dimension {
        self.terms
            .iter()
            .fold(Dimension::DIMENSIONLESS, |acc, t| acc.multiply(t.dimension()))
    }

    /// Combined magnitude.
    pub fn magnitude(&self) -> UnitResult<Rational> {
        self.terms.iter().try_fold(Rational::ONE, |acc, t| {
            acc.checked_multiply(t.magnitude()?)
                .ok_or_else(|| overflow(self.name()))
        })
    }

    /// Drops cancelled terms; an empty product becomes `1` and a single term collapses to itself.
    pub fn simplify(&self) -> DynUnit {
        let mut kept: Vec<PowerTerm> = self
            .terms
            .iter()
            .filter(|t| t.exponent != 0 && !t.base.is_unitless())
            .cloned()
            .collect();
        match kept.len() {
            0 => DynUnit::unitless(),
            1 => kept.remove(0).simplify(),
            _ => DynUnit::Product(Product { terms: kept }),
        }
    }
}

/// A unit known at run time.
///
/// ```rust
/// use measura_core::{DynUnit, Unit};
/// use measura_core::length::Meter;
/// use measura_core::time::Second;
///
/// let speed = Meter::describe() / Second::describe();
/// assert_eq!(speed.name(), "m * s^-1");
/// assert_eq!((speed.clone() * Second::describe()), Meter::describe());
/// ```
#[derive(Clone, Debug)]
pub enum DynUnit {
    /// A unit with its own name.
    Named(NamedUnit),
    /// A named unit raised to a power.
    Power(PowerTerm),
    /// A product of powers.
    Product(Product),
}

impl DynUnit {
    /// Creates a named unit.
    pub fn named(name: impl Into<String>, dimension: Dimension, magnitude: Rational, origin: Origin) -> Self {
        DynUnit::Named(NamedUnit::new(name, dimension, magnitude, origin))
    }

    /// The dimensionless unit `1`.
    pub fn unitless() -> Self {
        Self::named("1", Dimension::DIMENSIONLESS, Rational::ONE, Origin::Relative)
    }

    /// Display name.
    pub fn name(&self) -> String {
        match self {
            DynUnit::Named(named) => named.name.clone(),
            DynUnit::Power(power) => power.name(),
            DynUnit::Product(product) => product.name(),
        }
    }

    /// SI dimension.
    pub fn dimension(&self) -> Dimension {
        match self {
            DynUnit::Named(named) => named.dimension,
            DynUnit::Power(power) => power.dimension(),
            DynUnit::Product(product) => product.dimension(),
        }
    }

    /// Exact ratio to the coherent SI unit.
    ///
    /// Fails with [`UnitError::MagnitudeOverflow`] when the exact ratio, or a partial product of it, leaves the `i64`
    /// range (`nm^3` is `1/10^27`).
    pub fn magnitude(&self) -> UnitResult<Rational> {
        match self {
            DynUnit::Named(named) => Ok(named.magnitude),
            DynUnit::Power(power) => power.magnitude(),
            DynUnit::Product(product) => product.magnitude(),
        }
    }

    /// Zero point. Powers and products are always relative.
    pub fn origin(&self) -> Origin {
        match self {
            DynUnit::Named(named) => named.origin,
            DynUnit::Power(_) | DynUnit::Product(_) => Origin::Relative,
        }
    }

    /// Identity triple; fails when the magnitude does.
    pub fn key(&self) -> UnitResult<UnitKey> {
        Ok(UnitKey::new(self.dimension(), self.magnitude()?, self.origin()))
    }

    /// Returns `true` if this unit is equivalent to `1`.
    pub fn is_unitless(&self) -> bool {
        match self {
            DynUnit::Named(named) => named.is_unitless(),
            other => other.key().is_ok_and(|key| key.is_unitless()),
        }
    }

    /// Each base with its exponent, whatever the shape of the unit.
    fn powers(&self) -> Vec<(UnitKey, i32)> {
        match self {
            DynUnit::Named(named) => alloc::vec![(named.key(), 1)],
            DynUnit::Power(power) => alloc::vec![(power.base.key(), power.exponent)],
            DynUnit::Product(product) => product.terms.iter().map(|t| (t.base.key(), t.exponent)).collect(),
        }
    }

    /// Returns `true` if this unit has an origin.
    pub fn is_absolute(&self) -> bool {
        self.origin().is_absolute()
    }

    /// The relative counterpart: same unit with the origin cleared.
    pub fn relative(&self) -> DynUnit {
        match self {
            DynUnit::Named(named) => DynUnit::Named(named.relative()),
            other => other.clone(),
        }
    }

    /// Canonical form of this unit.
    pub fn simplify(&self) -> DynUnit {
        match self {
            DynUnit::Named(_) => self.clone(),
            DynUnit::Power(power) => power.simplify(),
            DynUnit::Product(product) => product.simplify(),
        }
    }

    /// Canonical product `self * other`.
    pub fn multiply(&self, other: &DynUnit) -> DynUnit {
        let mut product = Product::new();
        product.multiply_with(self);
        product.multiply_with(other);
        product.simplify()
    }

    /// Canonical quotient `self / other`.
    pub fn divide(&self, other: &DynUnit) -> DynUnit {
        let mut product = Product::new();
        product.multiply_with(self);
        product.divide_by(other);
        product.simplify()
    }

    /// `self^e`. A power of a product distributes over its terms.
    pub fn pow(&self, e: i32) -> DynUnit {
        match self {
            DynUnit::Named(named) => PowerTerm::new(named.clone(), e).simplify(),
            DynUnit::Power(power) => PowerTerm::new(power.base.clone(), power.exponent * e).simplify(),
            DynUnit::Product(product) => {
                let mut out = Product::new();
                for term in &product.terms {
                    out.merge(&term.base, term.exponent * e);
                }
                out.simplify()
            }
        }
    }

    /// `self^(1/root)`.
    ///
    /// A named unit has no power structure to divide, so its root is an error unless the unit is equivalent to `1`.
    ///
    /// # Panics
    ///
    /// Panics if `root` is zero.
    pub fn root(&self, root: i32) -> UnitResult<DynUnit> {
        assert!(root != 0, "zeroth root of a unit");
        match self {
            DynUnit::Named(named) if named.is_unitless() => Ok(self.clone()),
            DynUnit::Named(named) => Err(UnitError::RootOfNamedUnit {
                unit: named.name.clone(),
                root,
            }),
            DynUnit::Power(power) => {
                if power.exponent % root != 0 {
                    return Err(UnitError::IndivisibleRoot {
                        base: power.base.name.clone(),
                        exponent: power.exponent,
                        root,
                    });
                }
                Ok(PowerTerm::new(power.base.clone(), power.exponent / root).simplify())
            }
            DynUnit::Product(product) => {
                let mut out = Product::new();
                for term in &product.terms {
                    out.multiply_with(&DynUnit::Power(term.clone()).root(root)?);
                }
                Ok(out.simplify())
            }
        }
    }

    /// Square root; see [`DynUnit::root`].
    pub fn sqrt(&self) -> UnitResult<DynUnit> {
        self.root(2)
    }

    /// Cube root; see [`DynUnit::root`].
    pub fn cbrt(&self) -> UnitResult<DynUnit> {
        self.root(3)
    }
}

/// Equal identity triples. When either magnitude overflows, the simplified terms are compared instead.
impl PartialEq for DynUnit {
    fn eq(&self, other: &Self) -> bool {
        match (self.key(), other.key()) {
            (Ok(a), Ok(b)) => a == b,
            _ => {
                let (a, b) = (self.simplify().powers(), other.simplify().powers());
                a.len() == b.len() && a.iter().all(|term| b.contains(term))
            }
        }
    }
}

impl Eq for DynUnit {}

impl Display for DynUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name())
    }
}

impl Mul for DynUnit {
    type Output = DynUnit;
    fn mul(self, rhs: DynUnit) -> DynUnit {
        self.multiply(&rhs)
    }
}

impl Mul<&DynUnit> for &DynUnit {
    type Output = DynUnit;
    fn mul(self, rhs: &DynUnit) -> DynUnit {
        self.multiply(rhs)
    }
}

impl Div for DynUnit {
    type Output = DynUnit;
    fn div(self, rhs: DynUnit) -> DynUnit {
        self.divide(&rhs)
    }
}

impl Div<&DynUnit> for &DynUnit {
    type Output = DynUnit;
    fn div(self, rhs: &DynUnit) -> DynUnit {
        self.divide(rhs)
    }
}

impl UnitDescriptor for DynUnit {
    fn name(&self) -> String {
        DynUnit::name(self)
    }

    fn dimension(&self) -> Dimension {
        DynUnit::dimension(self)
    }

    fn magnitude(&self) -> UnitResult<Rational> {
        DynUnit::magnitude(self)
    }

    fn origin(&self) -> Origin {
        DynUnit::origin(self)
    }

    fn clone_unit(&self) -> DynUnit {
        self.clone()
    }

    fn simplify(&self) -> DynUnit {
        DynUnit::simplify(self)
    }
}
