//! Compile-time unit algebra.
//!
//! Every static unit carries a [`TermList`]: its canonical product form, a short list of `(base, exponent)` pairs.
//! Composite units build their list from their operands in constant evaluation, so `Per<Meter, Meter>` has an empty
//! list and is the same unit as [`Unitless`](crate::Unitless), while `Prod<Watt, Second>` and `Joule` share a
//! dimension and magnitude and are therefore interchangeable under [`same_unit`](crate::same_unit).
//!
//! ## Canonical form
//!
//! - Terms are keyed by the relative [`UnitKey`] of their base; two bases with the same key merge.
//! - A merged term keeps the position of the first occurrence.
//! - Terms whose key equals the unitless key are never inserted.
//! - Terms whose exponent sums to zero are dropped.

use crate::dynamic::{DynUnit, NamedUnit, PowerTerm, Product};
use crate::unit::{RelativeScale, Unit, UnitKey};
use crate::{Dimension, Origin, Rational};
use alloc::string::String;
use core::marker::PhantomData;

/// Maximum number of distinct bases in one static product.
pub const MAX_TERMS: usize = 8;

/// One `base^exponent` factor of a [`TermList`].
#[derive(Clone, Copy, Debug)]
pub struct Term {
    key: UnitKey,
    exponent: i32,
    name: fn() -> String,
}

impl Term {
    /// Builds a term. `name` renders the base symbol.
    pub const fn new(key: UnitKey, exponent: i32, name: fn() -> String) -> Self {
        Self {
            key,
            exponent,
            name,
        }
    }

    /// Identity of the base, origin cleared.
    pub const fn key(&self) -> UnitKey {
        self.key
    }

    /// Exponent of the base.
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Symbol of the base.
    pub fn name(&self) -> String {
        (self.name)()
    }

    const fn with_exponent(self, exponent: i32) -> Self {
        Self::new(self.key, exponent, self.name)
    }
}

fn placeholder_name() -> String {
    String::new()
}

const PLACEHOLDER: Term = Term::new(UnitKey::UNITLESS, 0, placeholder_name);

/// Fixed-capacity canonical product of unit powers.
///
/// All operations are `const fn` so that composite units can compute their list as an associated constant.
/// Exceeding [`MAX_TERMS`] distinct bases, or taking a root of a non-divisible power, fails constant evaluation.
#[derive(Clone, Copy, Debug)]
pub struct TermList {
    terms: [Term; MAX_TERMS],
    len: usize,
}

impl TermList {
    /// The empty product, i.e. the unitless unit.
    pub const EMPTY: Self = Self {
        terms: [PLACEHOLDER; MAX_TERMS],
        len: 0,
    };

    /// The single-term list `U^1` of a named unit.
    ///
    /// The origin of `U` is not part of the term: absolute units enter products by their relative counterpart.
    pub const fn base_of<U: Unit>() -> Self {
        Self::EMPTY.fold(Term::new(UnitKey::of::<U>().relative(), 1, U::symbol), 1)
    }

    /// Number of terms.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the unitless product.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Term at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub const fn get(&self, index: usize) -> Term {
        assert!(index < self.len, "term index out of range");
        self.terms[index]
    }

    /// Iterates the terms in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Term> + '_ {
        self.terms[..self.len].iter()
    }

    const fn fold(mut self, term: Term, sign: i32) -> Self {
        if term.key.is_unitless() {
            return self;
        }
        let exponent = term.exponent * sign;
        let mut i = 0;
        while i < self.len {
            if self.terms[i].key.const_eq(&term.key) {
                self.terms[i].exponent += exponent;
                return self;
            }
            i += 1;
        }
        assert!(self.len < MAX_TERMS, "unit product has too many distinct bases");
        self.terms[self.len] = term.with_exponent(exponent);
        self.len += 1;
        self
    }

    const fn fold_all(mut self, other: &Self, sign: i32) -> Self {
        let mut i = 0;
        while i < other.len {
            self = self.fold(other.terms[i], sign);
            i += 1;
        }
        self.simplify()
    }

    /// Drops terms whose exponent is zero.
    pub const fn simplify(self) -> Self {
        let mut out = Self::EMPTY;
        let mut i = 0;
        while i < self.len {
            if self.terms[i].exponent != 0 {
                out.terms[out.len] = self.terms[i];
                out.len += 1;
            }
            i += 1;
        }
        out
    }

    /// Canonical product `self * other`.
    pub const fn multiply(self, other: &Self) -> Self {
        self.fold_all(other, 1)
    }

    /// Canonical quotient `self / other`.
    pub const fn divide(self, other: &Self) -> Self {
        self.fold_all(other, -1)
    }

    /// Every exponent scaled by `e`.
    pub const fn pow(self, e: i32) -> Self {
        let mut out = self;
        let mut i = 0;
        while i < out.len {
            out.terms[i].exponent *= e;
            i += 1;
        }
        out.simplify()
    }

    /// Returns `true` if every exponent is a multiple of `root`.
    pub const fn is_divisible_by(&self, root: i32) -> bool {
        let mut i = 0;
        while i < self.len {
            if self.terms[i].exponent % root != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Every exponent divided by `root`.
    ///
    /// # Panics
    ///
    /// Panics if `root` is zero or does not divide every exponent.
    pub const fn root(self, root: i32) -> Self {
        assert!(root != 0, "zeroth root of a unit");
        assert!(
            self.is_divisible_by(root),
            "taking root of non-divisible power"
        );
        let mut out = self;
        let mut i = 0;
        while i < out.len {
            out.terms[i].exponent /= root;
            i += 1;
        }
        out
    }

    /// Combined dimension of the terms.
    pub const fn dimension(&self) -> Dimension {
        let mut dimension = Dimension::DIMENSIONLESS;
        let mut i = 0;
        while i < self.len {
            let term = &self.terms[i];
            dimension = dimension.multiply(term.key.dimension.pow(term.exponent));
            i += 1;
        }
        dimension
    }

    /// Combined magnitude of the terms.
    pub const fn magnitude(&self) -> Rational {
        let mut magnitude = Rational::ONE;
        let mut i = 0;
        while i < self.len {
            let term = &self.terms[i];
            magnitude = magnitude.multiply(term.key.magnitude.pow(term.exponent));
            i += 1;
        }
        magnitude
    }

    /// Structural equality: same bases with the same exponents in the same order.
    pub const fn const_eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut i = 0;
        while i < self.len {
            if !self.terms[i].key.const_eq(&other.terms[i].key)
                || self.terms[i].exponent != other.terms[i].exponent
            {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Printable form, e.g. `"m * s^-2"`; `"1"` when empty.
    pub fn render(&self) -> String {
        render_terms(self.iter().map(|t| (t.name(), t.exponent)))
    }

    /// Run-time unit with the same terms, simplified.
    pub fn describe(&self) -> DynUnit {
        let mut product = Product::new();
        for term in self.iter() {
            let key = term.key;
            let base = NamedUnit::new(term.name(), key.dimension, key.magnitude, Origin::Relative);
            product.multiply_with(&DynUnit::Power(PowerTerm::new(base, term.exponent)));
        }
        product.simplify()
    }
}

/// Joins `(name, exponent)` pairs as `a * b^2 * c^-1`.
pub(crate) fn render_terms<I>(terms: I) -> String
where
    I: IntoIterator<Item = (String, i32)>,
{
    let mut out = String::new();
    for (name, exponent) in terms {
        if !out.is_empty() {
            out.push_str(" * ");
        }
        out.push_str(&name);
        if exponent != 1 {
            out.push_str(&alloc::format!("^{exponent}"));
        }
    }
    if out.is_empty() {
        out.push('1');
    }
    out
}

/// Product of two units, `A * B`.
///
/// ```rust
/// use measura_core::{same_unit, Prod};
/// use measura_core::derived::{Joule, Watt};
/// use measura_core::time::Second;
///
/// assert!(same_unit::<Prod<Watt, Second>, Joule>());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    type Scale = RelativeScale;
    const DIMENSION: Dimension = A::DIMENSION.multiply(B::DIMENSION);
    const MAGNITUDE: Rational = A::MAGNITUDE.multiply(B::MAGNITUDE);
    const ORIGIN: Origin = Origin::Relative;
    const TERMS: TermList = A::TERMS.multiply(&B::TERMS);
}

/// Quotient of two units, `N / D`.
///
/// ```rust
/// use measura_core::{same_unit, Per, Unitless};
/// use measura_core::length::Meter;
///
/// assert!(same_unit::<Per<Meter, Meter>, Unitless>());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    type Scale = RelativeScale;
    const DIMENSION: Dimension = N::DIMENSION.divide(D::DIMENSION);
    const MAGNITUDE: Rational = N::MAGNITUDE.divide(D::MAGNITUDE);
    const ORIGIN: Origin = Origin::Relative;
    const TERMS: TermList = N::TERMS.divide(&D::TERMS);
}

/// Integer power of a unit, `U^E`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pow<U: Unit, const E: i32>(PhantomData<U>);

impl<U: Unit, const E: i32> Unit for Pow<U, E> {
    type Scale = RelativeScale;
    const DIMENSION: Dimension = U::DIMENSION.pow(E);
    const MAGNITUDE: Rational = U::MAGNITUDE.pow(E);
    const ORIGIN: Origin = Origin::Relative;
    const TERMS: TermList = U::TERMS.pow(E);
}

/// Integer root of a unit, `U^(1/R)`.
///
/// Every exponent in the canonical form of `U` must be divisible by `R`; otherwise using the unit fails to compile.
///
/// ```rust
/// use measura_core::{same_unit, Pow, Root};
/// use measura_core::length::Meter;
///
/// assert!(same_unit::<Root<Pow<Meter, 4>, 2>, Pow<Meter, 2>>());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root<U: Unit, const R: i32>(PhantomData<U>);

impl<U: Unit, const R: i32> Unit for Root<U, R> {
    type Scale = RelativeScale;
    const DIMENSION: Dimension = Self::TERMS.dimension();
    const MAGNITUDE: Rational = Self::TERMS.magnitude();
    const ORIGIN: Origin = Origin::Relative;
    const TERMS: TermList = U::TERMS.root(R);
}

/// Square root of a unit.
pub type Sqrt<U> = Root<U, 2>;

/// Cube root of a unit.
pub type Cbrt<U> = Root<U, 3>;

/// Relative counterpart of `U`: same dimension and magnitude, no origin.
///
/// This is the unit of the difference between two absolute quantities, e.g. a temperature interval in kelvin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delta<U: Unit>(PhantomData<U>);

impl<U: Unit> Unit for Delta<U> {
    type Scale = RelativeScale;
    const DIMENSION: Dimension = U::DIMENSION;
    const MAGNITUDE: Rational = U::MAGNITUDE;
    const ORIGIN: Origin = Origin::Relative;
    const TERMS: TermList = U::TERMS;

    fn symbol() -> String {
        U::symbol()
    }

    fn describe() -> DynUnit {
        U::describe().relative()
    }
}
