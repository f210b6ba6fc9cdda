//! Metric prefixes.
//!
//! A prefix wraps any unit `U` and scales its magnitude; the prefixed unit is a new named base of its own, so
//! `Kilo<Meter>` prints as `km` and `Milli<Inch>` as `min`.
//!
//! ```rust
//! use measura_core::Quantity;
//! use measura_core::length::{Inch, Meter};
//! use measura_core::prefix::{Micro, Milli};
//!
//! let thou = Quantity::<Milli<Inch>>::new(1.0);
//! let um = thou.to::<Micro<Meter>>();
//! assert!((um.value() - 25.4).abs() < 1e-12);
//! ```
//!
//! Prefixes apply to relative units only; the prefixed unit carries no origin.

use crate::{Dimension, DynUnit, Origin, Rational, RelativeScale, TermList, Unit};
use alloc::string::String;
use core::marker::PhantomData;

macro_rules! prefix {
    ($(#[$doc:meta])* $name:ident, $symbol:literal, $numerator:expr, $denominator:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name<U: Unit>(PhantomData<U>);

        impl<U: Unit> Unit for $name<U> {
            type Scale = RelativeScale;
            const DIMENSION: Dimension = U::DIMENSION;
            const MAGNITUDE: Rational = Rational::new($numerator, $denominator).multiply(U::MAGNITUDE);
            const ORIGIN: Origin = Origin::Relative;
            const TERMS: TermList = TermList::base_of::<Self>();

            fn symbol() -> String {
                let mut symbol = String::from($symbol);
                symbol.push_str(&U::symbol());
                symbol
            }

            fn describe() -> DynUnit {
                DynUnit::named(Self::symbol(), Self::DIMENSION, Self::MAGNITUDE, Self::ORIGIN)
            }
        }
    };
}

prefix!(
    /// `10^-9 U`.
    Nano, "n", 1, 1_000_000_000
);
prefix!(
    /// `10^-6 U`.
    Micro, "u", 1, 1_000_000
);
prefix!(
    /// `10^-3 U`.
    Milli, "m", 1, 1_000
);
prefix!(
    /// `10^3 U`.
    Kilo, "k", 1_000, 1
);
prefix!(
    /// `10^6 U`.
    Mega, "M", 1_000_000, 1
);
