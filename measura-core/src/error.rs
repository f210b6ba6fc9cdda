//! Errors raised by run-time unit checks.
//!
//! Static units reject the same mistakes at compile time, so only the dynamic path returns these.

use alloc::string::String;

/// Result type for dynamic unit operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// A unit rule violated by a dynamic operation.
///
/// These indicate a programming error in the caller; they are never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// Source and target units measure different things.
    #[error("cannot convert between quantities with different dimensions: {from} -> {to}")]
    DimensionMismatch {
        /// Source unit name.
        from: String,
        /// Target unit name.
        to: String,
    },

    /// One unit has an origin and the other does not.
    #[error("cannot convert from absolute to relative or vice-versa: {from} -> {to}")]
    ScaleMismatch {
        /// Source unit name.
        from: String,
        /// Target unit name.
        to: String,
    },

    /// Addition, subtraction or comparison of quantities whose units differ.
    #[error("cannot {operation} quantities with different units: {lhs} and {rhs}")]
    IncompatibleUnits {
        /// The rejected operation.
        operation: &'static str,
        /// Left operand unit name.
        lhs: String,
        /// Right operand unit name.
        rhs: String,
    },

    /// Addition of two absolute quantities has no physical meaning.
    #[error("cannot add quantities of absolute unit {unit}")]
    AbsoluteAddition {
        /// The absolute unit.
        unit: String,
    },

    /// A named unit has no power structure to take a root of.
    #[error("cannot take {root}th root of named unit {unit}")]
    RootOfNamedUnit {
        /// The named unit.
        unit: String,
        /// Requested root.
        root: i32,
    },

    /// A power whose exponent is not a multiple of the requested root.
    #[error("taking {root}th root of non-divisible {exponent}th power of {base}")]
    IndivisibleRoot {
        /// Base of the offending power.
        base: String,
        /// Exponent of the offending power.
        exponent: i32,
        /// Requested root.
        root: i32,
    },

    /// A transcendental function applied to a quantity with units.
    #[error("{function} requires a dimensionless argument, found {unit}")]
    NotDimensionless {
        /// The function.
        function: &'static str,
        /// Unit of the argument.
        unit: String,
    },

    /// The exact magnitude of a unit does not fit in `i64` numerator and denominator.
    #[error("magnitude of {unit} overflows exact rational arithmetic")]
    MagnitudeOverflow {
        /// The unit whose magnitude was requested.
        unit: String,
    },

    /// A trigonometric function applied to something that is not in radians.
    #[error("{function} requires an angle in radians, found {unit}")]
    NotAngular {
        /// The function.
        function: &'static str,
        /// Unit of the argument.
        unit: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_units() {
        let err = UnitError::DimensionMismatch {
            from: "m".into(),
            to: "s".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot convert between quantities with different dimensions: m -> s"
        );

        let err = UnitError::IndivisibleRoot {
            base: "m".into(),
            exponent: 3,
            root: 2,
        };
        assert_eq!(
            err.to_string(),
            "taking 2th root of non-divisible 3th power of m"
        );

        let err = UnitError::MagnitudeOverflow { unit: "nm^3".into() };
        assert_eq!(err.to_string(), "magnitude of nm^3 overflows exact rational arithmetic");
    }
}
