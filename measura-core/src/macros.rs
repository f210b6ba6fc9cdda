//! Macros for defining units and conversions.

/// Generates `From` trait implementations for all pairs of units in the list.
///
/// Every pair must be convertible: same dimension, and either all absolute or all relative. The impls are generic
/// over the scalar type.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<T: $crate::Scalar> From<$crate::Quantity<$first, T>> for $crate::Quantity<$rest, T> {
                fn from(value: $crate::Quantity<$first, T>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<T: $crate::Scalar> From<$crate::Quantity<$rest, T>> for $crate::Quantity<$first, T> {
                fn from(value: $crate::Quantity<$rest, T>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        // Recurse with the rest of the units
        $crate::impl_unit_conversions!($($rest),+);
    };
}
