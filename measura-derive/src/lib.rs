//! Derive macro implementation used by `measura-core`.
//!
//! `measura-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::Dimension`, `crate::Rational`, `crate::Origin`, `crate::TermList` and `crate::DynUnit`, so it
//! is intended to be used by `measura-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `measura` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements `crate::Unit for MyUnit`. The unit is a named base of the
//! unit algebra: its canonical form is the single term `MyUnit^1`.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `dimension = Dimension::LENGTH`: SI dimension (a `const` expression)
//! - `magnitude = Rational::new(254, 10_000)`: exact ratio to the coherent SI unit (a `const` expression)
//! - `origin = Rational::new(27_315, 100)` (optional): zero point in the coherent unit; its presence makes the unit
//!   absolute

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` for a named unit marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension` and `magnitude`, and
/// optionally `origin`.
///
/// This macro is intended for use by `measura-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let magnitude = &unit_attr.magnitude;

    let (scale, origin) = match &unit_attr.origin {
        Some(origin) => (
            quote! { crate::AbsoluteScale },
            quote! { crate::Origin::Absolute(#origin) },
        ),
        None => (quote! { crate::RelativeScale }, quote! { crate::Origin::Relative }),
    };

    let expanded = quote! {
        impl crate::Unit for #name {
            type Scale = #scale;
            const DIMENSION: crate::Dimension = #dimension;
            const MAGNITUDE: crate::Rational = #magnitude;
            const ORIGIN: crate::Origin = #origin;
            const TERMS: crate::TermList = crate::TermList::base_of::<Self>();

            fn symbol() -> ::alloc::string::String {
                ::alloc::string::String::from(#symbol)
            }

            fn describe() -> crate::DynUnit {
                crate::DynUnit::named(
                    #symbol,
                    <Self as crate::Unit>::DIMENSION,
                    <Self as crate::Unit>::MAGNITUDE,
                    <Self as crate::Unit>::ORIGIN,
                )
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    magnitude: Expr,
    origin: Option<Expr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut magnitude: Option<Expr> = None;
        let mut origin: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "magnitude" => {
                    magnitude = Some(input.parse()?);
                }
                "origin" => {
                    origin = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let magnitude = magnitude.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `magnitude`")
        })?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            magnitude,
            origin,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Dimension::LENGTH, magnitude = Rational::ONE)]
            pub struct Meter;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "m");
        assert!(attr.origin.is_none());
    }

    #[test]
    fn test_parse_unit_attribute_with_origin() {
        let input: DeriveInput = parse_quote! {
            #[unit(
                symbol = "°C",
                dimension = Dimension::TEMPERATURE,
                magnitude = Rational::ONE,
                origin = Rational::new(27_315, 100)
            )]
            pub struct Celsius;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "°C");
        assert!(attr.origin.is_some());
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Dimension::LENGTH, magnitude = Rational::ONE)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", magnitude = Rational::ONE)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_magnitude() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Dimension::LENGTH)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `magnitude`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Dimension::LENGTH, magnitude = Rational::ONE, ratio = 1.0)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("unknown attribute `ratio`"));
    }

    #[test]
    fn test_derive_relative_unit() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "in", dimension = Dimension::LENGTH, magnitude = Rational::new(254, 10_000))]
            pub struct Inch;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for Inch"));
        assert!(code.contains("type Scale = crate :: RelativeScale"));
        assert!(code.contains("const DIMENSION : crate :: Dimension = Dimension :: LENGTH"));
        assert!(code.contains("const MAGNITUDE : crate :: Rational = Rational :: new (254 , 10_000)"));
        assert!(code.contains("const ORIGIN : crate :: Origin = crate :: Origin :: Relative"));
        assert!(code.contains("crate :: TermList :: base_of :: < Self > ()"));
        assert!(code.contains("String :: from (\"in\")"));
    }

    #[test]
    fn test_derive_absolute_unit() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "K", dimension = Dimension::TEMPERATURE, magnitude = Rational::ONE, origin = Rational::ZERO)]
            pub struct Kelvin;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("type Scale = crate :: AbsoluteScale"));
        assert!(code.contains("crate :: Origin :: Absolute (Rational :: ZERO)"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "m", dimension = Dimension::LENGTH, magnitude = Rational::ONE,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_unit_attribute_parse_duplicate_symbol() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            symbol = "m", symbol = "km", dimension = Dimension::LENGTH, magnitude = Rational::ONE
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "km");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
