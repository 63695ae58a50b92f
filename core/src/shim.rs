// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Free functions for callers that mix raw primitives and wrapper values.
//!
//! Every function here accepts either form (anything that converts into an
//! [`Element`]), unwraps it via [`ValueBox::payload`], and re-wraps results into the
//! smallest adequate wrapper:
//! - One character becomes a [`Char`], longer text becomes a [`BoundedString`] whose
//!   capacity is its length.
//! - Whole numbers become an [`Integer`], fractional ones a [`Float`].
//!
//! ```
//! use strict_core::{Integer, Raw, Value, bool_any, not, val, wrap_text};
//!
//! assert_eq!(val(Integer::new(3)), Raw::Int(3));
//! assert!(matches!(wrap_text("a"), Ok(Value::Char(_))));
//! assert!(matches!(wrap_text("ab"), Ok(Value::BoundedString(_))));
//! assert!(not(0).value());
//! assert!(bool_any(&[0.into(), "x".into()]).value());
//! ```

use crate::{Boolean, BoundedString, Char, Element, Float, Integer, Number, Raw,
            StrictError, StrictResult, Value, ok};

/// The raw payload of a primitive or wrapper.
pub fn val(element: impl Into<Element>) -> Raw { element.into().unwrapped() }

/// Wrap `text` into a [`Char`] when it holds exactly one character, otherwise into a
/// [`BoundedString`] sized to fit it. Empty text is a [`StrictError::Validation`].
pub fn wrap_text(text: &str) -> StrictResult<Value> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => {
            StrictError::new_validation_error("BoundedString", "cannot wrap an empty string")
        }
        (Some(ch), None) => ok!(Value::Char(Char::new(ch))),
        (Some(_), Some(_)) => {
            ok!(Value::BoundedString(BoundedString::try_new(text, None)?))
        }
    }
}

/// Wrap a numeric payload. Integers, and reals with no fractional part that fit in
/// `i64`, become [`Number::Integer`]. Other reals become [`Number::Float`]. Anything
/// that is not a number is a [`StrictError::Validation`].
pub fn wrap_number(raw: Raw) -> StrictResult<Number> {
    match raw {
        Raw::Int(it) => ok!(Number::Integer(Integer::new(it))),
        Raw::Real(it) => {
            let float = Number::Float(Float::new(it));
            if it.fract() == 0.0 {
                if let Ok(whole) = float.truncate() {
                    return ok!(Number::Integer(whole));
                }
            }
            ok!(float)
        }
        other => StrictError::new_validation_error(
            "Number",
            format!("{} is not a number", other.kind()),
        ),
    }
}

/// Logical negation of the truthiness of `element`.
pub fn not(element: impl Into<Element>) -> Boolean {
    Boolean::new(!element.into().is_truthy())
}

/// `true` when there is at least one element and every element is truthy.
#[must_use]
pub fn bool_all(elements: &[Element]) -> Boolean {
    Boolean::new(!elements.is_empty() && elements.iter().all(Element::is_truthy))
}

/// `true` when any element is truthy. An empty slice is `false`.
#[must_use]
pub fn bool_any(elements: &[Element]) -> Boolean {
    Boolean::new(elements.iter().any(Element::is_truthy))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{FixedArray, PrimitiveKind, TypeTag, ValueBox, WrapperKind, assert_eq2,
                len};

    #[test]
    fn test_val_unwraps_wrappers_and_passes_primitives() {
        assert_eq2!(val(5), Raw::Int(5));
        assert_eq2!(val(Float::new(1.5)), Raw::Real(1.5));
        assert_eq2!(val(Boolean::new(true)), Raw::Bool(true));
        assert_eq2!(val(Char::new('q')), Raw::Text("q".into()));

        let array = FixedArray::try_new(vec![1, 2], None).unwrap();
        assert_eq2!(val(array.clone()), array.payload());
    }

    #[test]
    fn test_wrap_text() {
        assert_eq2!(wrap_text("é"), Ok(Value::Char(Char::new('é'))));

        let Ok(Value::BoundedString(it)) = wrap_text("héllo") else {
            panic!("expected a BoundedString");
        };
        assert_eq2!(it.as_str(), "héllo");
        assert_eq2!(it.limit(), len(5));

        assert!(matches!(wrap_text(""), Err(StrictError::Validation { .. })));
    }

    #[test_case(Raw::Int(4), Number::Integer(Integer::new(4)) ; "integer")]
    #[test_case(Raw::Real(4.0), Number::Integer(Integer::new(4)) ; "whole real")]
    #[test_case(Raw::Real(-0.5), Number::Float(Float::new(-0.5)) ; "fractional real")]
    #[test_case(Raw::Real(1e300), Number::Float(Float::new(1e300)) ; "whole real out of range")]
    fn test_wrap_number(raw: Raw, expected: Number) {
        assert_eq2!(wrap_number(raw), Ok(expected));
    }

    #[test]
    fn test_wrap_number_rejects_non_numbers() {
        assert_eq2!(
            wrap_number(Raw::from("1")),
            Err(StrictError::Validation {
                type_name: "Number",
                reason: format!("{} is not a number", PrimitiveKind::String),
            })
        );
        assert!(wrap_number(Raw::Bool(true)).is_err());
    }

    #[test]
    fn test_wrapped_results_carry_wrapper_tags() {
        let text: Element = wrap_text("ab").unwrap().into();
        assert_eq2!(text.tag(), TypeTag::Wrapper(WrapperKind::BoundedString));
    }

    #[test_case(0, true)]
    #[test_case(1, false)]
    #[test_case("0", true)]
    #[test_case("", true)]
    #[test_case("a", false)]
    fn test_not(element: impl Into<Element>, expected: bool) {
        assert_eq2!(not(element).value(), expected);
    }

    #[test]
    fn test_not_unwraps_wrappers() {
        assert!(not(Boolean::new(false)).value());
        assert!(!not(Integer::new(-3)).value());
    }

    #[test]
    fn test_bool_all() {
        assert!(!bool_all(&[]).value());
        assert!(bool_all(&[1.into(), "x".into(), Boolean::new(true).into()]).value());
        assert!(!bool_all(&[1.into(), 0.0.into()]).value());
    }

    #[test]
    fn test_bool_any() {
        assert!(!bool_any(&[]).value());
        assert!(!bool_any(&[0.into(), "".into(), false.into()]).value());
        assert!(bool_any(&[0.into(), Integer::new(2).into()]).value());
    }
}
