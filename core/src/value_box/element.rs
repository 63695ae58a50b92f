// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::{Raw, TypeTag, Value, ValueBox};

/// A collection member: either a raw primitive, or a boxed wrapper [`Value`].
///
/// Equality scans (eg: [`crate::FixedArray::find`] with a wrapper tag, and every keyed
/// lookup of [`crate::AssociativeArray`]) compare [`Element::unwrapped`] payloads, so
/// `Element::from(1)` and `Element::from(Integer::new(1))` are found by each other.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Raw(Raw),
    Boxed(Value),
}

impl Element {
    /// The raw payload, unwrapping a boxed value via [`ValueBox::payload`].
    #[must_use]
    pub fn unwrapped(&self) -> Raw {
        match self {
            Element::Raw(raw) => raw.clone(),
            Element::Boxed(value) => value.payload(),
        }
    }

    #[must_use]
    pub fn tag(&self) -> TypeTag { TypeTag::of(self) }

    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Element::Boxed(value) => Some(value),
            Element::Raw(_) => None,
        }
    }

    #[must_use]
    pub fn is_truthy(&self) -> bool { self.unwrapped().is_truthy() }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Raw(raw) => write!(f, "{raw}"),
            Element::Boxed(value) => write!(f, "{value}"),
        }
    }
}

mod convert {
    use super::{Element, Raw, Value};
    use crate::{AssociativeArray, Boolean, BoundedString, Byte, Char, FixedArray, Float,
                Integer, Number};

    impl From<Raw> for Element {
        fn from(it: Raw) -> Self { Element::Raw(it) }
    }

    impl From<Value> for Element {
        fn from(it: Value) -> Self { Element::Boxed(it) }
    }

    impl From<i64> for Element {
        fn from(it: i64) -> Self { Element::Raw(Raw::Int(it)) }
    }

    impl From<i32> for Element {
        fn from(it: i32) -> Self { Element::Raw(Raw::Int(it.into())) }
    }

    impl From<f64> for Element {
        fn from(it: f64) -> Self { Element::Raw(Raw::Real(it)) }
    }

    impl From<bool> for Element {
        fn from(it: bool) -> Self { Element::Raw(Raw::Bool(it)) }
    }

    impl From<&str> for Element {
        fn from(it: &str) -> Self { Element::Raw(Raw::Text(it.to_string())) }
    }

    impl From<String> for Element {
        fn from(it: String) -> Self { Element::Raw(Raw::Text(it)) }
    }

    impl From<Vec<Element>> for Element {
        fn from(it: Vec<Element>) -> Self { Element::Raw(Raw::List(it)) }
    }

    impl From<Number> for Element {
        fn from(it: Number) -> Self { Element::Boxed(it.into()) }
    }

    /// Generate `From<$wrapper> for Element` for every wrapper type.
    macro_rules! impl_from_wrapper {
        ($($wrapper:ident),* $(,)?) => {
            $(
                impl From<$wrapper> for Element {
                    fn from(it: $wrapper) -> Self { Element::Boxed(Value::$wrapper(it)) }
                }
            )*
        };
    }

    impl_from_wrapper!(
        Byte,
        Boolean,
        Integer,
        Float,
        Char,
        BoundedString,
        FixedArray,
        AssociativeArray,
    );
}
