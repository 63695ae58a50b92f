// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::{Element, PrimitiveKind};

/// The primitive payload owned by every [`crate::ValueBox`]. Equality is structural, so
/// `Int(1) != Real(1.0)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Raw {
    Int(i64),
    Real(f64),
    Bool(bool),
    Text(String),
    List(Vec<Element>),
}

impl Raw {
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Raw::Int(_) => PrimitiveKind::Integer,
            Raw::Real(_) => PrimitiveKind::Double,
            Raw::Bool(_) => PrimitiveKind::Boolean,
            Raw::Text(_) => PrimitiveKind::String,
            Raw::List(_) => PrimitiveKind::Array,
        }
    }

    /// Non-zero numbers, `true`, non-empty text other than `"0"`, and non-empty lists.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Raw::Int(it) => *it != 0,
            Raw::Real(it) => *it != 0.0,
            Raw::Bool(it) => *it,
            Raw::Text(it) => !it.is_empty() && it != "0",
            Raw::List(it) => !it.is_empty(),
        }
    }

    /// Numeric payloads widened to `f64`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Raw::Int(it) => Some(*it as f64),
            Raw::Real(it) => Some(*it),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Raw::Text(it) => Some(it),
            _ => None,
        }
    }
}

impl Display for Raw {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Raw::Int(it) => write!(f, "{it}"),
            Raw::Real(it) => write!(f, "{it}"),
            Raw::Bool(it) => write!(f, "{it}"),
            Raw::Text(it) => write!(f, "{it}"),
            Raw::List(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

mod convert {
    use super::{Element, Raw};

    impl From<i64> for Raw {
        fn from(it: i64) -> Self { Raw::Int(it) }
    }

    impl From<i32> for Raw {
        fn from(it: i32) -> Self { Raw::Int(it.into()) }
    }

    impl From<f64> for Raw {
        fn from(it: f64) -> Self { Raw::Real(it) }
    }

    impl From<bool> for Raw {
        fn from(it: bool) -> Self { Raw::Bool(it) }
    }

    impl From<&str> for Raw {
        fn from(it: &str) -> Self { Raw::Text(it.to_string()) }
    }

    impl From<String> for Raw {
        fn from(it: String) -> Self { Raw::Text(it) }
    }

    impl From<Vec<Element>> for Raw {
        fn from(it: Vec<Element>) -> Self { Raw::List(it) }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(Raw::Int(0), false)]
    #[test_case(Raw::Int(-4), true)]
    #[test_case(Raw::Real(0.0), false)]
    #[test_case(Raw::Text("0".into()), false)]
    #[test_case(Raw::Text(String::new()), false)]
    #[test_case(Raw::Text("no".into()), true)]
    #[test_case(Raw::List(vec![]), false)]
    #[test_case(Raw::List(vec![Element::from(0)]), true)]
    fn test_is_truthy(raw: Raw, expected: bool) {
        assert_eq2!(raw.is_truthy(), expected);
    }

    #[test]
    fn test_structural_equality() {
        assert_ne!(Raw::Int(1), Raw::Real(1.0));
        assert_eq2!(Raw::from("a"), Raw::Text("a".to_string()));
    }

    #[test]
    fn test_display() {
        let list = Raw::List(vec![Element::from(1), Element::from("b")]);
        assert_eq2!(list.to_string(), "[1, b]");
        assert_eq2!(list.kind(), PrimitiveKind::Array);
    }
}
