// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use strum_macros::{AsRefStr, Display as StrumDisplay, EnumString};

use super::{Element, ValueBox};
use crate::{StrictError, StrictResult};

/// The primitive kinds a collection may be constrained to. The names are the ones
/// callers use when they spell a tag as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr)]
pub enum PrimitiveKind {
    #[strum(serialize = "string")]
    String,
    #[strum(serialize = "array")]
    Array,
    #[strum(serialize = "integer")]
    Integer,
    #[strum(serialize = "double")]
    Double,
    #[strum(serialize = "boolean")]
    Boolean,
}

/// Closed set of wrapper types. Every capability query on [`ValueBox`] is a match over
/// this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr)]
pub enum WrapperKind {
    Byte,
    Boolean,
    Integer,
    Float,
    Char,
    BoundedString,
    FixedArray,
    AssociativeArray,
}

/// The element, key, or value constraint of a collection. It names exactly one
/// permitted primitive kind or wrapper type, and matching is exact: a
/// [`WrapperKind::Boolean`] tag does not admit a [`crate::Byte`].
///
/// ```
/// use strict_core::{TypeTag, WrapperKind, PrimitiveKind, StrictError};
///
/// let tag: TypeTag = "Integer".parse().unwrap();
/// assert_eq!(tag, TypeTag::Wrapper(WrapperKind::Integer));
/// let tag: TypeTag = "string".parse().unwrap();
/// assert_eq!(tag, TypeTag::Primitive(PrimitiveKind::String));
/// assert!(matches!("Widget".parse::<TypeTag>(), Err(StrictError::Validation { .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Primitive(PrimitiveKind),
    Wrapper(WrapperKind),
}

impl TypeTag {
    /// The runtime tag of an element.
    #[must_use]
    pub fn of(element: &Element) -> Self {
        match element {
            Element::Raw(raw) => TypeTag::Primitive(raw.kind()),
            Element::Boxed(value) => TypeTag::Wrapper(value.kind()),
        }
    }

    #[must_use]
    pub fn matches(&self, element: &Element) -> bool { Self::of(element) == *self }

    /// Returns `Ok(())` or a [`StrictError::TypeConstraint`] naming both tags.
    pub fn check(&self, element: &Element) -> StrictResult<()> {
        if self.matches(element) {
            Ok(())
        } else {
            Err(StrictError::TypeConstraint {
                expected: *self,
                found: Self::of(element),
            })
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeTag::Primitive(it) => write!(f, "{it}"),
            TypeTag::Wrapper(it) => write!(f, "{it}"),
        }
    }
}

impl FromStr for TypeTag {
    type Err = StrictError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Ok(it) = WrapperKind::from_str(name) {
            return Ok(TypeTag::Wrapper(it));
        }
        if let Ok(it) = PrimitiveKind::from_str(name) {
            return Ok(TypeTag::Primitive(it));
        }
        StrictError::new_validation_error(
            "TypeTag",
            format!("`{name}` is neither a wrapper type nor an allowed primitive"),
        )
    }
}

impl From<PrimitiveKind> for TypeTag {
    fn from(it: PrimitiveKind) -> Self { TypeTag::Primitive(it) }
}

impl From<WrapperKind> for TypeTag {
    fn from(it: WrapperKind) -> Self { TypeTag::Wrapper(it) }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{Byte, Integer, assert_eq2};

    #[test_case("Byte", TypeTag::Wrapper(WrapperKind::Byte))]
    #[test_case("AssociativeArray", TypeTag::Wrapper(WrapperKind::AssociativeArray))]
    #[test_case("double", TypeTag::Primitive(PrimitiveKind::Double))]
    #[test_case("boolean", TypeTag::Primitive(PrimitiveKind::Boolean))]
    fn test_parse_known_names(name: &str, expected: TypeTag) {
        assert_eq2!(name.parse::<TypeTag>(), Ok(expected));
        assert_eq2!(expected.to_string(), name);
    }

    #[test_case("float")]
    #[test_case("integer ")]
    #[test_case("Object")]
    #[test_case("")]
    fn test_parse_unknown_names(name: &str) {
        assert!(matches!(
            name.parse::<TypeTag>(),
            Err(StrictError::Validation { .. })
        ));
    }

    #[test]
    fn test_matches_is_exact() {
        let tag = TypeTag::Wrapper(WrapperKind::Integer);
        assert!(tag.matches(&Element::from(Integer::new(3))));
        assert!(!tag.matches(&Element::from(3)));
        assert!(!tag.matches(&Element::from(Byte::try_new(1).unwrap())));

        let tag = TypeTag::Primitive(PrimitiveKind::Integer);
        assert!(tag.matches(&Element::from(3)));
        assert_eq2!(
            tag.check(&Element::from("x")),
            Err(StrictError::TypeConstraint {
                expected: tag,
                found: TypeTag::Primitive(PrimitiveKind::String),
            })
        );
    }
}
