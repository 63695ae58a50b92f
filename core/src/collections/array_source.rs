// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Element, StrictError, StrictResult, TypeTag, Value};

/// What a collection is constructed from: an empty collection of some capacity, or an
/// existing ordered sequence whose length becomes the capacity.
#[derive(Debug, Clone, PartialEq)]
pub enum ArraySource {
    /// Must not be negative.
    Capacity(i64),
    Elements(Vec<Element>),
}

impl From<i64> for ArraySource {
    fn from(it: i64) -> Self { ArraySource::Capacity(it) }
}

impl From<i32> for ArraySource {
    fn from(it: i32) -> Self { ArraySource::Capacity(it.into()) }
}

impl<T: Into<Element>> From<Vec<T>> for ArraySource {
    fn from(it: Vec<T>) -> Self {
        ArraySource::Elements(it.into_iter().map(Into::into).collect())
    }
}

impl ArraySource {
    /// The capacity to allocate for this source.
    pub(crate) fn capacity(&self, type_name: &'static str) -> StrictResult<usize> {
        match self {
            ArraySource::Capacity(it) => usize::try_from(*it).or_else(|_| {
                StrictError::new_validation_error(
                    type_name,
                    format!("capacity must be >= 0, {it} given"),
                )
            }),
            ArraySource::Elements(it) => Ok(it.len()),
        }
    }
}

/// Accept `element` under `tag`. A raw primitive is auto-wrapped into the declared
/// wrapper type when its kind belongs to that wrapper's family, and the wrapper's
/// validation error is returned if the payload is rejected. Anything else that does not
/// match is a [`StrictError::TypeConstraint`].
pub fn coerce_to_tag(tag: Option<TypeTag>, element: Element) -> StrictResult<Element> {
    let Some(tag) = tag else {
        return Ok(element);
    };
    if tag.matches(&element) {
        return Ok(element);
    }

    if let (TypeTag::Wrapper(kind), Element::Raw(raw)) = (tag, &element) {
        if admits(kind, raw.kind()) {
            return Ok(Element::Boxed(Value::try_wrap(kind, raw.clone())?));
        }
    }

    Err(StrictError::TypeConstraint {
        expected: tag,
        found: element.tag(),
    })
}

fn admits(kind: crate::WrapperKind, raw: crate::PrimitiveKind) -> bool {
    use crate::{PrimitiveKind as P, WrapperKind as W};
    matches!(
        (kind, raw),
        (W::Char | W::BoundedString, P::String)
            | (W::Integer | W::Byte, P::Integer)
            | (W::Float, P::Double)
            | (W::Boolean, P::Boolean)
    )
}
