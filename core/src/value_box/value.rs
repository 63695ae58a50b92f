// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::{Raw, ValueBox, WrapperKind};
use crate::{AssociativeArray, Boolean, BoundedString, Byte, Char, FixedArray, Float,
            Integer, Number, StrictError, StrictResult};

/// Closed set of every wrapper type. This is what [`crate::Element::Boxed`] holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(Byte),
    Boolean(Boolean),
    Integer(Integer),
    Float(Float),
    Char(Char),
    BoundedString(BoundedString),
    FixedArray(FixedArray),
    AssociativeArray(AssociativeArray),
}

impl Value {
    /// Build the wrapper named by `kind` from a raw payload, running its validation.
    pub fn try_wrap(kind: WrapperKind, raw: Raw) -> StrictResult<Self> {
        Ok(match kind {
            WrapperKind::Byte => Value::Byte(Byte::try_from(raw)?),
            WrapperKind::Boolean => Value::Boolean(Boolean::try_from(raw)?),
            WrapperKind::Integer => Value::Integer(Integer::try_from(raw)?),
            WrapperKind::Float => Value::Float(Float::try_from(raw)?),
            WrapperKind::Char => Value::Char(Char::try_from(raw)?),
            WrapperKind::BoundedString => Value::BoundedString(BoundedString::try_from(raw)?),
            WrapperKind::FixedArray => Value::FixedArray(FixedArray::try_from(raw)?),
            WrapperKind::AssociativeArray => {
                Value::AssociativeArray(AssociativeArray::try_from(raw)?)
            }
        })
    }

    /// The numeric view of a numeric wrapper. Byte and Boolean read as integers.
    pub fn try_as_number(&self) -> StrictResult<Number> {
        match self {
            Value::Byte(it) => Ok(Number::from(it.get())),
            Value::Boolean(it) => Ok(Number::from(i64::from(it.value()))),
            Value::Integer(it) => Ok(Number::Integer(*it)),
            Value::Float(it) => Ok(Number::Float(*it)),
            _ => StrictError::new_validation_error(
                "Number",
                format!("{} is not a numeric wrapper", self.kind()),
            ),
        }
    }
}

impl ValueBox for Value {
    fn kind(&self) -> WrapperKind {
        match self {
            Value::Byte(it) => it.kind(),
            Value::Boolean(it) => it.kind(),
            Value::Integer(it) => it.kind(),
            Value::Float(it) => it.kind(),
            Value::Char(it) => it.kind(),
            Value::BoundedString(it) => it.kind(),
            Value::FixedArray(it) => it.kind(),
            Value::AssociativeArray(it) => it.kind(),
        }
    }

    fn payload(&self) -> Raw {
        match self {
            Value::Byte(it) => it.payload(),
            Value::Boolean(it) => it.payload(),
            Value::Integer(it) => it.payload(),
            Value::Float(it) => it.payload(),
            Value::Char(it) => it.payload(),
            Value::BoundedString(it) => it.payload(),
            Value::FixedArray(it) => it.payload(),
            Value::AssociativeArray(it) => it.payload(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.payload())
    }
}

impl From<Number> for Value {
    fn from(it: Number) -> Self {
        match it {
            Number::Integer(it) => Value::Integer(it),
            Number::Float(it) => Value::Float(it),
        }
    }
}
