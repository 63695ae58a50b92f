// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::Not};

use crate::{Byte, Number, Raw, StrictError, StrictResult, Value, ValueBox, WrapperKind};

/// A [`Byte`] read as `false` / `true`.
///
/// ```
/// use strict_core::{Boolean, Raw};
///
/// let it = Boolean::try_from(Raw::Real(0.5)).unwrap();
/// assert!(it.value());
/// assert!((!it).is_negative());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Boolean {
    byte: Byte,
}

impl Boolean {
    #[must_use]
    pub fn new(value: bool) -> Self {
        Self {
            byte: Byte::from(value),
        }
    }

    #[must_use]
    pub fn value(&self) -> bool { self.byte.is_set() }

    #[must_use]
    pub fn as_byte(&self) -> Byte { self.byte }

    /// True when the value is `false`.
    #[must_use]
    pub fn is_negative(&self) -> bool { !self.value() }

    /// True when the value is `true`.
    #[must_use]
    pub fn is_positive(&self) -> bool { self.value() }

    /// Non-zero is `true`.
    #[must_use]
    pub fn from_number(number: &Number) -> Self { Self::new(!number.is_zero()) }

    /// Accepts a [`Byte`], a [`Boolean`], or any numeric wrapper.
    pub fn try_from_value(value: &Value) -> StrictResult<Self> {
        match value {
            Value::Boolean(it) => Ok(*it),
            Value::Byte(it) => Ok(Self { byte: *it }),
            other => Ok(Self::from_number(&other.try_as_number()?)),
        }
    }
}

impl Not for Boolean {
    type Output = Boolean;

    fn not(self) -> Self::Output { Self::new(!self.value()) }
}

impl From<bool> for Boolean {
    fn from(it: bool) -> Self { Self::new(it) }
}

impl From<Byte> for Boolean {
    fn from(byte: Byte) -> Self { Self { byte } }
}

impl TryFrom<Raw> for Boolean {
    type Error = StrictError;

    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        match raw {
            Raw::Bool(it) => Ok(Self::new(it)),
            Raw::Int(it) => Ok(Self::new(it != 0)),
            Raw::Real(it) => Ok(Self::new(it != 0.0)),
            other => StrictError::new_validation_error(
                "Boolean",
                format!("a bool or a number is required, {} given", other.kind()),
            ),
        }
    }
}

impl ValueBox for Boolean {
    fn kind(&self) -> WrapperKind { WrapperKind::Boolean }

    fn payload(&self) -> Raw { Raw::Bool(self.value()) }
}

impl Display for Boolean {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
