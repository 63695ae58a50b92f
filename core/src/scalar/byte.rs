// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::{Raw, StrictError, StrictResult, ValueBox, WrapperKind};

/// An integer restricted to `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Byte {
    bit: bool,
}

impl Byte {
    pub fn try_new(value: i64) -> StrictResult<Self> {
        match value {
            0 => Ok(Self { bit: false }),
            1 => Ok(Self { bit: true }),
            _ => StrictError::new_validation_error(
                "Byte",
                format!("must be 0 or 1, {value} given"),
            ),
        }
    }

    #[must_use]
    pub fn get(&self) -> i64 { i64::from(self.bit) }

    #[must_use]
    pub fn is_set(&self) -> bool { self.bit }
}

impl From<bool> for Byte {
    fn from(bit: bool) -> Self { Self { bit } }
}

impl TryFrom<Raw> for Byte {
    type Error = StrictError;

    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        match raw {
            Raw::Int(it) => Self::try_new(it),
            other => StrictError::new_validation_error(
                "Byte",
                format!("an integer is required, {} given", other.kind()),
            ),
        }
    }
}

impl ValueBox for Byte {
    fn kind(&self) -> WrapperKind { WrapperKind::Byte }

    fn payload(&self) -> Raw { Raw::Int(self.get()) }
}

impl Display for Byte {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}
