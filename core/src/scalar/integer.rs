// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::{Number, Raw, RoundMode, StrictError, StrictResult, ValueBox, WrapperKind};

/// A whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer {
    value: i64,
}

/// A real number. Any `f64` is accepted, including the non-finite ones.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Float {
    value: f64,
}

impl Integer {
    #[must_use]
    pub const fn new(value: i64) -> Self { Self { value } }

    #[must_use]
    pub fn get(&self) -> i64 { self.value }
}

impl Float {
    #[must_use]
    pub const fn new(value: f64) -> Self { Self { value } }

    #[must_use]
    pub fn get(&self) -> f64 { self.value }
}

/// Forward the [`Number`] reductions, so they can be called on either wrapper directly.
macro_rules! impl_reductions {
    ($($wrapper:ident),*) => {
        $(
            impl $wrapper {
                #[must_use]
                pub fn as_number(&self) -> Number { Number::from(*self) }

                #[must_use]
                pub fn sum(&self, operands: &[Number]) -> Number {
                    self.as_number().sum(operands)
                }

                #[must_use]
                pub fn difference(&self, operands: &[Number]) -> Number {
                    self.as_number().difference(operands)
                }

                #[must_use]
                pub fn product(&self, operands: &[Number]) -> Number {
                    self.as_number().product(operands)
                }

                pub fn quotient(&self, divisors: &[Number]) -> StrictResult<Number> {
                    self.as_number().quotient(divisors)
                }

                pub fn truncate(&self) -> StrictResult<Integer> {
                    self.as_number().truncate()
                }

                #[must_use]
                pub fn round(&self, precision: i32, mode: RoundMode) -> Float {
                    self.as_number().round(precision, mode)
                }
            }
        )*
    };
}

impl_reductions!(Integer, Float);

impl TryFrom<Raw> for Integer {
    type Error = StrictError;

    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        match raw {
            Raw::Int(it) => Ok(Self::new(it)),
            other => StrictError::new_validation_error(
                "Integer",
                format!("an integer is required, {} given", other.kind()),
            ),
        }
    }
}

/// Integers are widened.
impl TryFrom<Raw> for Float {
    type Error = StrictError;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        match raw {
            Raw::Real(it) => Ok(Self::new(it)),
            Raw::Int(it) => Ok(Self::new(it as f64)),
            other => StrictError::new_validation_error(
                "Float",
                format!("a number is required, {} given", other.kind()),
            ),
        }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self { Self::new(value) }
}

impl From<f64> for Float {
    fn from(value: f64) -> Self { Self::new(value) }
}

impl ValueBox for Integer {
    fn kind(&self) -> WrapperKind { WrapperKind::Integer }

    fn payload(&self) -> Raw { Raw::Int(self.value) }
}

impl ValueBox for Float {
    fn kind(&self) -> WrapperKind { WrapperKind::Float }

    fn payload(&self) -> Raw { Raw::Real(self.value) }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for Float {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
