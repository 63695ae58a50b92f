// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Arithmetic reductions over a target plus zero or more operands.
//!
//! The result kind follows the operands: a whole result computed from integer-only
//! operands stays an [`Integer`], while any [`Float`] operand, a fractional quotient, or
//! an `i64` overflow promotes the whole reduction to `f64`.

use std::fmt::{Display, Formatter};

use crate::{Float, Integer, Raw, RoundMode, StrictError, StrictResult, debug_strict};

/// Either kind of number. This is the operand type of every reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(Integer),
    Float(Float),
}

/// Ties are detected within this distance from exactly half way, after scaling.
const TIE_EPSILON: f64 = 1e-9;

/// `2^63` as `f64`. The exclusive upper bound of a truncation that fits in `i64`.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Number {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(it) => it.get() as f64,
            Number::Float(it) => it.get(),
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(it) => it.get() == 0,
            Number::Float(it) => it.get() == 0.0,
        }
    }

    /// `self + operands[0] + operands[1] + ...`
    ///
    /// ```
    /// use strict_core::{Number, Integer, Float};
    ///
    /// assert_eq!(Number::from(1).sum(&[2.into(), 3.into()]), Number::from(6));
    /// assert_eq!(Number::from(1).sum(&[0.5.into()]), Number::from(1.5));
    /// ```
    #[must_use]
    pub fn sum(&self, operands: &[Number]) -> Number {
        self.reduce("sum", operands, i64::checked_add, |lhs, rhs| lhs + rhs)
    }

    /// `self - operands[0] - operands[1] - ...`
    #[must_use]
    pub fn difference(&self, operands: &[Number]) -> Number {
        self.reduce("difference", operands, i64::checked_sub, |lhs, rhs| lhs - rhs)
    }

    /// `self * operands[0] * operands[1] * ...`
    #[must_use]
    pub fn product(&self, operands: &[Number]) -> Number {
        self.reduce("product", operands, i64::checked_mul, |lhs, rhs| lhs * rhs)
    }

    /// Divides `self` by the product of all `divisors`. A zero product is a
    /// [`StrictError::DivisionByZero`], and no division is attempted.
    ///
    /// ```
    /// use strict_core::{Number, StrictError};
    ///
    /// let it = Number::from(10).quotient(&[2.into(), 5.into()]);
    /// assert_eq!(it, Ok(Number::from(1)));
    ///
    /// let it = Number::from(10).quotient(&[2.into(), 0.into()]);
    /// assert_eq!(it, Err(StrictError::DivisionByZero));
    ///
    /// let it = Number::from(7).quotient(&[2.into()]);
    /// assert_eq!(it, Ok(Number::from(3.5)));
    /// ```
    pub fn quotient(&self, divisors: &[Number]) -> StrictResult<Number> {
        let divisor = Number::from(1).product(divisors);
        if divisor.is_zero() {
            return Err(StrictError::DivisionByZero);
        }

        if let (Number::Integer(dividend), Number::Integer(divisor)) = (self, divisor) {
            let (dividend, divisor) = (dividend.get(), divisor.get());
            if dividend.checked_rem(divisor) == Some(0) {
                if let Some(it) = dividend.checked_div(divisor) {
                    return Ok(Number::Integer(Integer::new(it)));
                }
            }
        }

        Ok(Number::Float(Float::new(self.as_f64() / divisor.as_f64())))
    }

    /// Drops the fractional part. Fails when the value is not finite or does not fit in
    /// `i64`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncate(&self) -> StrictResult<Integer> {
        match self {
            Number::Integer(it) => Ok(*it),
            Number::Float(it) => {
                let truncated = it.get().trunc();
                if !truncated.is_finite()
                    || truncated < -I64_UPPER_BOUND
                    || truncated >= I64_UPPER_BOUND
                {
                    return StrictError::new_validation_error(
                        "Integer",
                        format!("{} does not fit in a 64 bit integer", it.get()),
                    );
                }
                Ok(Integer::new(truncated as i64))
            }
        }
    }

    /// Rounds to `precision` decimal digits (negative precision rounds to tens,
    /// hundreds, ...). Ties are broken by `mode`. The result is always a [`Float`].
    ///
    /// ```
    /// use strict_core::{Number, RoundMode, Float};
    ///
    /// assert_eq!(Number::from(2.5).round(0, RoundMode::HalfEven), Float::new(2.0));
    /// assert_eq!(Number::from(1.955).round(2, RoundMode::HalfUp), Float::new(1.96));
    /// assert_eq!(Number::from(1250).round(-2, RoundMode::HalfDown), Float::new(1200.0));
    /// ```
    #[must_use]
    pub fn round(&self, precision: i32, mode: RoundMode) -> Float {
        let value = self.as_f64();
        if !value.is_finite() {
            return Float::new(value);
        }

        // A precision too large for `f64` changes nothing, and one too small rounds
        // everything away.
        let factor = 10_f64.powi(precision);
        if !factor.is_finite() {
            return Float::new(value);
        }
        if factor == 0.0 {
            return Float::new(0.0_f64.copysign(value));
        }

        let scaled = value * factor;
        if !scaled.is_finite() {
            return Float::new(value);
        }
        let floor = scaled.floor();
        let ceil = floor + 1.0;

        let rounded = if ((scaled - floor) - 0.5).abs() < TIE_EPSILON {
            let floor_is_even = floor.rem_euclid(2.0) == 0.0;
            match mode {
                RoundMode::HalfUp if scaled > 0.0 => ceil,
                RoundMode::HalfUp => floor,
                RoundMode::HalfDown if scaled > 0.0 => floor,
                RoundMode::HalfDown => ceil,
                RoundMode::HalfEven if floor_is_even => floor,
                RoundMode::HalfEven => ceil,
                RoundMode::HalfOdd if floor_is_even => ceil,
                RoundMode::HalfOdd => floor,
            }
        } else {
            scaled.round()
        };

        Float::new(rounded / factor)
    }

    fn reduce(
        &self,
        operation: &'static str,
        operands: &[Number],
        exact: fn(i64, i64) -> Option<i64>,
        real: fn(f64, f64) -> f64,
    ) -> Number {
        let all_integers = matches!(self, Number::Integer(_))
            && operands.iter().all(|it| matches!(it, Number::Integer(_)));

        if all_integers {
            let folded = operands.iter().try_fold(self.as_integer(), |acc, it| {
                exact(acc, it.as_integer())
            });
            match folded {
                Some(it) => return Number::Integer(Integer::new(it)),
                None => {
                    debug_strict!(
                        message = "integer overflow, recomputing in f64",
                        operation = %operation,
                    );
                }
            }
        }

        let folded = operands
            .iter()
            .fold(self.as_f64(), |acc, it| real(acc, it.as_f64()));
        Number::Float(Float::new(folded))
    }

    /// Only meaningful once the caller has checked the variant.
    fn as_integer(&self) -> i64 {
        match self {
            Number::Integer(it) => it.get(),
            Number::Float(_) => 0,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(it) => write!(f, "{it}"),
            Number::Float(it) => write!(f, "{it}"),
        }
    }
}

mod convert {
    use super::{Float, Integer, Number, Raw, StrictError};

    impl From<Integer> for Number {
        fn from(it: Integer) -> Self { Number::Integer(it) }
    }

    impl From<Float> for Number {
        fn from(it: Float) -> Self { Number::Float(it) }
    }

    impl From<i64> for Number {
        fn from(it: i64) -> Self { Number::Integer(Integer::new(it)) }
    }

    impl From<i32> for Number {
        fn from(it: i32) -> Self { Number::Integer(Integer::new(it.into())) }
    }

    impl From<f64> for Number {
        fn from(it: f64) -> Self { Number::Float(Float::new(it)) }
    }

    impl TryFrom<Raw> for Number {
        type Error = StrictError;

        fn try_from(raw: Raw) -> Result<Self, Self::Error> {
            match raw {
                Raw::Int(it) => Ok(it.into()),
                Raw::Real(it) => Ok(it.into()),
                other => StrictError::new_validation_error(
                    "Number",
                    format!("a number is required, {} given", other.kind()),
                ),
            }
        }
    }
}
