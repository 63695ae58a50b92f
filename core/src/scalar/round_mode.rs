// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::{StrictError, StrictResult};

/// How [`crate::Number::round`] breaks a tie, ie: when the digit after the requested
/// precision is exactly half way.
///
/// Modes can be parsed from their name (`"half_even"`) or from their numeric code
/// (`1` to `4`, in declaration order). Anything else is a
/// [`StrictError::Validation`].
///
/// ```
/// use strict_core::RoundMode;
///
/// assert_eq!("half_odd".parse::<RoundMode>(), Ok(RoundMode::HalfOdd));
/// assert_eq!(RoundMode::try_from(3_i64), Ok(RoundMode::HalfEven));
/// assert!(RoundMode::try_from(5_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum RoundMode {
    /// Away from zero.
    #[default]
    HalfUp,
    /// Toward zero.
    HalfDown,
    /// Toward the nearest even neighbor.
    HalfEven,
    /// Toward the nearest odd neighbor.
    HalfOdd,
}

impl RoundMode {
    #[must_use]
    pub fn code(&self) -> i64 {
        match self {
            RoundMode::HalfUp => 1,
            RoundMode::HalfDown => 2,
            RoundMode::HalfEven => 3,
            RoundMode::HalfOdd => 4,
        }
    }
}

impl TryFrom<i64> for RoundMode {
    type Error = StrictError;

    fn try_from(code: i64) -> StrictResult<Self> {
        RoundMode::iter()
            .find(|it| it.code() == code)
            .map_or_else(
                || {
                    StrictError::new_validation_error(
                        "RoundMode",
                        format!("unknown mode code {code}"),
                    )
                },
                Ok,
            )
    }
}

impl FromStr for RoundMode {
    type Err = StrictError;

    fn from_str(name: &str) -> StrictResult<Self> {
        RoundMode::iter()
            .find(|it| it.as_ref() == name)
            .map_or_else(
                || {
                    StrictError::new_validation_error(
                        "RoundMode",
                        format!("unknown mode name `{name}`"),
                    )
                },
                Ok,
            )
    }
}
