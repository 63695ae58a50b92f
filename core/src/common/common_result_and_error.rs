// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use crate::TypeTag;

/// Type alias for every constructor and mutator in this crate. The error is always a
/// [`StrictError`], so callers can pattern match on the kind of failure.
pub type StrictResult<T> = core::result::Result<T, StrictError>;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// when you want to aggregate a [`StrictError`] with other kinds of errors using `?`.
///
/// # Example
///
/// ```
/// use strict_core::{CommonResult, Integer, Number};
///
/// fn half(it: i64) -> CommonResult<Number> {
///     let it = Integer::new(it).quotient(&[Number::from(2)])?;
///     Ok(it)
/// }
///
/// assert!(half(4).is_ok());
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// All the ways a validated value can refuse an operation. The prior state of the
/// instance is always preserved when one of these is returned from a mutator.
#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum StrictError {
    /// A constructed or mutated payload fails the invariant of its type.
    #[error("Invalid {type_name} value: {reason}")]
    #[diagnostic(
        code(strict_core::validation),
        help("Construct the value from a payload that satisfies its invariant.")
    )]
    Validation {
        type_name: &'static str,
        reason: String,
    },

    /// An offset outside the static capacity of a [`crate::BoundedString`] or
    /// [`crate::FixedArray`].
    #[error("Invalid index: {index}. Capacity of current {container}: {capacity}")]
    #[diagnostic(code(strict_core::index_out_of_bounds))]
    Index {
        container: &'static str,
        index: i64,
        capacity: usize,
    },

    /// An insertion would exceed the fixed capacity, and no truncation policy applies.
    #[error("Capacity of {container} exhausted: the limit is {capacity}")]
    #[diagnostic(
        code(strict_core::capacity_exhausted),
        help("Capacity is fixed at construction. Remove something first.")
    )]
    Capacity {
        container: &'static str,
        capacity: usize,
    },

    /// A value or key offered to a type-constrained collection does not match its tag,
    /// and could not be auto-wrapped.
    #[error("Attempt to add {found} to a collection constrained to {expected}")]
    #[diagnostic(code(strict_core::type_constraint))]
    TypeConstraint { expected: TypeTag, found: TypeTag },

    /// The product of all the divisor operands is zero.
    #[error("Division by zero")]
    #[diagnostic(code(strict_core::division_by_zero))]
    DivisionByZero,
}

impl StrictError {
    pub fn new_validation_error<T>(
        type_name: &'static str,
        reason: impl Into<String>,
    ) -> StrictResult<T> {
        Err(StrictError::Validation {
            type_name,
            reason: reason.into(),
        })
    }

    pub fn new_index_error<T>(
        container: &'static str,
        index: i64,
        capacity: usize,
    ) -> StrictResult<T> {
        Err(StrictError::Index {
            container,
            index,
            capacity,
        })
    }

    pub fn new_capacity_error<T>(
        container: &'static str,
        capacity: usize,
    ) -> StrictResult<T> {
        Err(StrictError::Capacity {
            container,
            capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PrimitiveKind, WrapperKind};

    #[test]
    fn test_display_messages() {
        let it: StrictResult<()> = StrictError::new_index_error("FixedArray", 7, 3);
        assert_eq!(
            it.unwrap_err().to_string(),
            "Invalid index: 7. Capacity of current FixedArray: 3"
        );

        let it: StrictResult<()> = StrictError::new_index_error("BoundedString", -2, 3);
        assert_eq!(
            it.unwrap_err().to_string(),
            "Invalid index: -2. Capacity of current BoundedString: 3"
        );

        let it = StrictError::TypeConstraint {
            expected: TypeTag::Wrapper(WrapperKind::Integer),
            found: TypeTag::Primitive(PrimitiveKind::String),
        };
        assert_eq!(
            it.to_string(),
            "Attempt to add string to a collection constrained to Integer"
        );
    }

    #[test]
    fn test_into_miette_report() {
        fn fails() -> CommonResult<()> {
            StrictError::new_capacity_error::<()>("BoundedString", 5)?;
            Ok(())
        }
        let report = fails().unwrap_err();
        assert!(report.downcast_ref::<StrictError>().is_some());
    }
}
