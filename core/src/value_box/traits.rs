// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Raw, WrapperKind};

/// A validated wrapper that owns exactly one primitive payload.
///
/// Every implementor also implements `TryFrom<Raw, Error = StrictError>`, which runs the
/// validation predicate of the concrete type. The predicate runs again inside every
/// mutator before the candidate state is committed, so an instance is never observed in
/// an invalid state.
///
/// The capability queries are derived from [`ValueBox::kind`], they are never stored.
///
/// ```
/// use strict_core::{Boolean, Integer, ValueBox, Raw};
///
/// let it = Boolean::new(true);
/// assert!(it.is_byte());
/// assert!(it.is_number());
/// assert!(!it.is_integer());
/// assert_eq!(Integer::new(3).payload(), Raw::Int(3));
/// ```
pub trait ValueBox {
    fn kind(&self) -> WrapperKind;

    /// A copy of the primitive payload.
    fn payload(&self) -> Raw;

    fn is_chars(&self) -> bool {
        matches!(self.kind(), WrapperKind::Char | WrapperKind::BoundedString)
    }

    fn is_number(&self) -> bool {
        matches!(
            self.kind(),
            WrapperKind::Byte
                | WrapperKind::Boolean
                | WrapperKind::Integer
                | WrapperKind::Float
        )
    }

    fn is_integer(&self) -> bool { matches!(self.kind(), WrapperKind::Integer) }

    fn is_float(&self) -> bool { matches!(self.kind(), WrapperKind::Float) }

    /// A [`crate::Boolean`] is built on a [`crate::Byte`], so it is a byte too.
    fn is_byte(&self) -> bool {
        matches!(self.kind(), WrapperKind::Byte | WrapperKind::Boolean)
    }

    fn is_boolean(&self) -> bool { matches!(self.kind(), WrapperKind::Boolean) }

    fn is_array(&self) -> bool {
        matches!(
            self.kind(),
            WrapperKind::FixedArray | WrapperKind::AssociativeArray
        )
    }
}
