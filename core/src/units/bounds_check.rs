// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Array-style bounds checking for [`Index`] against a [`Length`].
//!
//! Every container in this crate has two lengths that an index can be checked against:
//! 1. The static capacity. Offsets at or past it are an [`crate::StrictError::Index`].
//! 2. The logical length (count). Offsets between the two are "absent", not errors.
//!
//! ```text
//!                           index=5 (0-based)   index=10 (0-based)
//!                                 ↓                   ↓
//! Index:      0   1   2   3   4   5   6   7   8   9 │ 10  11  12
//! (1-based) ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┼───┬───┬───┐
//!           │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ × │ × │ × │
//!           ├───┴───┴───┴───┴───┴───┴───┴───┴───┴───┼───┴───┴───┤
//!           ├────────── within bounds ──────────────┼─ overflow ┘
//!           └────────── length=10 (1-based) ────────┘
//! ```

use super::{Index, Length};

/// Result of array access bounds checking operations. See the module docs.
///
/// # Examples
///
/// ```
/// use strict_core::{BoundsCheck, ArrayAccessBoundsStatus, idx, len};
///
/// assert_eq!(idx(5).check_array_access_bounds(len(10)), ArrayAccessBoundsStatus::Within);
/// assert_eq!(idx(10).check_array_access_bounds(len(10)), ArrayAccessBoundsStatus::Overflowed);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArrayAccessBoundsStatus {
    /// Index is within valid bounds.
    Within,

    /// Index has overflowed (exceeded maximum bounds).
    Overflowed,
}

pub trait BoundsCheck {
    /// Returns [`ArrayAccessBoundsStatus::Within`] if the index can safely access
    /// content of the given length, and [`ArrayAccessBoundsStatus::Overflowed`]
    /// otherwise.
    fn check_array_access_bounds(&self, arg_max: impl Into<Length>)
    -> ArrayAccessBoundsStatus;

    /// Simple boolean version of [`BoundsCheck::check_array_access_bounds`].
    fn overflows(&self, arg_max: impl Into<Length>) -> bool {
        self.check_array_access_bounds(arg_max) == ArrayAccessBoundsStatus::Overflowed
    }
}

impl BoundsCheck for Index {
    fn check_array_access_bounds(
        &self,
        arg_max: impl Into<Length>,
    ) -> ArrayAccessBoundsStatus {
        let max: Length = arg_max.into();
        if self.as_usize() < max.as_usize() {
            ArrayAccessBoundsStatus::Within
        } else {
            ArrayAccessBoundsStatus::Overflowed
        }
    }
}
