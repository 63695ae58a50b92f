// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display},
          ops::{Add, AddAssign, Sub}};

use super::{Length, len};

/// Represents a 0-based position in a character sequence or an array. It is the offset
/// type used by [`crate::BoundedString`], [`crate::FixedArray`] and the cursors. It
/// can only be built from unsigned values. A signed request from a caller is an
/// [`crate::Offset`] until it has been checked.
///
/// The relationship between [Index] and [Length] is that:
/// - A Length is 1-based (starts from 1)
/// - An Index is 0-based (starts from 0)
/// - The last valid index in a container with length L is L-1
///
/// # Examples
///
/// ```
/// use strict_core::{Index, idx};
///
/// let index1 = Index::new(5);
/// let index2 = idx(5);
/// assert_eq!(index1, index2);
/// assert_eq!(index2.as_usize(), 5);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Index(pub usize);

/// Creates a new [Index] from a value that can be converted into an Index.
///
/// This is a convenience function that is equivalent to calling [`Index::new`].
pub fn idx(arg_index: impl Into<Index>) -> Index { arg_index.into() }

impl Debug for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Index({:?})", self.0)
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

mod construct {
    use super::{Index, Length, len};

    impl Index {
        pub fn new(arg_index: impl Into<Index>) -> Self { arg_index.into() }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }

        /// Add 1 to the index (0 based) to convert it to a length (1 based). This is
        /// the length a container must have for this index to hold a value.
        #[must_use]
        pub fn convert_to_length(&self) -> Length { len(self.0 + 1) }
    }

    impl From<usize> for Index {
        fn from(val: usize) -> Self { Index(val) }
    }

    impl From<Index> for usize {
        fn from(index: Index) -> Self { index.as_usize() }
    }

}

mod ops {
    use super::{Add, AddAssign, Index, Length, Sub};

    impl Add<Index> for Index {
        type Output = Index;

        fn add(self, rhs: Index) -> Self::Output { Index(self.0 + rhs.0) }
    }

    impl AddAssign<usize> for Index {
        fn add_assign(&mut self, rhs: usize) { self.0 += rhs; }
    }

    impl Add<Length> for Index {
        type Output = Index;

        fn add(self, rhs: Length) -> Self::Output { Index(self.0 + rhs.0) }
    }

    /// Saturates at 0.
    impl Sub<Index> for Index {
        type Output = Index;

        fn sub(self, rhs: Index) -> Self::Output { Index(self.0.saturating_sub(rhs.0)) }
    }
}
