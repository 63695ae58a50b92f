// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display};

use super::{Index, idx};

/// Length is a 1-based measurement of a character sequence or an array. It is used for
/// both the logical length (count) and the fixed capacity of a container.
///
/// # Examples
///
/// ```
/// use strict_core::{Length, len, idx};
///
/// let length = len(10);
/// assert_eq!(length, Length::new(10));
/// assert_eq!(length.convert_to_index(), idx(9));
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Length(pub usize);

/// Creates a new [Length] from a value that can be converted into a Length.
///
/// This is a convenience function that is equivalent to calling [`Length::new`].
pub fn len(arg_length: impl Into<Length>) -> Length { arg_length.into() }

impl Debug for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Length({:?})", self.0)
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

mod impl_core {
    use super::{Index, Length, idx};

    impl Length {
        pub fn new(arg_length: impl Into<Length>) -> Self { arg_length.into() }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }

        #[must_use]
        pub fn is_zero(&self) -> bool { self.0 == 0 }

        /// Subtract 1 from length to get the last index. I.e.: `length = last index + 1`.
        /// A zero length saturates to index 0, so check [`Length::is_zero`] first when
        /// that matters.
        #[must_use]
        pub fn convert_to_index(&self) -> Index { idx(self.0.saturating_sub(1)) }

        /// How much room is left when `used` of this length is taken.
        #[must_use]
        pub fn remaining(&self, used: impl Into<Length>) -> Length {
            let used: Length = used.into();
            Length(self.0.saturating_sub(used.0))
        }
    }
}

mod impl_from_numeric {
    use super::Length;

    impl From<usize> for Length {
        fn from(val: usize) -> Self { Length(val) }
    }

    impl From<Length> for usize {
        fn from(length: Length) -> Self { length.as_usize() }
    }
}
