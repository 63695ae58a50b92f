// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display};

use super::{BoundsCheck, Index, Length, idx};
use crate::{StrictError, StrictResult};

/// A signed position, as a caller asks for it. This is what the indexed accessors of
/// [`crate::BoundedString`] and [`crate::FixedArray`] take, so that a negative request
/// is reported as a [`StrictError::Index`] instead of being mistaken for a valid
/// [Index].
///
/// # Examples
///
/// ```
/// use strict_core::{Offset, StrictError, idx, len};
///
/// assert_eq!(Offset::from(2).try_into_index("FixedArray", len(3)), Ok(idx(2)));
/// assert!(matches!(
///     Offset::from(-1).try_into_index("FixedArray", len(3)),
///     Err(StrictError::Index { index: -1, .. })
/// ));
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Offset(pub i64);

impl Debug for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Offset({:?})", self.0)
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Offset {
    #[must_use]
    pub fn as_i64(&self) -> i64 { self.0 }

    /// The [Index] this names, or [`None`] when it is negative.
    #[must_use]
    pub fn as_index(&self) -> Option<Index> { usize::try_from(self.0).ok().map(idx) }

    /// The [Index] this names when it is below `capacity`. A negative offset, or one at
    /// or past `capacity`, is a [`StrictError::Index`] naming `container`.
    pub fn try_into_index(
        self,
        container: &'static str,
        capacity: impl Into<Length>,
    ) -> StrictResult<Index> {
        let capacity: Length = capacity.into();
        match self.as_index() {
            Some(index) if !index.overflows(capacity) => Ok(index),
            _ => StrictError::new_index_error(container, self.0, capacity.as_usize()),
        }
    }
}

mod convert {
    use super::{Index, Offset};

    impl From<i32> for Offset {
        fn from(val: i32) -> Self { Offset(val.into()) }
    }

    impl From<i64> for Offset {
        fn from(val: i64) -> Self { Offset(val) }
    }

    /// Values past [`i64::MAX`] saturate, which is past any capacity.
    impl From<usize> for Offset {
        fn from(val: usize) -> Self { Offset(i64::try_from(val).unwrap_or(i64::MAX)) }
    }

    impl From<Index> for Offset {
        fn from(index: Index) -> Self { index.as_usize().into() }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, len};

    #[test_case(0, 3, Some(0))]
    #[test_case(2, 3, Some(2))]
    #[test_case(3, 3, None)]
    #[test_case(-1, 3, None)]
    #[test_case(i64::MIN, 3, None)]
    #[test_case(0, 0, None)]
    fn test_try_into_index(offset: i64, capacity: usize, expected: Option<usize>) {
        let it = Offset::from(offset).try_into_index("FixedArray", len(capacity));
        match expected {
            Some(index) => assert_eq2!(it, Ok(idx(index))),
            None => assert_eq2!(
                it,
                Err(StrictError::Index {
                    container: "FixedArray",
                    index: offset,
                    capacity,
                })
            ),
        }
    }

    #[test]
    fn test_negative_offset_has_no_index() {
        assert_eq2!(Offset::from(-3).as_index(), None);
        assert_eq2!(Offset::from(-3).as_i64(), -3);
        assert_eq2!(Offset::from(idx(4)).as_index(), Some(idx(4)));
    }

    #[test]
    fn test_usize_past_i64_saturates() {
        assert_eq2!(Offset::from(usize::MAX), Offset(i64::MAX));
    }
}
