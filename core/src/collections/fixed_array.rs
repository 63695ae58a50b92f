// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`FixedArray`] is an ordered collection with a capacity that is fixed at
//! construction, and an optional element [`TypeTag`].
//!
//! Elements are stored as `(offset, element)` pairs in insertion order. Offsets are
//! sparse after a [`FixedArray::remove`], and each offset must be below the capacity.
//!
//! ```text
//! capacity = 4, count = 3
//! order:   0        1        2
//!        ┌────────┬────────┬────────┐
//!        │ 0 → 10 │ 2 → 30 │ 3 → 40 │   offset 1 was removed
//!        └────────┴────────┴────────┘
//! ```

use super::ArraySource;
use crate::{BoundsCheck, Element, Index, Integer, Length, Offset, Raw, SeekableCursor,
            StrictError, StrictResult, TypeTag, ValueBox, WrapperKind, debug_strict, idx,
            len, ok};

const TYPE_NAME: &str = "FixedArray";

/// See the [module docs](self).
#[derive(Debug, Clone)]
pub struct FixedArray {
    capacity: Length,
    entries: Vec<(Index, Element)>,
    tag: Option<TypeTag>,
    position: Index,
}

mod construct {
    use super::{ArraySource, Element, FixedArray, Index, Length, StrictResult, TYPE_NAME,
                TypeTag, idx, len};

    impl FixedArray {
        /// Construct from a non-negative capacity (empty array), or from an existing
        /// sequence (the capacity becomes its length, and every element is checked
        /// against `tag`).
        ///
        /// ```
        /// use strict_core::{FixedArray, StrictError, TypeTag, WrapperKind, len};
        ///
        /// let it = FixedArray::try_new(3, None).unwrap();
        /// assert_eq!(it.capacity(), len(3));
        /// assert_eq!(it.count(), len(0));
        ///
        /// let it = FixedArray::try_new(vec![10, 20, 30], None).unwrap();
        /// assert_eq!(it.count(), len(3));
        ///
        /// let tag = Some(TypeTag::Wrapper(WrapperKind::Integer));
        /// assert!(matches!(
        ///     FixedArray::try_new(vec![1], tag),
        ///     Err(StrictError::TypeConstraint { .. })
        /// ));
        /// assert!(FixedArray::try_new(-1, None).is_err());
        /// ```
        pub fn try_new(
            source: impl Into<ArraySource>,
            tag: Option<TypeTag>,
        ) -> StrictResult<Self> {
            let source: ArraySource = source.into();
            let capacity = source.capacity(TYPE_NAME)?;

            let elements = match source {
                ArraySource::Capacity(_) => vec![],
                ArraySource::Elements(elements) => elements,
            };
            if let Some(tag) = tag {
                for element in &elements {
                    tag.check(element)?;
                }
            }

            Ok(Self::from_parts(
                len(capacity),
                elements
                    .into_iter()
                    .enumerate()
                    .map(|(offset, element)| (idx(offset), element))
                    .collect(),
                tag,
            ))
        }

        /// The caller guarantees the invariants.
        pub(crate) fn from_parts(
            capacity: Length,
            entries: Vec<(Index, Element)>,
            tag: Option<TypeTag>,
        ) -> Self {
            Self {
                capacity,
                entries,
                tag,
                position: idx(0),
            }
        }

        #[must_use]
        pub fn capacity(&self) -> Length { self.capacity }

        /// The number of stored elements.
        #[must_use]
        pub fn count(&self) -> Length { len(self.entries.len()) }

        #[must_use]
        pub fn tag(&self) -> Option<TypeTag> { self.tag }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.entries.is_empty() }

        #[must_use]
        pub fn is_full(&self) -> bool { self.entries.len() >= self.capacity.as_usize() }

        /// Borrowing iterator over `(offset, element)` in order. It does not touch the
        /// cursor.
        pub fn iter(&self) -> std::slice::Iter<'_, (Index, Element)> { self.entries.iter() }

        /// The elements in order, without their offsets.
        pub fn values(&self) -> impl Iterator<Item = &Element> {
            self.entries.iter().map(|(_, element)| element)
        }
    }
}

mod access {
    use super::{BoundsCheck, Element, FixedArray, Index, Offset, StrictError,
                StrictResult, TYPE_NAME, debug_strict, idx, ok};

    impl FixedArray {
        /// Store `value` at `offset`, or append it when `offset` is [`None`]. Returns the
        /// offset that was written.
        ///
        /// The checks run in this order:
        /// 1. An offset at or past the capacity is a [`StrictError::Index`].
        /// 2. A value that does not match the tag is a [`StrictError::TypeConstraint`].
        /// 3. Unless an existing element is overwritten, a full array is a
        ///    [`StrictError::Capacity`].
        ///
        /// An append uses the offset after the largest one in use. When that is past the
        /// capacity, the lowest free offset is used instead.
        pub fn set(
            &mut self,
            offset: Option<Index>,
            value: impl Into<Element>,
        ) -> StrictResult<Index> {
            let value: Element = value.into();

            if let Some(offset) = offset {
                self.check_offset(offset.into())?;
            }
            if let Some(tag) = self.tag {
                tag.check(&value)?;
            }

            if let Some(offset) = offset {
                if let Some(slot) = self.slot_of(offset) {
                    if let Some((_, element)) = self.entries.get_mut(slot) {
                        *element = value;
                    }
                    return ok!(offset);
                }
            }

            if self.is_full() {
                debug_strict!(
                    message = "FixedArray rejected insert, capacity exhausted",
                    capacity = ?self.capacity,
                    offset = ?offset,
                );
                return StrictError::new_capacity_error(TYPE_NAME, self.capacity.as_usize());
            }

            let offset = offset.unwrap_or_else(|| self.next_free_offset());
            self.entries.push((offset, value));
            ok!(offset)
        }

        /// Append `value`. See [`FixedArray::set`].
        pub fn push(&mut self, value: impl Into<Element>) -> StrictResult<Index> {
            self.set(None, value)
        }

        /// [`None`] when nothing is stored at `offset`, and [`StrictError::Index`] when
        /// it is negative or at or past the capacity.
        pub fn get(&self, offset: impl Into<Offset>) -> StrictResult<Option<&Element>> {
            let offset = self.check_offset(offset.into())?;
            ok!(
                self.slot_of(offset)
                    .and_then(|slot| self.entries.get(slot))
                    .map(|(_, element)| element)
            )
        }

        /// Remove and return the element at `offset`, if there is one. The other
        /// offsets are not renumbered.
        pub fn remove(&mut self, offset: impl Into<Offset>) -> StrictResult<Option<Element>> {
            let offset = self.check_offset(offset.into())?;
            ok!(self.slot_of(offset).map(|slot| self.entries.remove(slot).1))
        }

        #[must_use]
        pub fn exists(&self, offset: impl Into<Offset>) -> bool {
            let offset: Offset = offset.into();
            offset
                .as_index()
                .is_some_and(|it| self.slot_of(it).is_some())
        }

        /// The first element in order.
        #[must_use]
        pub fn first(&self) -> Option<&Element> {
            self.entries.first().map(|(_, element)| element)
        }

        /// The last element in order.
        #[must_use]
        pub fn last(&self) -> Option<&Element> {
            self.entries.last().map(|(_, element)| element)
        }

        fn check_offset(&self, offset: Offset) -> StrictResult<Index> {
            offset.try_into_index(TYPE_NAME, self.capacity)
        }

        fn slot_of(&self, offset: Index) -> Option<usize> {
            self.entries.iter().position(|(it, _)| *it == offset)
        }

        /// Only called when there is spare capacity, so a free offset exists.
        fn next_free_offset(&self) -> Index {
            let after_max = self
                .entries
                .iter()
                .map(|(offset, _)| *offset + idx(1))
                .max()
                .unwrap_or_default();
            if !after_max.overflows(self.capacity) {
                return after_max;
            }
            (0..self.capacity.as_usize())
                .map(idx)
                .find(|offset| self.slot_of(*offset).is_none())
                .unwrap_or(after_max)
        }
    }
}

mod transform {
    use super::{Element, FixedArray, Index, Integer, TypeTag, WrapperKind, idx, len};

    impl FixedArray {
        /// The offset of the first element equal to `value`.
        ///
        /// With a wrapper type tag the unwrapped payloads are compared, so a raw `20`
        /// finds a stored `Integer(20)`. Otherwise the stored elements are compared with
        /// the unwrapped `value` directly.
        ///
        /// ```
        /// use strict_core::{FixedArray, idx};
        ///
        /// let it = FixedArray::try_new(vec![10, 20, 30], None).unwrap();
        /// assert_eq!(it.find(20), Some(idx(1)));
        /// assert_eq!(it.find(99), None);
        /// ```
        #[must_use]
        pub fn find(&self, value: impl Into<Element>) -> Option<Index> {
            let needle = value.into().unwrapped();
            let compare_unwrapped = matches!(self.tag, Some(TypeTag::Wrapper(_)));
            let needle_element = Element::Raw(needle.clone());

            self.entries
                .iter()
                .find(|(_, element)| {
                    if compare_unwrapped {
                        element.unwrapped() == needle
                    } else {
                        *element == needle_element
                    }
                })
                .map(|(offset, _)| *offset)
        }

        /// A new array of the elements for which `predicate` returns `true`, renumbered
        /// from 0. Its capacity is the number of matches and its tag is the same.
        #[must_use]
        pub fn filter(&self, predicate: impl Fn(&Element) -> bool) -> Self {
            let entries: Vec<(Index, Element)> = self
                .values()
                .filter(|element| predicate(element))
                .cloned()
                .enumerate()
                .map(|(offset, element)| (idx(offset), element))
                .collect();
            Self::from_parts(len(entries.len()), entries, self.tag)
        }

        /// Reverse the order. With `preserve_keys` each element keeps its offset,
        /// otherwise the offsets are renumbered from 0.
        pub fn reverse(&mut self, preserve_keys: bool) {
            self.entries.reverse();
            if !preserve_keys {
                for (offset, (key, _)) in self.entries.iter_mut().enumerate() {
                    *key = idx(offset);
                }
            }
        }

        /// A new array of the offsets in order, as [`Integer`]s.
        #[must_use]
        pub fn keys(&self) -> Self {
            let entries: Vec<(Index, Element)> = self
                .entries
                .iter()
                .enumerate()
                .map(|(slot, (offset, _))| {
                    let offset = i64::try_from(offset.as_usize()).unwrap_or(i64::MAX);
                    (idx(slot), Element::from(Integer::new(offset)))
                })
                .collect();
            Self::from_parts(
                len(entries.len()),
                entries,
                Some(TypeTag::Wrapper(WrapperKind::Integer)),
            )
        }
    }
}

/// Keyed by offset.
impl SeekableCursor for FixedArray {
    type Key = Index;
    type Item = Element;

    fn cursor(&self) -> Index { self.position }

    fn cursor_mut(&mut self) -> &mut Index { &mut self.position }

    fn key_at(&self, position: Index) -> Option<Index> {
        self.exists(position).then_some(position)
    }

    fn item_at(&self, position: Index) -> Option<Element> {
        self.entries
            .iter()
            .find(|(offset, _)| *offset == position)
            .map(|(_, element)| element.clone())
    }
}

impl ValueBox for FixedArray {
    fn kind(&self) -> WrapperKind { WrapperKind::FixedArray }

    fn payload(&self) -> Raw { Raw::List(self.values().cloned().collect()) }
}

/// From a list, or from a capacity.
impl TryFrom<Raw> for FixedArray {
    type Error = StrictError;

    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        match raw {
            Raw::List(elements) => Self::try_new(elements, None),
            Raw::Int(capacity) => Self::try_new(capacity, None),
            other => StrictError::new_validation_error(
                TYPE_NAME,
                format!("must be an array or a capacity, {} given", other.kind()),
            ),
        }
    }
}

/// The cursor position is not part of the value.
impl PartialEq for FixedArray {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity
            && self.tag == other.tag
            && self.entries == other.entries
    }
}

impl<'a> IntoIterator for &'a FixedArray {
    type Item = &'a (Index, Element);
    type IntoIter = std::slice::Iter<'a, (Index, Element)>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{Char, PrimitiveKind, assert_eq2};

    fn offsets(it: &FixedArray) -> Vec<usize> {
        it.iter().map(|(offset, _)| offset.as_usize()).collect()
    }

    fn raw_values(it: &FixedArray) -> Vec<Raw> {
        it.values().map(Element::unwrapped).collect()
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(5)]
    fn test_accepts_exactly_capacity_appends(capacity: i64) {
        let mut it = FixedArray::try_new(capacity, None).unwrap();
        assert_eq2!(it.count(), len(0));
        for value in 0..capacity {
            it.push(value).unwrap();
        }
        assert_eq2!(
            it.push(0),
            Err(StrictError::Capacity {
                container: "FixedArray",
                capacity: usize::try_from(capacity).unwrap(),
            })
        );
    }

    #[test]
    fn test_set_check_order() {
        let tag = Some(TypeTag::Wrapper(WrapperKind::Integer));
        let mut it = FixedArray::try_new(1, tag).unwrap();

        // Index first, even for a value of the wrong type.
        assert_eq2!(
            it.set(Some(idx(7)), "x"),
            Err(StrictError::Index {
                container: "FixedArray",
                index: 7,
                capacity: 1,
            })
        );
        assert_eq2!(
            it.set(Some(idx(0)), "x"),
            Err(StrictError::TypeConstraint {
                expected: TypeTag::Wrapper(WrapperKind::Integer),
                found: TypeTag::Primitive(PrimitiveKind::String),
            })
        );
        it.set(Some(idx(0)), Integer::new(1)).unwrap();

        // Full, but overwriting is allowed.
        it.set(Some(idx(0)), Integer::new(2)).unwrap();
        assert_eq2!(it.get(0), Ok(Some(&Element::from(Integer::new(2)))));
        assert!(matches!(
            it.push(Integer::new(3)),
            Err(StrictError::Capacity { .. })
        ));
    }

    #[test]
    fn test_get_and_remove() {
        let mut it = FixedArray::try_new(vec![10, 20, 30], None).unwrap();
        assert_eq2!(it.get(1), Ok(Some(&Element::from(20))));
        assert_eq2!(it.remove(1), Ok(Some(Element::from(20))));
        assert_eq2!(it.get(1), Ok(None));
        assert_eq2!(it.remove(1), Ok(None));
        assert!(matches!(it.get(3), Err(StrictError::Index { .. })));
        assert!(matches!(it.remove(3), Err(StrictError::Index { .. })));
        assert_eq2!(offsets(&it), vec![0, 2]);
    }

    #[test]
    fn test_negative_offset_is_an_index_error() {
        let mut it = FixedArray::try_new(vec![10, 20, 30], None).unwrap();
        assert_eq2!(
            it.get(-1),
            Err(StrictError::Index {
                container: "FixedArray",
                index: -1,
                capacity: 3,
            })
        );
        assert!(matches!(
            it.remove(-1),
            Err(StrictError::Index { index: -1, .. })
        ));
        assert!(!it.exists(-1));
        assert_eq2!(offsets(&it), vec![0, 1, 2]);
        assert_eq2!(it.get(0), Ok(Some(&Element::from(10))));
    }

    #[test]
    fn test_append_after_remove() {
        let mut it = FixedArray::try_new(vec![10, 20, 30], None).unwrap();
        it.remove(2).unwrap();
        assert_eq2!(it.push(40), Ok(idx(2)));

        it.remove(0).unwrap();
        // Offset 3 is past the capacity, so the free offset 0 is used.
        assert_eq2!(it.push(50), Ok(idx(0)));
        assert_eq2!(offsets(&it), vec![1, 2, 0]);
        assert_eq2!(it.first(), Some(&Element::from(20)));
        assert_eq2!(it.last(), Some(&Element::from(50)));
    }

    #[test]
    fn test_find() {
        let it = FixedArray::try_new(vec![10, 20, 30], None).unwrap();
        assert_eq2!(it.find(20), Some(idx(1)));
        assert_eq2!(it.find(99), None);
        assert_eq2!(it.find(Integer::new(30)), Some(idx(2)));
        assert_eq2!(it.find(20.0), None);

        let tag = Some(TypeTag::Wrapper(WrapperKind::Char));
        let it =
            FixedArray::try_new(vec![Char::new('a'), Char::new('b')], tag).unwrap();
        assert_eq2!(it.find("b"), Some(idx(1)));
    }

    #[test]
    fn test_filter_renumbers() {
        let it = FixedArray::try_new(vec![1, 2, 3, 4], None).unwrap();
        let even = it.filter(|element| matches!(element.unwrapped(), Raw::Int(2 | 4)));
        assert_eq2!(offsets(&even), vec![0, 1]);
        assert_eq2!(even.capacity(), len(2));
        assert_eq2!(raw_values(&even), vec![Raw::Int(2), Raw::Int(4)]);

        let none = it.filter(|_| false);
        assert!(none.is_empty());
        assert_eq2!(none.capacity(), len(0));
    }

    #[test]
    fn test_reverse() {
        let mut it = FixedArray::try_new(vec![1, 2, 3], None).unwrap();
        let original = it.clone();
        it.reverse(false);
        assert_eq2!(offsets(&it), vec![0, 1, 2]);
        assert_eq2!(raw_values(&it), vec![Raw::Int(3), Raw::Int(2), Raw::Int(1)]);
        it.reverse(false);
        assert_eq2!(it, original);

        it.reverse(true);
        assert_eq2!(offsets(&it), vec![2, 1, 0]);
        assert_eq2!(it.get(0), Ok(Some(&Element::from(1))));
    }

    #[test]
    fn test_keys() {
        let mut it = FixedArray::try_new(vec!["a", "b", "c"], None).unwrap();
        it.remove(1).unwrap();
        let keys = it.keys();
        assert_eq2!(raw_values(&keys), vec![Raw::Int(0), Raw::Int(2)]);
        assert_eq2!(keys.tag(), Some(TypeTag::Wrapper(WrapperKind::Integer)));
    }

    #[test]
    fn test_cursor_walks_offsets() {
        let mut it = FixedArray::try_new(vec![1, 2, 3], None).unwrap();
        it.remove(1).unwrap();
        it.rewind();
        assert_eq2!(it.current(), Some(Element::from(1)));
        it.next();
        assert!(!it.valid());
        it.seek(2);
        assert_eq2!(it.key(), Some(idx(2)));
        assert_eq2!(it.current(), Some(Element::from(3)));
    }

    #[test]
    fn test_payload_and_from_raw() {
        let it = FixedArray::try_new(vec![1, 2], None).unwrap();
        assert_eq2!(it.payload(), Raw::List(vec![Element::from(1), Element::from(2)]));
        assert_eq2!(FixedArray::try_from(it.payload()), Ok(it));
        assert_eq2!(
            FixedArray::try_from(Raw::Int(4)).map(|it| it.capacity()),
            Ok(len(4))
        );
        assert!(FixedArray::try_from(Raw::Text("x".into())).is_err());
    }
}
