// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`AssociativeArray`] maps keys to values with a fixed capacity and optional key and
//! value [`TypeTag`]s.
//!
//! It is an ordered list of `(key, value)` pairs, not a hash table:
//! - Keys do not need to be hashable. Lookup is a linear scan comparing unwrapped
//!   payloads (see [`AssociativeArray::deep_find`]), so a raw `1` and an `Integer(1)`
//!   are the same key.
//! - Reads return the first matching pair.
//! - Writes append a new pair. An existing pair with an equal key is shadowed, not
//!   replaced, unless the array is full (see [`AssociativeArray::set`]).

use super::{ArraySource, FixedArray, coerce_to_tag};
use crate::{Element, Index, Length, Raw, SeekableCursor, StrictError, StrictResult,
            TypeTag, ValueBox, WrapperKind, debug_strict, idx, len, ok};

const TYPE_NAME: &str = "AssociativeArray";

/// See the [module docs](self).
#[derive(Debug, Clone)]
pub struct AssociativeArray {
    capacity: Length,
    entries: Vec<(Element, Element)>,
    key_tag: Option<TypeTag>,
    value_tag: Option<TypeTag>,
    position: Index,
}

mod construct {
    use super::{ArraySource, AssociativeArray, Element, Length, Raw, StrictError,
                StrictResult, TYPE_NAME, TypeTag, coerce_to_tag, idx, len};

    impl AssociativeArray {
        /// Construct from a non-negative capacity (empty array), or from a list of raw
        /// pairs. Each pair must be a list of at least two elements, the first is the
        /// key and the second is the value. The capacity becomes the number of pairs.
        ///
        /// ```
        /// use strict_core::{AssociativeArray, Element, StrictError, len};
        ///
        /// let it = AssociativeArray::try_new(2, None, None).unwrap();
        /// assert_eq!(it.capacity(), len(2));
        ///
        /// let pair = Element::from(vec![Element::from("k"), Element::from(1)]);
        /// let it = AssociativeArray::try_new(vec![pair], None, None).unwrap();
        /// assert_eq!(it.get("k"), Some(&Element::from(1)));
        ///
        /// let not_a_pair = Element::from(vec![Element::from("k")]);
        /// assert!(matches!(
        ///     AssociativeArray::try_new(vec![not_a_pair], None, None),
        ///     Err(StrictError::Validation { .. })
        /// ));
        /// ```
        pub fn try_new(
            source: impl Into<ArraySource>,
            key_tag: Option<TypeTag>,
            value_tag: Option<TypeTag>,
        ) -> StrictResult<Self> {
            let source: ArraySource = source.into();
            let capacity = source.capacity(TYPE_NAME)?;
            let pairs = match source {
                ArraySource::Capacity(_) => vec![],
                ArraySource::Elements(elements) => elements
                    .into_iter()
                    .enumerate()
                    .map(|(index, element)| split_pair(index, element))
                    .collect::<StrictResult<Vec<_>>>()?,
            };
            Self::from_pairs_with_capacity(len(capacity), pairs, key_tag, value_tag)
        }

        /// Construct from typed pairs. The capacity becomes the number of pairs.
        ///
        /// ```
        /// use strict_core::{AssociativeArray, Element, Integer};
        ///
        /// let it = AssociativeArray::from_pairs(vec![(1, "one"), (2, "two")], None, None)
        ///     .unwrap();
        /// assert_eq!(it.get(Integer::new(2)), Some(&Element::from("two")));
        /// ```
        pub fn from_pairs<K: Into<Element>, V: Into<Element>>(
            pairs: Vec<(K, V)>,
            key_tag: Option<TypeTag>,
            value_tag: Option<TypeTag>,
        ) -> StrictResult<Self> {
            let pairs: Vec<(Element, Element)> = pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect();
            Self::from_pairs_with_capacity(len(pairs.len()), pairs, key_tag, value_tag)
        }

        fn from_pairs_with_capacity(
            capacity: Length,
            pairs: Vec<(Element, Element)>,
            key_tag: Option<TypeTag>,
            value_tag: Option<TypeTag>,
        ) -> StrictResult<Self> {
            let entries = pairs
                .into_iter()
                .map(|(key, value)| {
                    Ok((coerce_to_tag(key_tag, key)?, coerce_to_tag(value_tag, value)?))
                })
                .collect::<StrictResult<Vec<_>>>()?;

            Ok(Self {
                capacity,
                entries,
                key_tag,
                value_tag,
                position: idx(0),
            })
        }

        #[must_use]
        pub fn capacity(&self) -> Length { self.capacity }

        /// The number of stored pairs, shadowed ones included.
        #[must_use]
        pub fn count(&self) -> Length { len(self.entries.len()) }

        #[must_use]
        pub fn key_tag(&self) -> Option<TypeTag> { self.key_tag }

        #[must_use]
        pub fn value_tag(&self) -> Option<TypeTag> { self.value_tag }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.entries.is_empty() }

        #[must_use]
        pub fn is_full(&self) -> bool { self.entries.len() >= self.capacity.as_usize() }

        /// Borrowing iterator over the `(key, value)` pairs in order. It does not touch
        /// the cursor.
        pub fn iter(&self) -> std::slice::Iter<'_, (Element, Element)> {
            self.entries.iter()
        }
    }

    fn split_pair(index: usize, element: Element) -> StrictResult<(Element, Element)> {
        let Raw::List(items) = element.unwrapped() else {
            return StrictError::new_validation_error(
                TYPE_NAME,
                format!("entry {index} must be a [key, value] list"),
            );
        };
        let mut items = items.into_iter();
        match (items.next(), items.next()) {
            (Some(key), Some(value)) => Ok((key, value)),
            _ => StrictError::new_validation_error(
                TYPE_NAME,
                format!("entry {index} must have at least 2 elements"),
            ),
        }
    }
}

mod access {
    use super::{AssociativeArray, Element, FixedArray, Index, StrictError, StrictResult,
                TYPE_NAME, TypeTag, coerce_to_tag, debug_strict, idx, len, ok};

    impl AssociativeArray {
        /// The storage slot of the first pair whose unwrapped key equals the unwrapped
        /// `key`. Every keyed operation goes through this.
        #[must_use]
        pub fn deep_find(&self, key: &Element) -> Option<Index> {
            let needle = key.unwrapped();
            self.entries
                .iter()
                .position(|(it, _)| it.unwrapped() == needle)
                .map(idx)
        }

        /// Store `value` under `key`, both checked against (and auto-wrapped into)
        /// their tags.
        ///
        /// - When there is spare capacity a new pair is appended, even if the key is
        ///   already present.
        /// - When the array is full and the key is present, the value of the first
        ///   matching pair is replaced in place.
        /// - When the array is full and the key is absent, this is a
        ///   [`StrictError::Capacity`].
        ///
        /// Note that a write does not always append. Once the array is full, writing to
        /// an existing key overwrites its first pair instead, so the pair count never
        /// exceeds the capacity. Reads always see the first pair, so a later duplicate
        /// appended while there was room stays shadowed.
        ///
        /// ```
        /// use strict_core::{AssociativeArray, Element, Integer, PrimitiveKind, TypeTag,
        ///                   WrapperKind};
        ///
        /// let mut it = AssociativeArray::try_new(
        ///     2,
        ///     Some(TypeTag::Wrapper(WrapperKind::Integer)),
        ///     Some(TypeTag::Primitive(PrimitiveKind::String)),
        /// )
        /// .unwrap();
        /// it.set(1, "a").unwrap();
        /// it.set(2, "b").unwrap();
        /// assert_eq!(it.get(1), Some(&Element::from("a")));
        /// assert_eq!(it.get(3), None);
        /// assert_eq!(it.keys().iter().next().map(|(_, key)| key.clone()),
        ///            Some(Element::from(Integer::new(1))));
        /// ```
        pub fn set(
            &mut self,
            key: impl Into<Element>,
            value: impl Into<Element>,
        ) -> StrictResult<()> {
            let key = coerce_to_tag(self.key_tag, key.into())?;
            let value = coerce_to_tag(self.value_tag, value.into())?;

            if !self.is_full() {
                self.entries.push((key, value));
                return ok!();
            }

            match self.deep_find(&key) {
                Some(slot) => {
                    debug_strict!(
                        message = "AssociativeArray full, replacing value of existing key",
                        key = %key,
                    );
                    if let Some((_, it)) = self.entries.get_mut(slot.as_usize()) {
                        *it = value;
                    }
                    ok!()
                }
                None => {
                    debug_strict!(
                        message = "AssociativeArray rejected insert, capacity exhausted",
                        capacity = ?self.capacity,
                    );
                    StrictError::new_capacity_error(TYPE_NAME, self.capacity.as_usize())
                }
            }
        }

        /// The value of the first pair whose key matches.
        #[must_use]
        pub fn get(&self, key: impl Into<Element>) -> Option<&Element> {
            self.deep_find(&key.into())
                .and_then(|slot| self.entries.get(slot.as_usize()))
                .map(|(_, value)| value)
        }

        #[must_use]
        pub fn exists(&self, key: impl Into<Element>) -> bool {
            self.deep_find(&key.into()).is_some()
        }

        /// Remove the first pair whose key matches, and return its value. A shadowed
        /// pair with the same key becomes visible.
        pub fn remove(&mut self, key: impl Into<Element>) -> Option<Element> {
            let slot = self.deep_find(&key.into())?;
            Some(self.entries.remove(slot.as_usize()).1)
        }

        /// A new [`FixedArray`] of the keys in insertion order, tagged with the key tag.
        #[must_use]
        pub fn keys(&self) -> FixedArray {
            self.column(self.key_tag, |(key, _)| key)
        }

        /// A new [`FixedArray`] of the values in insertion order, tagged with the value
        /// tag.
        #[must_use]
        pub fn values(&self) -> FixedArray {
            self.column(self.value_tag, |(_, value)| value)
        }

        fn column(
            &self,
            tag: Option<TypeTag>,
            pick: impl Fn(&(Element, Element)) -> &Element,
        ) -> FixedArray {
            let entries: Vec<(Index, Element)> = self
                .entries
                .iter()
                .enumerate()
                .map(|(offset, pair)| (idx(offset), pick(pair).clone()))
                .collect();
            FixedArray::from_parts(len(entries.len()), entries, tag)
        }
    }
}

/// Positioned over the storage order. The item is the value.
impl SeekableCursor for AssociativeArray {
    type Key = Element;
    type Item = Element;

    fn cursor(&self) -> Index { self.position }

    fn cursor_mut(&mut self) -> &mut Index { &mut self.position }

    fn key_at(&self, position: Index) -> Option<Element> {
        self.entries.get(position.as_usize()).map(|(key, _)| key.clone())
    }

    fn item_at(&self, position: Index) -> Option<Element> {
        self.entries
            .get(position.as_usize())
            .map(|(_, value)| value.clone())
    }
}

impl ValueBox for AssociativeArray {
    fn kind(&self) -> WrapperKind { WrapperKind::AssociativeArray }

    /// A list of `[key, value]` lists.
    fn payload(&self) -> Raw {
        Raw::List(
            self.entries
                .iter()
                .map(|(key, value)| Element::from(vec![key.clone(), value.clone()]))
                .collect(),
        )
    }
}

/// From a list of `[key, value]` lists, or from a capacity.
impl TryFrom<Raw> for AssociativeArray {
    type Error = StrictError;

    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        match raw {
            Raw::List(pairs) => Self::try_new(pairs, None, None),
            Raw::Int(capacity) => Self::try_new(capacity, None, None),
            other => StrictError::new_validation_error(
                TYPE_NAME,
                format!("must be an array or a capacity, {} given", other.kind()),
            ),
        }
    }
}

/// The cursor position is not part of the value.
impl PartialEq for AssociativeArray {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity
            && self.key_tag == other.key_tag
            && self.value_tag == other.value_tag
            && self.entries == other.entries
    }
}

impl<'a> IntoIterator for &'a AssociativeArray {
    type Item = &'a (Element, Element);
    type IntoIter = std::slice::Iter<'a, (Element, Element)>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoundedString, Char, Integer, PrimitiveKind, assert_eq2};

    fn integer_to_string(capacity: i64) -> AssociativeArray {
        AssociativeArray::try_new(
            capacity,
            Some(TypeTag::Wrapper(WrapperKind::Integer)),
            Some(TypeTag::Primitive(PrimitiveKind::String)),
        )
        .unwrap()
    }

    fn raw_values(it: &FixedArray) -> Vec<Raw> {
        it.values().map(Element::unwrapped).collect()
    }

    #[test]
    fn test_set_get_keys() {
        let mut it = integer_to_string(2);
        it.set(1, "a").unwrap();
        it.set(2, "b").unwrap();
        assert_eq2!(it.get(1), Some(&Element::from("a")));
        assert_eq2!(it.get(Integer::new(2)), Some(&Element::from("b")));
        assert_eq2!(it.get(3), None);
        assert_eq2!(raw_values(&it.keys()), vec![Raw::Int(1), Raw::Int(2)]);
        assert_eq2!(
            it.keys().tag(),
            Some(TypeTag::Wrapper(WrapperKind::Integer))
        );
        assert_eq2!(
            raw_values(&it.values()),
            vec![Raw::Text("a".into()), Raw::Text("b".into())]
        );
    }

    #[test]
    fn test_tag_errors() {
        let mut it = integer_to_string(2);
        assert_eq2!(
            it.set("1", "a"),
            Err(StrictError::TypeConstraint {
                expected: TypeTag::Wrapper(WrapperKind::Integer),
                found: TypeTag::Primitive(PrimitiveKind::String),
            })
        );
        assert_eq2!(
            it.set(1, 1),
            Err(StrictError::TypeConstraint {
                expected: TypeTag::Primitive(PrimitiveKind::String),
                found: TypeTag::Primitive(PrimitiveKind::Integer),
            })
        );
        assert!(it.is_empty());
    }

    #[test]
    fn test_auto_wrap_text_keys() {
        let mut it = AssociativeArray::try_new(
            3,
            Some(TypeTag::Wrapper(WrapperKind::Char)),
            Some(TypeTag::Wrapper(WrapperKind::BoundedString)),
        )
        .unwrap();
        it.set("k", "value").unwrap();
        assert_eq2!(
            it.iter().next(),
            Some(&(
                Element::from(Char::new('k')),
                Element::from(BoundedString::try_new("value", None).unwrap())
            ))
        );
        assert!(matches!(
            it.set("long key", "v"),
            Err(StrictError::Validation { .. })
        ));
    }

    #[test]
    fn test_writes_append_and_reads_take_first_match() {
        let mut it = AssociativeArray::try_new(3, None, None).unwrap();
        it.set("k", 1).unwrap();
        it.set("k", 2).unwrap();
        assert_eq2!(it.count(), len(2));
        assert_eq2!(it.get("k"), Some(&Element::from(1)));

        // Removing the first match exposes the shadowed pair.
        assert_eq2!(it.remove("k"), Some(Element::from(1)));
        assert_eq2!(it.get("k"), Some(&Element::from(2)));
        assert_eq2!(it.remove("missing"), None);
    }

    #[test]
    fn test_full_array() {
        let mut it = AssociativeArray::try_new(1, None, None).unwrap();
        it.set("a", 1).unwrap();
        assert_eq2!(
            it.set("b", 2),
            Err(StrictError::Capacity {
                container: "AssociativeArray",
                capacity: 1,
            })
        );
        it.set("a", 3).unwrap();
        assert_eq2!(it.count(), len(1));
        assert_eq2!(it.get("a"), Some(&Element::from(3)));
    }

    #[test]
    fn test_deep_find_compares_unwrapped_keys() {
        let it =
            AssociativeArray::from_pairs(vec![(Integer::new(5), "x")], None, None).unwrap();
        assert_eq2!(it.deep_find(&Element::from(5)), Some(idx(0)));
        assert!(it.exists(5));
        assert!(!it.exists(5.0));
    }

    #[test]
    fn test_construct_from_raw_pairs() {
        let pairs = vec![
            Element::from(vec![Element::from(1), Element::from("a"), Element::from(0)]),
            Element::from(vec![Element::from(2), Element::from("b")]),
        ];
        let it = AssociativeArray::try_new(
            pairs,
            Some(TypeTag::Wrapper(WrapperKind::Integer)),
            None,
        )
        .unwrap();
        assert_eq2!(it.capacity(), len(2));
        assert_eq2!(it.get(2), Some(&Element::from("b")));

        let not_a_list = vec![Element::from(1)];
        assert!(matches!(
            AssociativeArray::try_new(not_a_list, None, None),
            Err(StrictError::Validation { .. })
        ));
        assert!(AssociativeArray::try_new(-2, None, None).is_err());
    }

    #[test]
    fn test_cursor() {
        let mut it = AssociativeArray::from_pairs(vec![("a", 1), ("b", 2)], None, None)
            .unwrap();
        let mut seen = vec![];
        it.rewind();
        while it.valid() {
            seen.push((it.key(), it.current()));
            it.next();
        }
        assert_eq2!(
            seen,
            vec![
                (Some(Element::from("a")), Some(Element::from(1))),
                (Some(Element::from("b")), Some(Element::from(2))),
            ]
        );
    }

    #[test]
    fn test_payload_round_trips_through_raw() {
        let it = AssociativeArray::from_pairs(vec![("a", 1)], None, None).unwrap();
        assert_eq2!(AssociativeArray::try_from(it.payload()), Ok(it));
    }
}
