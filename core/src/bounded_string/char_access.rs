// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::BoundedString;
use crate::{ArrayAccessBoundsStatus, BoundsCheck, Char, Index, Offset, SeekableCursor,
            StrictError, StrictResult, debug_strict, len, ok};

const TYPE_NAME: &str = "BoundedString";

/// Indexed access, by character position.
impl BoundedString {
    /// [`None`] when `index` is past the end of the text, and
    /// [`StrictError::Index`] when it is negative or at or past the capacity.
    ///
    /// ```
    /// use strict_core::{BoundedString, Char, StrictError};
    ///
    /// let it = BoundedString::try_new("ab", Some(4)).unwrap();
    /// assert_eq!(it.get(1), Ok(Some(Char::new('b'))));
    /// assert_eq!(it.get(3), Ok(None));
    /// assert!(matches!(it.get(4), Err(StrictError::Index { .. })));
    /// assert!(matches!(it.get(-1), Err(StrictError::Index { .. })));
    /// ```
    pub fn get(&self, index: impl Into<Offset>) -> StrictResult<Option<Char>> {
        let index = self.check_index(index)?;
        ok!(self.text.chars().nth(index.as_usize()).map(Char::new))
    }

    /// Overwrite the character at `index` with the first character of `text`. Past the
    /// end of the text, the character is appended at the end instead. An empty `text`
    /// is a [`StrictError::Validation`].
    pub fn set(&mut self, index: impl Into<Offset>, text: &str) -> StrictResult<()> {
        let index = self.check_index(index)?;
        let Some(ch) = text.chars().next() else {
            return StrictError::new_validation_error(TYPE_NAME, "cannot set an empty string");
        };

        let mut chars: Vec<char> = self.text.chars().collect();
        // An index past the end is still below the capacity, so there is room.
        match chars.get_mut(index.as_usize()) {
            Some(slot) => *slot = ch,
            None => chars.push(ch),
        }

        self.text = chars.into_iter().collect();
        ok!()
    }

    /// Remove and return the character at `index`, if there is one. Removing the only
    /// character is a [`StrictError::Validation`].
    pub fn remove(&mut self, index: impl Into<Offset>) -> StrictResult<Option<Char>> {
        let index = self.check_index(index)?;
        let mut chars: Vec<char> = self.text.chars().collect();
        if index.overflows(len(chars.len())) {
            return ok!(None);
        }
        if chars.len() == 1 {
            return StrictError::new_validation_error(
                TYPE_NAME,
                "cannot remove the only character",
            );
        }
        let removed = chars.remove(index.as_usize());
        self.text = chars.into_iter().collect();
        ok!(Some(Char::new(removed)))
    }

    /// Whether a character is stored at `index`.
    #[must_use]
    pub fn exists(&self, index: impl Into<Offset>) -> bool {
        let index: Offset = index.into();
        index
            .as_index()
            .is_some_and(|it| !it.overflows(len(self.char_count())))
    }

    fn check_index(&self, index: impl Into<Offset>) -> StrictResult<Index> {
        let index: Offset = index.into();
        index.try_into_index(TYPE_NAME, self.capacity)
    }
}

/// In-place case change of a range of characters.
impl BoundedString {
    /// Upper case the characters in `[start, end]`. See
    /// [`BoundedString::lower_case_chars`].
    pub fn upper_case_chars(
        &mut self,
        start: impl Into<Index>,
        end: Option<Index>,
    ) -> ArrayAccessBoundsStatus {
        self.change_case(start.into(), end, |ch| ch.to_uppercase().next().unwrap_or(ch))
    }

    /// Lower case the characters in `[start, end]`, both inclusive.
    ///
    /// - `end` omitted means through the last character, and an `end` past the last
    ///   character is clamped to it.
    /// - A `start` outside the text changes nothing and returns
    ///   [`ArrayAccessBoundsStatus::Overflowed`].
    /// - Every character keeps its position: when a mapping yields several characters,
    ///   only the first is kept.
    ///
    /// ```
    /// use strict_core::{ArrayAccessBoundsStatus, BoundedString, idx};
    ///
    /// let mut it = BoundedString::try_new("ABCDE", None).unwrap();
    /// assert_eq!(it.lower_case_chars(1, Some(idx(2))), ArrayAccessBoundsStatus::Within);
    /// assert_eq!(it.as_str(), "AbcDE");
    /// assert_eq!(it.lower_case_chars(9, None), ArrayAccessBoundsStatus::Overflowed);
    /// assert_eq!(it.as_str(), "AbcDE");
    /// ```
    pub fn lower_case_chars(
        &mut self,
        start: impl Into<Index>,
        end: Option<Index>,
    ) -> ArrayAccessBoundsStatus {
        self.change_case(start.into(), end, |ch| ch.to_lowercase().next().unwrap_or(ch))
    }

    fn change_case(
        &mut self,
        start: Index,
        end: Option<Index>,
        map: impl Fn(char) -> char,
    ) -> ArrayAccessBoundsStatus {
        let mut chars: Vec<char> = self.text.chars().collect();
        let length = len(chars.len());

        if start.overflows(length) {
            debug_strict!(
                message = "BoundedString case change start is outside the text",
                start = ?start,
                length = ?length,
            );
            return ArrayAccessBoundsStatus::Overflowed;
        }

        let last = length.convert_to_index();
        let end = end.map_or(last, |it| it.min(last));
        if end >= start {
            for ch in chars
                .iter_mut()
                .skip(start.as_usize())
                .take((end - start).as_usize() + 1)
            {
                *ch = map(*ch);
            }
        }

        self.text = chars.into_iter().collect();
        ArrayAccessBoundsStatus::Within
    }
}

/// Keyed by character position.
impl SeekableCursor for BoundedString {
    type Key = Index;
    type Item = Char;

    fn cursor(&self) -> Index { self.position }

    fn cursor_mut(&mut self) -> &mut Index { &mut self.position }

    fn key_at(&self, position: Index) -> Option<Index> {
        self.exists(position).then_some(position)
    }

    fn item_at(&self, position: Index) -> Option<Char> {
        self.text.chars().nth(position.as_usize()).map(Char::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, idx};

    fn text(it: &str, capacity: usize) -> BoundedString {
        BoundedString::try_new(it, Some(capacity)).unwrap()
    }

    #[test]
    fn test_get() {
        let it = text("ab", 3);
        assert_eq2!(it.get(0), Ok(Some(Char::new('a'))));
        assert_eq2!(it.get(2), Ok(None));
        assert_eq2!(
            it.get(3),
            Err(StrictError::Index {
                container: "BoundedString",
                index: 3,
                capacity: 3,
            })
        );
    }

    #[test]
    fn test_set_overwrites_and_appends() {
        let mut it = text("ab", 3);
        it.set(0, "xyz").unwrap();
        assert_eq2!(it.as_str(), "xb");
        it.set(2, "c").unwrap();
        assert_eq2!(it.as_str(), "xbc");
        it.set(1, "é").unwrap();
        assert_eq2!(it.as_str(), "xéc");
    }

    #[test]
    fn test_set_past_end_appends_at_end() {
        let mut it = text("a", 4);
        it.set(3, "z").unwrap();
        assert_eq2!(it.as_str(), "az");
    }

    #[test]
    fn test_set_errors() {
        let mut it = text("ab", 2);
        assert!(matches!(it.set(2, "c"), Err(StrictError::Index { .. })));
        assert!(matches!(it.set(0, ""), Err(StrictError::Validation { .. })));
        assert_eq2!(it.as_str(), "ab");
    }

    #[test]
    fn test_negative_index_is_an_index_error() {
        let mut it = text("abc", 3);
        assert_eq2!(
            it.set(-2, "Z"),
            Err(StrictError::Index {
                container: "BoundedString",
                index: -2,
                capacity: 3,
            })
        );
        assert!(matches!(it.get(-1), Err(StrictError::Index { .. })));
        assert!(matches!(it.remove(-1), Err(StrictError::Index { .. })));
        assert!(!it.exists(-1));
        assert_eq2!(it.as_str(), "abc");
    }

    #[test]
    fn test_remove() {
        let mut it = text("abc", 5);
        assert_eq2!(it.remove(1), Ok(Some(Char::new('b'))));
        assert_eq2!(it.as_str(), "ac");
        assert_eq2!(it.remove(4), Ok(None));
        assert!(matches!(it.remove(5), Err(StrictError::Index { .. })));
    }

    #[test]
    fn test_remove_keeps_the_last_character() {
        let mut it = text("ab", 2);
        assert_eq2!(it.remove(0), Ok(Some(Char::new('a'))));
        assert!(matches!(it.remove(0), Err(StrictError::Validation { .. })));
        assert_eq2!(it.as_str(), "b");
        assert_eq2!(it.remove(1), Ok(None));
    }

    #[test]
    fn test_case_change_ranges() {
        let mut it = text("abcdef", 6);
        assert_eq2!(it.upper_case_chars(4, None), ArrayAccessBoundsStatus::Within);
        assert_eq2!(it.as_str(), "abcdEF");
        assert_eq2!(
            it.upper_case_chars(0, Some(idx(100))),
            ArrayAccessBoundsStatus::Within
        );
        assert_eq2!(it.as_str(), "ABCDEF");
        assert_eq2!(
            it.lower_case_chars(2, Some(idx(2))),
            ArrayAccessBoundsStatus::Within
        );
        assert_eq2!(it.as_str(), "ABcDEF");
        assert_eq2!(
            it.lower_case_chars(6, None),
            ArrayAccessBoundsStatus::Overflowed
        );
        assert_eq2!(it.as_str(), "ABcDEF");
    }

    #[test]
    fn test_case_change_end_before_start_changes_nothing() {
        let mut it = text("abc", 3);
        assert_eq2!(
            it.upper_case_chars(1, Some(idx(0))),
            ArrayAccessBoundsStatus::Within
        );
        assert_eq2!(it.as_str(), "abc");
    }

    #[test]
    fn test_case_change_keeps_positions() {
        let mut it = text("aßc", 3);
        it.upper_case_chars(0, None);
        assert_eq2!(it.as_str(), "ASC");
        assert_eq2!(it.limit(), len(3));
    }

    #[test]
    fn test_cursor() {
        let mut it = text("xy", 4);
        assert_eq2!(it.position(), idx(0));
        assert!(it.valid());
        assert_eq2!(it.current(), Some(Char::new('x')));
        it.next();
        assert_eq2!(it.key(), Some(idx(1)));
        it.next();
        assert!(!it.valid());
        assert_eq2!(it.current(), None);
        assert_eq2!(it.key(), None);

        // The cursor is a view over live state.
        it.push("z");
        assert_eq2!(it.current(), Some(Char::new('z')));

        it.seek(0);
        assert_eq2!(it.current(), Some(Char::new('x')));
        it.seek(3);
        assert!(!it.valid());
        it.rewind();
        assert_eq2!(it.position(), idx(0));
    }

    #[test]
    fn test_cursor_next_at_the_end_of_usize_stays_put() {
        let mut it = text("xy", 2);
        it.seek(usize::MAX);
        it.next();
        assert_eq2!(it.position(), idx(usize::MAX));
        assert!(!it.valid());
        assert_eq2!(it.current(), None);
        it.rewind();
        assert_eq2!(it.current(), Some(Char::new('x')));
    }
}
