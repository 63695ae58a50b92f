// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Index, idx};

/// A restartable forward cursor that lives inside the instance it walks over.
///
/// The cursor is a view over live mutable state: mutations between two calls are
/// visible, and [`SeekableCursor::rewind`] or [`SeekableCursor::seek`] always
/// resynchronize. Two interleaved traversals over one instance share the cursor, so use
/// the borrowing `iter()` of the collection when you need independent traversal.
///
/// ```
/// use strict_core::{BoundedString, SeekableCursor, idx};
///
/// let mut text = BoundedString::try_new("ab", None).unwrap();
/// let mut seen = vec![];
/// text.rewind();
/// while text.valid() {
///     seen.push((text.key(), text.current().map(|it| it.as_char())));
///     text.next();
/// }
/// assert_eq!(seen, vec![(Some(idx(0)), Some('a')), (Some(idx(1)), Some('b'))]);
/// assert_eq!(text.current(), None);
/// ```
pub trait SeekableCursor {
    type Key;
    type Item;

    fn cursor(&self) -> Index;

    fn cursor_mut(&mut self) -> &mut Index;

    /// The key stored at `position`, or [`None`] when nothing is stored there.
    fn key_at(&self, position: Index) -> Option<Self::Key>;

    /// The item stored at `position`, or [`None`] when nothing is stored there.
    fn item_at(&self, position: Index) -> Option<Self::Item>;

    fn position(&self) -> Index { self.cursor() }

    fn rewind(&mut self) { *self.cursor_mut() = idx(0); }

    /// Saturates at [`usize::MAX`], which is never a valid position.
    fn next(&mut self) {
        let next = self.cursor().as_usize().saturating_add(1);
        *self.cursor_mut() = idx(next);
    }

    fn seek(&mut self, position: impl Into<Index>) { *self.cursor_mut() = position.into(); }

    fn valid(&self) -> bool { self.key_at(self.cursor()).is_some() }

    fn current(&self) -> Option<Self::Item> { self.item_at(self.cursor()) }

    fn key(&self) -> Option<Self::Key> { self.key_at(self.cursor()) }
}
