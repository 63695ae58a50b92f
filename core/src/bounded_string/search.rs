// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::BoundedString;
use crate::{Index, InlineVec, idx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    First,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    /// Each character is compared by the first character of its lowercase mapping.
    Insensitive,
}

/// Character positions, never byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOfResult {
    NotFound,
    First(Index),
    /// Strictly ascending. Never empty.
    All(InlineVec<Index>),
}

impl IndexOfResult {
    #[must_use]
    pub fn is_found(&self) -> bool { !matches!(self, IndexOfResult::NotFound) }

    /// The positions as a slice, empty when nothing was found.
    #[must_use]
    pub fn positions(&self) -> &[Index] {
        match self {
            IndexOfResult::NotFound => &[],
            IndexOfResult::First(it) => std::slice::from_ref(it),
            IndexOfResult::All(it) => it.as_slice(),
        }
    }
}

impl BoundedString {
    /// Find `needle`. With [`SearchScope::All`] the search restarts one character after
    /// each match, so overlapping matches are reported. An empty `needle` matches
    /// nothing.
    ///
    /// ```
    /// use strict_core::{BoundedString, CaseSensitivity, IndexOfResult, SearchScope, idx};
    ///
    /// let it = BoundedString::try_new("aAaa", None).unwrap();
    /// assert_eq!(
    ///     it.index_of("aa", SearchScope::First, CaseSensitivity::Sensitive),
    ///     IndexOfResult::First(idx(2))
    /// );
    /// let all = it.index_of("aa", SearchScope::All, CaseSensitivity::Insensitive);
    /// assert_eq!(all.positions(), &[idx(0), idx(1), idx(2)]);
    /// ```
    #[must_use]
    pub fn index_of(
        &self,
        needle: &str,
        scope: SearchScope,
        case: CaseSensitivity,
    ) -> IndexOfResult {
        let fold = |ch: char| match case {
            CaseSensitivity::Sensitive => ch,
            CaseSensitivity::Insensitive => ch.to_lowercase().next().unwrap_or(ch),
        };
        let haystack: Vec<char> = self.text.chars().map(fold).collect();
        let needle: Vec<char> = needle.chars().map(fold).collect();

        if needle.is_empty() || needle.len() > haystack.len() {
            return IndexOfResult::NotFound;
        }

        let mut found: InlineVec<Index> = InlineVec::new();
        let mut start = 0;
        while let Some(at) = find_from(&haystack, &needle, start) {
            if scope == SearchScope::First {
                return IndexOfResult::First(idx(at));
            }
            found.push(idx(at));
            start = at + 1;
        }

        if found.is_empty() {
            IndexOfResult::NotFound
        } else {
            IndexOfResult::All(found)
        }
    }
}

fn find_from(haystack: &[char], needle: &[char], start: usize) -> Option<usize> {
    let last_start = haystack.len().checked_sub(needle.len())?;
    (start..=last_start).find(|&at| haystack[at..at + needle.len()] == *needle)
}
