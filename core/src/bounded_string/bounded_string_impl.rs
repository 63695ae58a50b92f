// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::BoundedString;
use crate::{CharacterSequence, Length, Raw, StrictError, StrictResult, ValueBox,
            WrapperKind, debug_strict, idx, len, ok};

const TYPE_NAME: &str = "BoundedString";

mod construct {
    use super::{BoundedString, Length, StrictError, StrictResult, TYPE_NAME, idx, len};

    impl BoundedString {
        /// The capacity defaults to the character count of `text`. The text holds at
        /// least one character, and at most `capacity` of them.
        ///
        /// ```
        /// use strict_core::{BoundedString, StrictError, len};
        ///
        /// let it = BoundedString::try_new("héllo", None).unwrap();
        /// assert_eq!(it.limit(), len(5));
        ///
        /// assert!(matches!(
        ///     BoundedString::try_new("", Some(3)),
        ///     Err(StrictError::Validation { .. })
        /// ));
        ///
        /// assert!(matches!(
        ///     BoundedString::try_new("toolong", Some(3)),
        ///     Err(StrictError::Validation { .. })
        /// ));
        /// ```
        pub fn try_new(
            text: impl Into<String>,
            capacity: Option<usize>,
        ) -> StrictResult<Self> {
            let text: String = text.into();
            let length = text.chars().count();
            let capacity = capacity.unwrap_or(length);

            if length == 0 {
                return StrictError::new_validation_error(TYPE_NAME, "text must not be empty");
            }
            if capacity == 0 {
                return StrictError::new_validation_error(
                    TYPE_NAME,
                    "capacity must be at least 1",
                );
            }
            if length > capacity {
                return StrictError::new_validation_error(
                    TYPE_NAME,
                    format!("length {length} exceeds capacity {capacity}"),
                );
            }

            Ok(Self {
                text,
                capacity: len(capacity),
                position: idx(0),
            })
        }

        /// The fixed capacity, in characters.
        #[must_use]
        pub fn limit(&self) -> Length { self.capacity }

        #[must_use]
        pub fn as_str(&self) -> &str { &self.text }

        #[must_use]
        pub fn is_full(&self) -> bool { self.char_count() >= self.capacity.as_usize() }

        pub(crate) fn char_count(&self) -> usize { self.text.chars().count() }

        /// Borrowing iterator over the characters. It does not touch the cursor.
        pub fn iter(&self) -> std::str::Chars<'_> { self.text.chars() }
    }
}

mod mutate {
    use super::{BoundedString, StrictError, StrictResult, TYPE_NAME, debug_strict, ok};

    impl BoundedString {
        /// Append `text`. When the result would not fit, `text` is truncated from its
        /// end so that only its leading characters are kept. The existing content is
        /// never truncated, and a full string stays unchanged.
        ///
        /// ```
        /// use strict_core::BoundedString;
        ///
        /// let mut it = BoundedString::try_new("abc", Some(5)).unwrap();
        /// it.push("defg");
        /// assert_eq!(it.as_str(), "abcde");
        /// ```
        pub fn push(&mut self, text: &str) {
            let fitted = self.fit_incoming("push", text);
            let mut candidate = std::mem::take(&mut self.text);
            candidate.push_str(&fitted);
            self.text = candidate;
        }

        /// Prepend `text`, with the same truncation policy as [`BoundedString::push`].
        ///
        /// ```
        /// use strict_core::BoundedString;
        ///
        /// let mut it = BoundedString::try_new("abc", Some(5)).unwrap();
        /// it.push_back("xyz");
        /// assert_eq!(it.as_str(), "xyabc");
        /// ```
        pub fn push_back(&mut self, text: &str) {
            let mut candidate = self.fit_incoming("push_back", text);
            candidate.push_str(&self.text);
            self.text = candidate;
        }

        /// Replace every occurrence of `search` with `replacement`. An empty `search` is
        /// a no-op. The text is left unchanged when this fails:
        /// - [`StrictError::Validation`] when the result would be empty.
        /// - [`StrictError::Capacity`] when the result would not fit.
        pub fn replace(&mut self, search: &str, replacement: &str) -> StrictResult<()> {
            if search.is_empty() {
                return ok!();
            }

            let candidate = self.text.replace(search, replacement);
            if candidate.is_empty() {
                return StrictError::new_validation_error(
                    TYPE_NAME,
                    "replacing would leave the text empty",
                );
            }
            let candidate_length = candidate.chars().count();
            if candidate_length > self.capacity.as_usize() {
                debug_strict!(
                    message = "BoundedString::replace rejected, result exceeds capacity",
                    candidate_length = ?candidate_length,
                    capacity = ?self.capacity,
                );
                return StrictError::new_capacity_error(TYPE_NAME, self.capacity.as_usize());
            }

            self.text = candidate;
            ok!()
        }

        /// Reverse the character order.
        pub fn reverse(&mut self) { self.text = self.text.chars().rev().collect(); }

        /// The leading characters of `text` that still fit.
        fn fit_incoming(&self, operation: &'static str, text: &str) -> String {
            let room = self.capacity.remaining(self.char_count()).as_usize();
            let incoming = text.chars().count();
            if incoming > room {
                debug_strict!(
                    message = "BoundedString incoming text truncated",
                    operation = %operation,
                    incoming = ?incoming,
                    room = ?room,
                );
            }
            text.chars().take(room).collect()
        }
    }
}

impl CharacterSequence for BoundedString {
    fn as_str(&self) -> &str { BoundedString::as_str(self) }

    fn try_set_text(&mut self, candidate: String) -> StrictResult<()> {
        if candidate.is_empty() {
            return StrictError::new_validation_error(TYPE_NAME, "text must not be empty");
        }
        if candidate.chars().count() > self.capacity.as_usize() {
            debug_strict!(
                message = "BoundedString rejected candidate, exceeds capacity",
                candidate = ?candidate,
                capacity = ?self.capacity,
            );
            return StrictError::new_capacity_error(TYPE_NAME, self.capacity.as_usize());
        }
        self.text = candidate;
        ok!()
    }
}

impl ValueBox for BoundedString {
    fn kind(&self) -> WrapperKind { WrapperKind::BoundedString }

    fn payload(&self) -> Raw { Raw::Text(self.text.clone()) }
}

/// The capacity becomes the length of the text.
impl TryFrom<Raw> for BoundedString {
    type Error = StrictError;

    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        match raw {
            Raw::Text(text) => Self::try_new(text, None),
            other => StrictError::new_validation_error(
                TYPE_NAME,
                format!("must be a string, {} given", other.kind()),
            ),
        }
    }
}

/// The cursor position is not part of the value.
impl PartialEq for BoundedString {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.capacity == other.capacity
    }
}

impl Display for BoundedString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl<'a> IntoIterator for &'a BoundedString {
    type Item = char;
    type IntoIter = std::str::Chars<'a>;

    fn into_iter(self) -> Self::IntoIter { self.text.chars() }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, len};

    #[test]
    fn test_capacity_defaults_to_length() {
        let it = BoundedString::try_new("abc", None).unwrap();
        assert_eq2!(it.limit(), len(3));
        assert!(it.is_full());
    }

    #[test_case("", None)]
    #[test_case("", Some(0))]
    #[test_case("", Some(3))]
    #[test_case("a", Some(0))]
    #[test_case("abcd", Some(3))]
    fn test_invalid_construction(text: &str, capacity: Option<usize>) {
        assert!(matches!(
            BoundedString::try_new(text, capacity),
            Err(StrictError::Validation {
                type_name: "BoundedString",
                ..
            })
        ));
    }

    #[test]
    fn test_capacity_counts_chars_not_bytes() {
        let it = BoundedString::try_new("日本語", Some(3)).unwrap();
        assert_eq2!(it.length(), len(3));
        assert_eq2!(it.size(), len(9));
    }

    #[test]
    fn test_push_truncates_incoming() {
        let mut it = BoundedString::try_new("abc", Some(5)).unwrap();
        it.push("defg");
        assert_eq2!(it.as_str(), "abcde");
        it.push("z");
        assert_eq2!(it.as_str(), "abcde");
    }

    #[test]
    fn test_push_back_truncates_incoming() {
        let mut it = BoundedString::try_new("c", Some(3)).unwrap();
        it.push_back("ab");
        assert_eq2!(it.as_str(), "abc");
        it.push_back("x");
        assert_eq2!(it.as_str(), "abc");
    }

    #[test]
    fn test_replace() {
        let mut it = BoundedString::try_new("a-b-c", Some(8)).unwrap();
        it.replace("-", "+").unwrap();
        assert_eq2!(it.as_str(), "a+b+c");
        it.replace("+", "").unwrap();
        assert_eq2!(it.as_str(), "abc");
        it.replace("", "xyz").unwrap();
        assert_eq2!(it.as_str(), "abc");
    }

    #[test]
    fn test_replace_over_capacity_is_rejected() {
        let mut it = BoundedString::try_new("aaa", Some(5)).unwrap();
        assert_eq2!(
            it.replace("a", "bb"),
            Err(StrictError::Capacity {
                container: "BoundedString",
                capacity: 5,
            })
        );
        assert_eq2!(it.as_str(), "aaa");
    }

    #[test]
    fn test_replace_to_empty_is_rejected() {
        let mut it = BoundedString::try_new("aa", None).unwrap();
        assert!(matches!(
            it.replace("a", ""),
            Err(StrictError::Validation { .. })
        ));
        assert_eq2!(it.as_str(), "aa");
    }

    #[test]
    fn test_set_text_to_empty_is_rejected() {
        let mut it = BoundedString::try_new("ab", Some(4)).unwrap();
        assert!(matches!(
            it.try_set_text(String::new()),
            Err(StrictError::Validation { .. })
        ));
        assert_eq2!(it.as_str(), "ab");
        it.try_set_text("xyz".into()).unwrap();
        assert_eq2!(it.as_str(), "xyz");
    }

    #[test]
    fn test_reverse() {
        let mut it = BoundedString::try_new("añb", None).unwrap();
        it.reverse();
        assert_eq2!(it.as_str(), "bña");
        it.reverse();
        assert_eq2!(it.as_str(), "añb");
    }

    #[test]
    fn test_case_conversion_respects_capacity() {
        let mut it = BoundedString::try_new("Mix", None).unwrap();
        it.to_upper_case().unwrap();
        assert_eq2!(it.as_str(), "MIX");
        it.to_lower_case().unwrap();
        assert_eq2!(it.as_str(), "mix");

        let mut it = BoundedString::try_new("ß", None).unwrap();
        assert!(matches!(
            it.to_upper_case(),
            Err(StrictError::Capacity { .. })
        ));
        assert_eq2!(it.as_str(), "ß");
    }

    #[test]
    fn test_iter_and_display() {
        let it = BoundedString::try_new("xyz", Some(4)).unwrap();
        assert_eq2!(it.iter().collect::<Vec<_>>(), vec!['x', 'y', 'z']);
        let mut seen = String::new();
        for ch in &it {
            seen.push(ch);
        }
        assert_eq2!(seen, it.to_string());
    }

    #[test]
    fn test_from_raw() {
        let it = BoundedString::try_from(Raw::Text("hi".into())).unwrap();
        assert_eq2!(it.limit(), len(2));
        assert_eq2!(it.payload(), Raw::Text("hi".into()));
        assert!(BoundedString::try_from(Raw::Int(1)).is_err());
    }
}
