// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::{CharacterSequence, Raw, StrictError, StrictResult, ValueBox, WrapperKind,
            debug_strict};

/// Exactly one character (Unicode scalar value).
///
/// ```
/// use strict_core::{Char, CharacterSequence, StrictError};
///
/// let mut it = Char::try_from("é").unwrap();
/// assert_eq!(it.size().as_usize(), 2);
/// it.to_upper_case().unwrap();
/// assert_eq!(it.as_char(), 'É');
///
/// // The upper case of ß is two characters, so the change is rejected.
/// let mut it = Char::new('ß');
/// assert!(matches!(it.to_upper_case(), Err(StrictError::Validation { .. })));
/// assert_eq!(it.as_char(), 'ß');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Char {
    text: String,
}

impl Char {
    #[must_use]
    pub fn new(ch: char) -> Self {
        Self {
            text: ch.to_string(),
        }
    }

    #[must_use]
    pub fn as_char(&self) -> char { self.text.chars().next().unwrap_or_default() }

    fn validate(text: &str) -> StrictResult<()> {
        match text.chars().count() {
            1 => Ok(()),
            0 => StrictError::new_validation_error("Char", "must include 1 char, 0 given"),
            count => StrictError::new_validation_error(
                "Char",
                format!("must include only 1 char, {count} given"),
            ),
        }
    }
}

impl CharacterSequence for Char {
    fn as_str(&self) -> &str { &self.text }

    fn try_set_text(&mut self, candidate: String) -> StrictResult<()> {
        if let Err(error) = Self::validate(&candidate) {
            debug_strict!(
                message = "Char rejected candidate",
                candidate = ?candidate,
                current = ?self.text,
            );
            return Err(error);
        }
        self.text = candidate;
        Ok(())
    }
}

impl From<char> for Char {
    fn from(ch: char) -> Self { Self::new(ch) }
}

impl TryFrom<&str> for Char {
    type Error = StrictError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::validate(text)?;
        Ok(Self {
            text: text.to_string(),
        })
    }
}

impl TryFrom<Raw> for Char {
    type Error = StrictError;

    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        match raw {
            Raw::Text(text) => {
                Self::validate(&text)?;
                Ok(Self { text })
            }
            other => StrictError::new_validation_error(
                "Char",
                format!("must be a string, {} given", other.kind()),
            ),
        }
    }
}

impl ValueBox for Char {
    fn kind(&self) -> WrapperKind { WrapperKind::Char }

    fn payload(&self) -> Raw { Raw::Text(self.text.clone()) }
}

impl Display for Char {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, len};

    #[test_case("")]
    #[test_case("ab")]
    #[test_case("e\u{301}")]
    fn test_rejects_not_exactly_one_char(text: &str) {
        assert!(matches!(
            Char::try_from(text),
            Err(StrictError::Validation {
                type_name: "Char",
                ..
            })
        ));
    }

    #[test]
    fn test_from_raw() {
        assert_eq2!(Char::try_from(Raw::Text("z".into())), Ok(Char::new('z')));
        assert!(Char::try_from(Raw::Int(1)).is_err());
    }

    #[test]
    fn test_character_sequence() {
        let mut it = Char::new('Q');
        assert_eq2!(it.length(), len(1));
        assert_eq2!(it.size(), len(1));
        it.to_lower_case().unwrap();
        assert_eq2!(it.as_char(), 'q');
        assert!(!it.is_numeric());
        assert!(Char::new('7').is_numeric());
    }

    #[test]
    fn test_try_set_text_is_transactional() {
        let mut it = Char::new('a');
        assert!(it.try_set_text("xy".into()).is_err());
        assert_eq2!(it.as_str(), "a");
        it.try_set_text("b".into()).unwrap();
        assert_eq2!(it.as_str(), "b");
    }
}
