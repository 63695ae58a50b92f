// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Length, StrictResult, ValueBox, len};

/// The text base shared by [`crate::Char`] and [`crate::BoundedString`].
///
/// Implementors provide read access to the payload and a transactional setter. All the
/// provided methods that change the text go through
/// [`CharacterSequence::try_set_text`], so the invariant of the concrete type is checked
/// against the candidate before it replaces the payload.
pub trait CharacterSequence: ValueBox {
    fn as_str(&self) -> &str;

    /// Replace the payload with `candidate` if it satisfies the invariant of this type,
    /// otherwise return the error and leave the payload unchanged.
    fn try_set_text(&mut self, candidate: String) -> StrictResult<()>;

    /// Length in characters.
    fn length(&self) -> Length { len(self.as_str().chars().count()) }

    /// Length in bytes.
    fn size(&self) -> Length { len(self.as_str().len()) }

    fn is_numeric(&self) -> bool { is_numeric_text(self.as_str()) }

    fn to_lower_case(&mut self) -> StrictResult<()> {
        let candidate = self.as_str().to_lowercase();
        self.try_set_text(candidate)
    }

    fn to_upper_case(&mut self) -> StrictResult<()> {
        let candidate = self.as_str().to_uppercase();
        self.try_set_text(candidate)
    }
}

/// Optional surrounding whitespace, an optional sign, digits with at most one decimal
/// point (at least one digit in total), and an optional exponent.
///
/// ```
/// use strict_core::is_numeric_text;
///
/// assert!(is_numeric_text(" -12.5e3 "));
/// assert!(is_numeric_text(".5"));
/// assert!(!is_numeric_text("1.2.3"));
/// assert!(!is_numeric_text("0x1A"));
/// ```
#[must_use]
pub fn is_numeric_text(text: &str) -> bool {
    let text = text.trim();
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => (&text[..at], Some(&text[at + 1..])),
        None => (text, None),
    };

    let mantissa = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let mut digit_count = 0;
    let mut point_count = 0;
    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => digit_count += 1,
            '.' => point_count += 1,
            _ => return false,
        }
    }
    if digit_count == 0 || point_count > 1 {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !exponent.is_empty() && exponent.chars().all(|ch| ch.is_ascii_digit())
        }
    }
}
