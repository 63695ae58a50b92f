// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`BoundedString`] is mutable text with a character capacity that is fixed for the
//! lifetime of the instance.
//!
//! ```text
//! capacity = 6
//! ┌───┬───┬───┬───┬───┬───┐
//! │ a │ b │ c │   │   │   │
//! └───┴───┴───┴───┴───┴───┘
//!   0   1   2   3   4   5    ← Index
//! ├─ length=3 ┤
//! ├──────── capacity ─────┤
//! ```
//!
//! - The text is never empty. A construction or mutation that would leave it empty is
//!   a [`crate::StrictError::Validation`], and the text is left unchanged.
//! - Negative offsets, and offsets at or past the capacity, are a
//!   [`crate::StrictError::Index`].
//! - Offsets between the length and the capacity hold nothing, reading them returns
//!   [`None`].
//! - [`BoundedString::push`] and [`BoundedString::push_back`] truncate the incoming text
//!   to fit. Every other mutator that would exceed the capacity fails with
//!   [`crate::StrictError::Capacity`] and leaves the text unchanged.

// Attach sources.
pub mod bounded_string_impl;
pub mod char_access;
pub mod search;

// Re-export.
pub use bounded_string_impl::*;
pub use char_access::*;
pub use search::*;

use crate::{Index, Length};

/// See the [module docs](self).
#[derive(Debug, Clone)]
pub struct BoundedString {
    text: String,
    capacity: Length,
    position: Index,
}
