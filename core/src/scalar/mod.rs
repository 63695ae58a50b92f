// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The scalar wrappers: [`Byte`], [`Boolean`] (built on [`Byte`]), [`Integer`] and
//! [`Float`] (unified by [`Number`] for arithmetic), and the text base
//! [`CharacterSequence`] with its single character implementor [`Char`].

// Attach sources.
pub mod boolean;
pub mod byte;
pub mod char_sequence;
pub mod character;
pub mod integer;
pub mod number;
pub mod round_mode;

// Re-export.
pub use boolean::*;
pub use byte::*;
pub use char_sequence::*;
pub use character::*;
pub use integer::*;
pub use number::*;
pub use round_mode::*;
