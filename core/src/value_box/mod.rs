// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The value model shared by every wrapper: the [`Raw`] primitive payload, the
//! [`ValueBox`] contract, the closed [`Value`] and [`WrapperKind`] enums, the collection
//! member [`Element`], the [`TypeTag`] constraint, and the [`SeekableCursor`].

// Attach sources.
pub mod cursor;
pub mod element;
pub mod raw;
pub mod traits;
pub mod type_tag;
pub mod value;

// Re-export.
pub use cursor::*;
pub use element::*;
pub use raw::*;
pub use traits::*;
pub use type_tag::*;
pub use value::*;
