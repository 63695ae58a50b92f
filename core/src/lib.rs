// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Introduction
//!
//! This crate provides validated, bounded value types. Each type wraps exactly one
//! primitive payload and checks its invariant when it is constructed, and again before
//! any mutation is committed. There is no way to hold a half-valid instance: a
//! constructor either returns a fully valid value or a [`StrictError`].
//!
//! The types, leaves first:
//! 1. Scalars: [`Byte`], [`Boolean`], [`Integer`], [`Float`] and [`Char`].
//! 2. [`BoundedString`]: mutable text with a fixed character capacity, indexed character
//!    access, and a restartable cursor.
//! 3. [`FixedArray`]: capacity-bounded ordered collection with an optional element
//!    [`TypeTag`].
//! 4. [`AssociativeArray`]: capacity-bounded list of key/value pairs with optional key
//!    and value tags. Lookup is a linear scan, insertion order is significant, and keys
//!    do not need to be hashable.
//!
//! All of them are variants of the closed [`Value`] enum, and they all implement
//! [`ValueBox`]. Collections store [`Element`]s, which are either a [`Raw`] primitive or
//! a boxed [`Value`].
//!
//! # Example
//!
//! ```
//! use strict_core::{BoundedString, FixedArray, StrictError, len};
//!
//! let mut text = BoundedString::try_new("abc", Some(5)).unwrap();
//! text.push("defg");
//! assert_eq!(text.as_str(), "abcde");
//! assert_eq!(text.limit(), len(5));
//!
//! let mut array = FixedArray::try_new(2, None).unwrap();
//! array.push(1).unwrap();
//! array.push(2).unwrap();
//! assert!(matches!(array.push(3), Err(StrictError::Capacity { .. })));
//! ```
//!
//! # Logging
//!
//! Notable mutations emit [`tracing`] events at `debug` level. Use
//! [`try_initialize_logging_global`] with a [`TracingConfig`] to see them.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

/// Enables or disables `debug` level tracing of mutations across the crate.
pub const DEBUG_STRICT_MOD: bool = true;

// Attach sources.
pub mod bounded_string;
pub mod collections;
pub mod common;
pub mod log;
pub mod scalar;
pub mod shim;
pub mod units;
pub mod value_box;

// Re-export.
pub use bounded_string::*;
pub use collections::*;
pub use common::*;
pub use log::*;
pub use scalar::*;
pub use shim::*;
pub use units::*;
pub use value_box::*;
