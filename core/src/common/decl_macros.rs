// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Emit a `debug` level [`tracing`] event when [`crate::DEBUG_STRICT_MOD`] is enabled.
/// The arguments are whatever you would pass to [`tracing::debug!`].
///
/// ```
/// use strict_core::debug_strict;
/// let capacity = 5;
/// debug_strict!(message = "push truncated", capacity = ?capacity);
/// ```
#[macro_export]
macro_rules! debug_strict {
    ($($params:tt)*) => {
        if $crate::DEBUG_STRICT_MOD {
            // % is Display, ? is Debug.
            tracing::debug!($($params)*);
        }
    };
}
