// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// Stack allocated for small result sets (eg: the match positions returned by
/// [`crate::BoundedString::index_of`]). It spills to the heap when it gets larger than
/// [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
