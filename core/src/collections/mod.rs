// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Capacity-bounded collections: [`FixedArray`] and [`AssociativeArray`].

// Attach sources.
pub mod array_source;
pub mod associative_array;
pub mod fixed_array;

// Re-export.
pub use array_source::*;
pub use associative_array::*;
pub use fixed_array::*;
