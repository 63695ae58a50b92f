// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod bounds_check;
pub mod index;
pub mod length;
pub mod offset;

// Re-export.
pub use bounds_check::*;
pub use index::*;
pub use length::*;
pub use offset::*;
