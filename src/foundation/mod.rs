//! Shared primitives: canvas/frame types, error taxonomy, deterministic RNG.

pub mod core;
pub mod error;
pub mod math;
