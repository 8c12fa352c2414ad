//! The drawing-surface contract, stroke renderer, and scene compositor.

pub mod compositor;
pub mod strokes;
pub mod surface;
