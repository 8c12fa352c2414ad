//! Rotated bounding boxes and point-in-polygon hit testing.

pub mod hit;
