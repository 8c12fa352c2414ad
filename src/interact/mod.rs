//! Pointer gesture handling against the Frame 2 pose set.

pub mod controller;
