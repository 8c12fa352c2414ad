//! The pure session data model.

pub mod model;
