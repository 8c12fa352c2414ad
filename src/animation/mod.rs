//! Easing curves and the playback clock.

pub mod ease;
pub mod player;
