//! Kinetype is a two-keyframe kinetic poster engine.
//!
//! A session arranges three text slots and straight freehand strokes on a
//! fixed 1080×1350 canvas across two poses (Frame 1 and Frame 2); the
//! engine interpolates between them to produce a short animation, drawn
//! through a host-provided immediate-mode surface and exportable as a still
//! or one captured playback cycle.
//!
//! # Engine overview
//!
//! 1. **Interact**: [`Controller`] turns pointer events into selection,
//!    drag, edit, and stroke-recording mutations of the Frame 2 pose set.
//! 2. **Animate**: [`Player`] advances eased progress over wall-clock time
//!    (play/pause/loop).
//! 3. **Compose**: [`render_scene`] draws the interpolated text slots and
//!    the active frame's staggered strokes for a given progress value.
//! 4. **Export**: [`CycleCapture`] scripts one playback cycle into a
//!    [`FrameSink`].
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded, tick-driven**: the host's display-refresh callback
//!   is the only source of repeated work; renders are synchronous within a
//!   tick.
//! - **No pixels in the engine**: drawing goes through the [`Surface`]
//!   contract; export sinks read the host canvas themselves.
//! - **Deterministic under seed**: stroke jitter comes from an injected
//!   [`Rng64`] so tests can assert exact offsets.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod export;
mod foundation;
mod geometry;
mod interact;
mod render;
mod scene;

pub use animation::ease::Ease;
pub use animation::player::Player;
pub use export::sink::{CaptureStatus, CycleCapture, FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{
    Affine, CanvasSize, FrameId, Point, Rect, Vec2, deg_to_rad, lerp, rad_to_deg,
};
pub use foundation::error::{KinetypeError, KinetypeResult};
pub use foundation::math::Rng64;
pub use geometry::hit::{hit_text_position, point_in_polygon, rotated_bounding_box};
pub use interact::controller::{
    Controller, GroupBounds, PointerInput, Response, Tool,
};
pub use render::compositor::{Stage, render_scene};
pub use render::strokes::{Direction, draw_strokes, stagger_start, visible_fraction};
pub use render::surface::{LineCap, RecordingSurface, Surface, SurfaceOp};
pub use scene::model::{
    PerSlot, PositionEdit, RenderSettings, Rgb, SceneState, Stroke, TextPosition, TextSlot,
};
