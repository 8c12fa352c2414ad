use crate::foundation::error::{KinetypeError, KinetypeResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Output canvas dimensions in logical pixels.
///
/// The canvas has a fixed native resolution regardless of the on-screen
/// display size; pointer input is rescaled into this space before hit
/// testing (see [`crate::interact::controller`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Native portrait poster resolution.
    pub const NATIVE: Self = Self {
        width: 1080,
        height: 1350,
    };

    /// Create a canvas size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> KinetypeResult<Self> {
        if width == 0 || height == 0 {
            return Err(KinetypeError::validation(
                "canvas width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Per-axis ratio mapping on-screen display pixels to canvas pixels.
    pub fn display_scale(self, display_width: f64, display_height: f64) -> (f64, f64) {
        (
            f64::from(self.width) / display_width,
            f64::from(self.height) / display_height,
        )
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::NATIVE
    }
}

/// One of the two keyframe poses.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum FrameId {
    /// Start pose; read-only reference during interaction.
    One,
    /// End pose; the frame pointer gestures mutate.
    Two,
}

/// Linear interpolation between `a` and `b` by `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Degrees to radians (`deg × π / 180`).
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Radians to degrees.
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}
