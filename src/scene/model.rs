use crate::foundation::core::{CanvasSize, FrameId, Point, deg_to_rad, rad_to_deg};
use crate::foundation::error::{KinetypeError, KinetypeResult};

/// One of the three addressable text slots.
///
/// The set is fixed; slots are never created or destroyed at runtime.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum TextSlot {
    /// First title line.
    Title1,
    /// Second title line.
    Title2,
    /// Subtitle line.
    Subtitle,
}

impl TextSlot {
    /// All slots in hit-test priority order (titles before subtitle).
    pub const ALL: [TextSlot; 3] = [TextSlot::Title1, TextSlot::Title2, TextSlot::Subtitle];
}

/// Per-slot storage for the three text slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PerSlot<T> {
    /// Value for [`TextSlot::Title1`].
    pub title1: T,
    /// Value for [`TextSlot::Title2`].
    pub title2: T,
    /// Value for [`TextSlot::Subtitle`].
    pub subtitle: T,
}

impl<T> PerSlot<T> {
    /// Borrow the value for `slot`.
    pub fn get(&self, slot: TextSlot) -> &T {
        match slot {
            TextSlot::Title1 => &self.title1,
            TextSlot::Title2 => &self.title2,
            TextSlot::Subtitle => &self.subtitle,
        }
    }

    /// Mutably borrow the value for `slot`.
    pub fn get_mut(&mut self, slot: TextSlot) -> &mut T {
        match slot {
            TextSlot::Title1 => &mut self.title1,
            TextSlot::Title2 => &mut self.title2,
            TextSlot::Subtitle => &mut self.subtitle,
        }
    }
}

/// One placed text box's frame-local transform.
///
/// Two independent instances exist per slot: one for Frame 1 (start pose)
/// and one for Frame 2 (end pose).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextPosition {
    /// Left edge of the unrotated box, canvas pixels.
    pub x: f64,
    /// Top edge of the unrotated box, canvas pixels.
    pub y: f64,
    /// Box width, must be > 0.
    pub width: f64,
    /// Box height, must be > 0.
    pub height: f64,
    /// Rotation about the box center, radians. Unconstrained.
    pub rotation_rad: f64,
    /// Font size in pixels, must be > 0.
    pub font_size: f64,
}

impl TextPosition {
    /// Center of the box (rotation pivot).
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Rotation wrapped into `[0, 2π)` for display only.
    pub fn display_rotation(&self) -> f64 {
        self.rotation_rad.rem_euclid(std::f64::consts::TAU)
    }

    fn validate(&self, slot: &str, frame: &str) -> KinetypeResult<()> {
        for (name, v) in [
            ("width", self.width),
            ("height", self.height),
            ("font_size", self.font_size),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(KinetypeError::validation(format!(
                    "{slot} {frame} {name} must be finite and > 0"
                )));
            }
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_rad.is_finite() {
            return Err(KinetypeError::validation(format!(
                "{slot} {frame} x/y/rotation must be finite"
            )));
        }
        Ok(())
    }
}

/// Patch returned by the external position-edit dialog.
///
/// `None` fields leave the target untouched; non-finite values are ignored
/// field-by-field so a garbled input never clobbers a valid position.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PositionEdit {
    /// New left edge in canvas pixels.
    pub x: Option<f64>,
    /// New top edge in canvas pixels.
    pub y: Option<f64>,
    /// New rotation in degrees (the dialog speaks degrees).
    pub rotation_deg: Option<f64>,
    /// New font size in pixels.
    pub font_size: Option<f64>,
}

impl PositionEdit {
    /// Apply this patch to `target`, preserving all unpatched fields.
    pub fn apply(self, target: &mut TextPosition) {
        if let Some(x) = self.x
            && x.is_finite()
        {
            target.x = x;
        }
        if let Some(y) = self.y
            && y.is_finite()
        {
            target.y = y;
        }
        if let Some(deg) = self.rotation_deg
            && deg.is_finite()
        {
            target.rotation_rad = deg_to_rad(deg);
        }
        if let Some(size) = self.font_size
            && size.is_finite()
            && size > 0.0
        {
            target.font_size = size;
        }
    }

    /// Snapshot of `source` in dialog units (rotation in degrees).
    pub fn from_position(source: &TextPosition) -> Self {
        Self {
            x: Some(source.x),
            y: Some(source.y),
            rotation_deg: Some(rad_to_deg(source.rotation_rad)),
            font_size: Some(source.font_size),
        }
    }
}

/// A single straight freehand stroke, tagged with the frame it was drawn in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Recorded start and end point, canvas pixels.
    pub points: [Point; 2],
    /// Frame the stroke belongs to.
    pub frame: FrameId,
}

/// Live-updating numeric settings from the external settings surface.
///
/// Setters clamp to the documented slider ranges; non-finite input is a
/// no-op on that field (previous value retained).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderSettings {
    line_thickness: f64,
    speed: f64,
    stagger_delay: f64,
    trembling: f64,
}

impl RenderSettings {
    /// Base playback cycle at the speed-slider midpoint, seconds.
    const BASE_CYCLE_SECS: f64 = 25.0;

    /// Stroke line thickness, `1..=10`.
    pub fn line_thickness(&self) -> f64 {
        self.line_thickness
    }

    /// Animation speed, `1..=10`. Speed 5 yields a 5-second cycle.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Per-stroke stagger proportion, `0..=0.5`.
    pub fn stagger_delay(&self) -> f64 {
        self.stagger_delay
    }

    /// Jitter magnitude for stroke endpoints, `0..=10`.
    pub fn trembling(&self) -> f64 {
        self.trembling
    }

    /// Duration of one full playback cycle in seconds.
    pub fn cycle_secs(&self) -> f64 {
        Self::BASE_CYCLE_SECS / self.speed
    }

    /// Set the line thickness, clamped to `1..=10`.
    pub fn set_line_thickness(&mut self, v: f64) {
        if v.is_finite() {
            self.line_thickness = v.clamp(1.0, 10.0);
        }
    }

    /// Set the animation speed, clamped to `1..=10`.
    pub fn set_speed(&mut self, v: f64) {
        if v.is_finite() {
            self.speed = v.clamp(1.0, 10.0);
        }
    }

    /// Set the stagger delay, clamped to `0..=0.5`.
    pub fn set_stagger_delay(&mut self, v: f64) {
        if v.is_finite() {
            self.stagger_delay = v.clamp(0.0, 0.5);
        }
    }

    /// Set the trembling intensity, clamped to `0..=10`.
    pub fn set_trembling(&mut self, v: f64) {
        if v.is_finite() {
            self.trembling = v.clamp(0.0, 10.0);
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            line_thickness: 3.0,
            speed: 5.0,
            stagger_delay: 0.2,
            trembling: 2.0,
        }
    }
}

/// Background color as straight RGB, parsed from `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// White.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Black.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Parse a `#RRGGBB` hex string (leading `#` optional).
    pub fn parse_hex(s: &str) -> KinetypeResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(KinetypeError::validation(format!(
                "color must be #RRGGBB, got '{s}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| KinetypeError::validation(format!("color must be #RRGGBB, got '{s}'")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Perceptual luminance in `[0, 1]` (`(0.299R + 0.587G + 0.114B)/255`).
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.0
    }

    /// Legible text color over this background: black on light, white on
    /// dark (two-tone policy, boundary at luminance > 0.5).
    pub fn contrast_text(self) -> Rgb {
        if self.luminance() > 0.5 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

/// The complete in-memory session state.
///
/// A pure data model: built with defaults at session start, mutated in place
/// by the interaction controller, serialized/deserialized via Serde (JSON)
/// for snapshots. No per-item deletion is in scope; everything lives until
/// the session ends.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneState {
    /// Fixed native canvas resolution.
    pub canvas: CanvasSize,
    /// Solid background fill.
    pub background: Rgb,
    /// Text content per slot; empty slots are not drawn.
    pub texts: PerSlot<String>,
    /// Frame 1 (start) poses.
    pub frame1: PerSlot<TextPosition>,
    /// Frame 2 (end) poses.
    pub frame2: PerSlot<TextPosition>,
    /// Recorded strokes across both frames, in draw order.
    pub strokes: Vec<Stroke>,
    /// Frame currently shown for editing and stroke filtering.
    pub active_frame: FrameId,
    /// Live numeric settings.
    pub settings: RenderSettings,
}

impl SceneState {
    /// Borrow one frame's pose table.
    pub fn positions(&self, frame: FrameId) -> &PerSlot<TextPosition> {
        match frame {
            FrameId::One => &self.frame1,
            FrameId::Two => &self.frame2,
        }
    }

    /// Mutably borrow one frame's pose table.
    pub fn positions_mut(&mut self, frame: FrameId) -> &mut PerSlot<TextPosition> {
        match frame {
            FrameId::One => &mut self.frame1,
            FrameId::Two => &mut self.frame2,
        }
    }

    /// Strokes tagged with `frame`, in recorded order.
    pub fn strokes_for(&self, frame: FrameId) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().filter(move |s| s.frame == frame)
    }

    /// Set the background from a `#RRGGBB` string; invalid input is a no-op
    /// and reports `false`.
    pub fn set_background_hex(&mut self, hex: &str) -> bool {
        match Rgb::parse_hex(hex) {
            Ok(color) => {
                self.background = color;
                true
            }
            Err(_) => false,
        }
    }

    /// Validate pose invariants for both frames.
    pub fn validate(&self) -> KinetypeResult<()> {
        for slot in TextSlot::ALL {
            let name = format!("{slot:?}");
            self.frame1.get(slot).validate(&name, "frame1")?;
            self.frame2.get(slot).validate(&name, "frame2")?;
        }
        for stroke in &self.strokes {
            for p in stroke.points {
                if !p.x.is_finite() || !p.y.is_finite() {
                    return Err(KinetypeError::validation("stroke points must be finite"));
                }
            }
        }
        Ok(())
    }
}

impl Default for SceneState {
    fn default() -> Self {
        let pose = |x: f64, y: f64, w: f64, h: f64, size: f64| TextPosition {
            x,
            y,
            width: w,
            height: h,
            rotation_rad: 0.0,
            font_size: size,
        };
        let start = PerSlot {
            title1: pose(90.0, 420.0, 900.0, 160.0, 120.0),
            title2: pose(90.0, 600.0, 900.0, 160.0, 120.0),
            subtitle: pose(90.0, 820.0, 700.0, 70.0, 48.0),
        };
        Self {
            canvas: CanvasSize::NATIVE,
            background: Rgb::WHITE,
            texts: PerSlot {
                title1: String::new(),
                title2: String::new(),
                subtitle: String::new(),
            },
            frame1: start,
            frame2: start,
            strokes: Vec::new(),
            active_frame: FrameId::Two,
            settings: RenderSettings::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
