use crate::foundation::core::lerp;
use crate::foundation::math::Rng64;
use crate::render::strokes::{Direction, draw_strokes};
use crate::render::surface::Surface;
use crate::scene::model::{SceneState, Stroke, TextSlot};

/// Render one frame of the scene at interpolation `progress`.
///
/// Draw order: background fill, the three text slots interpolated between
/// the Frame 1 and Frame 2 poses, then the active frame's strokes. Text
/// `x`, `y` and `rotation` are lerped; box extent and font size are always
/// taken from Frame 1 (intentional, preserved behavior of the original
/// tool). The text fill color is the two-tone contrast color derived from
/// background luminance.
#[tracing::instrument(skip(surface, scene, rng))]
pub fn render_scene(
    surface: &mut dyn Surface,
    scene: &SceneState,
    progress: f64,
    direction: Direction,
    rng: &mut Rng64,
) {
    let w = f64::from(scene.canvas.width);
    let h = f64::from(scene.canvas.height);

    surface.clear_rect(0.0, 0.0, w, h);
    surface.set_fill_color(scene.background);
    surface.fill_rect(0.0, 0.0, w, h);

    let ink = scene.background.contrast_text();
    surface.set_fill_color(ink);

    for slot in TextSlot::ALL {
        let text = scene.texts.get(slot);
        if text.is_empty() {
            continue;
        }

        let start = scene.frame1.get(slot);
        let end = scene.frame2.get(slot);
        let x = lerp(start.x, end.x, progress);
        let y = lerp(start.y, end.y, progress);
        let rotation = lerp(start.rotation_rad, end.rotation_rad, progress);

        // Extent and font size are pinned to Frame 1, not interpolated.
        let (bw, bh) = (start.width, start.height);

        surface.save();
        surface.translate(x + bw / 2.0, y + bh / 2.0);
        surface.rotate(rotation);
        surface.set_font_size(start.font_size);
        surface.fill_text(text, -bw / 2.0, -bh / 2.0);
        surface.restore();
    }

    let strokes: Vec<Stroke> = scene.strokes_for(scene.active_frame).copied().collect();
    surface.set_stroke_color(ink);
    draw_strokes(surface, &strokes, progress, direction, &scene.settings, rng);

    tracing::debug!(
        progress,
        frame = ?scene.active_frame,
        background = %scene.background.to_hex(),
        "rendered scene"
    );
}

/// Owner of the (optionally mounted) drawing surface.
///
/// Rendering with no surface mounted is a silent no-op: the engine
/// tolerates a host that has not attached its canvas yet.
#[derive(Debug)]
pub struct Stage<S> {
    surface: Option<S>,
    rng: Rng64,
}

impl<S: Surface> Stage<S> {
    /// Create a stage with no mounted surface and an entropy-seeded jitter
    /// source.
    pub fn new() -> Self {
        Self {
            surface: None,
            rng: Rng64::from_entropy(),
        }
    }

    /// Create a stage with a deterministic jitter seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            surface: None,
            rng: Rng64::new(seed),
        }
    }

    /// Mount the host's drawing surface, replacing any previous one.
    pub fn mount(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    /// Unmount and return the surface, if any.
    pub fn unmount(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Borrow the mounted surface.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutably borrow the mounted surface.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Render the scene; returns `false` (doing nothing) when no surface is
    /// mounted.
    pub fn render(&mut self, scene: &SceneState, progress: f64, direction: Direction) -> bool {
        match self.surface.as_mut() {
            Some(surface) => {
                render_scene(surface, scene, progress, direction, &mut self.rng);
                true
            }
            None => false,
        }
    }
}

impl<S: Surface> Default for Stage<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
