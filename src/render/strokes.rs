use crate::animation::ease::Ease;
use crate::foundation::math::Rng64;
use crate::render::surface::{LineCap, Surface};
use crate::scene::model::{RenderSettings, Stroke};

/// Which way the stroke animation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Strokes extend from their recorded start toward their end.
    Grow,
    /// Strokes retract toward their recorded start (complement fraction).
    Shrink,
}

/// Width of each stroke's local animation window, in progress units.
const STROKE_WINDOW: f64 = 0.3;

/// Start of stroke `index`'s local animation window.
///
/// Strokes are staggered across recorded order: stroke `i` of `n` starts at
/// `i × (stagger_delay / max(n − 1, 1))`.
pub fn stagger_start(index: usize, count: usize, stagger_delay: f64) -> f64 {
    let spread = count.saturating_sub(1).max(1) as f64;
    index as f64 * (stagger_delay / spread)
}

/// Visible fraction of stroke `index` at `progress`, after stagger and
/// easing.
pub fn visible_fraction(
    index: usize,
    count: usize,
    progress: f64,
    direction: Direction,
    stagger_delay: f64,
) -> f64 {
    let local = (progress - stagger_start(index, count, stagger_delay)) / STROKE_WINDOW;
    let eased = Ease::InOutQuad.apply(local.clamp(0.0, 1.0));
    match direction {
        Direction::Grow => eased,
        Direction::Shrink => 1.0 - eased,
    }
}

/// Draw one frame's strokes with staggered grow/shrink animation and
/// per-call jitter.
///
/// `strokes` must already be filtered to the active frame and kept in
/// recorded order; the stagger indexing depends on it. One jitter offset
/// pair is rolled per stroke per call and applied identically to both
/// endpoints, which produces the trembling effect across successive
/// redraws without changing the stroke's length.
pub fn draw_strokes(
    surface: &mut dyn Surface,
    strokes: &[Stroke],
    progress: f64,
    direction: Direction,
    settings: &RenderSettings,
    rng: &mut Rng64,
) {
    let thickness = settings.line_thickness();
    let half = thickness / 2.0;
    surface.set_line_width(thickness);

    let count = strokes.len();
    for (index, stroke) in strokes.iter().enumerate() {
        let fraction = visible_fraction(
            index,
            count,
            progress,
            direction,
            settings.stagger_delay(),
        );

        // Shared offset for both endpoints, re-rolled every call.
        let jx = rng.next_centered(settings.trembling() / 2.0);
        let jy = rng.next_centered(settings.trembling() / 2.0);

        let [start, end] = stroke.points;
        let tip_x = start.x + (end.x - start.x) * fraction;
        let tip_y = start.y + (end.y - start.y) * fraction;

        let dx = tip_x - start.x;
        let dy = tip_y - start.y;
        let len2 = dx * dx + dy * dy;
        if len2 <= half * half {
            // Too short to draw without artifacts.
            continue;
        }

        let cap = if len2 < 4.0 * half * half {
            LineCap::Butt
        } else {
            LineCap::Round
        };
        surface.set_line_cap(cap);

        surface.begin_path();
        surface.move_to(start.x + jx, start.y + jy);
        surface.line_to(tip_x + jx, tip_y + jy);
        surface.stroke();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/strokes.rs"]
mod tests;
