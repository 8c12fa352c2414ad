use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::core::{FrameId, Point};
use crate::geometry::hit::{hit_text_position, rotated_bounding_box};
use crate::scene::model::{PositionEdit, SceneState, Stroke, TextPosition, TextSlot};

/// Active pointer tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tool {
    /// Select and drag text slots.
    #[default]
    Select,
    /// Record straight freehand strokes.
    Draw,
}

/// One pointer event in on-screen display pixels.
#[derive(Clone, Copy, Debug)]
pub struct PointerInput {
    /// X in display pixels.
    pub x: f64,
    /// Y in display pixels.
    pub y: f64,
    /// Event time in milliseconds (host monotonic clock).
    pub timestamp_ms: u64,
    /// Extend-selection modifier (shift held).
    pub extend: bool,
}

/// What the host should do after an event is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// Nothing changed.
    None,
    /// Scene state changed; re-render.
    Redraw,
    /// Open the external position-edit dialog for this slot.
    EditRequested(TextSlot),
}

/// Axis-aligned bounds of a multi-slot selection.
///
/// Derived on demand while a group operation is active; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupBounds {
    /// Left edge, canvas pixels.
    pub x: f64,
    /// Top edge, canvas pixels.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Group rotation; always 0 for the derived axis-aligned box.
    pub rotation_rad: f64,
}

/// Transient gesture record, cleared atomically on release.
///
/// `resizing` and `rotating` are declared for handle-based gestures that no
/// current pointer path reaches; they only participate in the activity
/// check and the unconditional clear.
#[derive(Clone, Debug, Default)]
struct Gesture {
    dragging: bool,
    resizing: bool,
    rotating: bool,
    origin: Option<Point>,
    initial: BTreeMap<TextSlot, TextPosition>,
    draw_anchor: Option<Point>,
}

impl Gesture {
    fn active(&self) -> bool {
        self.dragging || self.resizing || self.rotating || self.draw_anchor.is_some()
    }
}

/// Maximum gap between two pointer-downs that classifies a double-click.
const DOUBLE_CLICK_MS: u64 = 300;

/// Pointer gesture state machine over the two keyframe position sets.
///
/// Text manipulation operates only while Frame 2 is active (Frame 1 is the
/// read-only reference pose); the draw tool records strokes into whichever
/// frame is active. Pointer coordinates arrive in display pixels and are
/// rescaled to the canvas's native resolution before hit testing.
#[derive(Clone, Debug)]
pub struct Controller {
    tool: Tool,
    selection: BTreeSet<TextSlot>,
    gesture: Gesture,
    last_click_ms: Option<u64>,
    display_width: f64,
    display_height: f64,
}

impl Controller {
    /// Create a controller assuming the display matches the native canvas
    /// size until told otherwise.
    pub fn new() -> Self {
        Self {
            tool: Tool::Select,
            selection: BTreeSet::new(),
            gesture: Gesture::default(),
            last_click_ms: None,
            display_width: f64::from(crate::foundation::core::CanvasSize::NATIVE.width),
            display_height: f64::from(crate::foundation::core::CanvasSize::NATIVE.height),
        }
    }

    /// Record the on-screen size of the canvas element for input rescaling.
    pub fn set_display_size(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.display_width = width;
            self.display_height = height;
        }
    }

    /// Switch pointer tool; any in-flight gesture is abandoned.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.gesture = Gesture::default();
    }

    /// Current tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Currently selected slots.
    pub fn selection(&self) -> &BTreeSet<TextSlot> {
        &self.selection
    }

    /// Switch the active frame, cancelling any in-flight gesture so a drag
    /// cannot dangle into the other frame.
    pub fn set_active_frame(&mut self, scene: &mut SceneState, frame: FrameId) {
        scene.active_frame = frame;
        if frame != FrameId::Two {
            self.gesture = Gesture::default();
        }
    }

    /// Map display pixels to canvas pixels.
    fn to_canvas(&self, scene: &SceneState, x: f64, y: f64) -> Point {
        let (sx, sy) = scene.canvas.display_scale(self.display_width, self.display_height);
        Point::new(x * sx, y * sy)
    }

    /// First slot whose Frame-2 rotated box contains `point`, titles before
    /// subtitle.
    fn hit_slot(scene: &SceneState, point: Point) -> Option<TextSlot> {
        TextSlot::ALL
            .into_iter()
            .find(|&slot| hit_text_position(point, scene.frame2.get(slot)))
    }

    /// Handle pointer-down.
    pub fn pointer_down(&mut self, scene: &mut SceneState, input: PointerInput) -> Response {
        let point = self.to_canvas(scene, input.x, input.y);

        if self.tool == Tool::Draw {
            self.gesture.draw_anchor = Some(point);
            return Response::None;
        }

        if scene.active_frame != FrameId::Two {
            return Response::None;
        }

        let hit = Self::hit_slot(scene, point);

        if let Some(prev) = self.last_click_ms
            && input.timestamp_ms.saturating_sub(prev) <= DOUBLE_CLICK_MS
            && let Some(slot) = hit
        {
            // Clear the timestamp so a third rapid click does not classify
            // as another double-click.
            self.last_click_ms = None;
            self.selection.clear();
            self.selection.insert(slot);
            return Response::EditRequested(slot);
        }
        self.last_click_ms = Some(input.timestamp_ms);

        match hit {
            Some(slot) => {
                if input.extend {
                    if !self.selection.remove(&slot) {
                        self.selection.insert(slot);
                    }
                } else if !self.selection.contains(&slot) {
                    self.selection.clear();
                    self.selection.insert(slot);
                }

                self.gesture.dragging = true;
                self.gesture.origin = Some(point);
                self.gesture.initial = self
                    .selection
                    .iter()
                    .map(|&s| (s, *scene.frame2.get(s)))
                    .collect();
                Response::Redraw
            }
            None => {
                self.selection.clear();
                Response::Redraw
            }
        }
    }

    /// Handle pointer-move.
    pub fn pointer_move(&mut self, scene: &mut SceneState, input: PointerInput) -> Response {
        if !self.gesture.active() {
            return Response::None;
        }
        if self.tool == Tool::Draw {
            // No stroke preview; the segment appears on release.
            return Response::None;
        }
        if scene.active_frame != FrameId::Two || !self.gesture.dragging {
            return Response::None;
        }
        let Some(origin) = self.gesture.origin else {
            return Response::None;
        };

        let point = self.to_canvas(scene, input.x, input.y);
        let delta = point - origin;

        // All selected slots move together by the same delta, relative to
        // the positions cached at gesture start.
        for (&slot, initial) in &self.gesture.initial {
            let pos = scene.frame2.get_mut(slot);
            pos.x = initial.x + delta.x;
            pos.y = initial.y + delta.y;
        }
        Response::Redraw
    }

    /// Handle pointer-up: commit a draw-tool stroke if one is pending, then
    /// clear all transient gesture state unconditionally.
    pub fn pointer_up(&mut self, scene: &mut SceneState, input: PointerInput) -> Response {
        let mut response = Response::None;

        if self.tool == Tool::Draw
            && let Some(anchor) = self.gesture.draw_anchor
        {
            let release = self.to_canvas(scene, input.x, input.y);
            if release != anchor {
                scene.strokes.push(Stroke {
                    points: [anchor, release],
                    frame: scene.active_frame,
                });
                response = Response::Redraw;
            }
        }

        self.gesture = Gesture::default();
        response
    }

    /// Apply a position-edit dialog result to every selected slot's Frame-2
    /// pose.
    pub fn apply_edit(&self, scene: &mut SceneState, edit: PositionEdit) {
        for &slot in &self.selection {
            edit.apply(scene.frame2.get_mut(slot));
        }
    }

    /// Axis-aligned bounds of the current multi-slot selection on Frame 2,
    /// or `None` unless at least two slots are selected.
    pub fn group_bounds(&self, scene: &SceneState) -> Option<GroupBounds> {
        if self.selection.len() < 2 {
            return None;
        }
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &slot in &self.selection {
            for corner in rotated_bounding_box(scene.frame2.get(slot)) {
                min.x = min.x.min(corner.x);
                min.y = min.y.min(corner.y);
                max.x = max.x.max(corner.x);
                max.y = max.y.max(corner.y);
            }
        }
        Some(GroupBounds {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
            rotation_rad: 0.0,
        })
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/controller.rs"]
mod tests;
