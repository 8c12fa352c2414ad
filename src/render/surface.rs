use crate::scene::model::Rgb;

/// Stroke cap style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineCap {
    /// Flat cap; used for very short visible segments to avoid a dot
    /// artifact.
    Butt,
    /// Rounded cap.
    Round,
}

/// Immediate-mode 2D drawing surface contract.
///
/// This is the boundary to the host: the engine draws through these
/// primitives and never touches pixels itself. Hosts mount a real canvas
/// implementation; tests use [`RecordingSurface`].
pub trait Surface {
    /// Clear a rectangle to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Fill a rectangle with the current fill color.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Set the fill color.
    fn set_fill_color(&mut self, color: Rgb);
    /// Set the stroke color.
    fn set_stroke_color(&mut self, color: Rgb);
    /// Set the stroke width in canvas pixels.
    fn set_line_width(&mut self, width: f64);
    /// Set the stroke cap style.
    fn set_line_cap(&mut self, cap: LineCap);
    /// Begin a new path.
    fn begin_path(&mut self);
    /// Move the path cursor without drawing.
    fn move_to(&mut self, x: f64, y: f64);
    /// Add a straight segment to the path.
    fn line_to(&mut self, x: f64, y: f64);
    /// Stroke the current path.
    fn stroke(&mut self);
    /// Push the current transform state.
    fn save(&mut self);
    /// Pop the transform state.
    fn restore(&mut self);
    /// Translate the coordinate frame.
    fn translate(&mut self, x: f64, y: f64);
    /// Rotate the coordinate frame by `radians`.
    fn rotate(&mut self, radians: f64);
    /// Set the font size in canvas pixels.
    fn set_font_size(&mut self, px: f64);
    /// Draw `text` left/top-anchored at `(x, y)` in the current frame with
    /// the current fill color and font size.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// One recorded surface command.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum SurfaceOp {
    /// `clear_rect` call.
    ClearRect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        w: f64,
        /// Height.
        h: f64,
    },
    /// `fill_rect` call.
    FillRect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        w: f64,
        /// Height.
        h: f64,
    },
    /// `set_fill_color` call.
    FillColor(Rgb),
    /// `set_stroke_color` call.
    StrokeColor(Rgb),
    /// `set_line_width` call.
    LineWidth(f64),
    /// `set_line_cap` call.
    Cap(LineCap),
    /// `begin_path` call.
    BeginPath,
    /// `move_to` call.
    MoveTo {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// `line_to` call.
    LineTo {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// `stroke` call.
    StrokePath,
    /// `save` call.
    Save,
    /// `restore` call.
    Restore,
    /// `translate` call.
    Translate {
        /// X offset.
        x: f64,
        /// Y offset.
        y: f64,
    },
    /// `rotate` call.
    Rotate(f64),
    /// `set_font_size` call.
    FontSize(f64),
    /// `fill_text` call.
    Text {
        /// Drawn string.
        text: String,
        /// Anchor x.
        x: f64,
        /// Anchor y.
        y: f64,
    },
}

/// Command-recording surface for tests and headless use.
///
/// Records every call in order so tests can assert exact draw sequences
/// without a raster backend.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Count of recorded `stroke` calls (one per drawn stroke segment).
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::StrokePath))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(SurfaceOp::ClearRect { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(SurfaceOp::FillRect { x, y, w, h });
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.ops.push(SurfaceOp::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.ops.push(SurfaceOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::LineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(SurfaceOp::Cap(cap));
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::StrokePath);
    }

    fn save(&mut self) {
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(SurfaceOp::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::Translate { x, y });
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(SurfaceOp::Rotate(radians));
    }

    fn set_font_size(&mut self, px: f64) {
        self.ops.push(SurfaceOp::FontSize(px));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(SurfaceOp::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}
