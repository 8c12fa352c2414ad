use std::time::{Duration, Instant};

use crate::animation::player::Player;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::{KinetypeError, KinetypeResult};
use crate::render::compositor::Stage;
use crate::render::surface::Surface;
use crate::scene::model::SceneState;

/// Configuration handed to a [`FrameSink`] before any frames are captured.
#[derive(Debug, Clone, Copy)]
pub struct SinkConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Duration of the captured cycle in seconds.
    pub cycle_secs: f64,
}

/// Sink contract for consuming captured frames in tick order.
///
/// The engine guarantees the drawing surface holds the finished frame when
/// `capture_frame` is called; the sink reads the canvas itself (the engine
/// never touches pixels). `capture_frame` is called with strictly
/// increasing indices within one capture.
pub trait FrameSink {
    /// Called once before any frames are captured.
    fn begin(&mut self, cfg: SinkConfig) -> KinetypeResult<()>;
    /// Notify the sink that frame `index` (at eased `progress`) is ready on
    /// the surface.
    fn capture_frame(&mut self, index: u64, progress: f64) -> KinetypeResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> KinetypeResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, f64)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured `(index, progress)` pairs in tick order.
    pub fn frames(&self) -> &[(u64, f64)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> KinetypeResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn capture_frame(&mut self, index: u64, progress: f64) -> KinetypeResult<()> {
        self.frames.push((index, progress));
        Ok(())
    }

    fn end(&mut self) -> KinetypeResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Whether a capture is still consuming ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureStatus {
    /// Capture in progress; keep ticking.
    Rolling,
    /// Capture finished; playback has been stopped.
    Finished,
}

/// Scripted one-shot video capture of a single playback cycle.
///
/// Beginning a capture forces playback from elapsed zero; the capture then
/// consumes one tick per display refresh, rendering and notifying the sink,
/// and stops both itself and playback once one full cycle duration has
/// elapsed. It is not user-cancellable mid-capture.
#[derive(Debug)]
pub struct CycleCapture<K: FrameSink> {
    sink: K,
    deadline: Instant,
    next_index: u64,
    finished: bool,
}

impl<K: FrameSink> CycleCapture<K> {
    /// Start a capture: configures the sink, restarts playback, and fixes
    /// the auto-stop deadline one cycle from `now`.
    pub fn begin(
        mut sink: K,
        canvas: CanvasSize,
        player: &mut Player,
        now: Instant,
    ) -> KinetypeResult<Self> {
        let cycle_secs = player.cycle_secs();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            cycle_secs,
        })?;
        player.restart(now);
        let deadline = now
            .checked_add(Duration::from_secs_f64(cycle_secs))
            .ok_or_else(|| KinetypeError::export("capture deadline overflow"))?;
        Ok(Self {
            sink,
            deadline,
            next_index: 0,
            finished: false,
        })
    }

    /// Consume one display tick: advance the clock, render the scene, and
    /// hand the finished frame to the sink. Past the deadline, ends the
    /// sink and pauses playback. A failed sink call aborts the capture but
    /// leaves the scene untouched.
    #[tracing::instrument(skip(self, player, stage, scene))]
    pub fn tick<S: Surface>(
        &mut self,
        player: &mut Player,
        stage: &mut Stage<S>,
        scene: &SceneState,
        now: Instant,
    ) -> KinetypeResult<CaptureStatus> {
        if self.finished {
            return Ok(CaptureStatus::Finished);
        }

        if now >= self.deadline {
            self.finished = true;
            player.pause(now);
            self.sink.end()?;
            tracing::debug!(frames = self.next_index, "capture finished");
            return Ok(CaptureStatus::Finished);
        }

        let progress = player.tick(now);
        stage.render(scene, progress, player.direction());
        self.sink.capture_frame(self.next_index, progress)?;
        self.next_index += 1;
        Ok(CaptureStatus::Rolling)
    }

    /// Recover the sink after the capture is over.
    pub fn into_sink(self) -> K {
        self.sink
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
