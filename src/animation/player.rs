use std::time::{Duration, Instant};

use crate::animation::ease::Ease;
use crate::render::strokes::Direction;

/// Playback clock advancing interpolation progress over wall-clock time.
///
/// States are stopped/paused and playing, with an independent looping flag.
/// Time is always passed in explicitly so the host's display-refresh
/// callback drives the clock and tests can use a synthetic one. Raw elapsed
/// time maps through a quintic ease-in/out to the `progress` value fed to
/// the compositor.
#[derive(Clone, Debug)]
pub struct Player {
    playing: bool,
    looping: bool,
    cycle_secs: f64,
    /// Start of the current cycle; meaningful only while playing.
    epoch: Option<Instant>,
    /// Elapsed seconds accumulated before the last pause.
    frozen_secs: f64,
}

impl Player {
    /// Create a stopped player with the given cycle duration in seconds.
    pub fn new(cycle_secs: f64) -> Self {
        Self {
            playing: false,
            looping: false,
            cycle_secs: cycle_secs.max(f64::EPSILON),
            epoch: None,
            frozen_secs: 0.0,
        }
    }

    /// Update the cycle duration (live setting); non-positive or non-finite
    /// input is a no-op.
    pub fn set_cycle_secs(&mut self, secs: f64) {
        if secs.is_finite() && secs > 0.0 {
            self.cycle_secs = secs;
        }
    }

    /// Cycle duration in seconds.
    pub fn cycle_secs(&self) -> f64 {
        self.cycle_secs
    }

    /// Whether the clock is currently advancing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the cycle restarts on completion.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Toggle looping; independent of the play state.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Stroke animation direction derived from play state: grow while the
    /// clock advances, shrink (fully drawn at rest) otherwise.
    pub fn direction(&self) -> Direction {
        if self.playing {
            Direction::Grow
        } else {
            Direction::Shrink
        }
    }

    /// Start or resume playback; the epoch is re-anchored so progress
    /// continues from the frozen value without jumping.
    pub fn play(&mut self, now: Instant) {
        if self.playing {
            return;
        }
        // A completed non-looping run resumes from the top.
        if self.frozen_secs >= self.cycle_secs {
            self.frozen_secs = 0.0;
        }
        self.epoch = now.checked_sub(Duration::from_secs_f64(self.frozen_secs));
        if self.epoch.is_none() {
            self.epoch = Some(now);
            self.frozen_secs = 0.0;
        }
        self.playing = true;
    }

    /// Freeze progress at its current value.
    pub fn pause(&mut self, now: Instant) {
        if !self.playing {
            return;
        }
        if let Some(epoch) = self.epoch {
            self.frozen_secs = now.duration_since(epoch).as_secs_f64();
        }
        self.playing = false;
        self.epoch = None;
    }

    /// Explicit play/pause toggle.
    pub fn toggle_play(&mut self, now: Instant) {
        if self.playing {
            self.pause(now);
        } else {
            self.play(now);
        }
    }

    /// Restart playback from elapsed zero (used by export capture).
    pub fn restart(&mut self, now: Instant) {
        self.frozen_secs = 0.0;
        self.epoch = Some(now);
        self.playing = true;
    }

    /// Advance the clock and return the eased progress for this tick.
    ///
    /// On reaching raw progress 1: looping resets the epoch so the next
    /// cycle starts from elapsed zero; otherwise playback stops and holds
    /// at 1.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let Some(epoch) = self.epoch.filter(|_| self.playing) else {
            return self.frozen_progress();
        };

        let raw = now.duration_since(epoch).as_secs_f64() / self.cycle_secs;
        if raw >= 1.0 {
            if self.looping {
                self.epoch = Some(now);
                return Ease::InOutQuint.apply(0.0);
            }
            self.playing = false;
            self.epoch = None;
            self.frozen_secs = self.cycle_secs;
            return 1.0;
        }
        Ease::InOutQuint.apply(raw)
    }

    fn frozen_progress(&self) -> f64 {
        Ease::InOutQuint.apply((self.frozen_secs / self.cycle_secs).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/player.rs"]
mod tests;
