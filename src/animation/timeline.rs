use crate::foundation::error::{KinetraError, KinetraResult};

/// Number of times a timeline plays beyond its first run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RepeatCount {
    /// Repeat `n` additional times after the first play (`0` = play once).
    Finite(u32),
    /// Repeat until the owner stops sampling.
    Infinite,
}

/// How repeated iterations map local time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RepeatMode {
    /// Every iteration plays forward from progress `0` to `1`.
    Restart,
    /// Odd iterations play backward, bouncing across the duration.
    Reverse,
}

/// Playback phase reported by [`Timeline::sample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// The delay has not elapsed yet.
    Pending,
    /// Inside one of the timeline's iterations.
    Running,
    /// Past the final iteration of a finite timeline.
    Finished,
}

/// Timing state of one animation: delay, duration and repeat behavior.
///
/// A timeline is pure arithmetic over caller-supplied elapsed time; it holds
/// no clock and no mutable state. Timing curves are out of scope — progress
/// is linear in elapsed time, and the consumer shapes it if it wants to.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Seconds before the first iteration starts.
    pub delay_secs: f64,
    /// Length of one iteration in seconds. Must be finite and `> 0`.
    pub duration_secs: f64,
    /// Number of additional iterations after the first.
    pub repeat: RepeatCount,
    /// Local-time mapping for repeated iterations.
    pub repeat_mode: RepeatMode,
    /// Hold the first-frame value during the delay.
    pub fill_before: bool,
    /// Hold the terminal value after the final iteration.
    pub fill_after: bool,
}

/// One sampled point of a timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSample {
    /// Normalized progress in `[0, 1]` within the sampled iteration.
    pub progress: f64,
    /// Zero-based iteration the sample falls in (the last one when finished).
    pub iteration: u64,
    /// Playback phase at the sampled time.
    pub playback: Playback,
}

impl Timeline {
    /// A timeline that plays once, immediately, holding its terminal value.
    pub fn once(duration_secs: f64) -> Self {
        Self {
            delay_secs: 0.0,
            duration_secs,
            repeat: RepeatCount::Finite(0),
            repeat_mode: RepeatMode::Restart,
            fill_before: true,
            fill_after: true,
        }
    }

    /// Set the start delay in seconds.
    pub fn with_delay(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    /// Set repeat count and mode.
    pub fn with_repeat(mut self, repeat: RepeatCount, mode: RepeatMode) -> Self {
        self.repeat = repeat;
        self.repeat_mode = mode;
        self
    }

    /// Set fill behavior before the delay elapses and after the final iteration.
    pub fn with_fill(mut self, before: bool, after: bool) -> Self {
        self.fill_before = before;
        self.fill_after = after;
        self
    }

    /// Validate static invariants for this timeline.
    pub fn validate(&self) -> KinetraResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(KinetraError::validation(
                "Timeline duration_secs must be finite and > 0",
            ));
        }
        if !self.delay_secs.is_finite() || self.delay_secs < 0.0 {
            return Err(KinetraError::validation(
                "Timeline delay_secs must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Total running time in seconds, or `None` for an infinite timeline.
    pub fn total_secs(&self) -> Option<f64> {
        match self.repeat {
            RepeatCount::Finite(extra) => {
                Some(self.delay_secs + self.duration_secs * (f64::from(extra) + 1.0))
            }
            RepeatCount::Infinite => None,
        }
    }

    /// Normalize caller-supplied elapsed time into iteration progress.
    ///
    /// Assumes a validated timeline. The fill flags are not consulted here;
    /// the owner decides whether a `Pending`/`Finished` sample is applied.
    pub fn sample(&self, elapsed_secs: f64) -> TimelineSample {
        let local = elapsed_secs - self.delay_secs;
        if local < 0.0 {
            return TimelineSample {
                progress: 0.0,
                iteration: 0,
                playback: Playback::Pending,
            };
        }

        if let RepeatCount::Finite(extra) = self.repeat {
            let plays = u64::from(extra) + 1;
            let total = self.duration_secs * plays as f64;
            if local >= total {
                let last = plays - 1;
                let progress = match self.repeat_mode {
                    RepeatMode::Restart => 1.0,
                    RepeatMode::Reverse => {
                        if last % 2 == 0 {
                            1.0
                        } else {
                            0.0
                        }
                    }
                };
                return TimelineSample {
                    progress,
                    iteration: last,
                    playback: Playback::Finished,
                };
            }
        }

        let mut iteration = (local / self.duration_secs).floor() as u64;
        if let RepeatCount::Finite(extra) = self.repeat {
            iteration = iteration.min(u64::from(extra));
        }
        let forward = ((local / self.duration_secs) - iteration as f64).clamp(0.0, 1.0);
        let progress = match self.repeat_mode {
            RepeatMode::Restart => forward,
            RepeatMode::Reverse => {
                if iteration % 2 == 0 {
                    forward
                } else {
                    1.0 - forward
                }
            }
        };
        TimelineSample {
            progress,
            iteration,
            playback: Playback::Running,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
