use crate::{
    animation::motion::{Motion, ResolvedMotion},
    animation::timeline::{Playback, Timeline},
    foundation::core::ResolveCtx,
    foundation::error::{KinetraError, KinetraResult},
    transform::transformation::Transformation,
};

/// Owner of one animation: a motion descriptor plus its timeline.
///
/// The animator is exclusively owned and single-threaded; the host drives it
/// from whatever loop runs layout and drawing. It holds no clock — elapsed
/// time comes in with every sample, so sampling is pure and repeatable.
#[derive(Clone, Debug)]
pub struct Animator {
    motion: Motion,
    timeline: Timeline,
    resolved: Option<ResolvedMotion>,
}

impl Animator {
    /// Build an animator, validating the timeline up front.
    pub fn new(motion: impl Into<Motion>, timeline: Timeline) -> KinetraResult<Self> {
        timeline.validate()?;
        Ok(Self {
            motion: motion.into(),
            timeline,
            resolved: None,
        })
    }

    #[tracing::instrument(skip(self))]
    /// Resolve the motion's unit-kinds against the current bounds.
    ///
    /// Discards the previous sizing pass and recomputes every delta. Called by
    /// the owner on animation (re)start and on every layout change.
    pub fn initialize(&mut self, ctx: &ResolveCtx) {
        self.resolved = Some(self.motion.resolve(ctx));
    }

    /// Whether [`Animator::initialize`] has run since construction.
    pub fn is_initialized(&self) -> bool {
        self.resolved.is_some()
    }

    #[tracing::instrument(skip(self, out))]
    /// Sample the animation at `elapsed_secs` into `out`.
    ///
    /// The timeline normalizes elapsed time to iteration progress, then the
    /// resolved motion is applied to `out` in place. Whether a `Pending` or
    /// `Finished` sample is applied at all follows the timeline's fill flags.
    ///
    /// Errors with [`KinetraError::Animation`] when the animator was never
    /// initialized with widget bounds.
    pub fn sample(&self, elapsed_secs: f64, out: &mut Transformation) -> KinetraResult<Playback> {
        let Some(resolved) = &self.resolved else {
            return Err(KinetraError::animation(
                "animator sampled before initialize resolved widget bounds",
            ));
        };
        let s = self.timeline.sample(elapsed_secs);
        let applies = match s.playback {
            Playback::Pending => self.timeline.fill_before,
            Playback::Running => true,
            Playback::Finished => self.timeline.fill_after,
        };
        if applies {
            resolved.apply(s.progress, out);
        }
        Ok(s.playback)
    }

    /// The motion descriptor this animator owns.
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// The timeline this animator owns.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
