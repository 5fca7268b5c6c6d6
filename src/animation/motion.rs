use crate::{
    animation::fade::{Fade, ResolvedFade},
    animation::rotate::{ResolvedRotate, Rotate},
    animation::scale::{ResolvedScale, Scale},
    animation::translate::{ResolvedTranslate, Translate},
    foundation::core::ResolveCtx,
    transform::transformation::Transformation,
};

/// One animation strategy, selected by variant.
///
/// Descriptors are plain data: magnitudes and unit-kinds, no resolved pixel
/// state. Resolution against a [`ResolveCtx`] produces a [`ResolvedMotion`],
/// which is the only type that can be applied to a [`Transformation`] —
/// applying an unresolved descriptor is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum Motion {
    /// Position tween.
    Translate(Translate),
    /// Size tween about a pivot.
    Scale(Scale),
    /// Rotation tween about a pivot.
    Rotate(Rotate),
    /// Opacity tween.
    Fade(Fade),
}

impl Motion {
    /// Resolve unit-kinds to absolute pixels for the current bounds.
    pub fn resolve(&self, ctx: &ResolveCtx) -> ResolvedMotion {
        match self {
            Self::Translate(t) => ResolvedMotion::Translate(t.resolve(ctx)),
            Self::Scale(s) => ResolvedMotion::Scale(s.resolve(ctx)),
            Self::Rotate(r) => ResolvedMotion::Rotate(r.resolve(ctx)),
            Self::Fade(f) => ResolvedMotion::Fade(f.resolve(ctx)),
        }
    }
}

impl From<Translate> for Motion {
    fn from(value: Translate) -> Self {
        Self::Translate(value)
    }
}

impl From<Scale> for Motion {
    fn from(value: Scale) -> Self {
        Self::Scale(value)
    }
}

impl From<Rotate> for Motion {
    fn from(value: Rotate) -> Self {
        Self::Rotate(value)
    }
}

impl From<Fade> for Motion {
    fn from(value: Fade) -> Self {
        Self::Fade(value)
    }
}

/// A motion with all unit-kinds resolved to absolute pixels.
///
/// Valid for one sizing pass; owners re-resolve whenever the widget or parent
/// dimensions change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolvedMotion {
    /// Resolved position tween.
    Translate(ResolvedTranslate),
    /// Resolved size tween.
    Scale(ResolvedScale),
    /// Resolved rotation tween.
    Rotate(ResolvedRotate),
    /// Resolved opacity tween.
    Fade(ResolvedFade),
}

impl ResolvedMotion {
    /// Apply the interpolated value at `progress` to `out`.
    ///
    /// Mutating `out` in place is the only observable side effect of a motion.
    pub fn apply(&self, progress: f64, out: &mut Transformation) {
        match self {
            Self::Translate(t) => t.apply(progress, out),
            Self::Scale(s) => s.apply(progress, out),
            Self::Rotate(r) => r.apply(progress, out),
            Self::Fade(f) => f.apply(progress, out),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
