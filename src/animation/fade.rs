use crate::{
    animation::lerp::stable_lerp, foundation::core::ResolveCtx,
    transform::transformation::Transformation,
};

/// Descriptor for an opacity tween between two alpha values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fade {
    /// Alpha at progress `0.0`.
    pub from: f64,
    /// Alpha at progress `1.0`.
    pub to: f64,
}

impl Fade {
    /// Fade between two alpha values (`0.0` transparent, `1.0` opaque).
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Resolution is a pass-through — a fade has no dimensioned fields.
    pub fn resolve(&self, _ctx: &ResolveCtx) -> ResolvedFade {
        ResolvedFade {
            from: self.from,
            to: self.to,
        }
    }
}

/// Fade endpoints ready for application.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedFade {
    /// Alpha at progress `0.0`.
    pub from: f64,
    /// Alpha at progress `1.0`.
    pub to: f64,
}

impl ResolvedFade {
    /// Set the alpha of `out` to the interpolated value at `progress`.
    ///
    /// [`Transformation::set_alpha`] clamps to `[0, 1]`, so out-of-range
    /// endpoints saturate instead of escaping the valid alpha range.
    pub fn apply(&self, progress: f64, out: &mut Transformation) {
        out.set_alpha(stable_lerp(self.from, self.to, progress));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/fade.rs"]
mod tests;
