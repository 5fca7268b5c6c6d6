use crate::{
    animation::lerp::stable_lerp,
    foundation::core::{Dimension, ResolveCtx, Vec2},
    transform::transformation::Transformation,
};

/// Descriptor for a position tween between two 2D offsets.
///
/// Each endpoint is a per-axis [`Dimension`], so a motion can be specified in
/// absolute pixels or as a fraction of the widget's (or its parent's) size.
/// The descriptor is read-only after construction; resolution against the
/// current bounds produces a [`ResolvedTranslate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Translate {
    /// X offset applied at progress `0.0`.
    pub from_x: Dimension,
    /// X offset applied at progress `1.0`.
    pub to_x: Dimension,
    /// Y offset applied at progress `0.0`.
    pub from_y: Dimension,
    /// Y offset applied at progress `1.0`.
    pub to_y: Dimension,
}

impl Translate {
    /// Full form: per-axis unit-kind plus magnitude.
    pub fn new(from_x: Dimension, to_x: Dimension, from_y: Dimension, to_y: Dimension) -> Self {
        Self {
            from_x,
            to_x,
            from_y,
            to_y,
        }
    }

    /// Convenience form: absolute pixel deltas on both axes.
    pub fn by_px(from_x: f64, to_x: f64, from_y: f64, to_y: f64) -> Self {
        Self::new(
            Dimension::Px(from_x),
            Dimension::Px(to_x),
            Dimension::Px(from_y),
            Dimension::Px(to_y),
        )
    }

    /// Resolve all four deltas to absolute pixels for the current bounds.
    ///
    /// X dimensions resolve against `width`/`parent_width`, Y dimensions
    /// against `height`/`parent_height`.
    pub fn resolve(&self, ctx: &ResolveCtx) -> ResolvedTranslate {
        ResolvedTranslate {
            from: Vec2::new(ctx.resolve_x(self.from_x), ctx.resolve_y(self.from_y)),
            to: Vec2::new(ctx.resolve_x(self.to_x), ctx.resolve_y(self.to_y)),
        }
    }
}

/// Translate deltas resolved to absolute pixels for one sizing pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTranslate {
    /// Pixel delta at progress `0.0`.
    pub from: Vec2,
    /// Pixel delta at progress `1.0`.
    pub to: Vec2,
}

impl ResolvedTranslate {
    /// Translate `out` by the interpolated delta at `progress`.
    ///
    /// Axes interpolate independently; a motionless axis returns its endpoint
    /// exactly. Progress is consumed as given — the timeline normalizes it.
    pub fn apply(&self, progress: f64, out: &mut Transformation) {
        let dx = stable_lerp(self.from.x, self.to.x, progress);
        let dy = stable_lerp(self.from.y, self.to.y, progress);
        out.translate(Vec2::new(dx, dy));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/translate.rs"]
mod tests;
