use crate::{
    animation::lerp::stable_lerp,
    foundation::core::{Dimension, Point, ResolveCtx},
    transform::transformation::Transformation,
};

/// Descriptor for a size tween between two per-axis scale factors.
///
/// Factors are plain multipliers (`1.0` = unchanged). The pivot the scaling
/// happens about is a per-axis [`Dimension`], resolved like translate deltas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scale {
    /// X factor at progress `0.0`.
    pub from_x: f64,
    /// X factor at progress `1.0`.
    pub to_x: f64,
    /// Y factor at progress `0.0`.
    pub from_y: f64,
    /// Y factor at progress `1.0`.
    pub to_y: f64,
    /// Horizontal pivot position.
    pub pivot_x: Dimension,
    /// Vertical pivot position.
    pub pivot_y: Dimension,
}

impl Scale {
    /// Scale about the widget origin.
    pub fn new(from_x: f64, to_x: f64, from_y: f64, to_y: f64) -> Self {
        Self::about(from_x, to_x, from_y, to_y, Dimension::ZERO, Dimension::ZERO)
    }

    /// Full form: scale about a pivot given as per-axis unit-kind + magnitude.
    pub fn about(
        from_x: f64,
        to_x: f64,
        from_y: f64,
        to_y: f64,
        pivot_x: Dimension,
        pivot_y: Dimension,
    ) -> Self {
        Self {
            from_x,
            to_x,
            from_y,
            to_y,
            pivot_x,
            pivot_y,
        }
    }

    /// Resolve the pivot to absolute pixels for the current bounds.
    pub fn resolve(&self, ctx: &ResolveCtx) -> ResolvedScale {
        ResolvedScale {
            from_x: self.from_x,
            to_x: self.to_x,
            from_y: self.from_y,
            to_y: self.to_y,
            pivot: Point::new(ctx.resolve_x(self.pivot_x), ctx.resolve_y(self.pivot_y)),
        }
    }
}

/// Scale factors with a pivot resolved to absolute pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedScale {
    /// X factor at progress `0.0`.
    pub from_x: f64,
    /// X factor at progress `1.0`.
    pub to_x: f64,
    /// Y factor at progress `0.0`.
    pub from_y: f64,
    /// Y factor at progress `1.0`.
    pub to_y: f64,
    /// Pivot position in pixels.
    pub pivot: Point,
}

impl ResolvedScale {
    /// Scale `out` by the interpolated factors at `progress`, about the pivot.
    pub fn apply(&self, progress: f64, out: &mut Transformation) {
        let sx = stable_lerp(self.from_x, self.to_x, progress);
        let sy = stable_lerp(self.from_y, self.to_y, progress);
        out.scale_about(sx, sy, self.pivot);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scale.rs"]
mod tests;
