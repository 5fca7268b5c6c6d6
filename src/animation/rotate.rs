use crate::{
    animation::lerp::stable_lerp,
    foundation::core::{Dimension, Point, ResolveCtx},
    transform::transformation::Transformation,
};

/// Descriptor for a rotation tween between two angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rotate {
    /// Angle in degrees at progress `0.0`.
    pub from_degrees: f64,
    /// Angle in degrees at progress `1.0`.
    pub to_degrees: f64,
    /// Horizontal pivot position.
    pub pivot_x: Dimension,
    /// Vertical pivot position.
    pub pivot_y: Dimension,
}

impl Rotate {
    /// Rotate about the widget origin.
    pub fn new(from_degrees: f64, to_degrees: f64) -> Self {
        Self::about(from_degrees, to_degrees, Dimension::ZERO, Dimension::ZERO)
    }

    /// Full form: rotate about a pivot given as per-axis unit-kind + magnitude.
    pub fn about(
        from_degrees: f64,
        to_degrees: f64,
        pivot_x: Dimension,
        pivot_y: Dimension,
    ) -> Self {
        Self {
            from_degrees,
            to_degrees,
            pivot_x,
            pivot_y,
        }
    }

    /// Resolve the pivot to absolute pixels for the current bounds.
    pub fn resolve(&self, ctx: &ResolveCtx) -> ResolvedRotate {
        ResolvedRotate {
            from_degrees: self.from_degrees,
            to_degrees: self.to_degrees,
            pivot: Point::new(ctx.resolve_x(self.pivot_x), ctx.resolve_y(self.pivot_y)),
        }
    }
}

/// Rotation angles with a pivot resolved to absolute pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRotate {
    /// Angle in degrees at progress `0.0`.
    pub from_degrees: f64,
    /// Angle in degrees at progress `1.0`.
    pub to_degrees: f64,
    /// Pivot position in pixels.
    pub pivot: Point,
}

impl ResolvedRotate {
    /// Rotate `out` by the interpolated angle at `progress`, about the pivot.
    ///
    /// Interpolation happens in degrees; conversion to radians is done once on
    /// the interpolated angle.
    pub fn apply(&self, progress: f64, out: &mut Transformation) {
        let degrees = stable_lerp(self.from_degrees, self.to_degrees, progress);
        out.rotate_about(degrees.to_radians(), self.pivot);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/rotate.rs"]
mod tests;
