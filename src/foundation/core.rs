pub use kurbo::{Affine, Point, Rect, Vec2};

/// How a descriptor magnitude is interpreted when turned into absolute pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Dimension {
    /// Absolute offset in pixels; resolution passes the magnitude through.
    Px(f64),
    /// Fraction of the animated widget's own size (`1.0` = 100%).
    SelfFraction(f64),
    /// Fraction of the parent widget's size (`1.0` = 100%).
    ParentFraction(f64),
}

impl Dimension {
    /// An absolute zero offset.
    pub const ZERO: Dimension = Dimension::Px(0.0);

    /// Resolve this dimension to absolute pixels against one axis pair.
    ///
    /// Negative or zero reference sizes pass through without validation; the
    /// owning widget is responsible for the dimensions it supplies.
    pub fn resolve(self, own: f64, parent: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::SelfFraction(f) => f * own,
            Self::ParentFraction(f) => f * parent,
        }
    }
}

/// Widget and parent dimensions for one sizing pass.
///
/// Resolved deltas computed against a `ResolveCtx` are valid only as long as
/// these dimensions are; owners re-resolve on every layout change.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResolveCtx {
    /// Width of the animated widget.
    pub width: f64,
    /// Height of the animated widget.
    pub height: f64,
    /// Width of the widget's parent.
    pub parent_width: f64,
    /// Height of the widget's parent.
    pub parent_height: f64,
}

impl ResolveCtx {
    /// Build a context from widget and parent dimensions.
    pub fn new(width: f64, height: f64, parent_width: f64, parent_height: f64) -> Self {
        Self {
            width,
            height,
            parent_width,
            parent_height,
        }
    }

    /// Resolve a horizontal dimension against `width`/`parent_width`.
    pub fn resolve_x(self, d: Dimension) -> f64 {
        d.resolve(self.width, self.parent_width)
    }

    /// Resolve a vertical dimension against `height`/`parent_height`.
    pub fn resolve_y(self, d: Dimension) -> f64 {
        d.resolve(self.height, self.parent_height)
    }
}
