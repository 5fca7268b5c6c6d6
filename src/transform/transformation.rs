//! Accumulated transformation state for one sampled frame.

use crate::foundation::core::{Affine, Point, Vec2};

/// Visual placement produced by sampling animations: an affine matrix plus an
/// alpha in `[0, 1]`.
///
/// Operations compose in world space, newest applied last; sampling several
/// animations into the same value stacks their effects. All mutation happens
/// through `&mut self` borrows, so the value can never be aliased while a
/// motion writes into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformation {
    matrix: Affine,
    alpha: f64,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation {
    /// The identity matrix with full opacity.
    pub fn identity() -> Self {
        Self {
            matrix: Affine::IDENTITY,
            alpha: 1.0,
        }
    }

    /// Current affine matrix.
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Current alpha in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Restore the identity matrix and full opacity.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Translate the current placement by `delta` pixels.
    pub fn translate(&mut self, delta: Vec2) {
        self.matrix = Affine::translate(delta) * self.matrix;
    }

    /// Scale the current placement about the origin.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.matrix = Affine::scale_non_uniform(sx, sy) * self.matrix;
    }

    /// Scale the current placement about `pivot`.
    pub fn scale_about(&mut self, sx: f64, sy: f64, pivot: Point) {
        self.matrix = about(pivot, Affine::scale_non_uniform(sx, sy)) * self.matrix;
    }

    /// Rotate the current placement about the origin by `radians`.
    pub fn rotate(&mut self, radians: f64) {
        self.matrix = Affine::rotate(radians) * self.matrix;
    }

    /// Rotate the current placement about `pivot` by `radians`.
    pub fn rotate_about(&mut self, radians: f64, pivot: Point) {
        self.matrix = about(pivot, Affine::rotate(radians)) * self.matrix;
    }

    /// Set the alpha, clamped to `[0, 1]`.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Apply `other` on top of this transformation.
    ///
    /// Matrices multiply (`other` applied last), alphas multiply.
    pub fn compose(&mut self, other: &Transformation) {
        self.matrix = other.matrix * self.matrix;
        self.alpha *= other.alpha;
    }
}

// Conjugates `inner` with the pivot translation:
// T(pivot) * inner * T(-pivot)
fn about(pivot: Point, inner: Affine) -> Affine {
    Affine::translate(pivot.to_vec2()) * inner * Affine::translate(-pivot.to_vec2())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/transformation.rs"]
mod tests;
