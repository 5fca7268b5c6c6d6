/// Convenience result type used across kinetra.
pub type KinetraResult<T> = Result<T, KinetraError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum KinetraError {
    /// Invalid user-provided descriptor or timeline data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving or sampling animations.
    #[error("animation error: {0}")]
    Animation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinetraError {
    /// Build a [`KinetraError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KinetraError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
