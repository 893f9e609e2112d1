use thiserror::Error;

/// Configuration errors raised while building the scene rigs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("at least 2 section poses are required, got {0}")]
    TooFewSections(usize),
    #[error("camera ease must be in (0, 1], got {0}")]
    InvalidEase(f32),
    #[error("viewer distance range is empty: min {min} > max {max}")]
    InvalidDistanceRange { min: f32, max: f32 },
    #[error("viewer damping must be in (0, 1], got {0}")]
    InvalidDamping(f32),
    #[error("viewer zoom step must be in (0, 1), got {0}")]
    InvalidZoomStep(f32),
}

/// Validation errors from the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("contact field `{0}` is empty")]
    MissingField(&'static str),
}
