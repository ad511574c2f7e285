use thiserror::Error;

/// Configuration errors caught at construction time, before the step loop
/// ever runs.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum WorldError {
    #[error("mass must be finite and non-negative, got {0}")]
    InvalidMass(f32),
    #[error("dynamic body needs a positive moment of inertia, got {0}")]
    InvalidInertia(f32),
    #[error("shape dimension must be positive, got {0}")]
    InvalidShape(f32),
    #[error("no body at index {0}")]
    NoSuchBody(usize),
    #[error("rotary limit range is empty: [{0}, {1}]")]
    EmptyLimitRange(f32, f32),
}
