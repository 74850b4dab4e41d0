use thiserror::Error;

/// Errors surfaced by the motion engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FloatyError {
    #[error("unknown motion mode '{0}' (expected 'momentum' or 'bobbing')")]
    UnknownMotionMode(String),
    #[error("image index {index} out of range (scene holds {len})")]
    ImageIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, FloatyError>;
