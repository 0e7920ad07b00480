use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("Invalid duration at point {index}: {duration}")]
    InvalidDuration { index: usize, duration: f32 },

    #[error("Spline has no control points")]
    EmptyCurve,

    #[error("Stream ended without a segment terminator after {consumed} units")]
    UnterminatedSegment { consumed: usize },

    #[error("Trailing partial group of {len} units")]
    TruncatedGroup { len: usize },

    #[error("Byte stream length {len} is not a multiple of 2")]
    OddByteLength { len: usize },

    #[error("Invalid spline mode: {0}")]
    InvalidMode(String),
}

pub type Result<T> = std::result::Result<T, SplineError>;
