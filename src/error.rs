use thiserror::Error;

/// Errors raised by the numeric primitives.
///
/// Overflow in the unstabilized softmax and `log(0)` under
/// `ProbabilityPolicy::Raw` are not errors; they surface as inf/NaN values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("softmax of an empty sequence is undefined")]
    EmptyInput,

    #[error("non-finite input {value} at index {index}")]
    NonFinite { index: usize, value: f64 },

    #[error("length mismatch: {labels} labels vs {predictions} predictions")]
    LengthMismatch { labels: usize, predictions: usize },

    #[error("probability {value} at index {index} is outside (0, 1)")]
    Domain { index: usize, value: f64 },

    #[error("clamp epsilon {epsilon} must lie in (0, 0.5)")]
    InvalidEpsilon { epsilon: f64 },

    #[error("shape mismatch: expected {expected}, found {found}")]
    Shape { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, NumericError>;
