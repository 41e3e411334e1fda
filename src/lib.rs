pub mod error;
pub mod config;
pub mod math;
pub mod activation;
pub mod loss;

// Convenience re-exports
pub use error::{NumericError, Result};
pub use config::{NumericConfig, ProbabilityPolicy};
pub use math::matrix::Matrix;
pub use math::distribution::{argmax, sample_index};
pub use activation::softmax::{softmax, softmax_with, Softmax};
pub use loss::cross_entropy::{cross_entropy, cross_entropy_with, CrossEntropyLoss};
