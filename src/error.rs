//! Error types for matrix and network operations.
use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, NnError>;

/// Errors reported by [`Matrix`](crate::Matrix) and
/// [`NeuralNetwork`](crate::NeuralNetwork).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NnError {
    /// Two matrices with incompatible shapes were combined.
    #[error("Shape mismatch in {op}: {left:?} vs {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Input vector length differs from the input layer size.
    #[error("Input size {actual} does not match network input size {expected}")]
    InputSizeMismatch { expected: usize, actual: usize },

    /// Target vector length differs from the output layer size.
    #[error("Target size {actual} does not match network output size {expected}")]
    TargetSizeMismatch { expected: usize, actual: usize },

    /// Layer-size sequence cannot describe a network.
    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    /// Learning rate must be positive and finite.
    #[error("Invalid learning rate: {0}")]
    InvalidLearningRate(f64),
}
