use thiserror::Error;

/// Custom error type for the picograd engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum PicogradError {
    #[error("Node index {index} out of bounds for graph of {len} nodes")]
    NodeOutOfBounds { index: usize, len: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual} during operation {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} requires at least one operand")]
    EmptyInput { operation: String },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid initializer: {0}")]
    InvalidInitializer(String),

    #[error("Invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: String, value: f64 },

    #[error("Loss became non-finite ({value}) at step {step}")]
    NonFiniteLoss { step: usize, value: f64 },

    #[error("Cannot rewind graph to {mark}: the first {parameters} nodes are parameters")]
    RewindBelowParameters { mark: usize, parameters: usize },
}
