//! A small feed-forward neural network trained online with backpropagation.
//!
//! - Dense row-major `Matrix` with in-place and allocating operations
//! - `NeuralNetwork` over an arbitrary stack of layers, He-initialized
//! - ReLU hidden layers and a sigmoid output by default
//! - Per-sample gradient descent via `train`, inference via `feedforward`

pub mod activations;
pub mod error;
pub mod matrix;
pub mod network;
pub mod loss;
pub mod metrics;
pub mod utils;

pub use activations::Activation;
pub use error::{NnError, Result};
pub use matrix::Matrix;
pub use network::NeuralNetwork;
pub use loss::mse_loss;
pub use metrics::mean_squared_error;
pub use utils::{model_summary, print_model_summary, print_summary_table};
