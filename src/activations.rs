//! Activation functions.
//!
//! Derivatives are written in terms of the activation's *output* `y`, which
//! is what the network keeps around after a forward pass. For ReLU the sign
//! of `y` agrees with the sign of the pre-activation, so the post-activation
//! form gives the same mask.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Activation kinds supported by [`NeuralNetwork`](crate::NeuralNetwork).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activation {
    /// max(0, x)
    ReLU,
    /// 1 / (1 + exp(-x))
    Sigmoid,
    /// tanh(x)
    Tanh,
    /// identity
    Linear,
}

impl Activation {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            // NaN passes through
            Activation::ReLU => {
                if x < 0.0 {
                    0.0
                } else {
                    x
                }
            }
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::Linear => x,
        }
    }

    /// Derivative evaluated at the post-activation value `y = apply(x)`.
    pub fn derivative(self, y: f64) -> f64 {
        match self {
            Activation::ReLU => {
                if y > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Sigmoid => y * (1.0 - y),
            Activation::Tanh => 1.0 - y * y,
            Activation::Linear => 1.0,
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
