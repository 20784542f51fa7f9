//! Fully-connected feed-forward network trained one sample at a time.
use crate::activations::Activation;
use crate::error::{NnError, Result};
use crate::matrix::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, error};

const DEFAULT_LEARNING_RATE: f64 = 0.1;
const BIAS_INIT_SCALE: f64 = 0.1;

/// NeuralNetwork
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    /// Node count per layer, input first, output last.
    layer_sizes: Vec<usize>,
    /// `weights[i]` maps layer `i` to layer `i + 1`, shape `(sizes[i+1], sizes[i])`.
    weights: Vec<Matrix>,
    /// `biases[i]` is a column vector of length `sizes[i+1]`.
    biases: Vec<Matrix>,
    learning_rate: f64,
    hidden_activation: Activation,
    output_activation: Activation,
}

impl NeuralNetwork {
    /// Create a network with thread-local randomness.
    ///
    /// - `layer_sizes`: input count, any number of hidden sizes, output count
    pub fn new(layer_sizes: &[usize]) -> Result<Self> {
        Self::with_rng(layer_sizes, &mut rand::thread_rng())
    }

    /// Create a network whose initial parameters depend only on `seed`.
    pub fn with_seed(layer_sizes: &[usize], seed: u64) -> Result<Self> {
        Self::with_rng(layer_sizes, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a network drawing initial parameters from `rng`.
    ///
    /// Weights are He-initialized (Gaussian scaled by `sqrt(2 / n_in)`),
    /// biases are Gaussian scaled by 0.1.
    pub fn with_rng<R: Rng + ?Sized>(layer_sizes: &[usize], rng: &mut R) -> Result<Self> {
        if layer_sizes.len() < 2 {
            return Err(NnError::InvalidArchitecture(format!(
                "need at least an input and an output layer, got {:?}",
                layer_sizes
            )));
        }
        if let Some(pos) = layer_sizes.iter().position(|&n| n == 0) {
            return Err(NnError::InvalidArchitecture(format!(
                "layer {} has zero nodes in {:?}",
                pos, layer_sizes
            )));
        }

        let mut weights = Vec::with_capacity(layer_sizes.len() - 1);
        let mut biases = Vec::with_capacity(layer_sizes.len() - 1);
        for pair in layer_sizes.windows(2) {
            let (n_in, n_out) = (pair[0], pair[1]);

            let mut weight = Matrix::new(n_out, n_in);
            weight
                .randomize_gaussian(rng)
                .multiply_scalar((2.0 / n_in as f64).sqrt());
            weights.push(weight);

            let mut bias = Matrix::new(n_out, 1);
            bias.randomize_gaussian(rng).multiply_scalar(BIAS_INIT_SCALE);
            biases.push(bias);
        }

        let nn = Self {
            layer_sizes: layer_sizes.to_vec(),
            weights,
            biases,
            learning_rate: DEFAULT_LEARNING_RATE,
            hidden_activation: Activation::ReLU,
            output_activation: Activation::Sigmoid,
        };
        debug!(
            layer_sizes = ?nn.layer_sizes,
            parameters = nn.parameter_count(),
            "initialized network"
        );
        Ok(nn)
    }

    /// Replace the hidden and output activations.
    pub fn with_activations(mut self, hidden: Activation, output: Activation) -> Self {
        self.hidden_activation = hidden;
        self.output_activation = output;
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Set the step size used by [`train`](Self::train). Must be positive and finite.
    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(NnError::InvalidLearningRate(learning_rate));
        }
        self.learning_rate = learning_rate;
        Ok(())
    }

    pub fn hidden_activation(&self) -> Activation {
        self.hidden_activation
    }

    pub fn output_activation(&self) -> Activation {
        self.output_activation
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Matrix] {
        &self.biases
    }

    pub fn input_size(&self) -> usize {
        self.layer_sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.layer_sizes[self.layer_sizes.len() - 1]
    }

    /// Total number of weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.layer_sizes
            .windows(2)
            .map(|pair| pair[0] * pair[1] + pair[1])
            .sum()
    }

    /// Forward pass from input to output.
    ///
    /// Fails with [`NnError::InputSizeMismatch`] when `input` does not have
    /// exactly `layer_sizes[0]` values.
    pub fn feedforward(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;
        let mut current = Matrix::from_array(input);
        for i in 0..self.weights.len() {
            current = self.layer_forward(i, &current);
        }
        Ok(current.to_array())
    }

    /// One step of stochastic gradient descent on a single sample.
    ///
    /// Weights move by `gradient · aᵀ` where `gradient = f'(a) ⊙ error ⊙ lr`
    /// and the output error is `target - output`, so the deltas are added.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        self.check_input(input)?;
        if target.len() != self.output_size() {
            error!(
                expected = self.output_size(),
                actual = target.len(),
                "target size does not match network output size"
            );
            return Err(NnError::TargetSizeMismatch {
                expected: self.output_size(),
                actual: target.len(),
            });
        }

        // Forward, keeping every activation (activations[0] is the input)
        let mut activations = Vec::with_capacity(self.layer_sizes.len());
        activations.push(Matrix::from_array(input));
        for i in 0..self.weights.len() {
            let next = self.layer_forward(i, &activations[i]);
            activations.push(next);
        }

        let last = self.weights.len() - 1;
        let outputs = &activations[last + 1];
        let targets = Matrix::from_array(target);

        // Output layer
        let output_errors = Matrix::subtract(&targets, outputs);
        let output_activation = self.output_activation;
        let mut gradients = Matrix::mapped(outputs, |y| output_activation.derivative(y));
        gradients
            .multiply(&output_errors)
            .multiply_scalar(self.learning_rate);
        let delta = Matrix::dot(&gradients, &Matrix::transpose(&activations[last]));
        self.weights[last].add(&delta);
        self.biases[last].add(&gradients);

        // Hidden layers, last to first. W[i + 1] has already been updated.
        let hidden_activation = self.hidden_activation;
        let mut next_errors = output_errors;
        for i in (0..last).rev() {
            let errors = Matrix::dot(&Matrix::transpose(&self.weights[i + 1]), &next_errors);

            let mut gradients =
                Matrix::mapped(&activations[i + 1], |y| hidden_activation.derivative(y));
            gradients
                .multiply(&errors)
                .multiply_scalar(self.learning_rate);

            let delta = Matrix::dot(&gradients, &Matrix::transpose(&activations[i]));
            self.weights[i].add(&delta);
            self.biases[i].add(&gradients);

            next_errors = errors;
        }
        Ok(())
    }

    /// `act(W_i · a + b_i)`, output activation on the last transition.
    fn layer_forward(&self, i: usize, a: &Matrix) -> Matrix {
        let activation = if i == self.weights.len() - 1 {
            self.output_activation
        } else {
            self.hidden_activation
        };
        let mut z = Matrix::dot(&self.weights[i], a);
        z.add(&self.biases[i]).map(|x| activation.apply(x));
        z
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_size() {
            error!(
                expected = self.input_size(),
                actual = input.len(),
                "input size does not match network input size"
            );
            return Err(NnError::InputSizeMismatch {
                expected: self.input_size(),
                actual: input.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for NeuralNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NeuralNetwork: {:?} (lr={}, hidden={}, output={})",
            self.layer_sizes, self.learning_rate, self.hidden_activation, self.output_activation
        )
    }
}
