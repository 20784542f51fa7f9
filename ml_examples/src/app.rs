//! Owned training and rendering state for the color demo.
use crate::config::DemoConfig;
use crate::data::{shuffled, Sample};
use crate::render::{render_frame, Canvas};
use anyhow::{Context, Result};
use color_mlp::{mean_squared_error, NeuralNetwork};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

pub struct App {
    config: DemoConfig,
    network: NeuralNetwork,
    data: Vec<Sample>,
    rng: StdRng,
    canvas: Canvas,
}

impl App {
    pub fn new(config: DemoConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let network = build_network(&config, &mut rng)?;
        let canvas = Canvas::new(config.width, config.height, config.resolution);
        let data = config.dataset.samples();
        info!(dataset = ?config.dataset, network = %network, "created app");
        Ok(Self {
            config,
            network,
            data,
            rng,
            canvas,
        })
    }

    /// Replace the network with a freshly initialized one.
    pub fn reset(&mut self) -> Result<()> {
        self.network = build_network(&self.config, &mut self.rng)?;
        info!(network = %self.network, "reset network");
        Ok(())
    }

    /// Run `batches_per_frame` shuffled passes over the data, then report
    /// the mean squared error on it.
    pub fn train_step(&mut self) -> Result<f64> {
        for _ in 0..self.config.batches_per_frame {
            for (input, target) in shuffled(&self.data, &mut self.rng) {
                self.network.train(&input, &target)?;
            }
        }
        Ok(mean_squared_error(&self.data, &self.network)?)
    }

    pub fn render_step(&mut self) -> Result<()> {
        render_frame(&self.network, &mut self.canvas)?;
        Ok(())
    }

    /// Train, then redraw the canvas. A non-finite error resets the network
    /// before drawing and yields `None`, so the canvas is always current.
    pub fn step_frame(&mut self) -> Result<Option<f64>> {
        let loss = self.train_step()?;
        let loss = if loss.is_finite() {
            Some(loss)
        } else {
            warn!(loss, "training diverged, resetting network");
            self.reset()?;
            None
        };
        self.render_step()?;
        Ok(loss)
    }

    pub fn network(&self) -> &NeuralNetwork {
        &self.network
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }
}

fn build_network(config: &DemoConfig, rng: &mut StdRng) -> Result<NeuralNetwork> {
    let mut network = NeuralNetwork::with_rng(&config.layer_sizes, rng)
        .with_context(|| format!("Failed to build network {:?}", config.layer_sizes))?
        .with_activations(config.hidden_activation, config.output_activation);
    network.set_learning_rate(config.learning_rate)?;
    Ok(network)
}
