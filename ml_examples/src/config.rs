//! Demo configuration, loaded from an optional JSON file.
use crate::data::Dataset;
use anyhow::{ensure, Context, Result};
use color_mlp::Activation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub dataset: Dataset,
    /// Network shape; must start with 2 (x, y) and end with the dataset's
    /// output size (3 for r, g, b; 1 for grayscale).
    pub layer_sizes: Vec<usize>,
    pub learning_rate: f64,
    pub hidden_activation: Activation,
    pub output_activation: Activation,
    /// Canvas size in pixels.
    pub width: usize,
    pub height: usize,
    /// Edge length of the square block painted per network query.
    pub resolution: usize,
    /// Shuffled passes over the training data per frame.
    pub batches_per_frame: usize,
    pub frames: usize,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    /// Write every Nth frame; the last frame is always written.
    pub save_every: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dataset: Dataset::ColorCorners,
            layer_sizes: vec![2, 16, 16, 16, 3],
            // lower than the library default, the deep stack is less stable
            learning_rate: 0.05,
            hidden_activation: Activation::ReLU,
            output_activation: Activation::Sigmoid,
            width: 400,
            height: 400,
            resolution: 10,
            batches_per_frame: 50,
            frames: 60,
            seed: None,
            output_dir: PathBuf::from("frames"),
            save_every: 10,
        }
    }
}

impl DemoConfig {
    /// Read `path` if given, otherwise use defaults. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.layer_sizes.len() >= 2,
            "layer_sizes needs at least two entries, got {:?}",
            self.layer_sizes
        );
        ensure!(
            self.layer_sizes.first() == Some(&2),
            "first layer must have 2 inputs (x, y), got {:?}",
            self.layer_sizes
        );
        ensure!(
            self.layer_sizes.last() == Some(&self.dataset.output_size()),
            "last layer must have {} outputs for {:?}, got {:?}",
            self.dataset.output_size(),
            self.dataset,
            self.layer_sizes
        );
        ensure!(self.resolution > 0, "resolution must be positive");
        ensure!(
            self.width >= self.resolution && self.width % self.resolution == 0,
            "width {} must be a positive multiple of resolution {}",
            self.width,
            self.resolution
        );
        ensure!(
            self.height >= self.resolution && self.height % self.resolution == 0,
            "height {} must be a positive multiple of resolution {}",
            self.height,
            self.resolution
        );
        ensure!(self.save_every > 0, "save_every must be positive");
        Ok(())
    }
}
