//! Training samples for the demo.
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

/// `(input, target)`
pub type Sample = (Vec<f64>, Vec<f64>);

/// Which training set the demo learns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Dataset {
    ColorCorners,
    Xor,
}

impl Dataset {
    pub fn samples(self) -> Vec<Sample> {
        match self {
            Dataset::ColorCorners => color_corners(),
            Dataset::Xor => xor_samples(),
        }
    }

    /// Output layer size the samples require.
    pub fn output_size(self) -> usize {
        match self {
            Dataset::ColorCorners => 3,
            Dataset::Xor => 1,
        }
    }
}

/// Colorful XOR: each unit-square corner mapped to a color.
pub fn color_corners() -> Vec<Sample> {
    vec![
        (vec![0.0, 0.0], vec![1.0, 0.0, 0.0]), // red
        (vec![0.0, 1.0], vec![0.0, 1.0, 0.0]), // green
        (vec![1.0, 0.0], vec![0.0, 0.0, 1.0]), // blue
        (vec![1.0, 1.0], vec![0.0, 1.0, 1.0]), // cyan
    ]
}

/// Two-bit XOR with a single output.
pub fn xor_samples() -> Vec<Sample> {
    vec![
        (vec![0.0, 0.0], vec![0.0]),
        (vec![0.0, 1.0], vec![1.0]),
        (vec![1.0, 0.0], vec![1.0]),
        (vec![1.0, 1.0], vec![0.0]),
    ]
}

/// Shuffled copy of `data`; `data` itself is untouched.
pub fn shuffled<R: Rng + ?Sized>(data: &[Sample], rng: &mut R) -> Vec<Sample> {
    let mut batch = data.to_vec();
    batch.as_mut_slice().shuffle(rng);
    batch
}
