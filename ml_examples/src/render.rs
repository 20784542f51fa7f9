//! Paint network outputs onto a block canvas and write it as PPM.
use anyhow::{Context, Result};
use color_mlp::NeuralNetwork;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// RGB pixel buffer painted in `resolution × resolution` blocks.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    resolution: usize,
    pixels: Vec<[u8; 3]>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, resolution: usize) -> Self {
        Self {
            width,
            height,
            resolution,
            pixels: vec![[0, 0, 0]; width * height],
        }
    }

    /// Number of blocks across.
    pub fn cols(&self) -> usize {
        self.width / self.resolution
    }

    /// Number of blocks down.
    pub fn rows(&self) -> usize {
        self.height / self.resolution
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.pixels[y * self.width + x]
    }

    /// Fill block `(i, j)` (column, row) with `rgb`.
    pub fn fill_block(&mut self, i: usize, j: usize, rgb: [u8; 3]) {
        let x0 = i * self.resolution;
        let y0 = j * self.resolution;
        for y in y0..(y0 + self.resolution).min(self.height) {
            let row = y * self.width;
            for x in x0..(x0 + self.resolution).min(self.width) {
                self.pixels[row + x] = rgb;
            }
        }
    }

    /// Binary PPM (P6) encoding.
    pub fn to_ppm(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        out.reserve(self.pixels.len() * 3);
        for p in &self.pixels {
            out.extend_from_slice(p);
        }
        out
    }

    pub fn write_ppm(&self, path: &Path) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut w = BufWriter::new(file);
        w.write_all(&self.to_ppm())?;
        w.flush()?;
        Ok(())
    }
}

/// Scale network outputs in [0, 1] to 8-bit channels. A single output is
/// drawn as gray.
pub fn to_rgb(output: &[f64]) -> [u8; 3] {
    // NaN casts to 0
    let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    match output {
        [v] => [channel(*v); 3],
        _ => {
            let mut rgb = [0u8; 3];
            for (c, &v) in rgb.iter_mut().zip(output) {
                *c = channel(v);
            }
            rgb
        }
    }
}

/// Query the network at the normalized coordinate of every block.
pub fn render_frame(nn: &NeuralNetwork, canvas: &mut Canvas) -> color_mlp::Result<()> {
    let (cols, rows) = (canvas.cols(), canvas.rows());
    for i in 0..cols {
        for j in 0..rows {
            let x1 = i as f64 / cols as f64;
            let x2 = j as f64 / rows as f64;
            let output = nn.feedforward(&[x1, x2])?;
            canvas.fill_block(i, j, to_rgb(&output));
        }
    }
    Ok(())
}
