//! Loss functions for evaluating network outputs.
use crate::error::{NnError, Result};

/// MSE loss
pub fn mse_loss(pred: &[f64], target: &[f64]) -> Result<f64> {
    if pred.len() != target.len() {
        return Err(NnError::ShapeMismatch {
            op: "mse_loss",
            left: (pred.len(), 1),
            right: (target.len(), 1),
        });
    }
    if pred.is_empty() {
        return Ok(0.0);
    }
    Ok(pred
        .iter()
        .zip(target)
        .map(|(&p, &t)| (p - t).powi(2))
        .sum::<f64>()
        / pred.len() as f64)
}
