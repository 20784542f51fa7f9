//! Metrics for evaluating a network over a set of samples.
use crate::error::Result;
use crate::loss::mse_loss;
use crate::network::NeuralNetwork;

/// Mean over `dataset` of the per-sample MSE between prediction and target.
///
/// Returns 0 for an empty dataset.
pub fn mean_squared_error(dataset: &[(Vec<f64>, Vec<f64>)], model: &NeuralNetwork) -> Result<f64> {
    if dataset.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for (input, target) in dataset {
        let pred = model.feedforward(input)?;
        total += mse_loss(&pred, target)?;
    }
    Ok(total / dataset.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NnError;

    #[test]
    fn test_mse_is_bounded_for_sigmoid_outputs() {
        let nn = NeuralNetwork::with_seed(&[2, 3, 2], 11).unwrap();
        let data = vec![
            (vec![0.0, 0.0], vec![1.0, 0.0]),
            (vec![1.0, 1.0], vec![0.0, 1.0]),
        ];
        let mse = mean_squared_error(&data, &nn).unwrap();
        assert!((0.0..=1.0).contains(&mse));
    }

    #[test]
    fn test_bad_sample_propagates_error() {
        let nn = NeuralNetwork::with_seed(&[2, 1], 11).unwrap();
        let data = vec![(vec![0.0, 0.0, 0.0], vec![1.0])];
        assert_eq!(
            mean_squared_error(&data, &nn),
            Err(NnError::InputSizeMismatch {
                expected: 2,
                actual: 3
            })
        );
    }
}
