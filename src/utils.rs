//! Utility functions for reporting on a network and its training.
use crate::network::NeuralNetwork;

/// One-line-per-layer description of `nn`.
pub fn model_summary(nn: &NeuralNetwork) -> String {
    let mut out = format!("{}\n", nn);
    for (i, (w, b)) in nn.weights().iter().zip(nn.biases()).enumerate() {
        let act = if i + 1 == nn.weights().len() {
            nn.output_activation()
        } else {
            nn.hidden_activation()
        };
        out.push_str(&format!(
            "  layer {}: {} -> {} ({}, {} params)\n",
            i,
            w.cols(),
            w.rows(),
            act,
            w.rows() * w.cols() + b.rows()
        ));
    }
    out.push_str(&format!("  total params: {}", nn.parameter_count()));
    out
}

/// Print model summary
pub fn print_model_summary(nn: &NeuralNetwork) {
    println!("Model Summary:\n{}", model_summary(nn));
}

/// Print simple table for per-frame losses
pub fn print_summary_table(values: &[f64], title: &str) {
    println!("\n{} Summary Table:", title);
    println!("+----------------+----------+");
    println!("| Frame Range    | Avg Value|");
    println!("+----------------+----------+");
    if !values.is_empty() {
        let avg = values.iter().sum::<f64>() / values.len() as f64;
        println!("| All Frames     | {:>8.6} |", avg);
        if let (Some(first), Some(last)) = (values.first(), values.last()) {
            println!("| First          | {:>8.6} |", first);
            println!("| Last           | {:>8.6} |", last);
        }
    }
    println!("+----------------+----------+");
}
