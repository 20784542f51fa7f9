// ml_examples/src/main.rs
mod app;
mod config;
mod data;
mod render;

use anyhow::{Context, Result};
use app::App;
use color_mlp::{print_model_summary, print_summary_table};
use config::DemoConfig;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = DemoConfig::load(config_path.as_deref())?;
    info!(?config, "loaded configuration");

    println!("=== {:?} ===", config.dataset);
    let mut app = App::new(config)?;
    print_model_summary(app.network());

    let output_dir = app.config().output_dir.clone();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let frames = app.config().frames;
    let save_every = app.config().save_every;
    let mut losses = Vec::with_capacity(frames);
    for frame in 0..frames {
        let loss = app.step_frame()?;
        if let Some(loss) = loss {
            losses.push(loss);
        }

        if frame % save_every == 0 || frame + 1 == frames {
            let path = output_dir.join(format!("frame_{:04}.ppm", frame));
            app.canvas().write_ppm(&path)?;
            info!(frame, ?loss, path = %path.display(), "wrote frame");
        } else {
            debug!(frame, ?loss, "trained frame");
        }
    }

    print_summary_table(&losses, "Training MSE");
    for (input, target) in app.config().dataset.samples() {
        let out = app.network().feedforward(&input)?;
        println!("{:?} -> {:.3?} (target {:?})", input, out, target);
    }
    Ok(())
}
