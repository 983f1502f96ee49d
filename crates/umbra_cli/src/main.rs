//! Render the built-in showcase scene to a PPM file.
//!
//! Set `RUST_LOG=info` to see render progress.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use umbra_renderer::{presets, render, save_ppm, Camera, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "umbra", about = "Whitted-style ray tracer writing plain PPM images")]
struct Args {
    /// Output image path
    #[arg(default_value = "out.ppm")]
    output: PathBuf,

    /// JSON render configuration; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    let (scene, lights) = presets::showcase().context("Failed to build showcase scene")?;
    let image = render(&scene, &lights, &Camera::default(), &config).context("Render failed")?;

    save_ppm(&args.output, &image)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}
