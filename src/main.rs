// src/main.rs

use anyhow::Context;
use log::{debug, error, info};

use mandelbrot_hsv::{config::Config, encoder, timing::timed};

/// Main entry point for the `mandelbrot-hsv` renderer.
///
/// Any failure is logged once with its full context chain and the process
/// exits with status 1.
fn main() {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting mandelbrot-hsv...");

    if let Err(e) = run() {
        error!("Render failed: {:#}", e);
        std::process::exit(1);
    }

    info!("Done.");
}

fn run() -> anyhow::Result<()> {
    // --- Configuration ---
    let config = Config::load().context("Failed to load configuration")?;
    let view = config.validate()?;
    info!(
        "View: {}x{} pixels, scale {}, center {:?}",
        view.grid_size(),
        view.grid_size(),
        view.scale(),
        view.center()
    );

    if config.render.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.render.threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }
    debug!("Render pool has {} threads", rayon::current_num_threads());

    // --- Render and encode, one image per backend ---
    for kind in &config.render.backends {
        let backend = kind.create();
        let label = backend.label();
        info!("Rendering with {} backend ({} bytes)", label, view.buffer_len());

        let frame = timed(label, || backend.render(&view))
            .with_context(|| format!("{} backend failed to render", label))?;

        let path = config.output.path_for(label);
        encoder::write_png(frame, &path)?;
    }

    Ok(())
}
