//! glowmesh viewer
//!
//! Opens a window with the particle mesh. Move the mouse (or touch) over
//! it to push particles around.
//!
//! # Usage
//!
//! ```bash
//! glowmesh
//!
//! # Reproducible layout on a dark background
//! glowmesh --seed 42 --background '#101010'
//!
//! # Per-resize and FPS logging
//! glowmesh --log-level debug
//! ```

use clap::Parser;
use glowmesh::{MeshError, MeshWindow, Rgb};

/// Pointer-reactive particle mesh
#[derive(Parser, Debug)]
#[command(name = "glowmesh")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial window width in logical pixels
    #[arg(long, default_value = "1280")]
    width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value = "720")]
    height: f64,

    /// Seed for particle placement
    #[arg(long)]
    seed: Option<u64>,

    /// Background color as #rgb or #rrggbb
    #[arg(long, default_value = "#ffffff")]
    background: Rgb,

    /// Logging filter; RUST_LOG takes precedence
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), MeshError> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .init();

    log::info!("starting glowmesh {}", env!("CARGO_PKG_VERSION"));

    let mut window = MeshWindow::new()
        .with_inner_size(cli.width, cli.height)
        .with_background(cli.background);
    if let Some(seed) = cli.seed {
        window = window.with_seed(seed);
    }

    window.run()
}
