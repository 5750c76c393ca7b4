use std::path::Path;

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use viewer3ds::{
    asset::{self, FlatBuffers},
    cli::Cli,
    config::ViewerConfig,
    ViewerApp,
};

/// Reads and flattens the model, naming the file in any error
fn load_model(path: &Path) -> anyhow::Result<FlatBuffers> {
    asset::load_scene(path)
        .and_then(asset::flatten)
        .with_context(|| format!("Could not load model '{}'", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::from(cli);
    let path = config.model_path.clone();

    let buffers = match load_model(&path) {
        Ok(buffers) => buffers,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Loaded '{}': {} triangles, texture coordinates: {}",
        path.display(),
        buffers.triangle_count(),
        buffers.has_tex_coords()
    );

    ViewerApp::new(config, buffers)?.run()
}
