//! Command-line arguments and their conversion into a [`ViewerConfig`]

use std::path::PathBuf;

use clap::Parser;

use crate::config::ViewerConfig;
use crate::gfx::camera::ProjectionMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "viewer3ds")]
#[command(about = "Interactive viewer for .3ds meshes", long_about = None)]
pub struct Cli {
    /// Model file to display (.3ds or .obj), relative to the working directory
    pub model: PathBuf,

    /// Initial scene scaling factor (0 - 100)
    #[arg(long, default_value_t = 1.0, value_parser = parse_scale)]
    pub scale: f64,

    /// Start in orthographic instead of perspective projection
    #[arg(long)]
    pub orthographic: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 900)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Synchronize presentation with the display refresh rate
    #[arg(long)]
    pub vsync: bool,
}

/// Accepts any finite number; range clamping happens in the config
fn parse_scale(value: &str) -> Result<f64, String> {
    let scale: f64 = value
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;
    if scale.is_finite() {
        Ok(scale)
    } else {
        Err(format!("'{}' is not a finite scale", value))
    }
}

impl From<Cli> for ViewerConfig {
    fn from(cli: Cli) -> Self {
        ViewerConfig {
            model_path: cli.model,
            initial_scale: cli.scale.clamp(0.0, 100.0),
            projection: if cli.orthographic {
                ProjectionMode::Orthographic
            } else {
                ProjectionMode::Perspective
            },
            window_size: (cli.width.max(1), cli.height.max(1)),
            vsync: cli.vsync,
            ..ViewerConfig::default()
        }
    }
}
