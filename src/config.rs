//! Viewer start-up settings

use std::path::PathBuf;

use crate::gfx::camera::ProjectionMode;

/// Settings the viewer starts with
///
/// Built from the command line in `main`; everything here can be changed
/// afterwards through the control panel except the model path and window
/// title.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub model_path: PathBuf,
    pub window_title: String,
    /// Logical window size in pixels
    pub window_size: (u32, u32),
    pub initial_scale: f64,
    pub projection: ProjectionMode,
    pub vsync: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::new(),
            window_title: "3DS Model Viewer".to_string(),
            window_size: (900, 600),
            initial_scale: 1.0,
            projection: ProjectionMode::Perspective,
            vsync: false,
        }
    }
}
