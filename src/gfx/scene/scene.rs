use std::path::Path;

use cgmath::Vector3;
use log::{debug, info};

use crate::{
    asset::{Bounds, FlatBuffers},
    config::ViewerConfig,
    gfx::{
        camera::{CameraController, SceneView},
        lighting::LightRig,
        resources::GlobalUBOContent,
    },
};

use super::model::GpuModel;

/// Longest model edge after "Fit", in scene units
pub const FIT_EXTENT: f32 = 2.0;

/// Facts about the loaded model shown in the control panel
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    pub file_name: String,
    pub triangle_count: usize,
    pub has_tex_coords: bool,
    pub bounds: Option<Bounds>,
}

impl ModelInfo {
    pub fn new(path: &Path, buffers: &FlatBuffers) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            file_name,
            triangle_count: buffers.triangle_count(),
            has_tex_coords: buffers.has_tex_coords(),
            bounds: buffers.bounds(),
        }
    }
}

/// Everything the viewer shows: view, input mapping, lights and the model
pub struct Scene {
    pub view: SceneView,
    pub controller: CameraController,
    pub lights: LightRig,
    pub info: ModelInfo,
    /// Modulate the shading with a checker in texture space
    pub show_tex_coords: bool,
    pending: Option<FlatBuffers>,
    model: Option<GpuModel>,
}

impl Scene {
    pub fn new(config: &ViewerConfig, buffers: FlatBuffers) -> Self {
        let info = ModelInfo::new(&config.model_path, &buffers);
        debug!("Scene created for {:?}", info);

        Self {
            view: SceneView::new(config.initial_scale as f32, config.projection),
            controller: CameraController::default(),
            lights: LightRig::default(),
            info,
            show_tex_coords: false,
            pending: Some(buffers),
            model: None,
        }
    }

    /// Moves the CPU-side buffers to the GPU and frees them
    ///
    /// Only the first call does anything.
    pub fn upload(&mut self, device: &wgpu::Device) {
        if let Some(buffers) = self.pending.take() {
            self.model = GpuModel::upload(device, &buffers);
        }
    }

    pub fn model(&self) -> Option<&GpuModel> {
        self.model.as_ref()
    }

    pub fn is_uploaded(&self) -> bool {
        self.pending.is_none()
    }

    /// Whether the textured pipeline should be used this frame
    pub fn draw_textured(&self) -> bool {
        self.show_tex_coords && self.info.has_tex_coords
    }

    /// Advances held-key motion, returning whether the view moved
    pub fn update(&mut self, dt: f32) -> bool {
        self.view.update(dt)
    }

    pub fn globals(&self) -> GlobalUBOContent {
        GlobalUBOContent::new(self.view.uniform(), &self.lights)
    }

    /// Scales the model to `FIT_EXTENT` and centres it on the origin
    pub fn fit_to_model(&mut self) {
        let Some(bounds) = self.info.bounds else {
            return;
        };

        let scale = bounds.fit_scale(FIT_EXTENT);
        self.view.set_scaling(scale as f64);
        self.view.position = Vector3::from(bounds.center()) * self.view.scale;
        info!("Fit model: scale {:.4}", self.view.scale);
    }
}
