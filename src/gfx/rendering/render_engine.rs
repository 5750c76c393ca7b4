//! wgpu rendering engine for the model viewer
//!
//! Owns the surface, device and queue, the depth buffer, the globals uniform
//! and the two lit pipelines. Each frame is a single scene pass followed by
//! the UI overlay.

use std::sync::Arc;

use anyhow::Context;
use log::{debug, info, warn};
use wgpu::TextureFormat;

use crate::gfx::{
    camera::square_viewport,
    resources::{GlobalBindings, GlobalUBO, GlobalUBOContent, TextureResource},
    scene::{vertex, DrawModel, Scene},
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};

pub const LIT_PIPELINE: &str = "Lit";
pub const LIT_TEXTURED_PIPELINE: &str = "LitTextured";

/// Fifo when vsync is wanted, otherwise Immediate if the surface offers it
pub fn select_present_mode(vsync: bool, available: &[wgpu::PresentMode]) -> wgpu::PresentMode {
    if !vsync && available.contains(&wgpu::PresentMode::Immediate) {
        wgpu::PresentMode::Immediate
    } else {
        wgpu::PresentMode::Fifo
    }
}

/// First non-sRGB format, falling back to whatever comes first
pub fn select_surface_format(formats: &[TextureFormat]) -> Option<TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    pub pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
}

impl RenderEngine {
    /// Creates the engine for `window` at the given surface size
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> anyhow::Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("Failed to create a rendering surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find a suitable GPU adapter")?;
        info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Failed to create a GPU device")?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = select_surface_format(&surface_capabilities.formats)
            .context("Surface reports no supported formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: select_present_mode(vsync, &surface_capabilities.present_modes),
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        debug!("Surface configured: {:?} {:?}", config.format, config.present_mode);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let global_bindings = GlobalBindings::new(&device, &global_ubo);

        let device_handle: Arc<wgpu::Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader("lit", include_str!("lit.wgsl"));

        let base = PipelineConfig::default()
            .with_shader("lit")
            .with_color_format(format)
            .with_depth_stencil(TextureResource::DEPTH_FORMAT)
            .with_bind_group_layouts(vec![global_bindings.layout().clone()]);

        pipeline_manager.register_pipeline(
            LIT_PIPELINE,
            base.clone()
                .with_label("LIT")
                .with_vertex_layouts(vertex::lit_layouts()),
        );
        pipeline_manager.register_pipeline(
            LIT_TEXTURED_PIPELINE,
            base.with_label("LIT TEXTURED")
                .with_entry_points("vs_textured", "fs_textured")
                .with_vertex_layouts(vertex::textured_layouts()),
        );

        pipeline_manager
            .create_all_pipelines()
            .map_err(|errors| anyhow::anyhow!(errors.join("; ")))
            .context("Failed to build render pipelines")?;

        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_texture,
            format,
            pipeline_manager,
            global_ubo,
            global_bindings,
        })
    }

    /// Renders the scene then hands the encoder to `ui_callback` for the overlay
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame<F>(&mut self, scene: &Scene, ui_callback: F) -> Result<(), wgpu::SurfaceError>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Timed out waiting for the next surface texture");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(scene.lights.wgpu_clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            let (x, y, width, height) = square_viewport(self.config.width, self.config.height);
            render_pass.set_viewport(x, y, width, height, 0.0, 1.0);

            if let Some(model) = scene.model() {
                let textured = scene.draw_textured() && model.has_tex_coords();
                let name = if textured {
                    LIT_TEXTURED_PIPELINE
                } else {
                    LIT_PIPELINE
                };

                if let Some(pipeline) = self.pipeline_manager.get_pipeline(name) {
                    render_pass.set_pipeline(pipeline);
                    render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);
                    render_pass.draw_model(model, textured);
                }
            }
        }

        ui_callback(
            &self.device,
            &self.queue,
            &mut encoder,
            &surface_texture_view,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Writes the per-frame globals
    pub fn update(&mut self, globals: GlobalUBOContent) {
        self.global_ubo.update_content(&self.queue, globals);
    }

    /// Resizes the surface and depth buffer; zero-sized requests are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> TextureFormat {
        self.format
    }
}
