//! Global uniform bindings for camera and lighting data
//!
//! One uniform block is bound at group 0 for every pipeline. It carries the
//! projection and model-view matrices plus the three lights in eye space.

use crate::{
    gfx::{camera::CameraUniform, lighting::LightRig},
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

/// Global ambient term applied to every fragment
pub const GLOBAL_AMBIENT: [f32; 4] = [0.2, 0.2, 0.2, 1.0];

/// Diffuse reflectance of the model surface
pub const MATERIAL_DIFFUSE: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

/// One light as laid out in `lit.wgsl`
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 4],
    pub diffuse: [f32; 4],
    pub enabled: u32,
    _padding: [u32; 3],
}

/// Global uniform buffer content
///
/// MUST match the `Globals` struct in `lit.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    pub projection: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    pub lights: [LightUniform; 3],
    pub ambient: [f32; 4],
    pub material_diffuse: [f32; 4],
}
// 64 + 64 + 3 * 48 + 16 + 16 = 304 bytes

impl GlobalUBOContent {
    pub fn new(camera: CameraUniform, rig: &LightRig) -> Self {
        let lights = rig.lights().map(|light| LightUniform {
            position: light.position,
            diffuse: light.diffuse,
            enabled: light.enabled as u32,
            _padding: [0; 3],
        });

        Self {
            projection: camera.projection,
            model_view: camera.model_view,
            lights,
            ambient: GLOBAL_AMBIENT,
            material_diffuse: MATERIAL_DIFFUSE,
        }
    }
}

pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Bind group layout and bind group for the globals uniform, bound to slot 0
pub struct GlobalBindings {
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[binding_types::uniform_entry(0)],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        Self { layout, bind_group }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
