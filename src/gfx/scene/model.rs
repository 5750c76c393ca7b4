use log::info;

use crate::{asset::FlatBuffers, wgpu_utils::create_vertex_buffer};

use super::vertex::{NORMAL_SLOT, POSITION_SLOT, TEX_COORD_SLOT};

/// The flattened model living in GPU vertex buffers
///
/// Buffers are created once at start-up and dropped with the model.
pub struct GpuModel {
    positions: wgpu::Buffer,
    normals: wgpu::Buffer,
    tex_coords: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl GpuModel {
    /// Uploads the three attribute arrays
    ///
    /// Returns `None` for an empty model; there is nothing to draw and wgpu
    /// rejects zero-sized vertex buffers.
    pub fn upload(device: &wgpu::Device, buffers: &FlatBuffers) -> Option<Self> {
        if buffers.is_empty() {
            info!("Model has no triangles, skipping upload");
            return None;
        }

        let positions = create_vertex_buffer(device, "Model Positions", &buffers.positions);
        let normals = create_vertex_buffer(device, "Model Normals", &buffers.normals);
        let tex_coords = buffers
            .tex_coords
            .as_deref()
            .map(|coords| create_vertex_buffer(device, "Model Texture Coordinates", coords));

        info!(
            "Uploaded {} vertices ({} triangles, texture coordinates: {})",
            buffers.vertex_count(),
            buffers.triangle_count(),
            tex_coords.is_some()
        );

        Some(Self {
            positions,
            normals,
            tex_coords,
            vertex_count: buffers.vertex_count() as u32,
        })
    }

    pub fn has_tex_coords(&self) -> bool {
        self.tex_coords.is_some()
    }
}

pub trait DrawModel<'a> {
    /// Binds the model's buffers and issues one non-indexed draw
    ///
    /// With `textured` set, the texture coordinate buffer is bound too when
    /// the model has one.
    fn draw_model(&mut self, model: &'a GpuModel, textured: bool);
}

impl<'a, 'b> DrawModel<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_model(&mut self, model: &'b GpuModel, textured: bool) {
        self.set_vertex_buffer(POSITION_SLOT, model.positions.slice(..));
        self.set_vertex_buffer(NORMAL_SLOT, model.normals.slice(..));
        if textured {
            if let Some(tex_coords) = &model.tex_coords {
                self.set_vertex_buffer(TEX_COORD_SLOT, tex_coords.slice(..));
            }
        }
        self.draw(0..model.vertex_count, 0..1);
    }
}
