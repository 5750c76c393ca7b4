//! Vertex buffer layouts for the flattened attribute streams
//!
//! Positions, normals and texture coordinates live in separate buffers, one
//! per slot, rather than interleaved.

use std::mem::size_of;

pub const POSITION_SLOT: u32 = 0;
pub const NORMAL_SLOT: u32 = 1;
pub const TEX_COORD_SLOT: u32 = 2;

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const NORMAL_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];
const TEX_COORD_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32x2];

pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRIBUTES,
    }
}

pub fn normal_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &NORMAL_ATTRIBUTES,
    }
}

pub fn tex_coord_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<[f32; 2]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &TEX_COORD_ATTRIBUTES,
    }
}

/// Layouts for the untextured pipeline, in slot order
pub fn lit_layouts() -> Vec<wgpu::VertexBufferLayout<'static>> {
    vec![position_layout(), normal_layout()]
}

/// Layouts for the pipeline that also reads texture coordinates
pub fn textured_layouts() -> Vec<wgpu::VertexBufferLayout<'static>> {
    vec![position_layout(), normal_layout(), tex_coord_layout()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_match_slots() {
        let layouts = textured_layouts();
        for (slot, layout) in layouts.iter().enumerate() {
            assert_eq!(layout.attributes.len(), 1);
            assert_eq!(layout.attributes[0].shader_location, slot as u32);
            assert_eq!(layout.attributes[0].offset, 0);
        }
        assert_eq!(layouts[TEX_COORD_SLOT as usize].array_stride, 8);
        assert_eq!(layouts[NORMAL_SLOT as usize].array_stride, 12);
    }

    #[test]
    fn test_lit_is_prefix_of_textured() {
        let lit = lit_layouts();
        let textured = textured_layouts();
        assert_eq!(lit.len() + 1, textured.len());
        assert_eq!(lit[POSITION_SLOT as usize], textured[POSITION_SLOT as usize]);
    }
}
