//! Small wgpu helpers shared by the renderer
//!
//! Typed uniform buffers, vertex buffer upload and binding type shortcuts.

pub mod binding_types;
pub mod uniform_buffer;

pub use binding_types::*;
pub use uniform_buffer::{create_vertex_buffer, UniformBuffer};
