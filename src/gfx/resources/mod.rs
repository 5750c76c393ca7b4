//! GPU resources shared across the frame: the globals uniform and the depth buffer

pub mod global_bindings;
pub mod texture_resource;

pub use global_bindings::{GlobalBindings, GlobalUBO, GlobalUBOContent, LightUniform};
pub use texture_resource::TextureResource;
