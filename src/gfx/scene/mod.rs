//! The loaded model and the state the viewer draws it with
//!
//! - [`Scene`] - view, input mapping, lights and the model
//! - [`GpuModel`] - attribute buffers on the GPU
//! - [`vertex`] - buffer layouts for the three attribute streams

pub mod model;
pub mod scene;
pub mod vertex;

pub use model::{DrawModel, GpuModel};
pub use scene::{ModelInfo, Scene};
