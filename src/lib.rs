//! Interactive viewer for `.3ds` meshes
//!
//! Loads a model, flattens it into position, normal and texture coordinate
//! arrays, uploads them as vertex buffers and draws them with three adjustable
//! lights under an imgui control panel.

pub mod app;
pub mod asset;
pub mod cli;
pub mod config;
pub mod error;
pub mod gfx;
pub mod wgpu_utils;

pub use app::ViewerApp;
pub use error::AssetError;
