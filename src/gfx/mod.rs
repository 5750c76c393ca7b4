//! Graphics: view and input handling, lighting, GPU resources and rendering
//!
//! - [`camera`] - scene orientation, projection and input mapping
//! - [`lighting`] - the three-light rig
//! - [`scene`] - viewer state and the uploaded model
//! - [`rendering`] - surface, pipelines and frame submission
//! - [`resources`] - globals uniform and depth buffer
//! - [`ui`] - imgui control panel

pub mod camera;
pub mod lighting;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod ui;

pub use rendering::render_engine::RenderEngine;
