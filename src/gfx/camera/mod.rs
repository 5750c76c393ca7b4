pub mod camera_controller;
pub mod camera_utils;
pub mod scene_view;

// Re-export main types
pub use camera_controller::CameraController;
pub use camera_utils::{Camera, CameraUniform};
pub use scene_view::{normalize_angle, square_viewport, ProjectionMode, SceneView};
