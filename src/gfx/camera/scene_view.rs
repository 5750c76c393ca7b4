use cgmath::{frustum, ortho, Deg, Matrix4, Vector3, Zero};

use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform, OPENGL_TO_WGPU_MATRIX};

/// One full turn in slider units (1/16 of a degree)
pub const FULL_TURN: i32 = 360 * 16;

/// Distance from the eye to the scene origin before any offset
pub const SCENE_DEPTH: f32 = 10.0;

/// Offset change per second while a pan key is held
pub const PAN_SPEED: f32 = 2.0;

/// Offset change per `pan_horizontal`/`pan_vertical` direction unit
pub const PAN_STEP: f32 = 0.1;

pub const MIN_SCALE: f32 = 0.0;
pub const MAX_SCALE: f32 = 100.0;

const NEAR: f32 = 4.0;
const FAR: f32 = 15.0;
const FRUSTUM_HALF_EXTENT: f32 = 0.5;
// Ortho box sized to frame the origin plane like the frustum does
const ORTHO_HALF_EXTENT: f32 = FRUSTUM_HALF_EXTENT * SCENE_DEPTH / NEAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

/// Wraps an angle in slider units into `0..=FULL_TURN`
///
/// `FULL_TURN` itself is left alone so a slider at its maximum stays there.
pub fn normalize_angle(mut angle: i32) -> i32 {
    while angle < 0 {
        angle += FULL_TURN;
    }
    while angle > FULL_TURN {
        angle -= FULL_TURN;
    }
    angle
}

/// Held-key motion state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MotionFlags {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Scene orientation, offset, scale and projection
///
/// The scene sits `SCENE_DEPTH` units in front of a fixed eye, is rotated
/// about X, Y then Z, shifted by `-position` and finally scaled.
#[derive(Debug, Clone, Copy)]
pub struct SceneView {
    pub x_rot: i32,
    pub y_rot: i32,
    pub z_rot: i32,
    pub position: Vector3<f32>,
    pub scale: f32,
    pub projection: ProjectionMode,
    pub motion: MotionFlags,
    default_scale: f32,
    default_projection: ProjectionMode,
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new(1.0, ProjectionMode::Perspective)
    }
}

impl Camera for SceneView {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.model_view_matrix()
    }
}

impl SceneView {
    pub fn new(scale: f32, projection: ProjectionMode) -> Self {
        let scale = if scale.is_finite() {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            1.0
        };
        Self {
            x_rot: 0,
            y_rot: 0,
            z_rot: 0,
            position: Vector3::zero(),
            scale,
            projection,
            motion: MotionFlags::default(),
            default_scale: scale,
            default_projection: projection,
        }
    }

    pub fn set_x_rotation(&mut self, angle: i32) -> bool {
        Self::set_angle(&mut self.x_rot, angle)
    }

    pub fn set_y_rotation(&mut self, angle: i32) -> bool {
        Self::set_angle(&mut self.y_rot, angle)
    }

    pub fn set_z_rotation(&mut self, angle: i32) -> bool {
        Self::set_angle(&mut self.z_rot, angle)
    }

    /// Stores the normalized angle, reporting whether it changed
    fn set_angle(slot: &mut i32, angle: i32) -> bool {
        let angle = normalize_angle(angle);
        if angle != *slot {
            *slot = angle;
            true
        } else {
            false
        }
    }

    /// Moves the eye toward the scene
    pub fn forward(&mut self, amount: f32) {
        self.position.z -= amount;
    }

    /// Moves the eye away from the scene
    pub fn backward(&mut self, amount: f32) {
        self.position.z += amount;
    }

    pub fn strafe_left(&mut self, held: bool) {
        self.motion.left = held;
    }

    pub fn strafe_right(&mut self, held: bool) {
        self.motion.right = held;
    }

    pub fn raise(&mut self, held: bool) {
        self.motion.up = held;
    }

    pub fn lower(&mut self, held: bool) {
        self.motion.down = held;
    }

    /// Negative moves the view left, positive right
    pub fn pan_horizontal(&mut self, direction: i32) {
        self.position.x += direction as f32 * PAN_STEP;
    }

    /// Negative moves the view down, positive up
    pub fn pan_vertical(&mut self, direction: i32) {
        self.position.y += direction as f32 * PAN_STEP;
    }

    /// Applies held-key motion for `dt` seconds, returning whether anything moved
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.motion.any() {
            return false;
        }

        let step = PAN_SPEED * dt;
        if self.motion.up {
            self.position.y += step;
        }
        if self.motion.down {
            self.position.y -= step;
        }
        if self.motion.left {
            self.position.x -= step;
        }
        if self.motion.right {
            self.position.x += step;
        }
        true
    }

    /// Clamps to `MIN_SCALE..=MAX_SCALE`; non-finite input is ignored
    pub fn set_scaling(&mut self, scale: f64) {
        let scale = scale as f32;
        if scale.is_finite() {
            self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    pub fn set_projection(&mut self, projection: ProjectionMode) {
        self.projection = projection;
    }

    /// Puts rotation, offset, scale and projection back to their start values
    pub fn master_reset(&mut self) {
        *self = Self::new(self.default_scale, self.default_projection);
    }

    pub fn model_view_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::new(0.0, 0.0, -SCENE_DEPTH))
            * Matrix4::from_angle_x(Deg(self.x_rot as f32 / 16.0))
            * Matrix4::from_angle_y(Deg(self.y_rot as f32 / 16.0))
            * Matrix4::from_angle_z(Deg(self.z_rot as f32 / 16.0))
            * Matrix4::from_translation(-self.position)
            * Matrix4::from_scale(self.scale)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let proj = match self.projection {
            ProjectionMode::Perspective => frustum(
                -FRUSTUM_HALF_EXTENT,
                FRUSTUM_HALF_EXTENT,
                -FRUSTUM_HALF_EXTENT,
                FRUSTUM_HALF_EXTENT,
                NEAR,
                FAR,
            ),
            ProjectionMode::Orthographic => ortho(
                -ORTHO_HALF_EXTENT,
                ORTHO_HALF_EXTENT,
                -ORTHO_HALF_EXTENT,
                ORTHO_HALF_EXTENT,
                NEAR,
                FAR,
            ),
        };
        OPENGL_TO_WGPU_MATRIX * proj
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            projection: convert_matrix4_to_array(self.projection_matrix()),
            model_view: convert_matrix4_to_array(self.model_view_matrix()),
        }
    }
}

/// Largest centered square inside the surface, as `(x, y, side, side)`
pub fn square_viewport(width: u32, height: u32) -> (f32, f32, f32, f32) {
    let side = width.min(height);
    (
        ((width - side) / 2) as f32,
        ((height - side) / 2) as f32,
        side as f32,
        side as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::{InnerSpace, Vector4};

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0), 0);
        assert_eq!(normalize_angle(-16), FULL_TURN - 16);
        assert_eq!(normalize_angle(FULL_TURN), FULL_TURN);
        assert_eq!(normalize_angle(FULL_TURN + 32), 32);
        assert_eq!(normalize_angle(-3 * FULL_TURN - 1), FULL_TURN - 1);
    }

    #[test]
    fn test_set_rotation_reports_change() {
        let mut view = SceneView::default();
        assert!(view.set_x_rotation(90 * 16));
        assert!(!view.set_x_rotation(90 * 16));
        assert!(!view.set_x_rotation(90 * 16 + FULL_TURN));
        assert!(view.set_y_rotation(-16));
        assert_eq!(view.y_rot, FULL_TURN - 16);
    }

    #[test]
    fn test_identity_view_places_origin_at_scene_depth() {
        let view = SceneView::default();
        let origin = view.model_view_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(origin.z, -SCENE_DEPTH);
    }

    #[test]
    fn test_origin_projects_inside_depth_range() {
        for mode in [ProjectionMode::Perspective, ProjectionMode::Orthographic] {
            let view = SceneView::new(1.0, mode);
            let clip = view.build_view_projection_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
            let depth = clip.z / clip.w;
            assert!(depth > 0.0 && depth < 1.0, "{:?} depth {}", mode, depth);
        }
    }

    #[test]
    fn test_rotation_about_y() {
        let mut view = SceneView::default();
        view.set_y_rotation(90 * 16);
        let p = view.model_view_matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, -SCENE_DEPTH - 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_scale_applies_after_offset() {
        let mut view = SceneView::default();
        view.set_scaling(2.0);
        view.pan_horizontal(10);
        let p = view.model_view_matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(p.x, 2.0 - 10.0 * PAN_STEP, epsilon = 1e-5);
    }

    #[test]
    fn test_forward_and_backward() {
        let mut view = SceneView::default();
        view.forward(0.2);
        assert_relative_eq!(view.position.z, -0.2);
        view.backward(5.0);
        assert_relative_eq!(view.position.z, 4.8, epsilon = 1e-5);
    }

    #[test]
    fn test_held_keys_move_over_time() {
        let mut view = SceneView::default();
        assert!(!view.update(1.0));

        view.raise(true);
        view.strafe_left(true);
        assert!(view.update(0.5));
        assert_relative_eq!(view.position.y, PAN_SPEED * 0.5);
        assert_relative_eq!(view.position.x, -PAN_SPEED * 0.5);

        view.raise(false);
        view.strafe_left(false);
        assert!(!view.update(0.5));
    }

    #[test]
    fn test_scaling_is_clamped() {
        let mut view = SceneView::default();
        view.set_scaling(-3.0);
        assert_eq!(view.scale, 0.0);
        view.set_scaling(1000.0);
        assert_eq!(view.scale, MAX_SCALE);
    }

    #[test]
    fn test_non_finite_scale_keeps_previous_value() {
        let mut view = SceneView::default();
        view.set_scaling(3.0);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300] {
            view.set_scaling(bad);
            assert_eq!(view.scale, 3.0);
        }

        let view = SceneView::new(f32::NAN, ProjectionMode::Perspective);
        assert_eq!(view.scale, 1.0);
        assert!(view.model_view_matrix().x.x.is_finite());
    }

    #[test]
    fn test_master_reset_restores_start_values() {
        let mut view = SceneView::new(2.5, ProjectionMode::Orthographic);
        view.set_x_rotation(100);
        view.set_z_rotation(200);
        view.forward(3.0);
        view.set_scaling(7.0);
        view.set_projection(ProjectionMode::Perspective);
        view.raise(true);

        view.master_reset();

        assert_eq!((view.x_rot, view.y_rot, view.z_rot), (0, 0, 0));
        assert_eq!(view.position.magnitude(), 0.0);
        assert_eq!(view.scale, 2.5);
        assert_eq!(view.projection, ProjectionMode::Orthographic);
        assert!(!view.motion.any());
    }

    #[test]
    fn test_square_viewport() {
        assert_eq!(square_viewport(800, 600), (100.0, 0.0, 600.0, 600.0));
        assert_eq!(square_viewport(400, 1000), (0.0, 300.0, 400.0, 400.0));
        assert_eq!(square_viewport(512, 512), (0.0, 0.0, 512.0, 512.0));
    }
}
