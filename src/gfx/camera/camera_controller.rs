use winit::{
    event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::scene_view::SceneView;

/// Maps mouse and keyboard input onto a [`SceneView`]
///
/// - Left drag: rotate about X (vertical motion) and Y (horizontal motion)
/// - Wheel: step toward or away from the scene
/// - W/S/A/D: pan up/down/left/right while held
/// - `+`/`-`: large zoom steps
/// - Arrow keys: single pan steps
pub struct CameraController {
    /// Rotation units (1/16 degree) per pixel of drag
    pub rotate_factor: i32,
    pub wheel_step: f32,
    pub key_zoom_step: f32,
    is_mouse_pressed: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(8, 0.2, 5.0)
    }
}

impl CameraController {
    pub fn new(rotate_factor: i32, wheel_step: f32, key_zoom_step: f32) -> Self {
        Self {
            rotate_factor,
            wheel_step,
            key_zoom_step,
            is_mouse_pressed: false,
        }
    }

    /// Handles window-level input, returning whether the view changed
    pub fn process_window_event(&mut self, event: &WindowEvent, view: &mut SceneView) -> bool {
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                self.is_mouse_pressed = *state == ElementState::Pressed;
                false
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64,
                    MouseScrollDelta::PixelDelta(pos) => pos.y,
                };
                self.scroll(steps, view)
            }
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.key(code, event.state, view),
                PhysicalKey::Unidentified(_) => false,
            },
            WindowEvent::Focused(false) => {
                // Key releases are lost once focus goes elsewhere
                self.is_mouse_pressed = false;
                view.motion = Default::default();
                false
            }
            _ => false,
        }
    }

    /// Handles raw mouse motion, returning whether the view changed
    pub fn process_device_event(&mut self, event: &DeviceEvent, view: &mut SceneView) -> bool {
        match event {
            DeviceEvent::MouseMotion { delta } if self.is_mouse_pressed => {
                self.drag(delta.0.round() as i32, delta.1.round() as i32, view)
            }
            _ => false,
        }
    }

    pub fn is_rotating(&self) -> bool {
        self.is_mouse_pressed
    }

    pub fn drag(&mut self, dx: i32, dy: i32, view: &mut SceneView) -> bool {
        let x_changed = view.set_x_rotation(view.x_rot + self.rotate_factor * dy);
        let y_changed = view.set_y_rotation(view.y_rot + self.rotate_factor * dx);
        x_changed || y_changed
    }

    /// Scrolling down pulls the scene closer; any other wheel event pushes it away
    pub fn scroll(&mut self, steps: f64, view: &mut SceneView) -> bool {
        if steps < 0.0 {
            view.forward(self.wheel_step);
        } else {
            view.backward(self.wheel_step);
        }
        true
    }

    pub fn key(&mut self, code: KeyCode, state: ElementState, view: &mut SceneView) -> bool {
        let held = state == ElementState::Pressed;
        match code {
            KeyCode::KeyW => view.raise(held),
            KeyCode::KeyS => view.lower(held),
            KeyCode::KeyA => view.strafe_left(held),
            KeyCode::KeyD => view.strafe_right(held),
            KeyCode::Equal | KeyCode::NumpadAdd if held => view.forward(self.key_zoom_step),
            KeyCode::Minus | KeyCode::NumpadSubtract if held => {
                view.backward(self.key_zoom_step)
            }
            KeyCode::ArrowLeft if held => view.pan_horizontal(-1),
            KeyCode::ArrowRight if held => view.pan_horizontal(1),
            KeyCode::ArrowDown if held => view.pan_vertical(-1),
            KeyCode::ArrowUp if held => view.pan_vertical(1),
            _ => return false,
        }
        true
    }
}
