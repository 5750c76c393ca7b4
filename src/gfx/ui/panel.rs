use imgui::{Condition, TreeNodeFlags, Ui};

use crate::gfx::{
    camera::{scene_view::FULL_TURN, ProjectionMode},
    lighting::{Channel, CHANNEL_MAX, CHANNEL_MIN},
    scene::Scene,
};

/// Step of the scaling factor input
pub const SCALE_STEP: f32 = 0.05;

/// Builds the control window and applies any edits to `scene`
pub fn control_panel(ui: &Ui, scene: &mut Scene) {
    ui.window("Controls")
        .size([320.0, 560.0], Condition::FirstUseEver)
        .position([10.0, 10.0], Condition::FirstUseEver)
        .build(|| {
            rotation_group(ui, scene);
            projection_group(ui, scene);
            lighting_group(ui, scene);
            model_group(ui, scene);
        });
}

fn rotation_group(ui: &Ui, scene: &mut Scene) {
    if !ui.collapsing_header("Scene Rotation", TreeNodeFlags::DEFAULT_OPEN) {
        return;
    }

    let view = &mut scene.view;
    let mut x = view.x_rot;
    if ui.slider("Around X Axis", 0, FULL_TURN, &mut x) {
        view.set_x_rotation(x);
    }
    let mut y = view.y_rot;
    if ui.slider("Around Y Axis", 0, FULL_TURN, &mut y) {
        view.set_y_rotation(y);
    }
    let mut z = view.z_rot;
    if ui.slider("Around Z Axis", 0, FULL_TURN, &mut z) {
        view.set_z_rotation(z);
    }
}

fn projection_group(ui: &Ui, scene: &mut Scene) {
    if !ui.collapsing_header("Projection Mode", TreeNodeFlags::DEFAULT_OPEN) {
        return;
    }

    let mut mode = scene.view.projection;
    let mut changed = ui.radio_button("Perspective", &mut mode, ProjectionMode::Perspective);
    ui.same_line();
    changed |= ui.radio_button("Orthographic", &mut mode, ProjectionMode::Orthographic);
    if changed {
        scene.view.set_projection(mode);
    }

    if ui.button("Scene Reset") {
        scene.view.master_reset();
    }
    ui.same_line();
    if ui.button("Fit") {
        scene.fit_to_model();
    }

    let mut scale = scene.view.scale;
    if ui
        .input_float("Scene Scaling Factor", &mut scale)
        .step(SCALE_STEP)
        .build()
    {
        scene.view.set_scaling(scale as f64);
    }
}

fn lighting_group(ui: &Ui, scene: &mut Scene) {
    if !ui.collapsing_header("Scene Lighting", TreeNodeFlags::DEFAULT_OPEN) {
        return;
    }

    let lights = &mut scene.lights;
    if ui.button("Room Light") {
        lights.toggle_room();
    }
    ui.same_line();
    if ui.button("Right Light") {
        lights.toggle_right();
    }
    ui.same_line();
    if ui.button("Left Light") {
        lights.toggle_left();
    }
    ui.text(format!(
        "Room: {}  Right: {}  Left: {}",
        on_off(lights.room_on),
        on_off(lights.right_on),
        on_off(lights.left_on)
    ));

    for (label, channel) in [
        ("Red", Channel::Red),
        ("Green", Channel::Green),
        ("Blue", Channel::Blue),
    ] {
        let mut value = lights.aux_value(channel);
        if ui.slider(label, CHANNEL_MIN, CHANNEL_MAX, &mut value) {
            lights.set_aux(channel, value);
        }
    }
}

fn model_group(ui: &Ui, scene: &mut Scene) {
    if !ui.collapsing_header("Model", TreeNodeFlags::DEFAULT_OPEN) {
        return;
    }

    let info = &scene.info;
    ui.text(format!("File: {}", info.file_name));
    ui.text(format!("Triangles: {}", info.triangle_count));
    ui.text(format!(
        "Texture coordinates: {}",
        if info.has_tex_coords { "yes" } else { "no" }
    ));

    let has_tex_coords = info.has_tex_coords;
    ui.disabled(!has_tex_coords, || {
        ui.checkbox("Show texture coordinates", &mut scene.show_tex_coords);
    });
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}
