//! Three-light rig: a fixed room light plus two coloured side lights
//!
//! Light positions are given in eye space. `w = 1` marks a positional light,
//! `w = 0` a directional one.

/// Slider bounds for the side-light colour channels
pub const CHANNEL_MIN: i32 = 1;
pub const CHANNEL_MAX: i32 = 99;

pub const ROOM_LIGHT_POSITION: [f32; 4] = [0.0, 0.9, 0.5, 1.0];
pub const RIGHT_LIGHT_POSITION: [f32; 4] = [1.0, 0.0, 0.1, 0.0];
pub const LEFT_LIGHT_POSITION: [f32; 4] = [-1.0, 0.0, 0.1, 0.0];

/// Background while the room light is on
pub const LIT_BACKGROUND: [f32; 3] = [0.375, 0.375, 0.375];
/// Background while the room light is off
pub const DARK_BACKGROUND: [f32; 3] = [0.075, 0.075, 0.075];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: [f32; 4],
    pub diffuse: [f32; 4],
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    pub room_on: bool,
    pub right_on: bool,
    pub left_on: bool,
    /// Raw slider values for the right light, red/green/blue/alpha
    pub aux: [i32; 4],
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            room_on: true,
            right_on: true,
            left_on: true,
            aux: [CHANNEL_MAX, 10, 10, 0],
        }
    }
}

impl LightRig {
    /// Flips the room light, returning its new state
    pub fn toggle_room(&mut self) -> bool {
        self.room_on = !self.room_on;
        log::debug!("Room light {}", if self.room_on { "on" } else { "off" });
        self.room_on
    }

    pub fn toggle_right(&mut self) -> bool {
        self.right_on = !self.right_on;
        self.right_on
    }

    pub fn toggle_left(&mut self) -> bool {
        self.left_on = !self.left_on;
        self.left_on
    }

    /// Sets one colour channel of the right light, clamped to the slider range
    pub fn set_aux(&mut self, channel: Channel, value: i32) {
        self.aux[channel.index()] = value.clamp(CHANNEL_MIN, CHANNEL_MAX);
    }

    pub fn aux_value(&self, channel: Channel) -> i32 {
        self.aux[channel.index()]
    }

    /// Diffuse colour of the right light: each channel over 100
    pub fn right_diffuse(&self) -> [f32; 4] {
        self.aux.map(|v| v as f32 / 100.0)
    }

    /// Diffuse colour of the left light
    ///
    /// Mirrors the right light around 500: RGB is `(500 - v) / 100`, alpha is
    /// `500 - v` unscaled. The shader saturates the result.
    pub fn left_diffuse(&self) -> [f32; 4] {
        let [r, g, b, a] = self.aux.map(|v| 500.0 - v as f32);
        [r / 100.0, g / 100.0, b / 100.0, a]
    }

    pub fn clear_color(&self) -> [f32; 3] {
        if self.room_on {
            LIT_BACKGROUND
        } else {
            DARK_BACKGROUND
        }
    }

    pub fn wgpu_clear_color(&self) -> wgpu::Color {
        let [r, g, b] = self.clear_color();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }

    /// Room, right and left light in shader order
    pub fn lights(&self) -> [Light; 3] {
        [
            Light {
                position: ROOM_LIGHT_POSITION,
                diffuse: [1.0, 1.0, 1.0, 1.0],
                enabled: self.room_on,
            },
            Light {
                position: RIGHT_LIGHT_POSITION,
                diffuse: self.right_diffuse(),
                enabled: self.right_on,
            },
            Light {
                position: LEFT_LIGHT_POSITION,
                diffuse: self.left_diffuse(),
                enabled: self.left_on,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_all_on() {
        let rig = LightRig::default();
        assert!(rig.room_on && rig.right_on && rig.left_on);
        assert_eq!(rig.aux, [99, 10, 10, 0]);
        assert_eq!(rig.clear_color(), LIT_BACKGROUND);
    }

    #[test]
    fn test_room_toggle_darkens_background() {
        let mut rig = LightRig::default();
        assert!(!rig.toggle_room());
        assert_eq!(rig.clear_color(), DARK_BACKGROUND);
        assert!(!rig.lights()[0].enabled);
        assert!(rig.toggle_room());
        assert_eq!(rig.clear_color(), LIT_BACKGROUND);
    }

    #[test]
    fn test_side_toggles_leave_background() {
        let mut rig = LightRig::default();
        rig.toggle_right();
        rig.toggle_left();
        let lights = rig.lights();
        assert!(!lights[1].enabled && !lights[2].enabled);
        assert_eq!(rig.clear_color(), LIT_BACKGROUND);
    }

    #[test]
    fn test_aux_is_clamped_to_slider_range() {
        let mut rig = LightRig::default();
        rig.set_aux(Channel::Red, 200);
        rig.set_aux(Channel::Green, 0);
        assert_eq!(rig.aux_value(Channel::Red), CHANNEL_MAX);
        assert_eq!(rig.aux_value(Channel::Green), CHANNEL_MIN);
    }

    #[test]
    fn test_diffuse_mapping() {
        let mut rig = LightRig::default();
        rig.set_aux(Channel::Blue, 50);
        rig.set_aux(Channel::Alpha, 20);

        let right = rig.right_diffuse();
        assert_relative_eq!(right[0], 0.99);
        assert_relative_eq!(right[2], 0.5);
        assert_relative_eq!(right[3], 0.2);

        let left = rig.left_diffuse();
        assert_relative_eq!(left[0], 4.01);
        assert_relative_eq!(left[2], 4.5);
        assert_relative_eq!(left[3], 480.0);
    }
}
