use bevy::prelude::*;

/// Discrete per-frame ship commands, sampled from the keyboard.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShipControls {
    pub thrust_forward: bool,
    pub thrust_back: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Edge-triggered: true only on the frame the key went down.
    pub log_requested: bool,
}

impl ShipControls {
    pub fn from_keys(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            thrust_forward: keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]),
            thrust_back: keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]),
            rotate_left: keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
            rotate_right: keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
            log_requested: keys.just_pressed(KeyCode::Backspace),
        }
    }

    /// +1 forward, -1 back, 0 when both or neither are held.
    pub fn thrust_axis(&self) -> f32 {
        axis(self.thrust_forward, self.thrust_back)
    }

    /// +1 counter-clockwise, -1 clockwise.
    pub fn rotation_axis(&self) -> f32 {
        axis(self.rotate_left, self.rotate_right)
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    (positive as i8 - negative as i8) as f32
}

pub fn read_ship_controls(keys: Res<ButtonInput<KeyCode>>, mut controls: ResMut<ShipControls>) {
    *controls = ShipControls::from_keys(&keys);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_controls() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::ArrowRight);
        keys.press(KeyCode::Backspace);

        let controls = ShipControls::from_keys(&keys);
        assert!(controls.thrust_forward);
        assert!(!controls.thrust_back);
        assert!(!controls.rotate_left);
        assert!(controls.rotate_right);
        assert!(controls.log_requested);
        assert_eq!(controls.thrust_axis(), 1.0);
        assert_eq!(controls.rotation_axis(), -1.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let controls = ShipControls {
            thrust_forward: true,
            thrust_back: true,
            rotate_left: true,
            rotate_right: true,
            log_requested: false,
        };
        assert_eq!(controls.thrust_axis(), 0.0);
        assert_eq!(controls.rotation_axis(), 0.0);
    }

    #[test]
    fn held_backspace_logs_once() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Backspace);
        assert!(ShipControls::from_keys(&keys).log_requested);

        keys.clear();
        assert!(keys.pressed(KeyCode::Backspace));
        assert!(!ShipControls::from_keys(&keys).log_requested);
    }
}
