//! Directional intent - the unified movement signal.
//!
//! Keyboard arrows and the joystick thumb both reduce to a set of held
//! directions, merged and collapsed to a single intent per frame. The priority
//! order (left, right, up, down; first match wins) means diagonals never
//! happen: holding left and up walks left.

use bevy::prelude::*;

use super::joystick::JoystickState;
use crate::core::ActionTrigger;

/// Thumb travel below this, per axis, reads as centered.
pub const JOYSTICK_DEAD_ZONE: f32 = 10.0;

/// The one direction the player means to walk this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveIntent {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

/// Raw per-direction hold state from one input channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionsHeld {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionsHeld {
    /// OR-combine two channels.
    pub fn merge(self, other: Self) -> Self {
        Self {
            left: self.left || other.left,
            right: self.right || other.right,
            up: self.up || other.up,
            down: self.down || other.down,
        }
    }
}

/// Collapse held directions to one intent. First matching direction wins:
/// left, then right, then up, then down.
pub fn resolve_intent(held: DirectionsHeld) -> MoveIntent {
    if held.left {
        MoveIntent::Left
    } else if held.right {
        MoveIntent::Right
    } else if held.up {
        MoveIntent::Up
    } else if held.down {
        MoveIntent::Down
    } else {
        MoveIntent::None
    }
}

/// Thumb offset to held directions. Window coordinates, y growing downward;
/// each axis reads independently once past the dead zone.
pub fn joystick_directions(offset: Vec2, dead_zone: f32) -> DirectionsHeld {
    DirectionsHeld {
        left: offset.x < -dead_zone,
        right: offset.x > dead_zone,
        up: offset.y < -dead_zone,
        down: offset.y > dead_zone,
    }
}

/// The frame's input sample. Written once at the top of the frame; everything
/// downstream reads only this.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub intent: MoveIntent,
}

/// Sample the keyboard and (when present) the joystick into the snapshot.
pub fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    joystick: Option<Res<JoystickState>>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    let keys = DirectionsHeld {
        left: keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::ArrowRight),
        up: keyboard.pressed(KeyCode::ArrowUp),
        down: keyboard.pressed(KeyCode::ArrowDown),
    };
    let stick = joystick
        .as_ref()
        .map(|state| state.directions())
        .unwrap_or_default();

    snapshot.intent = resolve_intent(keys.merge(stick));
}

/// Emit the action trigger on the X key-down edge.
pub fn keyboard_action_trigger(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut triggers: EventWriter<ActionTrigger>,
) {
    if keyboard.just_pressed(KeyCode::KeyX) {
        triggers.send(ActionTrigger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_held_directions_is_no_intent() {
        assert_eq!(resolve_intent(DirectionsHeld::default()), MoveIntent::None);
    }

    #[test]
    fn priority_is_left_right_up_down() {
        let all = DirectionsHeld { left: true, right: true, up: true, down: true };
        assert_eq!(resolve_intent(all), MoveIntent::Left);

        let no_left = DirectionsHeld { right: true, up: true, down: true, ..default() };
        assert_eq!(resolve_intent(no_left), MoveIntent::Right);

        let vertical = DirectionsHeld { up: true, down: true, ..default() };
        assert_eq!(resolve_intent(vertical), MoveIntent::Up);

        let down_only = DirectionsHeld { down: true, ..default() };
        assert_eq!(resolve_intent(down_only), MoveIntent::Down);
    }

    #[test]
    fn channels_merge_with_or() {
        let keys = DirectionsHeld { up: true, ..default() };
        let stick = DirectionsHeld { left: true, ..default() };
        // joystick left outranks keyboard up after the merge
        assert_eq!(resolve_intent(keys.merge(stick)), MoveIntent::Left);
    }

    #[test]
    fn dead_zone_reads_as_centered() {
        let held = joystick_directions(Vec2::new(9.0, -9.0), JOYSTICK_DEAD_ZONE);
        assert_eq!(held, DirectionsHeld::default());
    }

    #[test]
    fn offsets_past_dead_zone_read_per_axis() {
        let held = joystick_directions(Vec2::new(30.0, -30.0), JOYSTICK_DEAD_ZONE);
        assert!(held.right && held.up);
        assert!(!held.left && !held.down);

        // up beats down-priority axes only through resolve_intent ordering
        assert_eq!(resolve_intent(held), MoveIntent::Right);
    }
}
