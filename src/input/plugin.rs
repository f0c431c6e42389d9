//! Input plugin - device mode, per-frame sampling, and joystick wiring.

use bevy::prelude::*;

use crate::core::{GameState, UpdateSet};

use super::device::{in_mobile_mode, setup_device_mode};
use super::intent::{keyboard_action_trigger, sample_input, InputSnapshot};
use super::joystick::{pointer_input, setup_joystick, sync_thumb_ui, JoystickState};

/// Input plugin - everything between the engine's devices and the
/// frame snapshot the game logic consumes.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .add_systems(Startup, setup_device_mode)
            .add_systems(
                OnEnter(GameState::InGame),
                setup_joystick.run_if(in_mobile_mode),
            )
            .add_systems(
                Update,
                (
                    (pointer_input, sync_thumb_ui)
                        .chain()
                        .run_if(resource_exists::<JoystickState>),
                    sample_input,
                    keyboard_action_trigger,
                )
                    .chain()
                    .in_set(UpdateSet::Input)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
