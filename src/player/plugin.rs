//! Player plugin - motion and walk animation systems.

use bevy::prelude::*;

use crate::core::{GameState, UpdateSet};

use super::animation::animate_walk;
use super::movement::apply_movement;

/// Player plugin. Spawning happens from the world setup, which knows the
/// variant's start position.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (apply_movement, animate_walk)
                .chain()
                .in_set(UpdateSet::Movement)
                .run_if(in_state(GameState::InGame)),
        );
    }
}
