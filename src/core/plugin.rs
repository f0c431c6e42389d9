//! Core plugin that sets up game states, events, and frame ordering.

use bevy::prelude::*;

use crate::assets::monitor_preload;

use super::events::*;
use super::states::*;

/// Stages of a single update frame, run strictly in this order so that the
/// overlay controller always sees the zone result computed from this frame's
/// movement, which itself used this frame's input sample.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateSet {
    /// Sample input devices into the frame snapshot and emit trigger edges
    Input,
    /// Apply motion and animation to the player
    Movement,
    /// Recompute which zone the player occupies
    Zones,
    /// Drive the overlay state machine and sync UI visibility
    Interface,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame)
/// - Global events (ActionTrigger, CloseOverlay)
/// - The per-frame stage ordering
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<ActionTrigger>()
            .add_event::<CloseOverlay>()

            // Frame ordering for gameplay systems
            .configure_sets(
                Update,
                (
                    UpdateSet::Input,
                    UpdateSet::Movement,
                    UpdateSet::Zones,
                    UpdateSet::Interface,
                )
                    .chain(),
            )

            .add_systems(Startup, spawn_camera)

            // Loading state - transition to InGame when the manifest settles
            .add_systems(Update, monitor_preload.run_if(in_state(GameState::Loading)));
    }
}

/// Spawn the single 2D camera. The map fills one screen, so it never moves.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
