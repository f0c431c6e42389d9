//! Infowalk - a single-screen top-down info-zone walkabout in Bevy.
//!
//! The player walks a static map, overlaps rectangular trigger zones, and
//! toggles per-zone informational overlays with a keyboard key or an on-screen
//! mobile button. A virtual joystick covers touch movement.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, frame ordering
//! - **Input**: Device mode, keyboard/joystick intent, action triggers
//! - **Player**: Sprite spawning, motion, walk-cycle animation
//! - **World**: Variant data files, the map stage, trigger zones
//! - **Ui**: Loading screen, overlays, close control, zone affordances
//!
//! Which map layout runs (the nine-zone gallery or the two-zone kiosk) is
//! data, not code: variants load from RON files under `assets/data/variants/`.

pub mod assets;
pub mod core;
pub mod input;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct InfowalkPlugin;

impl Plugin for InfowalkPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Input systems
            .add_plugins(input::InputPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
