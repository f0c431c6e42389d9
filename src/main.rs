//! Infowalk - Entry Point
//!
//! A single-screen top-down walkabout: stroll across the map, step into a
//! marked zone, and read the information overlay for that spot.
//!
//! Controls:
//! - Arrow keys: Move
//! - X: Open/close the overlay while inside a zone
//! - Touch joystick + action button on mobile devices

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Infowalk".to_string(),
                resolution: (1260.0, 740.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(infowalk::InfowalkPlugin)

        .run();
}
