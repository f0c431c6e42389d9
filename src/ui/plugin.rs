//! UI plugin - loading screen, overlay presentation, and affordances.

use bevy::prelude::*;

use crate::core::{GameState, UpdateSet};
use crate::input::{in_desktop_mode, in_mobile_mode};

use super::affordance;
use super::overlay;

/// UI plugin - everything the player sees besides the map and sprites.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<overlay::OverlayState>()
            // Loading screen
            .add_systems(OnEnter(GameState::Loading), setup_loading_screen)
            .add_systems(OnExit(GameState::Loading), cleanup_loading_screen)

            // Overlays and affordances
            .add_systems(
                OnEnter(GameState::InGame),
                (
                    overlay::setup_overlays,
                    affordance::setup_press_prompt.run_if(in_desktop_mode),
                    affordance::setup_action_button.run_if(in_mobile_mode),
                ),
            )
            .add_systems(
                Update,
                (
                    (overlay::close_control_input, affordance::action_button_input)
                        .in_set(UpdateSet::Input),
                    (
                        overlay::drive_overlay,
                        overlay::sync_overlay_visibility,
                        affordance::sync_affordances,
                    )
                        .chain()
                        .in_set(UpdateSet::Interface),
                )
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

/// Marker for loading screen UI entities.
#[derive(Component)]
struct LoadingUi;

/// Centered loading text shown while the asset manifest is fetched.
fn setup_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            LoadingUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading..."),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
            ));
        });
}

/// Clean up loading screen entities.
fn cleanup_loading_screen(mut commands: Commands, query: Query<Entity, With<LoadingUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
