//! Zone-entry affordances.
//!
//! While the player stands in a zone, desktop sessions show a "press X"
//! prompt floating above the character; mobile sessions show a fixed action
//! button instead. Both are a level-triggered sync of zone occupancy, run
//! every frame, never an edge reaction.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::assets::GameAssets;
use crate::core::ActionTrigger;
use crate::input::DeviceMode;
use crate::player::Player;
use crate::world::InteractionState;

/// World-space distance of the prompt above the player's center.
const PROMPT_OFFSET_Y: f32 = 40.0;

/// The prompt renders at two thirds of its source size.
const PROMPT_SCALE: f32 = 2.0 / 3.0;

/// Displayed size of the mobile action button.
const ACTION_BUTTON_SIZE: f32 = 70.0;

/// Center of the action button, measured from the window's bottom-right corner.
const ACTION_BUTTON_INSET: Vec2 = Vec2::new(100.0, 80.0);

/// Marker for the "press X" prompt sprite.
#[derive(Component)]
pub struct PressPrompt;

/// Marker for the mobile action button.
#[derive(Component)]
pub struct ActionButton;

/// Spawn the desktop prompt sprite, hidden until a zone is entered.
pub fn setup_press_prompt(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((
        PressPrompt,
        Sprite::from_image(assets.press_prompt.clone()),
        // above the player sprite layer
        Transform::from_xyz(0.0, 0.0, 2.0).with_scale(Vec3::splat(PROMPT_SCALE)),
        Visibility::Hidden,
    ));
}

/// Spawn the mobile action button, hidden until a zone is entered.
pub fn setup_action_button(
    mut commands: Commands,
    assets: Res<GameAssets>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let window_size = window_query
        .get_single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(Vec2::new(1260.0, 740.0));

    commands.spawn((
        ActionButton,
        Button,
        ImageNode::new(assets.action_button.clone()),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(window_size.x - ACTION_BUTTON_INSET.x - ACTION_BUTTON_SIZE / 2.0),
            top: Val::Px(window_size.y - ACTION_BUTTON_INSET.y - ACTION_BUTTON_SIZE / 2.0),
            width: Val::Px(ACTION_BUTTON_SIZE),
            height: Val::Px(ACTION_BUTTON_SIZE),
            ..default()
        },
        Visibility::Hidden,
    ));
}

/// Emit the action trigger on a button tap edge.
pub fn action_button_input(
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<ActionButton>)>,
    mut triggers: EventWriter<ActionTrigger>,
) {
    for interaction in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            triggers.send(ActionTrigger);
        }
    }
}

/// Sync affordance visibility with zone occupancy; reposition the desktop
/// prompt over the player while it shows.
pub fn sync_affordances(
    mode: Res<DeviceMode>,
    interaction: Res<InteractionState>,
    player_query: Query<&Transform, With<Player>>,
    mut prompt_query: Query<(&mut Transform, &mut Visibility), (With<PressPrompt>, Without<Player>)>,
    mut button_query: Query<&mut Visibility, (With<ActionButton>, Without<PressPrompt>)>,
) {
    match *mode {
        DeviceMode::Mobile => {
            if let Ok(mut visibility) = button_query.get_single_mut() {
                *visibility = if interaction.in_zone {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                };
            }
        }
        DeviceMode::Desktop => {
            let Ok((mut transform, mut visibility)) = prompt_query.get_single_mut() else {
                return;
            };
            if interaction.in_zone {
                if let Ok(player) = player_query.get_single() {
                    transform.translation.x = player.translation.x;
                    transform.translation.y = player.translation.y + PROMPT_OFFSET_Y;
                }
                *visibility = Visibility::Visible;
            } else {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
