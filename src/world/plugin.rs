//! World plugin - variant loading, the map stage, zones, and the player spawn.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::assets::{load_game_assets, GameAssets};
use crate::core::{GameState, UpdateSet};
use crate::player::spawn_player;

use super::data::{load_variant_files, select_active_variant, ActiveVariant};
use super::zones::{update_interaction_state, InteractionState, ZoneSet};

/// Rectangle the player's bounding box is clamped to, in world units.
#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldBounds(pub Rect);

/// World plugin - owns variant data and stage setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionState>()
            .init_resource::<ZoneSet>()
            .add_systems(
                Startup,
                (load_variant_files, select_active_variant, load_game_assets).chain(),
            )
            .add_systems(OnEnter(GameState::InGame), setup_stage)
            .add_systems(
                Update,
                update_interaction_state
                    .in_set(UpdateSet::Zones)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

/// Build the stage: the map scaled to cover the window, the world bounds, the
/// zone set, and the player.
fn setup_stage(
    mut commands: Commands,
    assets: Res<GameAssets>,
    images: Res<Assets<Image>>,
    variant: Res<ActiveVariant>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let window_size = window_query
        .get_single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(Vec2::new(1260.0, 740.0));

    let bounds = if let Some(image) = images.get(&assets.map) {
        let image_size = image.size_f32();
        // cover the window, cropping the long dimension
        let scale = (window_size.x / image_size.x).max(window_size.y / image_size.y);
        commands.spawn((
            Sprite::from_image(assets.map.clone()),
            Transform::from_scale(Vec3::splat(scale)),
        ));
        Rect::from_center_size(Vec2::ZERO, image_size * scale)
    } else {
        warn!("Map image unavailable; world bounds fall back to the window");
        Rect::from_center_size(Vec2::ZERO, window_size)
    };
    commands.insert_resource(WorldBounds(bounds));

    commands.insert_resource(ZoneSet {
        zones: variant.0.zones.clone(),
    });

    info!(
        "Stage ready: variant '{}', {} zone(s)",
        variant.0.name,
        variant.0.zones.len()
    );

    spawn_player(&mut commands, &assets, variant.0.player_start);
}
