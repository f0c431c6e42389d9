//! Motion controller - directional intent to velocity, plus bounds clamping.

use bevy::prelude::*;

use super::components::{Moving, Player, Velocity, PLAYER_HALF_EXTENTS};
use crate::assets::GameAssets;
use crate::input::{InputSnapshot, MoveIntent};
use crate::ui::OverlayState;
use crate::world::{ActiveVariant, WorldBounds};

/// Velocity vector for an intent. Axis-aligned; never diagonal.
pub fn velocity_for_intent(intent: MoveIntent, speed: f32) -> Vec2 {
    match intent {
        MoveIntent::None => Vec2::ZERO,
        MoveIntent::Left => Vec2::new(-speed, 0.0),
        MoveIntent::Right => Vec2::new(speed, 0.0),
        MoveIntent::Up => Vec2::new(0.0, speed),
        MoveIntent::Down => Vec2::new(0.0, -speed),
    }
}

/// Movement is suppressed while an overlay is open, but only in variants that
/// ask for it.
pub fn effective_intent(
    intent: MoveIntent,
    overlay_open: bool,
    freeze_on_overlay: bool,
) -> MoveIntent {
    if overlay_open && freeze_on_overlay {
        MoveIntent::None
    } else {
        intent
    }
}

/// Keep the player's bounding box inside the world.
pub fn clamp_to_bounds(position: Vec2, bounds: Rect, half_extents: Vec2) -> Vec2 {
    let min = bounds.min + half_extents;
    let max = bounds.max - half_extents;
    // a world smaller than the sprite pins to the center
    if min.x > max.x || min.y > max.y {
        return bounds.center();
    }
    position.clamp(min, max)
}

/// Apply the frame's intent: set velocity, integrate, clamp.
pub fn apply_movement(
    time: Res<Time>,
    snapshot: Res<InputSnapshot>,
    overlay: Res<OverlayState>,
    variant: Res<ActiveVariant>,
    bounds: Res<WorldBounds>,
    mut player_query: Query<(&mut Transform, &mut Velocity, &mut Moving), With<Player>>,
) {
    let Ok((mut transform, mut velocity, mut moving)) = player_query.get_single_mut() else {
        return;
    };

    let intent = effective_intent(
        snapshot.intent,
        overlay.is_visible(),
        variant.0.freeze_movement_on_overlay,
    );

    velocity.0 = velocity_for_intent(intent, variant.0.move_speed);
    if moving.0 != intent {
        moving.0 = intent;
    }

    let next = transform.translation.truncate() + velocity.0 * time.delta_secs();
    let clamped = clamp_to_bounds(next, bounds.0, PLAYER_HALF_EXTENTS);
    transform.translation.x = clamped.x;
    transform.translation.y = clamped.y;
}

/// Spawn the player sprite at the variant's start position.
pub fn spawn_player(commands: &mut Commands, assets: &GameAssets, position: Vec2) -> Entity {
    commands
        .spawn((
            Player,
            Velocity::default(),
            Moving::default(),
            super::animation::WalkAnimator::default(),
            Sprite::from_atlas_image(
                assets.character.clone(),
                TextureAtlas {
                    layout: assets.character_layout.clone(),
                    index: 0,
                },
            ),
            // above the map sprite
            Transform::from_translation(position.extend(1.0)),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_map_to_axis_aligned_velocities() {
        assert_eq!(velocity_for_intent(MoveIntent::None, 160.0), Vec2::ZERO);
        assert_eq!(velocity_for_intent(MoveIntent::Left, 160.0), Vec2::new(-160.0, 0.0));
        assert_eq!(velocity_for_intent(MoveIntent::Right, 160.0), Vec2::new(160.0, 0.0));
        assert_eq!(velocity_for_intent(MoveIntent::Up, 160.0), Vec2::new(0.0, 160.0));
        assert_eq!(velocity_for_intent(MoveIntent::Down, 160.0), Vec2::new(0.0, -160.0));
    }

    #[test]
    fn overlay_freezes_movement_only_when_configured() {
        let intent = MoveIntent::Right;
        assert_eq!(effective_intent(intent, true, true), MoveIntent::None);
        assert_eq!(effective_intent(intent, true, false), intent);
        assert_eq!(effective_intent(intent, false, true), intent);
        assert_eq!(effective_intent(intent, false, false), intent);
    }

    #[test]
    fn positions_clamp_to_the_inset_world_rect() {
        let bounds = Rect::from_center_size(Vec2::ZERO, Vec2::new(1000.0, 600.0));
        let half = Vec2::new(24.0, 32.0);

        let inside = Vec2::new(100.0, -50.0);
        assert_eq!(clamp_to_bounds(inside, bounds, half), inside);

        let outside = Vec2::new(700.0, -400.0);
        assert_eq!(
            clamp_to_bounds(outside, bounds, half),
            Vec2::new(500.0 - 24.0, -(300.0 - 32.0))
        );
    }

    #[test]
    fn degenerate_bounds_pin_to_the_center() {
        let bounds = Rect::from_center_size(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        let half = Vec2::new(24.0, 32.0);
        assert_eq!(clamp_to_bounds(Vec2::ZERO, bounds, half), Vec2::new(10.0, 10.0));
    }
}
