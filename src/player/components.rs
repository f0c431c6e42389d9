//! Player-related components.

use bevy::prelude::*;

use crate::input::MoveIntent;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Current velocity in world units per second.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec2);

/// The intent the motion controller applied this frame; drives the walk
/// animation.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Moving(pub MoveIntent);

/// Half extents of the player's bounding box (one sheet frame).
pub const PLAYER_HALF_EXTENTS: Vec2 = Vec2::new(24.0, 32.0);
