//! Player module - the walking character: spawning, motion, animation.

mod animation;
mod components;
mod movement;
mod plugin;

pub use animation::{walk_clip, WalkAnimator, WalkClip};
pub use components::*;
pub use movement::{clamp_to_bounds, effective_intent, spawn_player, velocity_for_intent};
pub use plugin::PlayerPlugin;
