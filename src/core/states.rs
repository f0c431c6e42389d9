//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. The whole game is one
//! screen, so the flow is just a preload phase followed by play.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` while the asset manifest is fetched
/// - Move to `InGame` once every tracked handle has settled
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading images and variant data
    #[default]
    Loading,
    /// Active gameplay on the single map screen
    InGame,
}
