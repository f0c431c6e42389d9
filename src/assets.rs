//! Asset manifest and preload tracking.
//!
//! Every image the game can show is requested up front, during the `Loading`
//! state. A handle that fails to load is logged and the feature that wanted it
//! degrades (the overlay or joystick simply never appears); it never blocks the
//! transition into gameplay.

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

use crate::core::GameState;
use crate::world::ActiveVariant;

/// Size of one frame of the character sheet.
pub const CHARACTER_FRAME: UVec2 = UVec2::new(48, 64);

/// Columns/rows of the character sheet (16 frames, one row per facing).
const CHARACTER_SHEET_COLUMNS: u32 = 4;
const CHARACTER_SHEET_ROWS: u32 = 4;

/// Handles for everything in the asset manifest.
#[derive(Resource)]
pub struct GameAssets {
    pub map: Handle<Image>,
    pub character: Handle<Image>,
    pub character_layout: Handle<TextureAtlasLayout>,
    pub press_prompt: Handle<Image>,
    pub close_icon: Handle<Image>,
    pub joystick_base: Handle<Image>,
    pub joystick_thumb: Handle<Image>,
    pub action_button: Handle<Image>,
    /// One handle per overlay the active variant configures.
    pub overlays: Vec<Handle<Image>>,
}

impl GameAssets {
    /// Ids of every server-loaded handle, for preload polling. The atlas
    /// layout is built locally and is never "loading".
    fn tracked_ids(&self) -> Vec<UntypedAssetId> {
        let mut ids: Vec<UntypedAssetId> = vec![
            self.map.id().into(),
            self.character.id().into(),
            self.press_prompt.id().into(),
            self.close_icon.id().into(),
            self.joystick_base.id().into(),
            self.joystick_thumb.id().into(),
            self.action_button.id().into(),
        ];
        ids.extend(self.overlays.iter().map(|handle| handle.id().into()));
        ids
    }
}

/// Request every manifest entry. Overlay paths come from the active variant,
/// so this must run after variant selection.
pub fn load_game_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    variant: Res<ActiveVariant>,
) {
    let character_layout = layouts.add(TextureAtlasLayout::from_grid(
        CHARACTER_FRAME,
        CHARACTER_SHEET_COLUMNS,
        CHARACTER_SHEET_ROWS,
        None,
        None,
    ));

    let overlays = variant
        .0
        .overlay_paths
        .iter()
        .map(|path| asset_server.load(path.clone()))
        .collect::<Vec<_>>();

    info!("Requesting {} manifest images", 7 + overlays.len());

    commands.insert_resource(GameAssets {
        map: asset_server.load("map.png"),
        character: asset_server.load("character.png"),
        character_layout,
        press_prompt: asset_server.load("pressX1.png"),
        close_icon: asset_server.load("closeIcon.png"),
        joystick_base: asset_server.load("JoystickSplitted.png"),
        joystick_thumb: asset_server.load("LargeHandleFilled.png"),
        action_button: asset_server.load("Press.png"),
        overlays,
    });
}

/// Poll the manifest while in `Loading`; once every handle has settled, log
/// any failures and enter gameplay.
pub fn monitor_preload(
    asset_server: Res<AssetServer>,
    assets: Option<Res<GameAssets>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(assets) = assets else {
        return;
    };

    let mut failures = Vec::new();
    for id in assets.tracked_ids() {
        match asset_server.load_state(id) {
            LoadState::Loaded => {}
            LoadState::Failed(error) => failures.push(error),
            // NotLoaded or still loading - check again next frame
            _ => return,
        }
    }

    for error in &failures {
        warn!("Asset failed to load, continuing without it: {}", error);
    }
    if failures.is_empty() {
        info!("Preload complete");
    } else {
        warn!("Preload finished with {} missing asset(s)", failures.len());
    }
    next_state.set(GameState::InGame);
}
