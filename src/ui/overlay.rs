//! The overlay state machine and its presentation.
//!
//! One informational image per overlay slot, shown full-screen-ish (80% x 90%
//! of the window) while open, with a close control pinned to the image's
//! top-right corner. The action trigger toggles; the close control always
//! hides. Walking out of the zone does NOT hide an open overlay - only an
//! explicit trigger or close does.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::assets::GameAssets;
use crate::core::{ActionTrigger, CloseOverlay};
use crate::world::{overlay_slot, ActiveVariant, InteractionState};

/// Which overlay, if any, is shown. `Visible` remembers the zone the player
/// occupied when it opened, so closing always hides that image even if the
/// player has since wandered into another zone.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible(u32),
}

impl OverlayState {
    pub fn is_visible(&self) -> bool {
        matches!(self, OverlayState::Visible(_))
    }

    pub fn visible_zone(&self) -> Option<u32> {
        match self {
            OverlayState::Visible(zone) => Some(*zone),
            OverlayState::Hidden => None,
        }
    }
}

/// One transition of the overlay state machine.
///
/// Close is absorbing and unconditional. The action trigger is gated on zone
/// occupancy and toggles; opening additionally requires the zone to have an
/// overlay slot, so a mismatched configuration no-ops instead of faulting.
pub fn next_overlay_state(
    state: OverlayState,
    triggered: bool,
    close_requested: bool,
    interaction: InteractionState,
    overlay_count: usize,
) -> OverlayState {
    if close_requested {
        return OverlayState::Hidden;
    }
    if !(triggered && interaction.in_zone) {
        return state;
    }
    match state {
        OverlayState::Hidden => match overlay_slot(interaction.current_zone, overlay_count) {
            Some(_) => OverlayState::Visible(interaction.current_zone as u32),
            None => OverlayState::Hidden,
        },
        OverlayState::Visible(_) => OverlayState::Hidden,
    }
}

/// Marker for an overlay image node; the payload is its slot.
#[derive(Component)]
pub struct OverlayImage(pub usize);

/// Marker for the close control.
#[derive(Component)]
pub struct CloseControl;

/// Pixel rectangle of the close control in window coordinates: the overlay's
/// top-right corner, inset a tenth of the overlay size and nudged 10px, sized
/// 7% x 10% of the overlay.
pub fn close_control_rect(window: Vec2) -> Rect {
    let overlay = Vec2::new(window.x * 0.8, window.y * 0.9);
    let size = Vec2::new(overlay.x * 0.07, overlay.y * 0.1);
    let center = Vec2::new(
        window.x / 2.0 + overlay.x / 2.0 - overlay.x * 0.1 / 2.0 + 10.0,
        window.y / 2.0 - overlay.y / 2.0 + overlay.y * 0.1 / 2.0 + 10.0,
    );
    Rect::from_center_size(center, size)
}

/// Spawn every overlay image (hidden) and the close control.
pub fn setup_overlays(
    mut commands: Commands,
    assets: Res<GameAssets>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    for (slot, handle) in assets.overlays.iter().enumerate() {
        commands.spawn((
            OverlayImage(slot),
            ImageNode::new(handle.clone()),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(10.0),
                top: Val::Percent(5.0),
                width: Val::Percent(80.0),
                height: Val::Percent(90.0),
                ..default()
            },
            Visibility::Hidden,
        ));
    }

    let window_size = window_query
        .get_single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(Vec2::new(1260.0, 740.0));
    let rect = close_control_rect(window_size);
    commands.spawn((
        CloseControl,
        Button,
        ImageNode::new(assets.close_icon.clone()),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(rect.min.x),
            top: Val::Px(rect.min.y),
            width: Val::Px(rect.width()),
            height: Val::Px(rect.height()),
            ..default()
        },
        Visibility::Hidden,
    ));
}

/// Emit `CloseOverlay` on a close-control press.
pub fn close_control_input(
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<CloseControl>)>,
    mut closes: EventWriter<CloseOverlay>,
) {
    for interaction in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            closes.send(CloseOverlay);
        }
    }
}

/// Apply this frame's triggers and closes to the overlay state.
pub fn drive_overlay(
    mut triggers: EventReader<ActionTrigger>,
    mut closes: EventReader<CloseOverlay>,
    interaction: Res<InteractionState>,
    variant: Res<ActiveVariant>,
    mut state: ResMut<OverlayState>,
) {
    let overlay_count = variant.0.overlay_paths.len();
    let mut next = *state;

    for _ in triggers.read() {
        next = next_overlay_state(next, true, false, *interaction, overlay_count);
    }
    // close last: it wins over a same-frame trigger
    if closes.read().next().is_some() {
        next = next_overlay_state(next, false, true, *interaction, overlay_count);
    }

    if next != *state {
        match next {
            OverlayState::Visible(zone) => info!("Opened overlay for zone {}", zone),
            OverlayState::Hidden => info!("Closed overlay"),
        }
        *state = next;
    }
}

/// Mirror the overlay state onto node visibility.
pub fn sync_overlay_visibility(
    state: Res<OverlayState>,
    variant: Res<ActiveVariant>,
    mut image_query: Query<(&OverlayImage, &mut Visibility), Without<CloseControl>>,
    mut close_query: Query<&mut Visibility, With<CloseControl>>,
) {
    let visible_slot = state
        .visible_zone()
        .and_then(|zone| variant.0.overlay_slot(zone as i32));

    for (image, mut visibility) in image_query.iter_mut() {
        *visibility = if Some(image.0) == visible_slot {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
    if let Ok(mut visibility) = close_query.get_single_mut() {
        *visibility = if state.is_visible() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inside(zone: i32) -> InteractionState {
        InteractionState {
            in_zone: true,
            current_zone: zone,
        }
    }

    fn outside() -> InteractionState {
        InteractionState::default()
    }

    #[test]
    fn trigger_inside_a_zone_opens_that_zones_overlay() {
        let state = next_overlay_state(OverlayState::Hidden, true, false, inside(1), 9);
        assert_eq!(state, OverlayState::Visible(1));
    }

    #[test]
    fn two_triggers_in_a_zone_are_the_identity() {
        let opened = next_overlay_state(OverlayState::Hidden, true, false, inside(4), 9);
        let closed = next_overlay_state(opened, true, false, inside(4), 9);
        assert_eq!(closed, OverlayState::Hidden);
    }

    #[test]
    fn trigger_outside_every_zone_changes_nothing() {
        let hidden = next_overlay_state(OverlayState::Hidden, true, false, outside(), 9);
        assert_eq!(hidden, OverlayState::Hidden);

        let visible = next_overlay_state(OverlayState::Visible(2), true, false, outside(), 9);
        assert_eq!(visible, OverlayState::Visible(2));
    }

    #[test]
    fn leaving_the_zone_does_not_close_the_overlay() {
        // no trigger, no close: walking out is not a transition
        let state = next_overlay_state(OverlayState::Visible(3), false, false, outside(), 9);
        assert_eq!(state, OverlayState::Visible(3));
    }

    #[test]
    fn close_always_hides_regardless_of_state_and_zone() {
        for state in [OverlayState::Hidden, OverlayState::Visible(5)] {
            for interaction in [inside(5), outside()] {
                assert_eq!(
                    next_overlay_state(state, false, true, interaction, 9),
                    OverlayState::Hidden
                );
            }
        }
    }

    #[test]
    fn close_wins_over_a_simultaneous_trigger() {
        let state = next_overlay_state(OverlayState::Visible(1), true, true, inside(1), 9);
        assert_eq!(state, OverlayState::Hidden);
    }

    #[test]
    fn a_zone_without_an_overlay_slot_never_opens() {
        // no overlays configured at all
        assert_eq!(
            next_overlay_state(OverlayState::Hidden, true, false, inside(1), 0),
            OverlayState::Hidden
        );
        // more zones than overlays
        assert_eq!(
            next_overlay_state(OverlayState::Hidden, true, false, inside(5), 3),
            OverlayState::Hidden
        );
    }

    #[test]
    fn toggling_off_targets_the_remembered_zone() {
        // opened in zone 3, walked into zone 7, then triggered
        let state = next_overlay_state(OverlayState::Visible(3), true, false, inside(7), 9);
        assert_eq!(state, OverlayState::Hidden);
    }

    #[test]
    fn close_control_sits_inset_in_the_overlay_top_right() {
        let rect = close_control_rect(Vec2::new(1260.0, 740.0));
        let center = rect.center();
        assert!((center.x - 1093.6).abs() < 1e-3);
        assert!((center.y - 80.3).abs() < 1e-3);
        assert!((rect.width() - 70.56).abs() < 1e-3);
        assert!((rect.height() - 66.6).abs() < 1e-3);
    }
}
