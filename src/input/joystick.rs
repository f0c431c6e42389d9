//! Virtual joystick - touch movement for mobile sessions.
//!
//! A fixed base circle in the lower-left corner with a draggable thumb. The
//! thumb tracks the pointer while a drag is active, clamped to the stick's
//! travel radius, and snaps back to center on release. Intent derives from the
//! thumb's offset, so all movement logic downstream is identical to keyboard.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::intent::{joystick_directions, DirectionsHeld, JOYSTICK_DEAD_ZONE};
use crate::assets::GameAssets;

/// Maximum thumb travel from the base center.
pub const JOYSTICK_MAX_RADIUS: f32 = 50.0;

/// Displayed size of the base circle.
const BASE_DISPLAY_SIZE: f32 = 100.0;

/// Displayed size of the thumb; also its hit box for starting a drag.
const THUMB_DISPLAY_SIZE: f32 = 50.0;

/// Distance of the base center from the bottom-left window corner.
const BASE_CORNER_INSET: Vec2 = Vec2::new(100.0, 100.0);

/// Marker for the thumb's UI node.
#[derive(Component)]
pub struct JoystickThumb;

/// Joystick state in window coordinates (origin top-left, y down).
///
/// Invariant: `thumb_pos` never strays more than `max_radius` from
/// `base_center`.
#[derive(Resource, Debug, Clone, Copy)]
pub struct JoystickState {
    pub base_center: Vec2,
    pub thumb_pos: Vec2,
    /// Pointer position where the active drag started, if any.
    pub drag_start: Option<Vec2>,
    pub max_radius: f32,
}

impl JoystickState {
    pub fn new(base_center: Vec2) -> Self {
        Self {
            base_center,
            thumb_pos: base_center,
            drag_start: None,
            max_radius: JOYSTICK_MAX_RADIUS,
        }
    }

    /// Thumb offset from the base center.
    pub fn offset(&self) -> Vec2 {
        self.thumb_pos - self.base_center
    }

    /// Held directions for the current thumb position; centered unless a drag
    /// is active.
    pub fn directions(&self) -> DirectionsHeld {
        if self.drag_start.is_some() {
            joystick_directions(self.offset(), JOYSTICK_DEAD_ZONE)
        } else {
            DirectionsHeld::default()
        }
    }

    /// Whether a pointer position is over the thumb's hit box.
    pub fn thumb_contains(&self, pointer: Vec2) -> bool {
        Rect::from_center_size(self.thumb_pos, Vec2::splat(THUMB_DISPLAY_SIZE)).contains(pointer)
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag_start = Some(pointer);
    }

    /// Move the thumb toward the pointer, clamped to the travel radius.
    pub fn drag_to(&mut self, pointer: Vec2) {
        if let Some(start) = self.drag_start {
            let delta = clamp_offset(pointer - start, self.max_radius);
            self.thumb_pos = self.base_center + delta;
        }
    }

    /// End the drag and snap the thumb back to center.
    pub fn release(&mut self) {
        self.drag_start = None;
        self.thumb_pos = self.base_center;
    }
}

/// Clamp a drag delta to the travel radius, preserving its angle.
pub fn clamp_offset(delta: Vec2, max_radius: f32) -> Vec2 {
    let distance = delta.length();
    if distance > max_radius {
        let angle = delta.y.atan2(delta.x);
        Vec2::new(angle.cos() * max_radius, angle.sin() * max_radius)
    } else {
        delta
    }
}

/// Spawn the joystick visuals and state (mobile sessions only).
pub fn setup_joystick(
    mut commands: Commands,
    assets: Res<GameAssets>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let base_center = Vec2::new(BASE_CORNER_INSET.x, window.height() - BASE_CORNER_INSET.y);

    commands.insert_resource(JoystickState::new(base_center));

    commands.spawn((
        ImageNode::new(assets.joystick_base.clone()),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(base_center.x - BASE_DISPLAY_SIZE / 2.0),
            top: Val::Px(base_center.y - BASE_DISPLAY_SIZE / 2.0),
            width: Val::Px(BASE_DISPLAY_SIZE),
            height: Val::Px(BASE_DISPLAY_SIZE),
            ..default()
        },
    ));
    commands.spawn((
        JoystickThumb,
        ImageNode::new(assets.joystick_thumb.clone()),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(base_center.x - THUMB_DISPLAY_SIZE / 2.0),
            top: Val::Px(base_center.y - THUMB_DISPLAY_SIZE / 2.0),
            width: Val::Px(THUMB_DISPLAY_SIZE),
            height: Val::Px(THUMB_DISPLAY_SIZE),
            ..default()
        },
    ));
}

/// Drive the drag state from mouse and touch pointers.
pub fn pointer_input(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut state: ResMut<JoystickState>,
) {
    let cursor = window_query
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position());

    // Drag starts on a press over the thumb.
    let pressed_at = if mouse.just_pressed(MouseButton::Left) {
        cursor
    } else {
        touches.iter_just_pressed().next().map(|touch| touch.position())
    };
    if state.drag_start.is_none() {
        if let Some(pointer) = pressed_at {
            if state.thumb_contains(pointer) {
                state.begin_drag(pointer);
            }
        }
    }

    if state.drag_start.is_some() {
        let current = touches
            .iter()
            .next()
            .map(|touch| touch.position())
            .or(if mouse.pressed(MouseButton::Left) { cursor } else { None });
        if let Some(pointer) = current {
            state.drag_to(pointer);
        }

        let released = mouse.just_released(MouseButton::Left)
            || touches.iter_just_released().next().is_some();
        if released {
            state.release();
        }
    }
}

/// Keep the thumb's UI node under the logical thumb position.
pub fn sync_thumb_ui(
    state: Res<JoystickState>,
    mut thumb_query: Query<&mut Node, With<JoystickThumb>>,
) {
    let Ok(mut node) = thumb_query.get_single_mut() else {
        return;
    };
    node.left = Val::Px(state.thumb_pos.x - THUMB_DISPLAY_SIZE / 2.0);
    node.top = Val::Px(state.thumb_pos.y - THUMB_DISPLAY_SIZE / 2.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{resolve_intent, MoveIntent};

    #[test]
    fn short_deltas_pass_through_unclamped() {
        let delta = Vec2::new(12.0, -30.0);
        assert_eq!(clamp_offset(delta, JOYSTICK_MAX_RADIUS), delta);
    }

    #[test]
    fn clamped_deltas_keep_their_angle_and_cap_their_length() {
        for delta in [
            Vec2::new(200.0, 0.0),
            Vec2::new(-90.0, 120.0),
            Vec2::new(40.0, -300.0),
            Vec2::new(-75.0, -75.0),
        ] {
            let clamped = clamp_offset(delta, JOYSTICK_MAX_RADIUS);
            assert!(clamped.length() <= JOYSTICK_MAX_RADIUS + 1e-3);
            let expected_angle = delta.y.atan2(delta.x);
            let actual_angle = clamped.y.atan2(clamped.x);
            assert!((expected_angle - actual_angle).abs() < 1e-5);
        }
    }

    #[test]
    fn dragging_far_right_clamps_thumb_and_reads_as_right() {
        let base = Vec2::new(100.0, 640.0);
        let mut state = JoystickState::new(base);
        state.begin_drag(base);
        state.drag_to(base + Vec2::new(200.0, 0.0));

        assert_eq!(state.thumb_pos, base + Vec2::new(JOYSTICK_MAX_RADIUS, 0.0));
        assert_eq!(resolve_intent(state.directions()), MoveIntent::Right);
    }

    #[test]
    fn thumb_never_leaves_the_travel_radius() {
        let base = Vec2::new(100.0, 640.0);
        let mut state = JoystickState::new(base);
        state.begin_drag(base + Vec2::new(5.0, 5.0));
        for pointer in [
            Vec2::new(500.0, 0.0),
            Vec2::new(0.0, 1000.0),
            Vec2::new(-40.0, 700.0),
        ] {
            state.drag_to(pointer);
            assert!(state.offset().length() <= state.max_radius + 1e-3);
        }
    }

    #[test]
    fn release_snaps_back_to_center_and_goes_quiet() {
        let base = Vec2::new(100.0, 640.0);
        let mut state = JoystickState::new(base);
        state.begin_drag(base);
        state.drag_to(base + Vec2::new(40.0, 0.0));
        state.release();

        assert_eq!(state.thumb_pos, base);
        assert_eq!(state.directions(), DirectionsHeld::default());
    }

    #[test]
    fn directions_stay_centered_without_an_active_drag() {
        let mut state = JoystickState::new(Vec2::new(100.0, 640.0));
        // nudge the thumb without a drag; should still read centered
        state.thumb_pos += Vec2::new(30.0, 0.0);
        assert_eq!(state.directions(), DirectionsHeld::default());
    }

    #[test]
    fn drag_only_starts_on_the_thumb() {
        let base = Vec2::new(100.0, 640.0);
        let state = JoystickState::new(base);
        assert!(state.thumb_contains(base + Vec2::new(20.0, 20.0)));
        assert!(!state.thumb_contains(base + Vec2::new(40.0, 0.0)));
    }
}
