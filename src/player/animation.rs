//! Walk-cycle playback from the character sheet.
//!
//! The sheet has one row of four frames per facing. Walking loops the matching
//! row; standing still freezes the sheet on whatever frame it showed last.

use bevy::prelude::*;

use super::components::{Moving, Player};
use crate::input::MoveIntent;

/// One looping row of the character sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkClip {
    pub first: usize,
    pub last: usize,
    pub fps: f32,
}

/// Clip for a facing; `None` while standing still. The down-facing row plays
/// slower than the rest, matching the source art.
pub fn walk_clip(intent: MoveIntent) -> Option<WalkClip> {
    match intent {
        MoveIntent::None => None,
        MoveIntent::Down => Some(WalkClip { first: 0, last: 3, fps: 6.0 }),
        MoveIntent::Left => Some(WalkClip { first: 4, last: 7, fps: 10.0 }),
        MoveIntent::Right => Some(WalkClip { first: 8, last: 11, fps: 10.0 }),
        MoveIntent::Up => Some(WalkClip { first: 12, last: 15, fps: 10.0 }),
    }
}

/// Playback state for the player's walk cycle.
#[derive(Component)]
pub struct WalkAnimator {
    pub current: MoveIntent,
    pub timer: Timer,
}

impl Default for WalkAnimator {
    fn default() -> Self {
        Self {
            current: MoveIntent::None,
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Step the walk cycle from the intent the motion controller applied.
pub fn animate_walk(
    time: Res<Time>,
    mut player_query: Query<(&Moving, &mut WalkAnimator, &mut Sprite), With<Player>>,
) {
    let Ok((moving, mut animator, mut sprite)) = player_query.get_single_mut() else {
        return;
    };

    if moving.0 != animator.current {
        animator.current = moving.0;
        if let Some(clip) = walk_clip(moving.0) {
            animator.timer = Timer::from_seconds(1.0 / clip.fps, TimerMode::Repeating);
            if let Some(atlas) = sprite.texture_atlas.as_mut() {
                atlas.index = clip.first;
            }
        }
        // going idle freezes the sheet on the current frame
    }

    let Some(clip) = walk_clip(animator.current) else {
        return;
    };
    animator.timer.tick(time.delta());
    if animator.timer.just_finished() {
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = if atlas.index < clip.first || atlas.index >= clip.last {
                clip.first
            } else {
                atlas.index + 1
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_facing_has_its_own_sheet_row() {
        assert_eq!(walk_clip(MoveIntent::None), None);
        assert_eq!(walk_clip(MoveIntent::Down), Some(WalkClip { first: 0, last: 3, fps: 6.0 }));
        assert_eq!(walk_clip(MoveIntent::Left), Some(WalkClip { first: 4, last: 7, fps: 10.0 }));
        assert_eq!(walk_clip(MoveIntent::Right), Some(WalkClip { first: 8, last: 11, fps: 10.0 }));
        assert_eq!(walk_clip(MoveIntent::Up), Some(WalkClip { first: 12, last: 15, fps: 10.0 }));
    }

    #[test]
    fn rows_do_not_overlap_and_cover_the_sheet() {
        let clips = [MoveIntent::Down, MoveIntent::Left, MoveIntent::Right, MoveIntent::Up]
            .into_iter()
            .filter_map(walk_clip)
            .collect::<Vec<_>>();
        let mut frames = clips
            .iter()
            .flat_map(|clip| clip.first..=clip.last)
            .collect::<Vec<_>>();
        frames.sort_unstable();
        assert_eq!(frames, (0..16).collect::<Vec<_>>());
    }
}
