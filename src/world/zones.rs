//! Trigger zones and the per-frame player-overlap check.

use bevy::prelude::*;

use crate::player::{Player, PLAYER_HALF_EXTENTS};

/// A fixed rectangular trigger area on the map. Indices are 1-based and come
/// from the variant's declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub index: u32,
    pub rect: Rect,
}

/// The active variant's zones. Immutable once the stage is set up.
#[derive(Resource, Default)]
pub struct ZoneSet {
    pub zones: Vec<Zone>,
}

/// Where the player stands relative to the zone set this frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    pub in_zone: bool,
    /// 1-based zone index, or -1 outside every zone.
    pub current_zone: i32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            in_zone: false,
            current_zone: -1,
        }
    }
}

/// Test the player's bounds against every zone. All zones are checked each
/// call; when several overlap, the last match in declaration order wins.
/// Returns -1 when no zone intersects.
pub fn detect_zone(player_bounds: Rect, zones: &[Zone]) -> i32 {
    let mut current = -1;
    for zone in zones {
        if !zone.rect.intersect(player_bounds).is_empty() {
            current = zone.index as i32;
        }
    }
    current
}

/// Recompute `InteractionState` from the player's position.
pub fn update_interaction_state(
    zones: Res<ZoneSet>,
    player_query: Query<&Transform, With<Player>>,
    mut state: ResMut<InteractionState>,
) {
    let Ok(transform) = player_query.get_single() else {
        return;
    };
    let bounds = Rect::from_center_size(
        transform.translation.truncate(),
        PLAYER_HALF_EXTENTS * 2.0,
    );
    let index = detect_zone(bounds, &zones.zones);
    if state.current_zone != index {
        state.current_zone = index;
        state.in_zone = index != -1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(index: u32, center: Vec2) -> Zone {
        Zone {
            index,
            rect: Rect::from_center_size(center, Vec2::splat(100.0)),
        }
    }

    fn player_at(center: Vec2) -> Rect {
        Rect::from_center_size(center, Vec2::new(48.0, 64.0))
    }

    #[test]
    fn outside_every_zone_reads_minus_one() {
        let zones = [zone(1, Vec2::new(-430.0, 170.0)), zone(2, Vec2::new(-230.0, 170.0))];
        assert_eq!(detect_zone(player_at(Vec2::new(300.0, -300.0)), &zones), -1);
    }

    #[test]
    fn an_empty_zone_set_always_reads_minus_one() {
        assert_eq!(detect_zone(player_at(Vec2::ZERO), &[]), -1);
    }

    #[test]
    fn detection_is_deterministic_for_unchanged_inputs() {
        let zones = [zone(1, Vec2::ZERO), zone(2, Vec2::new(60.0, 0.0))];
        let bounds = player_at(Vec2::new(20.0, 0.0));
        let first = detect_zone(bounds, &zones);
        for _ in 0..10 {
            assert_eq!(detect_zone(bounds, &zones), first);
        }
    }

    #[test]
    fn overlapping_zones_resolve_to_the_highest_index() {
        // two zones sharing ground; the player straddles both
        let zones = [zone(1, Vec2::ZERO), zone(2, Vec2::new(40.0, 0.0))];
        assert_eq!(detect_zone(player_at(Vec2::new(20.0, 0.0)), &zones), 2);

        // same layout declared in the opposite order
        let reversed = [zone(2, Vec2::new(40.0, 0.0)), zone(1, Vec2::ZERO)];
        assert_eq!(detect_zone(player_at(Vec2::new(20.0, 0.0)), &reversed), 1);
    }

    #[test]
    fn walking_from_one_zone_into_a_shared_edge_picks_the_later_zone() {
        // zone 3 alone, then zones 3 and 7 simultaneously
        let zones = [
            zone(3, Vec2::new(0.0, 0.0)),
            zone(7, Vec2::new(90.0, 0.0)),
        ];
        assert_eq!(detect_zone(player_at(Vec2::new(-20.0, 0.0)), &zones), 3);
        assert_eq!(detect_zone(player_at(Vec2::new(45.0, 0.0)), &zones), 7);
    }
}
