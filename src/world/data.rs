//! Variant definitions and RON loading.
//!
//! A variant is one playable layout of the game: its zones, its overlay
//! images, and a couple of behavior switches. The nine-zone gallery and the
//! two-zone kiosk ship as data files under `assets/data/variants/` and share
//! every line of game code.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::ConfigError;
use super::zones::Zone;

fn default_move_speed() -> f32 {
    160.0
}

fn default_zone_size() -> (f32, f32) {
    (100.0, 100.0)
}

/// One zone rectangle as declared in a variant file.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneDef {
    pub center: (f32, f32),
    #[serde(default = "default_zone_size")]
    pub size: (f32, f32),
}

/// Raw variant definition as read from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct GameVariantRaw {
    pub name: String,
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    /// Freeze the player while an overlay is open.
    #[serde(default)]
    pub freeze_movement_on_overlay: bool,
    pub player_start: (f32, f32),
    #[serde(default)]
    pub zones: Vec<ZoneDef>,
    /// Overlay image paths: either one per zone, or a single shared image.
    #[serde(default)]
    pub overlays: Vec<String>,
}

/// Processed variant with zones resolved to world rectangles.
#[derive(Debug, Clone)]
pub struct GameVariant {
    pub name: String,
    pub move_speed: f32,
    pub freeze_movement_on_overlay: bool,
    pub player_start: Vec2,
    pub zones: Vec<Zone>,
    pub overlay_paths: Vec<String>,
}

impl GameVariant {
    /// Resolve a raw definition. Zone indices follow declaration order,
    /// starting at 1.
    pub fn from_raw(raw: GameVariantRaw) -> Self {
        if raw.overlays.len() > 1 && raw.overlays.len() != raw.zones.len() {
            warn!(
                "Variant '{}' declares {} overlays for {} zones; unmatched zones will not open one",
                raw.name,
                raw.overlays.len(),
                raw.zones.len()
            );
        }

        let zones = raw
            .zones
            .iter()
            .enumerate()
            .map(|(i, def)| Zone {
                index: i as u32 + 1,
                rect: Rect::from_center_size(Vec2::from(def.center), Vec2::from(def.size)),
            })
            .collect();

        Self {
            name: raw.name,
            move_speed: raw.move_speed,
            freeze_movement_on_overlay: raw.freeze_movement_on_overlay,
            player_start: Vec2::from(raw.player_start),
            zones,
            overlay_paths: raw.overlays,
        }
    }

    /// Overlay slot for a zone of this variant.
    pub fn overlay_slot(&self, zone_index: i32) -> Option<usize> {
        overlay_slot(zone_index, self.overlay_paths.len())
    }

    /// An empty layout: no zones, no overlays. Walking still works.
    pub fn fallback() -> Self {
        Self {
            name: "fallback".to_string(),
            move_speed: default_move_speed(),
            freeze_movement_on_overlay: false,
            player_start: Vec2::ZERO,
            zones: Vec::new(),
            overlay_paths: Vec::new(),
        }
    }
}

/// Map a 1-based zone index to an overlay slot. A variant with a single
/// overlay shares it across every zone; otherwise overlays pair with zones by
/// index, and anything out of range has no slot.
pub fn overlay_slot(zone_index: i32, overlay_count: usize) -> Option<usize> {
    if zone_index < 1 {
        return None;
    }
    match overlay_count {
        0 => None,
        1 => Some(0),
        count => {
            let slot = zone_index as usize - 1;
            (slot < count).then_some(slot)
        }
    }
}

/// Resource storing all loaded variant definitions.
#[derive(Resource, Default)]
pub struct VariantRegistry {
    pub variants: HashMap<String, GameVariant>,
}

impl VariantRegistry {
    /// Get a variant by name.
    pub fn get(&self, name: &str) -> Option<&GameVariant> {
        self.variants.get(name)
    }
}

/// The variant this session runs.
#[derive(Resource, Debug, Clone)]
pub struct ActiveVariant(pub GameVariant);

/// Read and parse one variant file.
pub fn load_variant_file(path: &Path) -> Result<GameVariantRaw, ConfigError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })
}

/// Load every variant definition from assets/data/variants/.
pub fn load_variant_files(mut commands: Commands) {
    let mut registry = VariantRegistry::default();
    let variants_path = Path::new("assets/data/variants");

    match fs::read_dir(variants_path) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "ron") {
                    match load_variant_file(&path) {
                        Ok(raw) => {
                            let variant = GameVariant::from_raw(raw);
                            info!("Loaded variant: {}", variant.name);
                            registry.variants.insert(variant.name.clone(), variant);
                        }
                        Err(e) => {
                            error!("{}", e);
                        }
                    }
                }
            }
        }
        Err(_) => {
            warn!("Variants directory not found: {:?}", variants_path);
        }
    }

    info!("Loaded {} variant(s)", registry.variants.len());
    commands.insert_resource(registry);
}

/// Pick the session's variant: `INFOWALK_VARIANT` if set, "gallery" otherwise,
/// degrading to whatever loaded (or an empty fallback) rather than exiting.
pub fn select_active_variant(mut commands: Commands, registry: Res<VariantRegistry>) {
    let requested = std::env::var("INFOWALK_VARIANT").unwrap_or_else(|_| "gallery".to_string());

    let variant = if let Some(variant) = registry.get(&requested) {
        variant.clone()
    } else if let Some(variant) = registry.variants.values().next() {
        error!(
            "Variant '{}' not found, falling back to '{}'",
            requested, variant.name
        );
        variant.clone()
    } else {
        error!("No variants loaded, running an empty fallback layout");
        GameVariant::fallback()
    };

    info!(
        "Active variant: {} ({} zones, {} overlays)",
        variant.name,
        variant.zones.len(),
        variant.overlay_paths.len()
    );
    commands.insert_resource(ActiveVariant(variant));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_ron_parses_with_defaults_applied() {
        let source = r#"(
            name: "test",
            player_start: (-230.0, 70.0),
            zones: [
                (center: (0.0, 0.0)),
                (center: (200.0, 0.0), size: (120.0, 80.0)),
            ],
            overlays: ["1.png", "2.png"],
        )"#;
        let raw: GameVariantRaw = ron::from_str(source).unwrap();
        assert_eq!(raw.move_speed, 160.0);
        assert!(!raw.freeze_movement_on_overlay);
        assert_eq!(raw.zones[0].size, (100.0, 100.0));
        assert_eq!(raw.zones[1].size, (120.0, 80.0));

        let variant = GameVariant::from_raw(raw);
        assert_eq!(variant.zones.len(), 2);
        assert_eq!(variant.zones[0].index, 1);
        assert_eq!(variant.zones[1].index, 2);
        assert_eq!(variant.zones[1].rect.width(), 120.0);
        assert_eq!(variant.player_start, Vec2::new(-230.0, 70.0));
    }

    #[test]
    fn per_zone_overlays_pair_by_index() {
        assert_eq!(overlay_slot(1, 9), Some(0));
        assert_eq!(overlay_slot(9, 9), Some(8));
        assert_eq!(overlay_slot(10, 9), None);
    }

    #[test]
    fn a_single_overlay_is_shared_by_every_zone() {
        assert_eq!(overlay_slot(1, 1), Some(0));
        assert_eq!(overlay_slot(2, 1), Some(0));
        assert_eq!(overlay_slot(7, 1), Some(0));
    }

    #[test]
    fn invalid_zones_and_empty_overlay_sets_have_no_slot() {
        assert_eq!(overlay_slot(-1, 9), None);
        assert_eq!(overlay_slot(0, 9), None);
        assert_eq!(overlay_slot(3, 0), None);
    }
}
