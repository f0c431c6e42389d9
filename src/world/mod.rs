//! World module - variant data files, the map stage, and trigger zones.

mod data;
mod error;
mod plugin;
mod zones;

pub use data::{
    overlay_slot, ActiveVariant, GameVariant, GameVariantRaw, VariantRegistry, ZoneDef,
};
pub use error::ConfigError;
pub use plugin::{WorldBounds, WorldPlugin};
pub use zones::{detect_zone, InteractionState, Zone, ZoneSet};
