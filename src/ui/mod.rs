//! UI module - loading screen, overlays, close control, zone affordances.

mod affordance;
mod overlay;
mod plugin;

pub use overlay::{close_control_rect, next_overlay_state, OverlayState};
pub use plugin::UiPlugin;
