//! Core game module - states, events, and frame ordering.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod plugin;
mod states;

pub use events::*;
pub use plugin::{CorePlugin, UpdateSet};
pub use states::*;
