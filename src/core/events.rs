//! Global events used for cross-system communication.
//!
//! Events decouple the input sources from the overlay controller: the keyboard
//! and the mobile button both emit the same trigger, and the controller does
//! not care which one fired.

use bevy::prelude::*;

/// Sent on the activate edge - keyboard X going down, or a tap on the mobile
/// action button. Edge-triggered: holding the key never re-fires it.
#[derive(Event)]
pub struct ActionTrigger;

/// Sent when the overlay's close control is activated.
#[derive(Event)]
pub struct CloseOverlay;
