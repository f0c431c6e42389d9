//! Input module - device mode, directional intent, joystick, action triggers.

mod device;
mod intent;
mod joystick;
mod plugin;

pub use device::{detect_device_mode, in_desktop_mode, in_mobile_mode, DeviceMode};
pub use intent::{
    joystick_directions, resolve_intent, DirectionsHeld, InputSnapshot, MoveIntent,
    JOYSTICK_DEAD_ZONE,
};
pub use joystick::{clamp_offset, JoystickState, JOYSTICK_MAX_RADIUS};
pub use plugin::InputPlugin;
