//! Device mode classification.
//!
//! Decides once, at startup, whether to present the touch affordances
//! (joystick + action button) or the keyboard-only desktop experience. The
//! classification is a pure function of a user-agent-like string so it can be
//! driven by the environment and tested without a window.

use bevy::prelude::*;

/// Desktop vs. mobile presentation, fixed for the session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMode {
    Desktop,
    Mobile,
}

/// Tokens that mark handheld browsers.
const HANDHELD_TOKENS: &[&str] = &[
    "android", "avantgo", "blackberry", "bada/", "bb", "meego", "mmp", "mobile", "opera mobi",
    "opera mini", "palm", "phone", "pixi", "pre/", "plucker", "pocket", "psp", "symbian",
    "up.browser", "up.link", "vodafone", "wap", "windows ce", "xda", "xiino",
];

/// Tokens that mark tablets, which get the touch UI even though they do not
/// report themselves as "mobile".
const TABLET_TOKENS: &[&str] = &["ipad", "tablet"];

/// Classify an agent string. Case-insensitive containment match against the
/// handheld and tablet token sets; an Android agent without the "mobile" token
/// counts as a tablet. An empty string is Desktop.
pub fn detect_device_mode(agent: &str) -> DeviceMode {
    let agent = agent.to_ascii_lowercase();
    if agent.is_empty() {
        return DeviceMode::Desktop;
    }

    let handheld = HANDHELD_TOKENS.iter().any(|token| agent.contains(token));
    let tablet = TABLET_TOKENS.iter().any(|token| agent.contains(token))
        || (agent.contains("android") && !agent.contains("mobile"));

    if handheld || tablet {
        DeviceMode::Mobile
    } else {
        DeviceMode::Desktop
    }
}

/// Pick the session's device mode. `INFOWALK_DEVICE=mobile|desktop` overrides;
/// otherwise `INFOWALK_USER_AGENT` is classified, defaulting to desktop when
/// unset.
pub fn setup_device_mode(mut commands: Commands) {
    let mode = match std::env::var("INFOWALK_DEVICE").ok().as_deref() {
        Some("mobile") => DeviceMode::Mobile,
        Some("desktop") => DeviceMode::Desktop,
        Some(other) => {
            warn!("Unknown INFOWALK_DEVICE '{}', classifying the agent string", other);
            classify_agent_env()
        }
        None => classify_agent_env(),
    };
    info!("Device mode: {:?}", mode);
    commands.insert_resource(mode);
}

fn classify_agent_env() -> DeviceMode {
    let agent = std::env::var("INFOWALK_USER_AGENT").unwrap_or_default();
    detect_device_mode(&agent)
}

/// Run condition: the session is classified as mobile.
pub fn in_mobile_mode(mode: Res<DeviceMode>) -> bool {
    *mode == DeviceMode::Mobile
}

/// Run condition: the session is classified as desktop.
pub fn in_desktop_mode(mode: Res<DeviceMode>) -> bool {
    *mode == DeviceMode::Desktop
}
