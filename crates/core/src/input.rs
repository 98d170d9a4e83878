//! Key mapping for the one supported input.

use crate::config::DemoConfig;

/// Something a key press asks the demo to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    ToggleAnimation,
}

impl InputAction {
    /// Maps a `KeyboardEvent.code` to an action. Every key but the
    /// configured toggle key is ignored.
    pub fn from_key_code(code: &str, config: &DemoConfig) -> Option<Self> {
        (code == config.toggle_key).then_some(InputAction::ToggleAnimation)
    }
}
