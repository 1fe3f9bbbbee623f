use serde::{Deserialize, Serialize};

/// Tour actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_menu = "KeyG"
/// skip_intro = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Open or close the location menu.
    ToggleMenu,
    /// Show or hide the scene info panel.
    ToggleInfoPanel,
    /// Close the menu and the info panel.
    ClosePanels,
    /// Jump the intro animation to its end pose.
    SkipIntro,
    /// Start or stop idle auto-rotation.
    ToggleAutoRotate,
}

impl KeyAction {
    /// Every bindable action.
    pub const ALL: [Self; 5] = [
        Self::ToggleMenu,
        Self::ToggleInfoPanel,
        Self::ClosePanels,
        Self::SkipIntro,
        Self::ToggleAutoRotate,
    ];
}
