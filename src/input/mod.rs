//! Keyboard shortcuts for the tour view.
//!
//! Key strings use the DOM `KeyboardEvent.code` format (`"KeyG"`,
//! `"Escape"`, `"Space"`). The host resolves a key through
//! [`KeybindingOptions::lookup`](crate::options::KeybindingOptions::lookup)
//! and hands the action to [`dispatch_key`] or [`KeyAction::apply`].

/// Bindable actions.
pub mod keyboard;

pub use keyboard::KeyAction;

use crate::api::SceneSource;
use crate::navigation::NavigationController;
use crate::viewer::PanoramaViewer;

impl KeyAction {
    /// Run this action against the controller.
    pub fn apply<S: SceneSource, V: PanoramaViewer>(
        self,
        controller: &mut NavigationController<S, V>,
    ) {
        log::debug!("key action {self:?}");
        match self {
            Self::ToggleMenu => controller.toggle_menu(),
            Self::ToggleInfoPanel => controller.toggle_info_panel(),
            Self::ClosePanels => controller.close_panels(),
            Self::SkipIntro => controller.skip_intro(),
            Self::ToggleAutoRotate => controller.toggle_auto_rotate(),
        }
    }
}

/// Look up `key` in the controller's bindings and run the bound action.
///
/// Returns the action that ran, or `None` for an unbound key.
pub fn dispatch_key<S: SceneSource, V: PanoramaViewer>(
    controller: &mut NavigationController<S, V>,
    key: &str,
) -> Option<KeyAction> {
    let action = controller.options().keybindings.lookup(key)?;
    action.apply(controller);
    Some(action)
}
