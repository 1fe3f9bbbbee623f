//! Tour configuration with TOML file support.
//!
//! Backend location, intro animation, camera defaults, marker sizes and
//! keybindings are consolidated here. Every section uses
//! `#[serde(default)]`, so a file that only overrides `[intro]` is valid.

mod api;
mod camera;
mod intro;
mod keybindings;
mod markers;

use std::path::Path;

pub use api::ApiOptions;
pub use camera::CameraOptions;
pub use intro::IntroOptions;
pub use keybindings::KeybindingOptions;
pub use markers::MarkerOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TourError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct TourOptions {
    /// Backend and media locations.
    pub api: ApiOptions,
    /// Featured-scene intro animation.
    pub intro: IntroOptions,
    /// Camera defaults and auto-rotation.
    pub camera: CameraOptions,
    /// Marker icon sizes.
    pub markers: MarkerOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl TourOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(TourOptions)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, TourError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| TourError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TourError> {
        let content = std::fs::read_to_string(path).map_err(TourError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TourError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TourError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TourError::Io)?;
        }
        std::fs::write(path, content).map_err(TourError::Io)
    }
}
