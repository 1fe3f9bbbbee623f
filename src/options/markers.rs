use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Markers", inline)]
#[serde(default)]
/// Marker icon sizes.
pub struct MarkerOptions {
    /// Size of navigation arrows in pixels.
    #[schemars(title = "Arrow Size", range(min = 16, max = 160), extend("step" = 2))]
    pub arrow_size: u32,
    /// Size of info glyphs in pixels.
    #[schemars(title = "Info Size", range(min = 16, max = 160), extend("step" = 2))]
    pub info_size: u32,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            arrow_size: 80,
            info_size: 50,
        }
    }
}
