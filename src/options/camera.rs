use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera defaults and idle auto-rotation.
pub struct CameraOptions {
    /// Field of view used when a scene does not author one (degrees).
    #[schemars(title = "Default Field of View", range(min = 50.0, max = 120.0), extend("step" = 1.0))]
    pub default_fov: f64,
    /// Rotate the panorama slowly while the visitor is idle.
    #[schemars(title = "Auto-rotate")]
    pub auto_rotate: bool,
    /// Pause between the end of the intro and resuming auto-rotation.
    #[schemars(title = "Auto-rotate Resume Delay (ms)", range(min = 0, max = 10000), extend("step" = 100))]
    pub auto_rotate_resume_ms: u64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            default_fov: 90.0,
            auto_rotate: false,
            auto_rotate_resume_ms: 1000,
        }
    }
}
