use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::camera::{CameraPose, LITTLE_PLANET_FOV, LITTLE_PLANET_PITCH};
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Intro", inline)]
#[serde(default)]
/// The "little planet to horizon" intro played on the featured scene.
pub struct IntroOptions {
    /// Play the intro when the tour opens on the featured scene.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Animation length in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 10000), extend("step" = 100))]
    pub duration_ms: u64,
    /// Pause before the first frame, in milliseconds.
    #[schemars(title = "Delay (ms)", range(min = 0, max = 5000), extend("step" = 100))]
    pub delay_ms: u64,
    /// Easing applied to fov and pitch.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
    /// Start field of view (degrees).
    #[schemars(skip)]
    pub start_fov: f64,
    /// Start pitch (degrees).
    #[schemars(skip)]
    pub start_pitch: f64,
    /// Start yaw (degrees).
    #[schemars(skip)]
    pub start_yaw: f64,
}

impl IntroOptions {
    /// Start pose of the intro.
    #[must_use]
    pub fn start_pose(&self) -> CameraPose {
        CameraPose::new(self.start_fov, self.start_pitch, self.start_yaw)
    }

    /// Animation length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Pause before the first frame.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for IntroOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 3000,
            delay_ms: 500,
            easing: EasingFunction::CubicInOut,
            start_fov: LITTLE_PLANET_FOV,
            start_pitch: LITTLE_PLANET_PITCH,
            start_yaw: 0.0,
        }
    }
}
