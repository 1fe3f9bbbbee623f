//! Camera poses and the intro animation.
//!
//! [`CameraPose`] is the authored, degree-based pose stored on scenes and
//! interpolated by the animator. [`ViewerPose`] is what the panorama viewer
//! receives: pitch and yaw in radians.

/// Time-based fov/pitch/yaw tween with easing.
pub mod animator;

pub use animator::{AnimationFrame, CameraAnimation};

use crate::util::angle::to_radians;

/// Field of view of the little-planet intro start pose (degrees).
pub const LITTLE_PLANET_FOV: f64 = 180.0;
/// Pitch of the little-planet intro start pose: straight up (degrees).
pub const LITTLE_PLANET_PITCH: f64 = 90.0;

/// Camera parameters in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    /// Horizontal field of view.
    pub fov: f64,
    /// Vertical angle; positive looks up.
    pub pitch: f64,
    /// Horizontal angle.
    pub yaw: f64,
}

impl CameraPose {
    /// Pose from fov, pitch and yaw (degrees).
    #[must_use]
    pub const fn new(fov: f64, pitch: f64, yaw: f64) -> Self {
        Self { fov, pitch, yaw }
    }

    /// The "little planet" pose: maximal fov, looking straight up.
    #[must_use]
    pub const fn little_planet() -> Self {
        Self::new(LITTLE_PLANET_FOV, LITTLE_PLANET_PITCH, 0.0)
    }

    /// Convert to the viewer's angular units.
    #[must_use]
    pub fn to_viewer(self) -> ViewerPose {
        ViewerPose {
            fov: self.fov,
            pitch: to_radians(self.pitch),
            yaw: to_radians(self.yaw),
        }
    }
}

/// Camera parameters as the viewer consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewerPose {
    /// Field of view in degrees.
    pub fov: f64,
    /// Pitch in radians.
    pub pitch: f64,
    /// Yaw in radians.
    pub yaw: f64,
}
