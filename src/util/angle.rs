//! Angle conversion and normalization.
//!
//! Scene records store and transmit angles in degrees. The panorama viewer
//! works in radians. Conversion happens only where the controller hands a
//! pose to the viewer; stored data never holds radians.

use std::f64::consts::PI;

/// Convert degrees to radians (`degrees × π / 180`).
#[inline]
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Wrap a yaw into [-180, 180).
#[must_use]
pub fn wrap_yaw(degrees: f64) -> f64 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

/// Clamp a pitch to the sphere's poles, [-90, 90].
#[must_use]
pub fn clamp_pitch(degrees: f64) -> f64 {
    degrees.clamp(-90.0, 90.0)
}
