//! Shared utilities.
//!
//! Easing curves for camera animation and degree/radian conversion at the
//! viewer boundary.

pub mod angle;
pub mod easing;
