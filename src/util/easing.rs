//! Easing functions for camera animation.
//!
//! Every curve maps 0 → 0 and 1 → 1. Input is clamped to [0.0, 1.0];
//! [`EasingFunction::BackInOut`] overshoots slightly outside that range in
//! between, which is what gives it its "settle" feel.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Overshoot constant of the back easing family.
const BACK_C1: f64 = 1.701_58;
/// Back overshoot scaled for the in-out variant.
const BACK_C2: f64 = BACK_C1 * 1.525;

/// Easing function variants for animation curves.
///
/// Serde uses `snake_case` names. The camel-case names common in web
/// animation configs (`easeInOutCubic`, ...) are accepted as aliases.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    #[serde(alias = "easeInQuad")]
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    #[serde(alias = "easeOutQuad")]
    QuadraticOut,
    /// Quadratic ease-in-out.
    #[serde(alias = "easeInOutQuad")]
    QuadraticInOut,
    /// Cubic ease-in.
    #[serde(alias = "easeInCubic")]
    CubicIn,
    /// Cubic ease-out.
    #[serde(alias = "easeOutCubic")]
    CubicOut,
    /// Cubic ease-in-out. Smooth acceleration and deceleration; the intro
    /// animation default.
    #[default]
    #[serde(alias = "easeInOutCubic")]
    CubicInOut,
    /// Back ease-in-out: pulls back a little before starting and overshoots
    /// a little before settling.
    #[serde(alias = "easeInOutBack")]
    BackInOut,
}

impl EasingFunction {
    /// All variants, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Linear,
        Self::QuadraticIn,
        Self::QuadraticOut,
        Self::QuadraticInOut,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
        Self::BackInOut,
    ];

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => t * (2.0 - t),
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    (t - 1.0) * u * u + 1.0
                }
            }
            Self::BackInOut => {
                if t < 0.5 {
                    let u = 2.0 * t;
                    (u * u * ((BACK_C2 + 1.0) * u - BACK_C2)) / 2.0
                } else {
                    let u = 2.0 * t - 2.0;
                    (u * u * ((BACK_C2 + 1.0) * u + BACK_C2) + 2.0) / 2.0
                }
            }
        }
    }
}
