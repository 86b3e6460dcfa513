//! Easing curves applied to the forward axis of line and arc trajectories.
//!
//! Standard Penner-style formulas. Inputs are not clamped: progress outside
//! [0, 1] extrapolates through the same polynomial/trig expression.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseKind {
    /// Identity.
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineIn,
    SineOut,
    SineInOut,
}

impl EaseKind {
    pub const ALL: [EaseKind; 10] = [
        EaseKind::Linear,
        EaseKind::QuadIn,
        EaseKind::QuadOut,
        EaseKind::QuadInOut,
        EaseKind::CubicIn,
        EaseKind::CubicOut,
        EaseKind::CubicInOut,
        EaseKind::SineIn,
        EaseKind::SineOut,
        EaseKind::SineInOut,
    ];

    /// Evaluate the curve at `t`.
    #[inline]
    pub fn ease(self, t: f32) -> f32 {
        match self {
            EaseKind::Linear => t,
            EaseKind::QuadIn => t * t,
            EaseKind::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            EaseKind::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EaseKind::CubicIn => t * t * t,
            EaseKind::CubicOut => 1.0 - (1.0 - t).powi(3),
            EaseKind::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EaseKind::SineIn => 1.0 - (t * PI / 2.0).cos(),
            EaseKind::SineOut => (t * PI / 2.0).sin(),
            EaseKind::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}
