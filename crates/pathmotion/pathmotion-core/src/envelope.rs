//! Envelopes scale a shape parameter (the helix radius) over progress.

use serde::{Deserialize, Serialize};

use crate::math::parabola;

/// Maps t in [0, 1] to a scale factor in [0, 1].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeKind {
    /// Constant 1.
    #[default]
    None,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Zero at both ends, full at the midpoint.
    Parabolic,
    /// Rises from zero and settles at full scale.
    HalfParabolic,
}

impl EnvelopeKind {
    pub const ALL: [EnvelopeKind; 7] = [
        EnvelopeKind::None,
        EnvelopeKind::Linear,
        EnvelopeKind::EaseIn,
        EnvelopeKind::EaseOut,
        EnvelopeKind::EaseInOut,
        EnvelopeKind::Parabolic,
        EnvelopeKind::HalfParabolic,
    ];

    #[inline]
    pub fn scale(self, t: f32) -> f32 {
        match self {
            EnvelopeKind::None => 1.0,
            EnvelopeKind::Linear => t,
            EnvelopeKind::EaseIn => t * t,
            EnvelopeKind::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EnvelopeKind::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EnvelopeKind::Parabolic => parabola(t),
            EnvelopeKind::HalfParabolic => 2.0 * t - t * t,
        }
    }
}
