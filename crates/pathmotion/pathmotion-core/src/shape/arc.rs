//! Parabolic arc: forward travel with a vertical parabola whose peak can be
//! skewed toward the start or the end.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::easing::EaseKind;
use crate::math::parabola;

/// Bias values this close to 0.5 skip the skew remap entirely.
pub const UNBIASED_EPSILON: f32 = 1e-3;

fn default_peak_bias() -> f32 {
    0.5
}

/// Deserialized form; routed through [`ArcConfig::new`] so the bias clamp
/// applies to every serde path.
#[derive(Deserialize)]
struct RawArcConfig {
    #[serde(default)]
    height: f32,
    #[serde(default = "default_peak_bias")]
    peak_bias: f32,
    #[serde(default)]
    forward_ease: EaseKind,
}

impl From<RawArcConfig> for ArcConfig {
    fn from(raw: RawArcConfig) -> Self {
        ArcConfig::new(raw.height, raw.peak_bias, raw.forward_ease)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawArcConfig")]
pub struct ArcConfig {
    /// Peak elevation along the basis up axis, in world units.
    pub height: f32,
    /// Where the peak sits in [0, 1]; 0.5 is centered.
    pub peak_bias: f32,
    pub forward_ease: EaseKind,
}

impl ArcConfig {
    /// `peak_bias` is clamped to [0, 1] here; the evaluator trusts it.
    pub fn new(height: f32, peak_bias: f32, forward_ease: EaseKind) -> Self {
        Self {
            height,
            peak_bias: peak_bias.clamp(0.0, 1.0),
            forward_ease,
        }
    }
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self::new(1.0, 0.5, EaseKind::Linear)
    }
}

/// Skew `t` so the parabola peaks away from the midpoint while keeping
/// `biased(0) = 0` and `biased(1) = 1`.
#[inline]
pub fn bias_time(t: f32, peak_bias: f32) -> f32 {
    if (peak_bias - 0.5).abs() < UNBIASED_EPSILON {
        return t;
    }
    let bias_offset = (peak_bias - 0.5) * 2.0;
    (t + bias_offset * (t - t * t)).clamp(0.0, 1.0)
}

/// Forward distance follows the eased time; the height profile follows the
/// raw time through [`bias_time`]. The two are intentionally decoupled.
#[inline]
pub fn evaluate(cfg: &ArcConfig, basis: &Basis, range: f32, t: f32) -> Vec3 {
    let forward_dist = range * cfg.forward_ease.ease(t);
    let biased_t = bias_time(t, cfg.peak_bias);
    let up_offset = parabola(biased_t) * cfg.height;
    basis.resolve(forward_dist, 0.0, up_offset)
}
