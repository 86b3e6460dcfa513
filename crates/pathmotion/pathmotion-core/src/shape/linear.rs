//! Straight-line trajectory along the basis forward axis.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::easing::EaseKind;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearConfig {
    /// Applied to forward progress only.
    #[serde(default)]
    pub ease: EaseKind,
}

impl LinearConfig {
    pub fn new(ease: EaseKind) -> Self {
        Self { ease }
    }
}

/// `origin + forward * range * ease(t)`; no lateral or vertical component.
#[inline]
pub fn evaluate(cfg: &LinearConfig, basis: &Basis, range: f32, t: f32) -> Vec3 {
    basis.resolve(range * cfg.ease.ease(t), 0.0, 0.0)
}
