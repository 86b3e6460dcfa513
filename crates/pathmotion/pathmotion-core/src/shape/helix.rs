//! Helix: a circle in the right/up plane swept along the forward axis.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::envelope::EnvelopeKind;
use crate::math::sincos;

fn default_frequency() -> f32 {
    1.0
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HelixConfig {
    #[serde(default)]
    pub radius: f32,
    /// Full turns over t in [0, 1].
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default)]
    pub phase_degrees: f32,
    /// Radius modulation over progress.
    #[serde(default)]
    pub envelope: EnvelopeKind,
}

impl HelixConfig {
    pub fn new(radius: f32, frequency: f32, phase_degrees: f32, envelope: EnvelopeKind) -> Self {
        Self {
            radius,
            frequency,
            phase_degrees,
            envelope,
        }
    }

    /// Radius after the envelope at `t`.
    #[inline]
    pub fn radius_at(&self, t: f32) -> f32 {
        self.radius * self.envelope.scale(t)
    }

    #[inline]
    pub fn angle_at(&self, t: f32) -> f32 {
        t * self.frequency * TAU + self.phase_degrees.to_radians()
    }
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.0, EnvelopeKind::None)
    }
}

/// Forward travel is always `range * t`; easing never applies to the helix axis.
#[inline]
pub fn evaluate(cfg: &HelixConfig, basis: &Basis, range: f32, t: f32) -> Vec3 {
    let radius = cfg.radius_at(t);
    let (sin, cos) = sincos(cfg.angle_at(t));
    basis.resolve(range * t, cos * radius, sin * radius)
}
