//! Oriented reference frames used to place shape-local offsets in world space.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::resolve_position;

/// Origin plus three direction axes.
///
/// The axes are expected to be unit length and mutually orthogonal. Nothing
/// here renormalizes or checks them; a skewed frame simply yields a skewed
/// trajectory.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    pub origin: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    /// World frame at the origin: forward +Z, right +X, up +Y.
    pub const IDENTITY: Basis = Basis {
        origin: Vec3::ZERO,
        forward: Vec3::Z,
        right: Vec3::X,
        up: Vec3::Y,
    };

    pub fn new(origin: Vec3, forward: Vec3, right: Vec3, up: Vec3) -> Self {
        Self {
            origin,
            forward,
            right,
            up,
        }
    }

    /// Frame from an orientation. `forward_local` is the local axis the host
    /// treats as "forward" (Bevy uses -Z); right and up are the rotated +X/+Y.
    pub fn from_rotation(origin: Vec3, rotation: Quat, forward_local: Vec3) -> Self {
        Self {
            origin,
            forward: rotation * forward_local,
            right: rotation * Vec3::X,
            up: rotation * Vec3::Y,
        }
    }

    /// Same as [`resolve_position`] with this basis.
    #[inline]
    pub fn resolve(&self, forward_dist: f32, right_offset: f32, up_offset: f32) -> Vec3 {
        resolve_position(self, forward_dist, right_offset, up_offset)
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Per-clip flag: freeze the target's frame when mixing starts, or follow it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasisMode {
    #[default]
    Cached,
    /// Re-read the frame every tick. When that frame is the target's own
    /// transform, it already holds the previous tick's output, so the origin
    /// drifts forward each tick. Read the frame from a separate anchor instead.
    Live,
}

/// A [`BasisMode`] resolved at bind time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BasisSource {
    Cached(Basis),
    Live,
}

impl BasisSource {
    /// Capture `current` for cached clips; live clips keep reading it per tick.
    pub fn capture(mode: BasisMode, current: &Basis) -> Self {
        match mode {
            BasisMode::Cached => BasisSource::Cached(*current),
            BasisMode::Live => BasisSource::Live,
        }
    }

    /// Frame to evaluate against this tick.
    #[inline]
    pub fn resolve(&self, live: &Basis) -> Basis {
        match self {
            BasisSource::Cached(b) => *b,
            BasisSource::Live => *live,
        }
    }
}
