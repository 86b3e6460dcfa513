use bevy::prelude::*;
use pathmotion_core::{Basis, BasisMode, Clip, ClipFrame, ClipId, Config, Mixer, Shape};

use crate::resources::PathMotionSettings;

/// Take the reference frame from another entity's transform instead of the
/// entity's own. Applies to live clips and to the frame captured by cached ones.
#[derive(Component, Debug, Clone, Copy)]
pub struct PathAnchor(pub Entity);

/// Blends several clips onto this entity's translation.
///
/// Live clips on an entity without a [`PathAnchor`] read the translation the
/// mixer wrote last frame, so they accumulate; give them an anchor.
#[derive(Component, Debug, Default)]
pub struct PathMixer(pub Mixer<Entity>);

impl PathMixer {
    pub fn new(config: Config) -> Self {
        Self(Mixer::new(config))
    }

    pub fn from_settings(settings: &PathMotionSettings) -> Self {
        Self::new(settings.config.clone())
    }

    pub fn add_clip(&mut self, clip: Clip) -> ClipId {
        self.0.add_clip(clip)
    }
}

/// This frame's progress/weight for each active clip of the entity's [`PathMixer`].
/// Removing the component releases the mixer's binding.
#[derive(Component, Debug, Clone, Default)]
pub struct PathFrames(pub Vec<ClipFrame>);

impl PathFrames {
    /// Insert or update the frame for `clip`.
    pub fn set(&mut self, clip: ClipId, progress: f32, weight: f32) {
        if let Some(f) = self.0.iter_mut().find(|f| f.clip == clip) {
            f.progress = progress;
            f.weight = weight;
        } else {
            self.0.push(ClipFrame::new(clip, progress, weight));
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Single trajectory driven directly, without blending.
///
/// With [`BasisMode::Live`] and no [`PathAnchor`], the frame is the entity's
/// own `Transform`, which this follower overwrote last frame: the origin
/// accumulates `range * progress` every frame. Pair live followers with an anchor.
#[derive(Component, Debug, Clone)]
pub struct PathFollower {
    pub shape: Shape,
    pub basis_mode: BasisMode,
    pub range: f32,
    /// Normalized progress, clamped by whoever advances it.
    pub progress: f32,
    cached: Option<Basis>,
}

impl PathFollower {
    pub fn new(shape: Shape, basis_mode: BasisMode, range: f32) -> Self {
        Self {
            shape,
            basis_mode,
            range,
            progress: 0.0,
            cached: None,
        }
    }

    /// Frame captured on the first evaluated frame (cached mode only).
    pub fn cached_basis(&self) -> Option<Basis> {
        self.cached
    }

    /// Forget the captured frame and rewind to the start.
    pub fn restart(&mut self) {
        self.cached = None;
        self.progress = 0.0;
    }

    pub(crate) fn frame_for(&mut self, current: Basis) -> Basis {
        match self.basis_mode {
            BasisMode::Cached => *self.cached.get_or_insert(current),
            BasisMode::Live => current,
        }
    }
}
