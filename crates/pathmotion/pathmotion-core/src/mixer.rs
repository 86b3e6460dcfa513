//! Stateful per-target mixer.
//!
//! The mixer owns the clip table for one target and an explicit binding state:
//! `Unbound` until a target is first available, then `Bound` with each clip's
//! [`BasisSource`] resolved once. Hosts call [`Mixer::mix`] once per tick with
//! the progress/weight of every active clip; the blended position is written
//! to the target, or nothing is written when the total weight is zero.

use std::fmt::Debug;

use glam::Vec3;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::basis::{Basis, BasisMode, BasisSource};
use crate::blend::{BlendAccumulator, BlendInput};
use crate::config::Config;
use crate::ids::{ClipId, IdAllocator};
use crate::shape::Shape;

/// Whatever receives the blended position. Adapters implement this over their
/// own transform type.
pub trait MixTarget {
    type Handle: Copy + Eq + Debug;

    /// Stable identity used to detect rebinding.
    fn handle(&self) -> Self::Handle;
    /// Current orientation; captured by cached clips, read per tick by live ones.
    fn basis(&self) -> Basis;
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
}

/// A trajectory registered with a mixer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    #[serde(default)]
    pub shape: Option<Shape>,
    #[serde(default)]
    pub basis_mode: BasisMode,
    pub range: f32,
}

impl Clip {
    pub fn new(shape: Shape, basis_mode: BasisMode, range: f32) -> Self {
        Self {
            shape: Some(shape),
            basis_mode,
            range,
        }
    }
}

/// Per-tick playback state for one clip, produced by the host's playback system.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipFrame {
    pub clip: ClipId,
    pub progress: f32,
    pub weight: f32,
}

impl ClipFrame {
    pub fn new(clip: ClipId, progress: f32, weight: f32) -> Self {
        Self {
            clip,
            progress,
            weight,
        }
    }
}

/// What a call to [`Mixer::mix`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MixOutcome {
    /// No target this tick; binding postponed.
    Deferred,
    /// Zero total weight; target untouched.
    Held,
    /// Position written to the target.
    Applied(Vec3),
}

#[derive(Debug)]
enum MixerState<H> {
    Unbound,
    Bound {
        target: H,
        sources: Vec<(ClipId, BasisSource)>,
    },
}

#[derive(Debug)]
pub struct Mixer<H> {
    cfg: Config,
    ids: IdAllocator,
    clips: Vec<(ClipId, Clip)>,
    state: MixerState<H>,
}

impl<H: Copy + Eq + Debug> Default for Mixer<H> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<H: Copy + Eq + Debug> Mixer<H> {
    pub fn new(cfg: Config) -> Self {
        Self {
            clips: Vec::with_capacity(cfg.clip_capacity),
            cfg,
            ids: IdAllocator::new(),
            state: MixerState::Unbound,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Register a clip, returning its id.
    pub fn add_clip(&mut self, clip: Clip) -> ClipId {
        let id = self.ids.alloc_clip();
        self.clips.push((id, clip));
        id
    }

    /// Remove a clip and any basis resolved for it.
    pub fn remove_clip(&mut self, id: ClipId) -> Option<Clip> {
        let idx = self.clips.iter().position(|(c, _)| *c == id)?;
        let (_, clip) = self.clips.remove(idx);
        if let MixerState::Bound { sources, .. } = &mut self.state {
            sources.retain(|(c, _)| *c != id);
        }
        Some(clip)
    }

    pub fn clip(&self, id: ClipId) -> Option<&Clip> {
        self.clips
            .iter()
            .find_map(|(c, clip)| if *c == id { Some(clip) } else { None })
    }

    pub fn clip_mut(&mut self, id: ClipId) -> Option<&mut Clip> {
        self.clips
            .iter_mut()
            .find_map(|(c, clip)| if *c == id { Some(clip) } else { None })
    }

    pub fn clip_ids(&self) -> impl Iterator<Item = ClipId> + '_ {
        self.clips.iter().map(|(id, _)| *id)
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        matches!(self.state, MixerState::Bound { .. })
    }

    pub fn bound_target(&self) -> Option<H> {
        match &self.state {
            MixerState::Bound { target, .. } => Some(*target),
            MixerState::Unbound => None,
        }
    }

    /// Resolved basis source for a clip, once bound.
    pub fn basis_source(&self, id: ClipId) -> Option<BasisSource> {
        match &self.state {
            MixerState::Bound { sources, .. } => sources
                .iter()
                .find_map(|(c, s)| if *c == id { Some(*s) } else { None }),
            MixerState::Unbound => None,
        }
    }

    /// Unbound -> Bound. Every registered clip captures its basis source from
    /// the target's current frame. Binding a different target rebinds from
    /// scratch; binding the same target again is a no-op.
    pub fn bind<T>(&mut self, target: &T)
    where
        T: MixTarget<Handle = H> + ?Sized,
    {
        let handle = target.handle();
        if let MixerState::Bound { target: bound, .. } = &self.state {
            if *bound == handle {
                return;
            }
            debug!("mixer: rebinding from {bound:?} to {handle:?}");
        } else {
            let kinds: Vec<_> = self
                .clips
                .iter()
                .map(|(_, clip)| clip.shape.map(|s| s.kind()))
                .collect();
            debug!("mixer: binding {handle:?} with clip shapes {kinds:?}");
        }
        let current = target.basis();
        let sources = self
            .clips
            .iter()
            .map(|(id, clip)| (*id, BasisSource::capture(clip.basis_mode, &current)))
            .collect();
        self.state = MixerState::Bound {
            target: handle,
            sources,
        };
    }

    /// Bound -> Unbound, releasing resolved bases and the target handle.
    pub fn stop(&mut self) {
        if let MixerState::Bound { target, .. } = &self.state {
            debug!("mixer: released {target:?}");
        }
        self.state = MixerState::Unbound;
    }

    /// Blend the given frames and write the result into `target`.
    ///
    /// A missing target defers binding to a later tick. Frames with zero weight
    /// or for clips without a shape are left out of both sums; when nothing
    /// remains the target keeps its position.
    pub fn mix<T>(&mut self, target: Option<&mut T>, frames: &[ClipFrame]) -> MixOutcome
    where
        T: MixTarget<Handle = H> + ?Sized,
    {
        let Some(target) = target else {
            trace!("mixer: no target yet, deferring");
            return MixOutcome::Deferred;
        };
        self.bind(&*target);

        let live = target.basis();
        let mut acc = BlendAccumulator::new();
        for frame in frames {
            if frame.weight == 0.0 {
                continue;
            }
            let Some(clip) = self.clip(frame.clip).copied() else {
                warn!("mixer: frame references unknown clip {:?}", frame.clip);
                continue;
            };
            let source = self.resolve_source(frame.clip, clip.basis_mode, &live);
            acc.add_input(&BlendInput {
                shape: clip.shape,
                basis: source.resolve(&live),
                range: clip.range,
                progress: frame.progress,
                weight: frame.weight,
            });
        }

        match acc.finalize() {
            Some(position) => {
                target.set_position(position);
                MixOutcome::Applied(position)
            }
            None => {
                if self.cfg.log_held_ticks {
                    trace!(
                        "mixer: zero total weight, holding {:?} at {}",
                        target.handle(),
                        target.position()
                    );
                }
                MixOutcome::Held
            }
        }
    }

    /// Source for a clip in the bound state; clips added after binding capture
    /// the current frame on first use.
    fn resolve_source(&mut self, id: ClipId, mode: BasisMode, live: &Basis) -> BasisSource {
        match &mut self.state {
            MixerState::Bound { sources, .. } => {
                if let Some((_, s)) = sources.iter().find(|(c, _)| *c == id) {
                    *s
                } else {
                    let s = BasisSource::capture(mode, live);
                    sources.push((id, s));
                    s
                }
            }
            MixerState::Unbound => BasisSource::capture(mode, live),
        }
    }
}
