use bevy::log::debug;
use bevy::prelude::*;
use bevy::utils::HashMap;
use pathmotion_core::{Basis, MixOutcome, MixTarget};

use crate::components::{PathAnchor, PathFollower, PathFrames, PathMixer};

/// Bevy forward is -Z; right and up are the rotated +X/+Y.
pub fn basis_from_transform(tf: &Transform) -> Basis {
    Basis::from_rotation(tf.translation, tf.rotation, Vec3::NEG_Z)
}

/// [`MixTarget`] over one entity's transform. `frame` is the entity's own
/// basis or its anchor's, resolved before the mix.
pub struct TransformTarget<'w> {
    pub entity: Entity,
    pub transform: Mut<'w, Transform>,
    pub frame: Basis,
}

impl MixTarget for TransformTarget<'_> {
    type Handle = Entity;

    fn handle(&self) -> Entity {
        self.entity
    }

    fn basis(&self) -> Basis {
        self.frame
    }

    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.translation = position;
    }
}

/// Snapshot anchor frames up front so the mutable pass can read them.
fn anchor_frames(anchors: &[Entity], transforms: &Query<&Transform>) -> HashMap<Entity, Basis> {
    let mut out = HashMap::default();
    for &anchor in anchors {
        if let Ok(tf) = transforms.get(anchor) {
            out.insert(anchor, basis_from_transform(tf));
        }
    }
    out
}

fn frame_for(
    entity: Entity,
    own: &Transform,
    anchor: Option<&PathAnchor>,
    frames: &HashMap<Entity, Basis>,
) -> Basis {
    match anchor {
        Some(PathAnchor(a)) => match frames.get(a) {
            Some(b) => *b,
            None => {
                debug!("pathmotion: anchor {a:?} of {entity:?} has no Transform; using own");
                basis_from_transform(own)
            }
        },
        None => basis_from_transform(own),
    }
}

/// Stop mixers whose [`PathFrames`] were removed so the next activation
/// captures fresh frames.
pub fn release_mixers_system(
    mut removed: RemovedComponents<PathFrames>,
    mut mixers: Query<&mut PathMixer>,
) {
    for entity in removed.read() {
        if let Ok(mut mixer) = mixers.get_mut(entity) {
            if mixer.0.is_bound() {
                mixer.0.stop();
            }
        }
    }
}

/// Evaluate single-trajectory followers at their current progress.
#[allow(clippy::type_complexity)]
pub fn follow_paths_system(
    mut set: ParamSet<(
        Query<&Transform>,
        Query<(Entity, &mut Transform, &mut PathFollower, Option<&PathAnchor>)>,
    )>,
) {
    let anchors: Vec<Entity> = set
        .p1()
        .iter()
        .filter_map(|(_, _, _, anchor)| anchor.map(|a| a.0))
        .collect();
    let frames = anchor_frames(&anchors, &set.p0());

    let mut followers = set.p1();
    for (entity, mut tf, mut follower, anchor) in followers.iter_mut() {
        let current = frame_for(entity, &tf, anchor, &frames);
        let basis = follower.frame_for(current);
        let position = follower
            .shape
            .evaluate(&basis, follower.range, follower.progress);
        tf.translation = position;
    }
}

/// Run every active mixer (one with [`PathFrames`]) once. Entities without a
/// `Transform` stay deferred until one is added.
#[allow(clippy::type_complexity)]
pub fn mix_paths_system(
    mut set: ParamSet<(
        Query<&Transform>,
        Query<(
            Entity,
            Option<&mut Transform>,
            &mut PathMixer,
            Option<&PathFrames>,
            Option<&PathAnchor>,
        )>,
    )>,
) {
    let anchors: Vec<Entity> = set
        .p1()
        .iter()
        .filter_map(|(_, _, _, _, anchor)| anchor.map(|a| a.0))
        .collect();
    let frames = anchor_frames(&anchors, &set.p0());

    let mut mixers = set.p1();
    for (entity, tf, mut mixer, clip_frames, anchor) in mixers.iter_mut() {
        let Some(PathFrames(clip_frames)) = clip_frames else {
            continue;
        };
        let outcome = match tf {
            Some(tf) => {
                let frame = frame_for(entity, &tf, anchor, &frames);
                let mut target = TransformTarget {
                    entity,
                    transform: tf,
                    frame,
                };
                mixer.0.mix(Some(&mut target), clip_frames)
            }
            None => mixer.0.mix::<TransformTarget>(None, clip_frames),
        };
        if outcome == MixOutcome::Deferred {
            debug!("pathmotion: mixer on {entity:?} waiting for a Transform");
        }
    }
}
