//! Bevy adapter for PathMotion.
//!
//! Gameplay code owns timing: it writes progress/weight per clip into
//! [`PathFrames`] (or progress into a [`PathFollower`]) every frame, and the
//! systems here evaluate the trajectories and write `Transform::translation`.

use bevy::prelude::*;
use pathmotion_core::Config;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{PathAnchor, PathFollower, PathFrames, PathMixer};
pub use resources::PathMotionSettings;
pub use systems::{basis_from_transform, TransformTarget};

/// Ordering handle for the evaluate/mix systems. Schedule writers of
/// [`PathFrames`] or follower progress `.before(PathMotionSet)`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathMotionSet;

#[derive(Default)]
pub struct PathMotionPlugin {
    pub config: Config,
}

impl Plugin for PathMotionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PathMotionSettings {
            config: self.config.clone(),
        })
        .add_systems(
            Update,
            (
                systems::release_mixers_system,
                systems::follow_paths_system,
                systems::mix_paths_system,
            )
                .chain()
                .in_set(PathMotionSet),
        );
    }
}
