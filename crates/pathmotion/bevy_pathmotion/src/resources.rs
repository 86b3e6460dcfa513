use bevy::prelude::*;
use pathmotion_core::Config;

/// Plugin-wide mixer configuration; use with [`crate::PathMixer::from_settings`].
#[derive(Resource, Debug, Clone, Default)]
pub struct PathMotionSettings {
    pub config: Config,
}
