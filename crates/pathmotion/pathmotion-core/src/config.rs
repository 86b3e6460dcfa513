//! Mixer configuration.

use serde::{Deserialize, Serialize};

/// Sizing hints and diagnostics toggles.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial capacity hint for the clip table.
    pub clip_capacity: usize,
    /// Emit a trace record on every tick that holds the last position.
    pub log_held_ticks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clip_capacity: 16,
            log_held_ticks: false,
        }
    }
}
