//! PathMotion Core (engine-agnostic)
//!
//! Procedural trajectories evaluated from normalized progress: a closed family
//! of path shapes (line, parabolic arc, helix) placed in an oriented [`Basis`],
//! plus a weighted blender that folds several concurrently active trajectories
//! into one world-space position per tick. Hosts (Bevy, custom loops) own
//! timing, weights and the transform that receives the result.

pub mod basis;
pub mod blend;
pub mod config;
pub mod easing;
pub mod envelope;
pub mod ids;
pub mod math;
pub mod mixer;
pub mod preset;
pub mod shape;

// Re-exports for consumers (adapters)
pub use basis::{Basis, BasisMode, BasisSource};
pub use blend::{blend, BlendAccumulator, BlendInput};
pub use config::Config;
pub use easing::EaseKind;
pub use envelope::EnvelopeKind;
pub use glam::{Quat, Vec3};
pub use ids::{ClipId, IdAllocator};
pub use math::{parabola, resolve_position, sincos};
pub use mixer::{Clip, ClipFrame, MixOutcome, MixTarget, Mixer};
pub use preset::{parse_preset_library_json, parse_shape_preset_json, PresetError, ShapePreset};
pub use shape::{ArcConfig, HelixConfig, LinearConfig, Shape, ShapeKind};
