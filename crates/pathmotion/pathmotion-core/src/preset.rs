//! Named shape presets loaded from JSON.
//!
//! ```json
//! { "name": "lob", "range": 10.0, "basis_mode": "cached",
//!   "shape": { "kind": "arc", "height": 2.0, "peak_bias": 0.7 } }
//! ```
//!
//! Arc peak bias is clamped during deserialization, the same as through
//! [`ArcConfig::new`](crate::ArcConfig::new).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::basis::BasisMode;
use crate::mixer::Clip;
use crate::shape::Shape;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("preset name must not be empty")]
    EmptyName,
    #[error("preset '{preset}': field '{field}' is not finite")]
    NonFiniteField { preset: String, field: &'static str },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapePreset {
    pub name: String,
    pub shape: Shape,
    #[serde(default)]
    pub basis_mode: BasisMode,
    pub range: f32,
}

impl ShapePreset {
    pub fn into_clip(self) -> Clip {
        Clip::new(self.shape, self.basis_mode, self.range)
    }

    fn validate(self) -> Result<Self, PresetError> {
        if self.name.trim().is_empty() {
            return Err(PresetError::EmptyName);
        }
        let mut fields: Vec<(&'static str, f32)> = vec![("range", self.range)];
        match &self.shape {
            Shape::Linear(_) => {}
            Shape::Arc(cfg) => {
                fields.push(("height", cfg.height));
                fields.push(("peak_bias", cfg.peak_bias));
            }
            Shape::Helix(cfg) => {
                fields.push(("radius", cfg.radius));
                fields.push(("frequency", cfg.frequency));
                fields.push(("phase_degrees", cfg.phase_degrees));
            }
        }
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PresetError::NonFiniteField {
                preset: self.name.clone(),
                field,
            });
        }
        Ok(self)
    }
}

/// Parse a single preset object.
pub fn parse_shape_preset_json(json: &str) -> Result<ShapePreset, PresetError> {
    let preset: ShapePreset = serde_json::from_str(json)?;
    preset.validate()
}

/// Parse either `[preset, ...]` or `{ "presets": [preset, ...] }`.
pub fn parse_preset_library_json(json: &str) -> Result<Vec<ShapePreset>, PresetError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Library {
        List(Vec<ShapePreset>),
        Wrapped { presets: Vec<ShapePreset> },
    }

    let presets = match serde_json::from_str::<Library>(json)? {
        Library::List(p) => p,
        Library::Wrapped { presets } => presets,
    };
    presets.into_iter().map(ShapePreset::validate).collect()
}
