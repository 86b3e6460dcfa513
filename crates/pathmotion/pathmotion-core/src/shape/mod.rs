//! Closed family of trajectory shapes.
//!
//! Each shape pairs a small plain-data config with a pure evaluation function
//! `(basis, range, t) -> position`. [`Shape`] dispatches over the family by
//! match; configs never reference a [`Basis`].

pub mod arc;
pub mod helix;
pub mod linear;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::basis::Basis;

pub use arc::ArcConfig;
pub use helix::HelixConfig;
pub use linear::LinearConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Linear,
    Arc,
    Helix,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Linear(LinearConfig),
    Arc(ArcConfig),
    Helix(HelixConfig),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Linear(_) => ShapeKind::Linear,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Helix(_) => ShapeKind::Helix,
        }
    }

    /// World-space position at progress `t`. `t` is not clamped.
    #[inline]
    pub fn evaluate(&self, basis: &Basis, range: f32, t: f32) -> Vec3 {
        match self {
            Shape::Linear(cfg) => linear::evaluate(cfg, basis, range, t),
            Shape::Arc(cfg) => arc::evaluate(cfg, basis, range, t),
            Shape::Helix(cfg) => helix::evaluate(cfg, basis, range, t),
        }
    }

    pub fn start_point(&self, basis: &Basis, range: f32) -> Vec3 {
        self.evaluate(basis, range, 0.0)
    }

    pub fn end_point(&self, basis: &Basis, range: f32) -> Vec3 {
        self.evaluate(basis, range, 1.0)
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Linear(LinearConfig::default())
    }
}

impl From<LinearConfig> for Shape {
    fn from(cfg: LinearConfig) -> Self {
        Shape::Linear(cfg)
    }
}

impl From<ArcConfig> for Shape {
    fn from(cfg: ArcConfig) -> Self {
        Shape::Arc(cfg)
    }
}

impl From<HelixConfig> for Shape {
    fn from(cfg: HelixConfig) -> Self {
        Shape::Helix(cfg)
    }
}
