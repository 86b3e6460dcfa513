//! Weighted blending of several trajectory evaluations into one position.

use glam::Vec3;

use crate::basis::Basis;
use crate::shape::Shape;

/// One active trajectory for one tick.
///
/// `weight` is not range-checked and need not sum to 1 across inputs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlendInput {
    /// `None` contributes nothing and is left out of the weight sum.
    pub shape: Option<Shape>,
    pub basis: Basis,
    pub range: f32,
    pub progress: f32,
    pub weight: f32,
}

impl BlendInput {
    pub fn new(shape: Shape, basis: Basis, range: f32, progress: f32, weight: f32) -> Self {
        Self {
            shape: Some(shape),
            basis,
            range,
            progress,
            weight,
        }
    }
}

/// Running weighted sum of positions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BlendAccumulator {
    sum: Vec3,
    weight: f32,
    count: usize,
}

impl BlendAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero weights are skipped outright, never counted.
    #[inline]
    pub fn add(&mut self, position: Vec3, weight: f32) {
        if weight == 0.0 {
            return;
        }
        self.sum += position * weight;
        self.weight += weight;
        self.count += 1;
    }

    /// Evaluate and add one input. Shapeless and zero-weight inputs are not
    /// evaluated.
    pub fn add_input(&mut self, input: &BlendInput) {
        if input.weight == 0.0 {
            return;
        }
        if let Some(shape) = &input.shape {
            let p = shape.evaluate(&input.basis, input.range, input.progress);
            self.add(p, input.weight);
        }
    }

    #[inline]
    pub fn total_weight(&self) -> f32 {
        self.weight
    }

    /// Number of contributions that made it into the sums.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Weighted mean, or `None` when the weight sum is not positive.
    pub fn finalize(&self) -> Option<Vec3> {
        if self.weight > 0.0 {
            Some(self.sum / self.weight)
        } else {
            None
        }
    }
}

/// Blend `inputs` in order. `None` means "leave the target where it is".
pub fn blend(inputs: &[BlendInput]) -> Option<Vec3> {
    let mut acc = BlendAccumulator::new();
    for input in inputs {
        acc.add_input(input);
    }
    acc.finalize()
}
