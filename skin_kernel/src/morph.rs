//! Morph target deformation passes over a shared rest position buffer.
//!
//! A [MorphBuffer] owns the rest positions for a mesh and a set of named
//! [MorphTarget] values. Each frame the host sets the active weights and
//! calls [apply](MorphBuffer::apply) to materialize deformed positions:
//! copy the rest positions and then accumulate each nonzero weighted target.
use glam::Vec3;
use log::warn;

use crate::{blend::add_weighted_deltas, buffer::copy, error::MorphError};

/// A named, sparse set of vertex displacements from the rest pose.
#[derive(Debug, PartialEq, Clone)]
pub struct MorphTarget {
    /// The name used by animations to identify this target.
    pub name: String,
    /// The vertex row in the position buffer for each displacement.
    pub vertex_indices: Vec<i16>,
    /// The displacement from the rest position at a weight of 1.0.
    pub displacements: Vec<Vec3>,
}

/// Rest positions and morph targets for a single mesh with per frame weights.
#[derive(Debug, PartialEq, Clone)]
pub struct MorphBuffer {
    rest_positions: Vec<f32>,
    targets: Vec<MorphTarget>,
    weights: Vec<f32>,
}

impl MorphBuffer {
    /// Validate `targets` against `rest_positions`,
    /// where each vertex row is 3 floats.
    /// All weights start at zero.
    ///
    /// Validating indices here keeps [apply](Self::apply) free of partial
    /// writes for well formed weights.
    pub fn new(rest_positions: Vec<f32>, targets: Vec<MorphTarget>) -> Result<Self, MorphError> {
        if rest_positions.len() % 3 != 0 {
            return Err(MorphError::RestPositionsNotVec3Aligned {
                len: rest_positions.len(),
            });
        }
        let vertex_count = rest_positions.len() / 3;

        for target in &targets {
            if target.vertex_indices.len() != target.displacements.len() {
                return Err(MorphError::DisplacementCountMismatch {
                    name: target.name.clone(),
                    indices: target.vertex_indices.len(),
                    displacements: target.displacements.len(),
                });
            }
            for &index in &target.vertex_indices {
                if index < 0 || index as usize >= vertex_count {
                    return Err(MorphError::IndexOutOfRange {
                        name: target.name.clone(),
                        index,
                        vertex_count,
                    });
                }
            }
        }

        let weights = vec![0.0; targets.len()];
        Ok(Self {
            rest_positions,
            targets,
            weights,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.rest_positions.len() / 3
    }

    pub fn rest_positions(&self) -> &[f32] {
        &self.rest_positions
    }

    pub fn targets(&self) -> &[MorphTarget] {
        &self.targets
    }

    /// Set the weight for the target named `name`.
    /// Unknown names are ignored since an animation can reference
    /// morphs not present on every mesh.
    pub fn set_weight(&mut self, name: &str, weight: f32) {
        match self.targets.iter().position(|t| t.name == name) {
            Some(i) => self.weights[i] = weight,
            None => warn!("no morph target with name {name:?}"),
        }
    }

    /// The current weight for `name` or `None` if no target has that name.
    pub fn weight(&self, name: &str) -> Option<f32> {
        self.targets
            .iter()
            .position(|t| t.name == name)
            .map(|i| self.weights[i])
    }

    /// Set every weight back to zero,
    /// so [apply](Self::apply) reproduces the rest pose.
    pub fn reset_weights(&mut self) {
        self.weights.fill(0.0);
    }

    /// Write the deformed positions for the current weights to the start of
    /// `output`, which must hold at least [vertex_count](Self::vertex_count)
    /// rows of 3 floats.
    ///
    /// Copies the rest positions and then accumulates each target with a
    /// nonzero weight in target order.
    pub fn apply(&self, output: &mut [f32]) -> Result<(), MorphError> {
        let count = self.rest_positions.len();
        copy(&self.rest_positions, output, count)?;
        let deformed = &mut output[..count];

        for (target, &weight) in self.targets.iter().zip(&self.weights) {
            if weight != 0.0 {
                add_weighted_deltas(
                    deformed,
                    &target.vertex_indices,
                    bytemuck::cast_slice(&target.displacements),
                    weight,
                    target.vertex_indices.len(),
                )?;
            }
        }

        Ok(())
    }
}
