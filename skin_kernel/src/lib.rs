//! # skin_kernel
//! skin_kernel provides the per frame buffer kernels for a linear blend skinning
//! and morph deformation pipeline: weighted delta accumulation, bone matrix
//! gathering, buffer copy, and buffer clear over flat caller owned buffers.
//!
//! The host animation system owns and allocates every buffer.
//! The kernels never allocate, never retain state between calls,
//! and run to completion on the calling thread.
//! Vertex attributes are 3 float rows, bone matrices are opaque 16 float rows,
//! and indirection goes through 16 bit signed index buffers.
//!
//! Each call validates buffer sizes, row alignment, and index ranges and
//! reports violations as errors instead of reading or writing out of bounds.
//! See [error] for the failure taxonomy.
//!
//! # Getting Started
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Accumulate two weighted influence passes into a cleared position buffer.
//! let mut positions = vec![0.5f32; 6];
//! skin_kernel::clear(&mut positions);
//! let deltas = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! skin_kernel::add_weighted_deltas(&mut positions, &[0, 1], &deltas, 0.5, 2)?;
//! skin_kernel::add_weighted_deltas(&mut positions, &[1], &[0.0, 0.0, 2.0], 0.25, 1)?;
//!
//! // Materialize matrices per influence slot for a shader skinning pass.
//! let pool: Vec<f32> = (0..32).map(|i| i as f32).collect();
//! let mut matrices = vec![0.0f32; 3 * 16];
//! skin_kernel::gather_bone_matrices(&pool, &[1, 0, 1], &mut matrices, 3)?;
//! # Ok(())
//! # }
//! ```
pub use blend::add_weighted_deltas;
pub use buffer::{clear, copy};
pub use matrix::gather_bone_matrices;
pub use morph::{MorphBuffer, MorphTarget};

pub mod blend;
pub mod buffer;
pub mod error;
pub mod matrix;
pub mod morph;
