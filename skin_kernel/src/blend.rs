//! The weighted delta accumulation kernel for blend passes.
use glam::Vec3;

use crate::error::BlendError;

/// Accumulate weighted delta vectors into the indexed vertex rows of `positions`.
///
/// For each `i` in `0..count`, the 3 float row at `deltas[i*3..]` scaled by
/// `weight` is added to the row at `positions[indices[i] as usize * 3..]`.
/// The kernel is purely additive, so the caller clears or populates
/// `positions` before the first pass of a frame and blends multiple
/// influences with one call per index and delta buffer pair.
/// Entries addressing the same vertex contribute in iteration order.
///
/// Buffer sizes and row alignment are validated before any write.
/// A negative or out of range index fails at the offending entry,
/// leaving contributions for earlier entries already applied.
pub fn add_weighted_deltas(
    positions: &mut [f32],
    indices: &[i16],
    deltas: &[f32],
    weight: f32,
    count: usize,
) -> Result<(), BlendError> {
    let positions_len = positions.len();
    let positions: &mut [Vec3] = bytemuck::try_cast_slice_mut(positions)
        .map_err(|_| BlendError::PositionsNotVec3Aligned { len: positions_len })?;
    let deltas: &[Vec3] = bytemuck::try_cast_slice(deltas)
        .map_err(|_| BlendError::DeltasNotVec3Aligned { len: deltas.len() })?;

    let entries = indices.get(..count).ok_or(BlendError::IndexBufferTooSmall {
        needed: count,
        actual: indices.len(),
    })?;
    let delta_rows = deltas.get(..count).ok_or(BlendError::DeltaBufferTooSmall {
        needed: count,
        actual: deltas.len(),
    })?;

    for (slot, (&index, delta)) in entries.iter().zip(delta_rows).enumerate() {
        let vertex_count = positions.len();
        let row = usize::try_from(index)
            .ok()
            .and_then(|vertex| positions.get_mut(vertex))
            .ok_or(BlendError::IndexOutOfRange {
                slot,
                index,
                vertex_count,
            })?;
        *row += *delta * weight;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_additive_contributions() {
        // Entries 0 and 2 both contribute to vertex 0.
        let mut positions = [0.0f32; 6];
        let indices = [0i16, 1, 0];
        let deltas = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        add_weighted_deltas(&mut positions, &indices, &deltas, 2.0, 3).unwrap();
        assert_eq!([2.0, 0.0, 2.0, 0.0, 2.0, 0.0], positions);
    }

    #[test]
    fn blend_zero_weight_leaves_positions_unchanged() {
        let mut positions = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let indices = [1i16, 0];
        let deltas = [0.5, 0.5, 0.5, -0.5, -0.5, -0.5];
        add_weighted_deltas(&mut positions, &indices, &deltas, 0.0, 2).unwrap();
        assert_eq!([1.0, 2.0, 3.0, 4.0, 5.0, 6.0], positions);
    }

    #[test]
    fn blend_twice_matches_double_weight() {
        let indices = [2i16, 0];
        let deltas = [0.25, -1.5, 3.0, 0.125, 0.5, -0.75];

        let mut twice = [0.0f32; 9];
        add_weighted_deltas(&mut twice, &indices, &deltas, 0.7, 2).unwrap();
        add_weighted_deltas(&mut twice, &indices, &deltas, 0.7, 2).unwrap();

        let mut once = [0.0f32; 9];
        add_weighted_deltas(&mut once, &indices, &deltas, 1.4, 2).unwrap();

        assert!(
            twice
                .iter()
                .zip(once.iter())
                .all(|(a, b)| approx::relative_eq!(a, b, epsilon = 0.0001f32))
        );
    }

    #[test]
    fn blend_partial_count() {
        let mut positions = [0.0f32; 6];
        let indices = [1i16, 0, 0];
        let deltas = [1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 4.0, 4.0, 4.0];
        add_weighted_deltas(&mut positions, &indices, &deltas, 1.0, 2).unwrap();
        assert_eq!([2.0, 2.0, 2.0, 1.0, 1.0, 1.0], positions);
    }

    #[test]
    fn blend_index_out_of_range() {
        let mut positions = [0.0f32; 6];
        assert!(matches!(
            add_weighted_deltas(&mut positions, &[2], &[1.0, 1.0, 1.0], 1.0, 1),
            Err(BlendError::IndexOutOfRange {
                slot: 0,
                index: 2,
                vertex_count: 2
            })
        ));
    }

    #[test]
    fn blend_negative_index() {
        let mut positions = [0.0f32; 6];
        assert!(matches!(
            add_weighted_deltas(&mut positions, &[-1], &[1.0, 1.0, 1.0], 1.0, 1),
            Err(BlendError::IndexOutOfRange {
                slot: 0,
                index: -1,
                vertex_count: 2
            })
        ));
    }

    #[test]
    fn blend_count_exceeds_index_buffer() {
        let mut positions = [0.0f32; 6];
        assert!(matches!(
            add_weighted_deltas(&mut positions, &[0], &[1.0, 1.0, 1.0], 1.0, 2),
            Err(BlendError::IndexBufferTooSmall {
                needed: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn blend_misaligned_positions() {
        let mut positions = [0.0f32; 5];
        assert!(matches!(
            add_weighted_deltas(&mut positions, &[0], &[1.0, 1.0, 1.0], 1.0, 1),
            Err(BlendError::PositionsNotVec3Aligned { len: 5 })
        ));
    }

    #[test]
    fn blend_misaligned_deltas() {
        let mut positions = [0.0f32; 6];
        assert!(matches!(
            add_weighted_deltas(&mut positions, &[0], &[1.0, 1.0], 1.0, 1),
            Err(BlendError::DeltasNotVec3Aligned { len: 2 })
        ));
    }
}
