//! The bone matrix gather kernel.
use crate::error::GatherError;

/// Gather 16 float matrix rows from `pool` into a dense `output` buffer.
///
/// For each `i` in `0..count`, the row at `pool[indices[i] as usize * 16..]`
/// is copied to `output[i*16..]`. This materializes one matrix per influence
/// slot so a shader skinning pass can consume the matrices without indirect
/// lookups. Duplicate indices produce duplicate rows.
///
/// The 16 floats are moved as an opaque payload, so the caller's matrix
/// convention (row or column major) is preserved exactly.
pub fn gather_bone_matrices(
    pool: &[f32],
    indices: &[i16],
    output: &mut [f32],
    count: usize,
) -> Result<(), GatherError> {
    let rows: &[[f32; 16]] = bytemuck::try_cast_slice(pool)
        .map_err(|_| GatherError::PoolNotMatrixAligned { len: pool.len() })?;
    let entries = indices
        .get(..count)
        .ok_or(GatherError::IndexBufferTooSmall {
            needed: count,
            actual: indices.len(),
        })?;

    let needed = count * 16;
    let output_len = output.len();
    let output = output.get_mut(..needed).ok_or(GatherError::OutputTooSmall {
        needed,
        actual: output_len,
    })?;

    for ((slot, &index), out_row) in entries.iter().enumerate().zip(output.chunks_exact_mut(16)) {
        let row = usize::try_from(index)
            .ok()
            .and_then(|i| rows.get(i))
            .ok_or(GatherError::IndexOutOfRange {
                slot,
                index,
                matrix_count: rows.len(),
            })?;
        out_row.copy_from_slice(row);
    }

    Ok(())
}
