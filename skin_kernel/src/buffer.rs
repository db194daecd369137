//! Bounds checked copy and clear kernels for flat float buffers.
use crate::error::CopyError;

/// Copy the first `count` floats of `source` to the start of `destination`.
///
/// Both buffers are validated against `count` before any write,
/// so a failed call leaves `destination` untouched.
pub fn copy(source: &[f32], destination: &mut [f32], count: usize) -> Result<(), CopyError> {
    let src = source.get(..count).ok_or(CopyError::SourceTooSmall {
        needed: count,
        actual: source.len(),
    })?;
    let destination_len = destination.len();
    let dst = destination
        .get_mut(..count)
        .ok_or(CopyError::DestinationTooSmall {
            needed: count,
            actual: destination_len,
        })?;
    dst.copy_from_slice(src);
    Ok(())
}

/// Zero the entire buffer.
///
/// Used between frames to reset an accumulation target before the first
/// [add_weighted_deltas](crate::add_weighted_deltas) pass.
pub fn clear(buffer: &mut [f32]) {
    buffer.fill(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_exact_prefix() {
        let source = [1.0, 2.0, 3.0, 4.0];
        let mut destination = [9.0f32; 4];
        copy(&source, &mut destination, 3).unwrap();
        assert_eq!([1.0, 2.0, 3.0, 9.0], destination);
    }

    #[test]
    fn copy_full_buffer() {
        let source = [0.25, -1.5, f32::MAX];
        let mut destination = [0.0f32; 3];
        copy(&source, &mut destination, 3).unwrap();
        assert_eq!(source, destination);
    }

    #[test]
    fn copy_source_too_small() {
        let mut destination = [0.0f32; 4];
        assert!(matches!(
            copy(&[1.0, 2.0], &mut destination, 3),
            Err(CopyError::SourceTooSmall {
                needed: 3,
                actual: 2
            })
        ));
        assert_eq!([0.0; 4], destination);
    }

    #[test]
    fn copy_destination_too_small() {
        let mut destination = [0.0f32; 2];
        assert!(matches!(
            copy(&[1.0, 2.0, 3.0], &mut destination, 3),
            Err(CopyError::DestinationTooSmall {
                needed: 3,
                actual: 2
            })
        ));
        assert_eq!([0.0; 2], destination);
    }

    #[test]
    fn clear_zeroes_full_capacity() {
        let mut buffer = [1.0, -2.5, f32::NAN, f32::INFINITY];
        clear(&mut buffer);
        assert_eq!([0.0; 4], buffer);
    }
}
