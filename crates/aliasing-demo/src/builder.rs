//! Construction of the double-sheet volume.
//!
//! The volume is black except for its first and last Z slices, which are
//! set to full intensity. Viewed edge-on, the two sheets are nearly parallel
//! to the viewing direction, which is where renderers undersample.

use aliasing_core::{Result, Volume, MAX_INTENSITY};

/// Builds the double-sheet volume `name` with `nx × ny × nz` samples.
///
/// With `nz == 1` the first and last slices are the same slice, so the whole
/// volume is bright.
///
/// # Errors
///
/// Fails with [`aliasing_core::AliasingError::InvalidDimension`] if any
/// dimension is zero, or [`aliasing_core::AliasingError::InvalidName`] if
/// `name` is empty.
pub fn build(name: &str, nx: u32, ny: u32, nz: u32) -> Result<Volume> {
    let mut volume = Volume::black(name, nx, ny, nz)?;
    let first = volume.fill_slice(0, MAX_INTENSITY);
    let last = volume.fill_slice(nz - 1, MAX_INTENSITY);
    debug_assert!(first && last, "boundary slices of a {nz}-slice volume are in range");
    log::info!("built volume '{name}' ({nx}x{ny}x{nz}), sheets at z=0 and z={}", nz - 1);
    Ok(volume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aliasing_core::{AliasingError, Axis, MIN_INTENSITY};
    use proptest::prelude::*;

    fn slice_is(volume: &Volume, z: u32, value: u8) -> bool {
        volume
            .slice(z)
            .is_some_and(|s| s.iter().all(|&v| v == value))
    }

    #[test]
    fn test_reference_volume() {
        let v = build("Double_Sheet", 200, 200, 200).unwrap();
        assert_eq!(v.name(), "Double_Sheet");
        assert_eq!(v.num_voxels(), 8_000_000);
        assert!(slice_is(&v, 0, MAX_INTENSITY));
        assert!(slice_is(&v, 199, MAX_INTENSITY));
        assert!(slice_is(&v, 100, MIN_INTENSITY));
        let bright = v.as_bytes().iter().filter(|&&s| s == MAX_INTENSITY).count();
        assert_eq!(bright, 2 * 200 * 200);
    }

    #[test]
    fn test_single_slice_is_bright() {
        let v = build("flat", 5, 4, 1).unwrap();
        assert!(slice_is(&v, 0, MAX_INTENSITY));
    }

    #[test]
    fn test_two_slices_both_bright() {
        let v = build("pair", 3, 3, 2).unwrap();
        assert!(v.as_bytes().iter().all(|&s| s == MAX_INTENSITY));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        for (dims, axis) in [
            ((0, 1, 1), Axis::X),
            ((1, 0, 1), Axis::Y),
            ((1, 1, 0), Axis::Z),
        ] {
            let err = build("bad", dims.0, dims.1, dims.2).unwrap_err();
            match err {
                AliasingError::InvalidDimension { axis: got, value } => {
                    assert_eq!(got, axis);
                    assert_eq!(value, 0);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(build("", 1, 1, 1), Err(AliasingError::InvalidName)));
    }

    proptest! {
        #[test]
        fn only_boundary_slices_are_bright(nx in 1u32..12, ny in 1u32..12, nz in 1u32..12) {
            let v = build("p", nx, ny, nz).unwrap();
            for z in 0..nz {
                let expected = if z == 0 || z == nz - 1 { MAX_INTENSITY } else { MIN_INTENSITY };
                prop_assert!(slice_is(&v, z, expected));
            }
        }

        #[test]
        fn build_is_deterministic(nx in 1u32..12, ny in 1u32..12, nz in 1u32..12) {
            let a = build("p", nx, ny, nz).unwrap();
            let b = build("p", nx, ny, nz).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
