//! 8-bit grayscale volumes.
//!
//! A [`Volume`] is a regular `nx × ny × nz` grid of intensity samples with a
//! display name. Samples are stored Z-slice by Z-slice, so each slice is a
//! contiguous run of `nx * ny` bytes.

use std::fmt;

use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{AliasingError, Result};

/// Darkest sample value.
pub const MIN_INTENSITY: u8 = 0;

/// Brightest sample value.
pub const MAX_INTENSITY: u8 = u8::MAX;

/// One of the three grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(s)
    }
}

/// A named 3D grid of 8-bit intensity samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    name: String,
    dims: UVec3,
    data: Vec<u8>,
}

impl Volume {
    /// Creates a volume with every sample set to [`MIN_INTENSITY`].
    ///
    /// # Errors
    ///
    /// Returns [`AliasingError::InvalidName`] for an empty name,
    /// [`AliasingError::InvalidDimension`] if any dimension is zero and
    /// [`AliasingError::VolumeTooLarge`] if the voxel count overflows `usize`.
    pub fn black(name: impl Into<String>, nx: u32, ny: u32, nz: u32) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AliasingError::InvalidName);
        }
        for (axis, value) in [(Axis::X, nx), (Axis::Y, ny), (Axis::Z, nz)] {
            if value == 0 {
                return Err(AliasingError::InvalidDimension { axis, value });
            }
        }

        let len = usize::try_from(nx)
            .ok()
            .zip(usize::try_from(ny).ok())
            .zip(usize::try_from(nz).ok())
            .and_then(|((x, y), z)| x.checked_mul(y)?.checked_mul(z))
            .ok_or(AliasingError::VolumeTooLarge { nx, ny, nz })?;

        log::debug!("allocating {nx}x{ny}x{nz} volume '{name}' ({len} bytes)");

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            log::warn!("cannot allocate {len} bytes for volume '{name}': {e}");
            AliasingError::VolumeTooLarge { nx, ny, nz }
        })?;
        data.resize(len, MIN_INTENSITY);

        Ok(Self {
            name,
            dims: UVec3::new(nx, ny, nz),
            data,
        })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of samples along X, Y and Z.
    #[must_use]
    pub fn dims(&self) -> UVec3 {
        self.dims
    }

    /// Returns the number of Z slices.
    #[must_use]
    pub fn num_slices(&self) -> u32 {
        self.dims.z
    }

    /// Returns the total number of samples.
    #[must_use]
    pub fn num_voxels(&self) -> usize {
        self.data.len()
    }

    /// Returns the raw samples in `x + y*nx + z*nx*ny` order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the extent of the volume in voxel units, from the origin.
    #[must_use]
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        (Vec3::ZERO, self.dims.as_vec3())
    }

    /// Flattens a 3D sample index to a linear index.
    #[must_use]
    pub fn flatten_index(&self, x: u32, y: u32, z: u32) -> usize {
        let (nx, ny) = (self.dims.x as usize, self.dims.y as usize);
        x as usize + y as usize * nx + z as usize * nx * ny
    }

    /// Returns the sample at `(x, y, z)`, or `None` outside the grid.
    #[must_use]
    pub fn voxel(&self, x: u32, y: u32, z: u32) -> Option<u8> {
        if x >= self.dims.x || y >= self.dims.y || z >= self.dims.z {
            return None;
        }
        self.data.get(self.flatten_index(x, y, z)).copied()
    }

    /// Returns the samples of Z slice `z`, row by row.
    #[must_use]
    pub fn slice(&self, z: u32) -> Option<&[u8]> {
        if z >= self.dims.z {
            return None;
        }
        let start = self.flatten_index(0, 0, z);
        self.data.get(start..start + self.slice_len())
    }

    /// Sets every sample of Z slice `z` to `value`.
    ///
    /// Returns `false` and leaves the volume untouched if `z` is out of range.
    #[must_use]
    pub fn fill_slice(&mut self, z: u32, value: u8) -> bool {
        if z >= self.dims.z {
            return false;
        }
        let start = self.flatten_index(0, 0, z);
        let len = self.slice_len();
        match self.data.get_mut(start..start + len) {
            Some(slice) => {
                slice.fill(value);
                true
            }
            None => false,
        }
    }

    fn slice_len(&self) -> usize {
        self.dims.x as usize * self.dims.y as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_volume() {
        let v = Volume::black("v", 3, 4, 5).unwrap();
        assert_eq!(v.name(), "v");
        assert_eq!(v.dims(), UVec3::new(3, 4, 5));
        assert_eq!(v.num_voxels(), 60);
        assert!(v.as_bytes().iter().all(|&s| s == MIN_INTENSITY));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = Volume::black("v", 3, 0, 5).unwrap_err();
        assert!(matches!(
            err,
            AliasingError::InvalidDimension {
                axis: Axis::Y,
                value: 0
            }
        ));
    }

    #[test]
    fn test_unallocatable_volume_rejected() {
        let err = Volume::black("v", 4_000_000_000, 4_000_000_000, 1).unwrap_err();
        assert!(matches!(
            err,
            AliasingError::VolumeTooLarge {
                nx: 4_000_000_000,
                ny: 4_000_000_000,
                nz: 1
            }
        ));
    }

    #[test]
    fn test_overflowing_volume_rejected() {
        assert!(matches!(
            Volume::black("v", u32::MAX, u32::MAX, u32::MAX),
            Err(AliasingError::VolumeTooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            Volume::black("", 1, 1, 1),
            Err(AliasingError::InvalidName)
        ));
    }

    #[test]
    fn test_flatten_index() {
        let v = Volume::black("v", 3, 4, 5).unwrap();
        assert_eq!(v.flatten_index(0, 0, 0), 0);
        assert_eq!(v.flatten_index(1, 0, 0), 1);
        assert_eq!(v.flatten_index(0, 1, 0), 3);
        assert_eq!(v.flatten_index(0, 0, 1), 12);
        assert_eq!(v.flatten_index(2, 3, 4), 59);
    }

    #[test]
    fn test_fill_slice() {
        let mut v = Volume::black("v", 2, 2, 3).unwrap();
        assert!(v.fill_slice(1, MAX_INTENSITY));
        assert_eq!(v.slice(0), Some(&[0u8; 4][..]));
        assert_eq!(v.slice(1), Some(&[255u8; 4][..]));
        assert_eq!(v.slice(2), Some(&[0u8; 4][..]));
        assert_eq!(v.voxel(1, 1, 1), Some(MAX_INTENSITY));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut v = Volume::black("v", 2, 2, 2).unwrap();
        assert!(!v.fill_slice(2, MAX_INTENSITY));
        assert!(v.slice(2).is_none());
        assert!(v.voxel(2, 0, 0).is_none());
        assert!(v.as_bytes().iter().all(|&s| s == MIN_INTENSITY));
    }

    #[test]
    fn test_bounding_box() {
        let v = Volume::black("v", 10, 20, 30).unwrap();
        assert_eq!(v.bounding_box(), (Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0)));
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Z.to_string(), "Z");
    }

    proptest::proptest! {
        #[test]
        fn fill_slice_touches_only_that_slice(
            nx in 1u32..8, ny in 1u32..8, nz in 1u32..8, pick in 0u32..8
        ) {
            let z = pick % nz;
            let mut v = Volume::black("p", nx, ny, nz).unwrap();
            proptest::prop_assert!(v.fill_slice(z, MAX_INTENSITY));
            for k in 0..nz {
                let expected = if k == z { MAX_INTENSITY } else { MIN_INTENSITY };
                proptest::prop_assert!(v.slice(k).unwrap().iter().all(|&s| s == expected));
            }
        }
    }
}
