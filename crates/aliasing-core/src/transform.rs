//! Fixed 4×4 model-to-view transforms.
//!
//! A [`CameraTransform`] stores 16 values in row-major order:
//!
//! ```text
//! m[0]  m[1]  m[2]  m[3]      r00 r01 r02 tx
//! m[4]  m[5]  m[6]  m[7]  =   r10 r11 r12 ty
//! m[8]  m[9]  m[10] m[11]     r20 r21 r22 tz
//! m[12] m[13] m[14] m[15]     0   0   0   1
//! ```
//!
//! The text form is the 16 values separated by whitespace, in the same order.

use std::fmt;
use std::str::FromStr;

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::error::{AliasingError, Result};

/// Row-major matrix values of the reference double-sheet view.
pub const DOUBLE_SHEET_VIEW: [f32; 16] = [
    0.395_732_8,
    0.886_019_8,
    0.241_587_49,
    -52.036_102,
    -0.724_881_9,
    0.462_873_6,
    -0.510_190_55,
    176.211_09,
    -0.563_863_4,
    0.026_776_686,
    0.825_433_97,
    70.760_185,
    0.0,
    0.0,
    0.0,
    1.0,
];

const AFFINE_ROW: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// An affine 4×4 transform with a fixed `[0, 0, 0, 1]` last row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 16]", into = "[f32; 16]")]
pub struct CameraTransform {
    rows: [f32; 16],
}

impl CameraTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rows: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates a transform from 16 row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`AliasingError::InvalidTransform`] if a value is not finite or
    /// the last row is not `[0, 0, 0, 1]`.
    pub fn from_row_major(rows: [f32; 16]) -> Result<Self> {
        if let Some(i) = rows.iter().position(|v| !v.is_finite()) {
            return Err(AliasingError::InvalidTransform(format!(
                "value {i} is not finite"
            )));
        }
        if rows[12..] != AFFINE_ROW {
            return Err(AliasingError::InvalidTransform(format!(
                "last row must be [0, 0, 0, 1], got {:?}",
                &rows[12..]
            )));
        }
        Ok(Self { rows })
    }

    /// The reference view of the double-sheet volume.
    ///
    /// Treated as calibration data for a 200×200×200 volume; not derived.
    #[must_use]
    pub fn double_sheet_view() -> Self {
        Self {
            rows: DOUBLE_SHEET_VIEW,
        }
    }

    /// Returns the 16 values in row-major order.
    #[must_use]
    pub fn to_row_major(&self) -> [f32; 16] {
        self.rows
    }

    /// Returns the value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < 4 && col < 4 {
            Some(self.rows[row * 4 + col])
        } else {
            None
        }
    }

    /// Converts to a column-major `glam` matrix.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array(&self.rows).transpose()
    }

    /// Converts from a `glam` matrix.
    ///
    /// # Errors
    ///
    /// Fails if the matrix is not affine.
    pub fn from_mat4(matrix: Mat4) -> Result<Self> {
        Self::from_row_major(matrix.transpose().to_cols_array())
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<[f32; 16]> for CameraTransform {
    type Error = AliasingError;

    fn try_from(rows: [f32; 16]) -> Result<Self> {
        Self::from_row_major(rows)
    }
}

impl From<CameraTransform> for [f32; 16] {
    fn from(t: CameraTransform) -> Self {
        t.rows
    }
}

impl FromStr for CameraTransform {
    type Err = AliasingError;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f32>().map_err(|e| {
                    AliasingError::InvalidTransform(format!("bad value '{tok}': {e}"))
                })
            })
            .collect::<Result<Vec<f32>>>()?;

        let rows: [f32; 16] = values.as_slice().try_into().map_err(|_| {
            AliasingError::InvalidTransform(format!("expected 16 values, got {}", values.len()))
        })?;
        Self::from_row_major(rows)
    }
}

impl fmt::Display for CameraTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const HOST_TEXT: &str = "0.3957328 0.8860198 0.24158749 -52.036102 -0.7248819 0.4628736 \
        -0.51019055 176.21109 -0.5638634 0.026776686 0.82543397 70.760185 0.0 0.0 0.0 1.0";

    #[test]
    fn test_parse_host_text() {
        let t: CameraTransform = HOST_TEXT.parse().unwrap();
        assert_eq!(t, CameraTransform::double_sheet_view());
    }

    #[test]
    fn test_display_reparses_exactly() {
        let t = CameraTransform::double_sheet_view();
        let back: CameraTransform = t.to_string().parse().unwrap();
        assert_eq!(back.to_row_major(), DOUBLE_SHEET_VIEW);
    }

    #[test]
    fn test_wrong_count_rejected() {
        let err = "1 0 0 0".parse::<CameraTransform>().unwrap_err();
        assert!(err.to_string().contains("expected 16 values, got 4"));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!("1 0 0 0 0 1 0 0 0 0 1 0 0 0 0 x"
            .parse::<CameraTransform>()
            .is_err());
    }

    #[test]
    fn test_non_affine_rejected() {
        let mut rows = CameraTransform::IDENTITY.to_row_major();
        rows[14] = 0.5;
        assert!(matches!(
            CameraTransform::from_row_major(rows),
            Err(AliasingError::InvalidTransform(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut rows = CameraTransform::IDENTITY.to_row_major();
        rows[3] = f32::NAN;
        assert!(CameraTransform::from_row_major(rows).is_err());
    }

    #[test]
    fn test_mat4_translation_column() {
        let m = CameraTransform::double_sheet_view().to_mat4();
        let origin = m.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(-52.036_102, 176.211_09, 70.760_185)).length() < 1e-4);
    }

    #[test]
    fn test_mat4_conversion_preserves_layout() {
        let t = CameraTransform::double_sheet_view();
        let back = CameraTransform::from_mat4(t.to_mat4()).unwrap();
        assert_eq!(back, t);
        assert_eq!(t.get(0, 3), Some(-52.036_102));
        assert_eq!(t.get(3, 3), Some(1.0));
        assert_eq!(t.get(4, 0), None);
    }

    #[test]
    fn test_serde_as_array() {
        let json = serde_json::to_string(&CameraTransform::IDENTITY).unwrap();
        assert_eq!(json.matches(',').count(), 15);
        let back: CameraTransform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CameraTransform::IDENTITY);

        let bad = "[1,0,0,0,0,1,0,0,0,0,1,0,0,0,1,1]";
        assert!(serde_json::from_str::<CameraTransform>(bad).is_err());
    }
}
