//! Conversions to and from `glam`'s double-precision types.
//!
//! glam multiplies column vectors (`M * v`) while this crate multiplies row
//! vectors (`v × M`). The rows of a [`Mat3`] therefore become the columns of
//! the [`DMat3`], so both sides describe the same transform:
//!
//! ```
//! use lib3d::{Mat3, Vec3};
//! use glam::{DMat3, DVec3};
//!
//! let m = Mat3::z_axis_rotation(0.5).unwrap();
//! let v = Vec3::new(1.0, 2.0, 3.0).unwrap();
//!
//! let ours = v.multiply_matrix(&m).unwrap();
//! let theirs = DMat3::from(m) * DVec3::from(v);
//! assert!((DVec3::from(ours) - theirs).length() < 1e-12);
//! ```
//!
//! Conversions into this crate validate, since glam accepts NaN and infinity.

use glam::{DMat3, DVec3};

use crate::error::MathError;
use crate::mat3::Mat3;
use crate::vec3::Vec3;

impl From<Vec3> for DVec3 {
    fn from(v: Vec3) -> Self {
        DVec3::from_array(v.to_array())
    }
}

impl TryFrom<DVec3> for Vec3 {
    type Error = MathError;

    fn try_from(v: DVec3) -> Result<Self, Self::Error> {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Mat3> for DMat3 {
    fn from(m: Mat3) -> Self {
        DMat3::from_cols_array_2d(&m.to_rows_array())
    }
}

impl TryFrom<DMat3> for Mat3 {
    type Error = MathError;

    fn try_from(m: DMat3) -> Result<Self, Self::Error> {
        Mat3::try_from(m.to_cols_array_2d())
    }
}
