use std::fmt;

use bytemuck::{NoUninit, Zeroable};

use crate::error::{MathError, MathResult};
use crate::validate::{ensure_all_finite, ensure_finite};
use crate::vec3::Vec3;

/// An immutable 3x3 matrix for transforming row vectors.
///
/// Entries are stored row-major and are always finite. Vectors multiply on the
/// left (`v × M`), so composing `a.multiply(&b)` applies `a` first, then `b`.
///
/// The public accessors ([`Mat3::get`], [`Mat3::row`], [`Mat3::col`]) use
/// 1-based indices, matching the `m11..m33` naming of the entries.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, NoUninit)]
pub struct Mat3 {
    rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Mat3 = Mat3 {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Create a matrix from its nine entries, row by row.
    ///
    /// Fails with [`MathError::NonFinite`] if any entry is NaN or infinite.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn new(
        m11: f64, m12: f64, m13: f64,
        m21: f64, m22: f64, m23: f64,
        m31: f64, m32: f64, m33: f64,
    ) -> MathResult<Self> {
        ensure_all_finite(&[
            ("m11", m11), ("m12", m12), ("m13", m13),
            ("m21", m21), ("m22", m22), ("m23", m23),
            ("m31", m31), ("m32", m32), ("m33", m33),
        ])?;
        Ok(Self {
            rows: [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]],
        })
    }

    /// Assemble a matrix from three row vectors.
    pub fn from_rows(r1: Vec3, r2: Vec3, r3: Vec3) -> Self {
        Self {
            rows: [r1.to_array(), r2.to_array(), r3.to_array()],
        }
    }

    /// Entries as `[[m11, m12, m13], [m21, ..], [m31, ..]]`.
    pub fn to_rows_array(&self) -> [[f64; 3]; 3] {
        self.rows
    }

    /// Raw bytes of the nine entries in row-major order (72 bytes).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Builder for the x axis: rows `[1 0 0] [0 c s] [0 s c]`.
    ///
    /// Unlike [`Mat3::axis_rotation`] with the x axis, the third row keeps a
    /// positive `s`, so the result is not orthogonal for most angles
    /// (its determinant is `cos 2θ`).
    #[rustfmt::skip]
    pub fn x_axis_rotation(theta: f64) -> MathResult<Self> {
        let (s, c) = ensure_finite("theta", theta)?.sin_cos();
        Mat3::new(
            1.0, 0.0, 0.0,
            0.0, c,   s,
            0.0, s,   c,
        )
    }

    /// Builder for the y axis: rows `[c 0 s] [0 1 0] [s 0 c]`.
    ///
    /// As with [`Mat3::x_axis_rotation`], both off-diagonal terms are `+s`.
    #[rustfmt::skip]
    pub fn y_axis_rotation(theta: f64) -> MathResult<Self> {
        let (s, c) = ensure_finite("theta", theta)?.sin_cos();
        Mat3::new(
            c,   0.0, s,
            0.0, 1.0, 0.0,
            s,   0.0, c,
        )
    }

    /// Rotation by `theta` radians about the z axis.
    #[rustfmt::skip]
    pub fn z_axis_rotation(theta: f64) -> MathResult<Self> {
        let (s, c) = ensure_finite("theta", theta)?.sin_cos();
        Mat3::new(
            c, s, 0.0,
            -s, c, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Rotation by `theta` radians about an arbitrary axis (Rodrigues' formula).
    ///
    /// The axis is normalized first, so its length does not matter; a zero
    /// axis fails with [`MathError::DivideByZero`].
    pub fn axis_rotation(axis: &Vec3, theta: f64) -> MathResult<Self> {
        let v = axis.normalize()?;
        log::debug!("rotation axis {} normalized to {}", axis, v);
        let (s, c) = ensure_finite("theta", theta)?.sin_cos();
        let nc = 1.0 - c;
        let (x, y, z) = (v.x(), v.y(), v.z());

        Mat3::new(
            x * x * nc + c,
            x * y * nc + s * z,
            x * z * nc - s * y,

            x * y * nc - s * z,
            y * y * nc + c,
            y * z * nc + s * x,

            x * z * nc + s * y,
            y * z * nc - s * x,
            z * z * nc + c,
        )
    }

    /// Uniform scale by `sf` on every axis.
    pub fn scale_uniform(sf: f64) -> MathResult<Self> {
        ensure_finite("sf", sf)?;
        Mat3::scale(sf, sf, sf)
    }

    /// Independent scale factors per axis.
    #[rustfmt::skip]
    pub fn scale(sfx: f64, sfy: f64, sfz: f64) -> MathResult<Self> {
        ensure_all_finite(&[("sfx", sfx), ("sfy", sfy), ("sfz", sfz)])?;
        Mat3::new(
            sfx, 0.0, 0.0,
            0.0, sfy, 0.0,
            0.0, 0.0, sfz,
        )
    }

    /// `I + sf * (axis ⊗ axis)`.
    ///
    /// The axis is used as given, not normalized: the effect grows with the
    /// square of its length.
    pub fn scale_along(axis: &Vec3, sf: f64) -> MathResult<Self> {
        ensure_finite("sf", sf)?;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        Mat3::new(
            sf * x * x + 1.0,
            sf * x * y,
            sf * x * z,

            sf * y * x,
            sf * y * y + 1.0,
            sf * y * z,

            sf * z * x,
            sf * z * y,
            sf * z * z + 1.0,
        )
    }

    /// Same as `scale_along(axis, 0.0)`.
    pub fn ortho_projection(axis: &Vec3) -> MathResult<Self> {
        Mat3::scale_along(axis, 0.0)
    }

    /// Same as `scale_along(axis, -1.0)`.
    pub fn reflection(axis: &Vec3) -> MathResult<Self> {
        Mat3::scale_along(axis, -1.0)
    }

    /// Entry at row `i`, column `j` (both 1-based).
    pub fn get(&self, i: usize, j: usize) -> MathResult<f64> {
        i.checked_sub(1)
            .and_then(|r| self.rows.get(r))
            .and_then(|row| j.checked_sub(1).and_then(|c| row.get(c)))
            .copied()
            .ok_or(MathError::MatrixIndex { i, j })
    }

    /// Row `i` (1-based) as a vector.
    pub fn row(&self, i: usize) -> MathResult<Vec3> {
        let entry = |j| self.get(i, j).map_err(|_| MathError::RowIndex(i));
        Ok(Vec3::new_unchecked(entry(1)?, entry(2)?, entry(3)?))
    }

    /// Column `i` (1-based) as a vector.
    pub fn col(&self, i: usize) -> MathResult<Vec3> {
        let entry = |r| self.get(r, i).map_err(|_| MathError::ColumnIndex(i));
        Ok(Vec3::new_unchecked(entry(1)?, entry(2)?, entry(3)?))
    }

    /// 0-based column access for callers that already hold a valid index.
    #[inline]
    pub(crate) fn column(&self, c: usize) -> Vec3 {
        Vec3::new_unchecked(self.rows[0][c], self.rows[1][c], self.rows[2][c])
    }

    #[inline]
    fn row_at(&self, r: usize) -> Vec3 {
        let [x, y, z] = self.rows[r];
        Vec3::new_unchecked(x, y, z)
    }

    /// Matrix product `self × m`: every row of `self` is multiplied by `m`.
    pub fn multiply(&self, m: &Mat3) -> MathResult<Mat3> {
        let p = self.row_at(0).multiply_matrix(m)?;
        let q = self.row_at(1).multiply_matrix(m)?;
        let r = self.row_at(2).multiply_matrix(m)?;
        Ok(Mat3::from_rows(p, q, r))
    }
}

impl TryFrom<[[f64; 3]; 3]> for Mat3 {
    type Error = MathError;

    fn try_from(rows: [[f64; 3]; 3]) -> MathResult<Self> {
        let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = rows;
        Mat3::new(m11, m12, m13, m21, m22, m23, m31, m32, m33)
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.row_at(0), self.row_at(1), self.row_at(2))
    }
}
