use std::fmt;
use std::ops::Neg;

use bytemuck::{NoUninit, Zeroable};

use crate::error::{MathError, MathResult};
use crate::mat3::Mat3;
use crate::validate::{ensure_all_finite, ensure_finite};

/// An immutable vector in three-dimensional cartesian space.
///
/// Every component is finite: the constructor rejects NaN and infinity, and
/// every operation builds its result through the same check, so an overflow
/// during arithmetic is reported instead of producing an invalid vector.
///
/// Vectors are row vectors. Multiplying by a matrix is `v × M`, see
/// [`Vec3::multiply_matrix`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, NoUninit)]
pub struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3::new_unchecked(0.0, 0.0, 0.0);

    /// Unit vector along the x axis.
    pub const X: Vec3 = Vec3::new_unchecked(1.0, 0.0, 0.0);

    /// Unit vector along the y axis.
    pub const Y: Vec3 = Vec3::new_unchecked(0.0, 1.0, 0.0);

    /// Unit vector along the z axis.
    pub const Z: Vec3 = Vec3::new_unchecked(0.0, 0.0, 1.0);

    /// Create a vector from its x, y and z components.
    ///
    /// Fails with [`MathError::NonFinite`] if any component is NaN or infinite.
    pub fn new(x: f64, y: f64, z: f64) -> MathResult<Self> {
        ensure_all_finite(&[("x", x), ("y", y), ("z", z)])?;
        Ok(Self::new_unchecked(x, y, z))
    }

    /// Callers must already know every component is finite.
    #[inline]
    pub(crate) const fn new_unchecked(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The x component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The z component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Raw bytes of the three components (native endianness, 24 bytes).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Compare within a tolerance.
    ///
    /// Returns true iff the absolute difference of every component is at most
    /// `epsilon`. A negative epsilon is accepted and never matches. Use `==`
    /// for exact comparison.
    pub fn approx_eq(&self, other: &Vec3, epsilon: f64) -> MathResult<bool> {
        ensure_finite("epsilon", epsilon)?;
        Ok((self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon)
    }

    /// Given `[a b c]`, returns `[-a -b -c]`.
    pub fn negate(&self) -> Vec3 {
        Self::new_unchecked(-self.x, -self.y, -self.z)
    }

    /// Given `[a b c]` and `[d e f]`, returns `[a+d b+e c+f]`.
    pub fn add(&self, v: &Vec3) -> MathResult<Vec3> {
        Vec3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }

    /// Given `[a b c]` and `[d e f]`, returns `[a-d b-e c-f]`.
    pub fn subtract(&self, v: &Vec3) -> MathResult<Vec3> {
        Vec3::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }

    /// Scale every component by `k`.
    pub fn multiply_scalar(&self, k: f64) -> MathResult<Vec3> {
        ensure_finite("k", k)?;
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }

    /// Row-vector product `self × m`.
    ///
    /// ```text
    /// [x*m11+y*m21+z*m31  x*m12+y*m22+z*m32  x*m13+y*m23+z*m33]
    /// ```
    pub fn multiply_matrix(&self, m: &Mat3) -> MathResult<Vec3> {
        Vec3::new(
            self.dot_product(&m.column(0)),
            self.dot_product(&m.column(1)),
            self.dot_product(&m.column(2)),
        )
    }

    /// Divide every component by `k`.
    ///
    /// A `k` of exactly zero (either sign) is [`MathError::DivideByZero`]; the
    /// finiteness check on `k` only runs after that.
    pub fn divide(&self, k: f64) -> MathResult<Vec3> {
        if k == 0.0 {
            return Err(MathError::DivideByZero);
        }
        ensure_finite("k", k)?;
        Vec3::new(self.x / k, self.y / k, self.z / k)
    }

    /// Dot product. Not validated, so overflow can give an infinite result.
    pub fn dot_product(&self, v: &Vec3) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Cross product `self × v`.
    pub fn cross_product(&self, v: &Vec3) -> MathResult<Vec3> {
        Vec3::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    /// Scalar triple product `self · (v1 × v2)`, the signed volume of the
    /// parallelepiped spanned by the three vectors.
    pub fn triple_product(&self, v1: &Vec3, v2: &Vec3) -> MathResult<f64> {
        Ok(self.dot_product(&v1.cross_product(v2)?))
    }

    /// Euclidean length. Not validated: very large vectors may report infinity.
    pub fn magnitude(&self) -> f64 {
        self.dot_product(self).sqrt()
    }

    /// Equivalent to `self.subtract(v)?.magnitude()`.
    pub fn distance(&self, v: &Vec3) -> MathResult<f64> {
        Ok(self.subtract(v)?.magnitude())
    }

    /// Scale to unit length. The zero vector has no direction and fails with
    /// [`MathError::DivideByZero`].
    pub fn normalize(&self) -> MathResult<Vec3> {
        self.divide(self.magnitude())
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        self.negate()
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl TryFrom<[f64; 3]> for Vec3 {
    type Error = MathError;

    fn try_from([x, y, z]: [f64; 3]) -> MathResult<Self> {
        Vec3::new(x, y, z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.x, self.y, self.z)
    }
}
