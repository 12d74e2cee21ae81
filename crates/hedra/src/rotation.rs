//! Euler angles → unit quaternion, and rotating points with it.
//!
//! Axis convention
//! - The angle vector `(ax, ay, az)` is combined with `ay` as the primary
//!   factor, `ax` secondary and `az` tertiary (half-angle product formula).
//!   The primary factor lands in the quaternion's `x` slot, so in world terms
//!   `ay` turns about the X axis, `ax` about the Y axis and `az` about Z.
//!   Shape placement downstream depends on this exact ordering.
//!
//! The quaternion is transient: it is produced by `Quat::from_euler` and
//! consumed by `Vector3::rotate_by`. There is no composition or inversion.

use crate::vec3::Vector3;

/// Unit quaternion `(x, y, z, w)`, `w` scalar part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quat {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    /// Half-angle product of the three Euler angles (radians) in `angles`.
    pub fn from_euler(angles: Vector3) -> Self {
        let (s1, c1) = (angles.y / 2.0).sin_cos();
        let (s2, c2) = (angles.x / 2.0).sin_cos();
        let (s3, c3) = (angles.z / 2.0).sin_cos();
        Self {
            x: s1 * c2 * c3 + c1 * s2 * s3,
            y: c1 * s2 * c3 - s1 * c2 * s3,
            z: c1 * c2 * s3 + s1 * s2 * c3,
            w: c1 * c2 * c3 - s1 * s2 * s3,
        }
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Vector3 {
    /// Interpret `self` as Euler angles and convert (see module docs for axis order).
    #[inline]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(self)
    }

    /// Rotate by unit quaternion `q` (`q v q⁻¹`), expanded into the rotation matrix rows.
    pub fn rotate_by(self, q: Quat) -> Self {
        let x2 = q.x * 2.0;
        let y2 = q.y * 2.0;
        let z2 = q.z * 2.0;
        let xx = q.x * x2;
        let yy = q.y * y2;
        let zz = q.z * z2;
        let xy = q.x * y2;
        let xz = q.x * z2;
        let yz = q.y * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        Self::new(
            (1.0 - (yy + zz)) * self.x + (xy - wz) * self.y + (xz + wy) * self.z,
            (xy + wz) * self.x + (1.0 - (xx + zz)) * self.y + (yz - wx) * self.z,
            (xz - wy) * self.x + (yz + wx) * self.y + (1.0 - (xx + yy)) * self.z,
        )
    }

    /// Rotate this point about `pivot` by the Euler angles in `angles`.
    #[inline]
    pub fn rotate_around(self, pivot: Self, angles: Self) -> Self {
        (self - pivot).rotate_by(angles.to_quat()) + pivot
    }
}
