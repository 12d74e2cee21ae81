//! Immutable 3-component vector used as point, direction, or Euler angles.
//!
//! Purpose
//! - One small `Copy` value type carrying the whole arithmetic of the kernel.
//!   Every operation returns a fresh value; fields are public for reading and
//!   construction only (nothing here mutates a vector in place).
//!
//! Conventions
//! - Arithmetic is overloaded statically per right-hand side: `v + w` is
//!   component-wise, `v + s` broadcasts the scalar (see `ops.rs`).
//! - Division by zero follows IEEE-754 and propagates inf/NaN; nothing panics.
//! - `approx_eq` rounds the distance to `cfg::EQ_DECIMALS` digits before
//!   comparing with `cfg::EQ_TOL`. It is not transitive near the boundary.
//!
//! References
//! - Code cross-refs: `crate::rotation` (Euler/quaternion), `crate::side`
//!   (legality predicate), `fmt.rs` (textual form).

mod fmt;
mod ops;

use crate::cfg::{round_to, EQ_DECIMALS, EQ_TOL};

/// Three `f64` components. `Default` is the zero vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Same scalar in all three components.
    #[inline]
    pub const fn splat(s: f64) -> Self {
        Self::new(s, s, s)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(f64::abs)
    }

    /// Apply `f` to each component independently (e.g. rounding, clamping).
    #[inline]
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    #[inline]
    pub fn dot(self, v: Self) -> f64 {
        (self.x * v.x) + (self.y * v.y) + (self.z * v.z)
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Pre: `self.length() > 0`. The zero vector yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, v: Self) -> Self {
        Self::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    #[inline]
    pub fn distance(self, v: Self) -> f64 {
        (self - v).length()
    }

    /// Linear interpolation `self + (v - self) * alpha`; `alpha` outside [0,1] extrapolates.
    #[inline]
    pub fn lerp(self, v: Self, alpha: f64) -> Self {
        Self::new(
            self.x + (v.x - self.x) * alpha,
            self.y + (v.y - self.y) * alpha,
            self.z + (v.z - self.z) * alpha,
        )
    }

    /// Approximate equality: distance rounded to two decimals is at most 0.01.
    ///
    /// NaN distances compare unequal.
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        round_to(self.distance(other), EQ_DECIMALS) <= EQ_TOL
    }

    /// `approx_eq` against a possibly missing value; `None` is never equal.
    #[inline]
    pub fn approx_eq_opt(self, other: Option<&Self>) -> bool {
        other.is_some_and(|v| self.approx_eq(*v))
    }

    /// Round each component to the nearest integer (half away from zero).
    ///
    /// Each output component comes from its own input component; the
    /// `(x, z, z)` variant some shape pipelines relied on is not reproduced.
    #[inline]
    pub fn round(self) -> Self {
        self.map(f64::round)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    #[inline]
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    #[inline]
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
