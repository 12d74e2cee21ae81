//! Bounding sides of a convex region and the half-space legality predicate.
//!
//! A side is anything exposing a centre point and a normal. The accepted
//! half-space of a side is the one its normal points into: a point passes when
//! the direction from the centre to the point does not oppose the normal by
//! more than `LEGAL_EPS`. Plane intersections produce candidate vertices that
//! may lie outside some other side of the shape; `Vector3::is_legal` filters
//! those out.

use crate::cfg::LEGAL_EPS;
use crate::vec3::Vector3;

/// Read-only view of one bounding plane.
pub trait Side {
    /// A point on the plane.
    fn center(&self) -> Vector3;
    /// Normal pointing into the accepted half-space; need not be unit length.
    fn normal(&self) -> Vector3;
}

impl<T: Side + ?Sized> Side for &T {
    #[inline]
    fn center(&self) -> Vector3 {
        (**self).center()
    }
    #[inline]
    fn normal(&self) -> Vector3 {
        (**self).normal()
    }
}

impl Vector3 {
    /// True iff this point is inside (or on, within `LEGAL_EPS`) every side.
    ///
    /// Sides are checked in order and the first rejection returns `false`.
    /// A point equal to a side's centre gives NaN for that side, which does
    /// not reject; callers should not pass such points.
    pub fn is_legal<I>(self, sides: I) -> bool
    where
        I: IntoIterator,
        I::Item: Side,
    {
        for side in sides {
            let facing = (self - side.center()).normalize();
            if facing.dot(side.normal().normalize()) < -LEGAL_EPS {
                return false;
            }
        }
        true
    }
}
