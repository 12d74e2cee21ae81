//! Operator overloads: one impl per (verb, right-hand side) pair.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Vector3;

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Vector3 {
            type Output = Vector3;
            #[inline]
            fn $method(self, rhs: Vector3) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }
        impl $trait<f64> for Vector3 {
            type Output = Vector3;
            #[inline]
            fn $method(self, rhs: f64) -> Self::Output {
                Vector3::new(self.x $op rhs, self.y $op rhs, self.z $op rhs)
            }
        }
    };
}

impl_binop!(Add, add, +);
impl_binop!(Sub, sub, -);
impl_binop!(Mul, mul, *);
impl_binop!(Div, div, /);

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
