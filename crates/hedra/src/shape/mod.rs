//! Convex shapes as intersections of half-spaces (planes).
//!
//! Purpose
//! - Build the vertex set of a convex shape from its bounding planes: intersect
//!   every triple of planes, keep the legal points (`Vector3::is_legal`), and
//!   merge near-duplicates with `Vector3::approx_eq`.
//!
//! Conventions
//! - A `Plane` is a centre point plus a normal pointing into the shape; it is
//!   the concrete `Side` used by this module.
//! - Plane equation: `n̂ · x = n̂ · center` with `n̂` the unit normal.
//! - Triple intersections solve a 3×3 system; near-singular triples
//!   (`|det| <= ShapeCfg::eps_det`, rows normalized) are skipped.
//!
//! Complexity
//! - `vertices` is O(S³) solves plus O(S) legality checks per candidate, which
//!   is fine for the tens of sides shapes use in practice.

pub mod rand;
pub mod special;
mod util;

use nalgebra::Matrix3;

use crate::cfg::DET_EPS;
use crate::side::Side;
use crate::vec3::Vector3;

use util::{combinations, dedup_approx};

/// Shape enumeration configuration.
#[derive(Clone, Copy, Debug)]
pub struct ShapeCfg {
    /// Skip plane triples whose (unit-row) determinant is at most this.
    pub eps_det: f64,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self { eps_det: DET_EPS }
    }
}

/// Bounding plane: a point on it and the normal pointing into the shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub center: Vector3,
    pub normal: Vector3,
}

impl Plane {
    #[inline]
    pub fn new(center: Vector3, normal: Vector3) -> Self {
        Self { center, normal }
    }

    /// Right-hand side `c` of `n̂ · x = c` (unit normal).
    #[inline]
    pub fn offset(&self) -> f64 {
        self.normal.normalize().dot(self.center)
    }

    /// Same plane turned about `pivot` by the Euler angles in `angles`.
    pub fn rotate_around(&self, pivot: Vector3, angles: Vector3) -> Self {
        let q = angles.to_quat();
        Self {
            center: (self.center - pivot).rotate_by(q) + pivot,
            normal: self.normal.rotate_by(q),
        }
    }
}

impl Side for Plane {
    #[inline]
    fn center(&self) -> Vector3 {
        self.center
    }
    #[inline]
    fn normal(&self) -> Vector3 {
        self.normal
    }
}

/// Common point of three planes, if they meet in exactly one finite point.
pub fn intersect_planes(a: &Plane, b: &Plane, c: &Plane, cfg: ShapeCfg) -> Option<Vector3> {
    let rows = [a, b, c].map(|p| nalgebra::Vector3::<f64>::from(p.normal.normalize()).transpose());
    let m = Matrix3::from_rows(&rows);
    let det = m.determinant();
    // NaN normals fail this check too
    if !(det.abs() > cfg.eps_det) {
        return None;
    }
    let inv = m.try_inverse()?;
    let rhs = nalgebra::Vector3::new(a.offset(), b.offset(), c.offset());
    let x = Vector3::from(inv * rhs);
    x.is_finite().then_some(x)
}

/// Convex shape given by its bounding planes (H-representation).
///
/// Invariants:
/// - `sides` may be empty or describe an unbounded region; `vertices` then
///   returns whatever legal triple intersections exist (possibly none).
#[derive(Clone, Debug, Default)]
pub struct ConvexShape {
    pub sides: Vec<Plane>,
}

impl ConvexShape {
    #[inline]
    pub fn from_sides(sides: Vec<Plane>) -> Self {
        Self { sides }
    }

    /// Append a side (intersection with one more half-space).
    #[inline]
    pub fn push_side(&mut self, side: Plane) {
        self.sides.push(side);
    }

    /// Is `p` inside every side (within the legality tolerance)?
    #[inline]
    pub fn contains(&self, p: Vector3) -> bool {
        p.is_legal(&self.sides)
    }

    /// Legal, de-duplicated intersection points of all side triples.
    ///
    /// Order follows the lexicographic order of the generating triples.
    pub fn vertices(&self, cfg: ShapeCfg) -> Vec<Vector3> {
        let idxs: Vec<usize> = (0..self.sides.len()).collect();
        let mut out = Vec::new();
        for comb in combinations(&idxs, 3) {
            let (a, b, c) = (&self.sides[comb[0]], &self.sides[comb[1]], &self.sides[comb[2]]);
            if let Some(x) = intersect_planes(a, b, c, cfg) {
                if x.is_legal(&self.sides) {
                    out.push(x);
                }
            }
        }
        dedup_approx(&mut out);
        out
    }

    /// Mean of the vertices; `None` when there are none.
    pub fn centroid(&self, cfg: ShapeCfg) -> Option<Vector3> {
        let verts = self.vertices(cfg);
        if verts.is_empty() {
            return None;
        }
        let sum = verts.iter().fold(Vector3::zero(), |acc, &v| acc + v);
        Some(sum / verts.len() as f64)
    }

    /// Rigidly rotate the whole shape about `pivot`.
    pub fn rotate_around(&self, pivot: Vector3, angles: Vector3) -> Self {
        Self {
            sides: self
                .sides
                .iter()
                .map(|s| s.rotate_around(pivot, angles))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests;
