//! Canonical convex shapes used in tests, benches and the CLI.
//!
//! - Cube `[-a,a]^3`: 6 sides, 8 vertices.
//! - Octahedron `{|x|+|y|+|z| <= r}`: 8 sides, 6 vertices at `±r e_i`.
//! - Regular n-gon prism around the z axis: n+2 sides, 2n vertices.
//!
//! Every side's centre is the centroid of its face, so no vertex coincides
//! with a centre (see `Vector3::is_legal`).

use std::f64::consts::TAU;

use super::{ConvexShape, Plane};
use crate::vec3::Vector3;

/// Axis-aligned cube `[-a,a]^3`.
pub fn cube(a: f64) -> ConvexShape {
    let axes = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ];
    let mut sides = Vec::with_capacity(6);
    for e in axes {
        sides.push(Plane::new(e * a, -e));
        sides.push(Plane::new(e * -a, e));
    }
    ConvexShape::from_sides(sides)
}

/// Octahedron (ℓ1 ball) of radius `r`: one side per sign pattern `s·x <= r`.
pub fn octahedron(r: f64) -> ConvexShape {
    let mut sides = Vec::with_capacity(8);
    for &sx in &[-1.0, 1.0] {
        for &sy in &[-1.0, 1.0] {
            for &sz in &[-1.0, 1.0] {
                let s = Vector3::new(sx, sy, sz);
                sides.push(Plane::new(s * (r / 3.0), -s));
            }
        }
    }
    ConvexShape::from_sides(sides)
}

/// Regular `n`-gon prism: apothem `apothem`, z in `[-half_height, half_height]`.
///
/// `n` is clamped to at least 3. For large `n` the legality tolerance starts
/// to accept intersections of nearly parallel non-adjacent sides; keep `n`
/// moderate (≲ 24 for unit proportions).
pub fn prism(n: usize, apothem: f64, half_height: f64) -> ConvexShape {
    let n = n.max(3);
    let mut sides = Vec::with_capacity(n + 2);
    for k in 0..n {
        let theta = TAU * (k as f64) / (n as f64);
        let out = Vector3::new(theta.cos(), theta.sin(), 0.0);
        sides.push(Plane::new(out * apothem, -out));
    }
    let ez = Vector3::new(0.0, 0.0, 1.0);
    sides.push(Plane::new(ez * half_height, -ez));
    sides.push(Plane::new(ez * -half_height, ez));
    ConvexShape::from_sides(sides)
}
