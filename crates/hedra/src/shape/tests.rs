//! Vertex enumeration on the canonical shapes.
//!
//! We check counts, that every vertex is legal for its own shape, and that
//! rigid rotations carry vertices along.

use super::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

fn contains_approx(set: &[Vector3], p: Vector3) -> bool {
    set.iter().any(|q| q.approx_eq(p))
}

#[test]
fn cube_has_eight_corners() {
    let cube = special::cube(1.0);
    assert_eq!(cube.sides.len(), 6);
    let verts = cube.vertices(ShapeCfg::default());
    assert_eq!(verts.len(), 8);
    for &sx in &[-1.0, 1.0] {
        for &sy in &[-1.0, 1.0] {
            for &sz in &[-1.0, 1.0] {
                assert!(contains_approx(&verts, Vector3::new(sx, sy, sz)));
            }
        }
    }
    assert!(cube.contains(Vector3::zero()));
    assert!(!cube.contains(Vector3::new(5.0, 0.0, 0.0)));
}

#[test]
fn octahedron_has_six_tips() {
    let oct = special::octahedron(2.0);
    assert_eq!(oct.sides.len(), 8);
    let verts = oct.vertices(ShapeCfg::default());
    assert_eq!(verts.len(), 6);
    for e in [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ] {
        assert!(contains_approx(&verts, e * 2.0));
        assert!(contains_approx(&verts, e * -2.0));
    }
    // cube corner direction is outside the ℓ1 ball
    assert!(!oct.contains(Vector3::new(1.0, 1.0, 1.0)));
    assert!(oct.contains(Vector3::new(0.5, 0.5, 0.5)));
}

#[test]
fn hexagonal_prism_vertex_count() {
    let p = special::prism(6, 1.0, 0.5);
    assert_eq!(p.sides.len(), 8);
    let verts = p.vertices(ShapeCfg::default());
    assert_eq!(verts.len(), 12);
    let circum = 1.0 / (std::f64::consts::PI / 6.0).cos();
    for v in &verts {
        assert!((v.z.abs() - 0.5).abs() < 1e-9);
        assert!(((v.x * v.x + v.y * v.y).sqrt() - circum).abs() < 1e-9);
    }
    // n is clamped to a triangle
    assert_eq!(special::prism(1, 1.0, 1.0).vertices(ShapeCfg::default()).len(), 6);
}

#[test]
fn vertices_are_legal_and_centroid_is_origin() {
    for shape in [special::cube(0.5), special::octahedron(1.0), special::prism(5, 1.0, 2.0)] {
        let verts = shape.vertices(ShapeCfg::default());
        assert!(!verts.is_empty());
        for v in &verts {
            assert!(v.is_legal(&shape.sides));
        }
        let c = shape.centroid(ShapeCfg::default()).unwrap();
        assert!(c.length() < 1e-9, "centroid {c}");
    }
}

#[test]
fn intersect_planes_solves_and_rejects_parallel() {
    let cfg = ShapeCfg::default();
    let a = Plane::new(Vector3::new(2.0, 0.0, 0.0), Vector3::new(-3.0, 0.0, 0.0));
    let b = Plane::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
    let c = Plane::new(Vector3::new(0.0, 0.0, 4.0), Vector3::new(0.0, 0.0, -0.5));
    let x = intersect_planes(&a, &b, &c, cfg).unwrap();
    assert!(x.distance(Vector3::new(2.0, -1.0, 4.0)) < 1e-12);

    let a2 = Plane::new(Vector3::new(5.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
    assert!(intersect_planes(&a, &a2, &b, cfg).is_none());
    let zero = Plane::new(Vector3::zero(), Vector3::zero());
    assert!(intersect_planes(&zero, &b, &c, cfg).is_none());
}

#[test]
fn plane_offset_uses_unit_normal() {
    let p = Plane::new(Vector3::new(0.0, 0.0, 3.0), Vector3::new(0.0, 0.0, -10.0));
    assert!((p.offset() + 3.0).abs() < 1e-12);
}

#[test]
fn empty_and_unbounded_shapes() {
    let empty = ConvexShape::default();
    assert!(empty.vertices(ShapeCfg::default()).is_empty());
    assert!(empty.centroid(ShapeCfg::default()).is_none());
    assert!(empty.contains(Vector3::new(1.0, 2.0, 3.0)));

    // a single corner: three half-spaces x,y,z >= 0
    let mut corner = ConvexShape::default();
    corner.push_side(Plane::new(Vector3::new(0.0, 1.0, 1.0), Vector3::new(1.0, 0.0, 0.0)));
    corner.push_side(Plane::new(Vector3::new(1.0, 0.0, 1.0), Vector3::new(0.0, 1.0, 0.0)));
    corner.push_side(Plane::new(Vector3::new(1.0, 1.0, 0.0), Vector3::new(0.0, 0.0, 1.0)));
    let verts = corner.vertices(ShapeCfg::default());
    assert_eq!(verts.len(), 1);
    assert!(verts[0].approx_eq(Vector3::zero()));
}

#[test]
fn cutting_a_corner_adds_vertices() {
    let mut cube = special::cube(1.0);
    // cut off the (1,1,1) corner with x+y+z <= 2
    let n = Vector3::new(1.0, 1.0, 1.0);
    cube.push_side(Plane::new(n * (2.0 / 3.0), -n));
    let verts = cube.vertices(ShapeCfg::default());
    assert_eq!(verts.len(), 10);
    assert!(!contains_approx(&verts, Vector3::new(1.0, 1.0, 1.0)));
    assert!(contains_approx(&verts, Vector3::new(1.0, 1.0, 0.0)));
    assert!(contains_approx(&verts, Vector3::new(0.0, 1.0, 1.0)));
}

#[test]
fn rotated_shape_carries_vertices() {
    let cube = special::cube(1.0);
    let pivot = Vector3::new(1.0, 1.0, 1.0);
    let angles = Vector3::new(0.0, 0.0, FRAC_PI_4);
    let turned = cube.rotate_around(pivot, angles);
    let expected: Vec<Vector3> = cube
        .vertices(ShapeCfg::default())
        .into_iter()
        .map(|v| v.rotate_around(pivot, angles))
        .collect();
    let got = turned.vertices(ShapeCfg::default());
    assert_eq!(got.len(), expected.len());
    for e in expected {
        assert!(contains_approx(&got, e));
    }
    // pivot corner stays put
    assert!(contains_approx(&got, pivot));

    let quarter = cube.rotate_around(Vector3::zero(), Vector3::new(FRAC_PI_2, 0.0, 0.0));
    assert_eq!(quarter.vertices(ShapeCfg::default()).len(), 8);
}
