//! Random convex shapes circumscribing a sphere.
//!
//! Model
//! - Draw `sides` unit directions `u` uniformly on the sphere (rejection from
//!   the cube), and place a side tangent to the sphere of `radius` at `u`
//!   with its normal `-u` pointing into the shape.
//! - The origin is always strictly inside. Boundedness is checked by clipping
//!   with a large box and rejecting samples that reach it; the draw is retried
//!   up to `max_attempts` times from the same RNG stream.
//! - Determinism: the same `(params, seed)` gives the same shape.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{special, ConvexShape, Plane, ShapeCfg};
use crate::vec3::Vector3;

/// Error type for shape generators.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Parameters for `random_tangent_shape`.
#[derive(Clone, Copy, Debug)]
pub struct RandomTangentParams {
    /// Number of sides; at least 4 are needed to bound a region.
    pub sides: usize,
    /// Inscribed sphere radius.
    pub radius: f64,
    pub max_attempts: usize,
}

impl Default for RandomTangentParams {
    fn default() -> Self {
        Self {
            sides: 12,
            radius: 1.0,
            max_attempts: 16,
        }
    }
}

/// Clipping box half-width, in units of `radius`.
const BOUND_FACTOR: f64 = 1e3;

/// Draw a bounded random shape whose sides are all tangent to the sphere.
pub fn random_tangent_shape(
    params: RandomTangentParams,
    seed: u64,
) -> Result<ConvexShape, GeneratorError> {
    if params.sides < 4 {
        return Err(GeneratorError::invalid(format!(
            "need at least 4 sides, got {}",
            params.sides
        )));
    }
    if !(params.radius.is_finite() && params.radius > 0.0) {
        return Err(GeneratorError::invalid(format!(
            "radius must be positive and finite, got {}",
            params.radius
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..params.max_attempts.max(1) {
        let sides: Vec<Plane> = (0..params.sides)
            .map(|_| {
                let u = unit_direction(&mut rng);
                Plane::new(u * params.radius, -u)
            })
            .collect();
        let shape = ConvexShape::from_sides(sides);
        if is_bounded(&shape, params.radius) {
            return Ok(shape);
        }
    }
    Err(GeneratorError::degenerate(format!(
        "no bounded shape after {} attempts",
        params.max_attempts.max(1)
    )))
}

fn unit_direction<R: Rng>(rng: &mut R) -> Vector3 {
    loop {
        let v = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let l2 = v.length_squared();
        if l2 > 1e-6 && l2 <= 1.0 {
            return v.normalize();
        }
    }
}

/// Bounded (and within the clipping box) iff no vertex of the clipped shape lies on the box.
fn is_bounded(shape: &ConvexShape, radius: f64) -> bool {
    let half = BOUND_FACTOR * radius;
    let mut clipped = shape.clone();
    for side in special::cube(half).sides {
        clipped.push_side(side);
    }
    let verts = clipped.vertices(ShapeCfg::default());
    let inside = |v: &Vector3| {
        let a = v.abs();
        a.x.max(a.y).max(a.z) < half * (1.0 - 1e-6)
    };
    !verts.is_empty() && verts.iter().all(inside)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_params() {
        let p = RandomTangentParams {
            sides: 3,
            ..Default::default()
        };
        assert!(matches!(
            random_tangent_shape(p, 1),
            Err(GeneratorError::InvalidParams { .. })
        ));
        let p = RandomTangentParams {
            radius: -1.0,
            ..Default::default()
        };
        let err = random_tangent_shape(p, 1).unwrap_err();
        assert!(err.to_string().starts_with("invalid generator params"));
    }

    #[test]
    fn same_seed_same_shape() {
        let p = RandomTangentParams::default();
        let a = random_tangent_shape(p, 42).unwrap();
        let b = random_tangent_shape(p, 42).unwrap();
        assert_eq!(a.sides, b.sides);
        assert_eq!(a.sides.len(), 12);
    }

    #[test]
    fn sides_are_tangent_and_contain_origin() {
        let p = RandomTangentParams {
            sides: 16,
            radius: 2.0,
            max_attempts: 16,
        };
        let shape = random_tangent_shape(p, 7).unwrap();
        assert!(shape.contains(Vector3::zero()));
        for s in &shape.sides {
            assert!((s.center.length() - 2.0).abs() < 1e-12);
            assert!((s.offset() + 2.0).abs() < 1e-12);
        }
        let verts = shape.vertices(ShapeCfg::default());
        assert!(verts.len() >= 4);
        for v in verts {
            assert!(v.length() >= 2.0 - 1e-6);
            assert!(shape.contains(v));
        }
    }

    #[test]
    fn single_attempt_with_few_sides_can_fail_cleanly() {
        // four random tangent planes rarely enclose the origin's sphere
        let p = RandomTangentParams {
            sides: 4,
            radius: 1.0,
            max_attempts: 1,
        };
        for seed in 0..8 {
            match random_tangent_shape(p, seed) {
                Ok(shape) => assert_eq!(shape.vertices(ShapeCfg::default()).len(), 4),
                Err(e) => assert!(matches!(e, GeneratorError::DegenerateSample { .. })),
            }
        }
    }
}
