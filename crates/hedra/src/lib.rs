//! 3D vector kernel for convex shapes cut out of half-spaces.
//!
//! Layout
//! - `vec3`: immutable `Vector3` value type (arithmetic, queries, text form).
//! - `rotation`: Euler angles → `Quat` and the closed-form point rotation.
//! - `side`: the `Side` collaborator trait and the half-space legality predicate.
//! - `shape`: plane-triple intersection and vertex enumeration built on the kernel.
//! - `cfg`: tolerance constants shared by all of the above.
//!
//! API Policy
//! - Every kernel operation is a pure function of its inputs; nothing here
//!   mutates shared state or logs.

pub mod cfg;
pub mod rotation;
pub mod shape;
pub mod side;
pub mod vec3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use rotation::Quat;
pub use side::Side;
pub use vec3::Vector3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rotation::Quat;
    pub use crate::shape::rand::{random_tangent_shape, GeneratorError, RandomTangentParams};
    pub use crate::shape::{intersect_planes, special, ConvexShape, Plane, ShapeCfg};
    pub use crate::side::Side;
    pub use crate::vec3::Vector3;
}
