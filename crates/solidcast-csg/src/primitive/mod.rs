//! Leaf shapes of a surface tree.
//!
//! A primitive answers two questions: how far a point is from its boundary
//! (sign tells inside from outside) and where a ray crosses that boundary.
//! Adding a new shape only requires implementing [`Primitive`].

mod aabox;
mod plane;
mod sphere;

pub use aabox::AxisBox;
pub use plane::Plane;
pub use sphere::Sphere;

use std::any::Any;
use std::fmt;

use arrayvec::ArrayVec;
use solidcast_math::{Boundary, Dir3, Point3, Tolerance};

use crate::material::MaterialRef;
use crate::Raycast;

/// Upper bound on the boundary crossings a single primitive reports per ray.
pub const MAX_CANDIDATES: usize = 2;

/// Kind tag for primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Half-space bounded by an infinite plane.
    Plane,
    /// Solid ball.
    Sphere,
    /// Axis-aligned rectangular box.
    Box,
}

/// A raw ray/primitive crossing, before window filtering and CSG classification.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    /// Parameter along the ray.
    pub t: f64,
    /// Outward surface normal at the crossing.
    pub normal: Dir3,
}

/// Crossings of one primitive, sorted by ascending `t`.
pub type Candidates = ArrayVec<SurfaceHit, MAX_CANDIDATES>;

/// A closed solid with an analytic boundary.
pub trait Primitive: fmt::Debug + Send + Sync {
    /// The kind of this primitive.
    fn kind(&self) -> PrimitiveKind;

    /// Signed distance (or a function with the same sign and zero set):
    /// negative inside, zero on the boundary, positive outside.
    fn signed_distance(&self, point: &Point3) -> f64;

    /// All boundary crossings along the infinite line of `ray`, ascending.
    ///
    /// The caller applies the ray's distance window; implementations must not.
    /// A ray that only touches the boundary reports a single crossing.
    fn intersect(&self, ray: &Raycast) -> Candidates;

    /// Material attached to this primitive.
    fn material(&self) -> Option<&MaterialRef>;

    /// Downcast to a concrete type via `Any`.
    fn as_any(&self) -> &dyn Any;

    /// Membership test under the given boundary convention.
    fn contains(&self, point: &Point3, boundary: Boundary, tolerance: &Tolerance) -> bool {
        tolerance.is_inside(self.signed_distance(point), boundary)
    }
}

/// Sort a pair of crossings so the nearer one comes first.
pub(crate) fn ordered_pair(a: SurfaceHit, b: SurfaceHit) -> Candidates {
    let mut out = Candidates::new();
    if a.t <= b.t {
        out.push(a);
        out.push(b);
    } else {
        out.push(b);
        out.push(a);
    }
    out
}
