#![warn(missing_docs)]

//! Constructive solid geometry for ray casting.
//!
//! Solids are trees of analytic primitives (half-spaces, spheres, boxes)
//! joined by boolean operators. Two queries are answered against a tree:
//! point classification and the list of boundary crossings along a ray.
//!
//! # Architecture
//!
//! - [`Primitive`] - leaf shapes: signed distance plus ray crossings
//! - [`Surface`] - the tree; cheap to clone, immutable, shareable across threads
//! - [`Combination`] - union, intersection and difference nodes
//! - [`Raycast`] - immutable ray query descriptor
//! - [`HitList`] - pooled, reusable output buffer of [`HitReport`]s
//! - [`CsgConfig`] - TOML-loadable defaults for rays and hit lists
//! - [`cast_batch`] - parallel casting with one hit list per worker
//!
//! # Example
//!
//! ```
//! use solidcast_csg::{HitList, Raycast, Surface};
//! use solidcast_math::{Point3, Vec3};
//!
//! let a = Surface::sphere(Point3::new(-1.0, 0.0, 0.0), 2.0)?;
//! let b = Surface::sphere(Point3::new(1.0, 0.0, 0.0), 2.0)?;
//! let blob = &a | &b;
//!
//! let ray = Raycast::new(Point3::new(-4.0, 0.0, 0.0), Vec3::x())?;
//! let mut hits = HitList::new();
//! blob.raycast(&ray, &mut hits);
//!
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits[0].distance, 1.0);
//! assert_eq!(hits[1].distance, 7.0);
//! # Ok::<(), solidcast_csg::CsgError>(())
//! ```

pub mod batch;
pub mod combine;
pub mod config;
pub mod error;
pub mod hit;
pub mod material;
pub mod primitive;
pub mod ray;
pub mod surface;

pub use batch::cast_batch;
pub use combine::{BooleanOp, Combination};
pub use config::CsgConfig;
pub use error::{CsgError, Result};
pub use hit::{HitList, HitReport};
pub use material::{Material, MaterialRef};
pub use primitive::{AxisBox, Plane, Primitive, PrimitiveKind, Sphere, SurfaceHit};
pub use ray::Raycast;
pub use surface::{PointPosition, Surface};

use solidcast_math::Point3;

/// Classify `point` against `surface`. Boundary points are `In`.
pub fn classify(surface: &Surface, point: &Point3) -> PointPosition {
    surface.classify(point)
}

/// Append the crossings of `ray` with `surface` to `hits`.
pub fn raycast<'s>(surface: &'s Surface, ray: &Raycast, hits: &mut HitList<'s>) {
    surface.raycast(ray, hits)
}

/// `a ∪ b`
pub fn union(a: &Surface, b: &Surface) -> Surface {
    a.union(b)
}

/// `a ∩ b`
pub fn intersection(a: &Surface, b: &Surface) -> Surface {
    a.intersection(b)
}

/// `a − b`
pub fn difference(a: &Surface, b: &Surface) -> Surface {
    a.difference(b)
}

/// Everything outside `a`.
pub fn complement(a: &Surface) -> Surface {
    a.complement()
}
