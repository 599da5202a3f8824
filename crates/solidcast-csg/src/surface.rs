//! Surface trees: primitives at the leaves, boolean operators at the nodes.

use std::ops::{BitAnd, BitOr, Not, Sub};
use std::sync::Arc;

use solidcast_math::{Boundary, Point3, Tolerance, Vec3};

use crate::combine::{BooleanOp, Combination};
use crate::error::Result;
use crate::hit::{HitList, HitReport};
use crate::primitive::{AxisBox, Plane, Primitive, Sphere};
use crate::ray::Raycast;

/// Result of a point classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointPosition {
    /// Inside the solid or on its boundary.
    In,
    /// Strictly outside the solid.
    Out,
}

impl PointPosition {
    /// `true` for [`PointPosition::In`].
    #[inline]
    pub fn is_in(self) -> bool {
        self == PointPosition::In
    }
}

impl From<bool> for PointPosition {
    fn from(inside: bool) -> Self {
        if inside {
            PointPosition::In
        } else {
            PointPosition::Out
        }
    }
}

/// A solid described by a tree of primitives and boolean operators.
///
/// Cloning is cheap: every variant is a reference-counted handle to immutable
/// data, so one subtree can be reused under any number of parents and the
/// whole tree can be shared across threads.
#[derive(Debug, Clone)]
pub enum Surface {
    /// A leaf shape.
    Primitive(Arc<dyn Primitive>),
    /// A binary boolean node.
    Combination(Arc<Combination>),
    /// Everything outside the wrapped surface.
    Complement(Arc<Surface>),
}

impl Surface {
    /// Wrap a primitive as a leaf.
    pub fn primitive<P: Primitive + 'static>(primitive: P) -> Self {
        Surface::Primitive(Arc::new(primitive))
    }

    /// Half-space leaf: see [`Plane::new`].
    pub fn plane(normal: Vec3, origin: Point3) -> Result<Self> {
        Ok(Self::primitive(Plane::new(normal, origin)?))
    }

    /// Ball leaf: see [`Sphere::new`].
    pub fn sphere(center: Point3, radius: f64) -> Result<Self> {
        Ok(Self::primitive(Sphere::new(center, radius)?))
    }

    /// Box leaf: see [`AxisBox::new`].
    pub fn aabox(min: Point3, max: Point3) -> Result<Self> {
        Ok(Self::primitive(AxisBox::new(min, max)?))
    }

    /// New node combining `self` and `other` with `op`. Neither operand changes.
    pub fn combine(&self, op: BooleanOp, other: &Surface) -> Surface {
        Surface::Combination(Arc::new(Combination::new(op, self.clone(), other.clone())))
    }

    /// `self ∪ other`
    pub fn union(&self, other: &Surface) -> Surface {
        self.combine(BooleanOp::Union, other)
    }

    /// `self ∩ other`
    pub fn intersection(&self, other: &Surface) -> Surface {
        self.combine(BooleanOp::Intersection, other)
    }

    /// `self − other`
    pub fn difference(&self, other: &Surface) -> Surface {
        self.combine(BooleanOp::Difference, other)
    }

    /// Everything not in `self`.
    pub fn complement(&self) -> Surface {
        Surface::Complement(Arc::new(self.clone()))
    }

    /// The leaf primitive, if this surface is one.
    pub fn as_primitive(&self) -> Option<&dyn Primitive> {
        match self {
            Surface::Primitive(p) => Some(p.as_ref()),
            _ => None,
        }
    }

    /// Number of boolean nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Surface::Primitive(_) => 0,
            Surface::Combination(c) => c.depth(),
            Surface::Complement(inner) => inner.depth(),
        }
    }

    /// Number of leaves, counting shared leaves once per occurrence and
    /// saturating at `usize::MAX`.
    pub fn primitive_count(&self) -> usize {
        match self {
            Surface::Primitive(_) => 1,
            Surface::Combination(c) => c.primitive_count(),
            Surface::Complement(inner) => inner.primitive_count(),
        }
    }

    /// Classify a point with the default tolerance. Boundary points are `In`.
    pub fn classify(&self, point: &Point3) -> PointPosition {
        self.classify_with(point, &Tolerance::DEFAULT)
    }

    /// Classify a point with an explicit tolerance. Boundary points are `In`.
    pub fn classify_with(&self, point: &Point3, tolerance: &Tolerance) -> PointPosition {
        self.contains(point, Boundary::Closed, tolerance).into()
    }

    /// Membership under either boundary convention.
    pub fn contains(&self, point: &Point3, boundary: Boundary, tolerance: &Tolerance) -> bool {
        match self {
            Surface::Primitive(p) => p.contains(point, boundary, tolerance),
            Surface::Combination(c) => c.contains(point, boundary, tolerance),
            Surface::Complement(inner) => !inner.contains(point, boundary.flip(), tolerance),
        }
    }

    /// Append every boundary crossing of `ray` with this solid to `hits`.
    ///
    /// Existing reports in `hits` are left untouched. Within one combinator,
    /// crossings from the left operand precede those from the right operand;
    /// call [`HitList::sort_by_distance`] for a globally ascending list.
    pub fn raycast<'s>(&'s self, ray: &Raycast, hits: &mut HitList<'s>) {
        match self {
            Surface::Primitive(p) => cast_primitive(p.as_ref(), ray, hits),
            Surface::Combination(c) => c.raycast(ray, hits),
            Surface::Complement(inner) => {
                let start = hits.len();
                inner.raycast(ray, hits);
                hits.flip_from(start);
            }
        }
    }
}

fn cast_primitive<'s>(primitive: &'s dyn Primitive, ray: &Raycast, hits: &mut HitList<'s>) {
    for hit in primitive.intersect(ray) {
        if !ray.accepts(hit.t) {
            continue;
        }
        hits.push(HitReport {
            distance: hit.t,
            position: ray.at(hit.t),
            normal: hit.normal,
            entering: ray.direction().dot(hit.normal.as_ref()) < 0.0,
            primitive,
        });
    }
}

impl From<Plane> for Surface {
    fn from(plane: Plane) -> Self {
        Surface::primitive(plane)
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::primitive(sphere)
    }
}

impl From<AxisBox> for Surface {
    fn from(aabox: AxisBox) -> Self {
        Surface::primitive(aabox)
    }
}

impl From<Combination> for Surface {
    fn from(combination: Combination) -> Self {
        Surface::Combination(Arc::new(combination))
    }
}

macro_rules! impl_boolean_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<Surface> for Surface {
            type Output = Surface;
            fn $method(self, rhs: Surface) -> Surface {
                self.combine($op, &rhs)
            }
        }

        impl $trait<&Surface> for Surface {
            type Output = Surface;
            fn $method(self, rhs: &Surface) -> Surface {
                self.combine($op, rhs)
            }
        }

        impl $trait<Surface> for &Surface {
            type Output = Surface;
            fn $method(self, rhs: Surface) -> Surface {
                self.combine($op, &rhs)
            }
        }

        impl $trait<&Surface> for &Surface {
            type Output = Surface;
            fn $method(self, rhs: &Surface) -> Surface {
                self.combine($op, rhs)
            }
        }
    };
}

impl_boolean_operator!(BitOr, bitor, BooleanOp::Union);
impl_boolean_operator!(BitAnd, bitand, BooleanOp::Intersection);
impl_boolean_operator!(Sub, sub, BooleanOp::Difference);

impl Not for Surface {
    type Output = Surface;
    fn not(self) -> Surface {
        Surface::Complement(Arc::new(self))
    }
}

impl Not for &Surface {
    type Output = Surface;
    fn not(self) -> Surface {
        self.complement()
    }
}
