//! Boolean combinators and the per-candidate boundary classification that
//! merges their children's hit lists.
//!
//! A combinator never runs a global inside/outside state machine along the
//! ray. Each candidate produced by one child is tested against the *sibling*
//! subtree at the candidate's position, with a boundary convention that
//! depends on the operator:
//!
//! | operator       | left candidate kept if           | right candidate kept if        |
//! |----------------|----------------------------------|--------------------------------|
//! | union          | not in the open interior of right | not in the open interior of left |
//! | intersection   | in the closure of right          | in the closure of left         |
//! | difference     | not in the closure of right      | in the closure of left (flipped) |
//!
//! The open/closed asymmetry is what lets a ray through a corner shared by
//! several primitives keep exactly one crossing per primitive, for both union
//! and intersection.

use std::fmt;

use log::debug;
use solidcast_math::{Boundary, Point3, Tolerance};

use crate::hit::HitList;
use crate::ray::Raycast;
use crate::surface::Surface;

/// Binary boolean operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// `left ∪ right`
    Union,
    /// `left ∩ right`
    Intersection,
    /// `left − right`
    Difference,
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BooleanOp::Union => "union",
            BooleanOp::Intersection => "intersection",
            BooleanOp::Difference => "difference",
        };
        f.write_str(s)
    }
}

/// Interior node of a surface tree: an operator applied to two subtrees.
///
/// Children are shared handles, so the same subtree may appear under several
/// combinators. Neither child is ever modified.
#[derive(Debug, Clone)]
pub struct Combination {
    op: BooleanOp,
    left: Surface,
    right: Surface,
    depth: usize,
    primitive_count: usize,
}

impl Combination {
    /// Combine two surfaces.
    ///
    /// Depth and leaf count are computed once here from the children's cached
    /// values, so construction cost does not depend on subtree size.
    pub fn new(op: BooleanOp, left: Surface, right: Surface) -> Self {
        let depth = 1 + left.depth().max(right.depth());
        // Shared subtrees are counted once per occurrence, which can grow
        // exponentially in a DAG.
        let primitive_count = left.primitive_count().saturating_add(right.primitive_count());
        debug!("built {} node: depth {}, {} primitives", op, depth, primitive_count);
        Self {
            op,
            left,
            right,
            depth,
            primitive_count,
        }
    }

    /// The operator.
    pub fn op(&self) -> BooleanOp {
        self.op
    }

    /// Left operand.
    pub fn left(&self) -> &Surface {
        &self.left
    }

    /// Right operand.
    pub fn right(&self) -> &Surface {
        &self.right
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn primitive_count(&self) -> usize {
        self.primitive_count
    }

    /// Membership under a boundary convention, composed from the children.
    pub(crate) fn contains(&self, point: &Point3, boundary: Boundary, tol: &Tolerance) -> bool {
        match self.op {
            BooleanOp::Union => {
                self.left.contains(point, boundary, tol) || self.right.contains(point, boundary, tol)
            }
            BooleanOp::Intersection => {
                self.left.contains(point, boundary, tol) && self.right.contains(point, boundary, tol)
            }
            BooleanOp::Difference => {
                self.left.contains(point, boundary, tol)
                    && !self.right.contains(point, boundary.flip(), tol)
            }
        }
    }

    /// Append the crossings of this node to `hits`.
    ///
    /// Both children append to the same list; the tail they produced is then
    /// filtered in place. Surviving left crossings precede surviving right
    /// crossings.
    pub(crate) fn raycast<'s>(&'s self, ray: &Raycast, hits: &mut HitList<'s>) {
        let start = hits.len();
        self.left.raycast(ray, hits);
        let split = hits.len();
        self.right.raycast(ray, hits);
        if hits.len() == start {
            return;
        }

        let tol = ray.tolerance();
        hits.retain_from(start, |index, report| {
            if index < split {
                self.keeps_left(&report.position, tol)
            } else {
                let keep = self.keeps_right(&report.position, tol);
                if keep && self.op == BooleanOp::Difference {
                    report.flip();
                }
                keep
            }
        });
    }

    fn keeps_left(&self, point: &Point3, tol: &Tolerance) -> bool {
        match self.op {
            BooleanOp::Union => !self.right.contains(point, Boundary::Open, tol),
            BooleanOp::Intersection => self.right.contains(point, Boundary::Closed, tol),
            BooleanOp::Difference => !self.right.contains(point, Boundary::Closed, tol),
        }
    }

    fn keeps_right(&self, point: &Point3, tol: &Tolerance) -> bool {
        match self.op {
            BooleanOp::Union => !self.left.contains(point, Boundary::Open, tol),
            BooleanOp::Intersection | BooleanOp::Difference => {
                self.left.contains(point, Boundary::Closed, tol)
            }
        }
    }
}
