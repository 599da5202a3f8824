//! Half-space bounded by a plane.

use std::any::Any;

use solidcast_math::{is_finite_point, is_finite_vec, Dir3, Point3, Vec3};

use super::{Candidates, Primitive, PrimitiveKind, SurfaceHit};
use crate::error::{CsgError, Result};
use crate::material::MaterialRef;
use crate::Raycast;

/// The half-space `{p : normal · (p - origin) <= 0}`.
///
/// The normal points out of the solid.
#[derive(Debug, Clone)]
pub struct Plane {
    /// Outward unit normal.
    pub normal: Dir3,
    /// Any point on the boundary plane.
    pub origin: Point3,
    material: Option<MaterialRef>,
}

impl Plane {
    /// Create a half-space from an outward normal and a point on its boundary.
    pub fn new(normal: Vec3, origin: Point3) -> Result<Self> {
        if !is_finite_vec(&normal) || normal.norm_squared() == 0.0 {
            return Err(CsgError::DegenerateNormal);
        }
        if !is_finite_point(&origin) {
            return Err(CsgError::NonFinite("plane origin"));
        }
        Ok(Self {
            normal: Dir3::new_normalize(normal),
            origin,
            material: None,
        })
    }

    /// Attach a material to this plane.
    pub fn with_material(mut self, material: MaterialRef) -> Self {
        self.material = Some(material);
        self
    }
}

impl Primitive for Plane {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Plane
    }

    fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&(*point - self.origin))
    }

    fn intersect(&self, ray: &Raycast) -> Candidates {
        let mut out = Candidates::new();
        let normal = self.normal.as_ref();
        let denom = ray.direction().dot(normal);

        // Ray is parallel to plane
        if denom.abs() < 1e-12 * ray.direction().norm() {
            return out;
        }

        let t = (self.origin - *ray.origin()).dot(normal) / denom;
        out.push(SurfaceHit {
            t,
            normal: self.normal,
        });
        out
    }

    fn material(&self) -> Option<&MaterialRef> {
        self.material.as_ref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
