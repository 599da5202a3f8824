//! Solid ball (quadratic equation).

use std::any::Any;

use solidcast_math::{is_finite_point, Dir3, Point3};

use super::{ordered_pair, Candidates, Primitive, PrimitiveKind, SurfaceHit};
use crate::error::{CsgError, Result};
use crate::material::MaterialRef;
use crate::Raycast;

/// The closed ball `{p : |p - center| <= radius}`.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f64,
    material: Option<MaterialRef>,
}

impl Sphere {
    /// Create a sphere. The radius must be positive and finite, and its square
    /// must be a normal float so the intersection quadratic stays well defined.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if !(radius > 0.0 && (radius * radius).is_normal()) {
            return Err(CsgError::InvalidRadius(radius));
        }
        if !is_finite_point(&center) {
            return Err(CsgError::NonFinite("sphere center"));
        }
        Ok(Self {
            center,
            radius,
            material: None,
        })
    }

    /// Attach a material to this sphere.
    pub fn with_material(mut self, material: MaterialRef) -> Self {
        self.material = Some(material);
        self
    }

    fn hit_at(&self, ray: &Raycast, t: f64) -> SurfaceHit {
        let normal = Dir3::new_normalize(ray.at(t) - self.center);
        SurfaceHit { t, normal }
    }
}

impl Primitive for Sphere {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Sphere
    }

    fn signed_distance(&self, point: &Point3) -> f64 {
        (*point - self.center).norm() - self.radius
    }

    fn intersect(&self, ray: &Raycast) -> Candidates {
        let oc = *ray.origin() - self.center;
        let d = ray.direction();

        // Quadratic: |oc + t*d|^2 = r^2, written with the half linear term.
        let a = d.norm_squared();
        let half_b = oc.dot(d);
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return Candidates::new();
        }
        if discriminant == 0.0 {
            let mut out = Candidates::new();
            out.push(self.hit_at(ray, -half_b / a));
            return out;
        }

        // Numerically stable root pair: avoids subtracting nearly equal terms.
        let sqrt_disc = discriminant.sqrt();
        let q = -(half_b + sqrt_disc.copysign(half_b));
        let t1 = q / a;
        let t2 = if q == 0.0 { t1 } else { c / q };

        ordered_pair(self.hit_at(ray, t1), self.hit_at(ray, t2))
    }

    fn material(&self) -> Option<&MaterialRef> {
        self.material.as_ref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
