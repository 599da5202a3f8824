//! Axis-aligned box (slab method).

use std::any::Any;

use solidcast_math::{is_finite_point, Dir3, Point3, Vec3};

use super::{Candidates, Primitive, PrimitiveKind, SurfaceHit};
use crate::error::{CsgError, Result};
use crate::material::MaterialRef;
use crate::Raycast;

/// The closed box `[min.x, max.x] × [min.y, max.y] × [min.z, max.z]`.
#[derive(Debug, Clone)]
pub struct AxisBox {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
    material: Option<MaterialRef>,
}

impl AxisBox {
    /// Create a box from its minimum and maximum corners.
    pub fn new(min: Point3, max: Point3) -> Result<Self> {
        if !is_finite_point(&min) || !is_finite_point(&max) {
            return Err(CsgError::NonFinite("box corner"));
        }
        for (i, axis) in ['x', 'y', 'z'].into_iter().enumerate() {
            if min[i] >= max[i] {
                return Err(CsgError::EmptyBox {
                    axis,
                    min: min[i],
                    max: max[i],
                });
            }
        }
        Ok(Self {
            min,
            max,
            material: None,
        })
    }

    /// Attach a material to this box.
    pub fn with_material(mut self, material: MaterialRef) -> Self {
        self.material = Some(material);
        self
    }

    fn center(&self) -> Point3 {
        Point3::from((self.min.coords + self.max.coords) * 0.5)
    }
}

fn axis_normal(axis: usize, sign: f64) -> Dir3 {
    let mut v = Vec3::zeros();
    v[axis] = sign;
    Dir3::new_unchecked(v)
}

impl Primitive for AxisBox {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Box
    }

    fn signed_distance(&self, point: &Point3) -> f64 {
        let half = (self.max - self.min) * 0.5;
        let q = (*point - self.center()).abs() - half;
        let outside = q.map(|c| c.max(0.0)).norm();
        let inside = q.max().min(0.0);
        outside + inside
    }

    fn intersect(&self, ray: &Raycast) -> Candidates {
        let origin = ray.origin();
        let dir = ray.direction();

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        let mut n_min = axis_normal(0, -1.0);
        let mut n_max = axis_normal(0, 1.0);

        for axis in 0..3 {
            if dir[axis] == 0.0 {
                // Parallel to this slab: either always between its faces or never.
                if origin[axis] < self.min[axis] || origin[axis] > self.max[axis] {
                    return Candidates::new();
                }
                continue;
            }

            let inv = 1.0 / dir[axis];
            let (near, far, sign) = if inv >= 0.0 {
                (self.min[axis], self.max[axis], 1.0)
            } else {
                (self.max[axis], self.min[axis], -1.0)
            };
            let t_near = (near - origin[axis]) * inv;
            let t_far = (far - origin[axis]) * inv;

            if t_near > t_min {
                t_min = t_near;
                n_min = axis_normal(axis, -sign);
            }
            if t_far < t_max {
                t_max = t_far;
                n_max = axis_normal(axis, sign);
            }
        }

        let mut out = Candidates::new();
        if t_min > t_max {
            return out;
        }
        out.push(SurfaceHit {
            t: t_min,
            normal: n_min,
        });
        if t_max > t_min {
            out.push(SurfaceHit {
                t: t_max,
                normal: n_max,
            });
        }
        out
    }

    fn material(&self) -> Option<&MaterialRef> {
        self.material.as_ref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
