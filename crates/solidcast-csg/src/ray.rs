//! Raycast descriptor: the immutable description of one ray query.

use solidcast_math::{is_finite_point, is_finite_vec, Dir3, Point3, Tolerance, Vec3};

use crate::error::{CsgError, Result};
use crate::material::MaterialRef;

/// A ray query against a surface tree.
///
/// The direction is kept exactly as supplied and is never renormalized, so
/// reported distances are ray parameters: `position = origin + t * direction`.
/// With a unit direction the parameter is the Euclidean distance.
#[derive(Debug, Clone)]
pub struct Raycast {
    origin: Point3,
    direction: Vec3,
    min_distance: f64,
    max_distance: f64,
    entropy: f64,
    material: Option<MaterialRef>,
    tolerance: Tolerance,
}

impl Raycast {
    /// Distance reported for rays that escape to the background.
    pub const BACKDROP_DISTANCE: f64 = f64::INFINITY;

    /// Entropy of a perfectly specular (mirror) bounce.
    pub const FULLY_SPECULAR_ENTROPY: f64 = 0.0;

    /// Entropy of a perfectly diffuse bounce.
    pub const FULLY_DIFFUSE_ENTROPY: f64 = 1.0;

    /// Create a ray with the default window `(0, BACKDROP_DISTANCE)`.
    ///
    /// Fails if the origin is not finite, or if the direction is not finite or
    /// its squared length underflows to zero or overflows to infinity.
    pub fn new(origin: Point3, direction: Vec3) -> Result<Self> {
        if !is_finite_point(&origin) {
            return Err(CsgError::NonFinite("ray origin"));
        }
        let length_squared = direction.norm_squared();
        if !is_finite_vec(&direction) || length_squared == 0.0 || !length_squared.is_finite() {
            return Err(CsgError::DegenerateDirection);
        }
        Ok(Self {
            origin,
            direction,
            min_distance: 0.0,
            max_distance: Self::BACKDROP_DISTANCE,
            entropy: Self::FULLY_SPECULAR_ENTROPY,
            material: None,
            tolerance: Tolerance::DEFAULT,
        })
    }

    /// Restrict the accepted distances to the open interval `(min, max)`.
    pub fn with_range(mut self, min: f64, max: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min < 0.0 || min >= max || min.is_infinite() {
            return Err(CsgError::InvalidRange { min, max });
        }
        self.min_distance = min;
        self.max_distance = max;
        Ok(self)
    }

    /// Set only the far limit, keeping the current near limit.
    pub fn with_limit(self, max: f64) -> Result<Self> {
        let min = self.min_distance;
        self.with_range(min, max)
    }

    /// Tag the ray with a scatter entropy in `[0, 1]`.
    pub fn with_entropy(mut self, entropy: f64) -> Result<Self> {
        if !(Self::FULLY_SPECULAR_ENTROPY..=Self::FULLY_DIFFUSE_ENTROPY).contains(&entropy) {
            return Err(CsgError::InvalidEntropy(entropy));
        }
        self.entropy = entropy;
        Ok(self)
    }

    /// Attach the medium the ray is travelling through.
    pub fn with_material(mut self, material: MaterialRef) -> Self {
        self.material = Some(material);
        self
    }

    /// Override the boundary band used when classifying hit positions.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Origin of the ray.
    #[inline]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Direction of the ray, as supplied.
    #[inline]
    pub fn direction(&self) -> &Vec3 {
        &self.direction
    }

    /// Normalized copy of the direction.
    pub fn unit_direction(&self) -> Dir3 {
        Dir3::new_normalize(self.direction)
    }

    /// Exclusive lower bound on reported distances.
    #[inline]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Exclusive upper bound on reported distances.
    #[inline]
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Scatter entropy tag.
    #[inline]
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Medium the ray travels through, if any.
    #[inline]
    pub fn material(&self) -> Option<&MaterialRef> {
        self.material.as_ref()
    }

    /// Boundary band for this query.
    #[inline]
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// Whether a ray parameter falls inside the accepted window.
    #[inline]
    pub fn accepts(&self, t: f64) -> bool {
        t > self.min_distance && t < self.max_distance
    }
}
