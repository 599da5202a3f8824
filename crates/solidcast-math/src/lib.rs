#![warn(missing_docs)]

//! Math types for the solidcast CSG ray engine.
//!
//! Thin wrappers around nalgebra providing the point, vector and direction
//! types shared by every primitive, plus the [`Tolerance`] band that decides
//! when a point counts as lying on a surface boundary.

use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Returns `true` if every coordinate of `p` is finite.
#[inline]
pub fn is_finite_point(p: &Point3) -> bool {
    p.coords.iter().all(|c| c.is_finite())
}

/// Returns `true` if every component of `v` is finite.
#[inline]
pub fn is_finite_vec(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Which side of a boundary band counts as "inside".
///
/// A point whose signed distance to a surface lies within the tolerance band
/// is a boundary point. `Closed` membership includes it, `Open` membership
/// (the strict interior) excludes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Boundary points count as inside.
    Closed,
    /// Only strict interior points count as inside.
    Open,
}

impl Boundary {
    /// The opposite convention. Complementing a set swaps open and closed.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Boundary::Closed => Boundary::Open,
            Boundary::Open => Boundary::Closed,
        }
    }
}

/// Tolerance band for boundary classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Half-width of the boundary band, in absolute scene units. The band does
    /// not scale with the magnitude of the coordinates being compared.
    pub linear: f64,
}

impl Tolerance {
    /// Default band: 1e-9 absolute scene units.
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Zero-width band: only exact zeros are boundary points.
    pub const EXACT: Self = Self { linear: 0.0 };

    /// Membership test for a signed distance (negative inside, positive outside).
    #[inline]
    pub fn is_inside(&self, signed_distance: f64, boundary: Boundary) -> bool {
        match boundary {
            Boundary::Closed => signed_distance <= self.linear,
            Boundary::Open => signed_distance < -self.linear,
        }
    }

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_includes_boundary() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.is_inside(0.0, Boundary::Closed));
        assert!(tol.is_inside(5e-10, Boundary::Closed));
        assert!(!tol.is_inside(1e-6, Boundary::Closed));
        assert!(tol.is_inside(-1.0, Boundary::Closed));
    }

    #[test]
    fn test_open_excludes_boundary() {
        let tol = Tolerance::DEFAULT;
        assert!(!tol.is_inside(0.0, Boundary::Open));
        assert!(!tol.is_inside(-5e-10, Boundary::Open));
        assert!(tol.is_inside(-1e-6, Boundary::Open));
        assert!(!tol.is_inside(1.0, Boundary::Open));
    }

    #[test]
    fn test_exact_band() {
        let tol = Tolerance::EXACT;
        assert!(tol.is_inside(0.0, Boundary::Closed));
        assert!(!tol.is_inside(0.0, Boundary::Open));
        assert!(tol.is_inside(-f64::MIN_POSITIVE, Boundary::Open));
    }

    #[test]
    fn test_band_is_absolute() {
        let tol = Tolerance::DEFAULT;
        // Same signed distance, same answer, whatever the scene scale.
        assert!(!tol.is_inside(2e-9, Boundary::Closed));
        assert!(tol.is_inside(-2e-9, Boundary::Open));
        let far = Point3::new(1e8, 1e8, 1e8);
        assert!(!tol.points_equal(&far, &Point3::new(1e8 + 1e-6, 1e8, 1e8)));
    }

    #[test]
    fn test_boundary_flip() {
        assert_eq!(Boundary::Closed.flip(), Boundary::Open);
        assert_eq!(Boundary::Open.flip().flip(), Boundary::Open);
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance { linear: 1e-6 };
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-7, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.001, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
    }

    #[test]
    fn test_finite_checks() {
        assert!(is_finite_point(&Point3::new(1.0, -2.0, 0.0)));
        assert!(!is_finite_point(&Point3::new(f64::NAN, 0.0, 0.0)));
        assert!(!is_finite_vec(&Vec3::new(0.0, f64::INFINITY, 0.0)));
    }

    #[test]
    fn test_tolerance_deserializes() {
        let json = r#"{ "linear": 0.001 }"#;
        let tol: Tolerance = serde_json::from_str(json).unwrap();
        approx::assert_relative_eq!(tol.linear, 0.001);
    }
}
