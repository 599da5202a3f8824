//! Engine settings, loadable from TOML.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use solidcast_math::{Point3, Tolerance, Vec3};

use crate::error::{CsgError, Result};
use crate::hit::HitList;
use crate::ray::Raycast;

/// Largest pooled hit-list capacity a config may request.
pub const MAX_HIT_CAPACITY: usize = 1 << 16;

/// Defaults applied to rays and hit lists built through the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsgConfig {
    /// Boundary band used for CSG classification of hit positions.
    pub tolerance: Tolerance,
    /// Exclusive lower bound on reported distances.
    pub min_distance: f64,
    /// Exclusive upper bound on reported distances.
    pub backdrop_distance: f64,
    /// Initial pooled capacity of hit lists.
    pub hit_capacity: usize,
}

impl Default for CsgConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::DEFAULT,
            min_distance: 0.0,
            backdrop_distance: Raycast::BACKDROP_DISTANCE,
            hit_capacity: 16,
        }
    }
}

impl CsgConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    ///
    /// ```toml
    /// min_distance = 1e-6
    /// backdrop_distance = 1000.0
    /// hit_capacity = 32
    ///
    /// [tolerance]
    /// linear = 1e-9
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: CsgConfig = toml::from_str(text)?;
        if config.hit_capacity > MAX_HIT_CAPACITY {
            warn!(
                "hit_capacity {} exceeds {}, clamping",
                config.hit_capacity, MAX_HIT_CAPACITY
            );
            config.hit_capacity = MAX_HIT_CAPACITY;
        }
        config.validate()?;
        debug!("loaded config: {:?}", config);
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CsgError::InvalidConfig(e.to_string()))
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.linear >= 0.0 && self.tolerance.linear.is_finite()) {
            return Err(CsgError::InvalidConfig(format!(
                "tolerance.linear must be finite and non-negative, got {}",
                self.tolerance.linear
            )));
        }
        if !(self.min_distance >= 0.0 && self.min_distance.is_finite()) {
            return Err(CsgError::InvalidConfig(format!(
                "min_distance must be finite and non-negative, got {}",
                self.min_distance
            )));
        }
        if self.backdrop_distance.is_nan() || self.backdrop_distance <= self.min_distance {
            return Err(CsgError::InvalidConfig(format!(
                "backdrop_distance ({}) must exceed min_distance ({})",
                self.backdrop_distance, self.min_distance
            )));
        }
        if self.hit_capacity > MAX_HIT_CAPACITY {
            return Err(CsgError::InvalidConfig(format!(
                "hit_capacity must be at most {}, got {}",
                MAX_HIT_CAPACITY, self.hit_capacity
            )));
        }
        Ok(())
    }

    /// Build a ray carrying this config's distance window and tolerance.
    pub fn ray(&self, origin: Point3, direction: Vec3) -> Result<Raycast> {
        Ok(Raycast::new(origin, direction)?
            .with_range(self.min_distance, self.backdrop_distance)?
            .with_tolerance(self.tolerance))
    }

    /// Empty hit list pre-sized to `hit_capacity`.
    pub fn hit_list<'s>(&self) -> HitList<'s> {
        HitList::with_capacity(self.hit_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CsgConfig::default();
        config.validate().unwrap();
        assert_eq!(config.backdrop_distance, f64::INFINITY);
        assert_eq!(config.hit_list().capacity(), 16);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = CsgConfig::from_toml_str("hit_capacity = 64\nbackdrop_distance = 500.0\n").unwrap();
        assert_eq!(config.hit_capacity, 64);
        assert_eq!(config.backdrop_distance, 500.0);
        assert_eq!(config.tolerance, Tolerance::DEFAULT);
        assert_eq!(config.min_distance, 0.0);
    }

    #[test]
    fn test_parse_tolerance_table() {
        let config = CsgConfig::from_toml_str("[tolerance]\nlinear = 0.001\n").unwrap();
        approx::assert_relative_eq!(config.tolerance.linear, 0.001);
    }

    #[test]
    fn test_parse_infinite_backdrop() {
        let config = CsgConfig::from_toml_str("backdrop_distance = inf\n").unwrap();
        assert!(config.backdrop_distance.is_infinite());
    }

    #[test]
    fn test_capacity_is_clamped() {
        let config = CsgConfig::from_toml_str("hit_capacity = 100000000\n").unwrap();
        assert_eq!(config.hit_capacity, MAX_HIT_CAPACITY);
    }

    #[test]
    fn test_rejects_inverted_window() {
        let err = CsgConfig::from_toml_str("min_distance = 10.0\nbackdrop_distance = 1.0\n").unwrap_err();
        assert!(matches!(err, CsgError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = CsgConfig::from_toml_str("hit_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, CsgError::ConfigParse(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CsgConfig {
            backdrop_distance: 250.0,
            ..CsgConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(CsgConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_ray_uses_config_window() {
        let config = CsgConfig {
            min_distance: 1.0,
            backdrop_distance: 10.0,
            tolerance: Tolerance { linear: 1e-4 },
            ..CsgConfig::default()
        };
        let ray = config.ray(Point3::origin(), Vec3::x()).unwrap();
        assert_eq!(ray.min_distance(), 1.0);
        assert_eq!(ray.max_distance(), 10.0);
        assert_eq!(ray.tolerance().linear, 1e-4);
    }
}
