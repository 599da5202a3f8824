//! Error types for surface construction and ray queries.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while building surfaces, rays or hit lists.
#[derive(Error, Debug)]
pub enum CsgError {
    /// Sphere radius is zero, negative or not finite.
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// Plane normal has zero length or non-finite components.
    #[error("plane normal must be non-zero and finite")]
    DegenerateNormal,

    /// Ray direction has zero length or non-finite components.
    #[error("ray direction must be non-zero and finite")]
    DegenerateDirection,

    /// A point or scalar parameter is NaN or infinite.
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    /// Box has no volume along one axis.
    #[error("box is empty along {axis} axis ({min} >= {max})")]
    EmptyBox {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// Lower bound on that axis.
        min: f64,
        /// Upper bound on that axis.
        max: f64,
    },

    /// Ray distance window is empty or starts behind the origin.
    #[error("invalid distance range ({min}, {max})")]
    InvalidRange {
        /// Requested minimum distance.
        min: f64,
        /// Requested maximum distance.
        max: f64,
    },

    /// Scatter entropy outside `[0, 1]`.
    #[error("scatter entropy must lie in [0, 1], got {0}")]
    InvalidEntropy(f64),

    /// Growing the hit list backing storage failed.
    #[error("hit list allocation failed: {0}")]
    Capacity(#[from] TryReserveError),

    /// Configuration values are inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for CSG operations.
pub type Result<T> = std::result::Result<T, CsgError>;
