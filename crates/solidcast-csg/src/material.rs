//! Opaque material references carried through the engine.

use std::fmt;
use std::sync::Arc;

/// Shading data attached to primitives and rays.
///
/// The engine never inspects a material: it only forwards the reference from
/// a primitive onto the hit reports that primitive produces, and from a ray
/// descriptor to whoever consumes it.
pub trait Material: fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Shared handle to a material.
pub type MaterialRef = Arc<dyn Material>;
