//! Parallel casting of many rays against one shared surface tree.

use log::debug;
use rayon::prelude::*;

use crate::config::CsgConfig;
use crate::hit::HitReport;
use crate::ray::Raycast;
use crate::surface::Surface;

/// Cast every ray in parallel and return the nearest report for each.
///
/// Each rayon worker owns one pooled hit list sized from `config`, reused for
/// all the rays it processes. The surface tree is only read.
pub fn cast_batch<'s>(
    surface: &'s Surface,
    rays: &[Raycast],
    config: &CsgConfig,
) -> Vec<Option<HitReport<'s>>> {
    debug!(
        "casting {} rays against {} primitives",
        rays.len(),
        surface.primitive_count()
    );
    rays.par_iter()
        .map_init(
            || config.hit_list(),
            |hits, ray| {
                hits.clear();
                surface.raycast(ray, hits);
                hits.nearest().copied()
            },
        )
        .collect()
}
