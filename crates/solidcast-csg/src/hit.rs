//! Hit reports and the reusable list that collects them.

use std::ops::Index;
use std::slice;

use solidcast_math::{Dir3, Point3};

use crate::error::Result;
use crate::material::MaterialRef;
use crate::primitive::Primitive;

/// A boundary crossing that survived CSG filtering.
///
/// Borrows the primitive that produced it, so reports can never outlive the
/// surface tree they were cast against.
#[derive(Debug, Clone, Copy)]
pub struct HitReport<'s> {
    /// Ray parameter of the crossing.
    pub distance: f64,
    /// World-space position of the crossing.
    pub position: Point3,
    /// Outward normal of the solid at the crossing.
    pub normal: Dir3,
    /// `true` when the ray enters the solid here (direction opposes the normal).
    pub entering: bool,
    /// Primitive whose boundary was crossed.
    pub primitive: &'s dyn Primitive,
}

impl<'s> HitReport<'s> {
    /// Material of the originating primitive.
    pub fn material(&self) -> Option<&'s MaterialRef> {
        self.primitive.material()
    }

    /// Whether this report was produced by `primitive` (identity, not equality).
    pub fn is_from(&self, primitive: &dyn Primitive) -> bool {
        std::ptr::addr_eq(self.primitive, primitive)
    }

    /// Turn the crossing inside out: used when a subtree is complemented.
    pub(crate) fn flip(&mut self) {
        self.normal = Dir3::new_unchecked(-self.normal.into_inner());
        self.entering = !self.entering;
    }
}

/// Ordered, reusable collection of hit reports.
///
/// `clear()` drops the reports but keeps the backing storage, so a list owned
/// by a render worker stops allocating once it has seen its largest ray.
/// Reports are only meaningful until the next `clear()` on the same list.
#[derive(Debug, Default)]
pub struct HitList<'s> {
    reports: Vec<HitReport<'s>>,
}

impl<'s> HitList<'s> {
    /// Empty list with no pooled storage.
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    /// Empty list with room for `capacity` reports.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            reports: Vec::with_capacity(capacity),
        }
    }

    /// Remove all reports, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.reports.clear();
    }

    /// Append a report.
    #[inline]
    pub fn push(&mut self, report: HitReport<'s>) {
        self.reports.push(report);
    }

    /// Number of reports.
    #[inline]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the list holds no reports.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Number of reports the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.reports.capacity()
    }

    /// Grow the pool ahead of time so at least `additional` more reports fit.
    ///
    /// Fails only when the allocator cannot provide the memory.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.reports.try_reserve(additional)?;
        Ok(())
    }

    /// Report at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&HitReport<'s>> {
        self.reports.get(index)
    }

    /// Iterate over the reports in list order.
    pub fn iter(&self) -> slice::Iter<'_, HitReport<'s>> {
        self.reports.iter()
    }

    /// Reports as a slice.
    pub fn as_slice(&self) -> &[HitReport<'s>] {
        &self.reports
    }

    /// Report with the smallest distance. Equal distances resolve to the
    /// earlier report.
    pub fn nearest(&self) -> Option<&HitReport<'s>> {
        self.reports
            .iter()
            .reduce(|best, r| if r.distance < best.distance { r } else { best })
    }

    /// Reorder reports by ascending distance. Stable: equal distances keep
    /// their current relative order.
    pub fn sort_by_distance(&mut self) {
        self.reports.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }

    /// Keep only the reports at or after `start` for which `keep` returns
    /// `true`, compacting them in place. `keep` receives each report's index
    /// before compaction and may edit the report.
    pub(crate) fn retain_from<F>(&mut self, start: usize, mut keep: F)
    where
        F: FnMut(usize, &mut HitReport<'s>) -> bool,
    {
        let mut write = start;
        for read in start..self.reports.len() {
            if keep(read, &mut self.reports[read]) {
                self.reports.swap(write, read);
                write += 1;
            }
        }
        self.reports.truncate(write);
    }

    /// Flip every report at or after `start`.
    pub(crate) fn flip_from(&mut self, start: usize) {
        for report in &mut self.reports[start..] {
            report.flip();
        }
    }
}

impl<'s> Index<usize> for HitList<'s> {
    type Output = HitReport<'s>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.reports[index]
    }
}

impl<'a, 's> IntoIterator for &'a HitList<'s> {
    type Item = &'a HitReport<'s>;
    type IntoIter = slice::Iter<'a, HitReport<'s>>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}
