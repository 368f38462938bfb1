//! Axial (z) partitioning of the detector into independent sinogram
//! slices, and the routing of coincidences onto them.

use crate::event::HitPosition;
use crate::Lengthf32;

/// Axial half-extent of the detector, in cm. The full span
/// `[-AXIAL_HALF_SPAN, AXIAL_HALF_SPAN]` is what gets partitioned.
pub const AXIAL_HALF_SPAN: Lengthf32 = 25.0;

/// Axial interval owned by one sinogram slice: `[start, end)`, except
/// that the top-most slice also owns its upper edge, so the slices
/// cover the configured span exactly once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceRange {
    pub start: Lengthf32,
    pub end: Lengthf32,
    closed_top: bool,
}

impl SliceRange {
    pub fn contains(&self, z: Lengthf32) -> bool {
        z >= self.start && (z < self.end || (self.closed_top && z == self.end))
    }
}

/// Partition the axial span into `n` equal-width contiguous ranges.
///
/// Adjacent ranges share their boundary expression bit-for-bit, so a z
/// on an internal edge belongs to exactly one slice (the upper one).
pub fn split_axial_span(n: usize) -> Vec<SliceRange> {
    let width = 2.0 * AXIAL_HALF_SPAN / n as Lengthf32;
    (0..n)
        .map(|i| {
            let last = i == n - 1;
            SliceRange {
                start: i as Lengthf32 * width - AXIAL_HALF_SPAN,
                // Rounding in `width * n` must not lose the top edge
                end: if last { AXIAL_HALF_SPAN } else { (i + 1) as Lengthf32 * width - AXIAL_HALF_SPAN },
                closed_top: last,
            }
        })
        .collect()
}

/// Indices of the slices whose range contains **both** endpoints.
///
/// Zero matches is expected (the pair is simply never recorded); more
/// than one can only happen with overlapping ranges, which
/// [`split_axial_span`] never produces.
pub fn route<'r>(ranges: &'r [SliceRange], p: &HitPosition, q: &HitPosition)
                 -> impl Iterator<Item = usize> + 'r {
    let (z1, z2) = (p.z, q.z);
    ranges.iter()
        .enumerate()
        .filter(move |(_, r)| r.contains(z1) && r.contains(z2))
        .map(|(i, _)| i)
}
