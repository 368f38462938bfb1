//! Quantization of projection samples onto the sinogram grid.

use crate::projection::ProjectionSample;
use crate::{Anglef32, Lengthf32};

/// One angle bin per degree over the half-range.
pub const MAX_ANGLE_BINS: usize = 180;

/// Position of one sinogram cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinIndex {
    pub distance: usize,
    pub angle: usize,
}

/// Quantization grid derived once from the configured reconstruction
/// radius and distance accuracy.
#[derive(Clone, Copy, Debug)]
pub struct Binning {
    radius: Lengthf32,
    accuracy: Lengthf32,
    distance_bins: usize,
}

impl Binning {
    pub fn new(radius: Lengthf32, accuracy: Lengthf32) -> Self {
        let distance_bins = (radius * 2.0 / accuracy).ceil() as usize + 1;
        Self { radius, accuracy, distance_bins }
    }

    pub fn radius(&self) -> Lengthf32 { self.radius }

    /// Number of distance bins covering `[-radius, radius]`.
    pub fn distance_bins(&self) -> usize { self.distance_bins }

    pub fn angle_bins(&self) -> usize { MAX_ANGLE_BINS }

    /// Round a signed distance to the nearest multiple of `accuracy`,
    /// shifted by `radius` so that `[-radius, radius]` lands on
    /// non-negative indices. No clamping: callers must check the result
    /// against [`Binning::distance_bins`].
    pub fn distance_bin(&self, distance: Lengthf32) -> isize {
        ((distance + self.radius) / self.accuracy + self.accuracy / 2.0).floor() as isize
    }

    /// Round an angle to its integer-degree bin, folding the duplicate
    /// at the 180° wrap point back to 0.
    pub fn angle_bin(&self, angle: Anglef32) -> usize {
        let bin = angle.round() as isize;
        (if bin >= 180 { bin - 180 } else { bin }) as usize
    }

    /// Quantize a sample, or `None` if the distance bin falls outside
    /// the grid. Extreme geometry can push a distance past `radius`;
    /// the caller decides how loudly to complain.
    pub fn quantize(&self, sample: &ProjectionSample) -> Option<BinIndex> {
        let distance = self.distance_bin(sample.distance);
        if distance < 0 || distance as usize >= self.distance_bins {
            return None;
        }
        Some(BinIndex { distance: distance as usize, angle: self.angle_bin(sample.angle) })
    }
}
