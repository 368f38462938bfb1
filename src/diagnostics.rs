//! Monitoring histograms filled alongside the sinogram proper.
//!
//! These never influence the output files; they exist so that a run's
//! distance and angle distributions can be inspected after the fact.

use ndhistogram::{axis::Uniform, ndhistogram, HistND};

use crate::projection::ProjectionSample;
use crate::{binning::MAX_ANGLE_BINS, Lengthf32};

type Hist1D = HistND<(Uniform<f32>,), usize>;
type Hist2D = HistND<(Uniform<f32>, Uniform<f32>), usize>;

pub struct Diagnostics {
    radius: Lengthf32,
    distance: Hist1D,
    angle: Hist1D,
    sinogram: Hist2D,
}

impl Diagnostics {
    pub fn new(radius: Lengthf32, distance_bins: usize) -> Self {
        let angle_bins = MAX_ANGLE_BINS;
        Self {
            radius,
            // 4 mm granularity on the signed distance
            distance: ndhistogram!(Uniform::new((radius * 5.0) as usize, -radius, radius); usize),
            angle: ndhistogram!(Uniform::new(angle_bins, 0.0, angle_bins as f32); usize),
            sinogram: ndhistogram!(
                Uniform::new(distance_bins, 0.0, 2.0 * radius),
                Uniform::new(angle_bins, 0.0, angle_bins as f32);
                usize
            ),
        }
    }

    /// Fill all three histograms from one recorded sample.
    pub fn fill(&mut self, sample: &ProjectionSample) {
        use ndhistogram::Histogram;
        self.distance.fill(&sample.distance);
        self.angle.fill(&sample.angle);
        self.sinogram.fill(&(sample.distance + self.radius, sample.angle));
    }

    pub fn distance(&self) -> &Hist1D { &self.distance }
    pub fn angle   (&self) -> &Hist1D { &self.angle }
    pub fn sinogram(&self) -> &Hist2D { &self.sinogram }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndhistogram::Histogram;

    #[test]
    fn fill_lands_in_the_expected_bins() {
        let mut d = Diagnostics::new(42.5, 8501);
        d.fill(&ProjectionSample { distance: 0.0, angle: 90.0 });
        d.fill(&ProjectionSample { distance: 0.0, angle: 90.0 });
        assert_eq!(d.angle().value(&90.0), Some(&2));
        assert_eq!(d.angle().value(&45.0), Some(&0));
        assert_eq!(d.distance().value(&0.0), Some(&2));
        assert_eq!(d.sinogram().value(&(42.5, 90.0)), Some(&2));
    }
}
