//! The per-slice sinogram accumulator.

use ndarray::Array2;

use crate::binning::{BinIndex, Binning};

/// One axial slice's sinogram: a dense (distance bin × angle bin) count
/// matrix, plus the largest cell value seen so far.
///
/// Write-only during processing: counts are only ever incremented.
/// `max` is updated transactionally with each increment, so it never
/// needs a full scan.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceSinogram {
    counts: Array2<u32>,
    max: u32,
}

impl SliceSinogram {
    /// A zero-filled sinogram sized by the quantization grid.
    pub fn new(binning: &Binning) -> Self {
        Self {
            counts: Array2::zeros((binning.distance_bins(), binning.angle_bins())),
            max: 0,
        }
    }

    /// Count one observation. `bin` must come from the same `Binning`
    /// this sinogram was sized with.
    pub fn record(&mut self, bin: BinIndex) {
        let cell = &mut self.counts[[bin.distance, bin.angle]];
        *cell += 1;
        if *cell > self.max {
            self.max = *cell;
        }
    }

    /// Largest cell value recorded so far.
    pub fn max(&self) -> u32 { self.max }

    /// Rows are distance bins, columns are angle bins.
    pub fn counts(&self) -> &Array2<u32> { &self.counts }

    /// Sum over all cells; equals the number of recorded observations.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn small_binning() -> Binning {
        Binning::new(1.0, 0.1) // 21 distance bins
    }

    #[test]
    fn starts_zeroed() {
        let s = SliceSinogram::new(&small_binning());
        assert_eq!(s.counts().dim(), (21, 180));
        assert_eq!(s.max(), 0);
        assert_eq!(s.total(), 0);
    }

    #[test]
    fn record_increments_one_cell_and_the_max() {
        let mut s = SliceSinogram::new(&small_binning());
        let bin = BinIndex { distance: 10, angle: 90 };
        s.record(bin);
        s.record(bin);
        s.record(BinIndex { distance: 0, angle: 0 });
        assert_eq!(s.counts()[[10, 90]], 2);
        assert_eq!(s.counts()[[0, 0]], 1);
        assert_eq!(s.max(), 2);
        assert_eq!(s.total(), 3);
    }

    #[test]
    fn max_matches_brute_force_scan_after_random_records() {
        let mut rng = StdRng::seed_from_u64(20170107);
        let binning = small_binning();
        let mut s = SliceSinogram::new(&binning);
        for _ in 0..10_000 {
            s.record(BinIndex {
                distance: rng.gen_range(0..binning.distance_bins()),
                angle: rng.gen_range(0..binning.angle_bins()),
            });
        }
        let brute_force = s.counts().iter().copied().max().unwrap();
        assert_eq!(s.max(), brute_force);
        assert_eq!(s.total(), 10_000);
    }
}
