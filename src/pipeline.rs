//! The event pipeline: geometry → quantize → route → accumulate.
//!
//! The stages are glued together here in a strictly synchronous,
//! pull-based loop: the caller hands over one event at a time and each
//! call completes fully before returning. Finalization consumes the
//! pipeline, so recording after end-of-stream is a compile error rather
//! than a runtime one.

use std::fmt;
use std::path::PathBuf;

use log::{error, warn};

use crate::binning::Binning;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::SinogramError;
use crate::event::Event;
use crate::io::pgm;
use crate::projection::project;
use crate::sinogram::SliceSinogram;
use crate::slices::{route, split_axial_span, SliceRange};
use crate::utils::group_digits;

/// Running tallies over the processed event stream. None of these are
/// errors; the final report simply accounts for every event seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Events handed to `process`, of any multiplicity
    pub events: u64,
    /// Observations recorded into some slice
    pub recorded: u64,
    /// Events without exactly two hits
    pub wrong_multiplicity: u64,
    /// Coincidences of two coincident points
    pub degenerate: u64,
    /// Samples whose distance bin fell outside the grid (dropped)
    pub out_of_grid: u64,
    /// Valid samples whose endpoints matched no slice
    pub unrouted: u64,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "events processed : {:>12}", group_digits(self.events))?;
        writeln!(f, "recorded         : {:>12}", group_digits(self.recorded))?;
        writeln!(f, "not coincidences : {:>12}", group_digits(self.wrong_multiplicity))?;
        writeln!(f, "degenerate pairs : {:>12}", group_digits(self.degenerate))?;
        writeln!(f, "outside the grid : {:>12}", group_digits(self.out_of_grid))?;
        write!  (f, "unrouted pairs   : {:>12}", group_digits(self.unrouted))
    }
}

/// Accumulates sinograms from a stream of coincidence events.
pub struct SinogramCreator {
    binning: Binning,
    ranges: Vec<SliceRange>,
    slices: Vec<SliceSinogram>,
    diagnostics: Diagnostics,
    tally: Tally,
}

impl SinogramCreator {
    /// Validate the configuration and allocate one zero-filled sinogram
    /// per axial slice.
    pub fn new(config: &Config) -> Result<Self, SinogramError> {
        config.validate()?;
        let binning = Binning::new(config.reconstruction_radius, config.distance_accuracy);
        let ranges = split_axial_span(config.z_slice_count);
        let slices = ranges.iter().map(|_| SliceSinogram::new(&binning)).collect();
        let diagnostics = Diagnostics::new(binning.radius(), binning.distance_bins());
        Ok(Self { binning, ranges, slices, diagnostics, tally: Tally::default() })
    }

    /// Process one event to completion. Non-coincidences and degenerate
    /// pairs only advance the tallies.
    pub fn process(&mut self, event: &Event) {
        self.tally.events += 1;
        let (p, q) = match event {
            Event::Coincidence(p, q) => (p, q),
            Event::Other { .. } => {
                self.tally.wrong_multiplicity += 1;
                return;
            }
        };
        let Some(sample) = project(p.xy(), q.xy()) else {
            self.tally.degenerate += 1;
            return;
        };
        let Some(bin) = self.binning.quantize(&sample) else {
            // Extreme geometry past the reconstruction radius: drop the
            // sample, but leave a trace of the raw values.
            warn!("distance {} (angle {}) outside the sinogram grid; \
                   hits ({}, {}) -- ({}, {})",
                  sample.distance, sample.angle, p.x, p.y, q.x, q.y);
            self.tally.out_of_grid += 1;
            return;
        };
        let mut routed = false;
        for i in route(&self.ranges, p, q) {
            self.slices[i].record(bin);
            self.diagnostics.fill(&sample);
            self.tally.recorded += 1;
            routed = true;
        }
        if !routed {
            self.tally.unrouted += 1;
        }
    }

    pub fn tally(&self) -> &Tally { &self.tally }

    pub fn diagnostics(&self) -> &Diagnostics { &self.diagnostics }

    /// End of stream: no further recording is possible on the result.
    pub fn finalize(self) -> FinishedSinograms {
        let Self { ranges, slices, diagnostics, tally, .. } = self;
        FinishedSinograms { ranges, slices, diagnostics, tally }
    }
}

/// The pipeline's immutable end state: one sinogram per axial slice.
pub struct FinishedSinograms {
    ranges: Vec<SliceRange>,
    slices: Vec<SliceSinogram>,
    diagnostics: Diagnostics,
    tally: Tally,
}

impl FinishedSinograms {
    pub fn slices(&self) -> &[SliceSinogram] { &self.slices }

    pub fn ranges(&self) -> &[SliceRange] { &self.ranges }

    pub fn tally(&self) -> &Tally { &self.tally }

    pub fn diagnostics(&self) -> &Diagnostics { &self.diagnostics }

    /// Write every slice to `{prefix}{index}.ppm`, in slice order.
    ///
    /// A failed write loses that slice's file only: the remaining
    /// slices are still attempted, and all failures come back together
    /// in the error.
    pub fn write_all(&self, prefix: &str) -> Result<Vec<PathBuf>, SinogramError> {
        let mut written = vec![];
        let mut failures = vec![];
        for (i, slice) in self.slices.iter().enumerate() {
            let path = PathBuf::from(format!("{prefix}{i}.ppm"));
            match pgm::write(slice, &path) {
                Ok(()) => written.push(path),
                Err(e) => {
                    error!("failed to write slice {i} to {}: {e}", path.display());
                    failures.push((i, e));
                }
            }
        }
        if failures.is_empty() {
            Ok(written)
        } else {
            Err(SinogramError::SliceWrites { failures })
        }
    }
}
