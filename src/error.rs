use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort or degrade a sinogram run.
///
/// Malformed events, degenerate pairs and unrouted pairs are *not*
/// errors: the pipeline skips them and tallies them. These variants
/// cover the genuinely exceptional cases.
#[derive(Debug, Error)]
pub enum SinogramError {
    #[error("couldn't read config file {path}: {source}")]
    ConfigRead { path: PathBuf, source: std::io::Error },

    #[error("couldn't parse config file {path}: {source}")]
    ConfigParse { path: PathBuf, source: toml::de::Error },

    #[error("reconstruction radius must be positive and finite, got {0}")]
    BadRadius(f32),

    #[error("distance accuracy must be positive and finite, got {0}")]
    BadAccuracy(f32),

    #[error("need at least one axial slice")]
    NoSlices,

    /// Write failures are fatal for the affected slice files only; the
    /// remaining slices have still been written by the time this is
    /// returned.
    #[error("{} sinogram slice file(s) could not be written", failures.len())]
    SliceWrites { failures: Vec<(usize, std::io::Error)> },
}
