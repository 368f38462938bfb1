//! Configuration file parser for sinogram creation.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SinogramError;
use crate::Lengthf32;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {

    /// Prefix of the per-slice output files: slice `i` is written to
    /// `{prefix}{i}.ppm`
    #[serde(default = "default_out_file_prefix")]
    pub out_file_prefix: String,

    /// Radius of the reconstruction circle, in cm
    #[serde(default = "default_radius")]
    pub reconstruction_radius: Lengthf32,

    /// Size of one distance bin, in cm: 0.01 means 1 px in the
    /// sinogram corresponds to 0.01 cm in reality
    #[serde(default = "default_accuracy")]
    pub distance_accuracy: Lengthf32,

    /// Number of independent sinogram slices along z
    #[serde(default = "default_slice_count")]
    pub z_slice_count: usize,
}

fn default_out_file_prefix() -> String { "sinogram".to_string() }
fn default_radius()      -> Lengthf32 { 42.5 }
fn default_accuracy()    -> Lengthf32 { 0.01 }
fn default_slice_count() -> usize     { 1 }

impl Default for Config {
    fn default() -> Self {
        Self {
            out_file_prefix: default_out_file_prefix(),
            reconstruction_radius: default_radius(),
            distance_accuracy: default_accuracy(),
            z_slice_count: default_slice_count(),
        }
    }
}

impl Config {
    /// A configuration that cannot produce a positive number of bins
    /// must abort the run before any event is processed.
    pub fn validate(&self) -> Result<(), SinogramError> {
        let r = self.reconstruction_radius;
        let a = self.distance_accuracy;
        if !(r.is_finite() && r > 0.0) { return Err(SinogramError::BadRadius(r)) }
        if !(a.is_finite() && a > 0.0) { return Err(SinogramError::BadAccuracy(a)) }
        if self.z_slice_count == 0     { return Err(SinogramError::NoSlices) }
        Ok(())
    }
}

pub fn read_config_file(path: &Path) -> Result<Config, SinogramError> {
    let text = fs::read_to_string(path)
        .map_err(|source| SinogramError::ConfigRead { path: path.to_owned(), source })?;
    toml::from_str(&text)
        .map_err(|source| SinogramError::ConfigParse { path: path.to_owned(), source })
}
