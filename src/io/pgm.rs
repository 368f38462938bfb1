//! Read / write sinogram slices as plain (ASCII) PGM rasters.
//!
//! Layout: the `P2` magic, a `width height` line (angle bins ×
//! distance bins), the slice's maximum cell value, then one row of
//! space-separated counts per distance bin. The writer is
//! deterministic: the same sinogram always serializes to the same
//! bytes, and `read` inverts `write` exactly.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use ndarray::Array2;

use crate::sinogram::SliceSinogram;

pub const MAGIC: &str = "P2";

pub fn write(sinogram: &SliceSinogram, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut buf = BufWriter::new(file);
    write_to(sinogram, &mut buf)?;
    buf.flush()
}

pub fn write_to(sinogram: &SliceSinogram, out: &mut impl Write) -> std::io::Result<()> {
    let counts = sinogram.counts();
    let (height, width) = counts.dim();
    writeln!(out, "{MAGIC}")?;
    writeln!(out, "{width} {height}")?;
    writeln!(out, "{}", sinogram.max())?;
    for row in counts.rows() {
        writeln!(out, "{}", row.iter().join(" "))?;
    }
    Ok(())
}

/// Parse a file written by [`write`] back into its count matrix and
/// declared maximum.
pub fn read(path: &Path) -> std::io::Result<(Array2<u32>, u32)> {
    let text = std::fs::read_to_string(path)?;
    parse(&text).ok_or_else(|| std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        format!("{} is not a sinogram raster", path.display()),
    ))
}

fn parse(text: &str) -> Option<(Array2<u32>, u32)> {
    let mut lines = text.lines();
    if lines.next()? != MAGIC { return None }
    let (width, height) = lines.next()?
        .split_whitespace()
        .map(str::parse::<usize>)
        .collect_tuple()
        .and_then(|(w, h)| Some((w.ok()?, h.ok()?)))?;
    let max = lines.next()?.trim().parse().ok()?;
    let cells = lines
        .flat_map(str::split_whitespace)
        .map(str::parse::<u32>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;
    let counts = Array2::from_shape_vec((height, width), cells).ok()?;
    Some((counts, max))
}
