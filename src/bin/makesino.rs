// ----------------------------------- CLI -----------------------------------
use clap::Parser;

/// Command line interface for `makesino`
#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "makesino", about = "Create sinograms from coincidence hit pairs")]
struct Cli {
    /// Input file: one coincidence per line, `x1 y1 z1 x2 y2 z2` in cm
    infile: PathBuf,

    /// TOML configuration file; the flags below override its values
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Prefix of the per-slice output files
    #[clap(short, long)]
    out_file_prefix: Option<String>,

    /// Radius of the reconstruction circle, in cm
    #[clap(short, long)]
    radius: Option<f32>,

    /// Distance quantization accuracy, in cm
    #[clap(short, long)]
    accuracy: Option<f32>,

    /// Number of axial slices
    #[clap(short = 'z', long)]
    slices: Option<usize>,
}

// --------------------------------------------------------------------------------

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use sinolor::config::{read_config_file, Config};
use sinolor::pipeline::SinogramCreator;
use sinolor::utils::parse_hit_line;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => read_config_file(path)?,
        None => Config::default(),
    };
    if let Some(prefix) = args.out_file_prefix { config.out_file_prefix       = prefix }
    if let Some(radius) = args.radius          { config.reconstruction_radius = radius }
    if let Some(accuracy) = args.accuracy      { config.distance_accuracy     = accuracy }
    if let Some(slices) = args.slices          { config.z_slice_count         = slices }

    // Before starting the potentially long accumulation, make sure that
    // the output destination exists.
    if let Some(parent) = Path::new(&config.out_file_prefix).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut creator = SinogramCreator::new(&config)?;

    let text = fs::read_to_string(&args.infile)?;
    let bar = ProgressBar::new(text.lines().count() as u64)
        .with_message(args.infile.display().to_string());
    bar.set_style(ProgressStyle::default_bar()
                  .template("Processing {msg}\n[{elapsed_precise}] {wide_bar} {pos}/{len} ({eta_precise})")
                  .unwrap());
    for line in text.lines() {
        bar.inc(1);
        if line.trim().is_empty() { continue }
        match parse_hit_line(line) {
            Ok(event) => creator.process(&event),
            Err(e) => log::warn!("skipping unparseable line {line:?}: {e}"),
        }
    }
    bar.finish();

    let finished = creator.finalize();
    println!("{}", finished.tally());
    let written = finished.write_all(&config.out_file_prefix)?;
    for path in &written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
