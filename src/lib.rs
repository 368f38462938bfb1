pub mod binning;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod event;
pub mod io;
pub mod pipeline;
pub mod projection;
pub mod sinogram;
pub mod slices;
pub mod utils;

pub use config::Config;
pub use error::SinogramError;
pub use event::{Event, HitPosition};
pub use pipeline::{FinishedSinograms, SinogramCreator};
pub use projection::ProjectionSample;

// Scalar conventions: all positions and distances are f32 centimetres,
// all angles f32 degrees unless a function says otherwise.
pub type Lengthf32 = f32;
pub type Anglef32  = f32;
