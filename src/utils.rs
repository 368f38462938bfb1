use std::num::ParseFloatError;

use thiserror::Error;

use crate::event::{Event, HitPosition};
use crate::Lengthf32;

/// A line of the text format that cannot yield any event at all.
#[derive(Debug, Error)]
pub enum ParseHitError {
    #[error(transparent)]
    Float(#[from] ParseFloatError),
    #[error("non-finite coordinate {0}")]
    NonFinite(Lengthf32),
}

/// Parse one line of the plain-text hit-pair format.
///
/// A coincidence is six whitespace-separated finite floats,
/// `x1 y1 z1 x2 y2 z2`, in cm. Any other whole number of `x y z`
/// triples becomes an [`Event::Other`] with that multiplicity, and a
/// line with a trailing partial triple can never be a coincidence
/// either (the pipeline skips both). Unparseable or non-finite
/// coordinates are errors.
pub fn parse_hit_line(s: &str) -> Result<Event, ParseHitError> {
    let n = s.split_whitespace()
        .map(str::parse::<Lengthf32>)
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(&bad) = n.iter().find(|v| !v.is_finite()) {
        return Err(ParseHitError::NonFinite(bad));
    }
    if n.len() % 3 != 0 {
        // The partial triple still counts towards the multiplicity
        return Ok(Event::Other { hits: (n.len() + 2) / 3 });
    }
    let hits = n.chunks_exact(3)
        .map(|xyz| HitPosition::new(xyz[0], xyz[1], xyz[2]))
        .collect::<Vec<_>>();
    Ok(Event::from_hits(&hits))
}

/// Group numeric digits to facilitate reading long numbers
pub fn group_digits<F: std::fmt::Display>(n: F) -> String {
    use numsep::{separate, Locale};
    separate(n, Locale::English)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn six_floats_make_a_coincidence() {
        let event = parse_hit_line("10 0 0  -10 0 0").unwrap();
        assert_eq!(event, Event::Coincidence(HitPosition::new(10.0, 0.0, 0.0),
                                             HitPosition::new(-10.0, 0.0, 0.0)));
    }

    #[test]
    fn other_multiplicities_are_skippable_events() {
        assert_eq!(parse_hit_line("").unwrap(), Event::Other { hits: 0 });
        assert_eq!(parse_hit_line("1 2 3").unwrap(), Event::Other { hits: 1 });
        assert_eq!(parse_hit_line("1 2 3 4 5 6 7 8 9").unwrap(), Event::Other { hits: 3 });
    }

    #[test]
    fn partial_triples_are_never_a_coincidence() {
        assert_eq!(parse_hit_line("1 2 3 4 5 6 7").unwrap(), Event::Other { hits: 3 });
        assert_eq!(parse_hit_line("1 2 3 4 5 6 7 8").unwrap(), Event::Other { hits: 3 });
        assert_eq!(parse_hit_line("1 2 3 4").unwrap(), Event::Other { hits: 2 });
    }

    #[test]
    fn non_numeric_input_is_an_error() {
        assert!(parse_hit_line("10 0 zero -10 0 0").is_err());
    }

    #[test]
    fn non_finite_coordinates_are_an_error() {
        // "NaN" and "inf" do parse as f32, but can't be quantized
        assert!(parse_hit_line("NaN 0 0 -10 0 0").is_err());
        assert!(parse_hit_line("10 0 0 inf 0 0").is_err());
        assert!(parse_hit_line("10 0 0 -inf 0 0").is_err());
    }
}
