use crate::Lengthf32;

/// Position of one detector hit, in centimetres in detector space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitPosition {
    pub x: Lengthf32,
    pub y: Lengthf32,
    pub z: Lengthf32,
}

impl HitPosition {
    pub fn new(x: Lengthf32, y: Lengthf32, z: Lengthf32) -> Self {
        Self { x, y, z }
    }

    /// Transaxial components, the only ones the projection geometry sees.
    pub fn xy(&self) -> (Lengthf32, Lengthf32) {
        (self.x, self.y)
    }
}

/// A detector event, tagged by what the sinogram pipeline can do with it.
///
/// Only a `Coincidence` carries positions: exactly two hits whose
/// connecting line is a candidate projection line. Anything else is kept
/// around solely so the pipeline can count what it skipped.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Coincidence(HitPosition, HitPosition),
    Other { hits: usize },
}

impl Event {
    /// Classify a hit list: exactly two hits make a coincidence.
    pub fn from_hits(hits: &[HitPosition]) -> Self {
        match *hits {
            [first, second] => Event::Coincidence(first, second),
            _ => Event::Other { hits: hits.len() },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_hits_make_a_coincidence() {
        let a = HitPosition::new(1.0, 2.0, 3.0);
        let b = HitPosition::new(-1.0, -2.0, -3.0);
        assert_eq!(Event::from_hits(&[a, b]), Event::Coincidence(a, b));
    }

    #[test]
    fn other_multiplicities_are_tagged_with_their_hit_count() {
        let h = HitPosition::new(0.0, 0.0, 0.0);
        assert_eq!(Event::from_hits(&[]),          Event::Other { hits: 0 });
        assert_eq!(Event::from_hits(&[h]),         Event::Other { hits: 1 });
        assert_eq!(Event::from_hits(&[h, h, h]),   Event::Other { hits: 3 });
    }
}
