//! Line-to-polar projection geometry.
//!
//! Maps the transaxial endpoints of a coincidence line to its (signed
//! distance from the origin, angle) representation. A line has two
//! equivalent (distance, angle) parametrizations; the sign flip at 90°
//! collapses them into one signed-distance, half-range-angle form.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::{Anglef32, Lengthf32};

/// Below this x-separation the line is treated as vertical.
pub const EPSILON: Lengthf32 = 1e-6;

/// One point of projection space, transient per coincidence.
///
/// `distance` is the perpendicular distance from the origin to the
/// infinite line through the two hits, signed by the line's
/// orientation; `angle` is in degrees, in `[0, 180]` (the duplicate at
/// 180 is folded to 0 by the quantizer).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionSample {
    pub distance: Lengthf32,
    pub angle: Anglef32,
}

/// Project a pair of transaxial hit positions.
///
/// Returns `None` for a degenerate pair (coincident points): no sample,
/// not an error.
pub fn project((x1, y1): (Lengthf32, Lengthf32),
               (x2, y2): (Lengthf32, Lengthf32)) -> Option<ProjectionSample> {
    // Twice the signed area of the triangle (origin, P1, P2) ...
    let raw = x2 * y1 - y2 * x1;
    let norm = (y2 - y1).hypot(x2 - x1);
    if norm <= 0.0 { return None }
    // ... over the base length gives the height: the signed distance
    // from the origin to the line.
    let distance = raw / norm;

    let mut angle = if (x2 - x1).abs() > EPSILON {
        ((y1 - y2) / (x2 - x1)).atan()
    } else {
        0.0
    };

    // Quadrant correction: atan only covers half a turn.
    if distance > 0.0 {
        angle += FRAC_PI_2;
    } else {
        angle += 3.0 * FRAC_PI_2;
    }
    if angle > PI {
        angle -= PI;
    }
    angle *= 180.0 / PI;

    // Fold the redundant (d, θ+90°) = (-d, θ) symmetry.
    let distance = if angle >= 90.0 { -distance } else { distance };
    Some(ProjectionSample { distance, angle })
}
