//! Probe point selection.
//!
//! Chooses which three coordinates ahead of the vessel to submit to the
//! water oracle next. The bracket adapts to the last known straight-ahead
//! shore distance so that oracle calls are spent finely near a known
//! shoreline and coarsely when none is close.
//!
//! | Condition                    | Bracket | Points (m along heading)        |
//! |------------------------------|---------|---------------------------------|
//! | distance <= 25               | Tight   | 25, 15, 35                      |
//! | distance > 25, alternate     | Fan     | 25, 15 @ -45°, 15 @ +45°        |
//! | distance > 25, not alternate | Wide    | 25, 10, 75                      |

use crate::geo::{destination, Coordinate};

/// Number of points submitted per probe.
pub const PROBE_POINT_COUNT: usize = 3;

/// Distance of the anchor point that is always probed, in meters.
pub const ANCHOR_DISTANCE_M: f64 = 25.0;

/// At or below this straight-ahead distance the tight bracket is used.
pub const TIGHT_THRESHOLD_M: f64 = 25.0;

/// Assumed straight-ahead distance when no shore is known yet.
pub const DEFAULT_SHORE_DISTANCE_M: f64 = 100.0;

const TIGHT_NEAR_M: f64 = 15.0;
const TIGHT_FAR_M: f64 = 35.0;
const FAN_DISTANCE_M: f64 = 15.0;
const FAN_OFFSET_DEG: f64 = 45.0;
const WIDE_NEAR_M: f64 = 10.0;
const WIDE_FAR_M: f64 = 75.0;

/// Which pair of points accompanies the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeBracket {
    /// Shore is close: probe just short of and just past the anchor.
    Tight,
    /// Shore is far and lateral exploration was requested.
    Fan,
    /// Shore is far: probe near and well ahead.
    Wide,
}

impl ProbeBracket {
    /// Pick the bracket for a straight-ahead shore distance.
    pub fn select(distance_m: f64, alternate: bool) -> Self {
        if distance_m <= TIGHT_THRESHOLD_M {
            Self::Tight
        } else if alternate {
            Self::Fan
        } else {
            Self::Wide
        }
    }

    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Fan => "fan",
            Self::Wide => "wide",
        }
    }
}

/// Plans probe points ahead of the vessel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbePlanner;

impl ProbePlanner {
    pub fn new() -> Self {
        Self
    }

    /// Produce the three candidate coordinates for the next probe.
    ///
    /// The anchor point 25 m ahead always comes first, followed by the
    /// bracket pair chosen by [`ProbeBracket::select`].
    pub fn plan(
        &self,
        origin: Coordinate,
        bearing: f64,
        alternate: bool,
        distance_m: f64,
    ) -> [Coordinate; PROBE_POINT_COUNT] {
        let anchor = destination(origin, bearing, ANCHOR_DISTANCE_M);

        match ProbeBracket::select(distance_m, alternate) {
            ProbeBracket::Tight => [
                anchor,
                destination(origin, bearing, TIGHT_NEAR_M),
                destination(origin, bearing, TIGHT_FAR_M),
            ],
            // The modulo binds to the offset alone, leaving it at 45.
            ProbeBracket::Fan => [
                anchor,
                destination(origin, bearing - FAN_OFFSET_DEG % 360.0, FAN_DISTANCE_M),
                destination(origin, bearing + FAN_OFFSET_DEG % 360.0, FAN_DISTANCE_M),
            ],
            ProbeBracket::Wide => [
                anchor,
                destination(origin, bearing, WIDE_NEAR_M),
                destination(origin, bearing, WIDE_FAR_M),
            ],
        }
    }
}
