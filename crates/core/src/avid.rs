//! AVID windows: named directions on the skyball. A window is one of twelve
//! horizontal directions (the six hex sides and the six edges between them,
//! 30° apart) combined with one of seven rings of elevation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Horizontal window labels, clockwise from A. Hex sides sit on even
/// indices and edges on odd ones.
pub const LABELS: [&str; 12] = [
    "A", "A/B", "B", "B/C", "C", "C/D", "D", "D/E", "E", "E/F", "F", "F/A",
];

/// Ring of the two poles. Rings 1 and 2 are "blue" and "green", ring 0 is
/// the "amber" horizon.
pub const POLE_RING: i8 = 3;

/// The largest angular offset between two windows, i.e. diametrically
/// opposite
pub const MAX_OFFSET: u8 = 6;

/// A single window on the AVID. Poles collapse every direction into one
/// window each, and always carry direction 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct AvidWindow {
    direction: u8,
    ring: i8,
}

impl AvidWindow {
    /// Straight up, `+++`
    pub const UP: Self = Self {
        direction: 0,
        ring: POLE_RING,
    };
    /// Straight down, `---`
    pub const DOWN: Self = Self {
        direction: 0,
        ring: -POLE_RING,
    };

    /// Build a window from a direction index (0-11) and a ring (-3 to 3).
    /// Any direction given with a pole ring is discarded.
    pub fn new(direction: u8, ring: i8) -> Result<Self> {
        if direction as usize >= LABELS.len()
            || !(-POLE_RING..=POLE_RING).contains(&ring)
        {
            return Err(Error::InvalidWindow {
                label: format!("({}, {})", direction, ring),
            });
        }
        Ok(Self::wrapping(direction as i32, ring as i32))
    }

    /// Build a window from an unreduced direction, which wraps around the
    /// horizon. Rings at or beyond a pole become that pole.
    pub(crate) fn wrapping(direction: i32, ring: i32) -> Self {
        if ring >= POLE_RING as i32 {
            Self::UP
        } else if ring <= -POLE_RING as i32 {
            Self::DOWN
        } else {
            Self {
                direction: direction.rem_euclid(LABELS.len() as i32) as u8,
                ring: ring as i8,
            }
        }
    }

    pub fn direction(&self) -> u8 {
        self.direction
    }

    pub fn ring(&self) -> i8 {
        self.ring
    }

    pub fn to_tuple(&self) -> (u8, i8) {
        (self.direction, self.ring)
    }

    pub fn is_pole(&self) -> bool {
        self.ring.abs() == POLE_RING
    }

    /// Is this window on the amber ring?
    pub fn is_horizon(&self) -> bool {
        self.ring == 0
    }

    /// All windows exactly `distance` 30° steps away from this one, starting
    /// with the highest and going clockwise as seen from outside the AVID.
    /// Distances past 3 are taken from the opposite window, so distance 6 is
    /// the single diametrically opposite window.
    ///
    /// Rings around a pole aren't defined and return
    /// [Error::Unsupported].
    pub fn offset_ring(&self, distance: u8) -> Result<Vec<AvidWindow>> {
        if distance > MAX_OFFSET {
            return Err(Error::OffsetOutOfRange { distance });
        }
        if self.is_pole() {
            return Err(Error::Unsupported("offset ring around a pole window"));
        }

        let (mut direction, mut ring, mut distance) =
            (self.direction as i32, self.ring as i32, distance);
        if distance > 3 {
            direction += 6;
            ring = -ring;
            distance = MAX_OFFSET - distance;
        }

        let offsets = OFFSETS[(ring + 2) as usize][distance as usize];
        Ok(offsets
            .iter()
            .map(|&(dd, dv)| {
                Self::wrapping(direction + dd as i32, ring + dv as i32)
            })
            .collect())
    }

    /// The window `distance` steps from this one heading toward `toward`.
    /// There's no agreed rule for which window to pick when several are
    /// equally good, so this always fails with [Error::Unsupported].
    pub fn offset(&self, _distance: u8, _toward: AvidWindow) -> Result<Self> {
        Err(Error::Unsupported("single-window offsets"))
    }
}

impl FromStr for AvidWindow {
    type Err = Error;

    /// Parse labels like `F-`, `b/c++`, `C/B--` or `+++`. Edge labels are
    /// accepted in either letter order.
    fn from_str(label: &str) -> Result<Self> {
        match label {
            "+++" => return Ok(Self::UP),
            "---" => return Ok(Self::DOWN),
            _ => {}
        }

        let (body, ring) = [("++", 2), ("+", 1), ("--", -2), ("-", -1)]
            .iter()
            .find_map(|(suffix, ring)| {
                label.strip_suffix(suffix).map(|body| (body, *ring))
            })
            .unwrap_or((label, 0));
        let body = body.to_ascii_uppercase();

        let find = |name: &str| LABELS.iter().position(|&l| l == name);
        let direction = find(&body)
            .or_else(|| {
                if body.contains('/') {
                    find(&body.chars().rev().collect::<String>())
                } else {
                    None
                }
            })
            .ok_or_else(|| Error::InvalidWindow {
                label: label.into(),
            })?;

        Ok(Self::wrapping(direction as i32, ring))
    }
}

impl TryFrom<String> for AvidWindow {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<AvidWindow> for String {
    fn from(window: AvidWindow) -> Self {
        window.to_string()
    }
}

impl fmt::Display for AvidWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ring {
            POLE_RING => write!(f, "+++"),
            ring if ring == -POLE_RING => write!(f, "---"),
            ring => {
                let sign = if ring < 0 { "-" } else { "+" };
                write!(
                    f,
                    "{}{}",
                    LABELS[self.direction as usize],
                    sign.repeat(ring.unsigned_abs() as usize)
                )
            }
        }
    }
}

/// `(Δdirection, Δring)` steps to every window at a given distance, indexed
/// by `[origin ring + 2][distance]`. Each list starts at the top and runs
/// clockwise. Distances 4-6 reuse these from the opposite window.
static OFFSETS: [[&[(i8, i8)]; 4]; 5] = [
    // green, below
    [
        &[(0, 0)],
        &[
            (0, 1),
            (-1, 1),
            (-2, 0),
            (-1, 0),
            (0, -1),
            (1, 0),
            (2, 0),
            (1, 1),
        ],
        &[
            (0, 2),
            (-1, 2),
            (-2, 2),
            (-2, 1),
            (-3, 0),
            (-4, 0),
            (-5, 0),
            (6, 0),
            (5, 0),
            (4, 0),
            (3, 0),
            (2, 1),
            (2, 2),
            (1, 2),
        ],
        &[
            (0, 3),
            (-1, 3),
            (-2, 3),
            (-3, 3),
            (-3, 2),
            (-3, 1),
            (-4, 1),
            (-5, 1),
            (6, 1),
            (5, 1),
            (4, 1),
            (3, 1),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
        ],
    ],
    // blue, below
    [
        &[(0, 0)],
        &[
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
        ],
        &[
            (0, 2),
            (-1, 2),
            (-2, 2),
            (-2, 1),
            (-2, 0),
            (-2, -1),
            (0, -2),
            (2, -1),
            (2, 0),
            (2, 1),
            (2, 2),
            (1, 2),
        ],
        &[
            (0, 3),
            (-1, 3),
            (-2, 3),
            (-3, 3),
            (-3, 2),
            (-3, 1),
            (-3, 0),
            (-3, -1),
            (-4, -1),
            (-5, -1),
            (6, -1),
            (5, 0),
            (4, 0),
            (3, -1),
            (3, 0),
            (3, 1),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
        ],
    ],
    // amber
    [
        &[(0, 0)],
        &[
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
        ],
        &[
            (0, 2),
            (-1, 2),
            (-2, 2),
            (-2, 1),
            (-2, 0),
            (-2, -1),
            (-2, -2),
            (-1, -2),
            (0, -2),
            (1, -2),
            (2, -2),
            (2, -1),
            (2, 0),
            (2, 1),
            (2, 2),
            (1, 2),
        ],
        &[
            (0, 3),
            (-3, 2),
            (-3, 1),
            (-3, 0),
            (-3, -1),
            (-3, -2),
            (0, -3),
            (3, -2),
            (3, -1),
            (3, 0),
            (3, 1),
            (3, 2),
        ],
    ],
    // blue, above
    [
        &[(0, 0)],
        &[
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
        ],
        &[
            (0, 2),
            (-2, 1),
            (-2, 0),
            (-2, -1),
            (-2, -2),
            (-1, -2),
            (0, -2),
            (1, -2),
            (2, -2),
            (2, -1),
            (2, 0),
            (2, 1),
        ],
        &[
            (6, 1),
            (-5, 1),
            (-4, 1),
            (-3, 1),
            (-3, 0),
            (-3, -1),
            (-3, -2),
            (-3, -3),
            (-2, -3),
            (-1, -3),
            (0, -3),
            (1, -3),
            (2, -3),
            (3, -3),
            (3, -2),
            (3, -1),
            (3, 0),
            (3, 1),
            (4, 0),
            (5, 0),
        ],
    ],
    // green, above
    [
        &[(0, 0)],
        &[
            (0, 1),
            (-1, 0),
            (-2, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
            (2, 0),
            (1, 0),
        ],
        &[
            (6, 0),
            (-5, 0),
            (-4, 0),
            (-3, 0),
            (-2, -1),
            (-2, -2),
            (-1, -2),
            (0, -2),
            (1, -2),
            (2, -2),
            (2, -1),
            (3, 0),
            (4, 0),
            (5, 0),
        ],
        &[
            (6, -1),
            (-5, -1),
            (-4, -1),
            (-3, -1),
            (-3, -2),
            (-3, -3),
            (-2, -3),
            (-1, -3),
            (0, -3),
            (1, -3),
            (2, -3),
            (3, -3),
            (3, -2),
            (3, -1),
            (4, -1),
            (5, -1),
        ],
    ],
];
