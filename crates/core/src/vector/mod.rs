//! Hex vectors: parsing, canonicalization and the derived views (bearing,
//! cartesian projection, movement grid).

mod bearing;
mod cartesian;
mod direction;
mod grid;
mod remainder;

pub use bearing::{Bearing, DistanceMode};
pub use cartesian::{Cartesian, SIN_60};
pub use direction::{Direction, Magnitudes};
pub use grid::{GridColumn, MovementGrid, SEGMENTS_PER_TURN};
pub use remainder::{RemainderTable, StandardRemainders};

use crate::error::{Error, Result, VectorFault};
use derive_more::{Add, AddAssign, Neg, Sub, SubAssign};
use log::trace;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A displacement or velocity over the hex grid, stored in an oblique basis.
///
/// `u` runs from F toward C, `v` runs from A toward D and `z` is vertical.
/// B and E sit between the two horizontal axes, so one B is `(+1, -1)` and
/// one E is `(-1, +1)`. Every set of direction magnitudes collapses onto
/// exactly one `(u, v, z)` triple, which makes the triple itself the
/// canonical form: two vectors are equal iff their triples are equal.
///
/// Vectors are (de)serialized as their canonical string, e.g. `"6F 3E 4+"`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Neg,
    Serialize,
    Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct HexVector {
    u: i64,
    v: i64,
    z: i64,
}

/// One component of a decomposed vector
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Component {
    pub magnitude: u64,
    pub direction: Direction,
}

impl Component {
    const fn zero(direction: Direction) -> Self {
        Self {
            magnitude: 0,
            direction,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.direction)
    }
}

/// The major/minor/vertical view of a canonical vector. `minor` is always
/// adjacent (60°) to `major` when both are non-zero. Unused components have
/// magnitude 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decomposition {
    pub major: Component,
    pub minor: Component,
    pub vertical: Component,
}

impl HexVector {
    /// The vector that doesn't go anywhere
    pub const ZERO: Self = Self { u: 0, v: 0, z: 0 };

    /// Build a vector straight from its oblique components
    pub const fn from_uvz(u: i64, v: i64, z: i64) -> Self {
        Self { u, v, z }
    }

    pub fn u(&self) -> i64 {
        self.u
    }

    pub fn v(&self) -> i64 {
        self.v
    }

    pub fn z(&self) -> i64 {
        self.z
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Expand into per-direction magnitudes, in canonical form: at most two
    /// horizontal directions, adjacent to each other, and at most one
    /// vertical direction.
    pub fn magnitudes(&self) -> Magnitudes {
        let mut magnitudes = Magnitudes::default();
        place(&mut magnitudes, self.u, Direction::C, Direction::F);
        place(&mut magnitudes, self.v, Direction::D, Direction::A);
        place(&mut magnitudes, self.z, Direction::Up, Direction::Down);
        // C/F and A/D are 120° from each other across B and E respectively
        magnitudes.consolidate_120(Direction::A, Direction::B, Direction::C);
        magnitudes.consolidate_120(Direction::D, Direction::E, Direction::F);
        magnitudes
    }

    /// Split into major, minor and vertical components. The largest
    /// horizontal magnitude is major and the second largest is minor; ties go
    /// to the direction that comes first in A-F order.
    pub fn decompose(&self) -> Decomposition {
        let magnitudes = self.magnitudes();
        let mut major = Component::zero(Direction::A);
        let mut minor = Component::zero(Direction::A);
        for &direction in &Direction::HORIZONTAL {
            let magnitude = magnitudes[direction];
            if magnitude > major.magnitude {
                if major.magnitude > minor.magnitude {
                    minor = major;
                }
                major = Component {
                    magnitude,
                    direction,
                };
            } else if magnitude > minor.magnitude {
                minor = Component {
                    magnitude,
                    direction,
                };
            }
        }

        let mut vertical = Component::zero(Direction::Up);
        for &direction in &Direction::VERTICAL {
            let magnitude = magnitudes[direction];
            if magnitude > vertical.magnitude {
                vertical = Component {
                    magnitude,
                    direction,
                };
            }
        }

        Decomposition {
            major,
            minor,
            vertical,
        }
    }

    /// Exact squared length. On the hex plane that's `u² + uv + v²` (the two
    /// axes are 120° apart), plus `z²`.
    pub fn magnitude_squared(&self) -> u128 {
        let (u, v, z) = (self.u as i128, self.v as i128, self.z as i128);
        (u * u + u * v + v * v + z * z) as u128
    }

    /// Straight-line distance covered by this vector
    pub fn cartesian_magnitude(&self) -> f64 {
        (self.magnitude_squared() as f64).sqrt()
    }

    /// Project into cartesian space. See [Cartesian] for the axes.
    pub fn to_cartesian(&self) -> Cartesian {
        let (u, v) = (self.u as f64, self.v as f64);
        Cartesian::new(u * SIN_60, -(v + u * 0.5), self.z as f64)
    }

    /// Movement grid using the [StandardRemainders] table
    pub fn movement_grid(&self) -> MovementGrid {
        self.movement_grid_with(&StandardRemainders)
    }

    /// Break this vector's movement down over the segments of one turn.
    /// Each component moves `magnitude / 8` every segment, and the remainder
    /// is spread out by `table`.
    pub fn movement_grid_with(
        &self,
        table: &impl RemainderTable,
    ) -> MovementGrid {
        let Decomposition {
            major,
            minor,
            vertical,
        } = self.decompose();
        if major.magnitude == 0 && vertical.magnitude == 0 {
            return MovementGrid::still();
        }

        let column = |component: Component| {
            if component.magnitude > 0 {
                Some(GridColumn {
                    direction: component.direction,
                    each: component.magnitude / SEGMENTS_PER_TURN as u64,
                })
            } else {
                None
            }
        };
        let remainder =
            |component: Component| (component.magnitude % 8) as u8;

        let major_rem = remainder(major);
        let minor_rem = remainder(minor);
        let vertical_rem = remainder(vertical);
        let horizontal_rem = (major_rem + minor_rem) % 8;

        let mut marks = [[false; 3]; SEGMENTS_PER_TURN as usize];
        for (i, row) in marks.iter_mut().enumerate() {
            let segment = i as u8 + 1;
            let (major_mark, minor_mark) =
                table.horizontal(major_rem, minor_rem, segment);
            let vertical_mark =
                table.vertical(horizontal_rem, vertical_rem, segment);
            *row = [major_mark, minor_mark, vertical_mark];
        }

        MovementGrid::new(
            [column(major), column(minor), column(vertical)],
            marks,
        )
    }
}

/// Put a signed axis value onto the direction it points toward
fn place(
    magnitudes: &mut Magnitudes,
    value: i64,
    positive: Direction,
    negative: Direction,
) {
    if value >= 0 {
        magnitudes[positive] = value as u64;
    } else {
        magnitudes[negative] = value.unsigned_abs();
    }
}

impl From<Magnitudes> for HexVector {
    fn from(magnitudes: Magnitudes) -> Self {
        let m = |direction| magnitudes[direction] as i64;
        Self {
            u: m(Direction::B) - m(Direction::E) + m(Direction::C)
                - m(Direction::F),
            v: -m(Direction::B) + m(Direction::E) + m(Direction::D)
                - m(Direction::A),
            z: m(Direction::Up) - m(Direction::Down),
        }
    }
}

/// Parse the numeric prefix of a token
fn parse_magnitude(token: &str, number: &str) -> Result<u64> {
    if number.is_empty() {
        return Err(Error::malformed(token, VectorFault::MissingMagnitude));
    }
    if let Some(digits) = number.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            // -0 is still zero
            if digits.bytes().all(|b| b == b'0') {
                return Ok(0);
            }
            return Err(Error::malformed(token, VectorFault::NegativeMagnitude));
        }
    }
    number
        .parse::<u32>()
        .map(u64::from)
        .map_err(|_| Error::malformed(token, VectorFault::InvalidMagnitude))
}

impl FromStr for HexVector {
    type Err = Error;

    /// Parse whitespace-separated `<magnitude><direction>` tokens, e.g.
    /// `"14F 3b 6+"`. Directions are case-insensitive and may each appear
    /// once. Blank input is the zero vector, as is `STILL`, so anything
    /// this type displays parses back.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("STILL") {
            return Ok(Self::ZERO);
        }

        let mut magnitudes = Magnitudes::default();
        let mut seen = [false; 8];

        for token in s.split_whitespace() {
            let mut chars = token.chars();
            let direction = chars
                .next_back()
                .and_then(Direction::from_char)
                .ok_or_else(|| {
                    Error::malformed(token, VectorFault::UnknownDirection)
                })?;
            let magnitude = parse_magnitude(token, chars.as_str())?;

            if std::mem::replace(&mut seen[direction.index()], true) {
                return Err(Error::malformed(
                    token,
                    VectorFault::DuplicateDirection,
                ));
            }
            magnitudes[direction] = magnitude;
        }

        let vector = Self::from(magnitudes);
        trace!("Parsed {:?} as {:?}", s, vector);
        Ok(vector)
    }
}

impl TryFrom<String> for HexVector {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HexVector> for String {
    fn from(vector: HexVector) -> Self {
        vector.to_string()
    }
}

impl fmt::Display for HexVector {
    /// `STILL`, or the non-zero components in major, minor, vertical order,
    /// e.g. `6F 3E 4+`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Decomposition {
            major,
            minor,
            vertical,
        } = self.decompose();
        if major.magnitude == 0 && vertical.magnitude == 0 {
            return write!(f, "STILL");
        }

        let components = [major, minor, vertical];
        let mut nonzero = components.iter().filter(|c| c.magnitude > 0);
        if let Some(first) = nonzero.next() {
            write!(f, "{}", first)?;
        }
        for component in nonzero {
            write!(f, " {}", component)?;
        }
        Ok(())
    }
}
