use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum::{Display, EnumIter};

/// The eight AVID cardinal directions. `A` through `F` are the horizontal
/// hex-side directions, 60° apart and ordered clockwise. `Up` and `Down` are
/// the vertical directions, written `+` and `-` in vector strings.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Direction {
    A,
    B,
    C,
    D,
    E,
    F,
    #[strum(to_string = "+")]
    #[serde(rename = "+")]
    Up,
    #[strum(to_string = "-")]
    #[serde(rename = "-")]
    Down,
}

impl Direction {
    /// Horizontal directions in scan order. Decomposition tie-breaks depend
    /// on this order.
    pub const HORIZONTAL: [Self; 6] =
        [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Vertical directions in scan order
    pub const VERTICAL: [Self; 2] = [Self::Down, Self::Up];

    /// Parse a single direction character, case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            '+' => Some(Self::Up),
            '-' => Some(Self::Down),
            _ => None,
        }
    }

    /// Position of this direction in the [Magnitudes] array
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Index of this direction in the 12-entry AVID window table, where hex
    /// sides sit on even indices and the edges between them on odd ones.
    /// Vertical directions have no horizontal window.
    pub fn window_index(self) -> Option<u8> {
        if self.is_vertical() {
            None
        } else {
            Some(self.index() as u8 * 2)
        }
    }

    /// The window index of the edge between two horizontal directions, if
    /// they are adjacent (60° apart). Order of the arguments doesn't matter.
    pub fn edge_window_index(self, other: Self) -> Option<u8> {
        if self.is_vertical() || other.is_vertical() {
            return None;
        }
        let (a, b) = (self.index(), other.index());
        if (a + 1) % 6 == b {
            Some(a as u8 * 2 + 1)
        } else if (b + 1) % 6 == a {
            Some(b as u8 * 2 + 1)
        } else {
            None
        }
    }
}

/// One non-negative magnitude per [Direction], the uncollapsed form of a
/// vector string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Magnitudes([u64; 8]);

impl Magnitudes {
    /// Iterate over every direction with a non-zero magnitude
    pub fn nonzero(&self) -> impl Iterator<Item = (Direction, u64)> + '_ {
        use strum::IntoEnumIterator;
        Direction::iter()
            .map(move |dir| (dir, self[dir]))
            .filter(|(_, magnitude)| *magnitude > 0)
    }

    /// Fold the two directions on either side of `middle` (120° apart) into
    /// each other. The smaller of the two moves onto `middle` and is
    /// subtracted from the larger, so at most one of them stays non-zero.
    pub(crate) fn consolidate_120(
        &mut self,
        counter_clockwise: Direction,
        middle: Direction,
        clockwise: Direction,
    ) {
        let lesser = self[counter_clockwise].min(self[clockwise]);
        if lesser > 0 {
            self[middle] = lesser;
            self[counter_clockwise] -= lesser;
            self[clockwise] -= lesser;
        }
    }
}

impl Index<Direction> for Magnitudes {
    type Output = u64;

    fn index(&self, dir: Direction) -> &Self::Output {
        &self.0[dir.index()]
    }
}

impl IndexMut<Direction> for Magnitudes {
    fn index_mut(&mut self, dir: Direction) -> &mut Self::Output {
        &mut self.0[dir.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Direction::from_char('a'), Some(Direction::A));
        assert_eq!(Direction::from_char('F'), Some(Direction::F));
        assert_eq!(Direction::from_char('+'), Some(Direction::Up));
        assert_eq!(Direction::from_char('-'), Some(Direction::Down));
        assert_eq!(Direction::from_char('J'), None);
        assert_eq!(Direction::from_char('3'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::C.to_string(), "C");
        assert_eq!(Direction::Up.to_string(), "+");
        assert_eq!(Direction::Down.to_string(), "-");
    }

    #[test]
    fn test_edge_window_index() {
        assert_eq!(Direction::A.edge_window_index(Direction::B), Some(1));
        assert_eq!(Direction::D.edge_window_index(Direction::C), Some(5));
        // F and A wrap around to the last window, F/A
        assert_eq!(Direction::A.edge_window_index(Direction::F), Some(11));
        assert_eq!(Direction::A.edge_window_index(Direction::C), None);
        assert_eq!(Direction::A.edge_window_index(Direction::Up), None);
    }

    #[test]
    fn test_consolidate_120() {
        let mut magnitudes = Magnitudes::default();
        magnitudes[Direction::A] = 4;
        magnitudes[Direction::C] = 11;
        magnitudes.consolidate_120(Direction::A, Direction::B, Direction::C);
        assert_eq!(magnitudes[Direction::A], 0);
        assert_eq!(magnitudes[Direction::B], 4);
        assert_eq!(magnitudes[Direction::C], 7);
    }
}
