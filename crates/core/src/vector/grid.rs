use crate::vector::{Direction, HexVector, Magnitudes};
use std::fmt;

/// Number of segments in a game turn
pub const SEGMENTS_PER_TURN: u8 = 8;

/// One column of a movement grid: the direction it moves in and how far it
/// moves in *every* segment, before remainders are applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridColumn {
    pub direction: Direction,
    pub each: u64,
}

/// A per-segment breakdown of a vector's movement over one turn. There are
/// three columns (major, minor, vertical), any of which may be unused, and
/// eight rows of remainder marks.
///
/// Formatting produces the classic grid layout:
///
/// ```text
///  |B|C|+|
///  |0|0|0|
/// 1|*| | |
/// 2| |*|*|
/// ...
/// ```
///
/// or just `STILL` if nothing moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovementGrid {
    columns: [Option<GridColumn>; 3],
    marks: [[bool; 3]; SEGMENTS_PER_TURN as usize],
}

impl MovementGrid {
    /// A grid for a vector that doesn't move
    pub fn still() -> Self {
        Self {
            columns: [None; 3],
            marks: Default::default(),
        }
    }

    pub(crate) fn new(
        columns: [Option<GridColumn>; 3],
        marks: [[bool; 3]; SEGMENTS_PER_TURN as usize],
    ) -> Self {
        // A mark in an unused column means nothing, so drop it here rather
        // than carry it around
        let mut marks = marks;
        for row in marks.iter_mut() {
            for (mark, column) in row.iter_mut().zip(columns.iter()) {
                *mark &= column.is_some();
            }
        }
        Self { columns, marks }
    }

    pub fn is_still(&self) -> bool {
        self.columns.iter().all(Option::is_none)
    }

    /// The major, minor and vertical columns, in that order
    pub fn columns(&self) -> &[Option<GridColumn>; 3] {
        &self.columns
    }

    /// Does `column` (0 = major, 1 = minor, 2 = vertical) get a remainder
    /// move in `segment` (1-8)?
    pub fn is_marked(&self, segment: u8, column: usize) -> bool {
        self.marks[Self::row(segment)][column]
    }

    /// The full displacement applied during `segment` (1-8): every column's
    /// "each" amount, plus one for each marked remainder.
    pub fn displacement(&self, segment: u8) -> HexVector {
        let row = &self.marks[Self::row(segment)];
        let mut magnitudes = Magnitudes::default();
        for (column, marked) in self.columns.iter().zip(row) {
            if let Some(column) = column {
                magnitudes[column.direction] += column.each + *marked as u64;
            }
        }
        magnitudes.into()
    }

    fn row(segment: u8) -> usize {
        debug_assert!(
            (1..=SEGMENTS_PER_TURN).contains(&segment),
            "invalid segment {}",
            segment
        );
        ((segment as usize) + 7) % 8
    }
}

impl fmt::Display for MovementGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_still() {
            return write!(f, "STILL");
        }

        write!(f, " |")?;
        for column in &self.columns {
            match column {
                Some(column) => write!(f, "{}|", column.direction)?,
                None => write!(f, " |")?,
            }
        }
        write!(f, "\n |")?;
        for column in &self.columns {
            match column {
                Some(column) => write!(f, "{}|", column.each)?,
                None => write!(f, " |")?,
            }
        }
        for (i, row) in self.marks.iter().enumerate() {
            write!(f, "\n{}|", i + 1)?;
            for mark in row {
                write!(f, "{}|", if *mark { '*' } else { ' ' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still() {
        let grid = MovementGrid::still();
        assert!(grid.is_still());
        assert_eq!(grid.to_string(), "STILL");
        assert_eq!(grid.displacement(3), HexVector::ZERO);
    }

    #[test]
    fn test_displacement() {
        let vector: HexVector = "12D 4C 9-".parse().unwrap();
        let grid = vector.movement_grid();
        // Segment 8 gets the minor and vertical remainders on top of the
        // each-segment D and - movement
        assert_eq!(grid.displacement(8).to_string(), "1C 1D 2-");
        assert_eq!(grid.displacement(1).to_string(), "2D 1-");
    }

    #[test]
    fn test_unused_columns_unmarked() {
        let columns = [
            Some(GridColumn {
                direction: Direction::F,
                each: 0,
            }),
            None,
            None,
        ];
        let grid = MovementGrid::new(columns, [[true; 3]; 8]);
        assert!(grid.is_marked(1, 0));
        assert!(!grid.is_marked(1, 1));
        assert!(!grid.is_marked(1, 2));
    }
}
