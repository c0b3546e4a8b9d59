//! Remainder tables decide which segments of a turn carry the leftover
//! movement of a vector once the "each" portion (magnitude / 8, applied every
//! segment) has been taken out.

/// A lookup that spreads remainder movement over the 8 segments of a turn.
/// All remainder inputs are in `[0, 7]` and segments are in `[1, 8]`.
pub trait RemainderTable {
    /// Whether the major and minor horizontal components move in `segment`,
    /// as `(major, minor)`.
    fn horizontal(&self, major: u8, minor: u8, segment: u8) -> (bool, bool);

    /// Whether the vertical component moves in `segment`. `horizontal` is the
    /// sum of the horizontal remainders, mod 8.
    fn vertical(&self, horizontal: u8, vertical: u8, segment: u8) -> bool;
}

const MAJOR: u8 = 0b01;
const MINOR: u8 = 0b10;

/// The default remainder table. Both halves are built at compile time and
/// answer lookups by plain indexing.
///
/// Horizontal movement is spread as one combined stream of `major + minor`
/// moves, and the minor moves are then interleaved evenly into that stream.
/// Vertical movement is spread on its own, with a phase that depends on how
/// much horizontal movement shares the turn so the two don't bunch up.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardRemainders;

static HORIZONTAL: [[[u8; 8]; 8]; 8] = build_horizontal();
static VERTICAL: [[[bool; 8]; 8]; 8] = build_vertical();

impl RemainderTable for StandardRemainders {
    fn horizontal(&self, major: u8, minor: u8, segment: u8) -> (bool, bool) {
        let marks = HORIZONTAL[(major % 8) as usize][(minor % 8) as usize]
            [segment_index(segment)];
        (marks & MAJOR != 0, marks & MINOR != 0)
    }

    fn vertical(&self, horizontal: u8, vertical: u8, segment: u8) -> bool {
        VERTICAL[(horizontal % 8) as usize][(vertical % 8) as usize]
            [segment_index(segment)]
    }
}

/// Segment 1..=8 to array index 0..=7
fn segment_index(segment: u8) -> usize {
    debug_assert!((1..=8).contains(&segment), "invalid segment {}", segment);
    ((segment as usize) + 7) % 8
}

/// Number of moves completed by the end of `segment` (0..=8) when `total`
/// moves are spread over a full turn
const fn moves_by(segment: u64, total: u64) -> u64 {
    segment * total / 8
}

/// Does move number `index` (1-based) of `total` belong to the minor
/// component?
const fn is_minor_move(index: u64, total: u64, minor: u64) -> bool {
    let mut k = 1;
    while k <= minor {
        if k * total / minor == index {
            return true;
        }
        k += 1;
    }
    false
}

const fn horizontal_marks(major: u64, minor: u64) -> [u8; 8] {
    let mut marks = [0u8; 8];
    let total = major + minor;
    let mut segment = 1;

    if total <= 8 {
        // At most one move per segment, so each move goes to exactly one of
        // the two columns
        while segment <= 8 {
            let moves = moves_by(segment, total);
            if moves > moves_by(segment - 1, total) {
                marks[(segment - 1) as usize] =
                    if is_minor_move(moves, total, minor) {
                        MINOR
                    } else {
                        MAJOR
                    };
            }
            segment += 1;
        }
    } else {
        // Some segments carry two moves, and those always fire both columns.
        // The remaining minor moves are spread across the single-move
        // segments, centered in their share of the turn.
        let doubles = total - 8;
        let singles = 8 - doubles;
        let minor_only = minor - doubles;
        let mut single = 0;
        let mut k = 1;
        while segment <= 8 {
            let step = moves_by(segment, total) - moves_by(segment - 1, total);
            let i = (segment - 1) as usize;
            if step == 2 {
                marks[i] = MAJOR | MINOR;
            } else {
                single += 1;
                if k <= minor_only
                    && single == (2 * k - 1) * singles / (2 * minor_only) + 1
                {
                    marks[i] = MINOR;
                    k += 1;
                } else {
                    marks[i] = MAJOR;
                }
            }
            segment += 1;
        }
    }
    marks
}

const fn build_horizontal() -> [[[u8; 8]; 8]; 8] {
    let mut table = [[[0u8; 8]; 8]; 8];
    let mut major = 0;
    while major < 8 {
        let mut minor = 0;
        while minor < 8 {
            table[major][minor] = horizontal_marks(major as u64, minor as u64);
            minor += 1;
        }
        major += 1;
    }
    table
}

const fn vertical_marks(horizontal: u64, vertical: u64) -> [bool; 8] {
    let mut marks = [false; 8];
    let phase = horizontal + horizontal / 2;
    let phase = if phase > 7 { 7 } else { phase };
    let mut segment = 1;
    while segment <= 8 {
        marks[(segment - 1) as usize] = (segment * vertical + phase) / 8
            > ((segment - 1) * vertical + phase) / 8;
        segment += 1;
    }
    marks
}

const fn build_vertical() -> [[[bool; 8]; 8]; 8] {
    let mut table = [[[false; 8]; 8]; 8];
    let mut horizontal = 0;
    while horizontal < 8 {
        let mut vertical = 0;
        while vertical < 8 {
            table[horizontal][vertical] =
                vertical_marks(horizontal as u64, vertical as u64);
            vertical += 1;
        }
        horizontal += 1;
    }
    table
}
