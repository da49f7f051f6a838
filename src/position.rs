use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// How many rows are there?
pub const NUM_ROWS: i8 = 8;
/// How many columns are there?
pub const NUM_COLS: i8 = 8;
/// How many positions are on the board?
pub const NUM_POSITIONS: usize = (NUM_ROWS as usize) * (NUM_COLS as usize);

const FILE_LETTERS: &str = "abcdefgh";

/// Printed in place of a square name when a `Position` is off the board.
pub const INVALID_SQUARE: &str = "Invalid";

/// Represent a (row, column) coordinate on the chess board.
///
/// Row 0 is White's back rank and column 0 is the a-file.  A `Position` is not validated when it
/// is made: stepping off the edge is allowed, and the `Board` treats such a position as an empty
/// square.
///
/// ```
/// use capture_chess::Position;
///
/// let e2 = Position::new(1, 4);
/// assert_eq!(e2.to_algebraic(), "e2");
/// assert_eq!("e2".parse::<Position>().unwrap(), e2);
/// assert_eq!(Position::new(8, 0).to_algebraic(), "Invalid");
/// ```
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash, Default)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    /// Make a position given a row and a column.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    /// Return the row (0 is rank 1).
    #[inline]
    pub fn row(&self) -> i8 {
        self.row
    }

    /// Return the column (0 is file a).
    #[inline]
    pub fn col(&self) -> i8 {
        self.col
    }

    /// Step by a row and column delta.  The result may be off the board.
    #[inline]
    pub fn offset(&self, rows: i8, cols: i8) -> Position {
        Position::new(self.row.saturating_add(rows), self.col.saturating_add(cols))
    }

    /// Is this position on the 8x8 board?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.row >= 0 && self.row < NUM_ROWS && self.col >= 0 && self.col < NUM_COLS
    }

    /// Convert this position to a `usize` for table lookups.  Only meaningful when `is_valid`.
    #[inline]
    pub fn to_index(&self) -> usize {
        (self.row as usize) * (NUM_COLS as usize) + (self.col as usize)
    }

    /// Name this square in algebraic notation, e.g. (1, 4) is "e2".  Positions off the board
    /// come back as "Invalid" rather than failing.
    pub fn to_algebraic(&self) -> String {
        if !self.is_valid() {
            return INVALID_SQUARE.to_owned();
        }
        let file = FILE_LETTERS.as_bytes()[self.col as usize] as char;
        format!("{}{}", file, self.row + 1)
    }

    /// Every position on the board, a1 first, then along the row, ending at h8.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_ROWS).flat_map(|row| (0..NUM_COLS).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Position {
    type Err = Error;

    /// Parse an algebraic square such as `e4`.  The file letter may be upper or lower case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ch: Vec<char> = s.chars().collect();
        if ch.len() != 2 {
            return Err(Error::InvalidSquare {
                square: s.to_owned(),
            });
        }
        let col = FILE_LETTERS
            .find(ch[0].to_ascii_lowercase())
            .ok_or(Error::InvalidFile { file: ch[0] })?;
        let row = match ch[1].to_digit(10) {
            Some(d) if d >= 1 && d <= 8 => d - 1,
            _ => return Err(Error::InvalidRank { rank: ch[1] }),
        };
        Ok(Position::new(row as i8, col as i8))
    }
}
