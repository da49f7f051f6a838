use std::fmt;
use std::ops::Not;

/// Represent a color.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialOrd, PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Color {
    White,
    Black,
}

/// How many colors are there?
pub const NUM_COLORS: usize = 2;
/// List all colors
pub const ALL_COLORS: [Color; NUM_COLORS] = [Color::White, Color::Black];

impl Color {
    /// Which way is "forward" for my pawns, as a row delta.
    #[inline]
    pub fn pawn_direction(&self) -> i8 {
        match *self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The row my pawns start on.  Only pawns on this row may advance two squares.
    #[inline]
    pub fn pawn_row(&self) -> i8 {
        match *self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// The row my pieces other than pawns start on.
    #[inline]
    pub fn back_row(&self) -> i8 {
        match *self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl Not for Color {
    type Output = Color;

    /// Get the other color.
    #[inline]
    fn not(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[test]
fn opposite_colors() {
    assert_eq!(!Color::White, Color::Black);
    assert_eq!(!Color::Black, Color::White);
    assert_eq!(!!Color::White, Color::White);
}

#[test]
fn pawn_geometry() {
    assert_eq!(Color::White.pawn_row() + Color::White.pawn_direction(), 2);
    assert_eq!(Color::Black.pawn_row() + Color::Black.pawn_direction(), 5);
    assert_eq!(Color::White.back_row(), 0);
    assert_eq!(Color::Black.back_row(), 7);
}
