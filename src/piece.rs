use crate::board::Board;
use crate::color::Color;
use crate::movegen::{self, CandidateMoves};
use crate::position::Position;
use std::fmt;

/// Represent a chess piece.  Every kind of piece carries its own color.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Copy, Clone, Debug, Hash)]
pub enum Piece {
    King(Color),
    Queen(Color),
    Rook(Color),
    Bishop(Color),
    Knight(Color),
    Pawn(Color),
}

/// How many piece types are there?
pub const NUM_PIECES: usize = 6;

impl Piece {
    /// The human readable name of this kind of piece, e.g. "Knight".
    pub fn name(&self) -> &'static str {
        match *self {
            Piece::King(_) => "King",
            Piece::Queen(_) => "Queen",
            Piece::Rook(_) => "Rook",
            Piece::Bishop(_) => "Bishop",
            Piece::Knight(_) => "Knight",
            Piece::Pawn(_) => "Pawn",
        }
    }

    /// Who owns this piece?
    #[inline]
    pub fn color(&self) -> Color {
        match *self {
            Piece::King(c)
            | Piece::Queen(c)
            | Piece::Rook(c)
            | Piece::Bishop(c)
            | Piece::Knight(c)
            | Piece::Pawn(c) => c,
        }
    }

    /// Is this a king (of either color)?
    #[inline]
    pub fn is_king(&self) -> bool {
        match *self {
            Piece::King(_) => true,
            _ => false,
        }
    }

    /// The board glyph: uppercase for White, lowercase for Black.
    ///
    /// ```
    /// use capture_chess::{Color, Piece};
    ///
    /// assert_eq!(Piece::Knight(Color::White).glyph(), 'N');
    /// assert_eq!(Piece::Knight(Color::Black).glyph(), 'n');
    /// ```
    pub fn glyph(&self) -> char {
        let c = match *self {
            Piece::King(_) => 'k',
            Piece::Queen(_) => 'q',
            Piece::Rook(_) => 'r',
            Piece::Bishop(_) => 'b',
            Piece::Knight(_) => 'n',
            Piece::Pawn(_) => 'p',
        };
        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Enumerate the squares this piece could move to from `at`, ignoring check entirely.
    ///
    /// The board is only read, never changed.  The piece does not have to actually stand on
    /// `at`; the rules only look at the other squares.
    ///
    /// ```
    /// use capture_chess::{Board, Color, Piece, Position};
    ///
    /// let board = Board::default();
    /// let knight = Piece::Knight(Color::White);
    /// let moves: Vec<Position> = knight.candidate_moves(Position::new(0, 1), &board).collect();
    /// assert_eq!(moves, vec![Position::new(2, 0), Position::new(2, 2)]);
    /// ```
    pub fn candidate_moves(&self, at: Position, board: &Board) -> CandidateMoves {
        match *self {
            Piece::King(c) => movegen::king_moves(at, c, board),
            Piece::Queen(c) => movegen::queen_moves(at, c, board),
            Piece::Rook(c) => movegen::rook_moves(at, c, board),
            Piece::Bishop(c) => movegen::bishop_moves(at, c, board),
            Piece::Knight(c) => movegen::knight_moves(at, c, board),
            Piece::Pawn(c) => movegen::pawn_moves(at, c, board),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[test]
fn glyph_case_follows_color() {
    let kinds: [fn(Color) -> Piece; NUM_PIECES] = [
        Piece::King,
        Piece::Queen,
        Piece::Rook,
        Piece::Bishop,
        Piece::Knight,
        Piece::Pawn,
    ];
    for make in kinds.iter() {
        for color in crate::color::ALL_COLORS.iter() {
            let piece = make(*color);
            assert_eq!(piece.color(), *color);
            assert_eq!(piece.glyph().is_ascii_uppercase(), *color == Color::White);
        }
    }
}

#[test]
fn names() {
    assert_eq!(Piece::Pawn(Color::Black).name(), "Pawn");
    assert_eq!(Piece::King(Color::White).name(), "King");
    assert!(Piece::King(Color::Black).is_king());
    assert!(!Piece::Queen(Color::Black).is_king());
}
