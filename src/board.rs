use crate::color::Color;
use crate::piece::Piece;
use crate::position::{Position, NUM_COLS, NUM_ROWS};
use std::fmt;

/// Back rank order from the a-file to the h-file.
const BACK_RANK: [fn(Color) -> Piece; NUM_COLS as usize] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A representation of a chess board.  That's why you're here, right?
///
/// The board is an 8x8 grid where every cell holds at most one `Piece`.  It does not know whose
/// turn it is and never checks whether a move is legal; that is the job of `GameState`.  It also
/// does not insist on there being exactly one king per side, so tests and tools may place any
/// pieces they like.
///
/// Every accessor is total: a position off the board reads as an empty square, and writing to
/// one does nothing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    grid: [[Option<Piece>; NUM_COLS as usize]; NUM_ROWS as usize],
}

impl Board {
    /// Construct a new `Board` that is completely empty.
    /// Note: This does NOT give you the initial position.  Just a blank slate.
    pub fn new() -> Board {
        Board {
            grid: [[None; NUM_COLS as usize]; NUM_ROWS as usize],
        }
    }

    /// Reset the board to the standard starting position.
    ///
    /// ```
    /// use capture_chess::{Board, Color, Piece, Position};
    ///
    /// let mut board = Board::new();
    /// board.initialize();
    /// assert_eq!(board.get_piece(Position::new(0, 4)), Some(Piece::King(Color::White)));
    /// assert_eq!(board.get_piece(Position::new(7, 3)), Some(Piece::Queen(Color::Black)));
    /// assert_eq!(board, Board::default());
    /// ```
    pub fn initialize(&mut self) {
        *self = Board::new();
        for color in crate::color::ALL_COLORS.iter() {
            for (col, make) in BACK_RANK.iter().enumerate() {
                self.grid[color.back_row() as usize][col] = Some(make(*color));
                self.grid[color.pawn_row() as usize][col] = Some(Piece::Pawn(*color));
            }
        }
    }

    /// Are the row and column both on the board?
    #[inline]
    pub fn is_within_bounds(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < NUM_ROWS && col >= 0 && col < NUM_COLS
    }

    /// What is on this square?  `None` if it is empty or off the board.
    #[inline]
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        if !self.is_within_bounds(pos.row(), pos.col()) {
            return None;
        }
        self.grid[pos.row() as usize][pos.col() as usize]
    }

    /// Put a piece (or nothing) on a square, replacing whatever was there.  Does nothing if the
    /// position is off the board.
    #[inline]
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        if !self.is_within_bounds(pos.row(), pos.col()) {
            return;
        }
        self.grid[pos.row() as usize][pos.col() as usize] = piece;
    }

    /// Pick up the piece on `start` and put it down on `end`, returning whatever it landed on.
    ///
    /// This is a mechanical relocation.  No rules are checked, so it is also handy for setting
    /// up positions.  If `start` is empty nothing happens and `None` is returned.
    ///
    /// ```
    /// use capture_chess::{Board, Color, Piece, Position};
    ///
    /// let mut board = Board::default();
    /// let captured = board.move_piece(Position::new(0, 3), Position::new(6, 3));
    /// assert_eq!(captured, Some(Piece::Pawn(Color::Black)));
    /// assert_eq!(board.get_piece(Position::new(6, 3)), Some(Piece::Queen(Color::White)));
    /// assert_eq!(board.get_piece(Position::new(0, 3)), None);
    /// ```
    pub fn move_piece(&mut self, start: Position, end: Position) -> Option<Piece> {
        let piece = self.get_piece(start)?;
        let captured = self.get_piece(end);
        self.set_piece(end, Some(piece));
        self.set_piece(start, None);
        captured
    }

    /// Is there a king of this color anywhere on the board?
    pub fn has_king(&self, color: Color) -> bool {
        self.pieces()
            .any(|(_, piece)| piece.is_king() && piece.color() == color)
    }

    /// Every occupied square with its piece, a1 first and h8 last.
    pub fn pieces<'a>(&'a self) -> impl Iterator<Item = (Position, Piece)> + 'a {
        Position::all().filter_map(move |pos| self.get_piece(pos).map(|piece| (pos, piece)))
    }
}

impl Default for Board {
    /// The standard starting position.
    fn default() -> Board {
        let mut board = Board::new();
        board.initialize();
        board
    }
}

impl fmt::Display for Board {
    /// Draw the board from White's side: rank 8 at the top, files a to h left to right, and `.`
    /// for an empty square.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in (0..NUM_ROWS).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..NUM_COLS {
                match self.get_piece(Position::new(row, col)) {
                    Some(piece) => write!(f, "{} ", piece.glyph())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "{}", row + 1)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn starting_position() {
        let board = Board::default();
        for color in crate::color::ALL_COLORS.iter() {
            let back = color.back_row();
            assert_eq!(board.get_piece(p(back, 0)), Some(Piece::Rook(*color)));
            assert_eq!(board.get_piece(p(back, 1)), Some(Piece::Knight(*color)));
            assert_eq!(board.get_piece(p(back, 2)), Some(Piece::Bishop(*color)));
            assert_eq!(board.get_piece(p(back, 3)), Some(Piece::Queen(*color)));
            assert_eq!(board.get_piece(p(back, 4)), Some(Piece::King(*color)));
            assert_eq!(board.get_piece(p(back, 5)), Some(Piece::Bishop(*color)));
            assert_eq!(board.get_piece(p(back, 6)), Some(Piece::Knight(*color)));
            assert_eq!(board.get_piece(p(back, 7)), Some(Piece::Rook(*color)));
            for col in 0..8 {
                assert_eq!(
                    board.get_piece(p(color.pawn_row(), col)),
                    Some(Piece::Pawn(*color))
                );
            }
        }
        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.get_piece(p(row, col)), None);
            }
        }
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn initialize_clears_old_pieces() {
        let mut board = Board::new();
        board.set_piece(p(4, 4), Some(Piece::Queen(Color::Black)));
        board.initialize();
        assert_eq!(board.get_piece(p(4, 4)), None);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn off_board_is_empty() {
        let mut board = Board::default();
        assert_eq!(board.get_piece(p(-1, 0)), None);
        assert_eq!(board.get_piece(p(0, 8)), None);
        board.set_piece(p(8, 8), Some(Piece::King(Color::White)));
        assert_eq!(board, Board::default());
        assert!(!board.is_within_bounds(8, 0));
        assert!(!board.is_within_bounds(0, -1));
        assert!(board.is_within_bounds(7, 7));
        assert!(board.is_within_bounds(0, 0));
    }

    #[test]
    fn move_from_empty_square_does_nothing() {
        let mut board = Board::default();
        assert_eq!(board.move_piece(p(3, 3), p(1, 1)), None);
        assert_eq!(board, Board::default());
        assert_eq!(board.move_piece(p(-1, 3), p(3, 3)), None);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn move_to_empty_square() {
        let mut board = Board::default();
        assert_eq!(board.move_piece(p(1, 4), p(3, 4)), None);
        assert_eq!(board.get_piece(p(3, 4)), Some(Piece::Pawn(Color::White)));
        assert_eq!(board.get_piece(p(1, 4)), None);
    }

    #[test]
    fn move_onto_own_piece_overwrites() {
        let mut board = Board::default();
        assert_eq!(
            board.move_piece(p(0, 0), p(0, 1)),
            Some(Piece::Knight(Color::White))
        );
        assert_eq!(board.get_piece(p(0, 1)), Some(Piece::Rook(Color::White)));
        assert_eq!(board.pieces().count(), 31);
    }

    #[test]
    fn kings() {
        let mut board = Board::default();
        assert!(board.has_king(Color::White));
        assert!(board.has_king(Color::Black));
        board.set_piece(p(7, 4), None);
        assert!(!board.has_king(Color::Black));
        assert!(board.has_king(Color::White));
        board.set_piece(p(4, 4), Some(Piece::Queen(Color::Black)));
        assert!(!board.has_king(Color::Black));
        board.set_piece(p(5, 5), Some(Piece::King(Color::Black)));
        assert!(board.has_king(Color::Black));
    }

    #[test]
    fn render_starting_position() {
        let expected = "  a b c d e f g h\n\
                        8 r n b q k b n r 8\n\
                        7 p p p p p p p p 7\n\
                        6 . . . . . . . . 6\n\
                        5 . . . . . . . . 5\n\
                        4 . . . . . . . . 4\n\
                        3 . . . . . . . . 3\n\
                        2 P P P P P P P P 2\n\
                        1 R N B Q K B N R 1\n  \
                        a b c d e f g h\n";
        assert_eq!(Board::default().to_string(), expected);
    }
}
