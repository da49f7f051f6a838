use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::position::{Position, NUM_POSITIONS};

use std::ops::{Index, IndexMut};

/// Lay out a position by hand.
///
/// This structure is useful in the following cases:
/// * You are setting up a puzzle or a test position in code.
/// * You want a game to start with Black to move.
///
/// Nothing is validated: any number of pieces, and any number of kings, may be placed.
///
/// ```
/// use capture_chess::{BoardBuilder, Board, Color, GameState, Piece, Position};
///
/// let mut position = BoardBuilder::new();
/// position
///     .piece(Position::new(0, 0), Piece::King(Color::White))
///     .piece(Position::new(7, 7), Piece::King(Color::Black))
///     .side_to_move(Color::Black);
///
/// // You can index the position by the square:
/// assert_eq!(position[Position::new(0, 0)], Some(Piece::King(Color::White)));
///
/// let game: GameState = position.into();
/// assert_eq!(game.side_to_move(), Color::Black);
/// assert_eq!(game.board().pieces().count(), 2);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoardBuilder {
    pieces: [Option<Piece>; NUM_POSITIONS],
    side_to_move: Color,
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder with White to move.
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_POSITIONS],
            side_to_move: Color::White,
        }
    }

    /// Set up a position with everything pre-loaded.  Positions off the board are skipped.
    ///
    /// ```
    /// use capture_chess::{Board, BoardBuilder, Color, Piece, Position};
    ///
    /// let board: Board = BoardBuilder::setup(
    ///         &[
    ///             (Position::new(0, 0), Piece::King(Color::White)),
    ///             (Position::new(7, 7), Piece::King(Color::Black)),
    ///         ],
    ///         Color::Black)
    ///     .into();
    /// assert_eq!(board.get_piece(Position::new(7, 7)), Some(Piece::King(Color::Black)));
    /// ```
    pub fn setup<'a>(
        pieces: impl IntoIterator<Item = &'a (Position, Piece)>,
        side_to_move: Color,
    ) -> BoardBuilder {
        let mut result = BoardBuilder {
            pieces: [None; NUM_POSITIONS],
            side_to_move,
        };

        for &(pos, piece) in pieces.into_iter() {
            if pos.is_valid() {
                result[pos] = Some(piece);
            }
        }

        result
    }

    /// Get the player who will move first.
    pub fn get_side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn side_to_move<'a>(&'a mut self, color: Color) -> &'a mut Self {
        self.side_to_move = color;
        self
    }

    /// Set a piece on a square, overwriting whatever was there.
    ///
    /// This function can be used on self directly or in a builder pattern.
    ///
    /// Panics if the position is off the board.
    pub fn piece<'a>(&'a mut self, pos: Position, piece: Piece) -> &'a mut Self {
        self[pos] = Some(piece);
        self
    }

    /// Clear a square on the board.
    ///
    /// Panics if the position is off the board.
    pub fn clear_square<'a>(&'a mut self, pos: Position) -> &'a mut Self {
        self[pos] = None;
        self
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        BoardBuilder::new()
    }
}

impl Index<Position> for BoardBuilder {
    type Output = Option<Piece>;

    fn index<'a>(&'a self, index: Position) -> &'a Self::Output {
        assert!(index.is_valid(), "{:?} is off the board", index);
        &self.pieces[index.to_index()]
    }
}

impl IndexMut<Position> for BoardBuilder {
    fn index_mut<'a>(&'a mut self, index: Position) -> &'a mut Self::Output {
        assert!(index.is_valid(), "{:?} is off the board", index);
        &mut self.pieces[index.to_index()]
    }
}

impl From<&BoardBuilder> for Board {
    fn from(builder: &BoardBuilder) -> Board {
        let mut board = Board::new();
        for pos in Position::all() {
            board.set_piece(pos, builder[pos]);
        }
        board
    }
}

impl From<BoardBuilder> for Board {
    fn from(builder: BoardBuilder) -> Board {
        (&builder).into()
    }
}

impl From<&Board> for BoardBuilder {
    fn from(board: &Board) -> Self {
        let mut builder = BoardBuilder::new();
        for (pos, piece) in board.pieces() {
            builder[pos] = Some(piece);
        }
        builder
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        (&board).into()
    }
}

#[test]
fn round_trip_through_board() {
    let builder: BoardBuilder = Board::default().into();
    let board: Board = builder.into();
    assert_eq!(board, Board::default());
}

#[test]
fn clear_and_replace() {
    let mut builder: BoardBuilder = Board::default().into();
    builder
        .clear_square(Position::new(0, 4))
        .piece(Position::new(4, 4), Piece::King(Color::White));
    let board: Board = builder.into();
    assert_eq!(board.get_piece(Position::new(0, 4)), None);
    assert_eq!(
        board.get_piece(Position::new(4, 4)),
        Some(Piece::King(Color::White))
    );
}

#[test]
fn setup_skips_positions_off_the_board() {
    let builder = BoardBuilder::setup(
        &[
            (Position::new(9, 0), Piece::Queen(Color::White)),
            (Position::new(3, 3), Piece::Queen(Color::Black)),
        ],
        Color::White,
    );
    let board: Board = builder.into();
    assert_eq!(board.pieces().count(), 1);
}

#[test]
#[should_panic]
fn index_off_the_board() {
    let builder = BoardBuilder::new();
    let _piece = builder[Position::new(-1, 0)];
}
