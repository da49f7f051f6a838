use crate::board::Board;
use crate::board_builder::BoardBuilder;
use crate::color::Color;
use crate::piece::Piece;
use crate::position::Position;
use failure::Fail;
use log::{debug, info, trace};
use std::fmt;

/// What was the result of this game?
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum GameResult {
    /// The Black king was captured.
    WhiteWins,
    /// The White king was captured.
    BlackWins,
}

impl GameResult {
    /// The color that captured the other king.
    pub fn winner(&self) -> Color {
        match *self {
            GameResult::WhiteWins => Color::White,
            GameResult::BlackWins => Color::Black,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let winner = self.winner();
        write!(f, "{} wins! {} king has been captured.", winner, !winner)
    }
}

/// Why a move was turned down.  This is an ordinary outcome, not a failure.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Fail)]
pub enum IllegalMove {
    #[fail(display = "No piece at the starting position.")]
    NoPiece,

    #[fail(display = "It's {}'s turn.", _0)]
    WrongTurn(Color),

    #[fail(display = "Invalid move for the selected piece.")]
    Unreachable,
}

/// A game in progress: the board, whose turn it is, and whether a king has fallen.
///
/// There is no check or checkmate.  A game ends when a king is captured, and stays over after
/// that.
///
/// ```
/// use capture_chess::{Color, GameState, Position};
///
/// let mut game = GameState::new();
/// let (e2, e4) = (Position::new(1, 4), Position::new(3, 4));
/// assert!(game.is_valid_move(e2, e4));
/// assert_eq!(game.apply_move(e2, e4), None);
/// assert_eq!(game.side_to_move(), Color::Black);
/// assert!(!game.is_game_over());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    game_over: bool,
    result: Option<GameResult>,
}

impl GameState {
    /// Create a new game with the standard starting position and White to move.
    pub fn new() -> GameState {
        GameState::new_with_board(Board::default(), Color::White)
    }

    /// Start a game from any position.  The game is not over yet even if a king is already
    /// missing; that is only noticed by `check_game_over`.
    pub fn new_with_board(board: Board, side_to_move: Color) -> GameState {
        GameState {
            board,
            side_to_move,
            game_over: false,
            result: None,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct access to the board, for setting up positions.  Changes made here bypass all of
    /// the rules.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Who's turn is it to move?
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Has a king been captured?
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Who won, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Check a move for the side to move, explaining why it is not allowed.
    ///
    /// ```
    /// use capture_chess::{Color, GameState, IllegalMove, Position};
    ///
    /// let game = GameState::new();
    /// assert_eq!(
    ///     game.check_move(Position::new(6, 0), Position::new(5, 0)),
    ///     Err(IllegalMove::WrongTurn(Color::White))
    /// );
    /// assert_eq!(
    ///     game.check_move(Position::new(3, 3), Position::new(4, 3)),
    ///     Err(IllegalMove::NoPiece)
    /// );
    /// ```
    pub fn check_move(&self, start: Position, end: Position) -> Result<(), IllegalMove> {
        let piece = self.board.get_piece(start).ok_or(IllegalMove::NoPiece)?;
        if piece.color() != self.side_to_move {
            return Err(IllegalMove::WrongTurn(self.side_to_move));
        }
        if piece.candidate_moves(start, &self.board).any(|dest| dest == end) {
            Ok(())
        } else {
            Err(IllegalMove::Unreachable)
        }
    }

    /// May the side to move play `start` to `end`?
    ///
    /// False if there is no piece on `start`, if it belongs to the other side, or if `end` is
    /// not one of its candidate moves.  The board is not touched.
    pub fn is_valid_move(&self, start: Position, end: Position) -> bool {
        match self.check_move(start, end) {
            Ok(()) => true,
            Err(reason) => {
                debug!("rejected {} to {}: {}", start, end, reason);
                false
            }
        }
    }

    /// Hand the move to the other side.
    pub fn switch_turn(&mut self) {
        self.side_to_move = !self.side_to_move;
    }

    /// Play a move that `is_valid_move` has already accepted, returning the captured piece.
    ///
    /// The turn passes to the other side unless this move captured a king.  Nothing is
    /// re-checked here, and calling this after the game is over is a mistake on the caller's
    /// part.
    pub fn apply_move(&mut self, start: Position, end: Position) -> Option<Piece> {
        let captured = self.board.move_piece(start, end);
        trace!(
            "{} played {} to {}, capturing {:?}",
            self.side_to_move,
            start,
            end,
            captured
        );
        self.check_game_over();
        if !self.game_over {
            self.switch_turn();
        }
        captured
    }

    /// Look for both kings and end the game if one is gone.
    ///
    /// A missing White king is checked first, so if both kings are somehow gone, Black wins.
    pub fn check_game_over(&mut self) {
        let result = if !self.board.has_king(Color::White) {
            GameResult::BlackWins
        } else if !self.board.has_king(Color::Black) {
            GameResult::WhiteWins
        } else {
            return;
        };
        if !self.game_over {
            info!("{}", result);
            self.game_over = true;
            self.result = Some(result);
        }
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}

impl From<BoardBuilder> for GameState {
    fn from(builder: BoardBuilder) -> GameState {
        GameState::new_with_board(builder.into(), builder.get_side_to_move())
    }
}

impl From<&BoardBuilder> for GameState {
    fn from(builder: &BoardBuilder) -> GameState {
        GameState::new_with_board(builder.into(), builder.get_side_to_move())
    }
}
