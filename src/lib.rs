//! # King-capture chess rules
//!
//! This crate plays chess without check.  Each piece knows which squares it could move to on a
//! plain 8x8 board, a `GameState` accepts a move only if it is one of those squares and it is
//! that piece's turn, and the game ends the moment a king is captured.
//!
//! ```
//! use capture_chess::{ChessMove, GameState};
//!
//! let mut game = GameState::new();
//! let m: ChessMove = "e2 to e4".parse().expect("valid notation");
//! if game.is_valid_move(m.get_source(), m.get_dest()) {
//!     game.apply_move(m.get_source(), m.get_dest());
//! }
//! println!("{}", game.board());
//! ```
//!
//! There is no castling, en passant, promotion, stalemate, or draw of any kind.

mod board;
pub use crate::board::*;

mod board_builder;
pub use crate::board_builder::*;

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod console;
pub use crate::console::*;

mod error;
pub use crate::error::*;

mod game;
pub use crate::game::*;

mod movegen;
pub use crate::movegen::{CandidateMoves, MAX_CANDIDATES};

mod piece;
pub use crate::piece::*;

mod position;
pub use crate::position::*;
