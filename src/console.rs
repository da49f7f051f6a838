use crate::chess_move::ChessMove;
use crate::error::Error;
use crate::game::{GameResult, GameState};
use log::{debug, warn};
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter your move (e.g., e2,e4 or e2 to e4 or 2,5 to 4,5): ";

/// What happened on one turn at the console.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Turn {
    /// A move was played.
    Played,
    /// The input could not be read as a move, or the move was not allowed.  Same player again.
    Rejected,
    /// There is nothing left to read.
    EndOfInput,
}

/// Two players sharing one terminal.
///
/// The console reads moves a line at a time from `input` and writes everything the players see
/// to `output`, so it works just as well on a script and a buffer as on stdin and stdout.
///
/// ```
/// use capture_chess::{Console, GameResult};
/// use std::io::Cursor;
///
/// let moves = "e2 to e4\ne7,e5\n";
/// let mut out = Vec::new();
/// let mut console = Console::new(Cursor::new(moves), &mut out);
/// assert_eq!(console.run().unwrap(), None);
/// assert_eq!(console.game().board().pieces().count(), 32);
/// ```
pub struct Console<R, W> {
    input: R,
    output: W,
    game: GameState,
    show_board: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// A console for a brand new game.
    pub fn new(input: R, output: W) -> Console<R, W> {
        Console::with_game(GameState::new(), input, output)
    }

    /// A console that continues an existing game.
    pub fn with_game(game: GameState, input: R, output: W) -> Console<R, W> {
        Console {
            input,
            output,
            game,
            show_board: true,
        }
    }

    /// Draw the board before every prompt?  On by default.
    pub fn show_board(&mut self, show: bool) -> &mut Self {
        self.show_board = show;
        self
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Give back the game, e.g. once the players are done.
    pub fn into_game(self) -> GameState {
        self.game
    }

    /// Prompt for, read, and play a single move.
    ///
    /// Bad input and illegal moves are reported to the players and leave the game untouched.
    /// Only a failure to read or write is an `Err`.
    pub fn play_turn(&mut self) -> Result<Turn, Error> {
        if self.show_board {
            write!(self.output, "{}", self.game.board())?;
        }
        writeln!(self.output, "{}'s move:", self.game.side_to_move())?;
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            writeln!(self.output, "End of input.")?;
            return Ok(Turn::EndOfInput);
        }

        let chess_move: ChessMove = match line.parse() {
            Ok(m) => m,
            Err(e) => {
                debug!("could not parse {:?}: {}", line.trim(), e);
                writeln!(self.output, "Invalid input: {}", e)?;
                return Ok(Turn::Rejected);
            }
        };

        let (start, end) = (chess_move.get_source(), chess_move.get_dest());
        if let Err(reason) = self.game.check_move(start, end) {
            debug!("rejected {}: {}", chess_move, reason);
            writeln!(self.output, "{}", reason)?;
            return Ok(Turn::Rejected);
        }

        let captured = self.game.apply_move(start, end);
        writeln!(self.output, "Moved from {} to {}", start, end)?;
        if let Some(piece) = captured {
            writeln!(self.output, "Captured {} at {}", piece.name(), end)?;
        }
        if let Some(result) = self.game.result() {
            writeln!(self.output, "{}", result)?;
        }
        Ok(Turn::Played)
    }

    /// Play until a king is captured or the input runs out.
    pub fn run(&mut self) -> Result<Option<GameResult>, Error> {
        writeln!(self.output, "Welcome to Console Chess!")?;
        while !self.game.is_game_over() {
            if self.play_turn()? == Turn::EndOfInput {
                warn!("input ended before the game was decided");
                break;
            }
        }
        if self.show_board && self.game.is_game_over() {
            write!(self.output, "{}", self.game.board())?;
        }
        writeln!(self.output, "Game Over.")?;
        Ok(self.game.result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::position::Position;
    use std::io::Cursor;

    fn play(script: &str) -> (Option<GameResult>, GameState, String) {
        let mut out = Vec::new();
        let (result, game) = {
            let mut console = Console::new(Cursor::new(script.to_owned()), &mut out);
            console.show_board(false);
            let result = console.run().unwrap();
            (result, console.into_game())
        };
        (result, game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reports_moves_and_captures() {
        let (result, game, out) = play("a2 to a4\nb7,b5\n4,1 5,2\n");
        assert_eq!(result, None);
        assert!(out.contains("Moved from a2 to a4"));
        assert!(out.contains("Moved from b7 to b5"));
        assert!(out.contains("Moved from a4 to b5"));
        assert!(out.contains("Captured Pawn at b5"));
        assert!(out.contains("End of input."));
        assert!(out.ends_with("Game Over.\n"));
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn bad_input_keeps_the_turn() {
        let (_, game, out) = play("invalid_input\ne7 to e5\na2 to b3\n");
        assert!(out.contains("Invalid input: "));
        assert!(out.contains("It's White's turn."));
        assert!(out.contains("Invalid move for the selected piece."));
        assert_eq!(*game.board(), crate::board::Board::default());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(out.matches("White's move:").count(), 4);
    }

    #[test]
    fn empty_square() {
        let (_, _, out) = play("e4 to e5\n");
        assert!(out.contains("No piece at the starting position."));
    }

    #[test]
    fn king_capture_ends_the_game() {
        let mut game = GameState::new();
        let board = game.board_mut();
        board.set_piece(Position::new(7, 4), None);
        board.set_piece(Position::new(4, 4), Some(Piece::King(Color::White)));
        board.set_piece(Position::new(4, 5), Some(Piece::King(Color::Black)));

        let mut out = Vec::new();
        let result = {
            let script = Cursor::new("5,5 5,6\ne2 to e4\n");
            let mut console = Console::with_game(game, script, &mut out);
            let result = console.run().unwrap();
            assert!(console.game().is_game_over());
            result
        };
        let out = String::from_utf8(out).unwrap();
        assert_eq!(result, Some(GameResult::WhiteWins));
        assert!(out.contains("Captured King at f5"));
        assert!(out.contains("White wins! Black king has been captured."));
        // The second line is never read.
        assert!(!out.contains("Moved from e2 to e4"));
        assert!(out.ends_with("Game Over.\n"));
    }

    #[test]
    fn draws_the_board_before_each_prompt() {
        let mut out = Vec::new();
        Console::new(Cursor::new(""), &mut out).run().unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Welcome to Console Chess!\n  a b c d e f g h\n8 r n b q k b n r 8\n"));
        assert!(out.contains("White's move:\n"));
        assert!(out.contains(PROMPT));
    }

    #[test]
    fn single_turns() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new("g1 to f3\nnonsense\n"), &mut out);
        console.show_board(false);
        assert_eq!(console.play_turn().unwrap(), Turn::Played);
        assert_eq!(console.play_turn().unwrap(), Turn::Rejected);
        assert_eq!(console.play_turn().unwrap(), Turn::EndOfInput);
        assert_eq!(console.game().side_to_move(), Color::Black);
    }

    #[test]
    fn far_off_coordinates_are_illegal_not_malformed() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new("200,1 3,3\n2,5 to 4,5\n"), &mut out);
        console.show_board(false);
        assert_eq!(console.play_turn().unwrap(), Turn::Rejected);
        assert_eq!(console.play_turn().unwrap(), Turn::Played);
        drop(console);
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("Invalid input: "));
        assert!(out.contains("No piece at the starting position."));
        assert!(out.contains("Moved from e2 to e4"));
        assert!(PROMPT.contains("2,5 to 4,5"));
    }
}
