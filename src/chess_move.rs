use crate::error::Error;
use crate::position::Position;
use std::fmt;
use std::str::FromStr;

/// Represent a move typed in by a player: where a piece starts and where it should go.
///
/// Nothing about the board is known here, so a `ChessMove` may well be illegal.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Eq, PartialOrd, Ord, PartialEq, Default, Debug, Hash)]
pub struct ChessMove {
    source: Position,
    dest: Position,
}

impl ChessMove {
    /// Create a new chess move, given a source `Position` and a destination `Position`.
    #[inline]
    pub fn new(source: Position, dest: Position) -> ChessMove {
        ChessMove { source, dest }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Position {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Position {
        self.dest
    }
}

/// Parse one square: either algebraic (`e2`) or a 1-indexed `row,col` pair (`2,5`).
fn parse_square(token: &str) -> Result<Position, Error> {
    let token = token.trim();
    if !token.contains(',') {
        return token.parse();
    }

    let parts: Vec<&str> = token.split(',').collect();
    if parts.len() != 2 {
        return Err(Error::InvalidMoveFormat {
            input: token.to_owned(),
        });
    }
    let row = parse_number(parts[0])?;
    let col = parse_number(parts[1])?;
    Ok(Position::new(row.saturating_sub(1), col.saturating_sub(1)))
}

/// Any integer is accepted.  Values outside `i8` are clamped, which keeps them off the board.
fn parse_number(token: &str) -> Result<i8, Error> {
    let n: i64 = token.trim().parse().map_err(|_| Error::InvalidNumber {
        token: token.to_owned(),
    })?;
    Ok(n.max(i8::MIN as i64).min(i8::MAX as i64) as i8)
}

impl FromStr for ChessMove {
    type Err = Error;

    /// Read a move in any of the forms a player may type:
    ///
    /// * `e2 to e4` (either side may also be a `row,col` pair)
    /// * `2,5 4,5`, 1-indexed row then column
    /// * `e2,e4`
    /// * `e2 e4`
    ///
    /// ```
    /// use capture_chess::{ChessMove, Position};
    ///
    /// let e2e4 = ChessMove::new(Position::new(1, 4), Position::new(3, 4));
    /// assert_eq!("e2 to e4".parse::<ChessMove>().unwrap(), e2e4);
    /// assert_eq!("2,5 4,5".parse::<ChessMove>().unwrap(), e2e4);
    /// assert_eq!("e2,e4".parse::<ChessMove>().unwrap(), e2e4);
    /// assert!("invalid_input".parse::<ChessMove>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let bad_format = || Error::InvalidMoveFormat {
            input: input.to_owned(),
        };

        let (source, dest) = if input.contains("to") {
            let parts: Vec<&str> = input.split("to").collect();
            if parts.len() != 2 {
                return Err(bad_format());
            }
            (parse_square(parts[0])?, parse_square(parts[1])?)
        } else {
            let tokens: Vec<&str> = input.split_whitespace().collect();
            let numeric = tokens.iter().filter(|t| t.contains(',')).count();
            if tokens.len() == 2 && numeric != 1 {
                (parse_square(tokens[0])?, parse_square(tokens[1])?)
            } else {
                let parts: Vec<&str> = input.split(',').collect();
                if parts.len() != 2 {
                    return Err(bad_format());
                }
                (parts[0].trim().parse()?, parts[1].trim().parse()?)
            }
        };

        Ok(ChessMove::new(source, dest))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {}", self.source, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (i8, i8), to: (i8, i8)) -> ChessMove {
        ChessMove::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
    }

    #[test]
    fn invalid_moves() {
        assert!("invalid_input".parse::<ChessMove>().is_err());
        assert!("".parse::<ChessMove>().is_err());
        assert!("e2".parse::<ChessMove>().is_err());
        assert!("e2 e4 e5".parse::<ChessMove>().is_err());
        assert!("e2,e4,e5".parse::<ChessMove>().is_err());
        assert!("e2 to e4 to e5".parse::<ChessMove>().is_err());
        assert!("i2 to e4".parse::<ChessMove>().is_err());
        assert!("e9,e4".parse::<ChessMove>().is_err());
        assert!("e22 e4".parse::<ChessMove>().is_err());
    }

    #[test]
    fn invalid_numbers() {
        match "x,5 4,5".parse::<ChessMove>() {
            Err(Error::InvalidNumber { token }) => assert_eq!(token, "x"),
            other => panic!("unexpected {:?}", other),
        }
        assert!("2,5,1 4,5".parse::<ChessMove>().is_err());
    }

    #[test]
    fn algebraic_moves() {
        assert_eq!("e2 to e4".parse::<ChessMove>().unwrap(), mv((1, 4), (3, 4)));
        assert_eq!("e2to e4".parse::<ChessMove>().unwrap(), mv((1, 4), (3, 4)));
        assert_eq!("  g1,f3 ".parse::<ChessMove>().unwrap(), mv((0, 6), (2, 5)));
        assert_eq!("g1, f3".parse::<ChessMove>().unwrap(), mv((0, 6), (2, 5)));
        assert_eq!("a2 a4".parse::<ChessMove>().unwrap(), mv((1, 0), (3, 0)));
        assert_eq!("H7 to H5".parse::<ChessMove>().unwrap(), mv((6, 7), (4, 7)));
    }

    #[test]
    fn numeric_moves() {
        assert_eq!("2,1 4,1".parse::<ChessMove>().unwrap(), mv((1, 0), (3, 0)));
        assert_eq!("2,1 to 4,1".parse::<ChessMove>().unwrap(), mv((1, 0), (3, 0)));
        assert_eq!("1,5 to e2".parse::<ChessMove>().unwrap(), mv((0, 4), (1, 4)));
        // Coordinates are not range checked here; the board treats them as empty squares.
        assert_eq!("0,0 9,9".parse::<ChessMove>().unwrap(), mv((-1, -1), (8, 8)));
    }

    #[test]
    fn large_numbers_stay_off_the_board() {
        let m = "200,1 3,3".parse::<ChessMove>().unwrap();
        assert_eq!(m.get_source().row(), i8::MAX);
        assert!(!m.get_source().is_valid());
        let m = "-500,1 3,3".parse::<ChessMove>().unwrap();
        assert_eq!(m.get_source().row(), i8::MIN);
        assert!(!m.get_source().is_valid());
        match "99999999999999999999,1 3,3".parse::<ChessMove>() {
            Err(Error::InvalidNumber { token }) => assert_eq!(token, "99999999999999999999"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn every_square_parses_back() {
        for source in Position::all() {
            let dest = Position::new(7 - source.row(), source.col());
            let text = ChessMove::new(source, dest).to_string();
            assert_eq!(text.parse::<ChessMove>().unwrap(), ChessMove::new(source, dest));
        }
    }
}
