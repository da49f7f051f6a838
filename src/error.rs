use failure::Fail;
use std::io;

/// Sometimes, bad stuff happens.
#[derive(Debug, Fail)]
pub enum Error {
    /// The move text did not split into a source and a destination
    #[fail(display = "invalid input format: {:?}", input)]
    InvalidMoveFormat { input: String },

    /// A numeric coordinate could not be read as an integer
    #[fail(display = "invalid number in input: {:?}", token)]
    InvalidNumber { token: String },

    /// An algebraic square must be exactly two characters, like `e4`
    #[fail(display = "invalid algebraic notation: {:?}", square)]
    InvalidSquare { square: String },

    /// The file letter was not one of `a` through `h`
    #[fail(display = "invalid column in algebraic notation: {:?}", file)]
    InvalidFile { file: char },

    /// The rank digit was not one of `1` through `8`
    #[fail(display = "invalid row in algebraic notation: {:?}", rank)]
    InvalidRank { rank: char },

    /// Reading moves or writing the board failed
    #[fail(display = "console I/O failed: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
