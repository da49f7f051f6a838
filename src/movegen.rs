use crate::board::Board;
use crate::color::Color;
use crate::position::Position;
use arrayvec::ArrayVec;
use std::iter::FusedIterator;

/// The most candidate moves any piece can have: a queen in the middle of an empty board.
pub const MAX_CANDIDATES: usize = 27;

type MoveList = ArrayVec<Position, MAX_CANDIDATES>;

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The destinations a single piece may move to, in a fixed order.
///
/// This is an iterator that is consumed as you go.  Call `Piece::candidate_moves` again if you
/// need the list a second time.
///
/// ```
/// use capture_chess::{Board, Color, Piece, Position};
///
/// let board = Board::new();
/// let rook = Piece::Rook(Color::Black);
/// assert_eq!(rook.candidate_moves(Position::new(3, 3), &board).len(), 14);
/// ```
pub struct CandidateMoves {
    moves: arrayvec::IntoIter<Position, MAX_CANDIDATES>,
}

impl CandidateMoves {
    fn new(moves: MoveList) -> CandidateMoves {
        CandidateMoves {
            moves: moves.into_iter(),
        }
    }
}

impl Iterator for CandidateMoves {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        self.moves.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.moves.size_hint()
    }
}

impl ExactSizeIterator for CandidateMoves {}

impl FusedIterator for CandidateMoves {}

/// Can a piece of `color` land on `dest`?  It must be on the board and not hold a friend.
#[inline]
fn open_to(dest: Position, color: Color, board: &Board) -> bool {
    if !board.is_within_bounds(dest.row(), dest.col()) {
        return false;
    }
    match board.get_piece(dest) {
        None => true,
        Some(target) => target.color() != color,
    }
}

fn steps(at: Position, color: Color, board: &Board, deltas: &[(i8, i8)]) -> CandidateMoves {
    let mut moves = MoveList::new();
    for &(dr, dc) in deltas {
        let dest = at.offset(dr, dc);
        if open_to(dest, color, board) {
            moves.push(dest);
        }
    }
    CandidateMoves::new(moves)
}

// Each ray ends at the edge, or at the first occupied square.  That square is included only if
// it holds an enemy.
fn rays(at: Position, color: Color, board: &Board, directions: &[(i8, i8)]) -> CandidateMoves {
    let mut moves = MoveList::new();
    for &(dr, dc) in directions {
        let mut dest = at;
        loop {
            dest = dest.offset(dr, dc);
            if !board.is_within_bounds(dest.row(), dest.col()) {
                break;
            }
            match board.get_piece(dest) {
                None => moves.push(dest),
                Some(target) => {
                    if target.color() != color {
                        moves.push(dest);
                    }
                    break;
                }
            }
        }
    }
    CandidateMoves::new(moves)
}

/// One step in any of the eight directions.
pub fn king_moves(at: Position, color: Color, board: &Board) -> CandidateMoves {
    steps(at, color, board, &KING_STEPS)
}

/// Rays in all eight directions, in the same order as the king steps.
pub fn queen_moves(at: Position, color: Color, board: &Board) -> CandidateMoves {
    rays(at, color, board, &KING_STEPS)
}

pub fn rook_moves(at: Position, color: Color, board: &Board) -> CandidateMoves {
    rays(at, color, board, &ROOK_RAYS)
}

pub fn bishop_moves(at: Position, color: Color, board: &Board) -> CandidateMoves {
    rays(at, color, board, &BISHOP_RAYS)
}

/// Knights hop, so nothing in between matters.
pub fn knight_moves(at: Position, color: Color, board: &Board) -> CandidateMoves {
    steps(at, color, board, &KNIGHT_JUMPS)
}

/// Pawn pushes and plain diagonal captures.
///
/// The single push needs an empty square.  The double push also needs the pawn to be on its
/// starting row, and only comes after a legal single push.  Captures are checked on the row in
/// front of the pawn, never beside it, and need an enemy piece on the target.
pub fn pawn_moves(at: Position, color: Color, board: &Board) -> CandidateMoves {
    let mut moves = MoveList::new();
    let forward = at.offset(color.pawn_direction(), 0);

    if board.is_within_bounds(forward.row(), forward.col()) && board.get_piece(forward).is_none()
    {
        moves.push(forward);
        if at.row() == color.pawn_row() {
            let double = forward.offset(color.pawn_direction(), 0);
            if board.get_piece(double).is_none() {
                moves.push(double);
            }
        }
    }

    for &dc in [-1, 1].iter() {
        let dest = forward.offset(0, dc);
        if board.is_within_bounds(dest.row(), dest.col()) {
            match board.get_piece(dest) {
                Some(target) if target.color() != color => moves.push(dest),
                _ => {}
            }
        }
    }

    CandidateMoves::new(moves)
}
