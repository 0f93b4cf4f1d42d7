//! Move legality for single candidate moves.
//!
//! Each piece kind has a pure validator deciding geometry and path
//! occupancy. Nothing here considers check: a move is legal when the piece
//! can physically travel from `start` to `end` on the given board.

use crate::board::{Board, Color, Piece, PieceKind, Position};

/// Options for the two behaviors of the classic rules that are usually
/// unintended.
///
/// [`Rules::classic`] (the default) keeps both:
/// - rooks, bishops, knights, queens and kings may land on a friendly piece,
///   which is then discarded;
/// - a zero-distance move (`start == end`) is legal for rooks, bishops,
///   queens and kings.
///
/// [`Rules::strict`] rejects both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub allow_friendly_capture: bool,
    pub allow_null_move: bool,
}

impl Rules {
    pub const fn classic() -> Self {
        Self {
            allow_friendly_capture: true,
            allow_null_move: true,
        }
    }

    pub const fn strict() -> Self {
        Self {
            allow_friendly_capture: false,
            allow_null_move: false,
        }
    }

    /// Whether the piece on `start` may move to `end`.
    ///
    /// An empty `start` is never a legal move.
    pub fn decide(&self, board: &Board, start: Position, end: Position) -> bool {
        let Some(piece) = board.piece_at(start) else {
            return false;
        };

        if !self.allow_null_move && start == end {
            return false;
        }
        if !self.allow_friendly_capture
            && board.piece_at(end).is_some_and(|other| other.color == piece.color)
        {
            return false;
        }

        piece_can_reach(board, piece, start, end)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}

/// Legality under [`Rules::classic`].
#[inline]
pub fn decide(board: &Board, start: Position, end: Position) -> bool {
    Rules::classic().decide(board, start, end)
}

fn piece_can_reach(board: &Board, piece: Piece, start: Position, end: Position) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_move(board, piece.color, start, end),
        PieceKind::Rook => rook_move(board, start, end),
        PieceKind::Knight => knight_move(start, end),
        PieceKind::Bishop => bishop_move(board, start, end),
        PieceKind::Queen => rook_move(board, start, end) || bishop_move(board, start, end),
        PieceKind::King => king_move(start, end),
    }
}

/// Signed `(drow, dcol)` from `start` to `end`.
#[inline]
fn delta(start: Position, end: Position) -> (isize, isize) {
    (
        end.row() as isize - start.row() as isize,
        end.col() as isize - start.col() as isize,
    )
}

pub fn pawn_move(board: &Board, color: Color, start: Position, end: Position) -> bool {
    let direction = color.forward();
    let (drow, dcol) = delta(start, end);

    if dcol == 0 && board.is_empty(end) {
        if drow == direction {
            return true;
        }
        if start.row() == color.pawn_row() && drow == 2 * direction {
            // Double step also needs the skipped cell free.
            return start
                .offset(direction, 0)
                .is_some_and(|skipped| board.is_empty(skipped));
        }
    }

    dcol.abs() == 1
        && drow == direction
        && board.piece_at(end).is_some_and(|other| other.color != color)
}

/// Same row or column, with every cell strictly between the endpoints empty.
pub fn rook_move(board: &Board, start: Position, end: Position) -> bool {
    let (drow, dcol) = delta(start, end);
    if drow != 0 && dcol != 0 {
        return false;
    }
    path_clear(board, start, drow.signum(), dcol.signum(), drow.abs().max(dcol.abs()))
}

/// Strict diagonal, with every cell strictly between the endpoints empty.
pub fn bishop_move(board: &Board, start: Position, end: Position) -> bool {
    let (drow, dcol) = delta(start, end);
    if drow.abs() != dcol.abs() {
        return false;
    }
    path_clear(board, start, drow.signum(), dcol.signum(), drow.abs())
}

pub fn knight_move(start: Position, end: Position) -> bool {
    let (drow, dcol) = delta(start, end);
    matches!((drow.abs(), dcol.abs()), (1, 2) | (2, 1))
}

pub fn king_move(start: Position, end: Position) -> bool {
    let (drow, dcol) = delta(start, end);
    drow.abs() <= 1 && dcol.abs() <= 1
}

/// Walks `distance - 1` intermediate cells from `start` in direction
/// `(step_row, step_col)`. Zero or one steps have nothing in between.
fn path_clear(
    board: &Board,
    start: Position,
    step_row: isize,
    step_col: isize,
    distance: isize,
) -> bool {
    (1..distance).all(|i| {
        start
            .offset(step_row * i, step_col * i)
            .is_some_and(|cell| board.is_empty(cell))
    })
}
