use std::fmt;
use std::str::FromStr;

use shakmaty::{File, Rank, Square};
use thiserror::Error;

/// Number of rows and columns on the board.
pub const SIZE: usize = 8;

/// Raw coordinates that do not address a cell of the 8×8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell ({row}, {col}) is out of bounds")]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Single-letter tag used for sprite names (`w` or `b`).
    #[inline]
    pub const fn char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Row of this color's pawns in the initial arrangement.
    #[inline]
    pub const fn pawn_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row delta of a pawn step. White moves up the screen, Black down.
    #[inline]
    pub const fn forward(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Lower-case initial. Knight is `n` so it does not clash with king.
    #[inline]
    pub const fn char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A cell of the board. Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, rejecting coordinates outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self, OutOfBounds> {
        if row < SIZE && col < SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(OutOfBounds { row, col })
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The cell `(drow, dcol)` away, if it is still on the board.
    pub fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(drow)?;
        let col = self.col().checked_add_signed(dcol)?;
        Self::new(row, col).ok()
    }

    /// All 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE).flat_map(|row| {
            (0..SIZE).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl From<Position> for Square {
    fn from(pos: Position) -> Self {
        Square::from_coords(
            File::new(pos.col as u32),
            Rank::new((SIZE - 1 - pos.row()) as u32),
        )
    }
}

impl From<Square> for Position {
    fn from(sq: Square) -> Self {
        Position {
            row: (SIZE - 1) as u8 - sq.rank() as u8,
            col: sq.file() as u8,
        }
    }
}

/// Algebraic name of the cell, e.g. `e2` for row 6, column 4.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Square::from(*self))
    }
}

impl FromStr for Position {
    type Err = shakmaty::ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Square>().map(Position::from)
    }
}

const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Fixed 8×8 grid of cells, each empty or holding one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// The standard starting arrangement.
    pub fn standard() -> Self {
        let mut cells = [[None; SIZE]; SIZE];
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            cells[0][col] = Some(Piece::new(Color::Black, kind));
            cells[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            cells[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            cells[7][col] = Some(Piece::new(Color::White, kind));
        }
        Self { cells }
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row()][pos.col()]
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Puts `piece` on `pos`, returning whatever was there before.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        self.cells[pos.row()][pos.col()].replace(piece)
    }

    /// Empties `pos`, returning its previous occupant.
    pub fn clear(&mut self, pos: Position) -> Option<Piece> {
        self.cells[pos.row()][pos.col()].take()
    }

    /// Builder-style [`Board::place`] for setting up positions.
    #[must_use]
    pub fn with(mut self, pos: Position, piece: Piece) -> Self {
        self.place(pos, piece);
        self
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
