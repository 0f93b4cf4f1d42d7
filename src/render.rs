//! Everything a pixel front end needs to draw the board and map clicks
//! back onto it.

use thiserror::Error;

use crate::board::{Board, Piece, PieceKind, Position, SIZE};

/// Default board width in pixels.
pub const DEFAULT_WIDTH: u32 = 500;

/// A pixel that does not fall on any cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pixel ({x}, {y}) is outside the board")]
pub struct PixelOutOfBounds {
    pub x: u32,
    pub y: u32,
}

/// Pixel layout of a square board drawn from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    width: u32,
}

impl BoardGeometry {
    pub const fn new(width: u32) -> Self {
        Self { width }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Side of one cell. Integer division, so a few pixels at the right and
    /// bottom edge may belong to no cell.
    #[inline]
    pub const fn square_size(&self) -> u32 {
        self.width / SIZE as u32
    }

    /// The cell under pixel `(x, y)`.
    pub fn cell_at(&self, x: u32, y: u32) -> Result<Position, PixelOutOfBounds> {
        let size = self.square_size();
        if size == 0 {
            return Err(PixelOutOfBounds { x, y });
        }
        Position::new((y / size) as usize, (x / size) as usize)
            .map_err(|_| PixelOutOfBounds { x, y })
    }

    /// Top-left pixel of `pos`.
    pub fn cell_origin(&self, pos: Position) -> (u32, u32) {
        let size = self.square_size();
        (pos.col() as u32 * size, pos.row() as u32 * size)
    }

    /// Centre pixel of `pos`.
    pub fn cell_center(&self, pos: Position) -> (u32, u32) {
        let (x, y) = self.cell_origin(pos);
        let half = self.square_size() / 2;
        (x + half, y + half)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const CREAM: Rgb = Rgb(255, 253, 208);
pub const GREEN: Rgb = Rgb(107, 142, 35);

/// Background of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// Cells with an even `row + col` are dark, the rest light.
    pub const fn of(pos: Position) -> Self {
        if (pos.row() + pos.col()) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }

    pub const fn rgb(self) -> Rgb {
        match self {
            Shade::Light => CREAM,
            Shade::Dark => GREEN,
        }
    }
}

/// Two-letter sprite code: color tag followed by kind initial, e.g. `wn`.
pub fn sprite_key(piece: Piece) -> String {
    [piece.color.char(), piece.kind.char()].iter().collect()
}

/// Asset file name of the sprite. Pawn images are lower-case (`bp.png`),
/// the others carry an upper-case kind letter (`wN.png`).
pub fn sprite_file(piece: Piece) -> String {
    let kind = match piece.kind {
        PieceKind::Pawn => 'p',
        other => other.char().to_ascii_uppercase(),
    };
    format!("{}{kind}.png", piece.color.char())
}

/// One primitive of a board frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Fill {
        x: u32,
        y: u32,
        size: u32,
        color: Rgb,
    },
    Blit {
        x: u32,
        y: u32,
        sprite: String,
    },
}

/// Full frame for `board`: all 64 backgrounds first, then one sprite per
/// occupied cell, both in row-major order.
pub fn draw_list(board: &Board, geometry: &BoardGeometry) -> Vec<DrawCommand> {
    let size = geometry.square_size();
    let fills = Position::all().map(|pos| {
        let (x, y) = geometry.cell_origin(pos);
        DrawCommand::Fill {
            x,
            y,
            size,
            color: Shade::of(pos).rgb(),
        }
    });
    let blits = board.pieces().map(|(pos, piece)| {
        let (x, y) = geometry.cell_origin(pos);
        DrawCommand::Blit {
            x,
            y,
            sprite: sprite_key(piece),
        }
    });
    fills.chain(blits).collect()
}
