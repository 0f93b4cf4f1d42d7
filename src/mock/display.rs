use std::io::{self, Write};

use crate::BoardDisplay;
use crate::board::{Position, SIZE};
use crate::feedback::{BoardFeedback, SquareFeedback};
use crate::game_logic::GameState;
use crate::render::{Shade, sprite_key};

/// Terminal-based board display for development and testing.
///
/// Renders the board as an 8×8 grid of sprite codes on ANSI backgrounds,
/// with selection feedback painted over the cell shade.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, game: &GameState, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        render_game(&mut io::stdout(), game, feedback)
    }
}

/// Render the game to any writer. Extracted for testability.
pub(crate) fn render_game(
    w: &mut impl Write,
    game: &GameState,
    feedback: &BoardFeedback,
) -> Result<(), DisplayError> {
    for pos in Position::all() {
        if pos.col() == 0 {
            write!(w, " {} ", SIZE - pos.row())?;
        }
        let label = game
            .board()
            .piece_at(pos)
            .map(sprite_key)
            .unwrap_or_else(|| "  ".to_string());
        write!(w, "{} {label} \x1b[0m", background(pos, feedback.get(pos)))?;
        if pos.col() == SIZE - 1 {
            writeln!(w)?;
        }
    }
    writeln!(w, "     a   b   c   d   e   f   g   h")?;
    writeln!(w, "{} to move", game.turn())?;
    w.flush()?;
    Ok(())
}

/// ANSI background for a cell; feedback wins over the checker shade.
fn background(pos: Position, feedback: Option<SquareFeedback>) -> &'static str {
    match feedback {
        Some(SquareFeedback::Destination) => "\x1b[44m",
        Some(SquareFeedback::Capture) => "\x1b[41m",
        Some(SquareFeedback::Origin) => "\x1b[43m",
        None => match Shade::of(pos) {
            Shade::Dark => "\x1b[42m",
            Shade::Light => "\x1b[47m",
        },
    }
}
