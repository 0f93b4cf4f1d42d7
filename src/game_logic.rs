use crate::board::{Board, Color, Piece, Position};
use crate::rules::Rules;

/// The piece picked up by the previous click, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected { piece: Piece, origin: Position },
}

/// What a single click did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing selectable was clicked while idle.
    Ignored,
    /// A piece of the side to move was picked up.
    Selected(Position),
    /// The selected piece moved; `captured` is whatever stood on `to`.
    Moved {
        from: Position,
        to: Position,
        captured: Option<Piece>,
    },
    /// The selected piece could not move there; the selection is dropped.
    Rejected { from: Position, to: Position },
}

/// Board, side to move and current selection for one game.
///
/// Clicks are the only way to change the board: [`GameState::click`]
/// selects a piece of the side to move, and the next click attempts to move
/// it. Both an accepted and a rejected attempt return to [`Selection::Idle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    selection: Selection,
    rules: Rules,
}

impl GameState {
    #[inline]
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Standard starting position, White to move, under the given rules.
    pub fn with_rules(rules: Rules) -> Self {
        Self::from_board(Board::standard(), Color::White, rules)
    }

    /// Starts a game from an arbitrary arrangement.
    pub fn from_board(board: Board, turn: Color, rules: Rules) -> Self {
        Self {
            board,
            turn,
            selection: Selection::Idle,
            rules,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[inline]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Switches rule sets. Takes effect from the next move attempt.
    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    /// Whether the piece on `from` may move to `to` under the current rules.
    #[inline]
    pub fn is_legal(&self, from: Position, to: Position) -> bool {
        self.rules.decide(&self.board, from, to)
    }

    /// Process a click on `pos`.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        match std::mem::take(&mut self.selection) {
            Selection::Idle => self.select(pos),
            Selection::Selected { piece, origin } => self.attempt(piece, origin, pos),
        }
    }

    fn select(&mut self, pos: Position) -> ClickOutcome {
        match self.board.piece_at(pos) {
            Some(piece) if piece.color == self.turn => {
                log::debug!("{} selects {:?} on {pos}", self.turn, piece.kind);
                self.selection = Selection::Selected { piece, origin: pos };
                ClickOutcome::Selected(pos)
            }
            other => {
                log::debug!("click on {pos} ignored ({other:?})");
                ClickOutcome::Ignored
            }
        }
    }

    fn attempt(&mut self, piece: Piece, from: Position, to: Position) -> ClickOutcome {
        if !self.is_legal(from, to) {
            log::debug!("rejected {:?} {from} -> {to}", piece.kind);
            return ClickOutcome::Rejected { from, to };
        }

        // Clear first so a zero-distance move leaves the piece in place.
        self.board.clear(from);
        let captured = self.board.place(to, piece);
        self.turn = self.turn.other();

        log::info!(
            "{} {:?} {from} -> {to}{}, {} to move",
            piece.color,
            piece.kind,
            captured
                .map(|c| format!(" takes {} {:?}", c.color, c.kind))
                .unwrap_or_default(),
            self.turn
        );
        ClickOutcome::Moved { from, to, captured }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
