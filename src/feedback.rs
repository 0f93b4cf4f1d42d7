use crate::board::Position;
use crate::game_logic::{GameState, Selection};

/// Type of visual feedback for an individual cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// The selected piece may move to this empty cell
    Destination,
    /// The selected piece may move here, removing the occupant
    Capture,
    /// Cell of the selected piece
    Origin,
}

/// Cells to highlight for the current selection.
///
/// `BoardFeedback` is computed by [`compute_feedback`] and consumed by a
/// [`BoardDisplay`](crate::BoardDisplay) to show where the selected piece
/// can go.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Position, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    #[inline]
    pub fn squares(&self) -> &[(Position, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific cell, if any
    #[inline]
    pub fn get(&self, pos: Position) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(p, _)| *p == pos)
            .map(|(_, feedback)| *feedback)
    }

    /// Set feedback for a cell, replacing any previous entry
    pub fn set(&mut self, pos: Position, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(p, _)| *p == pos) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((pos, feedback)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Position, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Position, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// Compute highlights for the current selection.
///
/// Idle games get no feedback. A selected piece marks its origin and every
/// cell the rules accept as its destination. Under the classic rules the
/// origin itself may be a legal destination; it is still shown as origin.
pub fn compute_feedback(game: &GameState) -> BoardFeedback {
    let Selection::Selected { origin, .. } = game.selection() else {
        return BoardFeedback::new();
    };

    std::iter::once((origin, SquareFeedback::Origin))
        .chain(
            Position::all()
                .filter(|&to| to != origin && game.is_legal(origin, to))
                .map(|to| classify(game, to)),
        )
        .collect::<Vec<_>>()
        .into()
}

fn classify(game: &GameState, to: Position) -> (Position, SquareFeedback) {
    if game.board().is_empty(to) {
        (to, SquareFeedback::Destination)
    } else {
        (to, SquareFeedback::Capture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color, Piece, PieceKind};
    use crate::rules::Rules;

    fn pos(name: &str) -> Position {
        name.parse().expect("valid square name")
    }

    #[test]
    fn test_no_feedback_when_idle() {
        let game = GameState::new();

        let feedback = compute_feedback(&game);
        assert_eq!(feedback.squares().len(), 0);
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_show_destinations_when_piece_selected() {
        let mut game = GameState::new();
        game.click(pos("e2"));

        let feedback = compute_feedback(&game);

        assert_eq!(feedback.get(pos("e2")), Some(SquareFeedback::Origin));
        assert_eq!(feedback.get(pos("e3")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(pos("e4")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(pos("d2")), None);
        assert_eq!(feedback.squares().len(), 3);
    }

    #[test]
    fn test_knight_destinations_from_start() {
        let mut game = GameState::with_rules(Rules::strict());
        game.click(pos("g1"));

        let feedback = compute_feedback(&game);

        assert_eq!(feedback.get(pos("f3")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(pos("h3")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(pos("e2")), None);
        assert_eq!(feedback.squares().len(), 3);
    }

    #[test]
    fn test_classic_rules_mark_friendly_cells_as_capture() {
        let mut game = GameState::new();
        game.click(pos("g1"));

        let feedback = compute_feedback(&game);

        assert_eq!(feedback.get(pos("e2")), Some(SquareFeedback::Capture));
    }

    #[test]
    fn test_distinguish_captures() {
        let board = Board::empty()
            .with(pos("e4"), Piece::new(Color::White, PieceKind::Pawn))
            .with(pos("d5"), Piece::new(Color::Black, PieceKind::Pawn));
        let mut game = GameState::from_board(board, Color::White, Rules::classic());
        game.click(pos("e4"));

        let feedback = compute_feedback(&game);

        assert_eq!(feedback.get(pos("e4")), Some(SquareFeedback::Origin));
        assert_eq!(feedback.get(pos("e5")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(pos("d5")), Some(SquareFeedback::Capture));
        assert_eq!(feedback.squares().len(), 3);
    }

    #[test]
    fn test_set_replaces_existing_entry() {
        let mut feedback = BoardFeedback::new();
        feedback.set(pos("a1"), SquareFeedback::Destination);
        feedback.set(pos("a1"), SquareFeedback::Capture);

        assert_eq!(feedback.squares().len(), 1);
        assert_eq!(feedback.get(pos("a1")), Some(SquareFeedback::Capture));
    }
}
