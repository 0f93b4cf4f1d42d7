//! Cross-checks the move rules against shakmaty on quiet positions, where
//! standard chess legality has no check, castling or en passant subtleties.

use std::collections::BTreeSet;

use click_chess::board::{Board, Color, Piece, PieceKind, Position};
use click_chess::rules::{Rules, decide};
use shakmaty::{CastlingMode, Chess, Position as _, Role, Square, fen::Fen};
use test_case::test_case;

fn setup_fen(fen: &str) -> Chess {
    fen.parse::<Fen>()
        .expect("valid FEN")
        .into_position(CastlingMode::Standard)
        .expect("valid position")
}

fn to_board(chess: &Chess) -> Board {
    let mut board = Board::empty();
    for pos in Position::all() {
        if let Some(piece) = chess.board().piece_at(Square::from(pos)) {
            board.place(pos, convert(piece));
        }
    }
    board
}

fn convert(piece: shakmaty::Piece) -> Piece {
    let color = match piece.color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    };
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece::new(color, kind)
}

fn reference_moves(chess: &Chess) -> BTreeSet<(String, String)> {
    chess
        .legal_moves()
        .iter()
        .map(|mv| {
            let from = mv.from().expect("quiet positions only have normal moves");
            (from.to_string(), mv.to().to_string())
        })
        .collect()
}

fn engine_moves(board: &Board, side: Color, rules: Rules) -> BTreeSet<(String, String)> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == side)
        .flat_map(|(from, _)| {
            Position::all()
                .filter(move |&to| rules.decide(board, from, to))
                .map(move |to| (from.to_string(), to.to_string()))
        })
        .collect()
}

#[test_case("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", Color::White; "start")]
#[test_case("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1", Color::Black; "after e4")]
#[test_case("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1", Color::White; "pawn tension")]
#[test_case("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2", Color::Black; "king pawn game")]
fn strict_rules_match_reference(fen: &str, side: Color) {
    let chess = setup_fen(fen);
    let board = to_board(&chess);

    assert_eq!(
        engine_moves(&board, side, Rules::strict()),
        reference_moves(&chess)
    );
}

#[test]
fn classic_rules_accept_every_reference_move() {
    let chess = Chess::default();
    let board = to_board(&chess);
    assert_eq!(board, Board::standard());

    for mv in chess.legal_moves() {
        let from = Position::from(mv.from().expect("normal move"));
        let to = Position::from(mv.to());
        assert!(decide(&board, from, to), "{from} -> {to} should be legal");
    }
}

#[test]
fn classic_rules_add_only_friendly_and_null_moves() {
    let chess = Chess::default();
    let board = to_board(&chess);

    let classic = engine_moves(&board, Color::White, Rules::classic());
    let strict = engine_moves(&board, Color::White, Rules::strict());

    assert!(classic.is_superset(&strict));
    for (from, to) in classic.difference(&strict) {
        let to_pos: Position = to.parse().expect("valid square name");
        let occupant = board.piece_at(to_pos);
        assert!(
            from == to || occupant.is_some_and(|p| p.color == Color::White),
            "{from} -> {to} is neither a null move nor onto a friendly piece"
        );
    }
}
