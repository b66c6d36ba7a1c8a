use super::*;
use crate::error::IllegalMove;
use crate::pieces::attempt_move;

const CASTLES: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn id_at(board: &Board, s: &str) -> PieceId {
    board.piece_id_at(sq(s)).unwrap()
}

fn castle_err(fen: &str, from: &str, to: &str) -> MoveError {
    let mut board = Board::from_fen(fen).unwrap();
    let king = id_at(&board, from);
    attempt_move(&mut board, king, sq(to), true).unwrap_err()
}

#[test]
fn one_step_any_direction() {
    let mut board = Board::from_fen("4k3/8/8/8/3K4/8/8/8 w - - 0 1").unwrap();
    let king = id_at(&board, "D4");
    for target in ["C3", "C4", "C5", "D3", "D5", "E3", "E4", "E5"] {
        assert_eq!(
            attempt_move(&mut board, king, sq(target), true),
            Ok(MoveOutcome::GoTo),
            "{target}"
        );
    }
    assert_eq!(
        attempt_move(&mut board, king, sq("D6"), true),
        Err(IllegalMove::Geometry {
            kind: PieceKind::King,
            from: sq("D4"),
            to: sq("D6"),
        }
        .into())
    );
}

#[test]
fn cannot_step_into_check() {
    let mut board = Board::from_fen("3rk3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let king = id_at(&board, "E1");
    assert_eq!(
        attempt_move(&mut board, king, sq("D1"), false),
        Err(IllegalMove::LeavesKingInCheck.into())
    );
    assert_eq!(attempt_move(&mut board, king, sq("F1"), false), Ok(MoveOutcome::GoTo));
}

#[test]
fn castles_kingside() {
    let mut board = Board::from_fen(CASTLES).unwrap();
    let king = id_at(&board, "E1");
    let rook = id_at(&board, "H1");
    assert_eq!(
        attempt_move(&mut board, king, sq("G1"), false),
        Ok(MoveOutcome::Castle { rook })
    );
    assert_eq!(board.piece_id_at(sq("G1")), Some(king));
    assert_eq!(board.piece_id_at(sq("F1")), Some(rook));
    assert!(board.piece_at(sq("H1")).is_none());
    assert!(board.piece(king).has_moved && board.piece(rook).has_moved);
    assert_eq!(
        board.last_move(Color::White).map(|last| last.mv),
        Some(Move::new(sq("E1"), sq("G1")))
    );
    board.assert_invariants();
}

#[test]
fn castles_queenside() {
    let mut board = Board::from_fen(CASTLES).unwrap();
    let king = id_at(&board, "E8");
    let rook = id_at(&board, "A8");
    assert_eq!(
        attempt_move(&mut board, king, sq("C8"), false),
        Ok(MoveOutcome::Castle { rook })
    );
    assert_eq!(board.piece_id_at(sq("C8")), Some(king));
    assert_eq!(board.piece_id_at(sq("D8")), Some(rook));
}

#[test]
fn castling_preconditions() {
    assert_eq!(
        castle_err("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", "E1", "G1"),
        CastlingError::RookMoved.into()
    );
    assert_eq!(
        castle_err("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1", "E1", "C1"),
        CastlingError::KingMoved.into()
    );
    assert_eq!(
        castle_err("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", "E1", "C1"),
        CastlingError::PathBlocked(sq("B1")).into()
    );
    assert_eq!(
        castle_err("r3k2r/8/8/8/8/8/8/R3K1NR w KQkq - 0 1", "E1", "G1"),
        IllegalMove::OccupiedByOwnPiece(sq("G1")).into()
    );
    assert_eq!(
        castle_err("r3k2r/8/8/8/8/8/8/R3K1nR w KQkq - 0 1", "E1", "G1"),
        CastlingError::PathBlocked(sq("G1")).into()
    );
    assert_eq!(
        castle_err("4r3/3k4/8/8/8/8/8/R3K2R w KQ - 0 1", "E1", "G1"),
        CastlingError::InCheck.into()
    );
    assert_eq!(
        castle_err("5r2/3k4/8/8/8/8/8/R3K2R w KQ - 0 1", "E1", "G1"),
        CastlingError::PassesThroughAttack(sq("F1")).into()
    );
    assert_eq!(
        castle_err("6r1/3k4/8/8/8/8/8/R3K2R w KQ - 0 1", "E1", "G1"),
        CastlingError::PassesThroughAttack(sq("G1")).into()
    );
}

#[test]
fn attacked_b_file_does_not_stop_queenside() {
    let mut board = Board::from_fen("1r6/3k4/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let king = id_at(&board, "E1");
    let rook = id_at(&board, "A1");
    assert_eq!(
        attempt_move(&mut board, king, sq("C1"), true),
        Ok(MoveOutcome::Castle { rook })
    );
}

#[test]
fn castling_needs_a_rook_in_the_corner() {
    let mut board = Board::from_parts(
        vec![
            Piece::new(PieceKind::King, Color::White, sq("E1")),
            Piece::new(PieceKind::King, Color::Black, sq("E8")),
            Piece::new(PieceKind::Bishop, Color::White, sq("H1")),
        ],
        [None, None],
    );
    let king = id_at(&board, "E1");
    assert_eq!(
        attempt_move(&mut board, king, sq("G1"), true),
        Err(CastlingError::NoRook.into())
    );
    assert_eq!(
        attempt_move(&mut board, king, sq("C1"), true),
        Err(CastlingError::NoRook.into())
    );
}

#[test]
fn targets_include_castles_until_the_king_moves() {
    let mut king = Piece::new(PieceKind::King, Color::White, sq("E1"));
    assert_eq!(targets(&king).len(), 7);
    king.has_moved = true;
    assert_eq!(targets(&king).len(), 5);
}
