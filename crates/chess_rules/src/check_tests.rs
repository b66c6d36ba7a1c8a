use super::*;
use crate::error::{IllegalMove, MoveError};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

#[test]
fn startpos_is_quiet() {
    let b = Board::startpos();
    for color in [Color::White, Color::Black] {
        assert!(!b.is_in_check(color));
        assert!(!b.is_checkmate(color));
        assert!(!b.is_stalemate(color));
    }
}

#[test]
fn scholars_mate() {
    let b = board("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(b.is_in_check(Color::Black));
    assert_eq!(b.checking_pieces(Color::Black), vec![b.piece_id_at(sq("F7")).unwrap()]);
    assert!(b.is_checkmate(Color::Black));
    assert!(!b.is_stalemate(Color::Black));
    assert!(b.all_legal_moves(Color::Black).is_empty());
}

#[test]
fn stalemate_is_not_mate() {
    let b = board("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(!b.is_in_check(Color::Black));
    assert!(b.is_stalemate(Color::Black));
    assert!(!b.is_checkmate(Color::Black));
}

#[test]
fn mate_is_not_stalemate() {
    let b = board("k7/1Q6/2K5/8/8/8/8/8 b - - 0 1");
    assert!(b.is_in_check(Color::Black));
    assert!(b.is_checkmate(Color::Black));
    assert!(!b.is_stalemate(Color::Black));
}

#[test]
fn king_escape_search() {
    let mut mated = board("4k3/8/8/8/8/8/5PPP/4r1K1 w - - 0 1");
    let king = mated.king(Color::White);
    assert_eq!(king_escape(&mut mated, king), Err(MoveError::NoLegalMoves));

    // With the g-pawn advanced the king steps up to g2.
    let mut open = board("4k3/8/8/8/8/6P1/5P1P/4r1K1 w - - 0 1");
    let king = open.king(Color::White);
    assert_eq!(king_escape(&mut open, king), Ok(sq("G2")));
}

#[test]
fn back_rank_mate_and_its_refutations() {
    let mated = board("4k3/8/8/8/8/8/5PPP/4r1K1 w - - 0 1");
    assert!(mated.is_checkmate(Color::White));

    // A knight can take the lone checker.
    let capture = board("4k3/8/8/8/8/3N4/5PPP/4r1K1 w - - 0 1");
    assert!(capture.is_in_check(Color::White));
    assert!(!capture.is_checkmate(Color::White));
    let moves = capture.all_legal_moves(Color::White);
    assert_eq!(moves.len(), 1);
    assert!(moves.contains_key(&Move::new(sq("D3"), sq("E1"))));

    // A bishop can block the rank.
    let block = board("4k3/8/8/8/8/8/4BPPP/r5K1 w - - 0 1");
    assert!(!block.is_checkmate(Color::White));
    let mut blocks: Vec<Move> = block.all_legal_moves(Color::White).into_keys().collect();
    blocks.sort();
    assert_eq!(
        blocks,
        vec![Move::new(sq("E2"), sq("D1")), Move::new(sq("E2"), sq("F1"))]
    );
}

#[test]
fn double_check_lists_both_checkers() {
    let b = board("4k3/8/8/8/8/5n2/8/r3K3 w - - 0 1");
    let checkers = b.checking_pieces(Color::White);
    assert_eq!(checkers.len(), 2);
    assert!(!b.is_checkmate(Color::White));
    // Only king moves answer a double check.
    let moves = b.all_legal_moves(Color::White);
    assert!(!moves.is_empty());
    assert!(moves.keys().all(|mv| mv.from == sq("E1")));
}

#[test]
fn double_check_cannot_be_blocked() {
    // Rook down the e-file and bishop along h4-e1. The white rook could
    // block either line but not both, and the king is boxed in.
    let b = board("k3r3/6R1/8/8/7b/8/3P4/3QKB2 w - - 0 1");
    assert_eq!(b.checking_pieces(Color::White).len(), 2);
    assert!(b.is_checkmate(Color::White));
}

#[test]
fn pinned_piece_may_not_expose_the_king() {
    let mut b = board("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    let bishop = b.piece_id_at(sq("E2")).unwrap();
    let king = b.piece_id_at(sq("E1")).unwrap();
    assert!(!b.move_is_legal(bishop, sq("D3")));
    assert!(b.move_is_legal(king, sq("D1")));
    assert!(b.legal_moves_of(bishop).is_empty());

    let before = b.clone();
    let err = b.attempt_move(bishop, sq("D3"), false).unwrap_err();
    assert_eq!(err, MoveError::Illegal(IllegalMove::LeavesKingInCheck));
    assert_eq!(b, before);
    assert!(!b.is_in_check(Color::White));
}

#[test]
fn capturing_the_attacker_is_legal() {
    let b = board("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1");
    let king = b.piece_id_at(sq("E1")).unwrap();
    assert!(b.is_in_check(Color::White));
    assert!(b.move_is_legal(king, sq("D2")));
    assert!(!b.is_checkmate(Color::White));
}

#[test]
fn en_passant_that_uncovers_the_king_is_illegal() {
    // Both pawns leave the fifth rank, opening the rook onto the king.
    let b = board("8/8/8/K2Pp2r/8/8/8/7k w - e6 0 1");
    let pawn = b.piece_id_at(sq("D5")).unwrap();
    assert!(!b.move_is_legal(pawn, sq("E6")));
    assert!(!b.legal_moves_of(pawn).contains_key(&Move::new(sq("D5"), sq("E6"))));
}

#[test]
fn en_passant_can_remove_a_checking_pawn() {
    // Black just played d7-d5 with check; exd6 e.p. is the only capture.
    let b = board("8/8/8/3pP3/4K3/8/8/7k w - d6 0 1");
    assert!(b.is_in_check(Color::White));
    let pawn = b.piece_id_at(sq("E5")).unwrap();
    let victim = b.piece_id_at(sq("D5")).unwrap();
    let moves = b.legal_moves_of(pawn);
    assert_eq!(
        moves.get(&Move::new(sq("E5"), sq("D6"))),
        Some(&MoveOutcome::EnPassant(victim))
    );
    assert!(!b.is_checkmate(Color::White));
}
