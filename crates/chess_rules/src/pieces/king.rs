//! King steps and castling.

use super::{ALL_DIRECTIONS, admit, bad_geometry, commit, landing, steps};
use crate::board::Board;
use crate::check;
use crate::error::{CastlingError, MoveError};
use crate::types::*;

pub(crate) fn attempt(
    board: &mut Board,
    id: PieceId,
    target: Square,
    dry_run: bool,
) -> Result<MoveOutcome, MoveError> {
    let king = admit(board, id, PieceKind::King, target, dry_run)?;
    let (df, dr) = king.square.delta(target);

    if dr == 0 && df.abs() == 2 {
        return castle(board, id, &king, target, dry_run);
    }
    if df.abs() > 1 || dr.abs() > 1 {
        return Err(bad_geometry(&king, target));
    }
    let outcome = landing(board, &king, target)?;
    if !dry_run {
        commit(board, id, target, outcome);
    }
    Ok(outcome)
}

/// Two squares towards a corner rook. Neither piece may have moved, the
/// squares between them must be empty, and the king may not start in, pass
/// through or land on an attacked square.
fn castle(
    board: &mut Board,
    id: PieceId,
    king: &Piece,
    target: Square,
    dry_run: bool,
) -> Result<MoveOutcome, MoveError> {
    // Checked first: an occupied target is how attack probes onto a king
    // square bail out before the attack tests below.
    if board.piece_id_at(target).is_some() {
        return Err(CastlingError::PathBlocked(target).into());
    }
    if king.has_moved {
        return Err(CastlingError::KingMoved.into());
    }

    let toward = king.square.delta(target).0.signum();
    let corner_column = if toward > 0 { 'H' } else { 'A' };
    let rook = Square::at(corner_column, king.square.row())
        .and_then(|corner| board.piece_id_at(corner))
        .filter(|&rook| {
            let piece = board.piece(rook);
            piece.kind == PieceKind::Rook && piece.color == king.color
        })
        .ok_or(CastlingError::NoRook)?;
    let rook_piece = *board.piece(rook);
    if rook_piece.has_moved {
        return Err(CastlingError::RookMoved.into());
    }
    if let Some(blocker) = king
        .square
        .between(rook_piece.square)
        .into_iter()
        .find(|&sq| board.piece_id_at(sq).is_some())
    {
        return Err(CastlingError::PathBlocked(blocker).into());
    }

    if check::in_check(board, king.color) {
        return Err(CastlingError::InCheck.into());
    }
    for sq in king.square.between(target).into_iter().chain([target]) {
        if check::attacked_with_king_on(board, id, sq) {
            return Err(CastlingError::PassesThroughAttack(sq).into());
        }
    }

    if !dry_run {
        let rook_target = king
            .square
            .offset(toward, 0)
            .expect("castling king stays on its row");
        board.place(id, target);
        board.place(rook, rook_target);
        board.mark_moved(id);
        board.mark_moved(rook);
        board.record_last_move(id, Move::new(king.square, target));
    }
    Ok(MoveOutcome::Castle { rook })
}

pub(crate) fn targets(piece: &Piece) -> Vec<Square> {
    let mut out = steps(piece.square, &ALL_DIRECTIONS);
    if !piece.has_moved {
        out.extend(steps(piece.square, &[(2, 0), (-2, 0)]));
    }
    out
}

#[cfg(test)]
#[path = "king_tests.rs"]
mod king_tests;
