//! Check, checkmate and stalemate detection.
//!
//! Everything here works on a scratch board (`&mut Board`) and only mutates it
//! through [`Speculation`] guards, so each function returns with the board as
//! it was given.

use crate::board::Board;
use crate::error::MoveError;
use crate::pieces::{self, pawn};
use crate::speculation::Speculation;
use crate::types::*;

/// Enemy pieces whose dry-run move onto the king of `color` succeeds.
pub(crate) fn checkers(board: &mut Board, color: Color) -> Vec<PieceId> {
    let king_sq = board.piece(board.king(color)).square;
    let enemies: Vec<PieceId> = board.ids_in_play(color.other()).collect();
    enemies
        .into_iter()
        .filter(|&id| pieces::attempt_move(board, id, king_sq, true).is_ok())
        .collect()
}

pub(crate) fn in_check(board: &mut Board, color: Color) -> bool {
    let king_sq = board.piece(board.king(color)).square;
    let enemies: Vec<PieceId> = board.ids_in_play(color.other()).collect();
    enemies
        .into_iter()
        .any(|id| pieces::attempt_move(board, id, king_sq, true).is_ok())
}

/// Self-check oracle: relocate `id` to `target` (capturing any occupant, and
/// the passed pawn when this is an en passant capture), ask whether its own
/// king is attacked, then revert. A square held by a friendly piece is never
/// legal.
pub(crate) fn move_is_legal(board: &mut Board, id: PieceId, target: Square) -> bool {
    let mover = *board.piece(id);
    if board
        .piece_at(target)
        .is_some_and(|other| other.color == mover.color)
    {
        return false;
    }
    let mut spec = Speculation::new(board);
    if mover.kind == PieceKind::Pawn
        && mover.square.file() != target.file()
        && spec.piece_id_at(target).is_none()
    {
        if let Ok(passed) = pawn::en_passant_victim(&spec, &mover, target) {
            spec.capture(passed);
        }
    }
    spec.displace(id, target);
    !in_check(&mut spec, mover.color)
}

pub(crate) fn is_checkmate(board: &mut Board, color: Color) -> bool {
    let attackers = checkers(board, color);
    if attackers.is_empty() {
        return false;
    }
    let king = board.king(color);
    if king_escape(board, king).is_ok() {
        return false;
    }
    // Against a double check only a king move helps.
    if attackers.len() > 1 {
        return true;
    }
    let checker = attackers[0];
    !(could_capture(board, color, checker) || could_interpose(board, color, king, checker))
}

pub(crate) fn is_stalemate(board: &mut Board, color: Color) -> bool {
    !in_check(board, color) && pieces::all_legal_moves(board, color).is_empty()
}

/// First adjacent square the king can step to (capturing if need be) without
/// being attacked there.
fn king_escape(board: &mut Board, king: PieceId) -> Result<Square, MoveError> {
    let from = board.piece(king).square;
    pieces::ALL_DIRECTIONS
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .find(|&sq| {
            pieces::attempt_move(board, king, sq, true).is_ok() && move_is_legal(board, king, sq)
        })
        .ok_or(MoveError::NoLegalMoves)
}

/// A friendly piece can remove the lone checker without exposing its king.
/// En passant counts: for a checking pawn the square behind it is tried too.
fn could_capture(board: &mut Board, color: Color, checker: PieceId) -> bool {
    let checker_piece = *board.piece(checker);
    let mut targets = vec![checker_piece.square];
    if checker_piece.kind == PieceKind::Pawn {
        if let Some(behind) = checker_piece
            .square
            .offset(0, -checker_piece.color.forward())
        {
            targets.push(behind);
        }
    }

    let friends: Vec<PieceId> = board.ids_in_play(color).collect();
    friends.into_iter().any(|id| {
        targets.iter().any(|&target| {
            matches!(
                pieces::attempt_move(board, id, target, true),
                Ok(outcome) if outcome.captured() == Some(checker)
            ) && move_is_legal(board, id, target)
        })
    })
}

/// Some friendly piece (king excluded) can move onto a square strictly
/// between the checker and the king. Contact checks have no such square.
fn could_interpose(board: &mut Board, color: Color, king: PieceId, checker: PieceId) -> bool {
    let king_sq = board.piece(king).square;
    let friends: Vec<PieceId> = board
        .ids_in_play(color)
        .filter(|&id| id != king)
        .collect();

    let line = board.piece(checker).square.between(king_sq);
    line.into_iter().any(|sq| {
        friends.iter().any(|&id| {
            pieces::attempt_move(board, id, sq, true).is_ok() && move_is_legal(board, id, sq)
        })
    })
}

/// Would the king of `king`'s colour be attacked standing on `sq`?
pub(crate) fn attacked_with_king_on(board: &mut Board, king: PieceId, sq: Square) -> bool {
    let color = board.piece(king).color;
    let mut spec = Speculation::new(board);
    spec.displace(king, sq);
    in_check(&mut spec, color)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
