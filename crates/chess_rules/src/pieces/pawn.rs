//! Pawn pushes, captures, en passant and promotion.
//!
//! Promotion is not a choice: a pawn reaching the far row becomes a queen as
//! part of the commit.

use super::{admit, bad_geometry, commit, landing};
use crate::board::Board;
use crate::error::{EnPassantError, IllegalMove, MoveError};
use crate::types::*;

pub(crate) fn attempt(
    board: &mut Board,
    id: PieceId,
    target: Square,
    dry_run: bool,
) -> Result<MoveOutcome, MoveError> {
    let pawn = admit(board, id, PieceKind::Pawn, target, dry_run)?;
    let forward = pawn.color.forward();
    let (df, dr) = pawn.square.delta(target);

    let outcome = match (df, dr) {
        (0, dr) if dr == forward => {
            if board.piece_id_at(target).is_some() {
                return Err(IllegalMove::Blocked(target).into());
            }
            MoveOutcome::GoTo
        }
        (0, dr) if dr == 2 * forward && !pawn.has_moved => {
            for sq in pawn.square.between(target).into_iter().chain([target]) {
                if board.piece_id_at(sq).is_some() {
                    return Err(IllegalMove::Blocked(sq).into());
                }
            }
            MoveOutcome::GoTo
        }
        (-1 | 1, dr) if dr == forward => match board.piece_id_at(target) {
            Some(_) => landing(board, &pawn, target)?,
            None => MoveOutcome::EnPassant(en_passant_victim(board, &pawn, target)?),
        },
        _ => return Err(bad_geometry(&pawn, target)),
    };

    if !dry_run {
        commit(board, id, target, outcome);
        if target.row() == pawn.color.promotion_row() {
            board.promote(id, PieceKind::Queen);
        }
    }
    Ok(outcome)
}

/// The enemy pawn `pawn` would take by moving diagonally onto the empty
/// square `target`.
///
/// Allowed only straight after that enemy pawn's double step: the capturer
/// stands on its fifth rank and the victim sits beside it on the target's
/// column.
pub(crate) fn en_passant_victim(
    board: &Board,
    pawn: &Piece,
    target: Square,
) -> Result<PieceId, EnPassantError> {
    let fifth_row = pawn.color.pawn_row() as i8 + 3 * pawn.color.forward();
    if pawn.square.row() as i8 != fifth_row {
        return Err(EnPassantError::WrongRank);
    }
    let last = board
        .last_move(pawn.color.other())
        .ok_or(EnPassantError::NoDoubleStep)?;
    let victim = board.piece(last.piece);
    let (step_df, step_dr) = last.mv.from.delta(last.mv.to);
    let double_step = victim.kind == PieceKind::Pawn && step_df == 0 && step_dr.abs() == 2;
    let alongside = victim.in_play
        && victim.square == last.mv.to
        && victim.square.rank() == pawn.square.rank()
        && victim.square.file() == target.file();
    if double_step && alongside {
        Ok(last.piece)
    } else {
        Err(EnPassantError::NoDoubleStep)
    }
}

pub(crate) fn targets(piece: &Piece) -> Vec<Square> {
    let forward = piece.color.forward();
    [(0, forward), (0, 2 * forward), (-1, forward), (1, forward)]
        .into_iter()
        .filter_map(|(df, dr)| piece.square.offset(df, dr))
        .collect()
}

#[cfg(test)]
#[path = "pawn_tests.rs"]
mod pawn_tests;
