use super::{admit, bad_geometry, commit, landing, steps};
use crate::board::Board;
use crate::error::MoveError;
use crate::types::*;

const JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// Fixed L-shaped jumps; pieces in between never block.
pub(crate) fn attempt(
    board: &mut Board,
    id: PieceId,
    target: Square,
    dry_run: bool,
) -> Result<MoveOutcome, MoveError> {
    let knight = admit(board, id, PieceKind::Knight, target, dry_run)?;
    let (df, dr) = knight.square.delta(target);
    if !matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)) {
        return Err(bad_geometry(&knight, target));
    }
    let outcome = landing(board, &knight, target)?;
    if !dry_run {
        commit(board, id, target, outcome);
    }
    Ok(outcome)
}

pub(crate) fn targets(piece: &Piece) -> Vec<Square> {
    steps(piece.square, &JUMPS)
}
