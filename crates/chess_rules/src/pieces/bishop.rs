use super::{DIAGONALS, rays, slide};
use crate::board::Board;
use crate::error::MoveError;
use crate::types::*;

pub(crate) fn attempt(
    board: &mut Board,
    id: PieceId,
    target: Square,
    dry_run: bool,
) -> Result<MoveOutcome, MoveError> {
    slide(board, id, target, dry_run, PieceKind::Bishop, &DIAGONALS)
}

pub(crate) fn targets(piece: &Piece) -> Vec<Square> {
    rays(piece.square, &DIAGONALS)
}
