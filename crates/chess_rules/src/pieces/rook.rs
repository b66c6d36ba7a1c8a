use super::{ORTHOGONALS, rays, slide};
use crate::board::Board;
use crate::error::MoveError;
use crate::types::*;

pub(crate) fn attempt(
    board: &mut Board,
    id: PieceId,
    target: Square,
    dry_run: bool,
) -> Result<MoveOutcome, MoveError> {
    slide(board, id, target, dry_run, PieceKind::Rook, &ORTHOGONALS)
}

pub(crate) fn targets(piece: &Piece) -> Vec<Square> {
    rays(piece.square, &ORTHOGONALS)
}
