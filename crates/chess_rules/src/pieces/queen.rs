//! Queen: the union of bishop and rook movement.

use super::{ALL_DIRECTIONS, rays, slide};
use crate::board::Board;
use crate::error::MoveError;
use crate::types::*;

pub(crate) fn attempt(
    board: &mut Board,
    id: PieceId,
    target: Square,
    dry_run: bool,
) -> Result<MoveOutcome, MoveError> {
    slide(board, id, target, dry_run, PieceKind::Queen, &ALL_DIRECTIONS)
}

pub(crate) fn targets(piece: &Piece) -> Vec<Square> {
    rays(piece.square, &ALL_DIRECTIONS)
}
