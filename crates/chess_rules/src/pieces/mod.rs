//! Per-kind move validators.
//!
//! Dispatch is a closed `match` on [`PieceKind`]; each kind module owns its
//! geometry, path rules and special cases and exposes `attempt` (validate,
//! optionally commit) and `targets` (every square worth probing).

pub(crate) mod bishop;
pub(crate) mod king;
pub(crate) mod knight;
pub(crate) mod pawn;
pub(crate) mod queen;
pub(crate) mod rook;

use std::collections::HashMap;

use tracing::debug;

use crate::board::Board;
use crate::check;
use crate::error::{IllegalMove, MoveError};
use crate::types::*;

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Validate a move of `id` to `target` and, unless `dry_run`, commit it.
///
/// Real moves consult the self-check oracle first; dry runs skip it, which is
/// what lets the oracle itself probe enemy moves without recursing.
pub fn attempt_move(
    board: &mut Board,
    id: PieceId,
    target: Square,
    dry_run: bool,
) -> Result<MoveOutcome, MoveError> {
    let piece = *board.piece(id);
    let result = match piece.kind {
        PieceKind::Pawn => pawn::attempt(board, id, target, dry_run),
        PieceKind::Knight => knight::attempt(board, id, target, dry_run),
        PieceKind::Bishop => bishop::attempt(board, id, target, dry_run),
        PieceKind::Rook => rook::attempt(board, id, target, dry_run),
        PieceKind::Queen => queen::attempt(board, id, target, dry_run),
        PieceKind::King => king::attempt(board, id, target, dry_run),
    };
    if !dry_run {
        match &result {
            Ok(outcome) => debug!(
                "{} {} {} -> {}: {:?}",
                piece.color, piece.kind, piece.square, target, outcome
            ),
            Err(err) => debug!(
                "{} {} {} -> {} rejected: {}",
                piece.color, piece.kind, piece.square, target, err
            ),
        }
    }
    result
}

/// Every move of `id` that passes its validator and keeps its king safe.
pub fn legal_moves_of(board: &mut Board, id: PieceId) -> HashMap<Move, MoveOutcome> {
    let piece = *board.piece(id);
    let mut moves = HashMap::new();
    if !piece.in_play {
        return moves;
    }
    let targets = match piece.kind {
        PieceKind::Pawn => pawn::targets(&piece),
        PieceKind::Knight => knight::targets(&piece),
        PieceKind::Bishop => bishop::targets(&piece),
        PieceKind::Rook => rook::targets(&piece),
        PieceKind::Queen => queen::targets(&piece),
        PieceKind::King => king::targets(&piece),
    };
    for target in targets {
        if let Ok(outcome) = attempt_move(board, id, target, true) {
            if check::move_is_legal(board, id, target) {
                moves.insert(Move::new(piece.square, target), outcome);
            }
        }
    }
    moves
}

pub fn all_legal_moves(board: &mut Board, color: Color) -> HashMap<Move, MoveOutcome> {
    let ids: Vec<PieceId> = board.ids_in_play(color).collect();
    let mut moves = HashMap::new();
    for id in ids {
        moves.extend(legal_moves_of(board, id));
    }
    moves
}

// ----------------------------------------------------------------------
// Shared validator steps
// ----------------------------------------------------------------------

/// Checks every validator runs before looking at geometry.
fn admit(
    board: &mut Board,
    id: PieceId,
    expected: PieceKind,
    target: Square,
    dry_run: bool,
) -> Result<Piece, MoveError> {
    let piece = *board.piece(id);
    if piece.kind != expected {
        return Err(MoveError::WrongPieceKind {
            expected,
            found: piece.kind,
        });
    }
    if !piece.in_play {
        return Err(MoveError::NotInPlay);
    }
    if piece.square == target {
        return Err(IllegalMove::AlreadyThere.into());
    }
    if board.piece_at(target).is_some_and(|other| other.color == piece.color) {
        return Err(IllegalMove::OccupiedByOwnPiece(target).into());
    }
    if !dry_run && !check::move_is_legal(board, id, target) {
        return Err(IllegalMove::LeavesKingInCheck.into());
    }
    Ok(piece)
}

fn bad_geometry(piece: &Piece, target: Square) -> MoveError {
    IllegalMove::Geometry {
        kind: piece.kind,
        from: piece.square,
        to: target,
    }
    .into()
}

/// Empty target: `GoTo`; enemy: `Take`; own piece: refused.
fn landing(board: &Board, piece: &Piece, target: Square) -> Result<MoveOutcome, MoveError> {
    match board.piece_id_at(target) {
        None => Ok(MoveOutcome::GoTo),
        Some(other) if board.piece(other).is_enemy_of(piece) => Ok(MoveOutcome::Take(other)),
        Some(_) => Err(IllegalMove::OccupiedByOwnPiece(target).into()),
    }
}

/// Every square strictly between `from` and `to` must be empty.
fn ensure_clear(board: &Board, from: Square, to: Square) -> Result<(), MoveError> {
    match from
        .between(to)
        .into_iter()
        .find(|&sq| board.piece_id_at(sq).is_some())
    {
        Some(blocker) => Err(IllegalMove::Blocked(blocker).into()),
        None => Ok(()),
    }
}

/// Apply a validated `GoTo`, `Take` or `EnPassant`.
fn commit(board: &mut Board, id: PieceId, target: Square, outcome: MoveOutcome) {
    if let Some(victim) = outcome.captured() {
        board.take_off(victim);
    }
    let from = board.piece(id).square;
    board.place(id, target);
    board.mark_moved(id);
    board.record_last_move(id, Move::new(from, target));
}

/// Any-length move along one of `directions` with a clear path.
fn slide(
    board: &mut Board,
    id: PieceId,
    target: Square,
    dry_run: bool,
    kind: PieceKind,
    directions: &[(i8, i8)],
) -> Result<MoveOutcome, MoveError> {
    let piece = admit(board, id, kind, target, dry_run)?;
    let (df, dr) = piece.square.delta(target);
    let aligned = df == 0 || dr == 0 || df.abs() == dr.abs();
    if !aligned || !directions.contains(&(df.signum(), dr.signum())) {
        return Err(bad_geometry(&piece, target));
    }
    ensure_clear(board, piece.square, target)?;
    let outcome = landing(board, &piece, target)?;
    if !dry_run {
        commit(board, id, target, outcome);
    }
    Ok(outcome)
}

/// Squares along each direction up to the board edge.
fn rays(from: Square, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut out = Vec::with_capacity(27);
    for &(df, dr) in directions {
        let mut cur = from.offset(df, dr);
        while let Some(sq) = cur {
            out.push(sq);
            cur = sq.offset(df, dr);
        }
    }
    out
}

fn steps(from: Square, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .collect()
}
